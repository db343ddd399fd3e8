//! The two-phase layout contract.
//!
//! A [`Layout`] never touches concrete view types. It talks to its children
//! exclusively through the [`SubView`] proxy, which keeps engines reusable
//! across hosts: anything that can answer a size query can be laid out.

use core::fmt::Debug;

use alloc::vec::Vec;

use crate::geometry::{ProposalSize, Rect, Size};

/// A proxy for querying child view sizes during layout.
///
/// Implementations must be pure: calling [`size_that_fits`] twice with the
/// same proposal within one layout pass returns the same answer, and the
/// call has no side effects. Engines rely on this to keep their sizing and
/// placement phases in agreement, since hosts may run either phase multiple
/// times or out of lockstep.
///
/// [`size_that_fits`]: SubView::size_that_fits
pub trait SubView {
    /// Query the child's size for a given proposal.
    ///
    /// Engines may call this multiple times with different proposals to
    /// probe the child's flexibility:
    ///
    /// - `ProposalSize::UNSPECIFIED` - ideal/intrinsic size
    /// - `ProposalSize::new(Some(w), None)` - width-constrained size
    fn size_that_fits(&self, proposal: ProposalSize) -> Size;
}

/// A layout algorithm for arranging child views.
///
/// # Two-phase protocol
///
/// 1. **Sizing** ([`size_that_fits`](Self::size_that_fits)): given the
///    parent's proposal, report the size this container needs.
/// 2. **Placement** ([`place`](Self::place)): given the final bounds, return
///    one [`Rect`] per child, in child order. The host commits each rect to
///    the corresponding child.
///
/// # Consistency
///
/// For identical inputs, the size reported by the first phase must contain
/// every rectangle produced by the second, and repeated calls to either
/// phase must return identical results. Engines therefore keep no state
/// between invocations and cache nothing across passes.
pub trait Layout: Debug {
    /// Calculates the size this layout wants given a proposal.
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size;

    /// Places children within the given bounds.
    ///
    /// Returns exactly `children.len()` rectangles, the i-th rectangle
    /// belonging to the i-th child. An empty child slice yields an empty
    /// vector.
    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect>;
}
