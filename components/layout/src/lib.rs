#![no_std]
//! Layout engines for Pebble.
//!
//! Three containers, one contract. Each engine implements the two-phase
//! [`Layout`] protocol from `pebble-core` and differs only in how it turns
//! measured child sizes into rectangles:
//!
//! - [`FlowLayout`] wraps children left-to-right into rows, like inline
//!   text. Row height is the tallest child in that row.
//! - [`RadialLayout`] spaces children evenly around a circle, centering
//!   each child on its point of the circumference.
//! - [`MasonryLayout`] drops each child into the currently-shortest of K
//!   equal-width columns, producing a staggered grid.
//!
//! All engines are pure: no state survives a layout pass, and the sizing
//! and placement phases derive their decisions from the same helpers so the
//! two always agree for identical inputs.
//!
//! # Example
//!
//! ```rust,ignore
//! use pebble_layout::{FlowLayout, HorizontalAlignment};
//!
//! let layout = FlowLayout::new(8.0, HorizontalAlignment::Leading);
//! let size = layout.size_that_fits(proposal, &children);
//! let rects = layout.place(bounds, &children);
//! ```

extern crate alloc;

pub use pebble_core::{Layout, Point, ProposalSize, Rect, Size, SubView};

pub mod alignment;
pub use alignment::HorizontalAlignment;

pub mod flow;
pub use flow::FlowLayout;

pub mod radial;
pub use radial::RadialLayout;

pub mod masonry;
pub use masonry::MasonryLayout;

#[cfg(test)]
mod tests;

/// Clamps a spacing parameter to the valid range, logging the correction.
///
/// Spacing below zero has no geometric meaning, and NaN would poison every
/// cursor computation downstream; every engine funnels its spacing through
/// here so the policy stays uniform. The negated comparison is deliberate:
/// it catches NaN, which `spacing < 0.0` would wave through.
pub(crate) fn sanitize_spacing(spacing: f32) -> f32 {
    if spacing >= 0.0 {
        spacing
    } else {
        tracing::warn!(spacing = f64::from(spacing), "invalid spacing clamped to 0");
        0.0
    }
}
