//! Column-balancing masonry layout.

use alloc::vec;
use alloc::vec::Vec;
use core::num::NonZeroUsize;

use crate::{Layout, Point, ProposalSize, Rect, Size, SubView};

/// Distributes children into K equal-width columns, balancing column height.
///
/// Each child in turn is dropped into the currently-shortest column - a
/// greedy heuristic, not an optimal partition. Ties break toward the lowest
/// index, so the leftmost of equally short columns wins. Because every
/// decision depends on the heights accumulated so far, insertion order is
/// part of the layout's meaning and is always preserved.
///
/// Children are measured with their width constrained to the column width
/// and an unconstrained height. The reported size is `(proposed width,
/// tallest column)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MasonryLayout {
    columns: NonZeroUsize,
    spacing: f32,
}

impl MasonryLayout {
    /// Creates a masonry layout with the given number of columns.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is 0.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self::with_columns(NonZeroUsize::new(columns).expect("Masonry columns must be greater than 0"))
    }

    /// Creates a masonry layout from an already-validated column count.
    #[must_use]
    pub const fn with_columns(columns: NonZeroUsize) -> Self {
        Self {
            columns,
            spacing: 8.0,
        }
    }

    /// Sets the gap between columns and between items within a column.
    ///
    /// Negative spacing is clamped to 0.
    #[must_use]
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = crate::sanitize_spacing(spacing);
        self
    }

    /// Width of one column for the given total width.
    #[allow(clippy::cast_precision_loss)]
    fn column_width(&self, total: f32) -> f32 {
        let count = self.columns.get();
        let gaps = self.spacing * (count - 1) as f32;
        ((total - gaps) / count as f32).max(0.0)
    }

    /// Vertical offset at which the next item lands in `column`, including
    /// the spacing gap when the column already has content.
    fn drop_offset(&self, height: f32) -> f32 {
        if height > 0.0 { height + self.spacing } else { 0.0 }
    }
}

/// Index of the shortest column, lowest index winning ties.
///
/// Both layout phases route their column choice through this scan, which is
/// what keeps their assignments in agreement.
fn shortest_column(heights: &[f32]) -> usize {
    let mut shortest = 0;
    for (index, &height) in heights.iter().enumerate().skip(1) {
        if height < heights[shortest] {
            shortest = index;
        }
    }
    shortest
}

#[allow(clippy::cast_precision_loss)]
impl Layout for MasonryLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        if children.is_empty() {
            return Size::zero();
        }

        let column_width = proposal.width.map(|w| self.column_width(w));
        let child_proposal = ProposalSize::new(column_width, None);

        let mut heights = vec![0.0f32; self.columns.get()];
        for child in children {
            let measured = child.size_that_fits(child_proposal);
            let child_height = if measured.height.is_finite() {
                measured.height
            } else {
                0.0
            };
            let column = shortest_column(&heights);
            let offset = self.drop_offset(heights[column]);
            heights[column] = offset + child_height;
        }

        let tallest = heights.iter().copied().fold(0.0, f32::max);

        // Masonry has no intrinsic width; like a grid, it echoes the parent's.
        Size::new(proposal.width.unwrap_or(0.0), tallest)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        if children.is_empty() {
            return Vec::new();
        }

        let column_width = self.column_width(bounds.width());
        let child_proposal = ProposalSize::new(Some(column_width), None);

        let mut heights = vec![0.0f32; self.columns.get()];
        let mut rects = Vec::with_capacity(children.len());

        for child in children {
            let measured = child.size_that_fits(child_proposal);
            let child_height = if measured.height.is_finite() {
                measured.height
            } else {
                0.0
            };

            let column = shortest_column(&heights);
            let offset = self.drop_offset(heights[column]);

            let origin = Point::new(
                bounds.min_x() + (column as f32) * (column_width + self.spacing),
                bounds.min_y() + offset,
            );
            rects.push(Rect::new(origin, Size::new(column_width, child_height)));

            heights[column] = offset + child_height;
        }

        rects
    }
}
