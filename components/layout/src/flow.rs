//! Row-wrapping flow layout.

use alloc::vec::Vec;

use crate::{HorizontalAlignment, Layout, Point, ProposalSize, Rect, Size, SubView};

/// Wraps children left-to-right into rows, like inline text.
///
/// Children are measured at their natural size and appended to the current
/// row until the next child would overflow the available width, at which
/// point a new row starts. A child wider than the available width still gets
/// a row of its own; nothing is ever dropped. Row height is the tallest
/// child in that row, and children are vertically centered within it.
///
/// The reported size is `(proposed width, sum of row heights + spacing
/// between rows)`. With an unconstrained width proposal everything lands on
/// one row and the reported width is that row's content width.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowLayout {
    spacing: f32,
    alignment: HorizontalAlignment,
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self {
            spacing: 8.0,
            alignment: HorizontalAlignment::Leading,
        }
    }
}

impl FlowLayout {
    /// Creates a flow layout with the given spacing and row alignment.
    ///
    /// Negative spacing is clamped to 0.
    #[must_use]
    pub fn new(spacing: f32, alignment: HorizontalAlignment) -> Self {
        Self {
            spacing: crate::sanitize_spacing(spacing),
            alignment,
        }
    }

    /// Sets the gap between children and between rows.
    ///
    /// Negative spacing is clamped to 0.
    #[must_use]
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = crate::sanitize_spacing(spacing);
        self
    }

    /// Sets the horizontal alignment of each row within the bounds.
    #[must_use]
    pub const fn alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Groups measured children into rows against the given width limit.
    ///
    /// Both layout phases call this with freshly measured sizes, so row
    /// membership is identical across phases for size-stable children.
    fn build_rows(&self, sizes: &[Size], limit: f32) -> Vec<Row> {
        let mut rows = Vec::new();
        let mut start = 0;
        let mut cursor = 0.0f32;
        let mut height = 0.0f32;

        for (index, size) in sizes.iter().enumerate() {
            // Wrap only when the row already holds a child; an oversized
            // child occupies a row alone rather than being dropped.
            if index > start && cursor + size.width > limit {
                rows.push(Row {
                    start,
                    end: index,
                    content_width: cursor - self.spacing,
                    height,
                });
                start = index;
                cursor = 0.0;
                height = 0.0;
            }
            cursor += size.width + self.spacing;
            if size.height.is_finite() {
                height = height.max(size.height);
            }
        }

        if start < sizes.len() {
            rows.push(Row {
                start,
                end: sizes.len(),
                content_width: cursor - self.spacing,
                height,
            });
        }

        rows
    }
}

/// One visual line of children, identified by an index range into the
/// measured sizes. Lives only for the duration of a layout pass.
struct Row {
    start: usize,
    end: usize,
    content_width: f32,
    height: f32,
}

#[allow(clippy::cast_precision_loss)]
impl Layout for FlowLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        if children.is_empty() {
            return Size::zero();
        }

        let sizes: Vec<Size> = children
            .iter()
            .map(|child| child.size_that_fits(ProposalSize::UNSPECIFIED))
            .collect();

        let limit = proposal
            .width
            .filter(|w| w.is_finite())
            .unwrap_or(f32::INFINITY);
        let rows = self.build_rows(&sizes, limit);

        let rows_height: f32 = rows.iter().map(|row| row.height).sum();
        let total_height = rows_height + self.spacing * (rows.len().saturating_sub(1)) as f32;

        // An unconstrained proposal yields a single row, which does have an
        // intrinsic width; report it instead of echoing the missing limit.
        let width = proposal.width.filter(|w| w.is_finite()).unwrap_or_else(|| {
            rows.iter()
                .map(|row| row.content_width)
                .fold(0.0, f32::max)
        });

        Size::new(width, total_height)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        if children.is_empty() {
            return Vec::new();
        }

        let sizes: Vec<Size> = children
            .iter()
            .map(|child| child.size_that_fits(ProposalSize::UNSPECIFIED))
            .collect();

        let rows = self.build_rows(&sizes, bounds.width());

        let mut rects = Vec::with_capacity(children.len());
        let mut row_y = bounds.min_y();

        for row in &rows {
            let mut cursor = match self.alignment {
                HorizontalAlignment::Leading => bounds.min_x(),
                HorizontalAlignment::Center => {
                    bounds.min_x() + (bounds.width() - row.content_width) / 2.0
                }
                HorizontalAlignment::Trailing => bounds.max_x() - row.content_width,
            };

            for size in &sizes[row.start..row.end] {
                let y = row_y + (row.height - size.height) / 2.0;
                rects.push(Rect::new(Point::new(cursor, y), *size));
                cursor += size.width + self.spacing;
            }

            row_y += row.height + self.spacing;
        }

        rects
    }
}
