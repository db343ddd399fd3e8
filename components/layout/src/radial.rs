//! Circular layout that spreads children around a ring.

use alloc::vec::Vec;

use crate::{Layout, Point, ProposalSize, Rect, Size, SubView};

/// Places N children evenly spaced around a circle.
///
/// Child i sits at `start_angle + i * (360 / N)` degrees, measured clockwise
/// from three o'clock (y grows downward). Each child is measured at its
/// natural size and positioned so its *center* lands on the circumference.
///
/// The reported size is always the circle's bounding square, `(2r, 2r)`,
/// regardless of how many children there are - the radius stays meaningful
/// even with no content.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadialLayout {
    radius: f32,
    start_angle: f32,
}

impl RadialLayout {
    /// Creates a radial layout with the given radius, starting at 0°.
    ///
    /// A non-positive radius is clamped to 0, collapsing the ring onto the
    /// bounds center.
    #[must_use]
    pub fn new(radius: f32) -> Self {
        Self {
            radius: sanitize_radius(radius),
            start_angle: 0.0,
        }
    }

    /// Sets the radius of the circle children are placed on.
    ///
    /// A non-positive radius is clamped to 0.
    #[must_use]
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = sanitize_radius(radius);
        self
    }

    /// Sets the angle of the first child, in degrees.
    #[must_use]
    pub const fn start_angle(mut self, degrees: f32) -> Self {
        self.start_angle = degrees;
        self
    }
}

// Negated comparison so NaN falls into the clamp arm too.
fn sanitize_radius(radius: f32) -> f32 {
    if radius > 0.0 {
        radius
    } else {
        tracing::warn!(radius = f64::from(radius), "invalid radius clamped to 0");
        0.0
    }
}

#[allow(clippy::cast_precision_loss)]
impl Layout for RadialLayout {
    fn size_that_fits(&self, _proposal: ProposalSize, _children: &[&dyn SubView]) -> Size {
        Size::new(self.radius * 2.0, self.radius * 2.0)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        if children.is_empty() {
            return Vec::new();
        }

        let center = bounds.center();
        let step = 360.0 / children.len() as f32;

        children
            .iter()
            .enumerate()
            .map(|(index, child)| {
                let size = child.size_that_fits(ProposalSize::UNSPECIFIED);
                let angle = (self.start_angle + index as f32 * step).to_radians();
                let origin = Point::new(
                    center.x + self.radius * libm::cosf(angle) - size.width / 2.0,
                    center.y + self.radius * libm::sinf(angle) - size.height / 2.0,
                );
                Rect::new(origin, size)
            })
            .collect()
    }
}
