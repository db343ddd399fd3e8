//! Horizontal alignment options shared by row-based engines.

/// Horizontal alignment of content within the available width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    /// Align content to the leading (left in LTR) edge.
    #[default]
    Leading,
    /// Center content horizontally.
    Center,
    /// Align content to the trailing (right in LTR) edge.
    Trailing,
}
