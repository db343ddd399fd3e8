#![doc = include_str!("../README.md")]
#![no_std]

pub use pebble_layout as layout;

#[doc(inline)]
pub use pebble_core::{Layout, Point, ProposalSize, Rect, Size, SubView};

#[doc(inline)]
pub use pebble_layout::{FlowLayout, HorizontalAlignment, MasonryLayout, RadialLayout};

pub mod prelude {
    //! Commonly used types for easy importing.
    //!
    //! ```rust,ignore
    //! use pebble::prelude::*;
    //! ```

    pub use pebble_core::{Layout, Point, ProposalSize, Rect, Size, SubView};
    pub use pebble_layout::{FlowLayout, HorizontalAlignment, MasonryLayout, RadialLayout};
}
