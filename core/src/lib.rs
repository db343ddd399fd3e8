#![no_std]
//! Core contract for the Pebble layout engine.
//!
//! Layout in Pebble is a two-phase negotiation between a container and an
//! opaque collection of children:
//!
//! 1. **Sizing** — the container receives a [`ProposalSize`] from its host,
//!    queries each child through [`SubView::size_that_fits`], and reports the
//!    [`Size`] it needs.
//! 2. **Placement** — the host hands the container its final bounds
//!    [`Rect`], and the container returns one rectangle per child.
//!
//! Both phases are pure: engines hold no state between passes, and the host
//! may invoke either phase any number of times, in any order.
//!
//! This crate defines only the contract ([`Layout`], [`SubView`]) and the
//! geometry vocabulary ([`Point`], [`Size`], [`Rect`], [`ProposalSize`]).
//! The concrete engines live in `pebble-layout`.

extern crate alloc;

pub mod geometry;
pub mod layout;

pub use geometry::{Point, ProposalSize, Rect, Size};
pub use layout::{Layout, SubView};
