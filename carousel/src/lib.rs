//! A headless engine for infinitely looping, horizontally scrolling carousels.
//!
//! For host-side helpers (offset tweens, a gesture/animation driver), see the
//! `carousel-adapter` crate.
//!
//! This crate focuses on the parts of a carousel that are pure state and arithmetic: the
//! tripled index space that fakes endless scrolling, lazy materialization of item content,
//! layout under several resize policies, hit-testing, and the drag → settle → select state
//! machine.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport size
//! - scroll offset updates and resolved gestures (drag deltas, release velocity, tap points)
//! - animation of requested offsets, reporting completion back
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod error;
pub mod hit;
pub mod index;
mod key;
mod layout;
mod observer;
mod options;
mod selection;
mod state;
mod store;
mod types;


pub use carousel::Carousel;
pub use error::CarouselError;
pub use layout::{FLING_VELOCITY_DIVISOR, Layout, LayoutEngine};
pub use observer::CarouselObserver;
pub use options::{CarouselOptions, ResizePolicy, ScrollPolicy};
pub use selection::{SelectionChange, SelectionController};
pub use state::{Phase, SelectionState, ViewportState};
pub use store::{ItemContent, ItemFactory, ItemStore, MaterializedItem};
pub use types::{Frame, OffsetRequest, Point, Size};
