//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic: whenever the viewport should move it returns an
//! `OffsetRequest` and leaves the animation to the host. This crate provides small,
//! framework-neutral helpers for that part:
//!
//! - Tween-based offset animation with a few easing curves
//! - A [`Driver`] that applies requests, ticks the tween and reports completion back
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod driver;
mod tween;

#[cfg(test)]
mod tests;

pub use driver::Driver;
pub use tween::{Easing, Tween};
