//! Adapter utilities for the `reorderer` crate.
//!
//! The `reorderer` crate is UI-agnostic and answers a single question per call. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A drag controller that threads the impact and page center between moves
//! - Scroll-jump bookkeeping for droppables inside scroll containers
//! - Drop results and an in-place `reorder` helper to apply them
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod drop;
mod options;

#[cfg(test)]
mod tests;

pub use controller::{ActiveDrag, Controller};
pub use drop::{DropReason, DropResult, reorder};
pub use options::{ControllerOptions, OnChangeCallback, ScrollJumpCallback};
