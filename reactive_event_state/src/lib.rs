// Copyright 2025 the Reactive Image Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reactive Event State: gesture state machines for zoomable image views.
//!
//! This crate turns a serialized stream of decoded pointer samples into the
//! handful of gestures an image viewer cares about. Each module handles one
//! interaction pattern:
//!
//! - [`pointer`]: the sample type (action, positions of all active pointers, timestamp)
//! - [`drag`]: averaged multi-pointer movement deltas gated by a touch slop
//! - [`pinch`]: incremental scale factors and focus points from pointer spans
//! - [`tap`]: confirmed single taps and double-taps with timing windows
//!
//! [`GestureRecognizer`] composes all three behind a single entry point.
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Clock-free**: Time arrives with the samples; confirmation deadlines are
//!   reported, never waited on
//! - **Transform-agnostic**: Gestures are expressed in view coordinates; what a
//!   drag or pinch does to an image is decided by the caller
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use reactive_event_state::{GestureEvent, GestureRecognizer};
//! use reactive_event_state::pointer::{PointerAction, PointerEvent};
//!
//! let mut gestures = GestureRecognizer::default();
//!
//! gestures.on_event(&PointerEvent::single(PointerAction::Down, Point::new(10.0, 10.0), 0));
//! let events = gestures.on_event(&PointerEvent::single(PointerAction::Move, Point::new(30.0, 10.0), 16));
//! assert_eq!(events.as_slice(), &[GestureEvent::Drag(Vec2::new(20.0, 0.0))]);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod pinch;
pub mod pointer;
pub mod tap;

mod config;
mod recognizer;

pub use config::GestureConfig;
pub use recognizer::{GestureEvent, GestureEvents, GestureRecognizer};
