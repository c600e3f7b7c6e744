//! Core engine types and utilities for the neutrality slideshow.
//!
//! This crate provides the foundational types used across all systems:
//! - Frame timing on a millisecond timeline
//! - Cancellable one-shot deadlines
//! - Common 2D component types for ECS

pub mod components;
pub mod time;
pub mod timer;

pub use components::*;
pub use time::*;
pub use timer::*;

// Re-export commonly used types
pub use glam::Vec2;
pub use hecs::{Entity, World};
