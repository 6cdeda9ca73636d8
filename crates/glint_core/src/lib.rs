//! # GLINT Core
//!
//! Leaf primitives shared by every GLINT layer: integer screen geometry,
//! packed RGB565 color, frame-stable widget identity and the 8.8 fixed-point
//! scale factor.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - a display driver or painter
//! - a logging or configuration-file crate
//! - anything that allocates
//!
//! If you need drawing, put it in `glint_ui`.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod color;
pub mod fixed;
pub mod geometry;
pub mod id;

pub use color::{rgb565, Rgb565};
pub use fixed::Scale;
pub use geometry::{saturate_i16, saturate_u16, Extent, Point, Rect};
pub use id::{fnv1a, hash_label, mix, IdStack, WidgetId};
