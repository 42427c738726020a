//! shotdiff core - Basic data structures for screenshot regression testing
//!
//! This crate provides the pieces every other shotdiff crate builds on:
//!
//! - [`Rect`] / [`Size`] - Rectangle regions and image extents, with
//!   bounds clamping ([`Rect::clamp`]) and device-ratio scaling
//!   ([`Rect::scale`])
//! - [`Rgba`] - An RGBA color with a hex string codec
//! - [`Pix`] - An owned 32-bit RGBA pixel buffer supporting pixel access,
//!   cropping, rectangle fills, canvas resizing and pasting

pub mod color;
pub mod error;
pub mod pix;
pub mod rect;

pub use color::Rgba;
pub use error::{Error, Result};
pub use pix::Pix;
pub use rect::{Rect, Size};
