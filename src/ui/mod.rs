//! Rendering layer.
//!
//! The popup has a single piece of content, its label, drawn with the
//! server-side core font machinery rather than any client-side rasterizer.
//!
//! # Modules
//!
//! - [`renderer`]: Transient font-GC text pipeline

pub mod renderer;

pub use renderer::{draw_label, draw_text};
