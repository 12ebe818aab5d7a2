//! Disk usage as a character canvas.
//!
//! A [`scanner::Scanner`] walks a directory into a [`model::FileTree`], a
//! [`style::StyleManager`] gives every extension a glyph and color, and the
//! canvas is painted either as a [`treemap`] of the tree or as a [`mosaic`] of
//! extension totals. [`app::run`] ties it together.

pub mod app;
pub mod canvas;
pub mod category;
pub mod cli;
pub mod color;
pub mod error;
pub mod model;
pub mod mosaic;
pub mod ranking;
pub mod report;
pub mod scanner;
pub mod settings;
pub mod style;
pub mod treemap;

pub use error::{Error, Result};
