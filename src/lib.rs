//! Waveshare 2.13" v2 e-paper display adapter
//!
//! Places the UI elements for the panel's color mode, switches the panel between full
//! and partial refresh, and forwards rendered canvases to the
//! [epd-waveshare](https://github.com/caemor/epd-waveshare) driver.
//!
//! For a complete example see `src/main.rs`, which renders the layout through
//! [`preview::PreviewPanel`] instead of real hardware.
#![allow(clippy::must_use_candidate)]

pub mod canvas;
pub mod config;
pub mod display;
pub mod preview;
pub mod waveshare2;

pub use crate::canvas::Canvas;
pub use crate::config::{ColorMode, DisplayConfig};
pub use crate::display::EpaperDisplay;
pub use crate::preview::PreviewPanel;
pub use crate::waveshare2::{EpdPanel, Error, Layout, PanelDriver, UpdateMode, WaveshareV2};
