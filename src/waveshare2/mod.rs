//! Waveshare 2.13" v2 ePaper display adapter
//!
//! Used in the [Waveshare 2.13inch e-Paper HAT V2](https://www.waveshare.com/wiki/2.13inch_e-Paper_HAT).
//!
//! The panel itself is driven by [epd-waveshare](https://github.com/caemor/epd-waveshare),
//! this module only decides which layout the UI uses and when the panel runs a full
//! or a partial refresh.
//!
//! ### Usage
//! 1. build the adapter with [`driver::WaveshareV2::new`] and read its [`layout::Layout`]
//! 1. connect the panel with [`panel::EpdPanel::new`] and hand it to
//!    [`driver::WaveshareV2::initialize`]
//! 1. draw onto a [`crate::canvas::Canvas`], preferably with
//!    [`embedded_graphics`](https://github.com/jamwaffles/embedded-graphics), and call
//!    [`driver::WaveshareV2::render`]
//!
//! The first render after initialization (or after [`driver::WaveshareV2::clear`]) is a
//! full refresh, every following render is a partial one.

pub mod buffer;
pub mod driver;
pub mod layout;
pub mod panel;

pub use buffer::BufferError;
pub use driver::{Error, UpdateMode, WaveshareV2};
pub use layout::{Element, FontRole, FontSizes, Layout, StatusLayout};
pub use panel::{EpdPanel, PanelDriver};

/// Name the UI uses to select this display
pub const NAME: &str = "waveshare_2";

/// Panel width, pixels horizontally in native (portrait) orientation
pub const WIDTH: u32 = 122;

/// Panel height, pixels vertically in native (portrait) orientation
pub const HEIGHT: u32 = 250;
