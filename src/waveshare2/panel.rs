//! Panel controller
//!
//! [`PanelDriver`] is everything the adapter needs from the hardware: switch between
//! full and partial refresh, and push a packed buffer with either kind of refresh.
//! [`EpdPanel`] implements it on top of the `epd-waveshare` driver for the 2.13" v2.

pub use display_interface::DisplayError;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;
use epd_waveshare::epd2in13_v2::Epd2in13;
use epd_waveshare::prelude::{RefreshLut, WaveshareDisplay};
use image::GrayImage;

use crate::waveshare2::buffer::{self, BufferError};
use crate::waveshare2::{HEIGHT, WIDTH};

/// Refresh mode the panel is initialised for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Whole panel is cleared and redrawn, slow but without ghosting
    Full,
    /// Only changed pixels are driven
    Partial,
}

impl std::fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateMode::Full => write!(f, "full"),
            UpdateMode::Partial => write!(f, "partial"),
        }
    }
}

/// Hardware side of the display
pub trait PanelDriver {
    /// Error reported by the hardware
    type Error: core::fmt::Debug;

    /// Native width in pixels
    fn width(&self) -> u32;

    /// Native height in pixels
    fn height(&self) -> u32;

    /// (Re)initialise the panel for the given refresh mode
    fn init(&mut self, mode: UpdateMode) -> Result<(), Self::Error>;

    /// Write the buffer and run a full refresh
    fn display(&mut self, buffer: &[u8]) -> Result<(), Self::Error>;

    /// Write the buffer and run a partial refresh
    fn display_partial(&mut self, buffer: &[u8]) -> Result<(), Self::Error>;

    /// Convert a canvas into the buffer layout this panel expects
    fn get_buffer(&self, canvas: &GrayImage) -> Result<Vec<u8>, BufferError> {
        buffer::get_buffer(canvas, self.width(), self.height())
    }
}

/// Waveshare 2.13" v2 connected over SPI
///
/// ## Type Parameters
///
/// - `SPI` - SPI device for communication
/// - `BUSY` - BUSY input pin (HIGH when display is busy)
/// - `DC` - Data/Command output pin
/// - `RST` - Reset output pin
/// - `DELAY` - Delay provider for timing
pub struct EpdPanel<SPI, BUSY, DC, RST, DELAY> {
    epd: Epd2in13<SPI, BUSY, DC, RST, DELAY>,
    spi: SPI,
    delay: DELAY,
    /// Waveform the driver is set up for, `Epd2in13::new` starts with the full one
    lut: RefreshLut,
}

fn bus_error<E: core::fmt::Debug>(operation: &'static str) -> impl FnOnce(E) -> DisplayError {
    move |e| {
        log::error!("SPI error during {}: {:?}", operation, e);
        DisplayError::BusWriteError
    }
}

impl<SPI, BUSY, DC, RST, DELAY> EpdPanel<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Create the controller, this resets and initialises the panel
    pub fn new(
        mut spi: SPI,
        busy: BUSY,
        dc: DC,
        rst: RST,
        mut delay: DELAY,
    ) -> Result<Self, DisplayError> {
        log::info!("Connecting to Waveshare 2.13\" v2 panel");
        let epd = Epd2in13::new(&mut spi, busy, dc, rst, &mut delay, None)
            .map_err(bus_error("panel init"))?;
        Ok(Self {
            epd,
            spi,
            delay,
            lut: RefreshLut::Full,
        })
    }

    /// Put the panel into deep sleep, the next [`PanelDriver::init`] wakes it up
    pub fn sleep(&mut self) -> Result<(), DisplayError> {
        log::info!("Putting display into deep sleep mode");
        self.epd
            .sleep(&mut self.spi, &mut self.delay)
            .map_err(bus_error("sleep"))
    }

    /// Give the bus and pins back
    pub fn release(self) -> (Epd2in13<SPI, BUSY, DC, RST, DELAY>, SPI, DELAY) {
        (self.epd, self.spi, self.delay)
    }
}

impl<SPI, BUSY, DC, RST, DELAY> PanelDriver for EpdPanel<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    type Error = DisplayError;

    fn width(&self) -> u32 {
        WIDTH
    }

    fn height(&self) -> u32 {
        HEIGHT
    }

    fn init(&mut self, mode: UpdateMode) -> Result<(), DisplayError> {
        let lut = match mode {
            UpdateMode::Full => RefreshLut::Full,
            UpdateMode::Partial => RefreshLut::Quick,
        };
        if lut == self.lut {
            // Hardware reset and controller setup with the current waveform
            return self
                .epd
                .wake_up(&mut self.spi, &mut self.delay)
                .map_err(bus_error("panel init"));
        }

        // A waveform change resets and sets up the controller by itself. The driver
        // records the new waveform before the reset, even when the reset fails.
        self.lut = lut;
        self.epd
            .set_refresh(&mut self.spi, &mut self.delay, lut)
            .map_err(bus_error("refresh mode switch"))
    }

    fn display(&mut self, buffer: &[u8]) -> Result<(), DisplayError> {
        self.epd
            .update_and_display_frame(&mut self.spi, buffer, &mut self.delay)
            .map_err(bus_error("full refresh"))
    }

    fn display_partial(&mut self, buffer: &[u8]) -> Result<(), DisplayError> {
        // The controller is in quick refresh mode here, so the same transfer drives
        // only the pixels that differ from the previous frame
        self.epd
            .update_and_display_frame(&mut self.spi, buffer, &mut self.delay)
            .map_err(bus_error("partial refresh"))
    }
}
