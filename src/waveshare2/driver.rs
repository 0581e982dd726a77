//! Waveshare v2 display adapter
//!
//! [`WaveshareV2`] owns the panel behind a lock and tracks which refresh mode the panel
//! is initialised for:
//!
//! - [`WaveshareV2::initialize`] stores the panel and switches it to full refresh
//! - [`WaveshareV2::render`] writes with a full refresh and then switches to partial
//!   refresh, or writes with a partial refresh when already switched
//! - [`WaveshareV2::clear`] switches back to full refresh
//!
//! A failed write or mode switch leaves the recorded mode as it was, so a failed full
//! refresh is retried as a full refresh on the next render.

use std::sync::{Mutex, MutexGuard};

use image::GrayImage;

use crate::config::DisplayConfig;
use crate::display::EpaperDisplay;
use crate::waveshare2::buffer::BufferError;
use crate::waveshare2::layout::Layout;
use crate::waveshare2::panel::PanelDriver;
use crate::waveshare2::NAME;

pub use crate::waveshare2::panel::UpdateMode;

/// Errors of the display adapter, `E` is the panel error
#[derive(Debug, thiserror::Error)]
pub enum Error<E: core::fmt::Debug> {
    /// [`WaveshareV2::initialize`] has not been called yet
    #[error("display has not been initialized")]
    NotInitialized,

    /// A thread panicked while holding the panel
    #[error("display lock poisoned")]
    Poisoned,

    /// The canvas does not fit the panel
    #[error(transparent)]
    Canvas(#[from] BufferError),

    /// The panel driver failed, passed on unchanged
    #[error("panel error: {0:?}")]
    Driver(E),
}

struct PanelState<P> {
    panel: P,
    mode: UpdateMode,
}

impl<P: PanelDriver> PanelState<P> {
    fn set_full_update(&mut self) -> Result<(), Error<P::Error>> {
        log::debug!("Switching panel to full update");
        self.panel.init(UpdateMode::Full).map_err(Error::Driver)?;
        self.mode = UpdateMode::Full;
        Ok(())
    }

    fn set_part_update(&mut self) -> Result<(), Error<P::Error>> {
        log::debug!("Switching panel to partial update");
        self.panel.init(UpdateMode::Partial).map_err(Error::Driver)?;
        self.mode = UpdateMode::Partial;
        Ok(())
    }
}

/// Display adapter for the Waveshare 2.13" v2
pub struct WaveshareV2<P> {
    config: DisplayConfig,
    layout: Layout,
    state: Mutex<Option<PanelState<P>>>,
}

impl<P: PanelDriver> WaveshareV2<P> {
    /// Build the adapter, the layout is fixed from here on
    pub fn new(config: DisplayConfig) -> Self {
        let layout = Layout::for_color(&config.color);
        log::debug!(
            "Using {}x{} layout for color {}",
            layout.width,
            layout.height,
            config.color
        );
        Self {
            config,
            layout,
            state: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Coordinates of every UI element for the configured color mode
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<PanelState<P>>>, Error<P::Error>> {
        self.state.lock().map_err(|_| Error::Poisoned)
    }

    /// Take over a connected panel and prepare it for a full refresh
    ///
    /// A panel that was initialised before is replaced. The panel is kept even when
    /// the first mode switch fails, the next [`WaveshareV2::clear`] retries it.
    pub fn initialize(&self, panel: P) -> Result<(), Error<P::Error>> {
        log::info!("initializing waveshare v2 display");
        let mut guard = self.lock()?;
        let state = guard.insert(PanelState {
            panel,
            mode: UpdateMode::Full,
        });
        state.set_full_update()
    }

    /// Send a canvas to the panel, returns the kind of refresh that was used
    pub fn render(&self, canvas: &GrayImage) -> Result<UpdateMode, Error<P::Error>> {
        let mut guard = self.lock()?;
        let state = guard.as_mut().ok_or(Error::NotInitialized)?;
        let buffer = state.panel.get_buffer(canvas)?;

        match state.mode {
            UpdateMode::Full => {
                log::debug!("Full refresh with {} bytes", buffer.len());
                state.panel.display(&buffer).map_err(Error::Driver)?;
                state.set_part_update()?;
                Ok(UpdateMode::Full)
            }
            UpdateMode::Partial => {
                log::trace!("Partial refresh with {} bytes", buffer.len());
                state.panel.display_partial(&buffer).map_err(Error::Driver)?;
                Ok(UpdateMode::Partial)
            }
        }
    }

    /// Switch back to full refresh, the next render redraws the whole panel
    pub fn clear(&self) -> Result<(), Error<P::Error>> {
        let mut guard = self.lock()?;
        guard
            .as_mut()
            .ok_or(Error::NotInitialized)?
            .set_full_update()
    }

    /// Mode the next render will use, `None` before initialization. Fails with
    /// [`Error::Poisoned`] like every other call once a thread panicked holding the panel.
    pub fn mode(&self) -> Result<Option<UpdateMode>, Error<P::Error>> {
        Ok(self.lock()?.as_ref().map(|state| state.mode))
    }

    /// Give the panel back
    pub fn into_panel(self) -> Option<P> {
        self.state
            .into_inner()
            .ok()
            .flatten()
            .map(|state| state.panel)
    }
}

impl<P> EpaperDisplay for WaveshareV2<P>
where
    P: PanelDriver,
    P::Error: 'static,
{
    type Error = Error<P::Error>;

    fn name(&self) -> &'static str {
        NAME
    }

    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn render(&self, canvas: &GrayImage) -> Result<(), Self::Error> {
        WaveshareV2::render(self, canvas).map(|_| ())
    }

    fn clear(&self) -> Result<(), Self::Error> {
        WaveshareV2::clear(self)
    }
}
