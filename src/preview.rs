//! Host-side panel that writes frames to PNG files
//!
//! Stands in for the hardware when working on layouts: every refresh the adapter sends
//! is unpacked and stored as `frame-NNNN-<mode>.png` in the output directory, in native
//! portrait orientation.

use std::path::{Path, PathBuf};

use crate::waveshare2::buffer;
use crate::waveshare2::{PanelDriver, UpdateMode, HEIGHT, WIDTH};

/// Errors of the preview panel
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Buffer is {0} bytes, expected {1} bytes")]
    BufferSize(usize, usize),
}

/// Panel that saves each refresh as a PNG
#[derive(Debug)]
pub struct PreviewPanel {
    dir: PathBuf,
    frame: usize,
    mode: Option<UpdateMode>,
    written: Vec<PathBuf>,
}

impl PreviewPanel {
    /// Frames go to `dir`, which is created when missing
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, PreviewError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        log::info!("Writing preview frames to {}", dir.display());
        Ok(Self {
            dir,
            frame: 0,
            mode: None,
            written: Vec::new(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Mode of the last `init`
    pub fn mode(&self) -> Option<UpdateMode> {
        self.mode
    }

    /// Files written so far, oldest first
    pub fn frames(&self) -> &[PathBuf] {
        &self.written
    }

    fn write_frame(&mut self, buffer: &[u8], kind: UpdateMode) -> Result<(), PreviewError> {
        let image = buffer::to_image(buffer, WIDTH, HEIGHT).ok_or(PreviewError::BufferSize(
            buffer.len(),
            buffer::buffer_len(WIDTH, HEIGHT),
        ))?;
        self.frame += 1;
        let path = self.dir.join(format!("frame-{:04}-{}.png", self.frame, kind));
        image.save(&path)?;
        log::debug!("Saved {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

impl PanelDriver for PreviewPanel {
    type Error = PreviewError;

    fn width(&self) -> u32 {
        WIDTH
    }

    fn height(&self) -> u32 {
        HEIGHT
    }

    fn init(&mut self, mode: UpdateMode) -> Result<(), PreviewError> {
        log::debug!("Preview panel set to {} update", mode);
        self.mode = Some(mode);
        Ok(())
    }

    fn display(&mut self, buffer: &[u8]) -> Result<(), PreviewError> {
        self.write_frame(buffer, UpdateMode::Full)
    }

    fn display_partial(&mut self, buffer: &[u8]) -> Result<(), PreviewError> {
        self.write_frame(buffer, UpdateMode::Partial)
    }
}
