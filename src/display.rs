//! Contract between the UI and a display implementation

use image::GrayImage;

use crate::waveshare2::Layout;

/// A display the UI can draw on
///
/// The UI reads [`EpaperDisplay::layout`] to place its elements, draws a canvas of
/// `layout().width x layout().height` and hands it to [`EpaperDisplay::render`].
pub trait EpaperDisplay {
    /// Error type for display operations
    type Error: std::error::Error;

    /// Name used to select the display in the configuration
    fn name(&self) -> &'static str;

    /// Coordinates of every UI element
    fn layout(&self) -> &Layout;

    /// Push a rendered canvas to the panel
    fn render(&self, canvas: &GrayImage) -> Result<(), Self::Error>;

    /// Make the next render a full refresh
    fn clear(&self) -> Result<(), Self::Error>;
}
