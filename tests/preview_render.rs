//! End to end: configuration -> layout -> canvas -> adapter -> preview panel
//!
//! Run with: cargo test --test preview_render

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::PrimitiveStyle;

use waveshare2::{
    Canvas, ColorMode, DisplayConfig, EpaperDisplay, Error, Layout, PreviewPanel, UpdateMode,
    WaveshareV2,
};

fn config(json: &str) -> DisplayConfig {
    serde_json::from_str(json).expect("valid display config")
}

fn file_names(panel: &PreviewPanel) -> Vec<String> {
    panel
        .frames()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn config_selects_layout() {
    let black: WaveshareV2<PreviewPanel> = WaveshareV2::new(config(r#"{"color": "black"}"#));
    assert_eq!(*black.layout(), Layout::BLACK);

    let red: WaveshareV2<PreviewPanel> = WaveshareV2::new(config(r#"{"color": "red"}"#));
    assert_eq!(red.config().color, ColorMode::Other("red".into()));
    assert_eq!(*red.layout(), Layout::OTHER);

    // Missing color falls back to black
    let default: WaveshareV2<PreviewPanel> = WaveshareV2::new(config("{}"));
    assert_eq!(*default.layout(), Layout::BLACK);
}

#[test]
fn config_serializes_color_as_plain_string() {
    let json = serde_json::to_string(&DisplayConfig::new(ColorMode::Black)).unwrap();
    assert_eq!(json, r#"{"color":"black"}"#);
}

#[test]
fn refresh_cycle_through_preview_panel() {
    let dir = tempfile::tempdir().unwrap();
    let display = WaveshareV2::new(DisplayConfig::default());
    display
        .initialize(PreviewPanel::new(dir.path()).unwrap())
        .unwrap();

    let mut canvas = Canvas::for_layout(display.layout());
    display
        .layout()
        .line1
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(&mut canvas)
        .unwrap();

    assert_eq!(display.render(canvas.image()).unwrap(), UpdateMode::Full);
    assert_eq!(display.render(canvas.image()).unwrap(), UpdateMode::Partial);
    EpaperDisplay::clear(&display).unwrap();
    EpaperDisplay::render(&display, canvas.image()).unwrap();

    let panel = display.into_panel().unwrap();
    assert_eq!(
        file_names(&panel),
        [
            "frame-0001-full.png",
            "frame-0002-partial.png",
            "frame-0003-full.png"
        ]
    );

    // The landscape line1 at y = 14 is panel column 14 in portrait orientation
    let frame = image::open(&panel.frames()[0]).unwrap().to_luma8();
    assert_eq!(frame.dimensions(), (122, 250));
    assert_eq!(frame.get_pixel(14, 0).0[0], 0);
    assert_eq!(frame.get_pixel(14, 249).0[0], 0);
    assert_eq!(frame.get_pixel(13, 100).0[0], 255);
}

#[test]
fn alternative_layout_reaches_the_panel() {
    let dir = tempfile::tempdir().unwrap();
    let display = WaveshareV2::new(DisplayConfig::new(ColorMode::Other("red".into())));
    display
        .initialize(PreviewPanel::new(dir.path()).unwrap())
        .unwrap();

    let mut canvas = Canvas::for_layout(display.layout());
    Pixel(Point::new(0, 0), BinaryColor::On)
        .draw(&mut canvas)
        .unwrap();
    display.render(canvas.image()).unwrap();

    let panel = display.into_panel().unwrap();
    let frame = image::open(&panel.frames()[0]).unwrap().to_luma8();
    assert_eq!(frame.get_pixel(0, 249).0[0], 0);
}

#[test]
fn render_before_initialize_is_an_error() {
    let display: WaveshareV2<PreviewPanel> = WaveshareV2::new(DisplayConfig::default());
    let canvas = Canvas::for_layout(display.layout());
    let err = display.render(canvas.image()).unwrap_err();
    assert!(matches!(err, Error::NotInitialized));
    assert_eq!(err.to_string(), "display has not been initialized");
}
