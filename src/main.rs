use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::PrimitiveStyle;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use waveshare2::canvas::mono_font;
use waveshare2::{Canvas, ColorMode, DisplayConfig, Layout, PreviewPanel, WaveshareV2};

/// Render the Waveshare v2 layout to PNG files instead of the panel
#[derive(Debug, Parser)]
#[command(name = "waveshare2-preview", version)]
struct Args {
    /// Panel color mode, `black` or anything else for the alternative layout
    #[arg(long, default_value = "black")]
    color: ColorMode,

    /// Directory the frames are written to
    #[arg(long, default_value = "preview")]
    output: PathBuf,

    /// Status text shown on the partial refresh frames
    #[arg(long, default_value = "Hello from the preview panel!")]
    status: String,
}

/// Wrap `text` into lines of at most `max` characters
fn wrap(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > max {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Draw every layout element with placeholder content
fn draw_ui(layout: &Layout, status: &str) -> anyhow::Result<Canvas> {
    let mut canvas = Canvas::for_layout(layout);
    let fonts = layout.fonts;
    let bold = MonoTextStyle::new(mono_font(fonts.bold), BinaryColor::On);
    let small = MonoTextStyle::new(mono_font(fonts.bold_small), BinaryColor::On);
    let huge = MonoTextStyle::new(mono_font(fonts.huge), BinaryColor::On);
    let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

    // Text is placed by its top-left corner, same as the layout coordinates
    let labels = [
        ("CH *", layout.channel, small),
        ("APS 0 (00)", layout.aps, small),
        ("UP 00:00:00", layout.uptime, small),
        ("waveshare2>", layout.name, bold),
        ("PWND 0 (00)", layout.shakes, small),
        ("AUTO", layout.mode, small),
        ("(^_^)", layout.face, huge),
    ];
    for (text, position, style) in labels {
        Text::with_baseline(text, position, style, Baseline::Top).draw(&mut canvas)?;
    }

    layout.line1.into_styled(stroke).draw(&mut canvas)?;
    layout.line2.into_styled(stroke).draw(&mut canvas)?;

    let status_style = MonoTextStyle::new(
        mono_font(fonts.size_of(layout.status.font)),
        BinaryColor::On,
    );
    let line_height = status_style.font.character_size.height as i32;
    for (i, line) in wrap(status, layout.status.max).iter().enumerate() {
        let position = layout.status.pos + Point::new(0, i as i32 * line_height);
        Text::with_baseline(line, position, status_style, Baseline::Top).draw(&mut canvas)?;
    }

    Ok(canvas)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let display = WaveshareV2::new(DisplayConfig::new(args.color));
    let layout = *display.layout();
    log::info!(
        "Layout {}x{} for color {}",
        layout.width,
        layout.height,
        display.config().color
    );

    let panel = PreviewPanel::new(&args.output)
        .with_context(|| format!("Could not prepare {}", args.output.display()))?;
    display
        .initialize(panel)
        .context("Could not initialize preview panel")?;

    let frames = [
        draw_ui(&layout, "Booting...")?,
        draw_ui(&layout, &args.status)?,
        draw_ui(&layout, "Going to sleep")?,
    ];
    for canvas in &frames {
        let mode = display
            .render(canvas.image())
            .context("Could not render frame")?;
        log::info!("Rendered frame with {} refresh", mode);
    }

    // A clear makes the next frame a full refresh again
    display.clear().context("Could not clear display")?;
    let mode = display
        .render(frames[0].image())
        .context("Could not render frame")?;
    log::info!("Rendered frame with {} refresh after clear", mode);

    if let Some(panel) = display.into_panel() {
        for path in panel.frames() {
            println!("{}", path.display());
        }
    }
    Ok(())
}
