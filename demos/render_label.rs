//! Paint a framed label to a PNG
//!
//! Usage: render_label [FONT_FILE] [OUTPUT_PNG]
//!
//! With a font file the label text is measured and painted with it. Without
//! one only the frame is painted, sized as if the text were there.

use std::sync::Arc;

use anyhow::{Context, Result};
use textbox::metrics_none::NoneMetrics;
use textbox::prelude::*;
use textbox::render_skia::{FontBook, SkiaMetrics, SkiaSurface};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let font_path = args.next();
    let output = args.next().unwrap_or_else(|| "label.png".to_string());

    let mut book = FontBook::new();
    if let Some(path) = &font_path {
        book.load_file("Demo", path)
            .with_context(|| format!("loading font {path}"))?;
    }
    let book = Arc::new(book);

    let config = TextConfig {
        text: Some("Hello, textbox!".into()),
        font_family: Some("Demo".into()),
        font_size: Some(24.0),
        padding: Some(16.0),
        align: Some(Align::Center),
        vertical_align: Some(VerticalAlign::Middle),
        corner_radius: Some(10.0),
        fill: Some(Color::rgb(250, 245, 230)),
        stroke: Some(Color::rgb(90, 60, 30)),
        text_fill: Some(Color::rgb(30, 30, 30)),
        shadow: Some(Shadow {
            color: Color::rgba(0, 0, 0, 96),
            offset_x: 4.0,
            offset_y: 4.0,
            ..Shadow::default()
        }),
        ..TextConfig::default()
    };

    let metrics: Arc<dyn MetricsProvider> = if font_path.is_some() {
        Arc::new(SkiaMetrics::new(book.clone()))
    } else {
        Arc::new(NoneMetrics::new())
    };
    let mut label = TextElement::new(config, metrics)?;

    let layout = label.layout()?;
    let width = layout.box_width.ceil() as u32 + 24;
    let height = layout.box_height.ceil() as u32 + 24;
    let mut surface = SkiaSurface::new(width, height, book)?;
    surface.clear(Color::white());
    surface.translate(10.0, 10.0);

    if font_path.is_none() {
        log::warn!("no font given, painting the frame only");
        label.set_text_fill(None)?;
    }
    label.draw(&mut surface)?;

    surface.save_png(&output)?;
    println!(
        "wrote {} ({}x{}, text {:.1}x{:.1})",
        output, width, height, layout.text_width, layout.text_height
    );
    Ok(())
}
