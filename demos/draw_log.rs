//! Print the draw calls a label makes, as JSON

use std::sync::Arc;

use anyhow::Result;
use textbox::metrics_none::NoneMetrics;
use textbox::prelude::*;
use textbox::render_json::JsonSurface;

fn main() -> Result<()> {
    env_logger::init();

    let mut label = TextElement::new(
        TextConfig {
            text: Some("Overflowing label".into()),
            width: Some(BoxSizeMode::Fixed(60.0)),
            padding: Some(4.0),
            fill: Some(Color::white()),
            text_fill: Some(Color::black()),
            ..TextConfig::default()
        },
        Arc::new(NoneMetrics::new()),
    )?;

    let mut surface = JsonSurface::new();
    let layout = label.draw(&mut surface)?;
    log::info!("clipped: {}", layout.should_clip);

    println!("{}", surface.to_json_pretty()?);
    Ok(())
}
