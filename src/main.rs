use anyhow::{Context, Result};
use clap::Parser;
use fontdue::{Font, FontSettings};
use winit::event_loop::EventLoop;

use plotwidgets::cli::CliArgs;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    plotwidgets::tracing::init();

    let args = CliArgs::parse();
    let widget_config = args.load_widget_config();
    let startup = args
        .into_config(widget_config)
        .map_err(|e| anyhow::anyhow!(e))?;

    let font_path = startup.font_path().context(
        "No font found; pass --font or set `font` in config.yaml",
    )?;
    let font_bytes = std::fs::read(&font_path)
        .with_context(|| format!("Failed to read font {}", font_path.display()))?;
    let font = Font::from_bytes(font_bytes, FontSettings::default())
        .map_err(|e| anyhow::anyhow!("Failed to load font {}: {}", font_path.display(), e))?;
    tracing::info!("Using font {}", font_path.display());

    let event_loop = EventLoop::new()?;
    let mut app = App::new(startup, font);
    event_loop.run_app(&mut app)?;

    Ok(())
}
