//! Bannerforge - render text as large block-letter banner art
//!
//! ```text
//!  _
//! | |__   __ _ _ __  _ __   ___ _ __
//! | '_ \ / _` | '_ \| '_ \ / _ \ '__|
//! | |_) | (_| | | | | | | |  __/ |
//! |_.__/ \__,_|_| |_|_| |_|\___|_|
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bannerforge_core::{BannerGenerator, FontStyle};

/// Bannerforge - Banner Art Renderer
#[derive(Parser, Debug)]
#[command(name = "bannerforge")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to render; reads stdin when omitted or "-"
    text: Option<String>,

    /// Font style to render with
    #[arg(short, long, default_value = "standard",
          value_parser = ["standard", "shadow", "thinkertoy"])]
    font: String,

    /// Directory containing the font resources
    #[arg(long, default_value = "fonts")]
    fonts_dir: PathBuf,

    /// Write the banner to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit JSON with the output and the unprintable warning flag
    #[arg(long)]
    json: bool,

    /// List the available font styles and exit
    #[arg(long)]
    list_fonts: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("bannerforge={}", log_level)),
        ))
        .init();

    if args.list_fonts {
        for style in FontStyle::all() {
            println!("{}", style.name());
        }
        return Ok(());
    }

    let text = match args.text.as_deref() {
        Some("-") | None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
        Some(text) => text.to_string(),
    };

    bannerforge_core::init()?;

    // The engine splits logical lines on CR-LF.
    let text = normalize_line_endings(&text);

    let generator = BannerGenerator::new(&args.fonts_dir);
    let rendering = generator.render_named(&text, &args.font)?;

    if rendering.has_unprintable {
        tracing::warn!("input contained unprintable characters; they were skipped");
    }

    if let Some(ref path) = args.output {
        std::fs::write(path, rendering.art.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!("banner written to {}", path.display());
    } else if args.json {
        println!("{}", serde_json::to_string(&rendering)?);
    } else {
        print!("{}", rendering.art);
    }

    Ok(())
}

/// Convert bare LF line endings to the engine's CR-LF convention.
fn normalize_line_endings(text: &str) -> String {
    let unified = text.replace("\r\n", "\n");
    let trimmed = unified.strip_suffix('\n').unwrap_or(&unified);
    trimmed.replace('\n', "\r\n")
}
