//! Terminal donut runner (default binary).
//!
//! Animates the torus in the alternate screen with truecolor glyphs, or with
//! `--markup` writes span markup frames to stdout for embedding elsewhere.

mod logging;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use tui_donut::core::{CancelToken, DriveSummary, Driver, ImmediateTicks, MarkupSink};
use tui_donut::term::{DonutView, TerminalSink, TerminalTicks};

#[derive(Parser, Debug)]
#[command(author, version, about = "Rotating 3D ASCII donut")]
struct Cli {
    /// Frames per second
    #[arg(long, env = "DONUT_FPS", default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,
    /// Stop after this many frames (runs until quit when absent)
    #[arg(long, env = "DONUT_FRAMES")]
    frames: Option<u64>,
    /// Write span markup to stdout instead of animating the terminal
    #[arg(long, default_value_t = false)]
    markup: bool,
    /// Draw only the donut, without title and caption
    #[arg(long, default_value_t = false)]
    bare: bool,
    /// Append log records to this file
    #[arg(long, env = "DONUT_LOG_PATH")]
    log_file: Option<PathBuf>,
    /// Log level used with --log-file
    #[arg(long, env = "DONUT_LOG_LEVEL", default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref(), cli.log_level)?;

    let summary = if cli.markup {
        run_markup(&cli)?
    } else {
        run_terminal(&cli)?
    };

    info!(
        "done after {} frames (a={:.3}, b={:.3})",
        summary.ticks, summary.final_state.angle_a, summary.final_state.angle_b
    );
    log::logger().flush();
    Ok(())
}

fn run_markup(cli: &Cli) -> Result<DriveSummary> {
    let frames = cli.frames.unwrap_or(1);
    let sink = MarkupSink::new(io::stdout().lock());
    let mut driver = Driver::new(ImmediateTicks::new(Some(frames)), sink, CancelToken::new());
    driver.run().context("failed to write markup")
}

fn run_terminal(cli: &Cli) -> Result<DriveSummary> {
    let view = if cli.bare {
        DonutView::bare()
    } else {
        DonutView::default()
    };
    let mut sink = TerminalSink::new(view);
    sink.renderer_mut().enter()?;

    let cancel = CancelToken::new();
    let ticks = TerminalTicks::new(Duration::from_secs(1) / cli.fps, cancel.clone())
        .with_resize_signal(sink.resize_signal());
    let result = Driver::new(ticks, &mut sink, cancel)
        .with_frame_limit(cli.frames)
        .run();

    // Always try to restore terminal state.
    let _ = sink.renderer_mut().exit();
    result.context("failed to draw to the terminal")
}
