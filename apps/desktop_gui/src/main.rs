use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

mod config;
mod controller;
mod prompt;
mod ui;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use shared::domain::Dimensions;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::controller::events::UiEvent;
use crate::ui::{StartupConfig, TensorVizApp};

/// Interactive 3D view of C = A * B: click a result cell to trace its products.
#[derive(Parser, Debug)]
#[command(name = "tensor-viz")]
struct Args {
    /// Rows of A and C.
    #[arg(short = 'i', long, value_parser = clap::value_parser!(u32).range(1..))]
    rows: Option<u32>,
    /// Columns of A and rows of B (summation length).
    #[arg(short = 'j', long, value_parser = clap::value_parser!(u32).range(1..))]
    inner: Option<u32>,
    /// Columns of B and C.
    #[arg(short = 'k', long, value_parser = clap::value_parser!(u32).range(1..))]
    cols: Option<u32>,
    /// Use defaults for unset dimensions instead of asking on the terminal.
    #[arg(long)]
    no_prompt: bool,
    /// Settings file (defaults to ./tensor_viz.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn resolve_dimensions(args: &Args, settings: &Settings) -> anyhow::Result<Dimensions> {
    let any_flag = args.rows.is_some() || args.inner.is_some() || args.cols.is_some();
    if any_flag || args.no_prompt || !io::stdin().is_terminal() {
        return prompt::dimensions_from_flags(args.rows, args.inner, args.cols, settings);
    }

    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    let outcome = prompt::prompt_dimensions(&mut input, &mut output, settings)?;
    if outcome.source == prompt::DimensionSource::FellBack {
        tracing::info!(dims = %outcome.dims, "continuing with default dimensions");
    }
    Ok(outcome.dims)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let settings = config::load_settings(args.config.as_deref())?;
    let dims = resolve_dimensions(&args, &settings)?;
    prompt::advise_if_large(&mut io::stdout(), dims, &settings)?;
    tracing::info!(dims = %dims, "starting tensor calculator");

    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Tensor Calculator")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    let startup = StartupConfig { dims, settings };
    eframe::run_native(
        "Tensor Calculator",
        options,
        Box::new(move |_cc| Ok(Box::new(TensorVizApp::bootstrap(ui_tx, ui_rx, startup)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
    .context("viewer exited with an error")
}
