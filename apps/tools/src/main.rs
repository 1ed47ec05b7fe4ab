use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use selection::{PickOutcome, RecordingRenderer, SelectionController};
use shared::{
    domain::{Dimensions, LogicalIndex, RegionId, Zone},
    protocol::RenderFrame,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct SceneArgs {
    #[arg(short = 'i', long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    rows: u32,
    #[arg(short = 'j', long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    inner: u32,
    #[arg(short = 'k', long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    cols: u32,
    /// Picks applied in order: `i,k` (zero-based result cell) or `r<id>` (raw region id).
    #[arg(long = "pick")]
    picks: Vec<PickArg>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the final frame as JSON.
    Frame {
        #[command(flatten)]
        scene: SceneArgs,
        #[arg(long)]
        pretty: bool,
    },
    /// Print active/total cuboid counts per zone.
    Summary {
        #[command(flatten)]
        scene: SceneArgs,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickArg {
    Cell(LogicalIndex),
    Region(RegionId),
}

impl FromStr for PickArg {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if let Some(id) = raw.strip_prefix('r') {
            let id = id.parse::<u32>().with_context(|| format!("invalid region id '{raw}'"))?;
            return Ok(PickArg::Region(RegionId(id)));
        }
        let Some((i, k)) = raw.split_once(',') else {
            bail!("expected 'i,k' or 'r<id>', got '{raw}'");
        };
        let i = i.trim().parse::<u32>().with_context(|| format!("invalid row in '{raw}'"))?;
        let k = k.trim().parse::<u32>().with_context(|| format!("invalid column in '{raw}'"))?;
        Ok(PickArg::Cell(LogicalIndex::new(i, k)))
    }
}

/// Renders once, then replays every pick through the controller, one render per pick.
fn run_session(scene: &SceneArgs) -> Result<(SelectionController, RecordingRenderer)> {
    let dims = Dimensions::new(scene.rows, scene.inner, scene.cols)?;
    let mut controller = SelectionController::new(dims);
    let mut renderer = RecordingRenderer::default();
    controller.render(&mut renderer)?;

    for pick in &scene.picks {
        let region = match *pick {
            PickArg::Region(id) => id,
            PickArg::Cell(index) => match controller.registry().region_for(index) {
                Some(id) => id,
                None => {
                    tracing::warn!(cell = %index, dims = %dims, "cell outside the result grid, skipping");
                    continue;
                }
            },
        };
        let outcome = controller.pick_and_render(region, &mut renderer)?;
        if outcome == PickOutcome::Ignored {
            tracing::warn!(region = region.0, "pick did not resolve to a result cell");
        }
    }

    Ok((controller, renderer))
}

fn summarize(frame: &RenderFrame) -> String {
    let mut lines = vec![frame.title.clone()];
    lines.push(match frame.selection.selected() {
        Some(index) => format!("selection: {index}"),
        None => "selection: none".to_string(),
    });
    for zone in Zone::ALL {
        let total = frame.zone(zone).count();
        let active = frame.zone(zone).filter(|c| c.is_active()).count();
        lines.push(format!("{:>4}: {active}/{total} active", zone.label()));
    }
    lines.join("\n")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Frame { scene, pretty } => {
            let (_, renderer) = run_session(&scene)?;
            let frame = renderer.last().context("no frame was rendered")?;
            let json = if pretty {
                serde_json::to_string_pretty(frame)?
            } else {
                serde_json::to_string(frame)?
            };
            println!("{json}");
        }
        Command::Summary { scene } => {
            let (controller, renderer) = run_session(&scene)?;
            let frame = renderer.last().context("no frame was rendered")?;
            println!("{}", summarize(frame));
            println!("frames rendered: {}", controller.frames_rendered());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(picks: &[&str]) -> SceneArgs {
        SceneArgs {
            rows: 2,
            inner: 2,
            cols: 2,
            picks: picks.iter().map(|p| p.parse().expect("pick")).collect(),
        }
    }

    #[test]
    fn parses_cell_and_region_picks() {
        assert_eq!(
            "1, 0".parse::<PickArg>().expect("cell"),
            PickArg::Cell(LogicalIndex::new(1, 0))
        );
        assert_eq!(
            "r7".parse::<PickArg>().expect("region"),
            PickArg::Region(RegionId(7))
        );
        assert!("1;0".parse::<PickArg>().is_err());
        assert!("rx".parse::<PickArg>().is_err());
    }

    #[test]
    fn replays_picks_and_skips_unknown_ones() {
        let (controller, renderer) = run_session(&scene(&["0,1", "r99", "5,5"])).expect("session");
        assert_eq!(controller.current_selection(), Some(LogicalIndex::new(0, 1)));
        assert_eq!(renderer.frames().len(), 3);
    }

    #[test]
    fn summary_counts_active_cells() {
        let (_, renderer) = run_session(&scene(&["1,0"])).expect("session");
        let text = summarize(renderer.last().expect("frame"));
        assert!(text.contains("selection: C2,1"));
        assert!(text.contains("core: 2/8 active"));
        assert!(text.contains("   A: 2/4 active"));
        assert!(text.contains("   C: 1/4 active"));
    }

    #[test]
    fn cli_accepts_repeated_picks() {
        let cli = Cli::try_parse_from(["tools", "summary", "-i", "3", "--pick", "2,1", "--pick", "r0"])
            .expect("cli");
        let Command::Summary { scene } = cli.command else {
            panic!("expected summary");
        };
        assert_eq!(scene.rows, 3);
        assert_eq!(scene.picks.len(), 2);
    }
}
