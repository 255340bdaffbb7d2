use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hexnav::prelude::*;
use serde_json::{json, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod provenance;

use config::Settings;

#[derive(Parser)]
#[command(name = "hexnav")]
#[command(about = "Hexagon menu geometry: grid offsets, hexagon outlines, card clip shapes")]
struct Cmd {
    /// JSON settings file (`columns`, `scaleUp`, `cornerRadius`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the grid column count
    #[arg(long, global = true)]
    columns: Option<u32>,

    /// Override the hexagon size unit
    #[arg(long, global = true)]
    scale_up: Option<f64>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the center offset and derived attributes of one grid cell
    Offset {
        #[arg(long)]
        column: u32,
        #[arg(long)]
        row: u32,
    },
    /// Print the placements of every menu tile as JSON
    Layout,
    /// Print SVG path data for a rounded hexagon
    HexPath {
        #[arg(long)]
        side: f64,
        /// Defaults to the configured corner radius
        #[arg(long)]
        radius: Option<f64>,
        #[arg(long)]
        half: bool,
    },
    /// Print the clip path of a card slot
    Clip {
        #[arg(long)]
        style: usize,
        /// Tile width / height
        #[arg(long)]
        aspect: f64,
    },
    /// Write an SVG preview of the menu plus a provenance sidecar
    Menu {
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        corner_radius: Option<f64>,
    },
    /// Print the effective settings
    Report,
}

fn main() -> Result<()> {
    // stdout carries command output only; logs go to stderr.
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let settings =
        Settings::load(cmd.config.as_deref())?.with_overrides(cmd.columns, cmd.scale_up);
    let stdout = std::io::stdout();
    let mut w = stdout.lock();
    match cmd.action {
        Action::Offset { column, row } => {
            offset_cmd(&mut w, &settings, HexCell::new(column, row))
        }
        Action::Layout => layout_cmd(&mut w, &settings),
        Action::HexPath { side, radius, half } => {
            let radius = radius.unwrap_or(settings.corner_radius);
            tracing::info!(side, radius, half, "hex_path");
            writeln!(w, "{}", hex_path(side, radius, half))?;
            Ok(())
        }
        Action::Clip { style, aspect } => {
            tracing::info!(style, aspect, "clip");
            writeln!(w, "{}", shape_path(style, aspect))?;
            Ok(())
        }
        Action::Menu { out, corner_radius } => menu_cmd(&settings, &out, corner_radius),
        Action::Report => report(&mut w, &settings),
    }
}

fn placement_json(p: &Placement) -> Value {
    json!({
        "column": p.cell.column,
        "row": p.cell.row,
        "x": p.center.x,
        "y": p.center.y,
        "scale": p.scale,
        "isHalf": p.is_half,
        "rotationDeg": p.rotation_deg,
    })
}

fn offset_cmd(w: &mut impl Write, settings: &Settings, cell: HexCell) -> Result<()> {
    let cfg = settings.grid_cfg()?;
    tracing::info!(column = cell.column, row = cell.row, parity = cfg.parity(), "offset");
    let p = cell.placement(&cfg);
    writeln!(w, "{}", serde_json::to_string_pretty(&placement_json(&p))?)?;
    Ok(())
}

fn layout_cmd(w: &mut impl Write, settings: &Settings) -> Result<()> {
    let cfg = settings.grid_cfg()?;
    let placed: Vec<Value> = layout(MENU_TILES, &cfg).iter().map(placement_json).collect();
    tracing::info!(tiles = placed.len(), "layout");
    writeln!(w, "{}", serde_json::to_string_pretty(&placed)?)?;
    Ok(())
}

fn menu_cmd(settings: &Settings, out: &Path, corner_radius: Option<f64>) -> Result<()> {
    let cfg = settings.grid_cfg()?;
    let radius = corner_radius.unwrap_or(settings.corner_radius);
    tracing::info!(out = %out.display(), radius, "menu");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let svg = menu_svg(MENU_TILES, &cfg, radius);
    std::fs::write(out, svg).with_context(|| format!("writing {}", out.display()))?;

    let payload = provenance::Payload::new(
        serde_json::to_value(settings)?,
        json!({ "cornerRadius": radius, "tiles": MENU_TILES.len() }),
    );
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(provenance = %prov.display(), "menu written");
    Ok(())
}

fn report(w: &mut impl Write, settings: &Settings) -> Result<()> {
    let cfg = settings.grid_cfg()?;
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "hexnav_version": hexnav::VERSION,
        "settings": settings,
        "parity": cfg.parity(),
    });
    writeln!(w, "{}", serde_json::to_string_pretty(&obj)?)?;
    Ok(())
}
