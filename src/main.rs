//! modlayout - deterministic modular layout for rigid 3D assets
//!
//! Lays out a configured set of modules and prints the resulting report.

use anyhow::{Context, Result};
use clap::Parser;
use modlayout::{JsonlFrameSink, LayoutConfig, LayoutSession, ModeKind, DEFAULT_LAYOUT_PATH};
use modlayout_core::{AssetKey, Axis, Direction};
use std::{fs, path::PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Pack modular 3D assets into a floor-aligned row",
    long_about = None
)]
struct Args {
    /// Layout configuration (TOML)
    #[arg(long, default_value = DEFAULT_LAYOUT_PATH)]
    config: PathBuf,

    /// Asset manifest (JSON); overrides the configured one
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Placement strategy: packed or append
    #[arg(long, value_parser = parse_mode)]
    mode: Option<ModeKind>,

    /// Packing axis: x or z
    #[arg(long, value_parser = parse_axis)]
    axis: Option<Axis>,

    /// Signed distance between neighbouring faces; negative overlaps
    #[arg(long, allow_hyphen_values = true)]
    gap: Option<f64>,

    /// Turn the group half a revolution to face the default camera
    #[arg(long)]
    face_camera: Option<bool>,

    /// Placement direction: increasing or decreasing
    #[arg(long, value_parser = parse_direction)]
    direction: Option<Direction>,

    /// Distance between module origins in append mode
    #[arg(long)]
    spacing: Option<f64>,

    /// Extra module appended after the configured ones (repeatable)
    #[arg(long = "append", value_name = "KEY")]
    append: Vec<String>,

    /// Write every synced frame as a JSON line
    #[arg(long)]
    frames: Option<PathBuf>,

    /// Write the final report here instead of stdout
    #[arg(long)]
    report: Option<PathBuf>,

    /// Save the effective configuration to this path
    #[arg(long)]
    save_config: Option<PathBuf>,
}

fn parse_mode(s: &str) -> Result<ModeKind, String> {
    ModeKind::parse(s).ok_or_else(|| format!("unknown mode '{s}' (expected packed or append)"))
}

fn parse_axis(s: &str) -> Result<Axis, String> {
    Axis::parse(s).ok_or_else(|| format!("unknown axis '{s}' (expected x or z)"))
}

fn parse_direction(s: &str) -> Result<Direction, String> {
    Direction::parse(s)
        .ok_or_else(|| format!("unknown direction '{s}' (expected increasing or decreasing)"))
}

impl Args {
    fn apply(&self, cfg: &mut LayoutConfig) {
        if let Some(manifest) = &self.manifest {
            cfg.manifest = Some(manifest.clone());
        }
        if let Some(mode) = self.mode {
            cfg.mode = mode;
        }
        if let Some(axis) = self.axis {
            cfg.axis = axis;
        }
        if let Some(gap) = self.gap {
            cfg.gap = gap;
        }
        if let Some(face_camera) = self.face_camera {
            cfg.face_camera = face_camera;
        }
        if let Some(direction) = self.direction {
            cfg.direction = direction;
        }
        if let Some(spacing) = self.spacing {
            cfg.spacing = spacing;
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting modlayout v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let mut cfg = LayoutConfig::load_from_path(&args.config);
    args.apply(&mut cfg);
    if let Some(path) = &args.save_config {
        cfg.save_to_path(path)
            .with_context(|| format!("saving config to {}", path.display()))?;
    }

    let mode = cfg.layout_mode();
    mode.validate().context("invalid layout parameters")?;
    let catalog = cfg.load_catalog()?;
    let mut session = LayoutSession::new(catalog, mode);

    let mut keys = cfg.module_keys()?;
    for raw in &args.append {
        keys.push(AssetKey::parse(raw).with_context(|| format!("--append {raw:?}"))?);
    }

    let mut frames = match &args.frames {
        Some(path) => Some(
            JsonlFrameSink::create(path)
                .with_context(|| format!("creating frame log {}", path.display()))?,
        ),
        None => None,
    };

    for key in &keys {
        session
            .append(key)
            .with_context(|| format!("appending {key}"))?;
        if let Some(sink) = frames.as_mut() {
            session.sync(sink);
        }
    }

    let report = match session.last_report() {
        Some(report) => report.clone(),
        None => session.relayout()?.context("layout pass was skipped")?,
    };
    info!(
        modules = report.modules.len(),
        digest = %report.digest(),
        "layout finished"
    );

    if let Some(sink) = frames {
        let written = sink.frames();
        sink.finish().context("writing frame log")?;
        info!(frames = written, "frame log written");
    }

    let json = serde_json::to_string_pretty(&report)?;
    match &args.report {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, json).with_context(|| format!("writing report {}", path.display()))?;
        }
        None => println!("{json}"),
    }
    Ok(())
}
