//! One run of the tool: scan, style, report

use crate::canvas::Canvas;
use crate::cli::Cli;
use crate::mosaic::render_sorted_mosaic;
use crate::ranking::filter_top_k;
use crate::report;
use crate::scanner::{ScanOutcome, Scanner};
use crate::settings::Settings;
use crate::style::{StyleManager, StyleMode};
use crate::treemap::render_treemap;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Used when no terminal is attached.
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Canvas size for the current terminal: full width, two rows short.
pub fn terminal_size() -> (u16, u16) {
    match crossterm::terminal::size() {
        Ok((cols, rows)) if cols > 0 && rows > 0 => (cols, rows.saturating_sub(2)),
        _ => FALLBACK_SIZE,
    }
}

/// Resolved options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub root: PathBuf,
    pub top: usize,
    pub files_only: bool,
    pub max_depth: usize,
    pub mode: StyleMode,
    pub treemap: bool,
}

impl RunConfig {
    /// Merge command-line arguments over file settings. Flags can only turn
    /// options on.
    pub fn resolve(cli: &Cli, settings: &Settings) -> Self {
        let display = &settings.display;
        let detail = cli.detail || display.detail;
        Self {
            root: PathBuf::from(shellexpand::tilde(&cli.dir).as_ref()),
            top: cli.top.unwrap_or(display.top) as usize,
            files_only: cli.files || display.files_only,
            max_depth: cli.depth.unwrap_or(display.depth) as usize,
            mode: if detail {
                StyleMode::Detailed
            } else {
                StyleMode::Simplified
            },
            treemap: cli.unsort || display.treemap,
        }
    }
}

/// Scan `config.root` and write the full report to `out`.
///
/// Scan failures surface before anything is written.
pub fn run<W: Write>(config: &RunConfig, size: (u16, u16), out: &mut W) -> Result<()> {
    let ScanOutcome { mut tree, stats } = Scanner::new(&config.root).scan()?;

    let mut manager = StyleManager::new();
    tree.record_extensions(&mut manager);
    manager.assign_styles(config.mode);
    tree.apply_styles(&manager);
    debug!("Styled {} nodes in {:?} mode", tree.len(), config.mode);

    let (width, height) = size;
    let canvas = if config.treemap {
        let mut canvas = Canvas::new(width, height);
        let area = canvas.area();
        render_treemap(&tree, tree.root(), area, &mut canvas);
        canvas
    } else {
        render_sorted_mosaic(width, height, &manager)
    };

    let root = tree.node(tree.root());
    let cwd = std::env::current_dir().ok();
    let top = filter_top_k(tree.nodes(), config.top, config.files_only, config.max_depth);

    report::write_header(out, &root.path, root.size).context("Failed to write report")?;
    report::write_scan_summary(out, &stats).context("Failed to write report")?;
    report::write_top_k(out, &top, config.top, config.max_depth, cwd.as_deref())
        .context("Failed to write report")?;
    canvas.write_ansi(out).context("Failed to write canvas")?;
    report::write_legend(out, &manager, config.mode).context("Failed to write legend")?;

    Ok(())
}
