//! Text sections of the report written around the canvas

use crate::category::{Category, CategoryGroup};
use crate::color::Swatch;
use crate::model::Node;
use crate::scanner::ScanStats;
use crate::style::{StyleManager, StyleMode};
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

/// Format bytes with one decimal and a single-letter binary unit.
///
/// ```
/// use diskcanvas::report::human_readable_size;
/// assert_eq!(human_readable_size(500), "500.0B");
/// assert_eq!(human_readable_size(1024 * 1024), "1.0M");
/// ```
pub fn human_readable_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in ["B", "K", "M", "G", "T"] {
        if size < 1024.0 {
            return format!("{size:.1}{unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.1}P")
}

pub fn write_header<W: Write>(out: &mut W, root: &Path, total_size: u64) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Disk Usage Visualization for: {}", root.display())?;
    writeln!(out, "Total size: {}", human_readable_size(total_size))
}

/// Skip counters, only when something was skipped.
pub fn write_scan_summary<W: Write>(out: &mut W, stats: &ScanStats) -> io::Result<()> {
    if !stats.has_errors() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "Scan Summary:")?;
    if stats.long_paths_skipped > 0 {
        writeln!(
            out,
            "- {} items skipped due to path length limits",
            stats.long_paths_skipped
        )?;
    }
    if stats.permission_denied > 0 {
        writeln!(
            out,
            "- {} items skipped due to permission denied",
            stats.permission_denied
        )?;
    }
    if stats.other_errors > 0 {
        writeln!(out, "- {} items skipped due to other errors", stats.other_errors)?;
    }
    writeln!(out)
}

/// `path` relative to `base`, climbing out with `..` when it lies elsewhere.
/// Paths with no common root with `base` are shown as given.
fn display_path(path: &Path, base: Option<&Path>) -> String {
    match base.and_then(|b| relative_path(path, b)) {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}

fn relative_path(path: &Path, base: &Path) -> Option<PathBuf> {
    let mut path_parts = path.components().peekable();
    let mut base_parts = base.components().peekable();
    let mut shared = 0;
    while let (Some(a), Some(b)) = (path_parts.peek(), base_parts.peek()) {
        if a != b {
            break;
        }
        path_parts.next();
        base_parts.next();
        shared += 1;
    }
    if shared == 0 {
        return None;
    }

    let mut rel = PathBuf::new();
    for part in base_parts {
        match part {
            Component::CurDir => {}
            Component::Normal(_) => rel.push(Component::ParentDir),
            _ => return None,
        }
    }
    rel.extend(path_parts);
    Some(rel)
}

/// The ranking table. `items` is already ranked; `k` and `max_depth` only
/// appear in the title.
pub fn write_top_k<W: Write>(
    out: &mut W,
    items: &[&Node],
    k: usize,
    max_depth: usize,
    base: Option<&Path>,
) -> io::Result<()> {
    if items.is_empty() {
        writeln!(out)?;
        return writeln!(out, "No items found within depth {max_depth}.");
    }

    let paths: Vec<String> = items.iter().map(|n| display_path(&n.path, base)).collect();
    let path_width = paths.iter().map(|p| p.chars().count()).max().unwrap_or(0);

    writeln!(out)?;
    writeln!(out, "Top {k} largest items (max depth: {max_depth}):")?;
    writeln!(
        out,
        "{:>10} {:<6} {:<6} {:<12} {:<path_width$}",
        "Size", "Type", "Depth", "Category", "Path"
    )?;
    writeln!(out, "{}", "-".repeat(10 + 6 + 6 + 12 + path_width + 4))?;
    for (node, path) in items.iter().zip(&paths) {
        let kind = if node.is_dir { "[DIR]" } else { "[FILE]" };
        writeln!(
            out,
            "{:>10} {:<6} {:<6} {:<12} {}",
            human_readable_size(node.size),
            kind,
            node.depth,
            node.category.name(),
            path
        )?;
    }
    writeln!(out)
}

fn write_swatch<W: Write>(out: &mut W, swatch: Swatch, text: &str) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(swatch.rgb().into()),
        Print(text),
        ResetColor
    )
}

/// Group totals (simplified) or per-extension breakdown (detailed).
pub fn write_legend<W: Write>(
    out: &mut W,
    manager: &StyleManager,
    mode: StyleMode,
) -> io::Result<()> {
    match mode {
        StyleMode::Detailed => {
            writeln!(out)?;
            writeln!(out, "Detailed Extension Legend:")?;
            for category in Category::ALL {
                let exts = manager.extensions_by_size(category);
                if exts.is_empty() {
                    continue;
                }
                writeln!(out)?;
                writeln!(
                    out,
                    "{} files: ({})",
                    category.name(),
                    human_readable_size(manager.category_size(category))
                )?;
                for (ext, size) in exts {
                    let style = manager.style_for(ext, category, false);
                    write!(out, "  ")?;
                    write_swatch(out, style.swatch, &format!("{} {:8}", style.glyph, ext))?;
                    writeln!(
                        out,
                        " ({} files, {})",
                        manager.ext_count(ext),
                        human_readable_size(size)
                    )?;
                }
            }
        }
        StyleMode::Simplified => {
            writeln!(out)?;
            writeln!(out, "Large Categories:")?;
            for group in CategoryGroup::ALL {
                write_swatch(out, Swatch::Neutral, &group.legend_glyph().to_string())?;
                writeln!(
                    out,
                    " - {} ({})",
                    group.description(),
                    human_readable_size(manager.group_size(group))
                )?;
            }
        }
    }
    out.flush()
}
