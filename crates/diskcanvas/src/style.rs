//! Per-extension aggregation and deterministic glyph/color assignment

use crate::category::{category_for_extension, Category, CategoryGroup};
use crate::color::Swatch;
use std::collections::HashMap;

/// Glyph used for directories regardless of mode.
pub const DIRECTORY_GLYPH: char = '.';

/// How extensions are styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleMode {
    /// One glyph per category family, everything neutral.
    #[default]
    Simplified,
    /// One glyph per category, palette colors cycling per group.
    Detailed,
}

/// A (glyph, color) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub glyph: char,
    pub swatch: Swatch,
}

impl Style {
    pub const DIRECTORY: Style = Style {
        glyph: DIRECTORY_GLYPH,
        swatch: Swatch::Neutral,
    };

    /// Style for anything that was never assigned one.
    pub fn fallback(category: Category) -> Self {
        Style {
            glyph: category.simplified_glyph(),
            swatch: Swatch::Neutral,
        }
    }
}

/// Aggregated extension statistics for one run, plus the frozen style table.
///
/// Fill it with [`record_extension`](Self::record_extension) for every file,
/// then call [`assign_styles`](Self::assign_styles) once before rendering.
#[derive(Debug, Default, Clone)]
pub struct StyleManager {
    ext_counts: HashMap<String, u64>,
    ext_sizes: HashMap<String, u64>,
    category_sizes: HashMap<Category, u64>,
    group_sizes: HashMap<CategoryGroup, u64>,
    ext_styles: HashMap<String, Style>,
}

impl StyleManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one file of extension `ext` (e.g. `.py`). Empty extensions are ignored.
    pub fn record_extension(&mut self, ext: &str, size: u64) {
        if ext.is_empty() {
            return;
        }
        let ext = ext.to_ascii_lowercase();
        let category = category_for_extension(&ext);

        *self.ext_counts.entry(ext.clone()).or_insert(0) += 1;
        *self.ext_sizes.entry(ext).or_insert(0) += size;
        *self.category_sizes.entry(category).or_insert(0) += size;
        *self.group_sizes.entry(category.group()).or_insert(0) += size;
    }

    /// Freeze the extension -> style table.
    ///
    /// Extensions are visited by descending file count, ties broken by the
    /// extension string, so the same scan always yields the same colors.
    pub fn assign_styles(&mut self, mode: StyleMode) {
        let mut ordered: Vec<(&String, &u64)> = self.ext_counts.iter().collect();
        ordered.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        let mut group_color_indices: HashMap<CategoryGroup, usize> = HashMap::new();
        let mut styles = HashMap::with_capacity(ordered.len());

        for (ext, _) in ordered {
            let category = category_for_extension(ext);
            let style = match mode {
                StyleMode::Simplified => Style {
                    glyph: category.simplified_glyph(),
                    swatch: Swatch::Neutral,
                },
                StyleMode::Detailed => {
                    let index = group_color_indices.entry(category.group()).or_insert(0);
                    let swatch = Swatch::palette(*index);
                    *index += 1;
                    Style {
                        glyph: category.detailed_glyph(),
                        swatch,
                    }
                }
            };
            styles.insert(ext.clone(), style);
        }

        self.ext_styles = styles;
    }

    /// Style for a node with the given extension and category.
    pub fn style_for(&self, ext: &str, category: Category, is_dir: bool) -> Style {
        if is_dir {
            return Style::DIRECTORY;
        }
        self.ext_styles
            .get(&ext.to_ascii_lowercase())
            .copied()
            .unwrap_or_else(|| Style::fallback(category))
    }

    pub fn ext_count(&self, ext: &str) -> u64 {
        self.ext_counts.get(ext).copied().unwrap_or(0)
    }

    pub fn ext_size(&self, ext: &str) -> u64 {
        self.ext_sizes.get(ext).copied().unwrap_or(0)
    }

    pub fn category_size(&self, category: Category) -> u64 {
        self.category_sizes.get(&category).copied().unwrap_or(0)
    }

    pub fn group_size(&self, group: CategoryGroup) -> u64 {
        self.group_sizes.get(&group).copied().unwrap_or(0)
    }

    /// Total bytes across all recorded extensions.
    pub fn total_bytes(&self) -> u64 {
        self.ext_sizes.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ext_counts.is_empty()
    }

    /// Recorded extensions of `category`, largest first, ties by name.
    pub fn extensions_by_size(&self, category: Category) -> Vec<(&str, u64)> {
        let mut exts: Vec<(&str, u64)> = self
            .ext_sizes
            .iter()
            .filter(|(ext, _)| category_for_extension(ext) == category)
            .map(|(ext, size)| (ext.as_str(), *size))
            .collect();
        exts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        exts
    }
}
