use crate::canvas::{Canvas, Cell};
use crate::category::Category;
use crate::style::StyleManager;

/// Cells grouped by category and sized by each extension's share of bytes.
///
/// Extensions are laid out in category order, then largest first within a
/// category. Each gets `round(share * width * height)` cells (ties to even),
/// and the sequence is padded or truncated to the canvas and filled column
/// by column.
pub fn render_sorted_mosaic(width: u16, height: u16, manager: &StyleManager) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    let total_cells = width as usize * height as usize;
    if total_cells == 0 {
        return canvas;
    }

    let total_bytes = match manager.total_bytes() {
        0 => 1,
        n => n,
    };

    let mut sequence: Vec<Cell> = Vec::with_capacity(total_cells);
    for category in Category::ALL {
        for (ext, size) in manager.extensions_by_size(category) {
            let share = size as f64 / total_bytes as f64;
            let count = (share * total_cells as f64).round_ties_even() as usize;
            let cell = Cell::from(manager.style_for(ext, category, false));
            sequence.extend(std::iter::repeat(cell).take(count));
        }
    }
    sequence.resize(total_cells, Cell::BLANK);

    let rows = height as usize;
    for (i, cell) in sequence.into_iter().enumerate() {
        let (row, col) = (i % rows, i / rows);
        canvas.set(col as u16, row as u16, cell);
    }

    canvas
}
