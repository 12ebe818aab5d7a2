//! Fixed-size character grid that both renderers paint into

use crate::color::Swatch;
use crate::style::Style;
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use ratatui::layout::Rect;
use std::io::{self, Write};

/// One canvas cell. A blank cell has glyph `' '` and no color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub swatch: Option<Swatch>,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        glyph: ' ',
        swatch: None,
    };

    pub fn is_blank(&self) -> bool {
        self.swatch.is_none() && self.glyph == ' '
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::BLANK
    }
}

impl From<Style> for Cell {
    fn from(style: Style) -> Self {
        Cell {
            glyph: style.glyph,
            swatch: Some(style.swatch),
        }
    }
}

/// Row-major grid of `width * height` cells, blank on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The whole canvas as a rectangle at the origin.
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.offset(x, y).map(|i| &self.cells[i])
    }

    /// Set one cell. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Paint `rect`, clipped to the canvas.
    pub fn fill_rect(&mut self, rect: Rect, cell: Cell) {
        let clipped = rect.intersection(self.area());
        for y in clipped.top()..clipped.bottom() {
            for x in clipped.left()..clipped.right() {
                self.set(x, y, cell);
            }
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks panics on 0; an empty canvas has no rows anyway
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn non_blank_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_blank()).count()
    }

    /// Write every row followed by a newline, coloring each painted cell with
    /// a 24-bit foreground escape and a reset.
    pub fn write_ansi<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in self.rows() {
            for cell in row {
                match cell.swatch {
                    Some(swatch) => queue!(
                        out,
                        SetForegroundColor(swatch.rgb().into()),
                        Print(cell.glyph),
                        ResetColor
                    )?,
                    None => queue!(out, Print(cell.glyph))?,
                }
            }
            queue!(out, Print('\n'))?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_cell() -> Cell {
        Cell {
            glyph: '█',
            swatch: Some(Swatch::Palette(0)),
        }
    }

    #[test]
    fn test_new_canvas_is_blank() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.cells().len(), 12);
        assert_eq!(canvas.rows().count(), 3);
        assert!(canvas.rows().all(|r| r.len() == 4));
        assert_eq!(canvas.non_blank_count(), 0);
    }

    #[test]
    fn test_set_and_get_clip() {
        let mut canvas = Canvas::new(2, 2);
        canvas.set(1, 1, code_cell());
        canvas.set(5, 0, code_cell());
        canvas.set(0, 9, code_cell());

        assert_eq!(canvas.get(1, 1), Some(&code_cell()));
        assert_eq!(canvas.get(2, 0), None);
        assert_eq!(canvas.non_blank_count(), 1);
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut canvas = Canvas::new(4, 3);
        canvas.fill_rect(Rect::new(2, 1, 10, 10), code_cell());
        // x 2..4, y 1..3
        assert_eq!(canvas.non_blank_count(), 4);
        let glyphs: Vec<String> = canvas
            .rows()
            .map(|row| row.iter().map(|c| c.glyph).collect())
            .collect();
        assert_eq!(glyphs, vec!["    ", "  ██", "  ██"]);
    }

    #[test]
    fn test_zero_sized_canvas() {
        let mut canvas = Canvas::new(0, 0);
        canvas.fill_rect(Rect::new(0, 0, 5, 5), code_cell());
        assert_eq!(canvas.rows().count(), 0);
        assert!(canvas.cells().is_empty());
    }

    #[test]
    fn test_write_ansi() {
        let mut canvas = Canvas::new(2, 1);
        canvas.set(0, 0, code_cell());

        let mut out = Vec::new();
        canvas.write_ansi(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "\x1b[38;2;99;110;250m█\x1b[0m \n");
    }

    #[test]
    fn test_cell_from_style() {
        let cell = Cell::from(Style::DIRECTORY);
        assert_eq!(cell.glyph, '.');
        assert_eq!(cell.swatch, Some(Swatch::Neutral));
        assert!(!cell.is_blank());
    }
}
