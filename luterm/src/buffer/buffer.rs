use super::Cell;
use crate::color::Rgb;
use crate::rect::Rect;
use crate::style::TextStyle;
use crate::text::char_width;

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Paint the background of every cell in `rect`, keeping glyphs.
    pub fn fill(&mut self, rect: Rect, bg: Rgb) {
        self.for_each_in(rect, |cell| cell.bg = bg);
    }

    /// Reset every cell in `rect` to a blank with the given colors.
    pub fn clear_rect(&mut self, rect: Rect, fg: Rgb, bg: Rgb) {
        self.for_each_in(rect, |cell| *cell = Cell::new(' ').with_fg(fg).with_bg(bg));
    }

    /// Turn on the dim attribute for every cell in `rect`.
    pub fn dim(&mut self, rect: Rect) {
        self.for_each_in(rect, |cell| cell.style.dim = true);
    }

    /// Write `text` starting at `(x, y)`, never crossing column `limit`.
    ///
    /// Background colors already in the buffer are kept. Returns the number
    /// of columns written.
    pub fn put_str(
        &mut self,
        x: u16,
        y: u16,
        limit: u16,
        text: &str,
        fg: Rgb,
        style: TextStyle,
    ) -> u16 {
        let limit = limit.min(self.width);
        let mut cursor = x;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if cursor + w > limit {
                break;
            }
            let bg = self.get(cursor, y).map(|c| c.bg).unwrap_or(Rgb::BLACK);
            self.set(
                cursor,
                y,
                Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style),
            );
            if w == 2 {
                if let Some(cell) = self.get_mut(cursor + 1, y) {
                    cell.wide_continuation = true;
                    cell.char = ' ';
                }
            }
            cursor += w;
        }
        cursor - x
    }

    /// The glyphs of row `y` as a string, skipping wide-character continuations.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn for_each_in(&mut self, rect: Rect, mut f: impl FnMut(&mut Cell)) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                let idx = self.index(x, y);
                f(&mut self.cells[idx]);
            }
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}
