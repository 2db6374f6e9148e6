//! Demo state and input handling.

use luterm::{Buffer, Event, Key, MouseButton, Rect, TextStyle};
use lutable::{Row, Table, TableLayout, ThemeHandle, paint};

pub struct Demo {
    table: Table<Row>,
    rows: Vec<Row>,
    /// Render with no rows to show the empty placeholder.
    show_empty: bool,
    theme: ThemeHandle,
    hovered: Option<usize>,
    layout: TableLayout,
    quit: bool,
}

impl Demo {
    pub fn new(table: Table<Row>, rows: Vec<Row>, theme: ThemeHandle) -> Self {
        Self {
            table,
            rows,
            show_empty: false,
            theme,
            hovered: None,
            layout: TableLayout::default(),
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn rows(&self) -> &[Row] {
        if self.show_empty { &[] } else { &self.rows }
    }

    /// Apply one input event. Returns whether the screen needs a redraw.
    pub fn handle(&mut self, event: &Event) -> bool {
        match event {
            Event::Key { key, modifiers } if modifiers.none() || modifiers.shift => {
                self.handle_key(*key)
            }
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => match self.layout.header_at(*x, *y).map(str::to_string) {
                Some(key) => self.table.on_header_click(&key),
                None => false,
            },
            Event::MouseMove { y, .. } => {
                let hovered = self.layout.row_at(*y);
                let changed = hovered != self.hovered;
                self.hovered = hovered;
                changed
            }
            Event::Resize { .. } => true,
            _ => false,
        }
    }

    fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Char('q') | Key::Escape => {
                self.quit = true;
                false
            }
            Key::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.table.on_header_click_at(index)
            }
            Key::Char('t') => {
                let mode = self.theme.toggle();
                log::info!("[demo] theme -> {mode}");
                true
            }
            Key::Char('l') => {
                let options = self.table.options_mut();
                options.loading = !options.loading;
                true
            }
            Key::Char('b') => {
                let options = self.table.options_mut();
                options.bordered = !options.bordered;
                true
            }
            Key::Char('s') => {
                let options = self.table.options_mut();
                options.striped = !options.striped;
                true
            }
            Key::Char('e') => {
                self.show_empty = !self.show_empty;
                self.hovered = None;
                true
            }
            _ => false,
        }
    }

    pub fn draw(&mut self, buf: &mut Buffer) {
        let palette = self.theme.get().palette();
        let area = buf.area();
        buf.clear_rect(area, palette.foreground, palette.background);
        if area.width < 8 || area.height < 6 {
            self.layout = TableLayout::default();
            return;
        }

        buf.put_str(
            2,
            0,
            area.right(),
            "lutable",
            palette.primary,
            TextStyle::new().bold(),
        );

        let status = format!("sort: {}  theme: {}", self.table.sort_state(), self.theme.get());
        buf.put_str(2, 1, area.right(), &status, palette.muted, TextStyle::new());

        let help = format!(
            "1-{} sort  t theme  l loading  b borders  s stripes  e empty  q quit",
            self.table.columns().len().min(9)
        );
        let help_y = area.bottom() - 1;
        buf.put_str(2, help_y, area.right(), &help, palette.muted, TextStyle::new());

        let view = self.table.render(self.rows());
        let available = help_y.saturating_sub(3);
        let height = table_height(view.rows().len(), view.bordered).min(available);
        let table_area = Rect::new(2, 2, area.width.saturating_sub(4), height);

        self.layout = paint(&view, table_area, buf, &palette, self.hovered);
    }
}

/// Lines needed to show `rows` rows: border, header, body, border.
fn table_height(rows: usize, bordered: bool) -> u16 {
    let body = rows.max(1);
    let rules = if bordered { body } else { 0 };
    (body + rules + 3).min(u16::MAX as usize) as u16
}
