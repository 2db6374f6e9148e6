//! Drawing a [`TableView`] into a terminal buffer.

use luterm::text::{align_offset, display_width, truncate_to_width};
use luterm::{Buffer, Cell, Rect, Rgb, TextAlign, TextStyle};

use crate::{Align, Body, CellContent, ColumnWidth, Palette, TableView};

const LOADING_LABEL: &str = "◐ Loading...";

/// Screen geometry of a painted table, for hit testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableLayout {
    header_y: Option<u16>,
    columns: Vec<ColumnSpan>,
    rows: Vec<RowSpan>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ColumnSpan {
    key: String,
    x: u16,
    width: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RowSpan {
    y: u16,
    index: usize,
}

impl TableLayout {
    /// Key of the column whose header cell covers `(x, y)`.
    pub fn header_at(&self, x: u16, y: u16) -> Option<&str> {
        if self.header_y != Some(y) {
            return None;
        }
        self.columns
            .iter()
            .find(|c| x >= c.x && x < c.x + c.width)
            .map(|c| c.key.as_str())
    }

    /// Display index of the row drawn on line `y`.
    pub fn row_at(&self, y: u16) -> Option<usize> {
        self.rows.iter().find(|r| r.y == y).map(|r| r.index)
    }

    /// `(key, x, width)` of every column, left to right.
    pub fn columns(&self) -> impl Iterator<Item = (&str, u16, u16)> {
        self.columns.iter().map(|c| (c.key.as_str(), c.x, c.width))
    }

    /// Number of rows that fit on screen.
    pub fn visible_rows(&self) -> usize {
        self.rows.len()
    }
}

/// Paint `view` inside `area`.
///
/// `hovered` is the display index under the pointer; it only has an effect
/// when the view is hoverable.
pub fn paint(
    view: &TableView,
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
    hovered: Option<usize>,
) -> TableLayout {
    let mut layout = TableLayout::default();
    if area.width < 4 || area.height < 3 {
        return layout;
    }

    buf.clear_rect(area, palette.foreground, palette.surface);
    draw_box(buf, area, palette.border);

    let inner = area.inset(1);
    let gap: u16 = if view.bordered { 1 } else { 0 };
    let gaps = gap * (view.header.len().saturating_sub(1) as u16);
    let widths = column_widths(
        view.header.iter().map(|h| h.width),
        inner.width.saturating_sub(gaps),
    );

    let mut x = inner.x;
    for (cell, width) in view.header.iter().zip(&widths) {
        layout.columns.push(ColumnSpan {
            key: cell.key.clone(),
            x,
            width: *width,
        });
        x = x.saturating_add(*width + gap);
    }

    // Header
    let header_y = inner.y;
    layout.header_y = Some(header_y);
    buf.fill(inner.row(header_y), palette.header);
    for (cell, span) in view.header.iter().zip(&layout.columns) {
        let glyph = cell.sort.glyph();
        let glyph_width = glyph.map_or(0, |_| 2);
        let content = span.width.saturating_sub(2 + glyph_width) as usize;
        let title = truncate_to_width(&cell.title, content);
        let label_width = display_width(&title) + glyph_width as usize;
        let offset = align_offset(label_width, span.width.saturating_sub(2) as usize, cell.align.into());

        let start = span.x + 1 + offset as u16;
        let limit = span.x + span.width.saturating_sub(1);
        let written = buf.put_str(
            start,
            header_y,
            limit,
            &title,
            palette.foreground,
            TextStyle::new().bold(),
        );
        if let Some(glyph) = glyph {
            let active = glyph != '↕';
            let fg = if active { palette.primary } else { palette.muted };
            let mut tmp = [0u8; 4];
            buf.put_str(
                start + written + 1,
                header_y,
                limit,
                glyph.encode_utf8(&mut tmp),
                fg,
                TextStyle::new(),
            );
        }
    }
    if view.bordered {
        draw_separators(buf, &layout.columns, header_y, palette.border);
    }

    let mut y = header_y + 1;
    if view.bordered && y < inner.bottom() {
        draw_rule(buf, area, &layout.columns, y, palette.border);
        y += 1;
    }
    let body_top = y;

    match &view.body {
        Body::Empty { message, .. } => {
            if y < inner.bottom() {
                let text = truncate_to_width(message, inner.width as usize);
                let offset = align_offset(display_width(&text), inner.width as usize, TextAlign::Center);
                buf.put_str(
                    inner.x + offset as u16,
                    y,
                    inner.right(),
                    &text,
                    palette.muted,
                    TextStyle::new(),
                );
            }
        }
        Body::Rows(rows) => {
            for (n, row) in rows.iter().enumerate() {
                if y >= inner.bottom() {
                    break;
                }

                let bg = if view.hoverable && hovered == Some(row.index) {
                    palette.hover
                } else if row.striped {
                    palette.stripe
                } else {
                    palette.surface
                };
                buf.fill(inner.row(y), bg);

                for (cell, span) in row.cells.iter().zip(&layout.columns) {
                    draw_cell(buf, &cell.content, cell.align, span, y, palette);
                }
                if view.bordered {
                    draw_separators(buf, &layout.columns, y, palette.border);
                }
                layout.rows.push(RowSpan { y, index: row.index });
                y += 1;

                if view.bordered && n + 1 < rows.len() && y < inner.bottom() {
                    draw_rule(buf, area, &layout.columns, y, palette.border);
                    y += 1;
                }
            }
        }
    }

    if view.loading {
        let body = Rect::new(inner.x, body_top, inner.width, inner.bottom().saturating_sub(body_top));
        buf.dim(body);
        draw_loading(buf, inner, palette);
    }

    layout
}

/// Split `available` columns between fixed and flex widths.
fn column_widths(hints: impl Iterator<Item = ColumnWidth>, available: u16) -> Vec<u16> {
    let hints: Vec<ColumnWidth> = hints.collect();
    let mut widths = vec![0u16; hints.len()];
    let mut remaining = available;

    for (hint, width) in hints.iter().zip(widths.iter_mut()) {
        if let ColumnWidth::Fixed(w) = hint {
            *width = (*w).min(remaining);
            remaining -= *width;
        }
    }

    let total_weight: u32 = hints
        .iter()
        .map(|h| match h {
            ColumnWidth::Flex(w) => u32::from(*w),
            ColumnWidth::Fixed(_) => 0,
        })
        .sum();
    if total_weight == 0 {
        return widths;
    }

    let flexible = remaining;
    let mut last_flex = None;
    for (i, hint) in hints.iter().enumerate() {
        if let ColumnWidth::Flex(w) = hint {
            let share = (u32::from(flexible) * u32::from(*w) / total_weight) as u16;
            widths[i] = share.min(remaining);
            remaining -= widths[i];
            last_flex = Some(i);
        }
    }
    // Rounding leftovers go to the last flex column.
    if let Some(i) = last_flex {
        widths[i] += remaining;
    }
    widths
}

fn draw_cell(
    buf: &mut Buffer,
    content: &CellContent,
    align: Align,
    span: &ColumnSpan,
    y: u16,
    palette: &Palette,
) {
    let inner_width = span.width.saturating_sub(2) as usize;
    let limit = span.x + span.width.saturating_sub(1);

    match content {
        CellContent::Empty => {}
        CellContent::Text(text) => {
            let text = truncate_to_width(text, inner_width);
            let offset = align_offset(display_width(&text), inner_width, align.into());
            buf.put_str(
                span.x + 1 + offset as u16,
                y,
                limit,
                &text,
                palette.foreground,
                TextStyle::new(),
            );
        }
        CellContent::Badge(badge) => {
            let label = truncate_to_width(&badge.label, inner_width.saturating_sub(2));
            let padded = format!(" {label} ");
            let offset = align_offset(display_width(&padded), inner_width, align.into());
            let start = span.x + 1 + offset as u16;
            let (fg, bg) = palette.badge(badge.variant);
            let width = display_width(&padded).min(inner_width) as u16;
            buf.fill(Rect::new(start, y, width, 1), bg);
            buf.put_str(start, y, limit, &padded, fg, TextStyle::new().bold());
        }
    }
}

fn draw_box(buf: &mut Buffer, rect: Rect, fg: Rgb) {
    let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);
    set_glyph(buf, rect.x, rect.y, '╭', fg);
    set_glyph(buf, right, rect.y, '╮', fg);
    set_glyph(buf, rect.x, bottom, '╰', fg);
    set_glyph(buf, right, bottom, '╯', fg);
    for x in rect.x + 1..right {
        set_glyph(buf, x, rect.y, '─', fg);
        set_glyph(buf, x, bottom, '─', fg);
    }
    for y in rect.y + 1..bottom {
        set_glyph(buf, rect.x, y, '│', fg);
        set_glyph(buf, right, y, '│', fg);
    }
}

/// Vertical bars in the gaps between columns.
fn draw_separators(buf: &mut Buffer, columns: &[ColumnSpan], y: u16, fg: Rgb) {
    for span in columns.iter().take(columns.len().saturating_sub(1)) {
        set_glyph(buf, span.x + span.width, y, '│', fg);
    }
}

/// Horizontal rule across the table, joined to the outer border and separators.
fn draw_rule(buf: &mut Buffer, area: Rect, columns: &[ColumnSpan], y: u16, fg: Rgb) {
    for x in area.x + 1..area.right() - 1 {
        set_glyph(buf, x, y, '─', fg);
    }
    set_glyph(buf, area.x, y, '├', fg);
    set_glyph(buf, area.right() - 1, y, '┤', fg);
    for span in columns.iter().take(columns.len().saturating_sub(1)) {
        set_glyph(buf, span.x + span.width, y, '┼', fg);
    }
}

fn draw_loading(buf: &mut Buffer, inner: Rect, palette: &Palette) {
    let label_width = display_width(LOADING_LABEL) as u16;
    let card = inner.centered(label_width + 4, 3);
    if card.width < 4 || card.height < 3 {
        return;
    }

    buf.clear_rect(card, palette.foreground, palette.overlay);
    draw_box(buf, card, palette.border);
    let text = truncate_to_width(LOADING_LABEL, card.width.saturating_sub(4) as usize);
    buf.put_str(
        card.x + 2,
        card.y + 1,
        card.right() - 2,
        &text,
        palette.primary,
        TextStyle::new().bold(),
    );
}

fn set_glyph(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        let bg = cell.bg;
        *cell = Cell::new(ch).with_fg(fg).with_bg(bg);
    }
}
