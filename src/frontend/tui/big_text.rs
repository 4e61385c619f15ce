//! Five-row block digits for the large time readouts.
//!
//! Only the characters that appear in clock strings are drawn (`0-9`, `:`,
//! `.`, space). When the area is too small, or the text contains anything
//! else, the text is drawn as a single centered line instead.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

pub const GLYPH_HEIGHT: u16 = 5;

fn glyph(c: char) -> Option<[&'static str; 5]> {
    let rows = match c {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => [" █ ", "██ ", " █ ", " █ ", "███"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        ':' => [" ", "█", " ", "█", " "],
        '.' => [" ", " ", " ", " ", "█"],
        ' ' => [" ", " ", " ", " ", " "],
        _ => return None,
    };
    Some(rows)
}

fn glyph_width(rows: &[&str; 5]) -> u16 {
    rows[0].chars().count() as u16
}

pub struct BigText<'a> {
    text: &'a str,
    style: Style,
}

impl<'a> BigText<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Columns needed for the block rendering, or None if a character has no glyph.
    pub fn width(&self) -> Option<u16> {
        let mut total: u16 = 0;
        for (i, c) in self.text.chars().enumerate() {
            let rows = glyph(c)?;
            if i > 0 {
                total += 1;
            }
            total += glyph_width(&rows);
        }
        Some(total)
    }

    /// Whether the block rendering fits in `area`.
    pub fn fits(&self, area: Rect) -> bool {
        self.width()
            .is_some_and(|w| w <= area.width && GLYPH_HEIGHT <= area.height)
    }

    /// Draw centered in `area`.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = match self.width() {
            Some(w) if self.fits(area) => w,
            _ => {
                let line_width = self.text.chars().count() as u16;
                let x = area.x + area.width.saturating_sub(line_width) / 2;
                let y = area.y + area.height / 2;
                buf.set_stringn(x, y, self.text, area.width as usize, self.style);
                return;
            }
        };

        let mut x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - GLYPH_HEIGHT) / 2;

        for c in self.text.chars() {
            let Some(rows) = glyph(c) else { continue };
            for (dy, row) in rows.iter().enumerate() {
                for (dx, pixel) in row.chars().enumerate() {
                    if pixel != ' ' {
                        buf[(x + dx as u16, y + dy as u16)]
                            .set_char(pixel)
                            .set_style(self.style);
                    }
                }
            }
            x += glyph_width(&rows) + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width() {
        assert_eq!(BigText::new("12:34.32").width(), Some(27));
        assert_eq!(BigText::new("25:00").width(), Some(17));
        assert_eq!(BigText::new("Sunday").width(), None);
    }

    #[test]
    fn test_renders_blocks_when_it_fits() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        BigText::new("1").render(area, &mut buf);
        // "1" is 3 wide, centered at x = 8
        assert_eq!(buf[(9, 0)].symbol(), "█");
        assert_eq!(buf[(8, 1)].symbol(), "█");
        assert_eq!(buf[(8, 0)].symbol(), " ");
    }

    #[test]
    fn test_falls_back_to_plain_text() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        BigText::new("05:00").render(area, &mut buf);
        let row: String = (0..10).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(row, "  05:00   ");
    }
}
