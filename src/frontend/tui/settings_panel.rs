//! Swatch row shown under the header while settings are open.

use super::button::center_row;
use super::hit_map::HitMap;
use crate::core::{Action, AppCore};
use crate::theme::{AppTheme, PALETTE};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

const SWATCH_WIDTH: u16 = 3;

pub fn render(core: &AppCore, area: Rect, buf: &mut Buffer, theme: &AppTheme, hits: &mut HitMap) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    buf.set_style(area, Style::default().bg(theme.tab_active_bg));

    let widths = [SWATCH_WIDTH; PALETTE.len()];
    let slots = center_row(area, &widths, 2);

    for (color, slot) in PALETTE.iter().zip(slots) {
        if slot.width == 0 {
            continue;
        }
        let selected = *color == core.theme_color();
        let (symbol, style) = if selected {
            (
                "[●]",
                Style::default().fg(color.color()).add_modifier(Modifier::BOLD),
            )
        } else {
            (" ● ", Style::default().fg(color.color()))
        };
        buf.set_stringn(slot.x, slot.y, symbol, SWATCH_WIDTH as usize, style);
        hits.push(slot, Action::SelectTheme(*color));
    }
}
