//! Clock tab: large 24-hour time with the date underneath.

use super::big_text::{BigText, GLYPH_HEIGHT};
use crate::core::AppCore;
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
};

pub fn render(core: &AppCore, area: Rect, buf: &mut Buffer, theme: &AppTheme) {
    let [time_area, _, date_area] = Layout::vertical([
        Constraint::Length(GLYPH_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(area);

    let time = core.clock_time();
    BigText::new(&time)
        .style(
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        )
        .render(time_area, buf);

    let date = core.clock_date().to_uppercase();
    let width = date.chars().count() as u16;
    let x = date_area.x + date_area.width.saturating_sub(width) / 2;
    buf.set_stringn(
        x,
        date_area.y,
        &date,
        date_area.width as usize,
        Style::default().fg(theme.text_secondary),
    );
}
