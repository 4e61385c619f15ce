//! Stopwatch tab: `MM:SS.CC` readout plus Start/Pause and Reset.

use super::big_text::{BigText, GLYPH_HEIGHT};
use super::button::{center_row, Button, ButtonVariant};
use super::hit_map::HitMap;
use crate::core::{Action, AppCore};
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
};

pub fn render(core: &AppCore, area: Rect, buf: &mut Buffer, theme: &AppTheme, hits: &mut HitMap) {
    let [readout_area, _, buttons_area] = Layout::vertical([
        Constraint::Length(GLYPH_HEIGHT),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(area);

    let readout = core.stopwatch_display();
    BigText::new(&readout)
        .style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
        .render(readout_area, buf);

    let toggle = if core.stopwatch.is_running() {
        Button::new("Pause").icon('‖')
    } else {
        Button::new("Start").icon('▶')
    };
    let reset = Button::new("Reset")
        .icon('↺')
        .variant(ButtonVariant::Secondary);

    let slots = center_row(buttons_area, &[toggle.width(), reset.width()], 2);
    toggle.render(slots[0], buf, theme);
    reset.render(slots[1], buf, theme);
    hits.push(slots[0], Action::ToggleStopwatch);
    hits.push(slots[1], Action::ResetStopwatch);
}
