//! Countdown tab: progress ring with the remaining time inside it.
//!
//! Preset chips are only shown (and clickable) while the countdown is not
//! running, matching the rule that presets cannot change a running timer.

use super::big_text::{BigText, GLYPH_HEIGHT};
use super::button::{center_row, Button, ButtonVariant};
use super::hit_map::HitMap;
use super::progress_ring::ProgressRing;
use crate::core::{Action, AppCore};
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::{Modifier, Style},
};

/// Largest dial, in rows.
const MAX_RING_ROWS: u16 = 13;

/// Short label for a preset: `5m`, `90s`, `1m30s`.
pub fn preset_label(secs: u32) -> String {
    match (secs / 60, secs % 60) {
        (0, s) => format!("{}s", s),
        (m, 0) => format!("{}m", m),
        (m, s) => format!("{}m{}s", m, s),
    }
}

pub fn render(core: &AppCore, area: Rect, buf: &mut Buffer, theme: &AppTheme, hits: &mut HitMap) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let ring_rows = area.height.saturating_sub(4).min(MAX_RING_ROWS);
    let [ring_row, caption_area, presets_area, buttons_area] = Layout::vertical([
        Constraint::Length(ring_rows),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(area);

    // Dial is twice as wide as tall so it reads as a circle
    let [ring_area] = Layout::horizontal([Constraint::Length(ring_rows.saturating_mul(2))])
        .flex(Flex::Center)
        .areas(ring_row);

    let mut ring = ProgressRing::new(core.countdown_fraction());
    ring.set_colors(theme.accent, theme.ring_track);
    ring.render(ring_area, buf);

    // Remaining time in the middle of the dial, block digits when they fit
    let readout = core.countdown_display();
    let [inner] = Layout::vertical([Constraint::Length(GLYPH_HEIGHT)])
        .flex(Flex::Center)
        .areas(ring_area);
    let inner = inner.inner(Margin::new(3, 0));
    BigText::new(&readout)
        .style(
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        )
        .render(inner, buf);

    if core.countdown.is_finished() {
        let caption = "TIME'S UP";
        let x = caption_area.x + caption_area.width.saturating_sub(caption.len() as u16) / 2;
        buf.set_stringn(
            x,
            caption_area.y,
            caption,
            caption_area.width as usize,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        );
    }

    if !core.countdown.is_running() {
        render_presets(core, presets_area, buf, theme, hits);
    }

    let toggle = if core.countdown.is_running() {
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
    hits.push(slots[0], Action::ToggleCountdown);
    hits.push(slots[1], Action::ResetCountdown);
}

fn render_presets(core: &AppCore, area: Rect, buf: &mut Buffer, theme: &AppTheme, hits: &mut HitMap) {
    let labels: Vec<String> = core
        .presets()
        .iter()
        .enumerate()
        .map(|(i, &secs)| format!("{} {}", i + 1, preset_label(secs)))
        .collect();
    let chips: Vec<Button> = labels
        .iter()
        .map(|label| Button::new(label).variant(ButtonVariant::Secondary))
        .collect();
    let widths: Vec<u16> = chips.iter().map(Button::width).collect();

    let slots = center_row(area, &widths, 1);
    for ((chip, slot), &secs) in chips.iter().zip(slots).zip(core.presets()) {
        if slot.width == 0 {
            continue;
        }
        chip.render(slot, buf, theme);
        hits.push(slot, Action::SelectPreset(secs));
    }
}
