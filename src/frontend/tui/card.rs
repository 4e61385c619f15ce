//! Full-screen composition: background, centered card, footer.
//!
//! Card layout, top to bottom: header (tabs + gear), divider, optional swatch
//! row, the active view, and a key hint line.

use super::hit_map::HitMap;
use super::{clock_view, countdown, settings_panel, stopwatch_view, tab_bar};
use crate::core::AppCore;
use crate::data::ui_state::Tab;
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

const CARD_MAX_WIDTH: u16 = 60;
const CARD_MAX_HEIGHT: u16 = 28;
const FOOTER: &str = "DESIGNED FOR INNOVATION";

/// Draw the whole screen and record clickable regions into `hits`.
pub fn render(core: &AppCore, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    let theme = core.theme();
    buf.set_style(area, Style::default().bg(theme.background));

    if area.width < 10 || area.height < 6 {
        buf.set_stringn(
            area.x,
            area.y,
            "Terminal too small",
            area.width as usize,
            Style::default().fg(theme.text_secondary),
        );
        return;
    }

    let [card_row, footer_area] = Layout::vertical([
        Constraint::Length(CARD_MAX_HEIGHT.min(area.height.saturating_sub(1))),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(area);
    let [card_area] = Layout::horizontal([Constraint::Length(CARD_MAX_WIDTH.min(area.width))])
        .flex(Flex::Center)
        .areas(card_row);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(core.config.ui.border_type())
        .border_style(Style::default().fg(theme.card_border))
        .title(Line::from(Span::styled(
            " CHRONONEON ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(card_area);
    block.render(card_area, buf);

    let settings_rows = if core.show_settings() { 1 } else { 0 };
    let [_, header, divider, settings, content, hint] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(settings_rows),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let header = header.inner(Margin::new(1, 0));
    tab_bar::render(core, header, buf, &theme, hits);

    for x in divider.left()..divider.right() {
        buf[(x, divider.y)]
            .set_char('─')
            .set_style(Style::default().fg(theme.divider));
    }

    if core.show_settings() {
        settings_panel::render(core, settings, buf, &theme, hits);
    }

    match core.active_tab() {
        Tab::Clock => clock_view::render(core, content, buf, &theme),
        Tab::Stopwatch => stopwatch_view::render(core, content, buf, &theme, hits),
        Tab::Timer => countdown::render(core, content, buf, &theme, hits),
    }

    render_hint(core, hint, buf, &theme);

    let footer_x = footer_area.x + footer_area.width.saturating_sub(FOOTER.len() as u16) / 2;
    buf.set_stringn(
        footer_x,
        footer_area.y,
        FOOTER,
        footer_area.width as usize,
        Style::default().fg(theme.text_muted),
    );
}

fn render_hint(core: &AppCore, area: Rect, buf: &mut Buffer, theme: &AppTheme) {
    let hint = if core.show_settings() {
        "←/→ color · s close · q quit"
    } else {
        match core.active_tab() {
            Tab::Clock => "tab switch · s settings · q quit",
            Tab::Stopwatch => "space start/pause · r reset · tab switch · q quit",
            Tab::Timer => "space start/pause · r reset · 1-9 preset · q quit",
        }
    };
    let width = Line::raw(hint).width() as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    buf.set_stringn(
        x,
        area.y,
        hint,
        area.width as usize,
        Style::default().fg(theme.text_muted),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::Action;
    use crate::theme::ThemeColor;

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(core: &AppCore, width: u16, height: u16) -> (Buffer, HitMap) {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();
        render(core, area, &mut buf, &mut hits);
        (buf, hits)
    }

    #[test]
    fn test_stopwatch_tab_shows_buttons() {
        let mut core = AppCore::new(Config::default());
        core.apply(Action::SelectTab(Tab::Stopwatch));
        let (buf, hits) = draw(&core, 80, 30);
        let text = screen_text(&buf);

        assert!(text.contains("CHRONONEON"));
        assert!(text.contains("Start"));
        assert!(text.contains("Reset"));
        assert!(text.contains(FOOTER));
        // 3 tabs + gear + 2 buttons
        assert_eq!(hits.len(), 6);
    }

    #[test]
    fn test_settings_panel_adds_swatches() {
        let mut core = AppCore::new(Config::default());
        core.apply(Action::ToggleSettings);
        let (_, hits) = draw(&core, 80, 30);
        // 3 tabs + gear + 5 swatches, clock view has no buttons
        assert_eq!(hits.len(), 9);
    }

    #[test]
    fn test_theme_recolors_title() {
        let mut core = AppCore::new(Config::default());
        core.apply(Action::SelectTheme(ThemeColor::Gold));
        let (buf, _) = draw(&core, 80, 30);
        let gold = ThemeColor::Gold.color();
        assert!(buf.content().iter().any(|cell| cell.fg == gold));
        let cyan = ThemeColor::Cyan.color();
        assert!(!buf.content().iter().any(|cell| cell.fg == cyan));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let core = AppCore::new(Config::default());
        let (buf, hits) = draw(&core, 8, 3);
        assert!(screen_text(&buf).starts_with("Terminal"));
        assert!(hits.is_empty());
    }
}
