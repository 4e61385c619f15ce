//! Header row: the three tab pills on the left, the settings gear on the right.

use super::hit_map::HitMap;
use crate::core::{Action, AppCore};
use crate::data::ui_state::Tab;
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
};

const GEAR: &str = " ⚙ ";

fn tab_label(tab: Tab) -> String {
    format!(" {} {} ", tab.icon(), tab.title())
}

pub fn render(core: &AppCore, area: Rect, buf: &mut Buffer, theme: &AppTheme, hits: &mut HitMap) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let gear_width = Line::raw(GEAR).width() as u16;
    let tabs_right = area.right().saturating_sub(gear_width + 1);
    let mut x = area.x;

    for tab in Tab::ALL {
        let label = tab_label(tab);
        let width = Line::raw(label.as_str()).width() as u16;
        if x + width > tabs_right {
            break;
        }

        let style = if tab == core.active_tab() {
            Style::default()
                .fg(theme.accent)
                .bg(theme.tab_active_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.tab_inactive)
        };

        let rect = Rect::new(x, area.y, width, 1);
        buf.set_stringn(x, area.y, &label, width as usize, style);
        hits.push(rect, Action::SelectTab(tab));
        x += width + 1;
    }

    if area.width > gear_width {
        let gear_x = area.right() - gear_width;
        let gear_style = if core.show_settings() {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        buf.set_stringn(gear_x, area.y, GEAR, gear_width as usize, gear_style);
        hits.push(Rect::new(gear_x, area.y, gear_width, 1), Action::ToggleSettings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_tabs_and_gear_are_clickable() {
        let core = AppCore::new(Config::default());
        let area = Rect::new(0, 0, 50, 1);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();
        render(&core, area, &mut buf, &core.theme(), &mut hits);

        assert_eq!(hits.action_at(1, 0), Some(Action::SelectTab(Tab::Clock)));
        // " ◷ Clock " is 9 wide, then one column gap
        assert_eq!(hits.action_at(10, 0), Some(Action::SelectTab(Tab::Stopwatch)));
        assert_eq!(hits.action_at(49, 0), Some(Action::ToggleSettings));
        assert_eq!(buf[(1, 0)].fg, core.theme().accent);
    }
}
