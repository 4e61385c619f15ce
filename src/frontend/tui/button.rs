//! The one reusable button used across the views.
//!
//! Primary buttons are filled with the accent color, secondary buttons sit on
//! a muted background. Both are a single row: icon, label, and padding.

use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

pub struct Button<'a> {
    label: &'a str,
    icon: Option<char>,
    variant: ButtonVariant,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            icon: None,
            variant: ButtonVariant::Primary,
        }
    }

    pub fn icon(mut self, icon: char) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    fn content(&self) -> Line<'a> {
        let mut spans = vec![Span::raw("  ")];
        if let Some(icon) = self.icon {
            spans.push(Span::raw(icon.to_string()));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw(self.label));
        spans.push(Span::raw("  "));
        Line::from(spans)
    }

    /// Columns the button occupies.
    pub fn width(&self) -> u16 {
        self.content().width() as u16
    }

    pub fn style(&self, theme: &AppTheme) -> Style {
        match self.variant {
            ButtonVariant::Primary => Style::default()
                .fg(theme.button_primary_fg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Secondary => Style::default()
                .fg(theme.button_secondary_fg)
                .bg(theme.button_secondary_bg),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &AppTheme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = self.style(theme);
        buf.set_style(area, style);
        let line = self.content().style(style);
        let x = area.x + area.width.saturating_sub(self.width()) / 2;
        buf.set_line(x, area.y + area.height / 2, &line, area.width);
    }
}

/// Lay out items of the given widths on one row, centered, `gap` apart.
///
/// Items that would overflow the row are given zero width.
pub fn center_row(area: Rect, widths: &[u16], gap: u16) -> Vec<Rect> {
    let total: u16 = widths.iter().sum::<u16>() + gap * widths.len().saturating_sub(1) as u16;
    let mut x = area.x + area.width.saturating_sub(total) / 2;
    let right = area.x + area.width;

    widths
        .iter()
        .map(|&w| {
            let w = if x + w <= right { w } else { 0 };
            let rect = Rect::new(x, area.y, w, area.height);
            x = x.saturating_add(w + gap);
            rect
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeColor;

    #[test]
    fn test_width_includes_icon_and_padding() {
        assert_eq!(Button::new("Start").width(), 9);
        assert_eq!(Button::new("Start").icon('▶').width(), 11);
    }

    #[test]
    fn test_primary_uses_accent() {
        let theme = AppTheme::from_accent(ThemeColor::Green);
        let primary = Button::new("Go").style(&theme);
        let secondary = Button::new("Go")
            .variant(ButtonVariant::Secondary)
            .style(&theme);
        assert_eq!(primary.bg, Some(theme.accent));
        assert_eq!(secondary.bg, Some(theme.button_secondary_bg));
    }

    #[test]
    fn test_render_writes_label() {
        let theme = AppTheme::default();
        let area = Rect::new(0, 0, 11, 1);
        let mut buf = Buffer::empty(area);
        Button::new("Reset").icon('↺').render(area, &mut buf, &theme);
        let row: String = (0..11).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(row, "  ↺ Reset  ");
        assert_eq!(buf[(0, 0)].bg, theme.accent);
    }

    #[test]
    fn test_center_row() {
        let rects = center_row(Rect::new(0, 3, 20, 1), &[4, 6], 2);
        assert_eq!(rects[0], Rect::new(4, 3, 4, 1));
        assert_eq!(rects[1], Rect::new(10, 3, 6, 1));

        let crowded = center_row(Rect::new(0, 0, 5, 1), &[4, 4], 1);
        assert_eq!(crowded[1].width, 0);
    }
}
