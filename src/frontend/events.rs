//! Input events as the main loop sees them.
//!
//! Only what the widget reacts to survives translation: key presses, left
//! clicks, and resizes. Everything else crossterm reports is dropped here.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendEvent {
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Left button pressed at a screen cell
    Click { x: u16, y: u16 },
    Resize { width: u16, height: u16 },
    /// Input stream ended
    Quit,
}

impl FrontendEvent {
    /// Translate a crossterm event, or `None` if the widget ignores it.
    ///
    /// Key releases and repeats are dropped so one press toggles a timer once.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(Self::Key {
                code: key.code,
                modifiers: key.modifiers,
            }),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Some(Self::Click {
                    x: mouse.column,
                    y: mouse.row,
                })
            }
            Event::Resize(width, height) => Some(Self::Resize { width, height }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, MouseEvent};

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_key_press_only() {
        let press = Event::Key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        assert_eq!(
            FrontendEvent::from_crossterm(press),
            Some(FrontendEvent::Key {
                code: KeyCode::Char(' '),
                modifiers: KeyModifiers::NONE
            })
        );

        let release = Event::Key(KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(FrontendEvent::from_crossterm(release), None);
    }

    #[test]
    fn test_left_click_only() {
        assert_eq!(
            FrontendEvent::from_crossterm(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(FrontendEvent::Click { x: 12, y: 4 })
        );
        assert_eq!(
            FrontendEvent::from_crossterm(mouse(MouseEventKind::Down(MouseButton::Right))),
            None
        );
        assert_eq!(FrontendEvent::from_crossterm(mouse(MouseEventKind::Moved)), None);
        assert_eq!(FrontendEvent::from_crossterm(mouse(MouseEventKind::ScrollUp)), None);
    }

    #[test]
    fn test_resize_and_ignored_events() {
        assert_eq!(
            FrontendEvent::from_crossterm(Event::Resize(100, 40)),
            Some(FrontendEvent::Resize {
                width: 100,
                height: 40
            })
        );
        assert_eq!(FrontendEvent::from_crossterm(Event::FocusGained), None);
    }
}
