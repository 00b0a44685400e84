//! Input events: [`Msg`], [`Key`], [`MouseAction`], and their crossterm mapping.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use pathviz_core::Point;

/// A keyboard key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Tab,
    Backspace,
    /// A printable character.
    Char(char),
}

/// A mouse action. Dragging with a button held reports the button again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// Primary (left) button.
    Main,
    /// Middle button.
    Auxiliary,
    /// Secondary (right) button.
    Secondary,
    /// Button released.
    Release,
    /// Mouse moved (no button held).
    Move,
}

/// An input message. Mouse positions are terminal cells: `row` is the
/// screen line, `col` the screen column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    KeyDown(Key),
    Mouse { action: MouseAction, pos: Point },
    /// The terminal was resized.
    Screen { width: u16, height: u16 },
    /// Ctrl-C.
    Quit,
}

fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Backspace => Some(Key::Backspace),
        _ => None,
    }
}

fn to_action(btn: MouseButton) -> MouseAction {
    match btn {
        MouseButton::Left => MouseAction::Main,
        MouseButton::Right => MouseAction::Secondary,
        MouseButton::Middle => MouseAction::Auxiliary,
    }
}

/// Translate a crossterm event. Key releases and unmapped events give `None`.
pub fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            if kind == KeyEventKind::Release {
                return None;
            }
            if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
                return Some(Msg::Quit);
            }
            to_key(code).map(Msg::KeyDown)
        }
        Event::Mouse(me) => {
            let pos = Point::new(me.row as i32, me.column as i32);
            let action = match me.kind {
                MouseEventKind::Down(btn) | MouseEventKind::Drag(btn) => to_action(btn),
                MouseEventKind::Up(_) => MouseAction::Release,
                MouseEventKind::Moved => MouseAction::Move,
                _ => return None,
            };
            Some(Msg::Mouse { action, pos })
        }
        Event::Resize(width, height) => Some(Msg::Screen { width, height }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::MouseEvent;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keys() {
        let space = Event::Key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        assert_eq!(to_msg(space), Some(Msg::KeyDown(Key::Space)));
        let c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        assert_eq!(to_msg(c), Some(Msg::KeyDown(Key::Char('c'))));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(to_msg(ctrl_c), Some(Msg::Quit));
        let f1 = Event::Key(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE));
        assert_eq!(to_msg(f1), None);
    }

    #[test]
    fn drag_reports_the_button() {
        let ev = mouse(MouseEventKind::Drag(MouseButton::Left), 7, 3);
        assert_eq!(
            to_msg(ev),
            Some(Msg::Mouse {
                action: MouseAction::Main,
                pos: Point::new(3, 7)
            })
        );
        let ev = mouse(MouseEventKind::Down(MouseButton::Right), 0, 0);
        assert!(matches!(
            to_msg(ev),
            Some(Msg::Mouse {
                action: MouseAction::Secondary,
                ..
            })
        ));
        assert_eq!(to_msg(mouse(MouseEventKind::ScrollUp, 0, 0)), None);
    }
}
