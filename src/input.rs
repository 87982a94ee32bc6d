// Keyboard mapping for the widgets.
// Translates crossterm key events into tab navigation and activation.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::tabs::TabInput;

/// Map a key press to tab strip navigation.
pub fn tab_input(key: &KeyEvent) -> Option<TabInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Left | KeyCode::Up => Some(TabInput::Previous),
        KeyCode::Right | KeyCode::Down => Some(TabInput::Next),
        KeyCode::Home => Some(TabInput::First),
        KeyCode::End => Some(TabInput::Last),
        _ => None,
    }
}

/// Space and Enter activate the focused control.
pub fn is_activation_key(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press && matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_mapping() {
        assert_eq!(tab_input(&press(KeyCode::Left)), Some(TabInput::Previous));
        assert_eq!(tab_input(&press(KeyCode::Up)), Some(TabInput::Previous));
        assert_eq!(tab_input(&press(KeyCode::Right)), Some(TabInput::Next));
        assert_eq!(tab_input(&press(KeyCode::Down)), Some(TabInput::Next));
        assert_eq!(tab_input(&press(KeyCode::Home)), Some(TabInput::First));
        assert_eq!(tab_input(&press(KeyCode::End)), Some(TabInput::Last));
        assert_eq!(tab_input(&press(KeyCode::Char('a'))), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Right,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(tab_input(&release), None);
        assert!(!is_activation_key(&KeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        )));
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key(&press(KeyCode::Char(' '))));
        assert!(is_activation_key(&press(KeyCode::Enter)));
        assert!(!is_activation_key(&press(KeyCode::Tab)));
    }
}
