//! Key bindings

use crossterm::event::KeyCode;

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleView,
    Up,
    Down,
    ToggleFavorite,
    Open,
    Home,
    Reload,
}

/// Map a key to an action
///
/// `Tab` only switches the view on the list.
pub fn map_key(code: KeyCode, on_list: bool) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Tab if !on_list => None,
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('h') | KeyCode::Backspace => {
            Some(Action::Home)
        }
        KeyCode::Tab => Some(Action::ToggleView),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Char(' ') | KeyCode::Char('f') => Some(Action::ToggleFavorite),
        KeyCode::Enter => Some(Action::Open),
        KeyCode::Char('r') => Some(Action::Reload),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_q_quits() {
        assert_eq!(map_key(KeyCode::Char('q'), true), Some(Action::Quit));
        assert_eq!(map_key(KeyCode::Char('q'), false), Some(Action::Quit));
        assert_eq!(map_key(KeyCode::Esc, true), Some(Action::Home));
        assert_eq!(map_key(KeyCode::Esc, false), Some(Action::Home));
        assert_eq!(map_key(KeyCode::Char('b'), false), Some(Action::Home));
    }

    #[test]
    fn test_tab_ignored_off_list() {
        assert_eq!(map_key(KeyCode::Tab, true), Some(Action::ToggleView));
        assert_eq!(map_key(KeyCode::Tab, false), None);
    }

    #[test]
    fn test_vim_keys_match_arrows() {
        assert_eq!(map_key(KeyCode::Char('j'), true), map_key(KeyCode::Down, true));
        assert_eq!(map_key(KeyCode::Char('k'), true), map_key(KeyCode::Up, true));
    }

    #[test]
    fn test_favorite_keys() {
        assert_eq!(map_key(KeyCode::Char(' '), true), Some(Action::ToggleFavorite));
        assert_eq!(map_key(KeyCode::Char('f'), false), Some(Action::ToggleFavorite));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(map_key(KeyCode::Char('z'), true), None);
        assert_eq!(map_key(KeyCode::F(1), false), None);
    }
}
