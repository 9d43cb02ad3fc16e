//! Key-to-message translation

use crate::input_key::InputKey;
use crate::message::Message;

/// Translate one key press into a message, if it is bound.
pub fn handle_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::SelectPrevRow),
        InputKey::Down => Some(Message::SelectNextRow),
        InputKey::Enter | InputKey::Char('c') => Some(Message::CopySelected),
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::RequestQuit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_keys() {
        assert!(matches!(
            handle_key(InputKey::Up),
            Some(Message::SelectPrevRow)
        ));
        assert!(matches!(
            handle_key(InputKey::Down),
            Some(Message::SelectNextRow)
        ));
    }

    #[test]
    fn test_copy_keys() {
        assert!(matches!(
            handle_key(InputKey::Enter),
            Some(Message::CopySelected)
        ));
        assert!(matches!(
            handle_key(InputKey::Char('c')),
            Some(Message::CopySelected)
        ));
    }

    #[test]
    fn test_quit_keys() {
        assert!(matches!(
            handle_key(InputKey::Char('q')),
            Some(Message::RequestQuit)
        ));
        assert!(matches!(
            handle_key(InputKey::CharCtrl('c')),
            Some(Message::RequestQuit)
        ));
        assert!(matches!(
            handle_key(InputKey::Esc),
            Some(Message::RequestQuit)
        ));
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        assert!(handle_key(InputKey::Char('x')).is_none());
        assert!(handle_key(InputKey::CharCtrl('z')).is_none());
    }
}
