use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Named(key::Named::ArrowRight) => "right".to_string(),
            Key::Named(key::Named::ArrowLeft) => "left".to_string(),
            Key::Named(key::Named::Escape) => "escape".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        let bindings: [(&str, &str, Message); 6] = [
            (self.config.key_toggle_play_pause.as_str(), "space", Message::TogglePlayPause),
            (self.config.key_next_verse.as_str(), "n", Message::NextVerse),
            (self.config.key_prev_verse.as_str(), "p", Message::PreviousVerse),
            (self.config.key_toggle_settings.as_str(), "ctrl+t", Message::ToggleSettings),
            (self.config.key_toggle_sidebar.as_str(), "ctrl+b", Message::ToggleSidebar),
            (self.config.key_safe_quit.as_str(), "q", Message::SafeQuit),
        ];

        bindings
            .into_iter()
            .find(|(raw, fallback, _)| Self::shortcut_matches(raw, fallback, &pressed, modifiers))
            .map(|(_, _, message)| message)
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let Some(required_key) = required_key else {
            return false;
        };
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized
                .replace("spacebar", "space")
                .replace("arrowright", "right")
                .replace("arrowleft", "left")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::update::test_support::test_app;
    use iced::keyboard::Modifiers;

    #[test]
    fn normalizes_key_aliases() {
        assert_eq!(App::normalize_shortcut_token(" SpaceBar ", "x"), "space");
        assert_eq!(App::normalize_shortcut_token("ArrowRight", "x"), "right");
        assert_eq!(App::normalize_shortcut_token("   ", "ctrl+t"), "ctrl+t");
    }

    #[test]
    fn matches_ctrl_shortcut() {
        assert!(App::shortcut_matches("ctrl+b", "x", "b", Modifiers::CTRL));
        assert!(!App::shortcut_matches("ctrl+b", "x", "b", Modifiers::empty()));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!App::shortcut_matches(
            "ctrl+t",
            "x",
            "t",
            Modifiers::CTRL | Modifiers::SHIFT,
        ));
    }

    #[test]
    fn modifier_only_binding_never_matches() {
        assert!(!App::shortcut_matches("ctrl", "x", "x", Modifiers::CTRL));
    }

    #[test]
    fn default_bindings_map_to_messages() {
        let app = test_app();

        let message = app.shortcut_message_for_key(
            Key::Named(key::Named::Space),
            Modifiers::empty(),
        );
        assert!(matches!(message, Some(Message::TogglePlayPause)));

        let message = app.shortcut_message_for_key(Key::Character("N".into()), Modifiers::empty());
        assert!(matches!(message, Some(Message::NextVerse)));

        let message = app.shortcut_message_for_key(Key::Character("t".into()), Modifiers::CTRL);
        assert!(matches!(message, Some(Message::ToggleSettings)));

        let message = app.shortcut_message_for_key(Key::Character("z".into()), Modifiers::empty());
        assert!(message.is_none());
    }
}
