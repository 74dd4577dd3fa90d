use super::super::state::App;
use super::Effect;
use al_bayan_core::config::{
    ARABIC_FONT_SIZE_RANGE, ArabicFont, Script, TRANSLATION_FONT_SIZE_RANGE,
};
use tracing::{debug, info};

impl App {
    pub(super) fn handle_toggle_sidebar(&mut self) {
        self.config.show_sidebar = !self.config.show_sidebar;
        debug!(visible = self.config.show_sidebar, "Toggled chapter sidebar");
    }

    pub(super) fn handle_toggle_settings(&mut self) {
        self.config.show_settings = !self.config.show_settings;
        debug!(visible = self.config.show_settings, "Toggled settings panel");
    }

    pub(super) fn handle_toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        info!(theme = ?self.config.theme, "Theme toggled");
    }

    pub(super) fn handle_script_changed(&mut self, script: Script) {
        info!(%script, "Arabic script changed");
        self.config.script = script;
    }

    pub(super) fn handle_arabic_font_changed(&mut self, font: ArabicFont) {
        info!(%font, "Arabic font changed");
        self.config.arabic_font = font;
    }

    pub(super) fn handle_arabic_font_size_changed(&mut self, size: u32) {
        self.config.arabic_font_size = size.clamp(ARABIC_FONT_SIZE_RANGE.0, ARABIC_FONT_SIZE_RANGE.1);
    }

    pub(super) fn handle_translation_font_size_changed(&mut self, size: u32) {
        self.config.translation_font_size =
            size.clamp(TRANSLATION_FONT_SIZE_RANGE.0, TRANSLATION_FONT_SIZE_RANGE.1);
    }

    pub(super) fn handle_show_translation_changed(&mut self, show: bool) {
        self.config.show_translation = show;
    }

    /// Turning auto-scroll on jumps straight to the active verse.
    pub(super) fn handle_auto_scroll_changed(&mut self, enabled: bool, effects: &mut Vec<Effect>) {
        self.config.auto_scroll = enabled;
        if enabled {
            if let Some(index) = self.player.sequencer.cursor() {
                effects.push(Effect::ScrollToVerse(index));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{test_app, verses};
    use super::*;
    use al_bayan_core::config::ThemeMode;

    #[test]
    fn font_sizes_are_clamped() {
        let mut app = test_app();

        app.handle_arabic_font_size_changed(200);
        app.handle_translation_font_size_changed(2);

        assert_eq!(app.config.arabic_font_size, ARABIC_FONT_SIZE_RANGE.1);
        assert_eq!(app.config.translation_font_size, TRANSLATION_FONT_SIZE_RANGE.0);
    }

    #[test]
    fn theme_toggles_between_day_and_night() {
        let mut app = test_app();
        assert_eq!(app.config.theme, ThemeMode::Day);
        app.handle_toggle_theme();
        assert_eq!(app.config.theme, ThemeMode::Night);
        app.handle_toggle_theme();
        assert_eq!(app.config.theme, ThemeMode::Day);
    }

    #[test]
    fn panels_toggle_independently() {
        let mut app = test_app();
        let sidebar = app.config.show_sidebar;
        let settings = app.config.show_settings;

        app.handle_toggle_settings();

        assert_eq!(app.config.show_sidebar, sidebar);
        assert_eq!(app.config.show_settings, !settings);
    }

    #[test]
    fn enabling_auto_scroll_jumps_to_active_verse() {
        let mut app = test_app();
        app.config.auto_scroll = false;
        let mut effects = Vec::new();
        app.handle_chapter_selected(1, &mut effects);
        app.handle_verses_loaded(1, 1, verses(1, 7), &mut effects);
        app.handle_verse_clicked(4, &mut effects);
        effects.clear();

        app.handle_auto_scroll_changed(true, &mut effects);

        assert!(matches!(effects[..], [Effect::ScrollToVerse(4)]));
    }

    #[test]
    fn enabling_auto_scroll_without_active_verse_does_nothing() {
        let mut app = test_app();
        let mut effects = Vec::new();
        app.handle_auto_scroll_changed(true, &mut effects);
        assert!(effects.is_empty());
    }
}
