use super::messages::Message;
use super::state::{App, BISMILLAH, READER_SCROLL_ID, SETTINGS_WIDTH_PX, SIDEBAR_WIDTH_PX};
use crate::theme;
use al_bayan_core::api::{Chapter, Verse};
use al_bayan_core::config::{
    ARABIC_FONT_SIZE_RANGE, ArabicFont, Script, TRANSLATION_FONT_SIZE_RANGE, ThemeMode,
};
use al_bayan_core::text_utils::{arabic_text, translation_text};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::text::{Shaping, Wrapping};
use iced::widget::{
    Column, Row, button, checkbox, column, container, horizontal_space, mouse_area, pick_list,
    row, scrollable, slider, text, text_input,
};
use iced::{Element, Length, Theme as IcedTheme};

type ButtonStyle = fn(&IcedTheme, button::Status) -> button::Style;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let mut body: Row<'_, Message> = row![].spacing(12).height(Length::Fill);

        if self.config.show_sidebar {
            body = body.push(self.sidebar());
        }
        body = body.push(self.reader_view());
        if self.config.show_settings {
            body = body.push(self.settings_panel());
        }

        column![self.header(), body, self.player_bar()]
            .padding(12)
            .spacing(12)
            .into()
    }
}

impl App {
    fn header(&self) -> Element<'_, Message> {
        let theme_label = if matches!(self.config.theme, ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };
        let chapter_name = self
            .current_chapter()
            .map(|chapter| chapter.name_arabic.clone())
            .unwrap_or_default();

        row![
            text("Al-Bayan").size(22.0),
            text(chapter_name)
                .size(22.0)
                .font(self.arabic_font())
                .shaping(Shaping::Advanced),
            horizontal_space(),
            button(if self.config.show_sidebar {
                "Hide Chapters"
            } else {
                "Show Chapters"
            })
            .on_press(Message::ToggleSidebar),
            button(if self.config.show_settings {
                "Hide Settings"
            } else {
                "Show Settings"
            })
            .on_press(Message::ToggleSettings),
            button(theme_label).on_press(Message::ToggleTheme),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .into()
    }

    fn sidebar(&self) -> Element<'_, Message> {
        let search = text_input("Search chapters", &self.library.search)
            .on_input(Message::SearchChanged)
            .padding(6);

        let list: Element<'_, Message> = if self.library.chapters_loading {
            text("Loading chapters...").into()
        } else if self.library.chapters.is_empty() {
            text("No chapters available").into()
        } else {
            let entries = self
                .library
                .visible_chapters()
                .into_iter()
                .map(|chapter| self.chapter_entry(chapter));
            scrollable(Column::with_children(entries).spacing(4))
                .height(Length::Fill)
                .into()
        };

        container(column![search, list].spacing(8))
            .padding(8)
            .width(Length::Fixed(SIDEBAR_WIDTH_PX))
            .height(Length::Fill)
            .style(theme::panel)
            .into()
    }

    fn chapter_entry<'a>(&'a self, chapter: &'a Chapter) -> Element<'a, Message> {
        let selected = self.reader.chapter_id == Some(chapter.id);
        let style: ButtonStyle = if selected {
            button::primary
        } else {
            button::text
        };

        let label = column![
            row![
                text(format!("{}. {}", chapter.id, chapter.name_simple)),
                horizontal_space(),
                text(&chapter.name_arabic)
                    .font(self.arabic_font())
                    .shaping(Shaping::Advanced),
            ]
            .align_y(Vertical::Center),
            text(format!(
                "{} · {} verses",
                chapter.translated_name.name, chapter.verses_count
            ))
            .size(12.0),
        ]
        .spacing(2);

        button(label)
            .on_press(Message::ChapterSelected(chapter.id))
            .style(style)
            .width(Length::Fill)
            .into()
    }

    fn reader_view(&self) -> Element<'_, Message> {
        let Some(chapter) = self.current_chapter() else {
            let placeholder = if self.library.chapters_loading {
                "Loading chapters..."
            } else {
                "Select a chapter"
            };
            return container(text(placeholder))
                .center(Length::Fill)
                .into();
        };

        let mut content: Column<'_, Message> = column![
            text(&chapter.name_arabic)
                .size(self.config.arabic_font_size as f32 + 8.0)
                .font(self.arabic_font())
                .shaping(Shaping::Advanced)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        ]
        .spacing(12)
        .padding(8);

        if chapter.bismillah_pre {
            content = content.push(
                text(BISMILLAH)
                    .size(self.config.arabic_font_size as f32)
                    .font(self.arabic_font())
                    .shaping(Shaping::Advanced)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            );
        }

        if self.reader.loading {
            content = content.push(text("Loading verses..."));
        } else if self.reader.verses.is_empty() {
            content = content.push(text("No verses loaded"));
        } else {
            for (index, verse) in self.reader.verses.iter().enumerate() {
                content = content.push(self.verse_card(index, verse));
            }
        }

        scrollable(content)
            .id(READER_SCROLL_ID.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn verse_card<'a>(&'a self, index: usize, verse: &'a Verse) -> Element<'a, Message> {
        let arabic = arabic_text(verse, self.config.script).unwrap_or("Loading Arabic...");
        let mut card: Column<'_, Message> = column![
            text(format!("{}  ·  {}", verse.number(), verse.verse_key)).size(12.0),
            text(arabic)
                .size(self.config.arabic_font_size as f32)
                .font(self.arabic_font())
                .shaping(Shaping::Advanced)
                .wrapping(Wrapping::WordOrGlyph)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        ]
        .spacing(8);

        if self.config.show_translation {
            let translation = translation_text(verse)
                .unwrap_or_else(|| "Translation not available".to_string());
            card = card.push(
                text(translation)
                    .size(self.config.translation_font_size as f32)
                    .width(Length::Fill),
            );
        }

        let highlight = self
            .player
            .sequencer
            .is_current(index)
            .then(|| theme::highlight_color(self.config.highlight()));

        mouse_area(
            container(card)
                .padding(12)
                .width(Length::Fill)
                .style(theme::verse_card(highlight)),
        )
        .on_press(Message::VerseClicked(index))
        .into()
    }

    fn settings_panel(&self) -> Element<'_, Message> {
        let reciter_picker: Element<'_, Message> = if self.library.reciters_loading {
            text("Loading reciters...").into()
        } else {
            pick_list(
                self.library.reciters.as_slice(),
                self.library.reciter(self.config.reciter_id),
                |reciter| Message::ReciterSelected(reciter.id),
            )
            .placeholder(self.current_reciter_label())
            .into()
        };

        let panel = column![
            text("Reader Settings").size(20.0),
            row![
                text("Script"),
                pick_list(Script::ALL, Some(self.config.script), Message::ScriptChanged),
            ]
            .spacing(8)
            .align_y(Vertical::Center),
            row![
                text("Arabic font"),
                pick_list(
                    ArabicFont::ALL,
                    Some(self.config.arabic_font),
                    Message::ArabicFontChanged,
                ),
            ]
            .spacing(8)
            .align_y(Vertical::Center),
            column![
                text(format!("Arabic size: {}", self.config.arabic_font_size)),
                slider(
                    ARABIC_FONT_SIZE_RANGE.0 as f32..=ARABIC_FONT_SIZE_RANGE.1 as f32,
                    self.config.arabic_font_size as f32,
                    |value| Message::ArabicFontSizeChanged(value.round() as u32),
                ),
            ]
            .spacing(4),
            column![
                text(format!(
                    "Translation size: {}",
                    self.config.translation_font_size
                )),
                slider(
                    TRANSLATION_FONT_SIZE_RANGE.0 as f32..=TRANSLATION_FONT_SIZE_RANGE.1 as f32,
                    self.config.translation_font_size as f32,
                    |value| Message::TranslationFontSizeChanged(value.round() as u32),
                ),
            ]
            .spacing(4),
            checkbox("Show translation", self.config.show_translation)
                .on_toggle(Message::ShowTranslationChanged),
            checkbox("Auto-scroll to active verse", self.config.auto_scroll)
                .on_toggle(Message::AutoScrollChanged),
            text("Reciter").size(18.0),
            reciter_picker,
        ]
        .spacing(12);

        container(panel)
            .padding(12)
            .width(Length::Fixed(SETTINGS_WIDTH_PX))
            .height(Length::Fill)
            .style(theme::panel)
            .into()
    }

    fn player_bar(&self) -> Element<'_, Message> {
        let sequencer = &self.player.sequencer;
        let has_verses = sequencer.verse_count() > 0;

        let verse_label = sequencer
            .current_key()
            .map(|key| format!("Verse {key}"))
            .unwrap_or_else(|| "No verse selected".to_string());
        let status = if sequencer.is_loading() {
            "Loading audio..."
        } else {
            ""
        };

        let play_label = if sequencer.play_intent() {
            "Pause"
        } else {
            "Play"
        };
        let play_button = button(play_label).on_press_maybe(has_verses.then_some(Message::TogglePlayPause));
        let prev_button = button("Previous").on_press_maybe(
            sequencer
                .cursor()
                .is_some_and(|index| index > 0)
                .then_some(Message::PreviousVerse),
        );
        let next_button = button("Next").on_press_maybe(
            (has_verses
                && sequencer
                    .cursor()
                    .is_none_or(|index| index + 1 < sequencer.verse_count()))
            .then_some(Message::NextVerse),
        );

        let controls = row![
            column![text(verse_label), text(self.current_reciter_label()).size(12.0)].spacing(2),
            text(status),
            horizontal_space(),
            prev_button,
            play_button,
            next_button,
            checkbox("Auto-play next verse", self.config.auto_advance)
                .on_toggle(Message::AutoAdvanceChanged),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        container(controls)
            .padding(8)
            .width(Length::Fill)
            .style(theme::panel)
            .into()
    }

    fn current_chapter(&self) -> Option<&Chapter> {
        self.reader
            .chapter_id
            .and_then(|id| self.library.chapter(id))
    }
}
