//! Text helpers for verse rendering and chapter search.

use crate::api::Verse;
use crate::config::Script;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static RE_FOOTNOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<sup\b[^>]*>.*?</sup>").unwrap());
static RE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static RE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static RE_SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([,.;:!?])").unwrap());

/// Turns translation HTML into a single line of plain text, dropping
/// footnote markers.
pub fn clean_translation(html: &str) -> String {
    let without_notes = RE_FOOTNOTE.replace_all(html, "");
    // Wide enough that html2text never inserts its own line breaks.
    let plain = match html2text::from_read(without_notes.as_bytes(), 10_000) {
        Ok(clean) => clean,
        Err(err) => {
            warn!("html2text failed on translation: {err}");
            RE_TAG.replace_all(&without_notes, "").into_owned()
        }
    };
    let collapsed = RE_WS.replace_all(plain.trim(), " ");
    RE_SPACE_BEFORE_PUNCT
        .replace_all(&collapsed, "$1")
        .into_owned()
}

/// Arabic text of `verse` in `script`. IndoPak falls back to Uthmani when the
/// payload has no IndoPak rendering.
pub fn arabic_text(verse: &Verse, script: Script) -> Option<&str> {
    fn non_empty(text: &Option<String>) -> Option<&str> {
        text.as_deref().map(str::trim).filter(|text| !text.is_empty())
    }

    match script {
        Script::Uthmani => non_empty(&verse.text_uthmani),
        Script::Indopak => non_empty(&verse.text_indopak).or_else(|| non_empty(&verse.text_uthmani)),
    }
}

/// First translation of `verse` as plain text, if any.
pub fn translation_text(verse: &Verse) -> Option<String> {
    verse
        .translations
        .first()
        .map(|translation| clean_translation(&translation.text))
        .filter(|text| !text.is_empty())
}

/// Lowercase, diacritic-free form of `text` with punctuation and spaces
/// removed, so "Āl ʿImrān" and "al-imran" compare equal. Spacing modifier
/// letters (ʿ ʾ) count as punctuation.
pub fn fold_for_search(text: &str) -> String {
    text.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .filter(|ch| !matches!(ch, '\u{02B0}'..='\u{02FF}'))
        .filter(|ch| ch.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
