//! Joins the text-only and translation-only verse payloads.
//!
//! The two requests share chapter, page and page size, so a translation is
//! attached by verse id first. Only when the translation payload has no entry
//! for that id does the merge fall back to the entry at the same position, and
//! only if that entry does not belong to another verse of the text payload.

use super::models::{Translation, Verse};
use std::collections::{HashMap, HashSet};

pub fn merge_translations(text: Vec<Verse>, translated: Vec<Verse>) -> Vec<Verse> {
    let text_ids: HashSet<u64> = text.iter().map(|verse| verse.id).collect();
    let by_id: HashMap<u64, &Verse> = translated.iter().map(|verse| (verse.id, verse)).collect();

    text.into_iter()
        .enumerate()
        .map(|(index, mut verse)| {
            let translations: Vec<Translation> = by_id
                .get(&verse.id)
                .copied()
                .or_else(|| {
                    translated
                        .get(index)
                        .filter(|candidate| !text_ids.contains(&candidate.id))
                })
                .map(|source| source.translations.clone())
                .unwrap_or_default();
            verse.translations = translations;
            verse
        })
        .collect()
}
