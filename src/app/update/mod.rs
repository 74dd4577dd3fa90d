use al_bayan_core::player::SequencerAction;

mod appearance;
mod core;
mod library;
mod player;
#[cfg(test)]
mod test_support;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug)]
pub(in crate::app) enum Effect {
    LoadChapters,
    LoadReciters,
    LoadVerses { chapter_id: u32, request_id: u64 },
    Player(SequencerAction),
    ScrollToVerse(usize),
    ScrollToTop,
    QuitSafely,
}
