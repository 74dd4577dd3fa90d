//! GUI-free core of the Al-Bayan reader.
//!
//! - `api`: the remote content source (quran.com v4) and its data model.
//! - `library`: chapter/verse/reciter loading with failures folded into empty results.
//! - `player`: the audio URL cache and the playback sequencer state machine.
//! - `config`: TOML-backed user configuration.
//! - `text_utils`: display helpers for verse text and search.

pub mod api;
pub mod config;
pub mod library;
pub mod player;
pub mod text_utils;
