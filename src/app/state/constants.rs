use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use std::time::Duration;

pub(crate) static READER_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("reader-scroll"));

/// How often the sink is polled for end of track.
pub(crate) const PLAYBACK_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub(crate) const SIDEBAR_WIDTH_PX: f32 = 300.0;
pub(crate) const SETTINGS_WIDTH_PX: f32 = 280.0;
pub(crate) const BISMILLAH: &str = "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ";
