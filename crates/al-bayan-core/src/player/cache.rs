use std::collections::HashMap;
use tracing::debug;

/// Verse key to resolved audio URL, valid for exactly one narrator.
#[derive(Debug, Clone)]
pub struct AudioUrlCache {
    narrator: u32,
    entries: HashMap<String, String>,
}

impl AudioUrlCache {
    pub fn new(narrator: u32) -> Self {
        Self {
            narrator,
            entries: HashMap::new(),
        }
    }

    pub fn narrator(&self) -> u32 {
        self.narrator
    }

    pub fn get(&self, verse_key: &str) -> Option<&str> {
        self.entries.get(verse_key).map(String::as_str)
    }

    pub fn contains(&self, verse_key: &str) -> bool {
        self.entries.contains_key(verse_key)
    }

    /// Stores `url` if it was resolved for the narrator the cache is bound
    /// to. Returns whether the entry was accepted.
    pub fn put(&mut self, narrator: u32, verse_key: &str, url: &str) -> bool {
        if narrator != self.narrator {
            debug!(
                narrator,
                bound = self.narrator,
                verse_key,
                "Rejecting audio URL resolved for another narrator"
            );
            return false;
        }
        self.entries.insert(verse_key.to_string(), url.to_string());
        true
    }

    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    /// Drops every entry and binds the cache to `narrator`.
    pub fn rebind(&mut self, narrator: u32) {
        debug!(
            from = self.narrator,
            to = narrator,
            dropped = self.entries.len(),
            "Rebinding audio URL cache"
        );
        self.invalidate_all();
        self.narrator = narrator;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_returns_urls_for_bound_narrator() {
        let mut cache = AudioUrlCache::new(7);
        assert!(cache.put(7, "1:1", "https://a/001001.mp3"));
        assert_eq!(cache.get("1:1"), Some("https://a/001001.mp3"));
        assert!(cache.contains("1:1"));
        assert_eq!(cache.get("1:2"), None);
    }

    #[test]
    fn rejects_urls_for_other_narrators() {
        let mut cache = AudioUrlCache::new(7);
        assert!(!cache.put(3, "1:1", "https://b/001001.mp3"));
        assert!(cache.is_empty());
    }

    #[test]
    fn rebind_clears_everything() {
        let mut cache = AudioUrlCache::new(7);
        cache.put(7, "1:1", "https://a/1");
        cache.put(7, "1:2", "https://a/2");

        cache.rebind(3);

        assert_eq!(cache.narrator(), 3);
        assert_eq!(cache.len(), 0);
        assert!(!cache.put(7, "1:1", "https://a/1"));
        assert!(cache.put(3, "1:1", "https://b/1"));
    }

    #[test]
    fn invalidate_keeps_binding() {
        let mut cache = AudioUrlCache::new(4);
        cache.put(4, "2:255", "https://a/2255");
        cache.invalidate_all();
        assert!(cache.is_empty());
        assert_eq!(cache.narrator(), 4);
    }
}
