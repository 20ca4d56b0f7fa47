use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Shared handle to the session store.
///
/// The controller thread is the only writer; Tauri commands take read
/// snapshots through this handle.
pub type SharedSessionStore = Arc<Mutex<SessionStore>>;

/// Owns the transcript, the selected language and the derived character
/// count. The listening flag lives in the state machine, not here.
#[derive(Debug)]
pub struct SessionStore {
    transcript: String,
    language: Language,
    char_count: usize,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            transcript: String::new(),
            language: Language::default(),
            char_count: 0,
        }
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Count of non-whitespace characters, recomputed on every transcript
    /// change and never mutated independently.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Replace the transcript with the capability's current full text.
    ///
    /// The recognition capability pushes cumulative results; the frontend
    /// normalizes them so this always receives the whole transcript.
    pub fn set_transcript(&mut self, transcript: String) {
        self.char_count = non_whitespace_len(&transcript);
        self.transcript = transcript;
    }

    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
        self.char_count = 0;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn snapshot(&self, listening: bool) -> SessionSnapshot {
        SessionSnapshot {
            transcript: self.transcript.clone(),
            char_count: self.char_count as u32,
            language: self.language,
            listening,
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time view of the session, sent to the frontend on request.
#[derive(Debug, Clone, Serialize, Deserialize, specta::Type)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub transcript: String,
    pub char_count: u32,
    pub language: Language,
    pub listening: bool,
}

/// Character count with every whitespace run removed. All Unicode
/// whitespace categories are treated uniformly.
fn non_whitespace_len(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_count_ignores_whitespace() {
        let cases = vec![
            ("hello world", 10),
            ("", 0),
            ("   ", 0),
            ("a b\tc\nd", 4),
            ("bonjour  le\u{00A0}monde", 14),
        ];

        for (text, expected) in cases {
            let mut store = SessionStore::new();
            store.set_transcript(text.to_string());
            assert_eq!(store.char_count(), expected, "text {:?}", text);
        }
    }

    #[test]
    fn clear_resets_transcript_and_count() {
        let mut store = SessionStore::new();
        store.set_transcript("hello world".to_string());
        assert_eq!(store.char_count(), 10);

        store.clear_transcript();
        assert_eq!(store.transcript(), "");
        assert_eq!(store.char_count(), 0);
    }

    #[test]
    fn language_survives_clear() {
        let mut store = SessionStore::new();
        store.set_language(Language::French);
        store.set_transcript("bonjour".to_string());

        store.clear_transcript();
        assert_eq!(store.language(), Language::French);
    }

    #[test]
    fn snapshot_reflects_current_fields() {
        let mut store = SessionStore::new();
        store.set_transcript("hello".to_string());
        store.set_language(Language::Hindi);

        let snapshot = store.snapshot(true);
        assert_eq!(snapshot.transcript, "hello");
        assert_eq!(snapshot.char_count, 5);
        assert_eq!(snapshot.language, Language::Hindi);
        assert!(snapshot.listening);
    }
}
