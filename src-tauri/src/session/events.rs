//! Typesafe events for the session module.
//!
//! These events are emitted from Rust and can be listened to in the
//! frontend with full type safety via tauri-specta.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Session state change event - single event stream for all state transitions
#[derive(Debug, Clone, Serialize, Deserialize, specta::Type, tauri_specta::Event)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SessionStateChanged {
    /// Listening has started
    #[serde(rename = "started")]
    Started,
    /// Listening has stopped; the transcript stays as-is
    #[serde(rename = "stopped")]
    Stopped,
    /// Session was reset to its initial state (language excepted)
    #[serde(rename = "reset")]
    Reset,
    /// The active language changed
    #[serde(rename = "languageChanged")]
    LanguageChanged { language: Language },
    /// A capability failed; non-fatal, prior state is intact
    #[serde(rename = "error")]
    Error {
        /// Type of error: "recognition" | "synthesis" | "clipboard"
        #[serde(rename = "errorType")]
        error_type: String,
        /// Technical error message for debugging
        #[serde(rename = "errorMessage")]
        error_message: String,
        /// User-friendly error message
        #[serde(rename = "userMessage")]
        user_message: String,
    },
}

/// Transcript update event - higher-frequency stream kept separate from
/// the state changes above
#[derive(Debug, Clone, Serialize, Deserialize, specta::Type, tauri_specta::Event)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptChanged {
    /// The full current transcript
    pub text: String,
    /// Non-whitespace character count derived from `text`
    pub char_count: u32,
}
