//! Typesafe directives for the webview half of the capability bridge.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Instruction sent to the webview, which owns the actual speech engines
#[derive(Debug, Clone, Serialize, Deserialize, specta::Type, tauri_specta::Event)]
#[serde(tag = "directive", rename_all = "camelCase")]
pub enum SpeechDirective {
    /// Begin recognition; the webview pushes transcripts back via
    /// `push_transcript`
    #[serde(rename = "startRecognition")]
    StartRecognition {
        language: Language,
        /// Keep listening across pauses until explicitly stopped
        continuous: bool,
    },
    /// Stop recognition
    #[serde(rename = "stopRecognition")]
    StopRecognition,
    /// Cancel pending synthesis and speak this utterance
    #[serde(rename = "speak")]
    Speak { text: String, language: Language },
}
