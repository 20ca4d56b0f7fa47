use tauri_specta::Event;

use super::error::CapabilityError;
use super::events::SpeechDirective;
use super::host::SpeechHost;
use crate::language::Language;

/// Speech host backed by the application webview.
///
/// Recognition and synthesis run inside the webview (Web Speech API); this
/// side only dispatches directives to it.
pub struct WebviewHost {
    app_handle: tauri::AppHandle,
}

impl WebviewHost {
    pub fn new(app_handle: tauri::AppHandle) -> Self {
        Self { app_handle }
    }

    fn dispatch(&self, directive: SpeechDirective) -> Result<(), CapabilityError> {
        directive
            .emit(&self.app_handle)
            .map_err(|e| CapabilityError::Dispatch(e.to_string()))
    }
}

impl SpeechHost for WebviewHost {
    fn start_recognition(&self, language: Language) -> Result<(), CapabilityError> {
        self.dispatch(SpeechDirective::StartRecognition {
            language,
            continuous: true,
        })
    }

    fn stop_recognition(&self) -> Result<(), CapabilityError> {
        self.dispatch(SpeechDirective::StopRecognition)
    }

    fn speak(&self, text: &str, language: Language) -> Result<(), CapabilityError> {
        self.dispatch(SpeechDirective::Speak {
            text: text.to_string(),
            language,
        })
    }
}
