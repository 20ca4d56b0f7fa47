//! tauri-specta glue: one builder covering every command and event, so
//! the frontend gets fully typed bindings.

use tauri_specta::{collect_events, Builder};

use crate::session::{SessionStateChanged, TranscriptChanged};
use crate::speech::SpeechDirective;
use crate::with_commands;

/// Builder listing every command and event visible to the frontend
pub fn builder() -> Builder<tauri::Wry> {
    Builder::<tauri::Wry>::new()
        .commands(with_commands!(tauri_specta::collect_commands))
        .events(collect_events![
            SessionStateChanged,
            TranscriptChanged,
            SpeechDirective
        ])
}

/// Export TypeScript bindings for the frontend.
///
/// Run via `cargo test --test generate_bindings`; the path is relative to
/// the crate directory.
pub fn export_bindings(path: &str) {
    builder()
        .export(specta_typescript::Typescript::default(), path)
        .expect("failed to export typescript bindings");
}
