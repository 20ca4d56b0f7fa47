use tauri::State;
use tauri_plugin_dialog::DialogExt;

use crate::export::{self, EXPORT_FILE_NAME};
use crate::session::SharedSessionStore;
use crate::speech::{Narrator, WebviewHost};

// ===== EXPORT COMMANDS =====

/// Offer the transcript as a plain-text download.
///
/// # Returns
/// * `Ok(true)` - The file was written
/// * `Ok(false)` - Nothing to save, or the user cancelled the dialog
#[tauri::command]
#[specta::specta]
pub fn save_transcript(
    app: tauri::AppHandle,
    store: State<SharedSessionStore>,
) -> Result<bool, String> {
    let transcript = store.lock().unwrap().transcript().to_string();
    if transcript.is_empty() {
        return Ok(false);
    }

    let picked = app
        .dialog()
        .file()
        .set_file_name(EXPORT_FILE_NAME)
        .add_filter("Plain text", &["txt"])
        .blocking_save_file();

    let Some(file_path) = picked else {
        return Ok(false);
    };

    let path = file_path
        .into_path()
        .map_err(|e| format!("Unusable save location: {}", e))?;

    export::write_transcript(&path, &transcript).map_err(|e| e.user_message())?;
    Ok(true)
}

/// Place the transcript on the system clipboard. Always attempted; the
/// empty-transcript guard in the UI is visual only.
#[tauri::command]
#[specta::specta]
pub fn copy_transcript(store: State<SharedSessionStore>) -> Result<(), String> {
    let transcript = store.lock().unwrap().transcript().to_string();

    export::copy_to_clipboard(&transcript).map_err(|e| e.user_message())
}

/// Read the transcript back aloud with the active language.
///
/// # Returns
/// * `Ok(true)` - An utterance was submitted
/// * `Ok(false)` - Transcript was empty, nothing submitted
#[tauri::command]
#[specta::specta]
pub fn speak_transcript(
    app: tauri::AppHandle,
    store: State<SharedSessionStore>,
) -> Result<bool, String> {
    let (transcript, language) = {
        let store = store.lock().unwrap();
        (store.transcript().to_string(), store.language())
    };

    let narrator = Narrator::new(Box::new(WebviewHost::new(app)));
    narrator
        .narrate(&transcript, language)
        .map_err(|e| e.user_message())
}
