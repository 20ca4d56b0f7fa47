use std::str::FromStr;
use std::sync::Arc;

use tauri::State;

use crate::language::{all_languages, Language, LanguageOption};
use crate::session::{SessionCommand, SessionSnapshot, SessionStateManager, SharedSessionStore};
use crate::setup::{RecognitionSupport, SessionCommandSender};
use crate::speech::CapabilityError;

// ===== SESSION CONTROL COMMANDS =====

#[tauri::command]
#[specta::specta]
pub fn toggle_recording(
    sender: State<SessionCommandSender>,
    support: State<RecognitionSupport>,
) -> Result<(), String> {
    if !support.is_supported() {
        return Err(CapabilityError::Unsupported.user_message());
    }

    sender
        .sender
        .blocking_send(SessionCommand::Toggle)
        .map_err(|e| format!("Failed to send Toggle command: {}", e))?;

    Ok(())
}

#[tauri::command]
#[specta::specta]
pub fn reset_session(sender: State<SessionCommandSender>) -> Result<(), String> {
    sender
        .sender
        .blocking_send(SessionCommand::Reset)
        .map_err(|e| format!("Failed to send Reset command: {}", e))?;

    Ok(())
}

#[tauri::command]
#[specta::specta]
pub fn set_language(code: String, sender: State<SessionCommandSender>) -> Result<(), String> {
    // Reject anything outside the fixed set before it can touch state
    let language = Language::from_str(&code)
        .map_err(|_| format!("Unsupported language code: {}", code))?;

    sender
        .sender
        .blocking_send(SessionCommand::SetLanguage(language))
        .map_err(|e| format!("Failed to send SetLanguage command: {}", e))?;

    Ok(())
}

// ===== SNAPSHOT QUERIES =====

#[tauri::command]
#[specta::specta]
pub fn get_session(
    store: State<SharedSessionStore>,
    state_manager: State<Arc<SessionStateManager>>,
) -> SessionSnapshot {
    store
        .lock()
        .unwrap()
        .snapshot(state_manager.is_listening())
}

#[tauri::command]
#[specta::specta]
pub fn get_languages() -> Vec<LanguageOption> {
    all_languages()
}

// ===== CAPABILITY BRIDGE (webview -> Rust) =====

#[tauri::command]
#[specta::specta]
pub fn push_transcript(text: String, sender: State<SessionCommandSender>) -> Result<(), String> {
    sender
        .sender
        .blocking_send(SessionCommand::TranscriptUpdate(text))
        .map_err(|e| format!("Failed to send TranscriptUpdate command: {}", e))?;

    Ok(())
}

#[tauri::command]
#[specta::specta]
pub fn report_capture_error(
    reason: String,
    sender: State<SessionCommandSender>,
) -> Result<(), String> {
    sender
        .sender
        .blocking_send(SessionCommand::CaptureFailed(reason))
        .map_err(|e| format!("Failed to send CaptureFailed command: {}", e))?;

    Ok(())
}

#[tauri::command]
#[specta::specta]
pub fn set_recognition_supported(
    supported: bool,
    support: State<RecognitionSupport>,
) -> Result<(), String> {
    if !supported {
        log::warn!("Webview reported no speech recognition capability");
    }
    support.set(supported);
    Ok(())
}
