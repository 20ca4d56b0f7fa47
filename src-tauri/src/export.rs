use std::path::Path;

use arboard::Clipboard;
use log::info;

/// Suggested filename for the save dialog
pub const EXPORT_FILE_NAME: &str = "transcript.txt";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("clipboard error: {0}")]
    Clipboard(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Returns a user-friendly error message suitable for display in the UI
    pub fn user_message(&self) -> String {
        match self {
            ExportError::Clipboard(_) => {
                "Could not copy to the clipboard. Try again.".to_string()
            }
            ExportError::Io(_) => "Could not write the transcript file.".to_string(),
        }
    }
}

/// Write the exact transcript bytes to `path` (UTF-8, no header)
pub fn write_transcript(path: &Path, transcript: &str) -> Result<(), ExportError> {
    std::fs::write(path, transcript.as_bytes())?;
    info!(
        "Saved transcript ({} bytes) to {}",
        transcript.len(),
        path.display()
    );
    Ok(())
}

/// Place the exact transcript string onto the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<(), ExportError> {
    let mut clipboard =
        Clipboard::new().map_err(|e| ExportError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ExportError::Clipboard(e.to_string()))?;

    info!("Copied transcript to clipboard ({} chars)", text.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_file_contains_exact_transcript_bytes() {
        let path =
            std::env::temp_dir().join(format!("voxpad-export-test-{}.txt", std::process::id()));

        write_transcript(&path, "hello").unwrap();
        let contents = std::fs::read(&path).unwrap();
        assert_eq!(contents, b"hello");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unicode_transcripts_round_trip() {
        let path =
            std::env::temp_dir().join(format!("voxpad-export-utf8-{}.txt", std::process::id()));

        write_transcript(&path, "नमस्ते दुनिया").unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "नमस्ते दुनिया");

        let _ = std::fs::remove_file(&path);
    }
}
