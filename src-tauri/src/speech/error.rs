#[derive(Debug, thiserror::Error)]
pub enum CapabilityError {
    #[error("speech recognition is not supported by this environment")]
    Unsupported,
    #[error("microphone permission denied")]
    PermissionDenied,
    #[error("recognition failed: {0}")]
    CaptureFailed(String),
    #[error("synthesis failed: {0}")]
    SynthesisFailed(String),
    #[error("failed to reach the capability host: {0}")]
    Dispatch(String),
}

impl CapabilityError {
    /// Returns a user-friendly error message suitable for display in the UI
    pub fn user_message(&self) -> String {
        match self {
            CapabilityError::Unsupported => {
                "Your browser engine doesn't support speech recognition.".to_string()
            }
            CapabilityError::PermissionDenied => {
                "Microphone access was denied. Allow it and try again.".to_string()
            }
            CapabilityError::CaptureFailed(_) => {
                "Speech recognition stopped unexpectedly. Try again.".to_string()
            }
            CapabilityError::SynthesisFailed(_) => {
                "Could not read the transcript aloud. Try again.".to_string()
            }
            CapabilityError::Dispatch(_) => {
                "Could not reach the speech engine. Try again.".to_string()
            }
        }
    }

    /// Classify a Web Speech API error code reported by the frontend.
    ///
    /// Permission problems get their own variant so the UI can point the
    /// user at the right fix; everything else is a generic capture failure.
    pub fn from_capture_reason(reason: String) -> Self {
        match reason.as_str() {
            "not-allowed" | "service-not-allowed" => CapabilityError::PermissionDenied,
            _ => CapabilityError::CaptureFailed(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_codes_map_to_permission_denied() {
        assert!(matches!(
            CapabilityError::from_capture_reason("not-allowed".to_string()),
            CapabilityError::PermissionDenied
        ));
        assert!(matches!(
            CapabilityError::from_capture_reason("audio-capture".to_string()),
            CapabilityError::CaptureFailed(_)
        ));
    }
}
