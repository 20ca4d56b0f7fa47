use log::debug;

use super::error::CapabilityError;
use super::host::SpeechHost;
use crate::language::Language;

/// Reads the transcript back aloud through a `SpeechHost`.
pub struct Narrator {
    host: Box<dyn SpeechHost>,
}

impl Narrator {
    pub fn new(host: Box<dyn SpeechHost>) -> Self {
        Self { host }
    }

    /// Submit the transcript as one utterance tagged with `language`.
    ///
    /// # Returns
    /// * `Ok(true)` - An utterance was submitted
    /// * `Ok(false)` - Transcript was empty, nothing submitted
    /// * `Err(CapabilityError)` - The synthesis capability was unreachable
    pub fn narrate(&self, transcript: &str, language: Language) -> Result<bool, CapabilityError> {
        if transcript.is_empty() {
            debug!("Skipping narration of empty transcript");
            return Ok(false);
        }

        self.host.speak(transcript, language)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct MockSpeechHost {
        utterances: Arc<Mutex<Vec<(String, Language)>>>,
    }

    impl MockSpeechHost {
        fn utterances(&self) -> Vec<(String, Language)> {
            self.utterances.lock().unwrap().clone()
        }
    }

    impl SpeechHost for MockSpeechHost {
        fn start_recognition(&self, _language: Language) -> Result<(), CapabilityError> {
            Ok(())
        }

        fn stop_recognition(&self) -> Result<(), CapabilityError> {
            Ok(())
        }

        fn speak(&self, text: &str, language: Language) -> Result<(), CapabilityError> {
            self.utterances
                .lock()
                .unwrap()
                .push((text.to_string(), language));
            Ok(())
        }
    }

    #[test]
    fn empty_transcript_submits_nothing() {
        let host = MockSpeechHost::default();
        let narrator = Narrator::new(Box::new(host.clone()));

        let spoke = narrator.narrate("", Language::EnglishUs).unwrap();
        assert!(!spoke);
        assert!(host.utterances().is_empty());
    }

    #[test]
    fn utterance_carries_text_and_language_tag() {
        let host = MockSpeechHost::default();
        let narrator = Narrator::new(Box::new(host.clone()));

        let spoke = narrator.narrate("bonjour", Language::French).unwrap();
        assert!(spoke);

        let utterances = host.utterances();
        assert_eq!(utterances.len(), 1);
        assert_eq!(utterances[0].0, "bonjour");
        assert_eq!(utterances[0].1.tag(), "fr-FR");
    }
}
