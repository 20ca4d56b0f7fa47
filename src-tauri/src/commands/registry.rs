/// Single source of truth for all commands
/// This macro takes a wrapper macro path and applies it to the command list
#[macro_export]
macro_rules! with_commands {
    ($($wrapper:tt)*) => {
        $($wrapper)*![
            // Session control
            $crate::commands::toggle_recording,
            $crate::commands::reset_session,
            $crate::commands::set_language,
            // Snapshots
            $crate::commands::get_session,
            $crate::commands::get_languages,
            // Capability bridge (webview -> Rust)
            $crate::commands::push_transcript,
            $crate::commands::report_capture_error,
            $crate::commands::set_recognition_supported,
            // Export
            $crate::commands::save_transcript,
            $crate::commands::copy_transcript,
            $crate::commands::speak_transcript,
        ]
    };
}
