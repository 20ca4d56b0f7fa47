/// TypeScript Bindings Generator
///
/// The TypeScript bindings (ui/bindings.ts) are produced by tauri-specta
/// from the command and event registry. Running the full application to
/// regenerate them would mean launching the GUI and granting microphone
/// permission, so this test provides a lightweight alternative.
///
/// ## Usage:
/// ```bash
/// cargo test --test generate_bindings
/// ```
#[test]
fn generate_bindings() {
    voxpad_lib::specta::export_bindings("../ui/bindings.ts");
}
