mod commands;
mod error;
mod export;
mod language;
mod log;
mod session;
mod setup;
pub mod specta;
mod speech;

pub use error::Error;

pub fn run() {
    let specta_builder = specta::builder();

    tauri::Builder::default()
        .plugin(log::create_plugin().build())
        .plugin(tauri_plugin_dialog::init())
        .invoke_handler(specta_builder.invoke_handler())
        .setup(move |app| {
            specta_builder.mount_events(app);
            setup::setup_app(app)
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
