use derive_more::From;

#[derive(Debug, From)]
pub enum Error {
    #[from]
    Capability(crate::speech::CapabilityError),

    #[from]
    Tauri(tauri::Error),
}
