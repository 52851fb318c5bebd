pub mod load;
pub mod save;
pub mod types;

pub use types::{
    Camera, CameraTable, Config, ExtensionSet, FolderNames, Language, MAX_RECENT_PATHS,
    UserSettings,
};
