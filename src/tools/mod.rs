mod file_mover;
mod file_scanner;
mod folder_state;
mod path_validator;

pub use file_mover::{MoveRecord, move_file};
pub use file_scanner::scan_loose_files;
pub use folder_state::{FolderState, detect_folder_state, is_classified, is_unclassified};
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
