use std::fs::{self, File};
use std::path::Path;

pub fn file_exists(file_name: &str) -> bool {
    File::open(file_name).is_ok()
}

pub fn create_directories_if_needed(file_name: &str) {
    if let Some(parent) = Path::new(file_name).parent() {
        let _ = fs::create_dir_all(parent);
    }
}
