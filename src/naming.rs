use std::path::{Path, PathBuf};

pub const DEFAULT_SUFFIX: &str = "_dithered";

/// Derive an output filename by inserting a suffix before the extension,
/// keeping the directory and the original extension.
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}
