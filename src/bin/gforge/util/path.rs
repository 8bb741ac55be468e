use std::path::{Path, PathBuf};

/// File name without its final extension, if the path has one.
pub fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
}

pub fn gpf_path(prefix: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}.gpf"))
}
