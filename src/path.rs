use std::path::{Path, PathBuf};

/// How suite paths are shortened for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PathDisplay {
    /// Show the path as the host reported it.
    #[default]
    Full,

    /// Drop everything up to and including the first occurrence of the marker.
    ///
    /// Paths without the marker are shown unchanged.
    StripThrough(String),

    /// Show the path relative to a root directory.
    ///
    /// Paths outside of the root are shown unchanged.
    RelativeTo(PathBuf),
}

impl PathDisplay {
    pub fn apply(&self, path: &str) -> String {
        match self {
            PathDisplay::Full => path.to_string(),
            PathDisplay::StripThrough(marker) => match path.split_once(marker.as_str()) {
                Some((_, rest)) => rest.to_string(),
                None => path.to_string(),
            },
            PathDisplay::RelativeTo(root) => match Path::new(path).strip_prefix(root) {
                Ok(relative) => relative.display().to_string(),
                Err(_) => path.to_string(),
            },
        }
    }
}
