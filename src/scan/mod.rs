pub mod filesystem;

use std::path::{Path, PathBuf};

/// Raw path inventory handed to the analyzers. The analyzers never touch
/// the filesystem themselves; this is the only place that does.
#[derive(Debug, Clone)]
pub struct RepoInventory {
    #[allow(dead_code)]
    pub root: PathBuf,
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

pub fn discover(root: &Path) -> RepoInventory {
    let (directories, files) = filesystem::list_entries(root);
    tracing::debug!(
        root = %root.display(),
        directories = directories.len(),
        files = files.len(),
        "repository inventory collected"
    );

    RepoInventory {
        root: root.to_path_buf(),
        directories,
        files,
    }
}
