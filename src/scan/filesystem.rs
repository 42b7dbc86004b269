use std::path::Path;
use walkdir::WalkDir;

/// Relative directory and file paths under `root`, forward-slashed.
/// Directories carry a trailing slash. Depth is capped at two levels;
/// registry paths never nest deeper than that.
pub fn list_entries(root: &Path) -> (Vec<String>, Vec<String>) {
    let mut directories = Vec::new();
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(2)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != ".git")
        .filter_map(|entry| entry.ok())
    {
        let relative = match entry.path().strip_prefix(root) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        let mut path = relative.to_string_lossy().replace('\\', "/");
        if entry.file_type().is_dir() {
            path.push('/');
            directories.push(path);
        } else if entry.file_type().is_file() {
            files.push(path);
        }
    }

    (directories, files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn list_entries_separates_directories_and_files() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("src")).expect("src should create");
        fs::create_dir_all(dir.path().join(".well-known")).expect(".well-known should create");
        fs::write(dir.path().join("README.md"), "# readme").expect("readme should write");
        fs::write(
            dir.path().join(".well-known/security.txt"),
            "Contact: mailto:security@example.org",
        )
        .expect("security.txt should write");

        let (directories, files) = list_entries(dir.path());
        assert!(directories.contains(&"src/".to_string()));
        assert!(directories.contains(&".well-known/".to_string()));
        assert!(files.contains(&"README.md".to_string()));
        assert!(files.contains(&".well-known/security.txt".to_string()));
    }

    #[test]
    fn list_entries_skips_git_internals() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join(".git/objects")).expect(".git should create");
        fs::write(dir.path().join(".git/HEAD"), "ref: refs/heads/main").expect("HEAD should write");

        let (directories, files) = list_entries(dir.path());
        assert!(directories.is_empty());
        assert!(files.is_empty());
    }
}
