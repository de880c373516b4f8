use std::fs;
use std::path::*;

/// Recursively collects every file under `dir`.
///
/// Directories or entries that cannot be read are skipped rather than failing the walk.
pub fn find_all_files(dir: &Path, entries: &mut Vec<PathBuf>) -> std::io::Result<()> {
    let dir_entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(()),
    };

    for entry in dir_entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue, // Skip problematic entries, e.g. those without access.
        };

        let path = entry.path();
        if path.is_dir() {
            find_all_files(&path, entries)?;
        } else {
            entries.push(path);
        }
    }
    Ok(())
}

/// Canonicalizes a CLI path argument, creating the directory if it doesn't exist.
pub fn canonicalize_cli_path(value: &str) -> Result<PathBuf, String> {
    let path = Path::new(value);

    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| format!("Failed to create directory: {e}"))?;
    }

    fs::canonicalize(path).map_err(|e| format!("Invalid path: {e}"))
}

/// Canonicalizes a CLI path argument that must already exist (file or directory).
pub fn existing_cli_path(value: &str) -> Result<PathBuf, String> {
    fs::canonicalize(value).map_err(|e| format!("Invalid path '{value}': {e}"))
}

/// File name of `path` without its extension, used to name extracted images.
pub fn container_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "container".to_owned())
}

/// Directory under `output` that mirrors where `path` sits relative to `input`.
///
/// A file directly under `input`, or `input` itself when it is a single file, maps to `output`.
pub fn mirrored_output_dir(path: &Path, input: &Path, output: &Path) -> PathBuf {
    match path
        .strip_prefix(input)
        .ok()
        .and_then(Path::parent)
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        Some(parent) => output.join(parent),
        None => output.to_path_buf(),
    }
}
