//! Whole-file output: written to a temporary file beside the target, then renamed.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tempfile::NamedTempFile;

/// Replace `path` with `contents` in one step. On any error the target is
/// left as it was and the temporary file is removed.
pub fn write_atomic(path: &Path, contents: &str) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temporary file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("syncing {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("renaming into {}", path.display()))?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_new_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("EOE.txt");
        write_atomic(&path, "[metadata]\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[metadata]\n");
    }

    #[test]
    fn replaces_existing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("rankings.txt");
        std::fs::write(&path, "old contents that are longer\n").unwrap();
        write_atomic(&path, "new\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn leaves_no_temporary_files() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_atomic(&tmp.path().join("a.txt"), "a").unwrap();
        let names: Vec<String> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt".to_string()]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("no/such/dir/out.txt");
        assert!(write_atomic(&path, "x").is_err());
        assert!(!path.exists());
    }
}
