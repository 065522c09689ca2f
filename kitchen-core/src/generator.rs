//! Manifest generation
//!
//! Scans the testbed directory (non-recursively), derives one
//! [`ManifestItem`] per `*.testbed.rs` file and writes the sorted list as
//! pretty JSON. The scan completes before anything touches the manifest, and
//! the write goes through a sibling temp file, so a failed run leaves the
//! previous manifest intact.

use crate::config::KitchenPaths;
use kitchen_common::{render_manifest, ManifestItem};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Manifest generation errors
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("cannot read testbed directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write manifest {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of comparing the on-disk manifest with a fresh scan.
#[derive(Debug, Clone, PartialEq)]
pub enum ManifestStatus {
    UpToDate,
    Missing,
    Stale,
}

/// List testbed files directly inside `dir` and derive their manifest
/// records, sorted by name.
pub fn scan_testbeds(dir: &Path, suffix: &str) -> Result<Vec<ManifestItem>, ManifestError> {
    let read_dir_err = |source| ManifestError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut items = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let file_name = entry.file_name();

        let Some(file_name) = file_name.to_str() else {
            warn!("Skipping non UTF-8 entry {:?}", entry.path());
            continue;
        };
        if !file_name.ends_with(suffix) {
            continue;
        }
        // metadata() follows symlinks, so a link to a testbed file counts
        match std::fs::metadata(entry.path()) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => {
                debug!("Skipping {file_name}: not a file");
                continue;
            }
            Err(e) => {
                warn!("Skipping {file_name}: cannot stat {}: {e}", entry.path().display());
                continue;
            }
        }

        match ManifestItem::from_file_name(file_name, suffix) {
            Some(item) => items.push(item),
            None => warn!("Skipping {file_name}: empty component name"),
        }
    }

    items.sort_by(|a, b| a.name.cmp(&b.name));
    warn_on_slug_collisions(&items);
    Ok(items)
}

fn warn_on_slug_collisions(items: &[ManifestItem]) {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for item in items {
        if let Some(other) = seen.insert(item.slug.as_str(), item.name.as_str()) {
            warn!(
                "Slug '{}' is shared by {} and {}; only one will be reachable",
                item.slug, other, item.name
            );
        }
    }
}

/// Replace `path` with `content`, creating parent directories as needed.
///
/// Writes a sibling temp file first and renames it into place.
pub fn write_manifest(path: &Path, content: &str) -> Result<(), ManifestError> {
    let write_err = |source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    std::fs::write(&tmp, content).map_err(write_err)?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    Ok(())
}

/// Scan, render and write the manifest. Returns the written records.
pub fn generate_manifest(paths: &KitchenPaths) -> Result<Vec<ManifestItem>, ManifestError> {
    info!("Scanning {} for *{}", paths.testbed_dir.display(), paths.suffix);
    let items = scan_testbeds(&paths.testbed_dir, &paths.suffix)?;
    let json = render_manifest(&items)?;
    write_manifest(&paths.manifest_path, &json)?;
    info!(
        "Wrote {} components to {}",
        items.len(),
        paths.manifest_path.display()
    );
    Ok(items)
}

/// Compare the manifest on disk with what a fresh scan would write.
pub fn check_manifest(paths: &KitchenPaths) -> Result<ManifestStatus, ManifestError> {
    let items = scan_testbeds(&paths.testbed_dir, &paths.suffix)?;
    let expected = render_manifest(&items)?;

    match std::fs::read_to_string(&paths.manifest_path) {
        Ok(current) if current == expected => Ok(ManifestStatus::UpToDate),
        Ok(_) => Ok(ManifestStatus::Stale),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ManifestStatus::Missing),
        // Unreadable counts as stale; regenerating will surface the real error
        Err(e) => {
            warn!("Cannot read {}: {e}", paths.manifest_path.display());
            Ok(ManifestStatus::Stale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitchen_common::TESTBED_SUFFIX;
    use tempfile::TempDir;

    #[test]
    fn sorts_by_name_regardless_of_listing_order() {
        let dir = TempDir::new().unwrap();
        for name in ["Zeta", "Alpha", "Mid"] {
            std::fs::write(dir.path().join(format!("{name}{TESTBED_SUFFIX}")), "").unwrap();
        }
        let names: Vec<_> = scan_testbeds(dir.path(), TESTBED_SUFFIX)
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, ["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn skips_directories_and_bare_suffix() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("Nested.testbed.rs")).unwrap();
        std::fs::write(dir.path().join(".testbed.rs"), "").unwrap();
        std::fs::write(dir.path().join("Real.testbed.rs"), "").unwrap();

        let items = scan_testbeds(dir.path(), TESTBED_SUFFIX).unwrap();
        assert_eq!(items, vec![ManifestItem::from_name("Real")]);
    }

    #[cfg(unix)]
    #[test]
    fn broken_symlink_is_skipped_without_failing_the_scan() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Target.rs"), "").unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("Target.rs"),
            dir.path().join("Linked.testbed.rs"),
        )
        .unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("Missing.rs"),
            dir.path().join("Dangling.testbed.rs"),
        )
        .unwrap();

        let items = scan_testbeds(dir.path(), TESTBED_SUFFIX).unwrap();
        assert_eq!(items, vec![ManifestItem::from_name("Linked")]);
    }

    #[test]
    fn write_creates_parent_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("public").join("manifest.json");
        write_manifest(&path, "[]").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
