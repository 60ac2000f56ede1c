//! Sorting files into destination folders.
//!
//! Scans the top level of a directory and moves every regular file into
//! `html/`, `css/`, `js/`, `images/` or `others/` beneath it, according to a
//! [`CategoryMap`]. Sub-directories are never entered or moved.

mod category;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use strum::IntoEnumIterator;

use crate::error_handling::OrganizeError;

pub use category::{Category, CategoryMap, CategoryRule, DEFAULT_RULES};

/// A single file moved by [`organize_directory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedFile {
    /// Location before the move
    pub from: PathBuf,
    /// Location after the move
    pub to: PathBuf,
    /// Category the file was sorted into
    pub category: Category,
    /// Whether a file of the same name was already at `to` (and was overwritten)
    pub replaced: bool,
}

/// Summary of one organize pass.
#[derive(Debug, Clone, Default)]
pub struct OrganizeReport {
    /// Files moved, in processing order
    pub moved: Vec<MovedFile>,
    /// Pre-existing sub-directories that were left alone (destination
    /// folders not included)
    pub skipped_directories: Vec<PathBuf>,
}

impl OrganizeReport {
    /// Number of files moved into `category`.
    pub fn count(&self, category: Category) -> usize {
        self.moved.iter().filter(|m| m.category == category).count()
    }

    /// Total number of files moved.
    pub fn total_moved(&self) -> usize {
        self.moved.len()
    }
}

/// Path of the destination folder for `category` under `dir`.
pub fn destination_folder(dir: &Path, category: Category) -> PathBuf {
    dir.join(category.folder_name())
}

/// Moves every top-level file of `dir` into its destination folder.
///
/// All five destination folders are created first, whether or not anything
/// will land in them. Entries are then listed once (non-recursively) and
/// each regular file is renamed into `<dir>/<folder>/<file name>`. Anything
/// that is a directory, or a link to one, is skipped.
///
/// A file already present at the destination is overwritten. Processing
/// order follows the directory listing and is not guaranteed.
///
/// # Errors
///
/// Returns `OrganizeError` on the first folder creation, listing, or move
/// failure. Files moved before the failure stay moved.
pub fn organize_directory(dir: &Path, map: &CategoryMap) -> Result<OrganizeReport, OrganizeError> {
    for category in Category::iter() {
        let folder = destination_folder(dir, category);
        fs::create_dir_all(&folder).map_err(|source| OrganizeError::CreateFolder {
            path: folder.clone(),
            source,
        })?;
    }

    let read_dir_error = |source| OrganizeError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    // Snapshot the listing so moves don't race the iterator
    let entries = fs::read_dir(dir)
        .map_err(read_dir_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_dir_error)?;

    let mut report = OrganizeReport::default();
    for entry in entries {
        let path = entry.path();
        let file_name = entry.file_name();

        if path.is_dir() {
            let is_destination =
                Category::iter().any(|c| file_name.to_str() == Some(c.folder_name()));
            if !is_destination {
                debug!("Skipping directory {}", path.display());
                report.skipped_directories.push(path);
            }
            continue;
        }

        let category = map.classify(Path::new(&file_name));
        let destination = destination_folder(dir, category).join(&file_name);
        let replaced = destination.exists();
        if replaced {
            warn!(
                "Overwriting existing file {} with {}",
                destination.display(),
                path.display()
            );
        }

        fs::rename(&path, &destination).map_err(|source| OrganizeError::Move {
            from: path.clone(),
            to: destination.clone(),
            source,
        })?;
        debug!("Moved {} -> {}", path.display(), destination.display());

        report.moved.push(MovedFile {
            from: path,
            to: destination,
            category,
            replaced,
        });
    }

    info!(
        "Organized {} file(s) in {} (html: {}, css: {}, js: {}, images: {}, others: {})",
        report.total_moved(),
        dir.display(),
        report.count(Category::Html),
        report.count(Category::Css),
        report.count(Category::Js),
        report.count(Category::Images),
        report.count(Category::Others),
    );

    Ok(report)
}
