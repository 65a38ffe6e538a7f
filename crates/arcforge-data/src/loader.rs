//! Item loading pipeline: discovers item files, deserializes them, and
//! builds the catalog.
//!
//! Each file in the items directory holds one record. A file that cannot be
//! read or parsed is logged and skipped; only an unreadable directory fails
//! the whole load.

use arcforge_core::catalog::{Catalog, CatalogBuilder};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::schema::ItemData;

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur during data loading.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The items directory does not exist or is not a directory.
    #[error("items directory not found: {dir}")]
    MissingDirectory { dir: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// The record has no usable id.
    #[error("record in {file} has no id")]
    MissingId { file: PathBuf },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// File discovery
// ===========================================================================

/// List the item files in `dir`, sorted by path.
///
/// Files with unsupported extensions are ignored. Sorting makes the
/// last-wins rule for duplicate ids independent of directory order.
pub fn discover_item_files(dir: &Path) -> Result<Vec<PathBuf>, DataLoadError> {
    if !dir.is_dir() {
        return Err(DataLoadError::MissingDirectory {
            dir: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && detect_format(&path).is_ok() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

// ===========================================================================
// Deserialization
// ===========================================================================

/// Read a file and deserialize it according to its format (detected from extension).
pub fn deserialize_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        Format::Ron => ron::from_str(&content).map_err(|e| DataLoadError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
        Format::Json => serde_json::from_str(&content).map_err(|e| DataLoadError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
        Format::Toml => toml::from_str(&content).map_err(|e| DataLoadError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
    }
}

/// Read one item record from `path`.
pub fn load_item_file(path: &Path) -> Result<arcforge_core::ItemRecord, DataLoadError> {
    let data: ItemData = deserialize_file(path)?;
    data.into_record().ok_or_else(|| DataLoadError::MissingId {
        file: path.to_path_buf(),
    })
}

// ===========================================================================
// Catalog loading
// ===========================================================================

/// A file that was left out of the catalog, and why.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: DataLoadError,
}

/// Outcome of loading an items directory.
#[derive(Debug)]
pub struct LoadReport {
    pub catalog: Catalog,
    /// Number of records read, duplicates included.
    pub loaded: usize,
    pub skipped: Vec<SkippedFile>,
    /// Ids that appeared in more than one file. The last file wins.
    pub duplicates: Vec<String>,
}

/// Load every item file in `dir` into a catalog.
pub fn load_items(dir: &Path) -> Result<LoadReport, DataLoadError> {
    let files = discover_item_files(dir)?;
    let mut builder = CatalogBuilder::new();
    let mut loaded = 0;
    let mut skipped = Vec::new();
    let mut duplicates = Vec::new();

    for path in files {
        match load_item_file(&path) {
            Ok(record) => {
                loaded += 1;
                let id = record.id.clone();
                if builder.insert(record).is_some() {
                    tracing::warn!(%id, file = %path.display(), "Duplicate item id, replacing earlier record");
                    duplicates.push(id);
                }
            }
            Err(error) => {
                tracing::warn!(file = %path.display(), %error, "Skipping item file");
                skipped.push(SkippedFile { path, error });
            }
        }
    }

    let catalog = builder.build();
    tracing::info!(
        dir = %dir.display(),
        items = catalog.len(),
        skipped = skipped.len(),
        duplicates = duplicates.len(),
        "Loaded item catalog"
    );

    Ok(LoadReport {
        catalog,
        loaded,
        skipped,
        duplicates,
    })
}

/// Load the catalog from `dir`, discarding the report details.
pub fn load_catalog(dir: &Path) -> Result<Catalog, DataLoadError> {
    load_items(dir).map(|report| report.catalog)
}

// ===========================================================================
// Tests
// ===========================================================================
