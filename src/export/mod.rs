//! # CSV Export
//!
//! The catalog is persisted as one CSV file: a header row followed by one row
//! per product, in table order. Columns follow [`CSV_HEADERS`]; dates are
//! ISO-8601 and enums use their display labels (`"Out of Stock"`,
//! `"Bestseller"`).
//!
//! [`write_catalog`] never leaves a truncated file at the destination. Rows go
//! to `<file>.partial` first and the finished file is renamed into place, so a
//! failed write leaves whatever was there before (or nothing).
//!
//! [`read_catalog`] reads the same layout back, which lets charts be redrawn
//! from an earlier run without regenerating.

pub mod error;

pub use error::*;

use crate::model::{Catalog, Product, CSV_HEADERS};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Writes the catalog to `path`, replacing any existing file.
pub fn write_catalog(catalog: &Catalog, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
    }

    let partial = partial_path(path);
    debug!(path = %partial.display(), "Writing catalog rows");

    let result = File::create(&partial)
        .map_err(|e| ExportError::io(&partial, e))
        .and_then(|file| {
            let mut out = BufWriter::new(file);
            write_catalog_to(catalog, &mut out).map_err(|e| match e {
                ExportError::Csv { source, .. } => ExportError::csv(&partial, source),
                ExportError::Io { source, .. } => ExportError::io(&partial, source),
            })?;
            out.flush().map_err(|e| ExportError::io(&partial, e))
        })
        .and_then(|()| fs::rename(&partial, path).map_err(|e| ExportError::io(path, e)));

    if let Err(err) = result {
        if let Err(cleanup) = fs::remove_file(&partial) {
            warn!(path = %partial.display(), error = %cleanup, "Failed to remove partial file");
        }
        return Err(err);
    }

    info!(path = %path.display(), rows = catalog.len(), "Catalog written");
    Ok(())
}

/// Writes the header and every row to an arbitrary writer.
///
/// Errors carry an empty path; [`write_catalog`] replaces it with the file it
/// was writing.
pub fn write_catalog_to<W: Write>(catalog: &Catalog, writer: W) -> Result<(), ExportError> {
    let mut csv = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(CSV_HEADERS)
        .map_err(|e| ExportError::csv(PathBuf::new(), e))?;
    for product in catalog {
        csv.serialize(product)
            .map_err(|e| ExportError::csv(PathBuf::new(), e))?;
    }
    csv.flush().map_err(|e| ExportError::io(PathBuf::new(), e))
}

/// Reads a catalog previously written by [`write_catalog`].
pub fn read_catalog(path: &Path) -> Result<Catalog, ExportError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| ExportError::csv(path, e))?;
    let products = reader
        .deserialize::<Product>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ExportError::csv(path, e))?;
    info!(path = %path.display(), rows = products.len(), "Catalog loaded");
    Ok(Catalog::from_products(products))
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::small_catalog;

    #[test]
    fn test_header_row_matches_column_order() {
        let mut buf = Vec::new();
        write_catalog_to(&small_catalog(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, CSV_HEADERS.join(","));
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn test_rows_use_display_labels() {
        let mut buf = Vec::new();
        write_catalog_to(&small_catalog(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let first = text.lines().nth(1).unwrap();
        assert!(first.starts_with("TSI0001,Item 1,Dining,Misc,"));
        assert!(first.contains("Out of Stock"));
        assert!(first.ends_with("Bestseller,2025-06-01"));
    }

    #[test]
    fn test_written_file_reads_back_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("catalog.csv");
        let catalog = small_catalog();

        write_catalog(&catalog, &path).unwrap();
        assert!(!partial_path(&path).exists());

        let loaded = read_catalog(&path).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_failed_write_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the destination makes the final rename fail.
        let path = dir.path().join("taken");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = write_catalog(&small_catalog(), &path).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
        assert!(!partial_path(&path).exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_read_rejects_malformed_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, format!("{}\nnot,a,row\n", CSV_HEADERS.join(","))).unwrap();
        assert!(matches!(read_catalog(&path), Err(ExportError::Csv { .. })));
    }

    #[test]
    fn test_read_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_catalog(&dir.path().join("absent.csv")).is_err());
    }
}
