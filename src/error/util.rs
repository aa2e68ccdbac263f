//! Utility functions for error handling
//!
//! Helpers that open and create table files while attaching the path and
//! the purpose of the operation to any IO failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{AncestryError, Result};

fn io_error(path: &Path, context: String, source: io::Error) -> AncestryError {
    AncestryError::Io {
        path: path.to_path_buf(),
        context,
        source,
    }
}

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if path.is_dir() {
        return Err(io_error(
            path,
            format!("Expected a file for: {purpose}"),
            io::Error::new(io::ErrorKind::InvalidInput, "path is a directory"),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions".to_string(),
            io::ErrorKind::NotFound => format!("File not found - needed for: {purpose}"),
            _ => format!("Failed to open file for: {purpose}"),
        };
        io_error(path, context, e)
    })
}

/// Create (or truncate) a file, creating missing parent directories
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            io_error(
                parent,
                format!("Failed to create directory for: {purpose}"),
                e,
            )
        })?;
    }

    fs::File::create(path)
        .map_err(|e| io_error(path, format!("Failed to create file for: {purpose}"), e))
}

/// Safely read a file to string with rich error information
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    let mut file = safe_open_file(path, purpose)?;

    let mut content = String::new();
    io::Read::read_to_string(&mut file, &mut content).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::InvalidData => {
                "File contains invalid UTF-8 data - cannot read as text".to_string()
            }
            _ => format!("Failed to read file content for: {purpose}"),
        };
        io_error(path, context, e)
    })?;

    Ok(content)
}
