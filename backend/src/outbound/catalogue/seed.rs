//! Catalogue seed file loading.
//!
//! The seed is a JSON array of courses:
//!
//! ```json
//! [{ "slug": "intro-to-go", "title": "Intro", "ownerId": "…", "updatedAt": "2026-01-15T12:00:00Z" }]
//! ```

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;

use crate::domain::Course;

/// Errors returned while loading the catalogue seed.
#[derive(Debug, Error)]
pub enum CatalogueSeedError {
    /// Seed file could not be read.
    #[error("failed to read catalogue seed at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Seed contents are not a valid course list.
    #[error("invalid catalogue seed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON course list.
///
/// Course fields are validated during deserialisation, so a malformed slug,
/// blank title or bad owner id rejects the whole seed.
pub fn parse_catalogue_seed(contents: &str) -> Result<Vec<Course>, CatalogueSeedError> {
    Ok(serde_json::from_str(contents)?)
}

/// Read and parse the seed file at `path`.
pub fn load_catalogue_seed(path: &Path) -> Result<Vec<Course>, CatalogueSeedError> {
    let read_error = |source| CatalogueSeedError::Read {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "catalogue seed path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(Path::new(file_name)).map_err(read_error)?;
    let courses = parse_catalogue_seed(&contents)?;
    info!(path = %path.display(), course_count = courses.len(), "catalogue seed loaded");
    Ok(courses)
}
