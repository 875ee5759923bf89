use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, info};

use crate::campus::{build_campus, Campus};
use crate::document::MapDocument;
use crate::error::{Error, Result};

/// Default filename for the campus map.
pub const MAP_FILENAME: &str = "campus_map.geojson";

/// Environment variable that points at a map file.
pub const MAP_ENV_VAR: &str = "CAMPUSNAV_MAP";

/// Resolve the default map location using platform-specific project directories.
pub fn default_map_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("org", "campusnav", "campusnav").ok_or(Error::DataDirUnavailable)?;
    Ok(dirs.data_dir().join(MAP_FILENAME))
}

/// Resolve the map path from an explicit override, `CAMPUSNAV_MAP`, or the
/// platform default, in that order.
///
/// A directory override is interpreted as containing [`MAP_FILENAME`].
pub fn resolve_map_path(target: Option<&Path>) -> Result<PathBuf> {
    let candidate = match target {
        Some(path) => path.to_path_buf(),
        None => match env::var_os(MAP_ENV_VAR) {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => default_map_path()?,
        },
    };

    let path = if candidate.is_dir() {
        candidate.join(MAP_FILENAME)
    } else {
        candidate
    };
    debug!(path = %path.display(), "resolved campus map path");

    if path.is_file() {
        Ok(path)
    } else {
        Err(Error::MapNotFound { path })
    }
}

/// Read and parse a map document from disk.
pub fn load_document(path: &Path) -> Result<MapDocument> {
    let file = File::open(path).map_err(|error| match error.kind() {
        std::io::ErrorKind::NotFound => Error::MapNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(error),
    })?;
    MapDocument::from_reader(BufReader::new(file))
}

/// Load a map file and build the campus graph.
pub fn load_campus(path: impl AsRef<Path>) -> Result<Campus> {
    let path = path.as_ref();
    let document = load_document(path)?;
    let campus = build_campus(&document)?;
    info!(
        path = %path.display(),
        buildings = campus.buildings().len(),
        nodes = campus.graph().len(),
        "loaded campus map"
    );
    Ok(campus)
}
