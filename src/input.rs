use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::limits::MAX_INPUT_BYTES;
use crate::model::Reservation;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is larger than {} bytes", .path.display(), MAX_INPUT_BYTES)]
    TooLarge { path: PathBuf },
    #[error("malformed reservation data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a JSON array of reservation records from `path`.
pub fn load_reservations(path: &Path) -> Result<Vec<Reservation>, InputError> {
    let io_err = |source: io::Error| InputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let len = file.metadata().map_err(io_err)?.len();
    if len > MAX_INPUT_BYTES {
        return Err(InputError::TooLarge {
            path: path.to_path_buf(),
        });
    }
    let mut content = String::with_capacity(len as usize);
    BufReader::new(file)
        .read_to_string(&mut content)
        .map_err(io_err)?;
    let reservations = parse_reservations(&content)?;
    tracing::info!("loaded {} reservations from {}", reservations.len(), path.display());
    Ok(reservations)
}

pub fn parse_reservations(json: &str) -> Result<Vec<Reservation>, InputError> {
    Ok(serde_json::from_str(json)?)
}
