//! Error types for map generation

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::BodyRef;

/// Result type for map operations
pub type MapResult<T> = Result<T, MapError>;

/// Errors that abort a render. Dwarf placement failures are not among them.
#[derive(Error, Debug)]
pub enum MapError {
    #[error("cannot read texture {path}: {source}")]
    Asset {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("texture {0} is empty")]
    EmptyTexture(PathBuf),

    #[error("no texture loaded for {0}")]
    MissingTexture(BodyRef),

    #[error("texture target {0} is not in the catalog")]
    UnknownBody(BodyRef),

    #[error("asteroid belt too small: placed {placed} of {target} after {attempts} attempts")]
    BeltExhausted {
        placed: usize,
        target: usize,
        attempts: u64,
    },

    #[error("cannot write {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
