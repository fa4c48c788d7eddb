// File: crates/chart-core/src/error.rs
// Summary: Error type for the few hard failures (surface, encoding, I/O, request parsing).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create raster surface ({width}x{height} physical px)")]
    SurfaceUnavailable { width: i32, height: i32 },

    #[error("nothing has been rendered yet")]
    NotRendered,

    #[error("encode failed: {0}")]
    Encode(&'static str),

    #[error("invalid width `{0}`: expected a pixel number or a percentage like \"50%\"")]
    InvalidWidth(String),

    #[error("invalid chart request: {0}")]
    Request(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
