use std::io;

use routeplan_core::{ConnectionError, ConnectionErrorCode};
use thiserror::Error;

/// Errors raised while reading a road map.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RoadMapError {
    #[error("road map is empty; expected a `start<TAB>end` query line")]
    MissingQuery,
    #[error("line {line}: query must be `start<TAB>end`")]
    MalformedQuery { line: usize },
    #[error("line {line}: {field} `{value}` is not a valid integer")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("line {line}: {source}")]
    Connection {
        line: usize,
        #[source]
        source: ConnectionError,
    },
    #[error("line {line}: road id {id} already used on line {first_line}")]
    DuplicateId {
        line: usize,
        id: i64,
        first_line: usize,
    },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl RoadMapError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingQuery => "ROAD_MAP_MISSING_QUERY",
            Self::MalformedQuery { .. } => "ROAD_MAP_MALFORMED_QUERY",
            Self::InvalidNumber { .. } => "ROAD_MAP_INVALID_NUMBER",
            Self::Connection { .. } => "ROAD_MAP_INVALID_CONNECTION",
            Self::DuplicateId { .. } => "ROAD_MAP_DUPLICATE_ID",
            Self::Io(_) => "ROAD_MAP_IO",
        }
    }

    /// Returns the underlying connection error code when a record was rejected
    /// by [`routeplan_core::Connection::new`].
    #[must_use]
    pub const fn connection_code(&self) -> Option<ConnectionErrorCode> {
        match self {
            Self::Connection { source, .. } => Some(source.code()),
            _ => None,
        }
    }
}
