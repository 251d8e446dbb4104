use thiserror::Error;

/// Error taxonomy of the crate.
///
/// Dimension mismatches are logic bugs and never retried or coerced; an unknown
/// radar site aborts construction with no partial/default site. Two conditions
/// are deliberately **not** errors: exhaustion of the geodetic iteration cap
/// (the best estimate is returned) and an empty aligned-distance sequence
/// (callers branch on it as a "no temporal overlap" signal).
#[derive(Error, Debug)]
pub enum MinsepError {
    #[error("incompatible matrix dimensions: {0}")]
    MatrixDimension(String),

    #[error("unknown radar site: SAC {sac:#04x}, SIC {sic:#04x}")]
    UnknownSite { sac: u8, sic: u8 },

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PartialEq for MinsepError {
    fn eq(&self, other: &Self) -> bool {
        use MinsepError::*;
        match (self, other) {
            (MatrixDimension(a), MatrixDimension(b)) => a == b,
            (UnknownSite { sac: a, sic: b }, UnknownSite { sac: c, sic: d }) => a == c && b == d,
            (InvalidRecord(a), InvalidRecord(b)) => a == b,

            // Not comparable beyond the variant itself
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,
            (JsonError(_), JsonError(_)) => true,

            _ => false,
        }
    }
}
