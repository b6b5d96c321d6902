use thiserror::Error;

/// Root error type for the suspension engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SuspensionError {
    /// Construction parameters cannot describe a suspension.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Replacement positions do not have the shape `n x 2`.
    #[error("malformed centers: expected {expected} rows of 2 coordinates, got {rows} rows{}", row_note(.bad_row))]
    MalformedInput {
        expected: usize,
        rows: usize,
        bad_row: Option<usize>,
    },

    /// Swelling grid cannot be built from the given bounds.
    #[error("invalid sweep: {0}")]
    InvalidSweep(String),

    /// Configuration file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

pub type SuspensionResult<T> = Result<T, SuspensionError>;

fn row_note(bad_row: &Option<usize>) -> String {
    match bad_row {
        Some(r) => format!(" (row {r} is not a coordinate pair)"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_message_names_bad_row() {
        let err = SuspensionError::MalformedInput {
            expected: 3,
            rows: 1,
            bad_row: Some(0),
        };
        let msg = err.to_string();
        assert!(msg.contains("expected 3 rows"));
        assert!(msg.contains("row 0"));
    }
}
