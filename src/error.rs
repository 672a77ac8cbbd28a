use thiserror::Error;

/// Rejected input coming from the command line or a setup file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetupError {
    #[error("unknown sensor `{0}`")]
    UnknownSensor(String),
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
    #[error("unknown subject `{0}`")]
    UnknownSubject(String),
    #[error("invalid {field}: {value} (must be {expected})")]
    InvalidCamera {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
}
