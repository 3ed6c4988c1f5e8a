#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NoiseError {
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    #[error("non-finite input on axis {axis}: {value}")]
    NonFiniteInput { axis: char, value: f64 },
}

pub type Result<T> = std::result::Result<T, NoiseError>;

impl NoiseError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        NoiseError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}
