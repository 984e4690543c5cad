use thiserror::Error;

/// Failures of the pricing core.
///
/// The core only ever rejects inputs up front; arithmetic on validated
/// inputs cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A precondition on spot, strike, expiry or volatility was violated
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Failures of the interactive console session.
#[derive(Debug, Error)]
pub enum ShellError {
    /// An answer could not be read as a number
    #[error("could not parse {field} from {input:?}")]
    Parse { field: &'static str, input: String },

    /// An answer parsed but falls below the configured minimum
    #[error("{field} must be at least {min}, got {value}")]
    BelowLimit {
        field: &'static str,
        min: f64,
        value: f64,
    },

    /// The pricer rejected the inputs
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Reading the terminal or writing to it failed
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures loading or validating a [`CalculatorConfig`](crate::CalculatorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "serde")]
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type PricingResult<T> = Result<T, PricingError>;
