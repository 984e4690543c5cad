use crate::error::ConfigError;
use crate::models::bs::CallInputs;
use crate::models::normal::CdfProvider;

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Values offered for blank prompt answers
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputDefaults {
    pub spot: f64,
    pub strike: f64,
    pub years_to_exp: f64,
    pub rate: f64,
    pub volatility: f64,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 95.0,
            years_to_exp: 1.0,
            rate: 0.05,
            volatility: 0.2,
        }
    }
}

impl From<InputDefaults> for CallInputs {
    fn from(d: InputDefaults) -> Self {
        CallInputs::new(d.spot, d.strike, d.years_to_exp, d.rate, d.volatility)
    }
}

/// Lower bounds the interactive session may enforce before pricing.
///
/// These are presentation limits only; the pricer has its own, stricter
/// positivity checks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputLimits {
    pub enforce: bool,
    pub min_spot: f64,
    pub min_strike: f64,
    pub min_years_to_exp: f64,
    pub min_rate: f64,
    pub min_volatility: f64,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            enforce: false,
            min_spot: 0.01,
            min_strike: 0.01,
            min_years_to_exp: 0.01,
            min_rate: 0.0,
            min_volatility: 0.01,
        }
    }
}

/// Result rendering options
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct DisplayConfig {
    #[cfg_attr(feature = "serde", serde(default = "default_price_decimals"))]
    pub price_decimals: usize,

    #[cfg_attr(feature = "serde", serde(default = "default_d_decimals"))]
    pub d_decimals: usize,

    /// Prefix printed before the call price
    #[cfg_attr(feature = "serde", serde(default = "default_currency"))]
    pub currency: String,

    /// Repeat the inputs under the result block
    #[cfg_attr(feature = "serde", serde(default))]
    pub echo_inputs: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            price_decimals: default_price_decimals(),
            d_decimals: default_d_decimals(),
            currency: default_currency(),
            echo_inputs: false,
        }
    }
}

/// Main configuration for the calculator session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct CalculatorConfig {
    /// Normal CDF provider used by the pricer
    #[cfg_attr(feature = "serde", serde(default))]
    pub cdf: CdfProvider,

    /// Use `defaults` when a prompt is answered with an empty line
    #[cfg_attr(feature = "serde", serde(default))]
    pub accept_blank: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    pub defaults: InputDefaults,

    #[cfg_attr(feature = "serde", serde(default))]
    pub limits: InputLimits,

    #[cfg_attr(feature = "serde", serde(default))]
    pub display: DisplayConfig,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::console()
    }
}

impl CalculatorConfig {
    /// Plain console behaviour: every value must be typed, no limits.
    pub fn console() -> Self {
        Self {
            cdf: CdfProvider::Erf,
            accept_blank: false,
            defaults: InputDefaults::default(),
            limits: InputLimits::default(),
            display: DisplayConfig::default(),
        }
    }

    /// Form-style behaviour: blank answers take the pre-filled values and the
    /// form minimums are enforced.
    pub fn form() -> Self {
        Self {
            cdf: CdfProvider::Erf,
            accept_blank: true,
            defaults: InputDefaults::default(),
            limits: InputLimits {
                enforce: true,
                ..InputLimits::default()
            },
            display: DisplayConfig {
                currency: "$".to_string(),
                echo_inputs: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Checks values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.price_decimals > MAX_DECIMALS || self.display.d_decimals > MAX_DECIMALS {
            return Err(ConfigError::Invalid(format!(
                "decimals must be at most {}, got price={} d={}",
                MAX_DECIMALS, self.display.price_decimals, self.display.d_decimals
            )));
        }

        let l = &self.limits;
        let mins = [
            ("min_spot", l.min_spot),
            ("min_strike", l.min_strike),
            ("min_years_to_exp", l.min_years_to_exp),
            ("min_rate", l.min_rate),
            ("min_volatility", l.min_volatility),
        ];
        for (name, value) in mins {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "limits.{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

const MAX_DECIMALS: usize = 12;

fn default_price_decimals() -> usize {
    2
}

fn default_d_decimals() -> usize {
    4
}

fn default_currency() -> String {
    "Rs:".to_string()
}
