use crate::error::{PricingError, PricingResult};

/// Market inputs for a single European call valuation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallInputs {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiration in years (T)
    pub years_to_exp: f64,
    /// Continuously compounded risk-free rate (r), may be negative
    pub rate: f64,
    /// Annualised volatility as decimal (σ), e.g. 0.2 for 20%
    pub volatility: f64,
}

impl CallInputs {
    pub fn new(spot: f64, strike: f64, years_to_exp: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            years_to_exp,
            rate,
            volatility,
        }
    }

    /// Rejects a spot, strike, expiry or volatility that is not a finite
    /// positive number, and a rate that is not finite.
    ///
    /// The rate may be negative.
    pub fn validate(&self) -> PricingResult<()> {
        require_positive("spot", self.spot)?;
        require_positive("strike", self.strike)?;
        require_positive("time to expiration", self.years_to_exp)?;
        require_finite("rate", self.rate)?;
        require_positive("volatility", self.volatility)?;
        Ok(())
    }
}

fn require_finite(field: &str, value: f64) -> PricingResult<()> {
    if !value.is_finite() {
        return Err(PricingError::InvalidInput(format!(
            "{} must be finite, got {}",
            field, value
        )));
    }
    Ok(())
}

fn require_positive(field: &str, value: f64) -> PricingResult<()> {
    if value.is_nan() || value <= 0.0 {
        return Err(PricingError::InvalidInput(format!(
            "{} must be positive, got {}",
            field, value
        )));
    }
    require_finite(field, value)
}

/// Call price together with the standardised intermediates of the formula
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallQuote {
    pub price: f64,
    pub d1: f64,
    pub d2: f64,
}
