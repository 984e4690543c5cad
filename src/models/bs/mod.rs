// Closed-form Black-Scholes price of a European call, reported together with
// d1 and d2. Inputs are validated before any logarithm or division, so a
// successful quote is always finite for finite inputs.

pub mod types;

use tracing::debug;

use crate::error::PricingResult;
use crate::models::normal::ErfNormal;
use crate::models::traits::NormalCdf;
pub use types::{CallInputs, CallQuote};

/// European call pricer, generic over the normal CDF provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesCall<N: NormalCdf = ErfNormal> {
    cdf: N,
}

impl BlackScholesCall<ErfNormal> {
    /// Pricer backed by the default erf-based CDF
    pub fn standard() -> Self {
        Self { cdf: ErfNormal }
    }
}

impl<N: NormalCdf> BlackScholesCall<N> {
    pub fn new(cdf: N) -> Self {
        Self { cdf }
    }

    pub fn cdf(&self) -> &N {
        &self.cdf
    }

    /// Price a call.
    ///
    /// ```text
    /// d1    = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
    /// d2    = d1 − σ·√T
    /// price = S·Φ(d1) − K·e^(−r·T)·Φ(d2)
    /// ```
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidInput`](crate::PricingError::InvalidInput) when
    /// spot, strike, expiry or volatility is zero, negative, NaN or infinite,
    /// or when the rate is NaN or infinite.
    pub fn price(&self, inputs: &CallInputs) -> PricingResult<CallQuote> {
        inputs.validate()?;

        let CallInputs {
            spot: s,
            strike: k,
            years_to_exp: t,
            rate: r,
            volatility: sigma,
        } = *inputs;

        let sigma_sqrt_t = sigma * t.sqrt();
        let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / sigma_sqrt_t;
        let d2 = d1 - sigma_sqrt_t;

        let mut price = s * self.cdf.cdf(d1) - k * (-r * t).exp() * self.cdf.cdf(d2);
        // Deep out-of-the-money quotes can cancel to a tiny negative value
        if price < 0.0 {
            price = 0.0;
        }

        debug!(
            spot = s,
            strike = k,
            years_to_exp = t,
            rate = r,
            volatility = sigma,
            d1,
            d2,
            price,
            cdf = self.cdf.name(),
            "priced call"
        );

        Ok(CallQuote { price, d1, d2 })
    }
}

/// Price a call with an explicit normal CDF provider.
pub fn price_call_with<N: NormalCdf>(cdf: N, inputs: &CallInputs) -> PricingResult<CallQuote> {
    BlackScholesCall::new(cdf).price(inputs)
}
