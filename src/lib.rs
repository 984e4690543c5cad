//! # bs-calculator: Black-Scholes European Call Pricing
//!
//! `bs-calculator` prices a European call option with the Black-Scholes
//! closed form and reports the standardised intermediates `d1` and `d2`
//! alongside the price. The pricer is a pure function: no I/O, no shared
//! state, and every precondition is checked before any logarithm or
//! division is evaluated.
//!
//! ## Core Features
//!
//! - **Call pricing**: `C = S·Φ(d1) − K·e^(−rT)·Φ(d2)` with typed input validation
//! - **Pluggable normal CDF**: erf-based (`libm`) or `statrs` providers behind one trait
//! - **Console calculator**: the `bs-calc` binary and the reusable [`shell::Session`]
//! - **TOML configuration**: input defaults, form limits and display precision
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_calculator::price_call;
//!
//! let quote = price_call(100.0, 95.0, 1.0, 0.05, 0.2)?;
//! assert!((quote.price - 13.35).abs() < 0.005);
//! assert!((quote.d1 - 0.6065).abs() < 1e-4);
//! assert!((quote.d2 - 0.4065).abs() < 1e-4);
//! # Ok::<(), bs_calculator::PricingError>(())
//! ```
//!
//! ## Choosing a CDF Provider
//!
//! ```rust
//! use bs_calculator::{BlackScholesCall, CallInputs, StatrsNormal};
//!
//! let pricer = BlackScholesCall::new(StatrsNormal::new());
//! let quote = pricer.price(&CallInputs::new(50.0, 50.0, 0.5, 0.01, 0.3))?;
//! assert!((quote.price - 4.34).abs() < 0.005);
//! # Ok::<(), bs_calculator::PricingError>(())
//! ```

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod shell;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use config::{CalculatorConfig, DisplayConfig, InputDefaults, InputLimits};
pub use error::{ConfigError, PricingError, PricingResult, ShellError};
pub use models::bs::{price_call_with, BlackScholesCall, CallInputs, CallQuote};
pub use models::normal::{normal_cdf, CdfProvider, ErfNormal, StatrsNormal};
pub use models::traits::NormalCdf;

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured calculator settings.
///
/// - [`console()`]: every value typed by hand, no limits, `Rs:` prefix
/// - [`form()`]: blank answers take the pre-filled defaults, form minimums enforced, `$` prefix
pub mod default_configs {
    use crate::config::CalculatorConfig;

    /// Plain console calculator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bs_calculator::default_configs;
    ///
    /// let config = default_configs::console();
    /// assert!(!config.accept_blank);
    /// ```
    pub fn console() -> CalculatorConfig {
        CalculatorConfig::console()
    }

    /// Form-style calculator with pre-filled inputs and minimums.
    pub fn form() -> CalculatorConfig {
        CalculatorConfig::form()
    }
}

/// Price a European call option under Black-Scholes.
///
/// # Arguments
///
/// * `s` - Spot price of the underlying, must be positive
/// * `k` - Strike price, must be positive
/// * `t` - Time to expiration in years, must be positive
/// * `r` - Continuously compounded risk-free rate, any finite value
/// * `sigma` - Annualised volatility, must be positive
///
/// # Returns
///
/// [`CallQuote`] with `price`, `d1` and `d2`. The price always lies in `[0, s]`.
///
/// # Errors
///
/// [`PricingError::InvalidInput`] if `s`, `k`, `t` or `sigma` is zero,
/// negative, NaN or infinite, or if `r` is NaN or infinite. No other failure
/// is possible.
pub fn price_call(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> PricingResult<CallQuote> {
    BlackScholesCall::standard().price(&CallInputs::new(s, k, t, r, sigma))
}
