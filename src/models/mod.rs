pub mod bs;
pub mod normal;

/// Common traits used by the pricing models
pub mod traits {
    /// Standard normal cumulative distribution function Φ(x).
    ///
    /// Implementations must be monotone in `x`, satisfy `Φ(0) = 0.5` and
    /// `Φ(-x) = 1 - Φ(x)`, and stay within 1e-9 of the exact value for
    /// `|x| <= 10`. Infinite arguments map to 0 or 1; NaN propagates.
    pub trait NormalCdf: Send + Sync {
        fn cdf(&self, x: f64) -> f64;

        /// Short identifier used in logs and configuration
        fn name(&self) -> &'static str;
    }

    impl<T: NormalCdf + ?Sized> NormalCdf for &T {
        fn cdf(&self, x: f64) -> f64 {
            (**self).cdf(x)
        }

        fn name(&self) -> &'static str {
            (**self).name()
        }
    }
}
