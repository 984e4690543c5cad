use crate::config::DisplayConfig;
use crate::models::bs::{CallInputs, CallQuote};

/// Short description of the model shown by `bs-calc --about`.
pub const MODEL_DESCRIPTION: &str = "\
The Black-Scholes model is a mathematical model for pricing options contracts.
The formula used is:
C = S * N(d1) - K * e^(-rT) * N(d2)

Where:
- C = Call option price
- S = Spot price
- K = Strike price
- T = Time to expiration
- r = Risk-free rate
- σ = Volatility
- N() = Cumulative distribution function of standard normal distribution
- d1 = [ln(S/K) + (r + σ²/2)T] / (σ√T)
- d2 = d1 - σ√T
";

/// Render the result block printed after a successful valuation.
pub fn format_quote(quote: &CallQuote, display: &DisplayConfig) -> String {
    format!(
        "\nResults:\nd1: {:.dp$}\nd2: {:.dp$}\nCall Option Price: {}{:.pp$}\n",
        quote.d1,
        quote.d2,
        display.currency,
        quote.price,
        dp = display.d_decimals,
        pp = display.price_decimals,
    )
}

/// Echo of the inputs a quote was computed from.
pub fn format_inputs(inputs: &CallInputs) -> String {
    format!(
        "\nInput Parameters Used:\n\
         Spot Price (S): {}\n\
         Strike Price (K): {}\n\
         Time to Expiration (T): {} years\n\
         Risk-free Rate (r): {}\n\
         Volatility (σ): {}\n",
        inputs.spot, inputs.strike, inputs.years_to_exp, inputs.rate, inputs.volatility
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quote_console_defaults() {
        let quote = CallQuote {
            price: 13.346_464_945_9,
            d1: 0.606_466_471_9,
            d2: 0.406_466_471_9,
        };
        let text = format_quote(&quote, &DisplayConfig::default());
        assert_eq!(
            text,
            "\nResults:\nd1: 0.6065\nd2: 0.4065\nCall Option Price: Rs:13.35\n"
        );
    }

    #[test]
    fn test_format_quote_custom_precision() {
        let quote = CallQuote {
            price: 4.338_822_781_2,
            d1: 0.129_636_243_2,
            d2: -0.082_495_791_1,
        };
        let display = DisplayConfig {
            price_decimals: 4,
            d_decimals: 2,
            currency: "$".to_string(),
            echo_inputs: false,
        };
        let text = format_quote(&quote, &display);
        assert!(text.contains("d1: 0.13\n"));
        assert!(text.contains("d2: -0.08\n"));
        assert!(text.ends_with("Call Option Price: $4.3388\n"));
    }

    #[test]
    fn test_format_inputs() {
        let text = format_inputs(&CallInputs::new(100.0, 95.0, 1.0, 0.05, 0.2));
        assert!(text.starts_with("\nInput Parameters Used:\nSpot Price (S): 100\n"));
        assert!(text.contains("Time to Expiration (T): 1 years\n"));
        assert!(text.ends_with("Volatility (σ): 0.2\n"));
    }
}
