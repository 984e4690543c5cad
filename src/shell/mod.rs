//! Line-oriented calculator session.
//!
//! A [`Session`] asks for the five pricing inputs one prompt at a time,
//! prices the call and prints the result block, then offers another
//! calculation until the user answers `no` or the input stream ends.
//! Reader and writer are generic so the whole dialogue can be driven from
//! memory in tests.

pub mod format;

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::config::CalculatorConfig;
use crate::error::ShellError;
use crate::models::bs::{BlackScholesCall, CallInputs, CallQuote};
use crate::models::normal::CdfProvider;

pub use format::{format_inputs, format_quote, MODEL_DESCRIPTION};

pub const HEADER: &str = "Black-Scholes Call Option Price Calculator";
pub const AGAIN_PROMPT: &str = "\nWould you like to calculate another option? (yes/no): ";
pub const PARSE_ERROR_MESSAGE: &str = "Error: Please enter valid numerical values";
pub const GOODBYE: &str = "Thank you for using the calculator!";

const SPOT_PROMPT: &str = "Spot Price of the underlying asset (S): ";
const STRIKE_PROMPT: &str = "Strike Price of the option (K): ";
const EXPIRY_PROMPT: &str = "Time to expiration in years (T): ";
const RATE_PROMPT: &str = "Risk-free interest rate (r) as decimal (e.g., 0.05 for 5%): ";
const VOL_PROMPT: &str = "Volatility (σ) as decimal (e.g., 0.2 for 20%): ";

/// Interactive pricing session over any line reader and writer
pub struct Session<R, W> {
    reader: R,
    writer: W,
    config: CalculatorConfig,
    pricer: BlackScholesCall<CdfProvider>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, config: CalculatorConfig) -> Self {
        let pricer = BlackScholesCall::new(config.cdf);
        Self {
            reader,
            writer,
            config,
            pricer,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Consume the session and hand back the writer, e.g. to inspect output.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write `text` without a newline and read one answer.
    ///
    /// Returns `None` once the input is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn read_value(
        &mut self,
        field: &'static str,
        text: &str,
        default: f64,
        min: f64,
    ) -> Result<f64, ShellError> {
        let answer = self.prompt(text)?.ok_or_else(|| {
            ShellError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while reading values",
            ))
        })?;

        let value = if answer.is_empty() && self.config.accept_blank {
            default
        } else {
            answer.parse::<f64>().map_err(|_| ShellError::Parse {
                field,
                input: answer.clone(),
            })?
        };

        if self.config.limits.enforce && value < min {
            return Err(ShellError::BelowLimit { field, min, value });
        }
        Ok(value)
    }

    /// Prompt for spot, strike, expiry, rate and volatility, in that order.
    pub fn read_inputs(&mut self) -> Result<CallInputs, ShellError> {
        let defaults = self.config.defaults;
        let limits = self.config.limits;

        let spot = self.read_value("spot", SPOT_PROMPT, defaults.spot, limits.min_spot)?;
        let strike = self.read_value("strike", STRIKE_PROMPT, defaults.strike, limits.min_strike)?;
        let years_to_exp = self.read_value(
            "time to expiration",
            EXPIRY_PROMPT,
            defaults.years_to_exp,
            limits.min_years_to_exp,
        )?;
        let rate = self.read_value("rate", RATE_PROMPT, defaults.rate, limits.min_rate)?;
        let volatility = self.read_value(
            "volatility",
            VOL_PROMPT,
            defaults.volatility,
            limits.min_volatility,
        )?;

        Ok(CallInputs::new(spot, strike, years_to_exp, rate, volatility))
    }

    /// One full calculation: header, prompts, result block.
    ///
    /// Bad answers and rejected inputs are reported to the user and yield
    /// `Ok(None)`; only terminal I/O failures are returned as errors.
    pub fn run_once(&mut self) -> Result<Option<CallQuote>, ShellError> {
        writeln!(self.writer, "{}", HEADER)?;
        writeln!(
            self.writer,
            "Please enter the following values one at a time:"
        )?;

        let outcome = self.read_inputs().and_then(|inputs| {
            let quote = self.pricer.price(&inputs)?;
            Ok((inputs, quote))
        });

        match outcome {
            Ok((inputs, quote)) => {
                let text = format_quote(&quote, &self.config.display);
                write!(self.writer, "{}", text)?;
                if self.config.display.echo_inputs {
                    write!(self.writer, "{}", format_inputs(&inputs))?;
                }
                Ok(Some(quote))
            }
            Err(ShellError::Io(e)) => Err(ShellError::Io(e)),
            Err(e @ ShellError::Parse { .. }) => {
                warn!(error = %e, "rejected answer");
                writeln!(self.writer, "{}", PARSE_ERROR_MESSAGE)?;
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "rejected inputs");
                writeln!(self.writer, "Error: {}", e)?;
                Ok(None)
            }
        }
    }

    /// Run calculations until the user declines another one.
    ///
    /// Returns the number of successful quotes. Closing the input ends the
    /// session quietly.
    pub fn run(&mut self) -> Result<usize, ShellError> {
        let mut priced = 0;

        match self.run_once() {
            Ok(Some(_)) => priced += 1,
            Ok(None) => {}
            Err(ShellError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(priced)
            }
            Err(e) => return Err(e),
        }

        loop {
            let answer = match self.prompt(AGAIN_PROMPT)? {
                Some(answer) => answer.to_lowercase(),
                None => break,
            };

            match answer.as_str() {
                "yes" => {
                    writeln!(self.writer, "\n{}\n", "-".repeat(50))?;
                    match self.run_once() {
                        Ok(Some(_)) => priced += 1,
                        Ok(None) => {}
                        Err(ShellError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                            break
                        }
                        Err(e) => return Err(e),
                    }
                }
                "no" => {
                    writeln!(self.writer, "{}", GOODBYE)?;
                    break;
                }
                _ => writeln!(self.writer, "Please enter 'yes' or 'no'")?,
            }
        }

        info!(priced, "session finished");
        Ok(priced)
    }
}
