use sortr_common::config::Config;
use sortr_common::parcel::{Category, Package};
use sortr_core::{Assessment, classify_package};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::terminal::report;

pub const EXPECTED_VALUES: usize = 4;

/// Problems with the raw command line tokens. These never reach the classifier.
#[derive(Error, Debug, PartialEq)]
pub enum ArgsError {
    #[error("expected {EXPECTED_VALUES} values (width, height, length, mass), got {0}")]
    WrongCount(usize),
    #[error("\"{0}\" is not a valid number")]
    NotANumber(String),
}

/// Parses the tokens and sorts the package they describe.
///
/// Out-of-range values are not an error here: they come back as
/// [`Category::Rejected`].
pub fn classify(values: &[String], cfg: &Config) -> Result<Category, ArgsError> {
    let [width, height, length, mass] = parse_values(values)?;
    debug!(width, height, length, mass, "classifying package");

    let category = match Package::new(width, height, length, mass) {
        Ok(package) => {
            let category = classify_package(&package);
            if cfg.shows_report() {
                report::assessment(&package, &Assessment::of(&package));
            }
            category
        }
        Err(err) => {
            warn!("{err}");
            if cfg.shows_report() {
                report::rejection(&err);
            }
            Category::Rejected
        }
    };

    info!("package sorted as {category}");
    Ok(category)
}

pub fn parse_values(values: &[String]) -> Result<[f64; EXPECTED_VALUES], ArgsError> {
    let [width, height, length, mass] = values else {
        return Err(ArgsError::WrongCount(values.len()));
    };

    Ok([
        parse_value(width)?,
        parse_value(height)?,
        parse_value(length)?,
        parse_value(mass)?,
    ])
}

/// Parses the longest numeric prefix of a token as `f64`, after leading whitespace.
///
/// `10cm` reads as 10 and `1e` as 1. A token without a numeric prefix (`lala`,
/// `NaN`, `.`) is not a number. Infinity is let through for the classifier to reject.
pub fn parse_value(token: &str) -> Result<f64, ArgsError> {
    numeric_prefix(token.trim_start())
        .parse::<f64>()
        .map_err(|_| ArgsError::NotANumber(token.to_string()))
}

const INFINITY_WORDS: [&str; 2] = ["infinity", "inf"];

/// Returns the longest leading slice of `s` that reads as a decimal float.
///
/// Accepts an optional sign, then either an infinity word (any case) or
/// digits with an optional fraction and exponent. Empty if nothing matches.
fn numeric_prefix(s: &str) -> &str {
    let bytes: &[u8] = s.as_bytes();
    let mut end: usize = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    for word in INFINITY_WORDS {
        if s[end..]
            .get(..word.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(word))
        {
            return &s[..end + word.len()];
        }
    }

    let int_digits: usize = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits: usize = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return "";
    }

    // An exponent only counts with at least one digit after it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp: usize = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits: usize = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    &s[..end]
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
