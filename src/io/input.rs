//! Reading coefficients from text.
//!
//! The first three whitespace-separated tokens are taken as a, b, c in order;
//! they may be spread across lines. Anything after them is ignored.

use std::io::Read;

use crate::core::error::InputError;
use crate::core::titan::algebra::Coefficients;

const NAMES: [&str; 3] = ["a", "b", "c"];

pub fn parse_coefficient(name: &'static str, token: &str) -> Result<f64, InputError> {
    let value: f64 = token.parse().map_err(|_| InputError::NotANumber {
        name,
        token: token.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NotFinite {
            name,
            token: token.to_string(),
        });
    }
    Ok(value)
}

/// Builds coefficients from tokens already split (CLI args or text words).
pub fn coefficients_from_tokens<'a, I>(tokens: I) -> Result<Coefficients, InputError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut values = [0.0f64; 3];
    let mut found = 0;
    for (slot, token) in tokens.into_iter().take(NAMES.len()).enumerate() {
        values[slot] = parse_coefficient(NAMES[slot], token)?;
        found += 1;
    }
    if found < NAMES.len() {
        return Err(InputError::Missing {
            expected: NAMES.len(),
            found,
        });
    }
    Ok(Coefficients::new(values[0], values[1], values[2]))
}

pub fn parse_coefficients(text: &str) -> Result<Coefficients, InputError> {
    coefficients_from_tokens(text.split_whitespace())
}

pub fn read_coefficients<R: Read>(mut reader: R) -> Result<Coefficients, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_coefficients(&text)
}
