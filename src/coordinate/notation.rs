//! Degree-minute-second notation.
//!
//! Accepts a latitude/longitude pair such as `15°46'47"S 47°55'47"W`:
//!
//! ```text
//! [-]D°M'S"(N|S) <whitespace*> [-]D°M'S"(E|W)
//! ```
//!
//! - latitude degrees have 1–2 digits, longitude degrees 1–3 digits
//!   (a 3-digit longitude must start with `0` or `1`);
//! - minutes and seconds have 1–2 digits, a 2-digit value starting `0`–`5`;
//! - hemisphere letters are case-insensitive; surrounding whitespace is
//!   ignored.
//!
//! A leading `-` and a southern/western hemisphere each flip the sign, so
//! `-10°0'0"S` decodes to `+10`.

use std::str::FromStr;

use super::types::Coordinate;
use crate::error::ParseError;

/// Parses a degree-minute-second pair into a [`Coordinate`].
///
/// # Examples
///
/// ```
/// use u_geocoord::parse_notation;
///
/// let c = parse_notation(r#"15°46'47"S 47°55'47"W"#).unwrap();
/// assert!((c.latitude() + 15.779722).abs() < 1e-6);
/// assert!((c.longitude() + 47.929722).abs() < 1e-6);
/// ```
pub fn parse_notation(text: &str) -> Result<Coordinate, ParseError> {
    let trimmed = text.trim();
    let Some((latitude, longitude)) = decode_pair(trimmed) else {
        tracing::debug!(notation = text, "rejected malformed notation");
        return Err(ParseError::Malformed {
            notation: text.to_owned(),
        });
    };
    Ok(Coordinate::make(latitude, longitude)?)
}

impl FromStr for Coordinate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_notation(s)
    }
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn max_degree_digits(self) -> usize {
        match self {
            Axis::Latitude => 2,
            Axis::Longitude => 3,
        }
    }

    /// Sign for a hemisphere letter, `None` if the letter is not valid here.
    fn hemisphere_sign(self, letter: char) -> Option<f64> {
        match (self, letter.to_ascii_uppercase()) {
            (Axis::Latitude, 'N') | (Axis::Longitude, 'E') => Some(1.0),
            (Axis::Latitude, 'S') | (Axis::Longitude, 'W') => Some(-1.0),
            _ => None,
        }
    }
}

fn decode_pair(s: &str) -> Option<(f64, f64)> {
    let (latitude, rest) = decode_component(s, Axis::Latitude)?;
    let rest = rest.trim_start();
    let (longitude, rest) = decode_component(rest, Axis::Longitude)?;
    rest.is_empty().then_some((latitude, longitude))
}

fn decode_component(s: &str, axis: Axis) -> Option<(f64, &str)> {
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let (degrees, s) = take_digits(s, axis.max_degree_digits())?;
    if degrees.len() == 3 && !degrees.starts_with(['0', '1']) {
        return None;
    }
    let s = s.strip_prefix('°')?;

    let (minutes, s) = take_sexagesimal(s)?;
    let s = s.strip_prefix('\'')?;
    let (seconds, s) = take_sexagesimal(s)?;
    let s = s.strip_prefix('"')?;

    let mut chars = s.chars();
    let sign = axis.hemisphere_sign(chars.next()?)?;

    let magnitude = degrees.parse::<f64>().ok()? + minutes / 60.0 + seconds / 3600.0;
    let sign = if negative { -sign } else { sign };
    Some((sign * magnitude, chars.as_str()))
}

/// Takes 1 to `max` leading ASCII digits.
fn take_digits(s: &str, max: usize) -> Option<(&str, &str)> {
    let len = s
        .bytes()
        .take(max)
        .take_while(u8::is_ascii_digit)
        .count();
    (len > 0).then(|| s.split_at(len))
}

/// Minutes or seconds: one digit, or two digits with the first in `0..=5`.
fn take_sexagesimal(s: &str) -> Option<(f64, &str)> {
    let (digits, rest) = take_digits(s, 2)?;
    if digits.len() == 2 && digits.as_bytes()[0] > b'5' {
        return None;
    }
    Some((digits.parse().ok()?, rest))
}
