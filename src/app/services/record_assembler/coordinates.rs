//! Coordinate hunting over buffered row text
//!
//! The easting and northing are the first two integers that appear after a
//! waypoint opens, wherever the row breaks fall. Callers buffer row text and
//! re-run the hunt each time the buffer grows.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

use crate::constants::INTEGER_TOKEN_PATTERN;

static RE_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(INTEGER_TOKEN_PATTERN).expect("valid integer regex"));

/// Outcome of scanning buffered text for an easting/northing pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateHunt {
    /// Fewer than two integers so far; keep buffering
    Pending,
    /// First two integers found
    Found {
        /// First integer token, `None` if it does not fit in a `u64`
        easting: Option<u64>,
        /// Second integer token, `None` if it does not fit in a `u64`
        northing: Option<u64>,
        /// Byte offset just past the second integer; the rest is leftover text
        consumed: usize,
    },
}

/// Look for the first two integer tokens in `text`
pub fn hunt_coordinates(text: &str) -> CoordinateHunt {
    let mut tokens = RE_INTEGER.find_iter(text);

    let (Some(first), Some(second)) = (tokens.next(), tokens.next()) else {
        return CoordinateHunt::Pending;
    };

    CoordinateHunt::Found {
        easting: parse_integer_token(first.as_str()),
        northing: parse_integer_token(second.as_str()),
        consumed: second.end(),
    }
}

/// Parse a digit run, leading zeros allowed
fn parse_integer_token(token: &str) -> Option<u64> {
    match token.parse::<u64>() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Integer token '{}' is not a usable coordinate: {}", token, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_integer_is_pending() {
        assert_eq!(hunt_coordinates("0412680 x"), CoordinateHunt::Pending);
        assert_eq!(hunt_coordinates(""), CoordinateHunt::Pending);
        assert_eq!(hunt_coordinates("no digits here"), CoordinateHunt::Pending);
    }

    #[test]
    fn test_first_two_integers_win() {
        let text = "0412680 x y 7654321 Summit 2 km";
        match hunt_coordinates(text) {
            CoordinateHunt::Found {
                easting,
                northing,
                consumed,
            } => {
                assert_eq!(easting, Some(412680));
                assert_eq!(northing, Some(7654321));
                assert_eq!(&text[consumed..], " Summit 2 km");
            }
            CoordinateHunt::Pending => panic!("Expected coordinates"),
        }
    }

    #[test]
    fn test_integers_across_newlines() {
        let text = "x 412680\n7654321";
        match hunt_coordinates(text) {
            CoordinateHunt::Found { consumed, .. } => assert_eq!(consumed, text.len()),
            CoordinateHunt::Pending => panic!("Expected coordinates"),
        }
    }

    #[test]
    fn test_oversized_token_is_unset() {
        let hunt = hunt_coordinates("99999999999999999999999 12");
        assert_eq!(
            hunt,
            CoordinateHunt::Found {
                easting: None,
                northing: Some(12),
                consumed: 26,
            }
        );
    }

    #[test]
    fn test_digits_inside_words_count() {
        // Digit runs are maximal runs of digits regardless of neighbours
        match hunt_coordinates("E412680N7654321") {
            CoordinateHunt::Found {
                easting, northing, ..
            } => {
                assert_eq!(easting, Some(412680));
                assert_eq!(northing, Some(7654321));
            }
            CoordinateHunt::Pending => panic!("Expected coordinates"),
        }
    }
}
