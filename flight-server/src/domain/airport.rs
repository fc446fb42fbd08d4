//! Airport code types.

use std::fmt;
use std::sync::Arc;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// Longest code we accept. IATA codes are 3 letters, ICAO 4; anything beyond
/// this is almost certainly a city name typed into the wrong field.
const MAX_LEN: usize = 8;

/// An opaque airport identifier, always uppercase ASCII alphanumeric.
///
/// The flight graph does not check codes against a master list; a code that
/// has no flights is simply a node with no outbound edges. Cloning is cheap
/// (the text is shared), and the ordering is lexicographic so it can serve
/// as a deterministic tie-break inside the searches.
///
/// # Examples
///
/// ```
/// use flight_server::domain::AirportCode;
///
/// let del = AirportCode::parse("DEL").unwrap();
/// assert_eq!(del.as_str(), "DEL");
///
/// // Strict parsing rejects lowercase
/// assert!(AirportCode::parse("del").is_err());
///
/// // Normalized parsing trims and uppercases
/// assert_eq!(AirportCode::parse_normalized(" del ").unwrap(), del);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode(Arc<str>);

impl AirportCode {
    /// Parse an airport code that is already in canonical form.
    ///
    /// The input must be 1 to 8 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        if s.is_empty() {
            return Err(InvalidAirportCode {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_LEN {
            return Err(InvalidAirportCode {
                reason: "must be at most 8 characters",
            });
        }

        if !s
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(InvalidAirportCode {
                reason: "must be uppercase ASCII letters or digits",
            });
        }

        Ok(AirportCode(Arc::from(s)))
    }

    /// Parse an airport code, trimming whitespace and uppercasing first.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidAirportCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
