use serde::{Deserialize, Serialize};

/// A point in decimal degrees. No range validation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Parses a coordinate from raw query strings.
    ///
    /// Returns `None` when either value is blank or not a finite number.
    #[must_use]
    pub fn parse(longitude: &str, latitude: &str) -> Option<Self> {
        let parse_one = |raw: &str| -> Option<f64> {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            raw.parse::<f64>().ok().filter(|v| v.is_finite())
        };

        Some(Self::new(parse_one(longitude)?, parse_one(latitude)?))
    }

    /// `lat,lng` form used by map and routing services.
    #[must_use]
    pub fn lat_lng(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_decimal_degrees() {
        let coord = Coordinate::parse("135.5023", "34.6937").expect("valid coordinate");
        assert_eq!(coord, Coordinate::new(135.5023, 34.6937));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert!(Coordinate::parse(" 135.5 ", "34.6\t").is_some());
    }

    #[test]
    fn parse_rejects_blank_and_garbage() {
        assert!(Coordinate::parse("", "34.6").is_none());
        assert!(Coordinate::parse("135.5", "   ").is_none());
        assert!(Coordinate::parse("east", "34.6").is_none());
        assert!(Coordinate::parse("NaN", "34.6").is_none());
    }

    #[test]
    fn lat_lng_puts_latitude_first() {
        assert_eq!(Coordinate::new(135.5, 34.25).lat_lng(), "34.25,135.5");
    }

    #[test]
    fn serializes_with_named_fields() {
        let json = serde_json::to_value(Coordinate::new(135.5, 34.25)).expect("serialize");
        assert_eq!(json["longitude"], 135.5);
        assert_eq!(json["latitude"], 34.25);
    }
}
