// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.


//! The units module converts caller supplied altitudes into metres.
//!
//! An altitude is given together with the text of its unit, e.g. "meters"
//! or "Feet". The unit is classified by its first character, so
//! abbreviations and either spelling of metres are accepted.
//! Text that is neither metres nor feet is rejected with
//! [`Error::InvalidUnit`], it is up to the caller to ask again.

use crate::error::Error;
use crate::{GeodeticPoint, Metres};
use angle_sc::Degrees;
use core::str::FromStr;

/// The number of metres in an international foot.
pub const METRES_PER_FOOT: f64 = 0.3048;

/// Convert a length in feet to `Metres`.
/// * `feet` - the length in feet.
#[must_use]
pub fn convert_feet_to_metres(feet: f64) -> Metres {
    Metres(feet * METRES_PER_FOOT)
}

/// The unit of an altitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AltitudeUnit {
    /// SI metres.
    #[default]
    Metres,
    /// International feet, 0.3048 metres.
    Feet,
}

impl AltitudeUnit {
    /// Convert an altitude in this unit to `Metres`.
    /// * `value` - the altitude.
    #[must_use]
    pub fn to_metres(self, value: f64) -> Metres {
        match self {
            Self::Metres => Metres(value),
            Self::Feet => convert_feet_to_metres(value),
        }
    }
}

impl FromStr for AltitudeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start().chars().next() {
            Some('m' | 'M') => Ok(Self::Metres),
            Some('f' | 'F') => Ok(Self::Feet),
            _ => Err(Error::InvalidUnit),
        }
    }
}

impl GeodeticPoint {
    /// Construct a `GeodeticPoint` from an altitude in a named unit.
    /// * `lat` - the geodetic latitude.
    /// * `lon` - the longitude.
    /// * `alt` - the altitude in `unit`s.
    /// * `unit` - the name of the altitude unit, e.g. "meters" or "feet".
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUnit`] if `unit` is neither metres nor feet.
    ///
    /// # Examples
    /// ```
    /// use uen_distance::{Degrees, GeodeticPoint, Metres};
    ///
    /// let point = GeodeticPoint::from_altitude_unit(Degrees(51.5), Degrees(0.0), 1000.0, "feet").unwrap();
    /// assert_eq!(Metres(304.8), point.alt());
    /// ```
    pub fn from_altitude_unit(
        lat: Degrees,
        lon: Degrees,
        alt: f64,
        unit: &str,
    ) -> Result<Self, Error> {
        let unit = unit.parse::<AltitudeUnit>()?;
        Ok(Self::new(lat, lon, unit.to_metres(alt)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_altitude_unit() {
        assert_eq!(Ok(AltitudeUnit::Metres), "meters".parse());
        assert_eq!(Ok(AltitudeUnit::Metres), "Metres".parse());
        assert_eq!(Ok(AltitudeUnit::Metres), " m".parse());
        assert_eq!(Ok(AltitudeUnit::Feet), "feet".parse());
        assert_eq!(Ok(AltitudeUnit::Feet), "FT".parse());

        assert_eq!(Err(Error::InvalidUnit), "".parse::<AltitudeUnit>());
        assert_eq!(Err(Error::InvalidUnit), "   ".parse::<AltitudeUnit>());
        assert_eq!(Err(Error::InvalidUnit), "yards".parse::<AltitudeUnit>());
        assert_eq!(Err(Error::InvalidUnit), "km".parse::<AltitudeUnit>());
    }

    #[test]
    fn test_altitude_unit_to_metres() {
        assert_eq!(Metres(100.0), AltitudeUnit::Metres.to_metres(100.0));
        assert_eq!(Metres(30.48), AltitudeUnit::Feet.to_metres(100.0));
        assert_eq!(Metres(0.0), AltitudeUnit::Feet.to_metres(0.0));
        assert_eq!(Metres(-3.048), convert_feet_to_metres(-10.0));
    }

    #[test]
    fn test_geodetic_point_from_altitude_unit() {
        let point =
            GeodeticPoint::from_altitude_unit(Degrees(45.0), Degrees(-3.0), 10_000.0, "Feet")
                .unwrap();
        assert_eq!(Degrees(45.0), point.lat());
        assert_eq!(Degrees(-3.0), point.lon());
        assert_eq!(Metres(3048.0), point.alt());

        let point =
            GeodeticPoint::from_altitude_unit(Degrees(45.0), Degrees(-3.0), 250.0, "metres")
                .unwrap();
        assert_eq!(Metres(250.0), point.alt());

        assert_eq!(
            Err(Error::InvalidUnit),
            GeodeticPoint::from_altitude_unit(Degrees(45.0), Degrees(-3.0), 250.0, "inches")
        );
    }
}
