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


//! uen-distance
//!
//! A library for calculating the distance between a pair of positions in a
//! local Up-East-North (UEN) tangent plane on the
//! [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//! ellipsoid.
//!
//! This library uses the WGS-84 primary parameters defined in Tab. 3-1 of the
//! [ICAO WGS-84 Implementation Manual](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf).
//!
//! ## UEN distances
//!
//! A probe position is transformed into the UEN frame of a reference
//! position, see the [`uen`] module. The distance between the positions is
//! then:
//!
//! - the *ground* distance: the magnitude of the East and North offsets;
//! - the *slant* distance: the magnitude of all three offsets, including the
//!   Up offset corrected for the curvature of the Earth.
//!
//! The transform is a flat Earth approximation, so it should only be used
//! for positions that are close together, i.e. within a few hundred
//! kilometres.
//!
//! ## Design
//!
//! The distance calculations are total functions: they do not validate
//! their inputs and return the result of the calculation for any input,
//! including `NaN`s, which are propagated to the output.
//! `GeodeticPoint` implements [`Validate`] so that callers can check
//! positions before using them.
//!
//! Altitudes are always in metres. The [`units`] module converts
//! altitudes given in feet and returns [`Error::InvalidUnit`] for units
//! that it does not recognise.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`
//!   and the `Validate` trait;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod ellipsoid;
pub mod error;
pub mod uen;
pub mod units;

pub use angle_sc::{Degrees, Validate};
pub use error::Error;
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use uen::{lla2uen, lla2uen_with_options, CurvatureCorrection, RadiusLatitude, UenOptions};
pub use unit_sphere::LatLong;
pub use units::AltitudeUnit;

use core::fmt;
use core::ops::Sub;

/// A position on the WGS-84 ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticPoint {
    /// The geodetic latitude.
    lat: Degrees,
    /// The longitude.
    lon: Degrees,
    /// The altitude above the ellipsoid.
    alt: Metres,
}

impl Validate for GeodeticPoint {
    /// Test whether a `GeodeticPoint` is valid.
    /// Whether -90° <= `lat` <= 90°, -180° <= `lon` <= 180°
    /// and `alt` is finite.
    fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat.0)
            && (-180.0..=180.0).contains(&self.lon.0)
            && self.alt.0.is_finite()
    }
}

impl GeodeticPoint {
    /// Constructor.
    /// * `lat` - the geodetic latitude.
    /// * `lon` - the longitude.
    /// * `alt` - the altitude in metres.
    #[must_use]
    pub const fn new(lat: Degrees, lon: Degrees, alt: Metres) -> Self {
        Self { lat, lon, alt }
    }

    /// Accessor for the geodetic latitude.
    #[must_use]
    pub const fn lat(&self) -> Degrees {
        self.lat
    }

    /// Accessor for the longitude.
    #[must_use]
    pub const fn lon(&self) -> Degrees {
        self.lon
    }

    /// Accessor for the altitude.
    #[must_use]
    pub const fn alt(&self) -> Metres {
        self.alt
    }

    /// The latitude and longitude of the position.
    #[must_use]
    pub fn lat_long(&self) -> LatLong {
        LatLong::new(self.lat, self.lon)
    }
}

/// An offset in a local Up-East-North tangent plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalUenVector {
    up: Metres,
    east: Metres,
    north: Metres,
}

impl LocalUenVector {
    /// Constructor.
    /// * `up`, `east`, `north` - the offsets in metres.
    #[must_use]
    pub const fn new(up: Metres, east: Metres, north: Metres) -> Self {
        Self { up, east, north }
    }

    /// Accessor for the Up offset.
    #[must_use]
    pub const fn up(&self) -> Metres {
        self.up
    }

    /// Accessor for the East offset.
    #[must_use]
    pub const fn east(&self) -> Metres {
        self.east
    }

    /// Accessor for the North offset.
    #[must_use]
    pub const fn north(&self) -> Metres {
        self.north
    }
}

impl Sub for LocalUenVector {
    type Output = Self;

    /// The offset from `rhs` to `self`, both must be in the same UEN frame.
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            Metres(self.up.0 - rhs.up.0),
            Metres(self.east.0 - rhs.east.0),
            Metres(self.north.0 - rhs.north.0),
        )
    }
}

/// The ground and slant distances between a pair of positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceResult {
    /// The horizontal distance.
    ground_distance: Metres,
    /// The distance including the vertical offset.
    slant_distance: Metres,
}

impl DistanceResult {
    /// Constructor.
    /// * `ground_distance` - the horizontal distance.
    /// * `slant_distance` - the distance including the vertical offset.
    #[must_use]
    pub const fn new(ground_distance: Metres, slant_distance: Metres) -> Self {
        Self {
            ground_distance,
            slant_distance,
        }
    }

    /// Accessor for the ground distance.
    #[must_use]
    pub const fn ground_distance(&self) -> Metres {
        self.ground_distance
    }

    /// Accessor for the slant distance.
    #[must_use]
    pub const fn slant_distance(&self) -> Metres {
        self.slant_distance
    }

    /// The ground distance in kilometres.
    #[must_use]
    pub fn ground_distance_km(&self) -> f64 {
        self.ground_distance.0 * 0.001
    }

    /// The slant distance in kilometres.
    #[must_use]
    pub fn slant_distance_km(&self) -> f64 {
        self.slant_distance.0 * 0.001
    }

    /// The ground distance in nautical miles.
    #[must_use]
    pub fn ground_distance_nm(&self) -> NauticalMiles {
        NauticalMiles::from(self.ground_distance)
    }

    /// The slant distance in nautical miles.
    #[must_use]
    pub fn slant_distance_nm(&self) -> NauticalMiles {
        NauticalMiles::from(self.slant_distance)
    }
}

impl fmt::Display for DistanceResult {
    /// Writes both distances in kilometres to 3 decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ground: {:.3} km, slant: {:.3} km",
            self.ground_distance_km(),
            self.slant_distance_km()
        )
    }
}

/// Calculate the ground and slant distances of a `LocalUenVector`.
/// * `uen` - the offset in a UEN frame.
///
/// returns the magnitude of the East and North offsets and the magnitude
/// of all three offsets.
#[must_use]
pub fn distance(uen: &LocalUenVector) -> DistanceResult {
    let ground = libm::hypot(uen.east.0, uen.north.0);
    let slant = libm::hypot(ground, uen.up.0);
    DistanceResult::new(Metres(ground), Metres(slant))
}

/// Calculate the distances from a reference position to a probe position
/// in the UEN frame of the reference position using the given options.
/// * `reference` - the reference position.
/// * `probe` - the probe position.
/// * `options` - the UEN transform options.
#[must_use]
pub fn calculate_lla2uen_distance_with_options(
    reference: &GeodeticPoint,
    probe: &GeodeticPoint,
    options: &UenOptions,
) -> DistanceResult {
    let result = distance(&lla2uen_with_options(reference, probe, options));
    log::trace!(
        "lla2uen distance ground: {} slant: {}",
        result.ground_distance.0,
        result.slant_distance.0
    );
    result
}

/// Calculate the distances from a reference position to a probe position
/// in the UEN frame of the reference position.
/// * `reference` - the reference position.
/// * `probe` - the probe position.
///
/// returns the ground and slant distances between the positions.
///
/// # Examples
/// ```
/// use uen_distance::*;
///
/// let reference = GeodeticPoint::new(Degrees(0.0), Degrees(0.0), Metres(0.0));
/// let probe = GeodeticPoint::new(Degrees(0.0), Degrees(1.0), Metres(0.0));
/// let result = calculate_lla2uen_distance(&reference, &probe);
///
/// // one degree of longitude at the Equator
/// assert_eq!("ground: 111.319 km, slant: 111.324 km", result.to_string());
/// ```
#[must_use]
pub fn calculate_lla2uen_distance(
    reference: &GeodeticPoint,
    probe: &GeodeticPoint,
) -> DistanceResult {
    calculate_lla2uen_distance_with_options(reference, probe, &UenOptions::default())
}

/// Calculate the distances between a pair of positions in the UEN frame of
/// a reference position using the given options.
/// * `reference` - the reference position, the origin of the UEN frame.
/// * `a`, `b` - the positions.
/// * `options` - the UEN transform options.
///
/// returns the ground and slant distances between `a` and `b`.
#[must_use]
pub fn calculate_distance_between_with_options(
    reference: &GeodeticPoint,
    a: &GeodeticPoint,
    b: &GeodeticPoint,
    options: &UenOptions,
) -> DistanceResult {
    let uen =
        lla2uen_with_options(reference, b, options) - lla2uen_with_options(reference, a, options);
    let result = distance(&uen);
    log::trace!(
        "distance between ground: {} slant: {}",
        result.ground_distance.0,
        result.slant_distance.0
    );
    result
}

/// Calculate the distances between a pair of positions in the UEN frame of
/// a reference position.
/// * `reference` - the reference position, the origin of the UEN frame.
/// * `a`, `b` - the positions.
///
/// returns the ground and slant distances between `a` and `b`.
#[must_use]
pub fn calculate_distance_between(
    reference: &GeodeticPoint,
    a: &GeodeticPoint,
    b: &GeodeticPoint,
) -> DistanceResult {
    calculate_distance_between_with_options(reference, a, b, &UenOptions::default())
}
