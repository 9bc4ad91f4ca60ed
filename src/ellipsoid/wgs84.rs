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


//! The wgs84 module contains the WGS 84 geoid primary parameters from the ICAO
//! [WGS 84 Implementation Manual Version 2.4](https://www.icao.int/safety/pbn/Documentation/EUROCONTROL/Eurocontrol%20WGS%2084%20Implementation%20Manual.pdf)
//! Chapter 3, page 14.

use crate::ellipsoid::{calculate_radius_of_curvature, Metres};
use angle_sc::Degrees;

/// The WGS 84 Semimajor axis measured in metres.  
/// This is the radius at the equator.
pub const A: Metres = Metres(6_378_137.0);

/// The WGS 84 flattening, a ratio.  
/// This is the flattening of the ellipsoid at the poles.
pub const F: f64 = 1.0 / 298.257_223_563;

/// The square of the WGS 84 Eccentricity.
pub const E_2: f64 = (2.0 - F) * F;

/// Calculate the radius of the WGS 84 ellipsoid at a geodetic latitude.
/// * `lat` - the geodetic latitude.
///
/// # Examples
/// ```
/// use uen_distance::Degrees;
/// use uen_distance::ellipsoid::wgs84;
///
/// assert_eq!(wgs84::A, wgs84::calculate_earth_radius(Degrees(0.0)));
/// ```
#[must_use]
pub fn calculate_earth_radius(lat: Degrees) -> Metres {
    calculate_radius_of_curvature(lat, A, E_2)
}
