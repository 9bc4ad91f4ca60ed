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


//! The ellipsoid module contains functions for calculating the local
//! geometry of an ellipsoid of revolution given its Semimajor axis (the
//! equivalent of its radius) and flattening ratio.

#![allow(clippy::suboptimal_flops)]

pub mod wgs84;

use crate::Metres;
use angle_sc::Degrees;

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use uen_distance::ellipsoid::{calculate_sq_eccentricity, wgs84};
///
/// // The WGS 84 sq_eccentricity.
/// assert_eq!(0.0066943799901413165, calculate_sq_eccentricity(wgs84::F));
/// ```
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the radius of curvature in the prime vertical of an ellipsoid
/// at a geodetic latitude.
///
/// Only the sine of the latitude is used, so any finite latitude gives a
/// result, e.g. 135° gives the same radius as 45°.
/// * `lat` - the geodetic latitude.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `e_2` - the square of the Eccentricity of the ellipsoid.
///
/// returns the radius of curvature in metres.
#[must_use]
pub fn calculate_radius_of_curvature(lat: Degrees, a: Metres, e_2: f64) -> Metres {
    let sin_lat = libm::sin(lat.0.to_radians());
    Metres(a.0 / libm::sqrt(1.0 - e_2 * sin_lat * sin_lat))
}
