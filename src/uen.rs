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


//! The uen module transforms geodetic positions into a local Up-East-North
//! (UEN) tangent plane anchored at a reference position.
//!
//! The East and North offsets are the longitude and latitude differences
//! scaled by the radius of the WGS 84 ellipsoid. The Up offset is the
//! altitude difference less the distance that the surface of the Earth
//! drops below the tangent plane at the horizontal distance of the probe,
//! see `calculate_curvature_drop`.
//!
//! The transform is only meaningful close to the reference position:
//! as the horizontal distance approaches a quarter of the Earth's
//! circumference the curvature drop diverges to infinity.

#![allow(clippy::suboptimal_flops)]

use crate::ellipsoid::wgs84;
use crate::{GeodeticPoint, LocalUenVector, Metres};

/// The latitude at which the radius of the Earth is evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RadiusLatitude {
    /// The latitude of the probe position.
    #[default]
    Probe,
    /// The latitude of the reference position.
    Reference,
}

/// When to subtract the curvature drop from the Up offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CurvatureCorrection {
    /// Always subtract the curvature drop.
    #[default]
    Always,
    /// Only subtract the curvature drop if the Up offset is greater than it,
    /// i.e. if the probe is above the Earth's surface as seen from the
    /// reference position.
    WhenAbove,
    /// Never subtract the curvature drop.
    Never,
}

/// The options of the UEN transform.
///
/// The default options evaluate the Earth radius at the probe latitude and
/// always apply the curvature correction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UenOptions {
    /// The latitude at which the Earth radius is evaluated.
    pub radius_latitude: RadiusLatitude,
    /// When the curvature drop is subtracted from the Up offset.
    pub curvature: CurvatureCorrection,
}

impl UenOptions {
    /// Constructor.
    /// * `radius_latitude` - the latitude to evaluate the Earth radius at.
    /// * `curvature` - when to apply the curvature correction.
    #[must_use]
    pub const fn new(radius_latitude: RadiusLatitude, curvature: CurvatureCorrection) -> Self {
        Self {
            radius_latitude,
            curvature,
        }
    }
}

/// Calculate the distance that the surface of a sphere drops below its
/// tangent plane at a horizontal distance from the tangent point.
/// * `horizontal` - the horizontal distance from the tangent point.
/// * `radius` - the radius of the sphere.
///
/// returns `radius * (1 / cos(horizontal / radius) - 1)`.
///
/// The drop diverges as `horizontal` approaches a quarter of the
/// circumference. Beyond a quarter of the circumference the sign of the
/// drop flips, so the corrected Up offset becomes positive.
///
/// # Examples
/// ```
/// use uen_distance::Metres;
/// use uen_distance::uen::calculate_curvature_drop;
///
/// assert_eq!(Metres(0.0), calculate_curvature_drop(Metres(0.0), Metres(6_378_137.0)));
/// ```
#[must_use]
pub fn calculate_curvature_drop(horizontal: Metres, radius: Metres) -> Metres {
    Metres(radius.0 * (1.0 / libm::cos(horizontal.0 / radius.0) - 1.0))
}

/// Transform a probe position into the UEN frame of a reference position
/// using the given options.
/// * `reference` - the reference position, the origin of the UEN frame.
/// * `probe` - the position to transform.
/// * `options` - the transform options.
///
/// returns the `LocalUenVector` of `probe` from `reference`.
#[must_use]
pub fn lla2uen_with_options(
    reference: &GeodeticPoint,
    probe: &GeodeticPoint,
    options: &UenOptions,
) -> LocalUenVector {
    let radius = match options.radius_latitude {
        RadiusLatitude::Probe => wgs84::calculate_earth_radius(probe.lat()),
        RadiusLatitude::Reference => wgs84::calculate_earth_radius(reference.lat()),
    };

    let up = probe.alt().0 - reference.alt().0;
    let cos_lat = libm::cos(probe.lat().0.to_radians());
    let east = (probe.lon().0 - reference.lon().0).to_radians() * cos_lat * radius.0;
    let north = (probe.lat().0 - reference.lat().0).to_radians() * radius.0;

    let drop = calculate_curvature_drop(Metres(libm::hypot(east, north)), radius);
    let up = match options.curvature {
        CurvatureCorrection::Always => up - drop.0,
        CurvatureCorrection::WhenAbove if up > drop.0 => up - drop.0,
        CurvatureCorrection::WhenAbove => {
            log::debug!("curvature correction skipped, up: {up} drop: {}", drop.0);
            up
        }
        CurvatureCorrection::Never => up,
    };

    log::trace!(
        "lla2uen radius: {} drop: {} uen: ({up}, {east}, {north})",
        radius.0,
        drop.0
    );
    LocalUenVector::new(Metres(up), Metres(east), Metres(north))
}

/// Transform a probe position into the UEN frame of a reference position.
///
/// The Earth radius is evaluated at the latitude of the probe and the
/// curvature drop is always subtracted from the Up offset, see
/// `lla2uen_with_options` for the alternatives.
/// * `reference` - the reference position, the origin of the UEN frame.
/// * `probe` - the position to transform.
///
/// returns the `LocalUenVector` of `probe` from `reference`.
///
/// # Examples
/// ```
/// use uen_distance::{Degrees, GeodeticPoint, Metres, lla2uen};
///
/// let reference = GeodeticPoint::new(Degrees(0.0), Degrees(0.0), Metres(0.0));
/// let probe = GeodeticPoint::new(Degrees(0.0), Degrees(0.0), Metres(100.0));
/// let uen = lla2uen(&reference, &probe);
/// assert_eq!(Metres(100.0), uen.up());
/// assert_eq!(Metres(0.0), uen.east());
/// assert_eq!(Metres(0.0), uen.north());
/// ```
#[must_use]
pub fn lla2uen(reference: &GeodeticPoint, probe: &GeodeticPoint) -> LocalUenVector {
    lla2uen_with_options(reference, probe, &UenOptions::default())
}
