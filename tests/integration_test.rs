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


// extern crate we're testing, same as any other code would do.
extern crate uen_distance;

use angle_sc::is_within_tolerance;
use uen_distance::ellipsoid::wgs84;
use uen_distance::uen::calculate_curvature_drop;
use uen_distance::*;

fn point(lat: f64, lon: f64, alt: f64) -> GeodeticPoint {
    GeodeticPoint::new(Degrees(lat), Degrees(lon), Metres(alt))
}

/// A spread of positions around the globe, including the poles and the
/// anti-meridian.
fn positions() -> Vec<GeodeticPoint> {
    let mut positions = Vec::new();
    for lat in (-90..=90).step_by(30) {
        for lon in (-180..=180).step_by(45) {
            for alt in [-400.0, 0.0, 1_000.0, 12_000.0] {
                positions.push(point(f64::from(lat), f64::from(lon), alt));
            }
        }
    }
    positions
}

#[test]
fn test_zero_distance() {
    for p in positions() {
        let result = calculate_lla2uen_distance(&p, &p);
        assert_eq!(Metres(0.0), result.ground_distance());
        assert_eq!(Metres(0.0), result.slant_distance());
    }
}

#[test]
fn test_distances_are_ordered() {
    let reference = point(52.0, 4.0, 10.0);
    for lat in -5..=5 {
        for lon in -5..=5 {
            for alt in [-100.0, 0.0, 10.0, 5_000.0] {
                let probe = point(
                    52.0 + f64::from(lat) * 0.2,
                    4.0 + f64::from(lon) * 0.3,
                    alt,
                );
                let result = calculate_lla2uen_distance(&reference, &probe);
                assert!(0.0 <= result.ground_distance().0);
                assert!(0.0 <= result.slant_distance().0);
                assert!(result.ground_distance().0 <= result.slant_distance().0);
            }
        }
    }
}

#[test]
fn test_east_scales_with_longitude() {
    let reference = point(37.0, -122.0, 0.0);
    for i in 1..10 {
        let delta = f64::from(i) * 0.001;
        let probe = point(37.0, -122.0 + delta, 0.0);
        let uen = lla2uen(&reference, &probe);

        let radius = wgs84::calculate_earth_radius(Degrees(37.0));
        let expected = delta.to_radians() * libm::cos(37.0_f64.to_radians()) * radius.0;
        assert!(is_within_tolerance(expected, uen.east().0, 1e-6));
        assert_eq!(Metres(0.0), uen.north());
    }
}

#[test]
fn test_one_degree_of_longitude_at_the_equator() {
    let reference = point(0.0, 0.0, 0.0);
    let probe = point(0.0, 1.0, 0.0);
    let result = calculate_lla2uen_distance(&reference, &probe);

    let expected = 111_319.9;
    assert!(is_within_tolerance(expected, result.ground_distance().0, 0.01 * expected));
    assert!(is_within_tolerance(
        result.ground_distance().0,
        result.slant_distance().0,
        0.01 * expected
    ));
}

#[test]
fn test_altitude_only() {
    let reference = point(-33.9, 151.2, 50.0);
    let probe = point(-33.9, 151.2, 150.0);
    let result = calculate_lla2uen_distance(&reference, &probe);
    assert_eq!(Metres(0.0), result.ground_distance());
    assert!(is_within_tolerance(100.0, result.slant_distance().0, 1e-9));

    // the same altitudes in feet
    let reference =
        GeodeticPoint::from_altitude_unit(Degrees(-33.9), Degrees(151.2), 164.041_994_75, "feet")
            .unwrap();
    let probe =
        GeodeticPoint::from_altitude_unit(Degrees(-33.9), Degrees(151.2), 492.125_984_25, "Feet")
            .unwrap();
    let result = calculate_lla2uen_distance(&reference, &probe);
    assert!(is_within_tolerance(100.0, result.slant_distance().0, 1e-6));
}

#[test]
fn test_curvature_correction() {
    let reference = point(40.0, -100.0, 0.0);
    for km in [100.0, 200.0, 400.0, 800.0] {
        // approximately km kilometres North of the reference
        let probe = point(40.0 + km / 111.0, -100.0, 0.0);
        let uen = lla2uen(&reference, &probe);

        let radius = wgs84::calculate_earth_radius(probe.lat());
        let drop = calculate_curvature_drop(Metres(libm::hypot(uen.east().0, uen.north().0)), radius);
        assert!(is_within_tolerance(-drop.0, uen.up().0, 1e-9));

        // d^2 / 2R
        let approx = 0.5 * uen.north().0 * uen.north().0 / radius.0;
        assert!(is_within_tolerance(approx, drop.0, 0.01 * approx));

        // the drop is meaningful at these distances
        assert!(uen.up().0 < -700.0);
    }
}

#[test]
fn test_distance_between_is_symmetric() {
    let reference = point(48.0, 11.0, 500.0);
    let a = point(48.1, 11.2, 600.0);
    let b = point(47.9, 10.9, 800.0);
    let ab = calculate_distance_between(&reference, &a, &b);
    let ba = calculate_distance_between(&reference, &b, &a);
    assert!(is_within_tolerance(ab.ground_distance().0, ba.ground_distance().0, 1e-9));
    assert!(is_within_tolerance(ab.slant_distance().0, ba.slant_distance().0, 1e-9));
}

#[test]
fn test_non_finite_input_propagates() {
    let reference = point(0.0, 0.0, 0.0);

    let result = calculate_lla2uen_distance(&reference, &point(0.0, f64::NAN, 0.0));
    assert!(result.ground_distance().0.is_nan());
    assert!(result.slant_distance().0.is_nan());

    let result = calculate_lla2uen_distance(&point(f64::NAN, 0.0, 0.0), &point(1.0, 1.0, 0.0));
    assert!(result.ground_distance().0.is_nan());

    let result = calculate_lla2uen_distance(&reference, &point(0.0, 0.0, f64::NEG_INFINITY));
    assert_eq!(Metres(f64::INFINITY), result.slant_distance());
}

#[test]
fn test_antipodal_positions_do_not_panic() {
    let reference = point(10.0, 20.0, 0.0);
    let probe = point(-10.0, -160.0, 0.0);
    let result = calculate_lla2uen_distance(&reference, &probe);
    assert!(0.0 <= result.ground_distance().0);
    assert!(!result.slant_distance().0.is_nan());
}
