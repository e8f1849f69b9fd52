//! Spot geometry of sunlight reflected by a flat mirror.
//!
//! The sun is not a point source: each point of a flat mirror reflects a cone
//! of half-angle θ_sun, so the reflected spot grows linearly with distance and
//! can never be smaller than the mirror itself.

use ht_core::SUN_HALF_ANGLE_RAD;

/// Reflected spot produced by a square flat mirror at a given distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotGeometry {
    /// Spot side length (m)
    pub side_length: f64,
    /// Spot area (m²)
    pub area: f64,
    /// Mirror area / spot area, always ≤ 1
    pub concentration_factor: f64,
}

/// Spot geometry for a square mirror of side `mirror_size` (m) at `distance` (m)
/// from the target: `s_spot = s + 2·L·tan(θ_sun)`.
pub fn spot_geometry(mirror_size: f64, distance: f64) -> SpotGeometry {
    let side_length = mirror_size + 2.0 * distance * SUN_HALF_ANGLE_RAD.tan();
    let area = side_length * side_length;
    let mirror_area = mirror_size * mirror_size;

    // A zero-area spot only happens for a zero-size mirror at zero distance.
    let concentration_factor = if area > 0.0 { mirror_area / area } else { 0.0 };

    SpotGeometry {
        side_length,
        area,
        concentration_factor,
    }
}

/// Area of the object that actually receives light.
///
/// When the reflected spot is smaller than the object only the spot footprint
/// is lit; otherwise the whole face is.
pub fn effective_illuminated_area(object_area: f64, spot: Option<&SpotGeometry>) -> f64 {
    match spot {
        Some(spot) => object_area.min(spot.area),
        None => object_area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_spot_is_the_mirror() {
        let spot = spot_geometry(0.1, 0.0);
        assert!((spot.side_length - 0.1).abs() < 1e-12);
        assert!((spot.area - 0.01).abs() < 1e-12);
        assert_eq!(spot.concentration_factor, 1.0);
    }

    #[test]
    fn small_mirror_at_two_meters() {
        let spot = spot_geometry(0.05, 2.0);
        assert!((spot.side_length * 1000.0 - 68.6).abs() < 0.5);
        assert!((spot.concentration_factor - 0.531).abs() < 0.005);
    }

    #[test]
    fn mirror_at_increasing_distances() {
        let cases = [(1.0, 109.3, 0.838), (5.0, 146.5, 0.466), (10.0, 193.0, 0.269)];
        for (distance, side_mm, concentration) in cases {
            let spot = spot_geometry(0.1, distance);
            assert!(
                (spot.side_length * 1000.0 - side_mm).abs() < 0.5,
                "side at {distance} m: {}",
                spot.side_length
            );
            assert!(
                (spot.concentration_factor - concentration).abs() < 0.005,
                "concentration at {distance} m: {}",
                spot.concentration_factor
            );
        }
    }

    #[test]
    fn concentration_falls_with_distance() {
        let near = spot_geometry(0.1, 1.0);
        let far = spot_geometry(0.1, 10.0);
        assert!(far.concentration_factor < near.concentration_factor);
    }

    #[test]
    fn degenerate_mirror_delivers_nothing() {
        let spot = spot_geometry(0.0, 0.0);
        assert_eq!(spot.area, 0.0);
        assert_eq!(spot.concentration_factor, 0.0);
    }

    #[test]
    fn illuminated_area_without_spot_is_object_area() {
        assert_eq!(effective_illuminated_area(0.01, None), 0.01);
    }

    #[test]
    fn illuminated_area_is_smaller_of_object_and_spot() {
        let spot = SpotGeometry {
            side_length: 0.1,
            area: 0.01,
            concentration_factor: 0.5,
        };
        assert_eq!(effective_illuminated_area(0.005, Some(&spot)), 0.005);
        assert_eq!(effective_illuminated_area(0.02, Some(&spot)), 0.01);
        assert_eq!(effective_illuminated_area(0.01, Some(&spot)), 0.01);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn concentration_is_bounded(mirror in 0.001_f64..2.0, distance in 0.0_f64..100.0) {
            let spot = spot_geometry(mirror, distance);
            prop_assert!(spot.concentration_factor > 0.0);
            prop_assert!(spot.concentration_factor <= 1.0);
            prop_assert!(spot.area >= mirror * mirror);
        }

        #[test]
        fn illuminated_area_never_exceeds_object(
            object in 0.0001_f64..2.0,
            mirror in 0.001_f64..1.0,
            distance in 0.0_f64..50.0,
        ) {
            let spot = spot_geometry(mirror, distance);
            let lit = effective_illuminated_area(object, Some(&spot));
            prop_assert!(lit <= object);
            prop_assert!(lit <= spot.area);
        }
    }
}
