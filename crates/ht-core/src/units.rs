//! uom quantities for the unit conversions at the scenario-file boundary.

use uom::si::f64::{Angle as UomAngle, Area as UomArea, Length as UomLength, Mass as UomMass};

use crate::constants::CELSIUS_TO_KELVIN;

pub type Angle = UomAngle;
pub type Area = UomArea;
pub type Length = UomLength;
pub type Mass = UomMass;

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn cm2(v: f64) -> Area {
    use uom::si::area::square_centimeter;
    Area::new::<square_centimeter>(v)
}

#[inline]
pub fn grams(v: f64) -> Mass {
    use uom::si::mass::gram;
    Mass::new::<gram>(v)
}

#[inline]
pub fn deg(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}

/// Celsius to Kelvin with the fixed +273.15 offset.
#[inline]
pub fn celsius_to_kelvin(c: f64) -> f64 {
    c + CELSIUS_TO_KELVIN
}

/// Kelvin to Celsius with the fixed 273.15 offset.
#[inline]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - CELSIUS_TO_KELVIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundary_units_convert_to_si() {
        assert!((cm2(100.0).value - 0.01).abs() < 1e-15);
        assert!((mm(10.0).value - 0.01).abs() < 1e-15);
        assert!((grams(100.0).value - 0.1).abs() < 1e-15);
        assert!((deg(180.0).value - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn celsius_offset_is_exact() {
        assert_eq!(celsius_to_kelvin(20.0), 20.0 + 273.15);
        assert_eq!(celsius_to_kelvin(0.0), 273.15);
        assert!((kelvin_to_celsius(celsius_to_kelvin(37.5)) - 37.5).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn celsius_kelvin_round_trip(c in -273.15f64..5000.0) {
            let back = kelvin_to_celsius(celsius_to_kelvin(c));
            prop_assert!((back - c).abs() <= 1e-9);
        }
    }
}
