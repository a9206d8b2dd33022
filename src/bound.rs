//! This module describes the Bound trait, which allows for a description of what values a lighting
//! parameter supports. For example, a light can't be placed lower than 50 cm or turned below 10%
//! output, and color temperature only comes in whole hundreds of Kelvin. Values outside of a domain
//! are never stored: they're clamped to the nearest representable value instead.

use num;

use consts;
use light::{Background, Field, LightParameters};

/// A closed range of whole numbers with a step, such as 2700 to 7500 in steps of 100. Every domain
/// in this crate spans a whole number of steps. A `step` of 0 is read as 1, so a hand-built domain
/// can never divide by zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Domain {
    /// The smallest allowed value.
    pub min: u32,
    /// The largest allowed value.
    pub max: u32,
    /// The spacing between allowed values, counted from `min`. Should be at least 1.
    pub step: u32,
}

impl Domain {
    /// Returns `true` if the value is inside the range and on a step.
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max && (value - self.min) % self.step() == 0
    }

    // a zero step would divide by zero, and means "every value" anyway
    fn step(&self) -> u32 {
        self.step.max(1)
    }

    /// Maps any number to the closest value in the domain: first clamping to the range, then
    /// rounding to the nearest step, with halves going up.
    /// # Example
    ///
    /// ```
    /// # use studiolight::bound::Domain;
    /// let kelvin = Domain { min: 2700, max: 7500, step: 100 };
    /// assert_eq!(kelvin.clamp(9000), 7500);
    /// assert_eq!(kelvin.clamp(5649), 5600);
    /// assert_eq!(kelvin.clamp(5650), 5700);
    /// ```
    pub fn clamp(&self, value: i64) -> u32 {
        let (min, max, step) = (i64::from(self.min), i64::from(self.max), i64::from(self.step()));
        let clamped = num::clamp(value, min, max);
        let snapped = min + (clamped - min + step / 2) / step * step;
        // snapping rounds up, which can only overshoot when the span isn't a multiple of step
        if snapped > max {
            (snapped - step) as u32
        } else {
            snapped as u32
        }
    }
}

/// Describes a parameter set whose numeric fields each live in a fixed [`Domain`]. Only numeric
/// fields have domains: fixtures, flags, and colors are checked by their own types.
pub trait Bound {
    /// Returns the domain of the given field, or `None` if the field isn't a numeric field of this
    /// parameter set.
    fn domain(field: Field) -> Option<Domain>;

    /// Returns every numeric field along with its current value.
    fn numeric_fields(&self) -> Vec<(Field, u32)>;

    /// Returns the first field whose value has left its domain, if any.
    fn out_of_bounds(&self) -> Option<(Field, u32)> {
        self.numeric_fields().into_iter().find(|&(field, value)| {
            Self::domain(field).map_or(false, |domain| !domain.contains(value))
        })
    }
}

// implement Bound for the parameter blocks here, to avoid cluttering the light module with ranges
impl Bound for LightParameters {
    fn domain(field: Field) -> Option<Domain> {
        match field {
            Field::Height => Some(consts::HEIGHT),
            Field::Angle => Some(consts::ANGLE),
            Field::Intensity => Some(consts::INTENSITY),
            Field::ColorTemperature => Some(consts::COLOR_TEMPERATURE),
            Field::Distance => Some(consts::LIGHT_DISTANCE),
            _ => None,
        }
    }

    fn numeric_fields(&self) -> Vec<(Field, u32)> {
        vec![
            (Field::Height, self.height),
            (Field::Angle, self.angle),
            (Field::Intensity, self.intensity),
            (Field::ColorTemperature, self.color_temperature),
            (Field::Distance, self.distance),
        ]
    }
}

impl Bound for Background {
    fn domain(field: Field) -> Option<Domain> {
        match field {
            Field::Distance => Some(consts::BACKGROUND_DISTANCE),
            _ => None,
        }
    }

    fn numeric_fields(&self) -> Vec<(Field, u32)> {
        vec![(Field::Distance, self.distance)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_range() {
        assert_eq!(consts::INTENSITY.clamp(500), 100);
        assert_eq!(consts::INTENSITY.clamp(-3), 10);
        assert_eq!(consts::INTENSITY.clamp(66), 66);
        assert_eq!(consts::ANGLE.clamp(0), 0);
        assert_eq!(consts::ANGLE.clamp(181), 180);
        assert_eq!(consts::BACKGROUND_DISTANCE.clamp(i64::max_value()), 200);
        assert_eq!(consts::HEIGHT.clamp(i64::min_value()), 50);
    }

    #[test]
    fn test_step_snapping() {
        assert_eq!(consts::COLOR_TEMPERATURE.clamp(5600), 5600);
        assert_eq!(consts::COLOR_TEMPERATURE.clamp(5649), 5600);
        assert_eq!(consts::COLOR_TEMPERATURE.clamp(5650), 5700);
        assert_eq!(consts::COLOR_TEMPERATURE.clamp(2000), 2700);
        assert_eq!(consts::COLOR_TEMPERATURE.clamp(7499), 7500);
        // a span that isn't a multiple of the step never snaps past the maximum
        let odd = Domain { min: 0, max: 15, step: 10 };
        assert_eq!(odd.clamp(15), 10);
    }

    #[test]
    fn test_zero_step() {
        let unstepped = Domain { min: 10, max: 20, step: 0 };
        assert_eq!(unstepped.clamp(15), 15);
        assert_eq!(unstepped.clamp(99), 20);
        assert!(unstepped.contains(13));
        assert!(!unstepped.contains(21));
    }

    #[test]
    fn test_contains() {
        assert!(consts::COLOR_TEMPERATURE.contains(6000));
        assert!(!consts::COLOR_TEMPERATURE.contains(6050));
        assert!(!consts::COLOR_TEMPERATURE.contains(2600));
        assert!(consts::HEIGHT.contains(300));
        assert!(!consts::HEIGHT.contains(301));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut params = LightParameters {
            height: 200,
            angle: 45,
            intensity: 75,
            color_temperature: 5600,
            distance: 150,
        };
        assert_eq!(params.out_of_bounds(), None);
        params.intensity = 500;
        assert_eq!(params.out_of_bounds(), Some((Field::Intensity, 500)));
        let background = Background {
            color: "#00b300".to_string(),
            distance: 10,
        };
        assert_eq!(background.out_of_bounds(), Some((Field::Distance, 10)));
        assert_eq!(<Background as Bound>::domain(Field::Height), None);
    }
}
