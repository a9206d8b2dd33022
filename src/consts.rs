//! This file collects the numeric limits of every lighting parameter, along with the defaults a new
//! setup starts from. They mirror the slider ranges of a physical studio: nothing here is
//! configurable at runtime, and the rest of the crate refers to these values instead of repeating
//! literals, so that the clamping in `update` and the checks in `validate` can never disagree.

use bound::Domain;

/// Height of a light above the floor, in centimeters.
pub const HEIGHT: Domain = Domain { min: 50, max: 300, step: 1 };
/// Angle of a light around the subject, in degrees.
pub const ANGLE: Domain = Domain { min: 0, max: 180, step: 1 };
/// Output of a light, in percent of full power.
pub const INTENSITY: Domain = Domain { min: 10, max: 100, step: 1 };
/// Color temperature of a light, in Kelvin. Only whole hundreds are valid.
pub const COLOR_TEMPERATURE: Domain = Domain { min: 2700, max: 7500, step: 100 };
/// Distance of a light from the subject, in centimeters.
pub const LIGHT_DISTANCE: Domain = Domain { min: 50, max: 250, step: 1 };
/// Distance of the backdrop behind the subject, in centimeters.
pub const BACKGROUND_DISTANCE: Domain = Domain { min: 20, max: 200, step: 1 };

// a key light above this intensity is described as strong, anything at or below as soft
pub const STRONG_KEY_THRESHOLD: u32 = 65;

// green channel thresholds for the backdrop shade: above BRIGHT is bright, above MEDIUM is medium
pub const BRIGHT_GREEN_THRESHOLD: u8 = 200;
pub const MEDIUM_GREEN_THRESHOLD: u8 = 150;

pub const DEFAULT_BACKGROUND_COLOR: &str = "#00b300";
pub const DEFAULT_BACKGROUND_DISTANCE: u32 = 80;
