//! This module computes the layout of a top-down studio preview: where each light's marker sits,
//! how opaque and blurred it is, and what the backdrop looks like. It doesn't draw anything. A host
//! positions its own widgets with these numbers, all of which are percentages of the preview area
//! except `blur`, which is in pixels.
//!
//! The layout is schematic rather than physical. Height maps to the vertical position (higher
//! lights sit nearer the top), and the horizontal offset from center grows with distance and
//! shrinks as the light swings around toward the back of the set. The key and rim lights are drawn
//! on the right of the subject, the fill light on the left.

use color::{hex_to_rgb, Rgb};
use config::LightingConfig;
use error::LightingError;
use light::{FillFixture, KeyFixture, LightParameters};

// blur radii in pixels: diffused fixtures read softer than everything else
const DIFFUSED_BLUR: u32 = 4;
const HARD_BLUR: u32 = 2;

/// A light's marker in the preview.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Distance of the marker from the top of the preview, in percent. Can be negative for very
    /// high lights, which are then drawn clipped at the top edge.
    pub top: f64,
    /// Distance of the marker from the left of the preview, in percent.
    pub left: f64,
    /// Marker opacity between 0.1 and 1, from the light's intensity.
    pub opacity: f64,
    /// Blur radius in pixels.
    pub blur: u32,
}

impl Marker {
    // mirrored markers sit on the left of the subject
    fn place(params: &LightParameters, mirrored: bool, blur: u32) -> Marker {
        let reach = params.angle_radians().cos() * f64::from(params.distance) / 5.0;
        let left = if mirrored { 50.0 - reach } else { 50.0 + reach };
        Marker {
            top: 100.0 - f64::from(params.height) / 3.0,
            left,
            opacity: f64::from(params.intensity) / 100.0,
            blur,
        }
    }
}

impl LightParameters {
    /// The light's angle converted to radians.
    pub fn angle_radians(&self) -> f64 {
        f64::from(self.angle).to_radians()
    }
}

/// The backdrop as the preview fills it in.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backdrop {
    /// The fill color.
    pub color: Rgb,
    /// How far behind the subject it sits, in centimeters. Hosts with a 3D transform can use this
    /// as a depth offset.
    pub depth: u32,
}

/// Everything needed to draw a preview of a setup. Disabled lights have no marker.
/// # Example
///
/// ```
/// # use studiolight::config::LightingConfig;
/// # use studiolight::light::Light;
/// # use studiolight::preview::Preview;
/// let mut config = LightingConfig::default();
/// config.toggle(Light::Fill).unwrap();
/// let preview = Preview::of(&config).unwrap();
/// assert!(preview.fill.is_none());
/// assert_eq!(preview.key.blur, 4);
/// assert_eq!(preview.direction, 45.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    /// The key light, always shown.
    pub key: Marker,
    /// The fill light, if on.
    pub fill: Option<Marker>,
    /// The rim light, if on.
    pub rim: Option<Marker>,
    /// The backdrop.
    pub backdrop: Backdrop,
    /// Rotation in degrees of the arrow that shows which way the key light points.
    pub direction: f64,
}

impl Preview {
    /// Lays out a preview of `config`. Fails only if the backdrop color is malformed.
    pub fn of(config: &LightingConfig) -> Result<Preview, LightingError> {
        let key_blur = match config.key.fixture {
            KeyFixture::Softbox => DIFFUSED_BLUR,
            _ => HARD_BLUR,
        };
        let fill_blur = match config.fill.fixture {
            FillFixture::Softbox => DIFFUSED_BLUR,
            _ => HARD_BLUR,
        };
        let fill = if config.fill.enabled {
            Some(Marker::place(&config.fill.params, true, fill_blur))
        } else {
            None
        };
        let rim = if config.rim.enabled {
            Some(Marker::place(&config.rim.params, false, HARD_BLUR))
        } else {
            None
        };
        Ok(Preview {
            key: Marker::place(&config.key.params, false, key_blur),
            fill,
            rim,
            backdrop: Backdrop {
                color: hex_to_rgb(&config.background.color)?,
                depth: config.background.distance,
            },
            direction: f64::from(config.key.params.angle),
        })
    }
}
