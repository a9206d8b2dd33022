//! This file defines the conversion from hex color codes to RGB triples, and the coarse shade
//! buckets the prompt uses to describe a backdrop. Only the six-digit form `#rrggbb` is accepted:
//! shorthand like `#0b0` is rejected rather than expanded, because a color picker never produces
//! it and accepting it silently would hide malformed input.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use consts;
use error::LightingError;

lazy_static! {
    // optional hash, then three two-digit channels and nothing else
    static ref HEX_CODE: Regex =
        Regex::new(r"^#?([[:xdigit:]]{2})([[:xdigit:]]{2})([[:xdigit:]]{2})$").unwrap();
}

/// An sRGB color with 8-bit channels.
/// # Example
///
/// ```
/// # use studiolight::color::Rgb;
/// let green: Rgb = "#00b300".parse().unwrap();
/// assert_eq!((green.r, green.g, green.b), (0, 179, 0));
/// assert_eq!(green.to_string(), "#00B300");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

impl Rgb {
    /// Parses a hex code such as `"#00b300"` or `"FFAA00"`. See [`hex_to_rgb`].
    pub fn from_hex_code(hex: &str) -> Result<Rgb, LightingError> {
        hex_to_rgb(hex)
    }

    /// Gives the lowercase `#rrggbb` form, the way the color is stored in a setup.
    pub fn to_hex_code(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// The shade bucket of this color's green channel.
    pub fn green_shade(&self) -> Shade {
        shade_of(self.g)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from(rgb: (u8, u8, u8)) -> Rgb {
        Rgb {
            r: rgb.0,
            g: rgb.1,
            b: rgb.2,
        }
    }
}

impl FromStr for Rgb {
    type Err = LightingError;

    fn from_str(s: &str) -> Result<Rgb, LightingError> {
        hex_to_rgb(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Converts a hex color code to RGB. The code is an optional `#` followed by exactly six hex
/// digits in either case. Anything else gives `LightingError::InvalidColorFormat` holding the
/// input.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, LightingError> {
    let caps = match HEX_CODE.captures(hex) {
        Some(caps) => caps,
        None => return Err(LightingError::InvalidColorFormat(hex.to_string())),
    };
    let mut channels = [0u8; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        // the pattern only admits two hex digits per group, so this can't overflow
        *channel = u8::from_str_radix(&caps[i + 1], 16)
            .map_err(|_| LightingError::InvalidColorFormat(hex.to_string()))?;
    }
    Ok(Rgb::from((channels[0], channels[1], channels[2])))
}

/// A coarse description of how bright a channel is, used to name a backdrop.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shade {
    /// Above 200.
    Bright,
    /// Above 150, up to and including 200.
    Medium,
    /// 150 or below.
    Dark,
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Shade::Bright => "bright",
            Shade::Medium => "medium",
            Shade::Dark => "dark",
        };
        f.write_str(name)
    }
}

/// Buckets a channel value: `g > 200` is bright, `150 < g <= 200` is medium, and anything else is
/// dark.
pub fn shade_of(g: u8) -> Shade {
    if g > consts::BRIGHT_GREEN_THRESHOLD {
        Shade::Bright
    } else if g > consts::MEDIUM_GREEN_THRESHOLD {
        Shade::Medium
    } else {
        Shade::Dark
    }
}
