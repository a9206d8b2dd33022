//! This module describes the pieces of a studio setup: the three lights, the backdrop, and the
//! vocabulary used to address their fields from the outside. Every light shares the same block of
//! numeric parameters ([`LightParameters`]); what differs between roles is whether the light can be
//! switched off and which fixtures it may use. Fixture domains are encoded as separate enums per
//! role, so a rim light can't be handed a fixture and a fill light can't become a beauty dish.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use consts;
use error::LightingError;

/// One of the four addressable parts of a setup.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Light {
    /// The main light, which sets exposure and shadow direction. Always on.
    Key,
    /// The secondary light that softens the key light's shadows.
    Fill,
    /// The light behind the subject that separates it from the backdrop.
    Rim,
    /// The backdrop. Not a light, but configured the same way.
    Background,
}

/// A named field of a light or of the backdrop. Not every light has every field: see
/// [`LightingConfig::update`](../config/struct.LightingConfig.html#method.update).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// The modifier in front of the light: softbox, umbrella, and so on.
    Fixture,
    /// Height above the floor, in centimeters.
    Height,
    /// Angle around the subject, in degrees.
    Angle,
    /// Output in percent.
    Intensity,
    /// Color temperature in Kelvin.
    ColorTemperature,
    /// Distance from the subject (or, for the backdrop, behind it), in centimeters.
    Distance,
    /// Whether a switchable light is on.
    Enabled,
    /// The backdrop color as a hex code.
    Color,
}

lazy_static! {
    static ref LIGHT_NAMES: HashMap<&'static str, Light> = hashmap! {
        "key" => Light::Key,
        "main" => Light::Key,
        "mainlight" => Light::Key,
        "keylight" => Light::Key,
        "fill" => Light::Fill,
        "filllight" => Light::Fill,
        "rim" => Light::Rim,
        "rimlight" => Light::Rim,
        "background" => Light::Background,
        "backdrop" => Light::Background,
    };

    static ref FIELD_NAMES: HashMap<&'static str, Field> = hashmap! {
        "type" => Field::Fixture,
        "fixture" => Field::Fixture,
        "fixturetype" => Field::Fixture,
        "height" => Field::Height,
        "angle" => Field::Angle,
        "intensity" => Field::Intensity,
        "colortemperature" => Field::ColorTemperature,
        "temperature" => Field::ColorTemperature,
        "distance" => Field::Distance,
        "enabled" => Field::Enabled,
        "color" => Field::Color,
    };
}

// camelCase and snake_case spellings both reduce to the same lookup key
fn lookup_key(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Light {
    type Err = LightingError;

    fn from_str(s: &str) -> Result<Light, LightingError> {
        LIGHT_NAMES
            .get(lookup_key(s).as_str())
            .cloned()
            .ok_or_else(|| LightingError::InvalidParameter {
                light: None,
                field: None,
                reason: format!("unknown light {:?}", s),
            })
    }
}

impl FromStr for Field {
    type Err = LightingError;

    fn from_str(s: &str) -> Result<Field, LightingError> {
        FIELD_NAMES
            .get(lookup_key(s).as_str())
            .cloned()
            .ok_or_else(|| LightingError::InvalidParameter {
                light: None,
                field: None,
                reason: format!("unknown field {:?}", s),
            })
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Light::Key => "key",
            Light::Fill => "fill",
            Light::Rim => "rim",
            Light::Background => "background",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Field::Fixture => "fixture",
            Field::Height => "height",
            Field::Angle => "angle",
            Field::Intensity => "intensity",
            Field::ColorTemperature => "colorTemperature",
            Field::Distance => "distance",
            Field::Enabled => "enabled",
            Field::Color => "color",
        };
        f.write_str(name)
    }
}

/// A value handed to `update`. Hosts usually produce these from slider positions (numbers),
/// select boxes and color pickers (text), and checkboxes (flags); the `From` impls cover those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A whole number. Out-of-range numbers are clamped, not rejected.
    Number(i64),
    /// A fixture name or a hex color.
    Text(String),
    /// An on/off flag.
    Flag(bool),
}

impl ParamValue {
    /// A short name for the kind of value, used in error messages.
    pub fn kind(&self) -> &'static str {
        match *self {
            ParamValue::Number(_) => "number",
            ParamValue::Text(_) => "text",
            ParamValue::Flag(_) => "flag",
        }
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> ParamValue {
        ParamValue::Number(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> ParamValue {
        ParamValue::Number(i64::from(n))
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> ParamValue {
        ParamValue::Number(i64::from(n))
    }
}

impl<'a> From<&'a str> for ParamValue {
    fn from(s: &'a str) -> ParamValue {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> ParamValue {
        ParamValue::Text(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> ParamValue {
        ParamValue::Flag(b)
    }
}

/// A light modifier, as named in prompts and as labelled in a picker.
pub trait Fixture: Copy + Sized + 'static {
    /// Every fixture of this role, in picker order.
    fn all() -> &'static [Self];
    /// The lowercase name used in prompts, e.g. `"beauty dish"`.
    fn name(&self) -> &'static str;
    /// The title-case label a picker shows, e.g. `"Beauty Dish"`.
    fn label(&self) -> &'static str;

    /// Looks up a fixture by its name or label, ignoring case. Returns `None` for anything outside
    /// this role's domain.
    fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .iter()
            .find(|fix| fix.name().eq_ignore_ascii_case(name) || fix.label().eq_ignore_ascii_case(name))
            .cloned()
    }
}

/// The fixtures a key light can use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyFixture {
    /// A diffused box, the softest of the key modifiers.
    #[serde(rename = "softbox")]
    Softbox,
    /// A shoot-through or reflective umbrella.
    #[serde(rename = "umbrella")]
    Umbrella,
    /// A shallow dish with a center deflector, giving crisp but rounded light.
    #[serde(rename = "beauty dish")]
    BeautyDish,
    /// No modifier at all: hard light and sharp shadows.
    #[serde(rename = "bare bulb")]
    BareBulb,
}

static KEY_FIXTURES: [KeyFixture; 4] = [
    KeyFixture::Softbox,
    KeyFixture::Umbrella,
    KeyFixture::BeautyDish,
    KeyFixture::BareBulb,
];

impl Fixture for KeyFixture {
    fn all() -> &'static [KeyFixture] {
        &KEY_FIXTURES
    }

    fn name(&self) -> &'static str {
        match *self {
            KeyFixture::Softbox => "softbox",
            KeyFixture::Umbrella => "umbrella",
            KeyFixture::BeautyDish => "beauty dish",
            KeyFixture::BareBulb => "bare bulb",
        }
    }

    fn label(&self) -> &'static str {
        match *self {
            KeyFixture::Softbox => "Softbox",
            KeyFixture::Umbrella => "Umbrella",
            KeyFixture::BeautyDish => "Beauty Dish",
            KeyFixture::BareBulb => "Bare Bulb",
        }
    }
}

/// The fixtures a fill light can use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillFixture {
    /// A diffused box.
    Softbox,
    /// A shoot-through or reflective umbrella.
    Umbrella,
    /// A passive bounce card or disc.
    Reflector,
    /// An LED panel.
    Panel,
}

static FILL_FIXTURES: [FillFixture; 4] = [
    FillFixture::Softbox,
    FillFixture::Umbrella,
    FillFixture::Reflector,
    FillFixture::Panel,
];

impl Fixture for FillFixture {
    fn all() -> &'static [FillFixture] {
        &FILL_FIXTURES
    }

    fn name(&self) -> &'static str {
        match *self {
            FillFixture::Softbox => "softbox",
            FillFixture::Umbrella => "umbrella",
            FillFixture::Reflector => "reflector",
            FillFixture::Panel => "panel",
        }
    }

    fn label(&self) -> &'static str {
        match *self {
            FillFixture::Softbox => "Softbox",
            FillFixture::Umbrella => "Umbrella",
            FillFixture::Reflector => "Reflector",
            FillFixture::Panel => "LED Panel",
        }
    }
}

impl fmt::Display for KeyFixture {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for FillFixture {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The numeric block every light carries. Each value must stay inside its domain in
/// [`Bound`](../bound/trait.Bound.html); `LightingConfig::update` clamps to guarantee this.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightParameters {
    /// Centimeters above the floor, 50 to 300.
    pub height: u32,
    /// Degrees around the subject, 0 to 180.
    pub angle: u32,
    /// Percent of full output, 10 to 100.
    pub intensity: u32,
    /// Kelvin, 2700 to 7500 in steps of 100.
    pub color_temperature: u32,
    /// Centimeters from the subject, 50 to 250.
    pub distance: u32,
}

impl LightParameters {
    pub(crate) fn slot(&mut self, field: Field) -> Option<&mut u32> {
        match field {
            Field::Height => Some(&mut self.height),
            Field::Angle => Some(&mut self.angle),
            Field::Intensity => Some(&mut self.intensity),
            Field::ColorTemperature => Some(&mut self.color_temperature),
            Field::Distance => Some(&mut self.distance),
            _ => None,
        }
    }
}

/// The key light. It has no on/off switch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyLight {
    /// The modifier in use.
    pub fixture: KeyFixture,
    /// Placement and output.
    #[serde(flatten)]
    pub params: LightParameters,
}

/// The fill light.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillLight {
    /// Whether the light is on. A disabled fill keeps its parameters.
    pub enabled: bool,
    /// The modifier in use.
    pub fixture: FillFixture,
    /// Placement and output.
    #[serde(flatten)]
    pub params: LightParameters,
}

/// The rim light. It never has a modifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RimLight {
    /// Whether the light is on. A disabled rim keeps its parameters.
    pub enabled: bool,
    /// Placement and output.
    #[serde(flatten)]
    pub params: LightParameters,
}

/// The backdrop behind the subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    /// Hex color code of the form `#rrggbb`. `LightingConfig::update` only stores well-formed
    /// codes; anything assigned directly is checked again when a prompt is generated.
    pub color: String,
    /// Centimeters behind the subject, 20 to 200.
    pub distance: u32,
}

impl Default for KeyLight {
    fn default() -> KeyLight {
        KeyLight {
            fixture: KeyFixture::Softbox,
            params: LightParameters {
                height: 200,
                angle: 45,
                intensity: 75,
                color_temperature: 5600,
                distance: 150,
            },
        }
    }
}

impl Default for FillLight {
    fn default() -> FillLight {
        FillLight {
            enabled: true,
            fixture: FillFixture::Umbrella,
            params: LightParameters {
                height: 150,
                angle: 30,
                intensity: 40,
                color_temperature: 5600,
                distance: 180,
            },
        }
    }
}

impl Default for RimLight {
    fn default() -> RimLight {
        RimLight {
            enabled: true,
            params: LightParameters {
                height: 180,
                angle: 135,
                intensity: 60,
                color_temperature: 6000,
                distance: 120,
            },
        }
    }
}

impl Default for Background {
    fn default() -> Background {
        Background {
            color: consts::DEFAULT_BACKGROUND_COLOR.to_string(),
            distance: consts::DEFAULT_BACKGROUND_DISTANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_name_parsing() {
        assert_eq!("key".parse::<Light>().unwrap(), Light::Key);
        assert_eq!("mainLight".parse::<Light>().unwrap(), Light::Key);
        assert_eq!("fillLight".parse::<Light>().unwrap(), Light::Fill);
        assert_eq!("rim_light".parse::<Light>().unwrap(), Light::Rim);
        assert_eq!("Background".parse::<Light>().unwrap(), Light::Background);
        assert!("spot".parse::<Light>().is_err());

        assert_eq!("colorTemperature".parse::<Field>().unwrap(), Field::ColorTemperature);
        assert_eq!("color_temperature".parse::<Field>().unwrap(), Field::ColorTemperature);
        assert_eq!("type".parse::<Field>().unwrap(), Field::Fixture);
        assert_eq!("fixtureType".parse::<Field>().unwrap(), Field::Fixture);
        assert_eq!("color".parse::<Field>().unwrap(), Field::Color);
        match "brightness".parse::<Field>() {
            Err(LightingError::InvalidParameter { light: None, field: None, .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_fixture_domains() {
        assert_eq!(KeyFixture::from_name("beauty dish"), Some(KeyFixture::BeautyDish));
        assert_eq!(KeyFixture::from_name("Bare Bulb"), Some(KeyFixture::BareBulb));
        assert_eq!(KeyFixture::from_name("panel"), None);
        assert_eq!(FillFixture::from_name("LED Panel"), Some(FillFixture::Panel));
        assert_eq!(FillFixture::from_name("reflector"), Some(FillFixture::Reflector));
        assert_eq!(FillFixture::from_name("beauty dish"), None);
        let labels: Vec<&str> = KeyFixture::all().iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["Softbox", "Umbrella", "Beauty Dish", "Bare Bulb"]);
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(ParamValue::from(75), ParamValue::Number(75));
        assert_eq!(ParamValue::from(5600u32), ParamValue::Number(5600));
        assert_eq!(ParamValue::from("softbox"), ParamValue::Text("softbox".to_string()));
        assert_eq!(ParamValue::from(false), ParamValue::Flag(false));
        assert_eq!(ParamValue::from(true).kind(), "flag");
    }
}
