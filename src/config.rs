//! This module holds [`LightingConfig`], the single mutable aggregate of a studio setup. A host
//! changes it one field at a time with [`update`](LightingConfig::update) and switches the fill
//! and rim lights with [`toggle`](LightingConfig::toggle). Both validate before they write, so a
//! failed call leaves the setup exactly as it was.
//!
//! Numeric input is never rejected for being out of range: it is clamped to the field's domain
//! (and snapped to its step), the same thing a slider would have done. Input that can't be
//! brought into a domain, like an unknown fixture or a malformed color, is rejected instead.

use bound::Bound;
use color::hex_to_rgb;
use error::LightingError;
use light::{
    Background, FillFixture, FillLight, Field, Fixture, KeyFixture, KeyLight, Light,
    LightParameters, ParamValue, RimLight,
};

/// A full studio setup: one key light, one fill light, one rim light, and a backdrop.
/// # Example
///
/// ```
/// # use studiolight::config::LightingConfig;
/// # use studiolight::light::Light;
/// let mut config = LightingConfig::default();
/// config.update(Light::Key, "intensity".parse().unwrap(), 500).unwrap();
/// assert_eq!(config.key.params.intensity, 100);
/// config.toggle(Light::Rim).unwrap();
/// assert!(!config.rim.enabled);
/// assert!(config.toggle(Light::Key).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightingConfig {
    /// The main light.
    pub key: KeyLight,
    /// The fill light.
    pub fill: FillLight,
    /// The rim light.
    pub rim: RimLight,
    /// The backdrop.
    pub background: Background,
}

impl LightingConfig {
    /// Creates the default setup: a strong softbox key, an umbrella fill, a cool rim, and a
    /// green backdrop.
    pub fn new() -> LightingConfig {
        LightingConfig::default()
    }

    /// Restores every light and the backdrop to their defaults.
    pub fn reset(&mut self) {
        *self = LightingConfig::default();
        trace!("lighting config reset to defaults");
    }

    /// Replaces a single field of a single light. Numbers are clamped to the field's domain.
    /// Everything else must already be valid:
    ///
    /// - `Fixture` takes the name or label of a fixture from the light's own role; the rim light
    ///   and the backdrop have no fixture.
    /// - `Enabled` takes a flag, and only exists on the fill and rim lights.
    /// - `Color` takes a `#rrggbb` code, and only exists on the backdrop. It is stored lowercase.
    ///
    /// Violations give `InvalidParameter`, except a malformed color, which gives
    /// `InvalidColorFormat`. Nothing is written on error.
    pub fn update<V: Into<ParamValue>>(
        &mut self,
        light: Light,
        field: Field,
        value: V,
    ) -> Result<(), LightingError> {
        let value = value.into();
        match (light, field) {
            (Light::Key, Field::Fixture) => {
                self.key.fixture = fixture_value::<KeyFixture>(light, field, &value)?;
            }
            (Light::Fill, Field::Fixture) => {
                self.fill.fixture = fixture_value::<FillFixture>(light, field, &value)?;
            }
            (Light::Fill, Field::Enabled) => self.fill.enabled = flag_value(light, field, &value)?,
            (Light::Rim, Field::Enabled) => self.rim.enabled = flag_value(light, field, &value)?,
            (Light::Background, Field::Color) => {
                let text = text_value(light, field, &value)?;
                self.background.color = hex_to_rgb(text)?.to_hex_code();
            }
            (Light::Background, Field::Distance) => {
                let stored = bounded_value::<Background>(light, field, &value)?;
                self.background.distance = stored;
            }
            (Light::Key, _) | (Light::Fill, _) | (Light::Rim, _) => {
                let stored = bounded_value::<LightParameters>(light, field, &value)?;
                // bounded_value only succeeds for the numeric fields, which all have a slot
                if let Some(slot) = self.params_mut(light).and_then(|p| p.slot(field)) {
                    *slot = stored;
                }
            }
            (Light::Background, _) => {
                return Err(LightingError::invalid(light, field, "the background has no such field"));
            }
        }
        trace!(light = %light, field = %field, "parameter updated");
        Ok(())
    }

    /// The same as [`update`](LightingConfig::update), but with the light and field given by
    /// name, e.g. `("mainLight", "colorTemperature")` or `("rim", "color_temperature")`. On the
    /// three lights `"color"` names the color temperature; only the backdrop has a hex color.
    pub fn update_named<V: Into<ParamValue>>(
        &mut self,
        light: &str,
        field: &str,
        value: V,
    ) -> Result<(), LightingError> {
        let light: Light = light.parse()?;
        let field: Field = field.parse().map_err(|_| LightingError::InvalidParameter {
            light: Some(light),
            field: None,
            reason: format!("unknown field {:?}", field),
        })?;
        let field = if field == Field::Color && light != Light::Background {
            Field::ColorTemperature
        } else {
            field
        };
        self.update(light, field, value)
    }

    /// Switches the fill or rim light on or off. The key light is always on and the backdrop
    /// can't be switched, so both give `UnsupportedOperation`.
    pub fn toggle(&mut self, light: Light) -> Result<(), LightingError> {
        let enabled = match light {
            Light::Fill => &mut self.fill.enabled,
            Light::Rim => &mut self.rim.enabled,
            Light::Key | Light::Background => {
                return Err(LightingError::UnsupportedOperation {
                    light,
                    operation: "toggle",
                });
            }
        };
        *enabled = !*enabled;
        trace!(light = %light, enabled = *enabled, "light toggled");
        Ok(())
    }

    /// Checks every invariant of the setup: each number inside its domain and a well-formed
    /// backdrop color. Setups built through `update` always pass; this is for ones assembled by
    /// hand or deserialized from a snapshot.
    pub fn validate(&self) -> Result<(), LightingError> {
        for &light in &[Light::Key, Light::Fill, Light::Rim] {
            if let Some((field, value)) = self.params(light).and_then(|p| p.out_of_bounds()) {
                return Err(out_of_domain::<LightParameters>(light, field, value));
            }
        }
        if let Some((field, value)) = self.background.out_of_bounds() {
            return Err(out_of_domain::<Background>(Light::Background, field, value));
        }
        hex_to_rgb(&self.background.color)?;
        Ok(())
    }

    /// The numeric block of a light, or `None` for the backdrop.
    pub fn params(&self, light: Light) -> Option<&LightParameters> {
        match light {
            Light::Key => Some(&self.key.params),
            Light::Fill => Some(&self.fill.params),
            Light::Rim => Some(&self.rim.params),
            Light::Background => None,
        }
    }

    fn params_mut(&mut self, light: Light) -> Option<&mut LightParameters> {
        match light {
            Light::Key => Some(&mut self.key.params),
            Light::Fill => Some(&mut self.fill.params),
            Light::Rim => Some(&mut self.rim.params),
            Light::Background => None,
        }
    }
}

fn out_of_domain<B: Bound>(light: Light, field: Field, value: u32) -> LightingError {
    let reason = match B::domain(field) {
        Some(d) => format!("{} is outside {}..={} (step {})", value, d.min, d.max, d.step),
        None => format!("{} is not a numeric field", field),
    };
    LightingError::invalid(light, field, reason)
}

// Clamps a number into the field's domain. Fails if the field has no domain on B or the value
// isn't a number.
fn bounded_value<B: Bound>(light: Light, field: Field, value: &ParamValue) -> Result<u32, LightingError> {
    let domain = match B::domain(field) {
        Some(domain) => domain,
        None => {
            return Err(LightingError::invalid(
                light,
                field,
                format!("the {} light has no such field", light),
            ))
        }
    };
    let requested = match *value {
        ParamValue::Number(n) => n,
        ref other => {
            return Err(LightingError::invalid(
                light,
                field,
                format!("expected a number, got a {}", other.kind()),
            ))
        }
    };
    let stored = domain.clamp(requested);
    if i64::from(stored) != requested {
        debug!(
            light = %light,
            field = %field,
            requested,
            stored,
            "value clamped to domain"
        );
    }
    Ok(stored)
}

fn fixture_value<F: Fixture>(light: Light, field: Field, value: &ParamValue) -> Result<F, LightingError> {
    let name = text_value(light, field, value)?;
    F::from_name(name).ok_or_else(|| {
        let allowed: Vec<&str> = F::all().iter().map(|f| f.name()).collect();
        LightingError::invalid(
            light,
            field,
            format!("{:?} is not one of {}", name, allowed.join(", ")),
        )
    })
}

fn flag_value(light: Light, field: Field, value: &ParamValue) -> Result<bool, LightingError> {
    match *value {
        ParamValue::Flag(b) => Ok(b),
        ref other => Err(LightingError::invalid(
            light,
            field,
            format!("expected a flag, got a {}", other.kind()),
        )),
    }
}

fn text_value<'a>(light: Light, field: Field, value: &'a ParamValue) -> Result<&'a str, LightingError> {
    match *value {
        ParamValue::Text(ref s) => Ok(s.as_str()),
        ref other => Err(LightingError::invalid(
            light,
            field,
            format!("expected text, got a {}", other.kind()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LightingConfig::new();
        assert_eq!(config.key.fixture, KeyFixture::Softbox);
        assert_eq!(
            config.key.params,
            LightParameters {
                height: 200,
                angle: 45,
                intensity: 75,
                color_temperature: 5600,
                distance: 150,
            }
        );
        assert_eq!(config.fill.fixture, FillFixture::Umbrella);
        assert!(config.fill.enabled);
        assert_eq!(config.fill.params.intensity, 40);
        assert_eq!(config.fill.params.distance, 180);
        assert!(config.rim.enabled);
        assert_eq!(config.rim.params.angle, 135);
        assert_eq!(config.rim.params.color_temperature, 6000);
        assert_eq!(config.background.color, "#00b300");
        assert_eq!(config.background.distance, 80);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_update_changes_only_the_named_field() {
        let mut config = LightingConfig::new();
        let before = config.clone();
        config.update(Light::Fill, Field::Height, 220).unwrap();
        assert_eq!(config.fill.params.height, 220);
        let mut expected = before.clone();
        expected.fill.params.height = 220;
        assert_eq!(config, expected);

        config.update(Light::Key, Field::Fixture, "beauty dish").unwrap();
        assert_eq!(config.key.fixture, KeyFixture::BeautyDish);
        config.update(Light::Fill, Field::Fixture, "LED Panel").unwrap();
        assert_eq!(config.fill.fixture, FillFixture::Panel);
        config.update(Light::Background, Field::Color, "#FFA07A").unwrap();
        assert_eq!(config.background.color, "#ffa07a");
        config.update(Light::Background, Field::Distance, 120).unwrap();
        assert_eq!(config.background.distance, 120);
        config.update(Light::Rim, Field::Enabled, false).unwrap();
        assert!(!config.rim.enabled);
        assert_eq!(config.key.params, before.key.params);
    }

    #[test]
    fn test_update_clamps() {
        let mut config = LightingConfig::new();
        config.update(Light::Key, Field::Intensity, 500).unwrap();
        assert_eq!(config.key.params.intensity, 100);
        config.update(Light::Key, Field::Intensity, 0).unwrap();
        assert_eq!(config.key.params.intensity, 10);
        config.update(Light::Rim, Field::ColorTemperature, 6049).unwrap();
        assert_eq!(config.rim.params.color_temperature, 6000);
        config.update(Light::Fill, Field::Angle, -90).unwrap();
        assert_eq!(config.fill.params.angle, 0);
        config.update(Light::Background, Field::Distance, 5).unwrap();
        assert_eq!(config.background.distance, 20);
        config.update(Light::Background, Field::Distance, 250).unwrap();
        assert_eq!(config.background.distance, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_update_rejects() {
        let mut config = LightingConfig::new();
        let before = config.clone();
        let rejected: Vec<(Light, Field, ParamValue)> = vec![
            (Light::Rim, Field::Fixture, "softbox".into()),
            (Light::Key, Field::Enabled, false.into()),
            (Light::Key, Field::Fixture, "reflector".into()),
            (Light::Fill, Field::Fixture, "beauty dish".into()),
            (Light::Key, Field::Height, "tall".into()),
            (Light::Key, Field::Color, "#ffffff".into()),
            (Light::Background, Field::Height, 100.into()),
            (Light::Background, Field::Color, 42.into()),
            (Light::Fill, Field::Enabled, 1.into()),
        ];
        for (light, field, value) in rejected {
            match config.update(light, field, value.clone()) {
                Err(LightingError::InvalidParameter { light: l, field: f, .. }) => {
                    assert_eq!((l, f), (Some(light), Some(field)));
                }
                other => panic!("{}.{} = {:?} gave {:?}", light, field, value, other),
            }
        }
        assert_eq!(
            config.update(Light::Background, Field::Color, "#0b0"),
            Err(LightingError::InvalidColorFormat("#0b0".to_string()))
        );
        assert_eq!(config, before);
    }

    #[test]
    fn test_update_named() {
        let mut config = LightingConfig::new();
        config.update_named("mainLight", "colorTemperature", 3200).unwrap();
        assert_eq!(config.key.params.color_temperature, 3200);
        config.update_named("fillLight", "type", "reflector").unwrap();
        assert_eq!(config.fill.fixture, FillFixture::Reflector);
        config.update_named("rim", "color_temperature", 7000).unwrap();
        assert_eq!(config.rim.params.color_temperature, 7000);
        match config.update_named("rimLight", "brightness", 10) {
            Err(LightingError::InvalidParameter { light: Some(Light::Rim), field: None, .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert!(config.update_named("spotLight", "height", 100).is_err());
    }

    #[test]
    fn test_update_named_color_on_lights() {
        // the temperature sliders of a configurator send "color" for every light
        let mut config = LightingConfig::new();
        config.update_named("rimLight", "color", 3200).unwrap();
        assert_eq!(config.rim.params.color_temperature, 3200);
        config.update_named("mainLight", "color", 3249).unwrap();
        assert_eq!(config.key.params.color_temperature, 3200);
        config.update_named("fillLight", "color", 9000).unwrap();
        assert_eq!(config.fill.params.color_temperature, 7500);
        config.update_named("background", "color", "#00C900").unwrap();
        assert_eq!(config.background.color, "#00c900");
        // a hex code is still not a temperature
        match config.update_named("key", "color", "#ffffff") {
            Err(LightingError::InvalidParameter { light, field, .. }) => {
                assert_eq!((light, field), (Some(Light::Key), Some(Field::ColorTemperature)));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_toggle() {
        let mut config = LightingConfig::new();
        config.toggle(Light::Fill).unwrap();
        assert!(!config.fill.enabled);
        config.toggle(Light::Fill).unwrap();
        assert!(config.fill.enabled);
        config.toggle(Light::Rim).unwrap();
        assert!(!config.rim.enabled);

        let before = config.clone();
        for &light in &[Light::Key, Light::Background] {
            assert_eq!(
                config.toggle(light),
                Err(LightingError::UnsupportedOperation {
                    light,
                    operation: "toggle",
                })
            );
        }
        assert_eq!(config, before);
    }

    #[test]
    fn test_validate() {
        let mut config = LightingConfig::new();
        config.rim.params.height = 400;
        match config.validate() {
            Err(LightingError::InvalidParameter { light, field, .. }) => {
                assert_eq!((light, field), (Some(Light::Rim), Some(Field::Height)));
            }
            other => panic!("unexpected {:?}", other),
        }
        config.reset();
        config.background.color = "green".to_string();
        assert_eq!(
            config.validate(),
            Err(LightingError::InvalidColorFormat("green".to_string()))
        );
        config.reset();
        config.key.params.color_temperature = 5650;
        assert!(config.validate().is_err());
    }
}
