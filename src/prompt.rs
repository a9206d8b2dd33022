//! This module turns a [`LightingConfig`] into the text prompt handed to an image model. The prompt
//! is a fixed preamble followed by one sentence per light, in the order key, fill, rim, backdrop.
//! The key light and the backdrop are always described; the fill and rim lights only when they're
//! on. Synthesis is a pure function of the setup, so it is recomputed whenever it's needed rather
//! than cached alongside the setup.

use color::hex_to_rgb;
use config::LightingConfig;
use consts;
use error::LightingError;
use light::{FillLight, Fixture, KeyLight, RimLight};

/// Every prompt starts with this.
pub const PREAMBLE: &str = "Professional product photography setup with ";

/// Describes the setup in one paragraph. Numbers are written out as plain integers with their
/// units attached.
///
/// The only failure is a backdrop color that isn't a `#rrggbb` code, which can only happen if the
/// color was assigned without going through `LightingConfig::update`. The error is passed through
/// as `InvalidColorFormat`.
/// # Example
///
/// ```
/// # use studiolight::config::LightingConfig;
/// # use studiolight::light::Light;
/// # use studiolight::prompt::synthesize;
/// let mut config = LightingConfig::default();
/// config.toggle(Light::Fill).unwrap();
/// config.toggle(Light::Rim).unwrap();
/// assert_eq!(
///     synthesize(&config).unwrap(),
///     "Professional product photography setup with a strong softbox as the key light \
///      positioned at 200cm height, 45° angle, with 5600K color temperature, 150cm from \
///      subject. medium green backdrop positioned 80cm behind subject."
/// );
/// ```
pub fn synthesize(config: &LightingConfig) -> Result<String, LightingError> {
    let mut prompt = String::from(PREAMBLE);
    prompt.push_str(&key_clause(&config.key));
    prompt.push(' ');
    if config.fill.enabled {
        prompt.push_str(&fill_clause(&config.fill));
        prompt.push(' ');
    }
    if config.rim.enabled {
        prompt.push_str(&rim_clause(&config.rim));
        prompt.push(' ');
    }
    let shade = hex_to_rgb(&config.background.color)?.green_shade();
    prompt.push_str(&format!(
        "{} green backdrop positioned {}cm behind subject.",
        shade, config.background.distance
    ));
    Ok(prompt)
}

fn key_clause(key: &KeyLight) -> String {
    let p = &key.params;
    let strength = if p.intensity > consts::STRONG_KEY_THRESHOLD {
        "strong"
    } else {
        "soft"
    };
    format!(
        "a {} {} as the key light positioned at {}cm height, {}° angle, with {}K color temperature, {}cm from subject.",
        strength,
        key.fixture.name(),
        p.height,
        p.angle,
        p.color_temperature,
        p.distance
    )
}

fn fill_clause(fill: &FillLight) -> String {
    let p = &fill.params;
    format!(
        "Fill light using {} at {}cm height, {}° angle, at {}% intensity, {}cm from subject.",
        fill.fixture.name(),
        p.height,
        p.angle,
        p.intensity,
        p.distance
    )
}

fn rim_clause(rim: &RimLight) -> String {
    let p = &rim.params;
    format!(
        "Rim light positioned at {}cm height, {}° angle, at {}% intensity, {}K color temperature, {}cm from subject.",
        p.height, p.angle, p.intensity, p.color_temperature, p.distance
    )
}

/// Somewhere to put a finished prompt, such as the system clipboard. Implementations that can fail
/// should report it as `LightingError::Sink`.
pub trait PromptSink {
    /// Takes ownership of the prompt text, replacing whatever the sink held before.
    fn write_prompt(&mut self, prompt: &str) -> Result<(), LightingError>;
}

/// A `String` sink simply holds the latest prompt.
impl PromptSink for String {
    fn write_prompt(&mut self, prompt: &str) -> Result<(), LightingError> {
        self.clear();
        self.push_str(prompt);
        Ok(())
    }
}

/// Synthesizes the prompt for `config` and hands it to `sink`. Returns the prompt as well, so the
/// caller can show what was copied.
pub fn copy_prompt<S: PromptSink + ?Sized>(
    config: &LightingConfig,
    sink: &mut S,
) -> Result<String, LightingError> {
    let prompt = synthesize(config)?;
    sink.write_prompt(&prompt)?;
    debug!(len = prompt.len(), "prompt copied to sink");
    Ok(prompt)
}
