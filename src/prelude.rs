//! This module brings the most common Studiolight functionality under a single namespace, to
//! prevent excessive imports: the setup and its vocabulary, the error type, prompt synthesis, and
//! the hex color helpers. The preview layout and the parameter domains are not included.

pub use color::{hex_to_rgb, shade_of, Rgb, Shade};
pub use config::LightingConfig;
pub use error::LightingError;
pub use light::{Field, Fixture, FillFixture, KeyFixture, Light, ParamValue};
pub use prompt::{copy_prompt, synthesize, PromptSink};
