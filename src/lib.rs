//! Studiolight models a studio lighting setup (a key light, a fill light, a rim light, and a
//! backdrop) and describes it in words, producing a prompt that a text-to-image model can use to
//! reproduce the look. The setup is plain data that a host edits one field at a time; every edit is
//! checked against the physical range of the field, so a setup can never drift into values a real
//! studio couldn't produce. The description is recomputed from scratch whenever it's asked for.
//!
//! ```
//! # use studiolight::prelude::*;
//! let mut setup = LightingConfig::default();
//! setup.update(Light::Key, Field::Fixture, "beauty dish").unwrap();
//! setup.update(Light::Background, Field::Color, "#e0ffe0").unwrap();
//! setup.toggle(Light::Rim).unwrap();
//! let prompt = synthesize(&setup).unwrap();
//! assert!(prompt.contains("strong beauty dish as the key light"));
//! assert!(prompt.ends_with("bright green backdrop positioned 80cm behind subject."));
//! ```

#![doc(html_root_url = "https://docs.rs/studiolight/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate float_cmp;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;
extern crate num;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg(test)]
extern crate serde_json;
#[macro_use]
extern crate tracing;

pub mod bound;
pub mod color;
pub mod config;
mod consts;
pub mod error;
pub mod light;
pub mod prelude;
pub mod preview;
pub mod prompt;
