// scheme.rs - The resolved appearance value

use serde::{Deserialize, Serialize};
use std::fmt;

/// The host's appearance preference. There is no "unknown" third state;
/// anything that cannot be resolved ends up as `Light`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Light,
    Dark,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Light => "light",
            Scheme::Dark => "dark",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
