//! Accessor generation modes.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How generated accessors obtain their values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Constants frozen into the generated code.
    #[default]
    #[serde(alias = "const")]
    Direct,
    /// Properties that look the value up by name on every access.
    #[serde(alias = "lookup")]
    Indirect,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Direct => "direct",
            Mode::Indirect => "indirect",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" | "const" => Ok(Mode::Direct),
            "indirect" | "lookup" => Ok(Mode::Indirect),
            _ => Err(format!(
                "unknown mode '{}', expected 'direct' or 'indirect'",
                s
            )),
        }
    }
}
