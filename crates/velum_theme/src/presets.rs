//! Gallery theme presets
//!
//! The one piece of configuration Velum reads: which page chrome the gallery
//! renders component previews on. Presets never alter the component tables;
//! same inputs produce the same class strings under every preset.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Built-in preset catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Plain white page chrome.
    #[default]
    Default,
    /// Warm sand-toned page chrome.
    Dawn,
    /// Grayscale page chrome.
    Mono,
}

/// A preset id that is not in the catalog.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme preset `{0}`, expected one of: default, dawn, mono")]
pub struct ParsePresetError(String);

impl ThemePreset {
    /// Stable preset id for config/CLI flags.
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dawn => "dawn",
            Self::Mono => "mono",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Dawn => "Dawn",
            Self::Mono => "Mono",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 3] = [ThemePreset::Default, ThemePreset::Dawn, ThemePreset::Mono];
        &PRESETS
    }

    /// Classes for the gallery page body under this preset.
    pub fn body_class(self) -> &'static str {
        match self {
            Self::Default => "bg-white text-[#3E3E3E] antialiased",
            Self::Dawn => "bg-[#FFECDA] text-[#4D4137] antialiased",
            Self::Mono => "bg-[#F3F3F3] text-[#1E1E1E] antialiased grayscale",
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemePreset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "dawn" => Ok(Self::Dawn),
            "mono" => Ok(Self::Mono),
            other => Err(ParsePresetError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for preset in ThemePreset::all() {
            assert_eq!(preset.id().parse::<ThemePreset>(), Ok(*preset));
        }
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        assert!("solarized".parse::<ThemePreset>().is_err());
    }
}
