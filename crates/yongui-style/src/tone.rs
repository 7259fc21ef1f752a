#![forbid(unsafe_code)]

//! Semantic tones.
//!
//! A [`Tone`] picks the colour family a control is drawn in. Themes map each
//! tone to a [`ToneColors`] set once the light/dark mode is known.

use std::fmt;
use std::str::FromStr;

use yongui_render::cell::PackedRgba;

/// Semantic colour family of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    Brand,
    #[default]
    Neutral,
    Danger,
    Success,
    Warning,
    Info,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Brand,
        Tone::Neutral,
        Tone::Danger,
        Tone::Success,
        Tone::Warning,
        Tone::Info,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Tone::Brand => "brand",
            Tone::Neutral => "neutral",
            Tone::Danger => "danger",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Info => "info",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown tone name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTone(pub String);

impl fmt::Display for UnknownTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown tone {:?} (expected brand, neutral, danger, success, warning or info)",
            self.0
        )
    }
}

impl std::error::Error for UnknownTone {}

impl FromStr for Tone {
    type Err = UnknownTone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownTone(name.to_owned()))
    }
}

/// Resolved colours for one tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneColors {
    /// Text drawn in this tone.
    pub fg: PackedRgba,
    /// Subtle background (selected item, tinted surface).
    pub bg: PackedRgba,
    /// Background under the pointer or keyboard focus.
    pub bg_hover: PackedRgba,
    pub border: PackedRgba,
}
