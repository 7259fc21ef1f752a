#![forbid(unsafe_code)]

//! Styles, tones, and light/dark themes for YongUI widgets.

pub mod style;
pub mod theme;
pub mod tone;

pub use style::Style;
pub use theme::{AdaptiveColor, ResolvedTheme, Theme, ThemeBuilder, themes};
pub use tone::{Tone, ToneColors, UnknownTone};
pub use yongui_render::cell::{PackedRgba, StyleFlags};
