#![forbid(unsafe_code)]

//! Theme system with light/dark adaptive colours.
//!
//! A [`Theme`] holds [`AdaptiveColor`]s; [`Theme::resolve`] flattens it for
//! one mode into a [`ResolvedTheme`] that widgets read plain colours from.
//!
//! ```
//! use yongui_style::theme::Theme;
//! use yongui_style::Tone;
//!
//! let theme = Theme::default().resolve(Theme::detect_dark_mode());
//! let brand = theme.tone(Tone::Brand);
//! assert_ne!(brand.fg, brand.bg);
//! ```

use std::env;

use crate::tone::{Tone, ToneColors};
use yongui_render::cell::PackedRgba;

/// A colour that can differ between light and dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveColor {
    Fixed(PackedRgba),
    Adaptive { light: PackedRgba, dark: PackedRgba },
}

impl AdaptiveColor {
    #[inline]
    pub const fn fixed(color: PackedRgba) -> Self {
        Self::Fixed(color)
    }

    #[inline]
    pub const fn adaptive(light: PackedRgba, dark: PackedRgba) -> Self {
        Self::Adaptive { light, dark }
    }

    /// Pick the colour for the given mode.
    #[inline]
    pub const fn resolve(&self, is_dark: bool) -> PackedRgba {
        match self {
            Self::Fixed(c) => *c,
            Self::Adaptive { light, dark } => {
                if is_dark {
                    *dark
                } else {
                    *light
                }
            }
        }
    }
}

impl From<PackedRgba> for AdaptiveColor {
    fn from(color: PackedRgba) -> Self {
        Self::Fixed(color)
    }
}

/// Adaptive colour slots for one tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneSlots {
    pub fg: AdaptiveColor,
    pub bg: AdaptiveColor,
    pub bg_hover: AdaptiveColor,
    pub border: AdaptiveColor,
}

impl ToneSlots {
    pub const fn resolve(&self, is_dark: bool) -> ToneColors {
        ToneColors {
            fg: self.fg.resolve(is_dark),
            bg: self.bg.resolve(is_dark),
            bg_hover: self.bg_hover.resolve(is_dark),
            border: self.border.resolve(is_dark),
        }
    }
}

/// A theme with semantic colour slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Body text.
    pub text: AdaptiveColor,
    /// Placeholder and hint text.
    pub placeholder: AdaptiveColor,
    /// Popover surface (dropdown list background).
    pub surface: AdaptiveColor,
    tones: [ToneSlots; 6],
}

impl Default for Theme {
    fn default() -> Self {
        themes::yong()
    }
}

impl Theme {
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }

    /// Detect whether dark mode should be used.
    ///
    /// Reads `COLORFGBG` ("fg;bg" ANSI indices); a background of 7 or 15 means
    /// a light terminal. Anything else, including an unset variable, is dark.
    #[must_use]
    pub fn detect_dark_mode() -> bool {
        Self::detect_dark_mode_from_colorfgbg(env::var("COLORFGBG").ok().as_deref())
    }

    fn detect_dark_mode_from_colorfgbg(colorfgbg: Option<&str>) -> bool {
        if let Some(colorfgbg) = colorfgbg
            && let Some(bg_part) = colorfgbg.split(';').next_back()
            && let Ok(bg) = bg_part.trim().parse::<u8>()
        {
            return bg != 7 && bg != 15;
        }
        true
    }

    pub fn tone(&self, tone: Tone) -> &ToneSlots {
        &self.tones[tone_index(tone)]
    }

    /// Flatten every adaptive colour for one mode.
    #[must_use]
    pub fn resolve(&self, is_dark: bool) -> ResolvedTheme {
        ResolvedTheme {
            is_dark,
            text: self.text.resolve(is_dark),
            placeholder: self.placeholder.resolve(is_dark),
            surface: self.surface.resolve(is_dark),
            tones: self.tones.map(|slots| slots.resolve(is_dark)),
        }
    }
}

const fn tone_index(tone: Tone) -> usize {
    match tone {
        Tone::Brand => 0,
        Tone::Neutral => 1,
        Tone::Danger => 2,
        Tone::Success => 3,
        Tone::Warning => 4,
        Tone::Info => 5,
    }
}

/// A [`Theme`] resolved for one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub is_dark: bool,
    pub text: PackedRgba,
    pub placeholder: PackedRgba,
    pub surface: PackedRgba,
    tones: [ToneColors; 6],
}

impl ResolvedTheme {
    pub fn tone(&self, tone: Tone) -> ToneColors {
        self.tones[tone_index(tone)]
    }
}

impl Default for ResolvedTheme {
    /// The default theme in dark mode.
    fn default() -> Self {
        Theme::default().resolve(true)
    }
}

/// Builder for custom themes, starting from the default theme.
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    #[must_use]
    pub fn text(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.text = color.into();
        self
    }

    #[must_use]
    pub fn placeholder(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.placeholder = color.into();
        self
    }

    #[must_use]
    pub fn surface(mut self, color: impl Into<AdaptiveColor>) -> Self {
        self.theme.surface = color.into();
        self
    }

    #[must_use]
    pub fn tone(mut self, tone: Tone, slots: ToneSlots) -> Self {
        self.theme.tones[tone_index(tone)] = slots;
        self
    }

    pub fn build(self) -> Theme {
        self.theme
    }
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in themes.
pub mod themes {
    use super::{AdaptiveColor, Theme, ToneSlots};
    use yongui_render::cell::PackedRgba;

    const fn ad(light: &str, dark: &str) -> AdaptiveColor {
        AdaptiveColor::adaptive(PackedRgba::hex(light), PackedRgba::hex(dark))
    }

    const fn slots(fg: AdaptiveColor, bg: AdaptiveColor, hover: AdaptiveColor, border: AdaptiveColor) -> ToneSlots {
        ToneSlots {
            fg,
            bg,
            bg_hover: hover,
            border,
        }
    }

    /// The YONG UI palette: violet/slate in light mode, teal/sage in dark.
    pub fn yong() -> Theme {
        Theme {
            text: ad("#1C2024", "#EDEEF0"),
            placeholder: ad("#5D727D", "#8B92A2"),
            surface: ad("#FFFFFF", "#202632"),
            tones: [
                // brand
                slots(
                    ad("#0064FF", "#0064FF"),
                    ad("#E0F0FF", "#111C2E"),
                    ad("#C4E0FF", "#0D2847"),
                    ad("#0070F3", "#0070BD"),
                ),
                // neutral
                slots(
                    ad("#455159", "#C7CDDB"),
                    ad("#FFFFFF", "#202632"),
                    ad("#E3E8EA", "#252B3A"),
                    ad("#A4B4BC", "#4A525F"),
                ),
                // danger
                slots(
                    ad("#CB2328", "#FF9592"),
                    ad("#FFFCFC", "#191111"),
                    ad("#FFF7F7", "#201314"),
                    ad("#E43F44", "#B54548"),
                ),
                // success
                slots(
                    ad("#1A6644", "#3DD68C"),
                    ad("#FBFEFC", "#0E1512"),
                    ad("#F4FBF6", "#121B17"),
                    ad("#5BB98B", "#2F7C57"),
                ),
                // warning
                slots(
                    ad("#DD9E08", "#FFCA16"),
                    ad("#FEFDFB", "#16120C"),
                    ad("#FEFBE9", "#1D180F"),
                    ad("#E9C162", "#714F19"),
                ),
                // info
                slots(
                    ad("#095190", "#70B8FF"),
                    ad("#F4FAFF", "#0D2847"),
                    ad("#E6F4FE", "#003362"),
                    ad("#0090FF", "#0090FF"),
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorfgbg_light_backgrounds() {
        assert!(!Theme::detect_dark_mode_from_colorfgbg(Some("0;15")));
        assert!(!Theme::detect_dark_mode_from_colorfgbg(Some("0;7")));
        assert!(Theme::detect_dark_mode_from_colorfgbg(Some("15;0")));
    }

    #[test]
    fn colorfgbg_missing_or_garbage_is_dark() {
        assert!(Theme::detect_dark_mode_from_colorfgbg(None));
        assert!(Theme::detect_dark_mode_from_colorfgbg(Some("default")));
    }

    #[test]
    fn resolve_picks_mode() {
        let theme = Theme::default();
        let light = theme.resolve(false);
        let dark = theme.resolve(true);
        assert_eq!(light.surface, PackedRgba::WHITE);
        assert_ne!(light.tone(Tone::Brand).bg, dark.tone(Tone::Brand).bg);
        assert!(dark.is_dark);
    }

    #[test]
    fn every_tone_has_distinct_fg_and_bg() {
        for is_dark in [false, true] {
            let resolved = Theme::default().resolve(is_dark);
            for tone in Tone::ALL {
                let colors = resolved.tone(tone);
                assert_ne!(colors.fg, colors.bg, "{tone} in dark={is_dark}");
            }
        }
    }

    #[test]
    fn builder_overrides_tone() {
        let red = PackedRgba::rgb(255, 0, 0);
        let slots = ToneSlots {
            fg: red.into(),
            bg: red.into(),
            bg_hover: red.into(),
            border: red.into(),
        };
        let theme = Theme::builder().tone(Tone::Info, slots).build();
        assert_eq!(theme.resolve(false).tone(Tone::Info).fg, red);
        assert_eq!(theme.tone(Tone::Brand), Theme::default().tone(Tone::Brand));
    }

    #[test]
    fn adaptive_fixed_ignores_mode() {
        let c = AdaptiveColor::fixed(PackedRgba::BLACK);
        assert_eq!(c.resolve(true), c.resolve(false));
    }
}
