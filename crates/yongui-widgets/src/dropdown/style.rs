#![forbid(unsafe_code)]

//! Dropdown styles derived from a theme.

use yongui_style::{ResolvedTheme, Style, Tone};

/// Every style the dropdown sub-views draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownStyles {
    /// Trigger box background and text.
    pub trigger: Style,
    pub trigger_border: Style,
    /// Trigger text when nothing is selected.
    pub placeholder: Style,
    /// List panel background.
    pub list: Style,
    pub list_border: Style,
    /// Plain item row.
    pub item: Style,
    pub selected: Style,
    /// Layered over an item that has keyboard focus.
    pub focused: Style,
    pub hovered: Style,
}

impl DropdownStyles {
    /// Styles for a dropdown drawn in `tone`.
    ///
    /// The trigger takes the tone's colours; the list is a neutral surface
    /// and the selected item uses the brand colours.
    pub fn from_theme(theme: &ResolvedTheme, tone: Tone) -> Self {
        let toned = theme.tone(tone);
        let neutral = theme.tone(Tone::Neutral);
        let brand = theme.tone(Tone::Brand);

        Self {
            trigger: Style::new().fg(toned.fg).bg(toned.bg),
            trigger_border: Style::new().fg(toned.border),
            placeholder: Style::new().fg(theme.placeholder).bg(toned.bg),
            list: Style::new().fg(theme.text).bg(theme.surface),
            list_border: Style::new().fg(neutral.border),
            item: Style::new().fg(theme.text).bg(theme.surface),
            selected: Style::new().fg(brand.fg).bg(brand.bg),
            focused: Style::new().bold(),
            hovered: Style::new().bg(neutral.bg_hover),
        }
    }
}

impl Default for DropdownStyles {
    /// Neutral tone on the default dark theme.
    fn default() -> Self {
        Self::from_theme(&ResolvedTheme::default(), Tone::Neutral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yongui_style::Theme;

    #[test]
    fn trigger_follows_tone() {
        let theme = Theme::default().resolve(false);
        let danger = DropdownStyles::from_theme(&theme, Tone::Danger);
        assert_eq!(danger.trigger.fg, Some(theme.tone(Tone::Danger).fg));
        assert_eq!(danger.trigger_border.fg, Some(theme.tone(Tone::Danger).border));
    }

    #[test]
    fn selection_is_brand_for_every_tone() {
        let theme = Theme::default().resolve(true);
        for tone in Tone::ALL {
            let styles = DropdownStyles::from_theme(&theme, tone);
            assert_eq!(styles.selected.bg, Some(theme.tone(Tone::Brand).bg));
        }
    }

    #[test]
    fn hover_differs_from_plain_item() {
        let styles = DropdownStyles::from_theme(&Theme::default().resolve(false), Tone::Neutral);
        assert_ne!(styles.hovered.bg, styles.item.bg);
    }
}
