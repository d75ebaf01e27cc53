use crossterm::style::Color;
use dialoguer::theme::Theme;
use std::fmt;

/// Design tokens for the agentrules CLI UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const ARROW: &str = "↳";
    pub const POINTER: &str = "›";

    // Selection states (for MultiSelect).
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";

    // Command identifiers (used in headers).
    pub const WATCH: &str = "⟳";
    pub const GENERATE: &str = "📝";
    pub const CONFIG: &str = "⚙";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "[>]";
    pub const POINTER: &str = ">";

    // Selection states (for MultiSelect).
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";

    pub const WATCH: &str = "[~]";
    pub const GENERATE: &str = "[GEN]";
    pub const CONFIG: &str = "[CONFIG]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

// ----------------------------------------------------------------------------
// PromptTheme - dialoguer theme with ●/○ icons
// ----------------------------------------------------------------------------

/// Theme for dialoguer prompts using the design tokens above.
///
/// Wraps `ColorfulTheme` and only overrides multi-select item formatting.
pub struct PromptTheme {
    unicode: bool,
    inner: dialoguer::theme::ColorfulTheme,
}

impl PromptTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            inner: dialoguer::theme::ColorfulTheme::default(),
        }
    }

    pub fn selected_icon(&self) -> &'static str {
        if self.unicode {
            icons::SELECTED
        } else {
            icons_ascii::SELECTED
        }
    }

    pub fn unselected_icon(&self) -> &'static str {
        if self.unicode {
            icons::UNSELECTED
        } else {
            icons_ascii::UNSELECTED
        }
    }
}

impl Theme for PromptTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        self.inner.format_confirm_prompt(f, prompt, default)
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        self.inner
            .format_confirm_prompt_selection(f, prompt, selection)
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        self.inner.format_input_prompt(f, prompt, default)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_input_prompt_selection(f, prompt, sel)
    }

    fn format_multi_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_multi_select_prompt(f, prompt)
    }

    fn format_multi_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        checked: bool,
        active: bool,
    ) -> fmt::Result {
        let icon = if checked {
            self.selected_icon()
        } else {
            self.unselected_icon()
        };

        if active {
            write!(f, "> {} {}", icon, text)
        } else {
            write!(f, "  {} {}", icon, text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_theme_unicode_icons() {
        let theme = PromptTheme::new(true);
        assert_eq!(theme.selected_icon(), "●");
        assert_eq!(theme.unselected_icon(), "○");
    }

    #[test]
    fn test_prompt_theme_ascii_icons() {
        let theme = PromptTheme::new(false);
        assert_eq!(theme.selected_icon(), "[x]");
        assert_eq!(theme.unselected_icon(), "[ ]");
    }
}
