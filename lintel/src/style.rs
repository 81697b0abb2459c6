/// Theme color token, resolved to a concrete color by whoever paints the
/// rendered lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Terminal default
    #[default]
    Reset,
    /// Regular body text
    Text,
    /// De-emphasized text (helper text, placeholders, inactive indicators)
    Muted,
    /// Accent color (active sort indicator, focus)
    Primary,
    /// Filled input background
    Surface,
    /// Background of selected table rows
    Selected,
    /// Borders and separators
    Border,
    Success,
    Warning,
    Error,
}

/// Text and element styling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    /// Foreground color
    pub fg: Option<Color>,
    /// Background color
    pub bg: Option<Color>,
    /// Bold text
    pub bold: bool,
    /// Dim/faint text
    pub dim: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a new empty style
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            dim: false,
            underline: false,
        }
    }

    /// Set foreground color
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set background color
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set bold
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set dim
    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Set underline
    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Fill unset properties from a parent style.
    ///
    /// Colors set on `self` win; boolean attributes are combined.
    pub const fn inherit(self, parent: Style) -> Self {
        Self {
            fg: match self.fg {
                Some(c) => Some(c),
                None => parent.fg,
            },
            bg: match self.bg {
                Some(c) => Some(c),
                None => parent.bg,
            },
            bold: self.bold || parent.bold,
            dim: self.dim || parent.dim,
            underline: self.underline || parent.underline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inherit_keeps_own_colors() {
        let parent = Style::new().fg(Color::Muted).bg(Color::Selected).bold();
        let child = Style::new().fg(Color::Primary).inherit(parent);

        assert_eq!(child.fg, Some(Color::Primary));
        assert_eq!(child.bg, Some(Color::Selected));
        assert!(child.bold);
        assert!(!child.dim);
    }
}
