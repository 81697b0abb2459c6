/// Border style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Border {
    #[default]
    None,
    Single,
    Rounded,
    /// Only an underline below the content
    Bottom,
}

/// Width specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    /// Fixed size in cells (content is padded or truncated)
    Fixed(u16),
    /// Size to content
    #[default]
    Auto,
}

/// Layout properties for a container node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Layout {
    /// Width
    pub width: Size,
    /// Padding (all sides)
    pub padding: u16,
    /// Padding horizontal, overrides `padding` on the left and right
    pub padding_h: Option<u16>,
    /// Gap between children
    pub gap: u16,
    /// Border style
    pub border: Border,
}

impl Layout {
    pub const fn new() -> Self {
        Self {
            width: Size::Auto,
            padding: 0,
            padding_h: None,
            gap: 0,
            border: Border::None,
        }
    }

    pub const fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub const fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    pub const fn padding_h(mut self, padding: u16) -> Self {
        self.padding_h = Some(padding);
        self
    }

    pub const fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub const fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    /// Effective horizontal padding
    pub fn horizontal_padding(&self) -> u16 {
        self.padding_h.unwrap_or(self.padding)
    }
}
