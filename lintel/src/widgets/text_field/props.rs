use crate::node::{Border, Layout, Size};
use crate::style::{Color, Style};

/// Visual variant of a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Bordered box
    #[default]
    Outlined,
    /// Shaded background, no border
    Filled,
    /// Underline only
    Ghost,
}

/// Size of a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Declared input type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
}

impl FieldSize {
    /// Width of the input box in cells.
    pub fn width(self) -> u16 {
        match self {
            FieldSize::Small => 20,
            FieldSize::Medium => 28,
            FieldSize::Large => 36,
        }
    }

    /// Horizontal padding inside the input box.
    pub fn padding(self) -> u16 {
        match self {
            FieldSize::Small => 0,
            FieldSize::Medium => 1,
            FieldSize::Large => 2,
        }
    }
}

impl Variant {
    /// Style of the input box.
    pub fn style(self, has_error: bool) -> Style {
        let style = match self {
            Variant::Outlined | Variant::Ghost => Style::new(),
            Variant::Filled => Style::new().bg(Color::Surface),
        };
        if has_error {
            style.fg(Color::Error)
        } else {
            style
        }
    }

    /// Layout of the input box for the given size.
    pub fn layout(self, size: FieldSize) -> Layout {
        let border = match self {
            Variant::Outlined => Border::Single,
            Variant::Filled => Border::None,
            Variant::Ghost => Border::Bottom,
        };
        Layout::new()
            .width(Size::Fixed(size.width()))
            .padding_h(size.padding())
            .border(border)
    }
}
