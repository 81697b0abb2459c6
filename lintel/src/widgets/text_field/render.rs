//! Text field rendering.

use crate::node::{Layout, Node};
use crate::style::{Color, Style};

use super::state::TextFieldInner;

/// Element ID of the clear button.
pub fn clear_button_id(field_id: &str) -> String {
    format!("{field_id}-clear")
}

/// Element ID of the reveal toggle.
pub fn reveal_toggle_id(field_id: &str) -> String {
    format!("{field_id}-reveal")
}

pub(super) fn render(inner: &TextFieldInner) -> Node {
    let id = inner.id();
    let has_error = inner.has_error();
    let mut children = Vec::with_capacity(3);

    if let Some(label) = &inner.label {
        let color = if has_error { Color::Error } else { Color::Text };
        children.push(Node::text_styled(label, Style::new().fg(color).bold()));
    }

    children.push(render_control(&id, inner, has_error));

    // The error message replaces the helper text
    match (&inner.error_message, &inner.helper_text) {
        (Some(message), _) if !message.is_empty() => {
            children.push(Node::text_styled(message, Style::new().fg(Color::Error)));
        }
        (_, Some(helper)) => {
            children.push(Node::text_styled(helper, Style::new().fg(Color::Muted)));
        }
        _ => {}
    }

    Node::column(children)
}

fn render_control(id: &str, inner: &TextFieldInner, has_error: bool) -> Node {
    let input = Node::Input {
        id: id.to_string(),
        value: inner.displayed_value().to_string(),
        placeholder: inner.placeholder.clone(),
        masked: inner.is_masked(),
        disabled: inner.is_input_disabled(),
        invalid: has_error,
        style: input_style(inner, has_error),
        layout: inner.variant.layout(inner.size),
    };

    let mut children = vec![input];

    if inner.loading {
        children.push(Node::spinner().with_style(Style::new().fg(Color::Primary)));
    } else {
        if inner.shows_clear_button() {
            children.push(
                Node::button(clear_button_id(id), "clear").with_style(Style::new().fg(Color::Muted)),
            );
        }
        if inner.shows_reveal_toggle() {
            let label = if inner.revealed { "hide" } else { "show" };
            children.push(
                Node::button(reveal_toggle_id(id), label).with_style(Style::new().fg(Color::Muted)),
            );
        }
    }

    Node::row_styled(children, Style::new(), Layout::new().gap(1))
}

fn input_style(inner: &TextFieldInner, has_error: bool) -> Style {
    let style = inner.variant.style(has_error);
    if inner.is_input_disabled() {
        style.dim()
    } else {
        style
    }
}
