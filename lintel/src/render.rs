//! Plain-text rendering of view trees.
//!
//! [`render_lines`] lays a [`Node`] tree out as a list of styled [`Line`]s,
//! one per terminal row. Colors stay theme tokens; mapping them to real
//! terminal colors is up to whoever prints the lines.

use crate::node::{Border, Layout, Node, Size};
use crate::style::{Color, Style};
use crate::text::{display_width, truncate_to_width};

/// Glyph drawn for a busy indicator.
pub const SPINNER_GLYPH: &str = "⠋";
/// Glyph used in place of each masked character.
pub const MASK_GLYPH: char = '•';

/// A run of text sharing one style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Span {
    pub content: String,
    pub style: Style,
}

impl Span {
    pub fn new(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, Style::new())
    }

    /// Display width in cells
    pub fn width(&self) -> usize {
        display_width(&self.content)
    }
}

/// One row of rendered output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    /// A line holding a single span.
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            spans: vec![Span::new(content, style)],
        }
    }

    /// Display width in cells
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// The text without styling
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.content.as_str()).collect()
    }

    pub fn push(&mut self, span: Span) {
        if !span.content.is_empty() {
            self.spans.push(span);
        }
    }

    pub fn push_str(&mut self, content: impl Into<String>, style: Style) {
        self.push(Span::new(content, style));
    }

    /// Append every span of `other`.
    pub fn append(&mut self, other: Line) {
        for span in other.spans {
            self.push(span);
        }
    }

    /// Pad with `style`d spaces up to `width` cells.
    pub fn pad_to(&mut self, width: usize, style: Style) {
        let current = self.width();
        if current < width {
            self.push_str(" ".repeat(width - current), style);
        }
    }

    /// Cut to at most `width` cells. The span that overflows ends with an
    /// ellipsis and everything after it is dropped.
    pub fn truncate(&mut self, width: usize) {
        if self.width() <= width {
            return;
        }

        let mut used = 0;
        let mut kept = Vec::with_capacity(self.spans.len());
        for span in self.spans.drain(..) {
            let span_width = span.width();
            if used + span_width <= width {
                used += span_width;
                kept.push(span);
                continue;
            }
            let content = truncate_to_width(&span.content, width - used);
            if !content.is_empty() {
                kept.push(Span::new(content, span.style));
            }
            break;
        }
        self.spans = kept;
    }

    /// Pad or truncate to exactly `width` cells.
    pub fn fit(&mut self, width: usize, style: Style) {
        self.truncate(width);
        self.pad_to(width, style);
    }
}

/// Lay out a node tree as terminal lines.
pub fn render_lines(node: &Node) -> Vec<Line> {
    render_node(node, Style::new())
}

/// Width in cells of the widest rendered line of `node`.
pub fn rendered_width(node: &Node) -> usize {
    block_width(&render_lines(node))
}

/// Render lines joined by newlines, without styling.
pub fn render_plain(node: &Node) -> String {
    render_lines(node)
        .iter()
        .map(Line::plain)
        .collect::<Vec<_>>()
        .join("\n")
}

fn block_width(lines: &[Line]) -> usize {
    lines.iter().map(Line::width).max().unwrap_or(0)
}

fn render_node(node: &Node, parent: Style) -> Vec<Line> {
    match node {
        Node::Empty => Vec::new(),
        Node::Text { content, style } => {
            let style = style.inherit(parent);
            content
                .split('\n')
                .map(|line| Line::styled(line, style))
                .collect()
        }
        Node::Checkbox { checked, style, .. } => {
            let glyph = if *checked { "[x]" } else { "[ ]" };
            vec![Line::styled(glyph, style.inherit(parent))]
        }
        Node::Button { label, style, .. } => {
            vec![Line::styled(format!("({label})"), style.inherit(parent))]
        }
        Node::Spinner { style } => vec![Line::styled(SPINNER_GLYPH, style.inherit(parent))],
        Node::Input {
            value,
            placeholder,
            masked,
            style,
            layout,
            ..
        } => {
            let style = style.inherit(parent);
            let line = if value.is_empty() {
                Line::styled(placeholder, Style::new().fg(Color::Muted).inherit(style))
            } else if *masked {
                let bullets: String = value.chars().map(|_| MASK_GLYPH).collect();
                Line::styled(bullets, style)
            } else {
                Line::styled(value, style)
            };
            boxed(vec![line], layout, style)
        }
        Node::Column {
            children,
            style,
            layout,
        } => {
            let style = style.inherit(parent);
            let mut lines = Vec::new();
            for (i, child) in visible_children(children).enumerate() {
                if i > 0 {
                    lines.extend((0..layout.gap).map(|_| Line::new()));
                }
                lines.extend(render_node(child, style));
            }
            boxed(lines, layout, style)
        }
        Node::Row {
            children,
            style,
            layout,
        } => {
            let style = style.inherit(parent);
            let blocks: Vec<Vec<Line>> = visible_children(children)
                .map(|child| render_node(child, style))
                .collect();
            boxed(join_horizontal(blocks, layout.gap, style), layout, style)
        }
    }
}

fn visible_children(children: &[Node]) -> impl Iterator<Item = &Node> {
    children.iter().filter(|c| !matches!(c, Node::Empty))
}

/// Place blocks side by side, top-aligned.
fn join_horizontal(blocks: Vec<Vec<Line>>, gap: u16, style: Style) -> Vec<Line> {
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = blocks.iter().map(|b| block_width(b)).collect();
    let last = blocks.len().saturating_sub(1);

    (0..height)
        .map(|row| {
            let mut line = Line::new();
            for (i, block) in blocks.iter().enumerate() {
                if i > 0 {
                    line.push_str(" ".repeat(usize::from(gap)), style);
                }
                let mut part = block.get(row).cloned().unwrap_or_default();
                // Trailing space after the last block is left off
                if i < last {
                    part.pad_to(widths[i], style);
                }
                line.append(part);
            }
            line
        })
        .collect()
}

/// Apply width, padding and border to a block of lines.
fn boxed(lines: Vec<Line>, layout: &Layout, style: Style) -> Vec<Line> {
    let pad_h = usize::from(layout.horizontal_padding());
    let pad_v = usize::from(layout.padding);
    let frame = match layout.border {
        Border::Single | Border::Rounded => 2,
        Border::None | Border::Bottom => 0,
    };

    let inner = match layout.width {
        Size::Fixed(width) => usize::from(width).saturating_sub(frame + 2 * pad_h),
        Size::Auto => block_width(&lines),
    };

    let needs_fill = matches!(layout.width, Size::Fixed(_))
        || pad_h > 0
        || pad_v > 0
        || layout.border != Border::None;
    if !needs_fill {
        return lines;
    }

    let padding = " ".repeat(pad_h);
    let blank = || {
        let mut line = Line::new();
        line.pad_to(inner + 2 * pad_h, style);
        line
    };

    let mut body: Vec<Line> = Vec::with_capacity(lines.len() + 2 * pad_v);
    body.extend((0..pad_v).map(|_| blank()));
    for mut line in lines {
        line.fit(inner, style);
        let mut padded = Line::new();
        padded.push_str(padding.clone(), style);
        padded.append(line);
        padded.push_str(padding.clone(), style);
        body.push(padded);
    }
    body.extend((0..pad_v).map(|_| blank()));

    let span = inner + 2 * pad_h;
    let border_style = style.inherit(Style::new().fg(Color::Border));
    let (tl, tr, bl, br, h, v) = match layout.border {
        Border::None => return body,
        Border::Bottom => {
            body.push(Line::styled("─".repeat(span), border_style));
            return body;
        }
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    let edge = |left: char, right: char| {
        let mut content = String::with_capacity((span + 2) * h.len_utf8());
        content.push(left);
        content.extend(std::iter::repeat_n(h, span));
        content.push(right);
        Line::styled(content, border_style)
    };

    let mut out = Vec::with_capacity(body.len() + 2);
    out.push(edge(tl, tr));
    for line in body {
        let mut framed = Line::styled(v.to_string(), border_style);
        framed.append(line);
        framed.push_str(v.to_string(), border_style);
        out.push(framed);
    }
    out.push(edge(bl, br));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(node: &Node) -> Vec<String> {
        render_lines(node).iter().map(Line::plain).collect()
    }

    #[test]
    fn test_column_stacks_with_gap() {
        let node = Node::column_styled(
            vec![Node::text("a"), Node::Empty, Node::text("b")],
            Style::new(),
            Layout::new().gap(1),
        );
        assert_eq!(plain(&node), vec!["a", "", "b"]);
    }

    #[test]
    fn test_row_joins_blocks() {
        let node = Node::row_styled(
            vec![
                Node::column(vec![Node::text("ab"), Node::text("c")]),
                Node::text("d"),
            ],
            Style::new(),
            Layout::new().gap(1),
        );
        assert_eq!(plain(&node), vec!["ab d", "c  "]);
    }

    #[test]
    fn test_fixed_width_pads_and_truncates() {
        let cell = |text: &str| {
            Node::row_styled(
                vec![Node::text(text)],
                Style::new(),
                Layout::new().width(Size::Fixed(4)),
            )
        };
        assert_eq!(plain(&cell("ab")), vec!["ab  "]);
        assert_eq!(plain(&cell("abcdef")), vec!["abc…"]);
    }

    #[test]
    fn test_rounded_border() {
        let node = Node::column_styled(
            vec![Node::text("hi")],
            Style::new(),
            Layout::new().border(Border::Rounded).padding_h(1),
        );
        assert_eq!(plain(&node), vec!["╭────╮", "│ hi │", "╰────╯"]);
    }

    #[test]
    fn test_bottom_border_underlines() {
        let node = Node::column_styled(
            vec![Node::text("abc")],
            Style::new(),
            Layout::new().border(Border::Bottom),
        );
        assert_eq!(plain(&node), vec!["abc", "───"]);
    }

    #[test]
    fn test_leaf_glyphs() {
        let node = Node::row_styled(
            vec![
                Node::checkbox("c", true, "Check"),
                Node::checkbox("d", false, "Check"),
                Node::button("b", "go"),
                Node::spinner(),
            ],
            Style::new(),
            Layout::new().gap(1),
        );
        assert_eq!(plain(&node), vec!["[x] [ ] (go) ⠋"]);
    }

    #[test]
    fn test_style_inherited_from_container() {
        let node = Node::row_styled(
            vec![Node::text("x")],
            Style::new().bg(Color::Selected),
            Layout::new(),
        );
        let lines = render_lines(&node);
        assert_eq!(lines[0].spans[0].style.bg, Some(Color::Selected));
    }

    #[test]
    fn test_line_truncate_across_spans() {
        let mut line = Line::new();
        line.push_str("abc", Style::new());
        line.push_str("def", Style::new().bold());
        line.truncate(5);
        assert_eq!(line.plain(), "abcd…");
        assert!(line.spans[1].style.bold);
    }
}
