//! Styled printing of rendered lines.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{
        Attribute, Color as CtColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
};
use lintel::prelude::*;

/// Map a theme token to a terminal color.
fn terminal_color(color: Color) -> CtColor {
    match color {
        Color::Reset => CtColor::Reset,
        Color::Text => CtColor::White,
        Color::Muted => CtColor::DarkGrey,
        Color::Primary => CtColor::Cyan,
        Color::Surface => CtColor::Rgb { r: 40, g: 44, b: 52 },
        Color::Selected => CtColor::Rgb { r: 30, g: 58, b: 95 },
        Color::Border => CtColor::Grey,
        Color::Success => CtColor::Green,
        Color::Warning => CtColor::Yellow,
        Color::Error => CtColor::Red,
    }
}

/// Writes headings, notes and widget trees to a terminal.
pub struct Printer<W: Write> {
    out: W,
}

impl Printer<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> Printer<W> {
    #[cfg(test)]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Section heading.
    pub fn heading(&mut self, title: &str) -> io::Result<()> {
        let line = Line::styled(title, Style::new().fg(Color::Primary).bold());
        writeln!(self.out)?;
        self.line(&line)
    }

    /// Step description, printed before the state it produces.
    pub fn step(&mut self, text: &str) -> io::Result<()> {
        self.line(&Line::styled(format!("» {text}"), Style::new().fg(Color::Warning)))
    }

    pub fn note(&mut self, text: &str) -> io::Result<()> {
        self.line(&Line::styled(text, Style::new().fg(Color::Muted)))
    }

    /// Render and print a view tree.
    pub fn node(&mut self, node: &Node) -> io::Result<()> {
        for line in render_lines(node) {
            self.line(&line)?;
        }
        Ok(())
    }

    fn line(&mut self, line: &Line) -> io::Result<()> {
        for span in &line.spans {
            self.span(span)?;
        }
        queue!(self.out, Print("\n"))?;
        self.out.flush()
    }

    fn span(&mut self, span: &Span) -> io::Result<()> {
        let style = span.style;
        if let Some(fg) = style.fg {
            queue!(self.out, SetForegroundColor(terminal_color(fg)))?;
        }
        if let Some(bg) = style.bg {
            queue!(self.out, SetBackgroundColor(terminal_color(bg)))?;
        }
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
        }
        if style.underline {
            queue!(self.out, SetAttribute(Attribute::Underlined))?;
        }
        queue!(
            self.out,
            Print(&span.content),
            SetAttribute(Attribute::Reset),
            ResetColor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_prints_text() {
        let mut printer = Printer::new(Vec::new());
        printer
            .node(&Node::row(vec![Node::checkbox("c", true, "Check"), Node::text(" done")]))
            .unwrap();

        let output = String::from_utf8(printer.into_inner()).unwrap();
        assert!(output.contains("[x]"));
        assert!(output.contains(" done"));
        assert!(output.ends_with('\n'));
    }
}
