//! Line renderer - styled lines to ANSI text.
//!
//! Each [`StyledLine`] becomes one or more output lines: the text is wrapped
//! to the configured width and continuation lines are indented under the
//! prefix. Styling is emitted with crossterm commands and reset at the end of
//! every line, so a partially written frame never leaks attributes.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};

use super::output::OutputBuffer;
use crate::error::Result;
use crate::layout::{string_width, wrap_text};
use crate::types::{Attr, Rgba, StyledLine};

/// Map a color onto crossterm's color model.
pub fn to_crossterm_color(color: Rgba) -> Color {
    if color.is_terminal_default() {
        Color::Reset
    } else if color.is_ansi() {
        Color::AnsiValue(color.ansi_index())
    } else {
        Color::Rgb {
            r: color.r as u8,
            g: color.g as u8,
            b: color.b as u8,
        }
    }
}

/// Map attribute flags onto crossterm attributes.
pub fn to_crossterm_attributes(attrs: Attr) -> Vec<Attribute> {
    [
        (Attr::BOLD, Attribute::Bold),
        (Attr::DIM, Attribute::Dim),
        (Attr::ITALIC, Attribute::Italic),
        (Attr::UNDERLINE, Attribute::Underlined),
        (Attr::INVERSE, Attribute::Reverse),
        (Attr::STRIKETHROUGH, Attribute::CrossedOut),
    ]
    .into_iter()
    .filter(|(flag, _)| attrs.contains(*flag))
    .map(|(_, attribute)| attribute)
    .collect()
}

/// Renders frames of styled lines.
#[derive(Debug)]
pub struct LineRenderer {
    output: OutputBuffer,
    color: bool,
    wrap_width: Option<usize>,
}

impl LineRenderer {
    /// `color` enables escape sequences; `wrap_width` (cells) enables wrapping.
    pub fn new(color: bool, wrap_width: Option<usize>) -> Self {
        Self {
            output: OutputBuffer::new(),
            color,
            wrap_width,
        }
    }

    /// Queue one frame into the internal buffer.
    pub fn queue_frame(&mut self, lines: &[StyledLine]) -> Result<()> {
        for line in lines {
            self.queue_line(line)?;
        }
        Ok(())
    }

    /// Render a frame and write it to `writer` in one go.
    pub fn render<W: Write>(&mut self, lines: &[StyledLine], writer: &mut W) -> Result<()> {
        self.queue_frame(lines)?;
        let bytes = self.output.len();
        self.output.flush_to(writer)?;
        log::debug!("rendered {} line(s), {bytes} bytes", lines.len());
        Ok(())
    }

    fn queue_line(&mut self, line: &StyledLine) -> Result<()> {
        let prefix_width = string_width(&line.prefix);
        let rows = match self.wrap_width {
            Some(width) => wrap_text(&line.text, width.saturating_sub(prefix_width).max(1)),
            None => vec![line.text.clone()],
        };

        if rows.is_empty() {
            queue!(self.output, Print(&line.prefix), Print("\n"))?;
            return Ok(());
        }

        let indent = " ".repeat(prefix_width);
        for (row_index, row) in rows.iter().enumerate() {
            let lead = if row_index == 0 { line.prefix.as_str() } else { indent.as_str() };
            if self.color {
                self.queue_styled(lead, row, line)?;
            } else {
                queue!(self.output, Print(lead), Print(row))?;
            }
            queue!(self.output, Print("\n"))?;
        }
        Ok(())
    }

    fn queue_styled(&mut self, lead: &str, row: &str, line: &StyledLine) -> Result<()> {
        queue!(self.output, SetForegroundColor(to_crossterm_color(line.fg)))?;
        for attribute in to_crossterm_attributes(line.attrs) {
            queue!(self.output, SetAttribute(attribute))?;
        }
        queue!(
            self.output,
            Print(lead),
            Print(row),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
        Ok(())
    }
}
