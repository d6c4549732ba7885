use color_eyre::Report;
use crossterm::{
    queue,
    style::{self, Stylize},
};
use std::io::{self, IsTerminal, Write};
use text_rope::{DumpKind, Rope};

/// Writes rope text, statistics and tree dumps. Labels are coloured only when
/// the output is a terminal.
pub struct Display<W: Write> {
    pub(crate) out: W,
    styled: bool,
}

impl Display<io::Stdout> {
    pub fn stdout() -> Self {
        let out = io::stdout();
        let styled = out.is_terminal();
        Self { out, styled }
    }
}

impl<W: Write> Display<W> {
    #[cfg(test)]
    pub fn plain(out: W) -> Self {
        Self { out, styled: false }
    }

    fn label(&mut self, label: &str) -> Result<(), Report> {
        if self.styled {
            queue!(self.out, style::PrintStyledContent(label.bold()))?;
        } else {
            queue!(self.out, style::Print(label))?;
        }
        Ok(())
    }

    pub fn print_text(&mut self, rope: &Rope) -> Result<(), Report> {
        for leaf in rope.leaves() {
            self.out.write_all(leaf.as_bytes())?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn print_stats(&mut self, rope: &Rope) -> Result<(), Report> {
        let rows = [
            ("length", rope.len().to_string()),
            ("height", rope.height().to_string()),
            ("leaves", rope.leaf_count().to_string()),
            ("balanced", rope.is_balanced().to_string()),
        ];

        for (name, value) in rows {
            self.label(&format!("{:<10}", name))?;
            queue!(self.out, style::Print(value), style::Print("\n"))?;
        }

        self.out.flush()?;
        Ok(())
    }

    pub fn print_dump(&mut self, rope: &Rope) -> Result<(), Report> {
        for line in rope.dump().lines() {
            if !self.styled {
                writeln!(self.out, "{}", line)?;
                continue;
            }

            let indent = " ".repeat(line.depth * 2);
            match line.kind {
                DumpKind::Branch => queue!(
                    self.out,
                    style::Print(indent),
                    style::PrintStyledContent("branch".dark_cyan()),
                    style::Print(format!(" size={} height={}\n", line.size, line.height)),
                )?,
                DumpKind::Leaf => queue!(
                    self.out,
                    style::Print(indent),
                    style::PrintStyledContent("leaf".green()),
                    style::Print(format!(" size={} ", line.size)),
                    style::PrintStyledContent(
                        format!("{:?}", line.text.unwrap_or_default()).italic()
                    ),
                    style::Print("\n"),
                )?,
                DumpKind::Absent => queue!(
                    self.out,
                    style::Print(indent),
                    style::PrintStyledContent("-".dark_grey()),
                    style::Print("\n"),
                )?,
            }
        }

        self.out.flush()?;
        Ok(())
    }
}
