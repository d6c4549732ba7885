use color_eyre::{eyre::eyre, eyre::WrapErr, Report};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use text_rope::Rope;
use tracing::{debug, info};

use crate::editor::command::{is_blank_or_comment, Command};
use crate::util::Display;

/// Holds the rope being edited and applies script commands to it.
pub struct Editor<W: Write> {
    pub(crate) rope: Rope,
    pub(crate) filename: Option<PathBuf>,
    pub(crate) display: Display<W>,
}

impl<W: Write> Editor<W> {
    pub fn new(display: Display<W>) -> Self {
        Self {
            rope: Rope::new(),
            filename: None,
            display,
        }
    }

    pub fn load_text(&mut self, text: &str) {
        self.rope = Rope::from(text);
    }

    pub fn load_file(&mut self, filename: &Path) -> Result<(), Report> {
        let text = fs::read_to_string(filename)
            .wrap_err_with(|| format!("Error opening file '{}'", filename.display()))?;

        self.rope = Rope::from(text);
        self.filename = Some(filename.to_path_buf());
        info!(file = %filename.display(), len = self.rope.len(), "loaded file");
        Ok(())
    }

    /// Writes the rope leaf by leaf, without flattening it first.
    pub fn save_file(&self, filename: &Path) -> Result<(), Report> {
        let file = File::create(filename)
            .wrap_err_with(|| format!("Error creating file '{}'", filename.display()))?;
        let mut out = BufWriter::new(file);

        for leaf in self.rope.leaves() {
            out.write_all(leaf.as_bytes())?;
        }
        out.flush()?;

        info!(file = %filename.display(), len = self.rope.len(), "wrote file");
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<(), Report> {
        debug!(?command, "execute");

        match command {
            Command::Insert { location, text } => self.rope = self.rope.insert(location, &text)?,
            Command::Append(text) => self.rope = self.rope.append(&text),
            Command::Delete { start, end } => self.rope = self.rope.delete_range(start, end)?,
            Command::Split(position) => {
                let (left, right) = self.rope.split(position)?;
                self.display.print_text(&right)?;
                self.rope = left;
            }
            Command::Rebalance => self.rope = self.rope.rebalance(),
            Command::Print => self.display.print_text(&self.rope)?,
            Command::Dump => self.display.print_dump(&self.rope)?,
            Command::Stats => self.display.print_stats(&self.rope)?,
            Command::Write(path) => match path.as_deref().or(self.filename.as_deref()) {
                Some(filename) => self.save_file(filename)?,
                None => return Err(eyre!("No filename specified")),
            },
        }

        Ok(())
    }

    /// Parses and applies each script line in order, stopping at the first
    /// failure. Blank lines and `#` comments are skipped.
    pub fn run<'a, I>(&mut self, lines: I) -> Result<(), Report>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for (number, line) in lines.into_iter().enumerate() {
            if is_blank_or_comment(line) {
                continue;
            }

            line.parse::<Command>()
                .and_then(|command| self.execute(command))
                .wrap_err_with(|| format!("Command {} failed: '{}'", number + 1, line.trim()))?;
        }

        Ok(())
    }
}
