use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Report;
use std::{path::PathBuf, str::FromStr};

/// One line of an edit script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert { location: usize, text: String },
    Append(String),
    Delete { start: usize, end: usize },
    Split(usize),
    Rebalance,
    Print,
    Dump,
    Stats,
    Write(Option<PathBuf>),
}

/// Splits off the first whitespace separated word. The remainder keeps its
/// spacing apart from the single separator after the word.
fn next_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(index) => {
            let mut rest = input[index..].chars();
            rest.next();
            (&input[..index], rest.as_str())
        }
        None => (input, ""),
    }
}

fn parse_index(word: &str, name: &str) -> Result<usize, Report> {
    if word.is_empty() {
        return Err(eyre!("Missing {}", name));
    }

    word.parse::<usize>().wrap_err_with(|| format!("Invalid {} '{}'", name, word))
}

/// Expands `\n`, `\t` and `\\` in command text.
pub fn unescape(text: &str) -> Result<String, Report> {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some(other) => return Err(eyre!("Unknown escape '\\{}'", other)),
            None => return Err(eyre!("Trailing '\\' in '{}'", text)),
        }
    }

    Ok(result)
}

impl FromStr for Command {
    type Err = Report;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (name, rest) = next_word(line);

        let command = match name {
            "i" | "insert" => {
                let (location, text) = next_word(rest);
                Command::Insert {
                    location: parse_index(location, "location")?,
                    text: unescape(text)?,
                }
            }
            "a" | "append" => Command::Append(unescape(rest)?),
            "d" | "delete" => {
                let (start, rest) = next_word(rest);
                let (end, _) = next_word(rest);
                Command::Delete {
                    start: parse_index(start, "start")?,
                    end: parse_index(end, "end")?,
                }
            }
            "s" | "split" => Command::Split(parse_index(next_word(rest).0, "position")?),
            "rb" | "rebalance" => Command::Rebalance,
            "p" | "print" => Command::Print,
            "dump" => Command::Dump,
            "stats" => Command::Stats,
            "w" | "write" => match next_word(rest).0 {
                "" => Command::Write(None),
                path => Command::Write(Some(PathBuf::from(path))),
            },
            "" => return Err(eyre!("Empty command")),
            other => return Err(eyre!("Unknown command '{}'", other)),
        };

        Ok(command)
    }
}

/// True for lines a script runner should skip.
pub fn is_blank_or_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}
