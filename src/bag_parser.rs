use std::fs;

use log::info;
use regex::Regex;

use crate::bag_error::{BagError, Result};
use crate::bag_lang::Element;

/// One line of a bag script.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Element),
    Remove(Element, i64),
    Get(Element),
    Size,
    Render,
}

pub struct CommandParser {
    command: Regex,
}

impl CommandParser {
    pub fn new() -> Self {
        // `(name arg*)`, the arguments are split on whitespace afterwards
        let command = Regex::new(r"^\(\s*([a-z]+)((?:\s+[^\s()]+)*)\s*\)$")
            .expect("command pattern is valid");
        CommandParser { command }
    }

    /// Parses a single line. Blank lines and `;` comments yield `None`.
    pub fn parse_line(&self, line_number: usize, line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            return Ok(None);
        }

        let error = |message: String| BagError::Parse {
            line: line_number,
            message,
        };

        let captures = self
            .command
            .captures(line)
            .ok_or_else(|| error(format!("Invalid command format: '{}'", line)))?;
        let name = &captures[1];
        let args: Vec<&str> = captures[2].split_whitespace().collect();

        let command = match (name, args.as_slice()) {
            ("add", [element]) => Command::Add(Element::parse(element)),
            ("remove", [element, count]) => {
                let n = count
                    .parse::<i64>()
                    .map_err(|e| error(format!("Invalid count '{}': {}", count, e)))?;
                Command::Remove(Element::parse(element), n)
            }
            ("get", [element]) => Command::Get(Element::parse(element)),
            ("size", []) => Command::Size,
            ("render", []) => Command::Render,
            ("add" | "remove" | "get" | "size" | "render", _) => {
                return Err(error(format!(
                    "Wrong number of arguments for '{}': {}",
                    name,
                    args.len()
                )))
            }
            _ => return Err(error(format!("Unsupported command: {}", name))),
        };
        Ok(Some(command))
    }

    pub fn parse_script(&self, content: &str) -> Result<Vec<Command>> {
        let mut commands = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if let Some(command) = self.parse_line(index + 1, line)? {
                commands.push(command);
            }
        }
        Ok(commands)
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_commands(file_path: &str) -> Result<Vec<Command>> {
    let content = fs::read_to_string(file_path).map_err(|source| BagError::Io {
        path: file_path.to_string(),
        source,
    })?;
    let commands = CommandParser::new().parse_script(&content)?;
    info!("Loaded {} commands from {}", commands.len(), file_path);
    Ok(commands)
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    fn symbol(s: &str) -> Element {
        Element::Symbol(s.to_string())
    }

    #[test]
    fn parses_every_command() {
        let script = "\
; warm up
(add a)

(remove a 2)
(get a)
(size)
( render )
";
        let commands = CommandParser::new().parse_script(script).unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Add(symbol("a")),
                Command::Remove(symbol("a"), 2),
                Command::Get(symbol("a")),
                Command::Size,
                Command::Render,
            ]
        );
    }

    #[test]
    fn negative_count_is_kept_for_the_multiset() {
        let parser = CommandParser::new();
        assert_eq!(
            parser.parse_line(1, "(remove x -1)").unwrap(),
            Some(Command::Remove(symbol("x"), -1))
        );
    }

    #[test]
    fn rejects_bad_lines() {
        let parser = CommandParser::new();
        for (line, expected) in [
            ("add a", "Invalid command format"),
            ("(pop a)", "Unsupported command"),
            ("(add)", "Wrong number of arguments"),
            ("(size 3)", "Wrong number of arguments"),
            ("(remove a many)", "Invalid count"),
        ] {
            match parser.parse_line(7, line) {
                Err(BagError::Parse { line: 7, message }) => {
                    assert!(message.contains(expected), "{}: {}", line, message)
                }
                other => panic!("{}: unexpected {:?}", line, other),
            }
        }
    }

    #[test]
    fn reports_line_numbers() {
        let err = CommandParser::new()
            .parse_script("(add a)\n\n(oops)\n")
            .unwrap_err();
        assert!(matches!(err, BagError::Parse { line: 3, .. }));
    }

    #[test]
    fn missing_file() {
        let err = load_commands("/nonexistent/script.bag").unwrap_err();
        assert!(matches!(err, BagError::Io { .. }));
    }
}
