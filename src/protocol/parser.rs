//! Command line parsing
//!
//! Splits one input line into a command name and its arguments.

/// A tokenized input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub name: String,
    pub args: Vec<String>,
}

/// Splits `raw` on single spaces. Quoting and escaping are not supported, so
/// consecutive spaces yield empty arguments.
///
/// Returns `None` for a blank line.
pub fn parse_line(raw: &str) -> Option<ParsedLine> {
    let line = raw.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return None;
    }

    let mut parts = line.split(' ').map(str::to_string);
    let name = parts.next().unwrap_or_default();
    Some(ParsedLine {
        name,
        args: parts.collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(name: &str, args: &[&str]) -> Option<ParsedLine> {
        Some(ParsedLine {
            name: name.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        })
    }

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_line("pwd"), parsed("pwd", &[]));
        assert_eq!(parse_line("ls\n"), parsed("ls", &[]));
        assert_eq!(parse_line("clear\r\n"), parsed("clear", &[]));
    }

    #[test]
    fn test_parse_commands_with_args() {
        assert_eq!(parse_line("mkdir docs"), parsed("mkdir", &["docs"]));
        assert_eq!(parse_line("mv a b"), parsed("mv", &["a", "b"]));
        assert_eq!(
            parse_line("write f hello world"),
            parsed("write", &["f", "hello", "world"])
        );
    }

    #[test]
    fn test_parse_keeps_empty_tokens() {
        assert_eq!(parse_line("write f a  b"), parsed("write", &["f", "a", "", "b"]));
        assert_eq!(parse_line("mkdir "), parsed("mkdir", &[""]));
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("\r\n"), None);
    }

    #[test]
    fn test_case_is_kept() {
        assert_eq!(parse_line("LS Docs"), parsed("LS", &["Docs"]));
    }
}
