//! Parser for OpenStep `.strings` files.
//!
//! Only the subset found in localization tables is accepted:
//!
//! ```text
//! /* block comment */
//! // line comment
//! "key" = "value";
//! ```

use std::iter::Peekable;
use std::str::Chars;

/// Syntax error at a 1-based line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringsSyntaxError {
    pub line: usize,
    pub message: String,
}

struct Cursor<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
            line: 1,
        }
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.chars.next();
        if ch == Some('\n') {
            self.line += 1;
        }
        ch
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn error(&self, message: impl Into<String>) -> StringsSyntaxError {
        StringsSyntaxError {
            line: self.line,
            message: message.into(),
        }
    }

    /// Skips whitespace and comments.
    fn skip_trivia(&mut self) -> Result<(), StringsSyntaxError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() || c == '\u{feff}' => {
                    self.next();
                }
                Some('/') => {
                    self.next();
                    match self.next() {
                        Some('/') => {
                            while let Some(c) = self.next() {
                                if c == '\n' {
                                    break;
                                }
                            }
                        }
                        Some('*') => {
                            let mut prev = '\0';
                            loop {
                                match self.next() {
                                    Some('/') if prev == '*' => break,
                                    Some(c) => prev = c,
                                    None => return Err(self.error("unterminated comment")),
                                }
                            }
                        }
                        _ => return Err(self.error("unexpected `/`")),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn expect(&mut self, wanted: char) -> Result<(), StringsSyntaxError> {
        self.skip_trivia()?;
        match self.next() {
            Some(c) if c == wanted => Ok(()),
            Some(c) => Err(self.error(format!("expected `{}`, found `{}`", wanted, c))),
            None => Err(self.error(format!("expected `{}`, found end of file", wanted))),
        }
    }

    fn quoted(&mut self) -> Result<String, StringsSyntaxError> {
        self.expect('"')?;
        let mut out = String::new();
        loop {
            match self.next() {
                Some('"') => return Ok(out),
                Some('\\') => match self.next() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('r') => out.push('\r'),
                    Some(c @ ('"' | '\\' | '\'')) => out.push(c),
                    Some(c) => return Err(self.error(format!("unknown escape `\\{}`", c))),
                    None => return Err(self.error("unterminated string")),
                },
                Some(c) => out.push(c),
                None => return Err(self.error("unterminated string")),
            }
        }
    }
}

/// Parses `"key" = "value";` pairs in file order.
pub fn parse_strings(text: &str) -> Result<Vec<(String, String)>, StringsSyntaxError> {
    let mut cursor = Cursor::new(text);
    let mut pairs = Vec::new();

    loop {
        cursor.skip_trivia()?;
        if cursor.peek().is_none() {
            return Ok(pairs);
        }
        let key = cursor.quoted()?;
        cursor.expect('=')?;
        let value = cursor.quoted()?;
        cursor.expect(';')?;
        pairs.push((key, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_and_comments() {
        let text = r#"
/* Aliases */
"a.old" = "a.new";
// trailing
"b.old"="b.new" ;
"#;
        let pairs = parse_strings(text).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("a.old".to_string(), "a.new".to_string()),
                ("b.old".to_string(), "b.new".to_string()),
            ]
        );
    }

    #[test]
    fn decodes_escapes() {
        let pairs = parse_strings(r#""q\"k" = "line\nnext\\";"#).unwrap();
        assert_eq!(pairs[0].0, "q\"k");
        assert_eq!(pairs[0].1, "line\nnext\\");
    }

    #[test]
    fn empty_input() {
        assert!(parse_strings("").unwrap().is_empty());
        assert!(parse_strings("  /* nothing */ \n").unwrap().is_empty());
    }

    #[test]
    fn missing_semicolon_reports_line() {
        let err = parse_strings("\"a\" = \"b\";\n\"c\" = \"d\"\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(err.message.contains("`;`"));
    }

    #[test]
    fn unterminated_comment() {
        assert!(parse_strings("/* open").is_err());
    }
}
