use super::ast::Statement;
use super::{lex, parse, Error, LineNumber, Token, Word};

/// ## One line of text as entered
///
/// Keeps the original text for `LIST` next to its tokens.

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: Option<LineNumber>,
    source: String,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        let (number, tokens) = lex(s);
        Line {
            number,
            source: s.trim_end_matches(|c| c == '\r' || c == '\n').to_string(),
            tokens,
        }
    }

    pub fn number(&self) -> Option<LineNumber> {
        self.number
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The session command this line starts with, if it is direct.
    pub fn command(&self) -> Option<Word> {
        if !self.is_direct() {
            return None;
        }
        match self.tokens.first() {
            Some(Token::Word(word)) if word.is_command() => Some(*word),
            _ => None,
        }
    }

    pub fn ast(&self) -> Result<Statement, Error> {
        match parse(&self.tokens) {
            Err(e) => match self.number {
                Some(number) => Err(e.in_line_number(number)),
                None => Err(e),
            },
            Ok(r) => Ok(r),
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
