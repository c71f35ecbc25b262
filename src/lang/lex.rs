use super::{token::*, LineNumber};

/// Splits a line of text into its line number and tokens.
///
/// A leading integer in the range of line numbers becomes the line number.
/// Anything else, including an out of range number, stays in the token
/// stream for the parser to reject.
pub fn lex(s: &str) -> (Option<LineNumber>, Vec<Token>) {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars().peek() {
            if !is_basic_whitespace(*pk) {
                break;
            }
            self.chars().next();
        }
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_basic_digit(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        debug_assert!(!s.is_empty(), "Failed to tokenize number.");
        Some(Token::Literal(s))
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_basic_alphabetic(*pk) && !is_basic_digit(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        debug_assert!(!s.is_empty(), "Failed to tokenize alphabetic.");
        match Token::from_string(&s) {
            Some(token @ Token::Word(_)) => Some(token),
            _ => Some(Token::Ident(s)),
        }
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars().next()?;
        let s = ch.to_string();
        match Token::from_string(&s) {
            Some(token) => Some(token),
            None => Some(Token::Unknown(s)),
        }
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    remark: bool,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.whitespace();
        let pk = *self.chars.peek()?;
        if self.remark {
            let rest = self.chars.by_ref().collect::<String>();
            return Some(Token::Unknown(rest.trim_end().to_string()));
        }
        if is_basic_digit(pk) {
            return self.number();
        }
        if is_basic_alphabetic(pk) {
            let r = self.alphabetic();
            if let Some(Token::Word(Word::Rem)) = r {
                self.remark = true;
            }
            return r;
        }
        self.minutia()
    }
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> (Option<LineNumber>, Vec<Token>) {
        let mut tokens: Vec<Token> = BasicLexer {
            chars: s.chars().peekable(),
            remark: false,
        }
        .collect();
        let line_number = BasicLexer::line_number(tokens.first());
        if line_number.is_some() {
            tokens.remove(0);
        }
        (line_number, tokens)
    }

    fn line_number(token: Option<&Token>) -> Option<LineNumber> {
        if let Some(Token::Literal(s)) = token {
            if let Ok(n) = s.parse::<LineNumber>() {
                if n > 0 {
                    return Some(n);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remark_keeps_rest_of_line() {
        let (ln, tokens) = lex("10 REM   IF x THEN 20  \r\n");
        assert_eq!(ln, Some(10));
        assert_eq!(
            tokens,
            vec![
                Token::Word(Word::Rem),
                Token::Unknown("IF x THEN 20".to_string())
            ]
        );
    }

    #[test]
    fn test_out_of_range_line_number_stays_a_literal() {
        let (ln, tokens) = lex("0 PRINT 1");
        assert_eq!(ln, None);
        assert_eq!(tokens[0], Token::Literal("0".to_string()));
        let (ln, tokens) = lex("4294967296 PRINT 1");
        assert_eq!(ln, None);
        assert_eq!(tokens[0], Token::Literal("4294967296".to_string()));
        let (ln, _) = lex("4294967295 PRINT 1");
        assert_eq!(ln, Some(4_294_967_295));
    }
}
