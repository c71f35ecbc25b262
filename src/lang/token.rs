use std::collections::HashMap;

thread_local!(
    static STRING_TO_TOKEN: HashMap<&'static str, Token> = Word::ALL
        .iter()
        .map(|w| Token::Word(*w))
        .chain(Operator::ALL.iter().map(|op| Token::Operator(*op)))
        .chain(vec![Token::LParen, Token::RParen])
        .map(|t| (t.as_static_str(), t))
        .collect();
);

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Literal(String),
    Word(Word),
    Operator(Operator),
    Ident(String),
    LParen,
    RParen,
}

impl Token {
    pub fn from_string(s: &str) -> Option<Token> {
        STRING_TO_TOKEN.with(|stt| stt.get(s).cloned())
    }

    fn as_static_str(&self) -> &'static str {
        match self {
            Token::Word(w) => w.as_str(),
            Token::Operator(op) => op.as_str(),
            Token::LParen => "(",
            Token::RParen => ")",
            Token::Unknown(_) | Token::Literal(_) | Token::Ident(_) => "",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Clear,
    End,
    Goto,
    Help,
    If,
    Input,
    Let,
    List,
    Print,
    Quit,
    Rem,
    Run,
    Then,
}

impl Word {
    const ALL: [Word; 13] = [
        Word::Clear,
        Word::End,
        Word::Goto,
        Word::Help,
        Word::If,
        Word::Input,
        Word::Let,
        Word::List,
        Word::Print,
        Word::Quit,
        Word::Rem,
        Word::Run,
        Word::Then,
    ];

    pub fn as_str(&self) -> &'static str {
        use Word::*;
        match self {
            Clear => "CLEAR",
            End => "END",
            Goto => "GOTO",
            Help => "HELP",
            If => "IF",
            Input => "INPUT",
            Let => "LET",
            List => "LIST",
            Print => "PRINT",
            Quit => "QUIT",
            Rem => "REM",
            Run => "RUN",
            Then => "THEN",
        }
    }

    /// Session commands are only recognized without a line number.
    pub fn is_command(&self) -> bool {
        use Word::*;
        matches!(self, Clear | Help | List | Quit | Run)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    Less,
    Greater,
}

impl Operator {
    const ALL: [Operator; 7] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Multiply,
        Operator::Divide,
        Operator::Equal,
        Operator::Less,
        Operator::Greater,
    ];

    pub fn as_str(&self) -> &'static str {
        use Operator::*;
        match self {
            Plus => "+",
            Minus => "-",
            Multiply => "*",
            Divide => "/",
            Equal => "=",
            Less => "<",
            Greater => ">",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let t = Token::from_string("REM");
        assert_eq!(t, Some(Token::Word(Word::Rem)));
        let t = Token::from_string("<");
        assert_eq!(t, Some(Token::Operator(Operator::Less)));
        let t = Token::from_string("PICKLES");
        assert_eq!(t, None);
    }

    #[test]
    fn test_keywords_are_upper_case_only() {
        assert_eq!(Token::from_string("rem"), None);
        assert_eq!(Token::from_string("Print"), None);
    }

    #[test]
    fn test_commands() {
        assert!(Word::Run.is_command());
        assert!(Word::List.is_command());
        assert!(!Word::Goto.is_command());
        assert!(!Word::Let.is_command());
    }
}
