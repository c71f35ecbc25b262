use super::ast::*;
use super::{token::*, Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// Builds the single statement on a line. The tokens must not include the
/// line number.
pub fn parse(tokens: &[Token]) -> Result<Statement> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Statement> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
        };
        let statement = parse.statement()?;
        match parse.next() {
            None => Ok(statement),
            Some(_) => Err(error!(SyntaxError; "UNEXPECTED TOKEN")),
        }
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        self.token_stream.next()
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    fn statement(&mut self) -> Result<Statement> {
        match self.next() {
            Some(Token::Word(word)) => Statement::for_word(self, *word),
            _ => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    /// Arithmetic only. A relational operator ends the expression and is
    /// left for the caller, which decides whether it is allowed there.
    fn expression(&mut self) -> Result<Expression> {
        const UNARY_PRECEDENCE: usize = 30;
        fn parse(this: &mut Parser, precedence: usize) -> Result<Expression> {
            let mut lhs = match this.next() {
                Some(Token::LParen) => {
                    let expr = this.expression()?;
                    this.expect(Token::RParen)?;
                    expr
                }
                Some(Token::Ident(name)) => Expression::Identifier(name.clone()),
                Some(Token::Literal(s)) => Expression::Constant(Parser::integer(s)?),
                Some(Token::Operator(Operator::Minus)) => {
                    let operand = parse(this, UNARY_PRECEDENCE)?;
                    Expression::compound(Operator::Minus, Expression::Constant(0), operand)
                }
                _ => return Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
            };
            while let Some(Token::Operator(op)) = this.peek() {
                let op = *op;
                let op_precedence = match Expression::op_precedence(op) {
                    Some(p) => p,
                    None => break,
                };
                if op_precedence < precedence {
                    break;
                }
                this.next();
                let rhs = parse(this, op_precedence + 1)?;
                lhs = Expression::compound(op, lhs, rhs);
            }
            Ok(lhs)
        }
        parse(self, 0)
    }

    fn ident(&mut self) -> Result<String> {
        match self.next() {
            Some(Token::Ident(name)) => Ok(name.clone()),
            _ => Err(error!(SyntaxError; "EXPECTED IDENTIFIER")),
        }
    }

    fn line_number(&mut self) -> Result<LineNumber> {
        match self.next() {
            Some(Token::Literal(s)) => s
                .parse::<LineNumber>()
                .map_err(|_| error!(SyntaxError; "INVALID LINE NUMBER")),
            _ => Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        }
    }

    fn comparator(&mut self) -> Result<Comparator> {
        if let Some(Token::Operator(op)) = self.next() {
            if let Some(cmp) = Comparator::for_operator(*op) {
                return Ok(cmp);
            }
        }
        Err(error!(SyntaxError; "EXPECTED COMPARISON"))
    }

    fn integer(s: &str) -> Result<i32> {
        s.parse::<i32>().map_err(|_| error!(SyntaxError; "INVALID NUMBER"))
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        use Token::*;
        Err(error!(SyntaxError;
            match token {
                Unknown(_) => "UNEXPECTED TOKEN",
                Literal(_) => "EXPECTED LITERAL",
                Word(_) => "EXPECTED RESERVED WORD",
                Operator(_) => "EXPECTED OPERATOR",
                Ident(_) => "EXPECTED IDENTIFIER",
                LParen => "EXPECTED LEFT PARENTHESIS",
                RParen => "EXPECTED RIGHT PARENTHESIS",
            }
        ))
    }
}

impl Expression {
    fn op_precedence(op: Operator) -> Option<usize> {
        use Operator::*;
        match op {
            Plus | Minus => Some(10),
            Multiply | Divide => Some(20),
            Equal | Less | Greater => None,
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: Word) -> Result<Statement> {
        use Word::*;
        match word {
            Rem => Self::r#rem(parse),
            Let => Self::r#let(parse),
            Print => Self::r#print(parse),
            Input => Self::r#input(parse),
            End => Ok(Statement::End),
            Goto => Self::r#goto(parse),
            If => Self::r#if(parse),
            Clear | Help | List | Quit | Run | Then => {
                Err(error!(SyntaxError; "EXPECTED STATEMENT"))
            }
        }
    }

    fn r#rem(parse: &mut Parser) -> Result<Statement> {
        while parse.next().is_some() {}
        Ok(Statement::Rem)
    }

    fn r#let(parse: &mut Parser) -> Result<Statement> {
        let lhs = parse.expression()?;
        if !matches!(lhs, Expression::Identifier(_)) {
            return Err(error!(SyntaxError; "EXPECTED IDENTIFIER"));
        }
        parse.expect(Token::Operator(Operator::Equal))?;
        let rhs = parse.expression()?;
        Ok(Statement::Let(Expression::compound(Operator::Equal, lhs, rhs)))
    }

    fn r#print(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Print(parse.expression()?))
    }

    fn r#input(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Input(parse.ident()?))
    }

    fn r#goto(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Goto(parse.line_number()?))
    }

    fn r#if(parse: &mut Parser) -> Result<Statement> {
        let lhs = parse.expression()?;
        let cmp = parse.comparator()?;
        let rhs = parse.expression()?;
        parse.expect(Token::Word(Word::Then))?;
        let target = parse.line_number()?;
        Ok(Statement::If(lhs, cmp, rhs, target))
    }
}
