use super::{LineNumber, Operator};

/// Statements own their expression trees outright.
#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Rem,
    Let(Expression),
    Print(Expression),
    Input(String),
    End,
    Goto(LineNumber),
    If(Expression, Comparator, Expression, LineNumber),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Constant(i32),
    Identifier(String),
    Compound(Operator, Box<Expression>, Box<Expression>),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Comparator {
    Equal,
    Less,
    Greater,
}

impl Expression {
    pub fn compound(op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        Expression::Compound(op, Box::new(lhs), Box::new(rhs))
    }
}

impl Comparator {
    pub fn for_operator(op: Operator) -> Option<Comparator> {
        match op {
            Operator::Equal => Some(Comparator::Equal),
            Operator::Less => Some(Comparator::Less),
            Operator::Greater => Some(Comparator::Greater),
            Operator::Plus | Operator::Minus | Operator::Multiply | Operator::Divide => None,
        }
    }

    pub fn test(self, lhs: i32, rhs: i32) -> bool {
        match self {
            Comparator::Equal => lhs == rhs,
            Comparator::Less => lhs < rhs,
            Comparator::Greater => lhs > rhs,
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Expression::Constant(n) => write!(f, "{}", n),
            Expression::Identifier(name) => write!(f, "{}", name),
            Expression::Compound(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}
