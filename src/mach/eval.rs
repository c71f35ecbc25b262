use super::{Operation, Var};
use crate::error;
use crate::lang::ast::{Comparator, Expression};
use crate::lang::{Error, Operator};

type Result<T> = std::result::Result<T, Error>;

/// Evaluates an arithmetic expression. Reads variables but never changes
/// them. The left operand is always evaluated before the right.
pub fn evaluate(expr: &Expression, var: &Var) -> Result<i32> {
    use Expression::*;
    match expr {
        Constant(n) => Ok(*n),
        Identifier(name) => var.fetch(name),
        Compound(op, lhs, rhs) => {
            let f = Operation::for_operator(*op)?;
            let l = evaluate(lhs, var)?;
            let r = evaluate(rhs, var)?;
            f(l, r)
        }
    }
}

/// Evaluates `name = expression`, stores the result and returns it.
pub fn assign(expr: &Expression, var: &mut Var) -> Result<i32> {
    match expr {
        Expression::Compound(Operator::Equal, lhs, rhs) => match lhs.as_ref() {
            Expression::Identifier(name) => {
                let value = evaluate(rhs, var)?;
                var.store(name, value);
                Ok(value)
            }
            _ => Err(error!(SyntaxError; "EXPECTED IDENTIFIER")),
        },
        _ => Err(error!(SyntaxError; "EXPECTED ASSIGNMENT")),
    }
}

pub fn compare(lhs: &Expression, cmp: Comparator, rhs: &Expression, var: &Var) -> Result<bool> {
    let l = evaluate(lhs, var)?;
    let r = evaluate(rhs, var)?;
    Ok(cmp.test(l, r))
}
