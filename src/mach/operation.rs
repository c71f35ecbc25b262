use crate::error;
use crate::lang::{Error, Operator};

type Result<T> = std::result::Result<T, Error>;

/// Integer arithmetic. Overflow wraps so every evaluation of the same
/// operands gives the same result.
pub struct Operation {}

impl Operation {
    pub fn for_operator(op: Operator) -> Result<fn(i32, i32) -> Result<i32>> {
        use Operator::*;
        let f: fn(i32, i32) -> Result<i32> = match op {
            Plus => Operation::sum,
            Minus => Operation::subtract,
            Multiply => Operation::multiply,
            Divide => Operation::divide,
            Equal | Less | Greater => {
                return Err(error!(SyntaxError; "RELATIONAL OPERATOR IN EXPRESSION"))
            }
        };
        Ok(f)
    }

    pub fn sum(lhs: i32, rhs: i32) -> Result<i32> {
        Ok(lhs.wrapping_add(rhs))
    }

    pub fn subtract(lhs: i32, rhs: i32) -> Result<i32> {
        Ok(lhs.wrapping_sub(rhs))
    }

    pub fn multiply(lhs: i32, rhs: i32) -> Result<i32> {
        Ok(lhs.wrapping_mul(rhs))
    }

    pub fn divide(lhs: i32, rhs: i32) -> Result<i32> {
        if rhs == 0 {
            return Err(error!(DivideByZero));
        }
        Ok(lhs.wrapping_div(rhs))
    }
}
