use super::eval::{assign, compare, evaluate};
use super::{Console, Var};
use crate::lang::ast::Statement;
use crate::lang::{Error, LineNumber};
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

pub const INPUT_PROMPT: &str = " ? ";
pub const INVALID_NUMBER: &str = "INVALID NUMBER";

/// What the program should do after a statement executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Next,
    Jump(LineNumber),
    Stop,
}

/// Executes one statement against variable memory. Cursor movement is
/// returned rather than applied; in direct mode the caller ignores it.
pub fn execute(statement: &Statement, var: &mut Var, console: &mut dyn Console) -> Result<Flow> {
    use Statement::*;
    match statement {
        Rem => Ok(Flow::Next),
        Let(expr) => {
            assign(expr, var)?;
            Ok(Flow::Next)
        }
        Print(expr) => {
            let value = evaluate(expr, var)?;
            console.print_line(&value.to_string());
            Ok(Flow::Next)
        }
        Input(var_name) => {
            let value = input(console);
            var.store(var_name, value);
            Ok(Flow::Next)
        }
        End => Ok(Flow::Stop),
        Goto(target) => Ok(Flow::Jump(*target)),
        If(lhs, cmp, rhs, target) => {
            if compare(lhs, *cmp, rhs, var)? {
                Ok(Flow::Jump(*target))
            } else {
                Ok(Flow::Next)
            }
        }
    }
}

fn input(console: &mut dyn Console) -> i32 {
    loop {
        let s = console.read_line(INPUT_PROMPT);
        match s.trim().parse::<i32>() {
            Ok(value) => return value,
            Err(_) => {
                debug!(input = %s.trim(), "rejected input");
                console.print_line(INVALID_NUMBER);
            }
        }
    }
}
