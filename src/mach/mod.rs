/*!
## Rust Machine Module

This Rust module evaluates expressions, executes statements, and runs
stored programs.

*/

mod console;
mod eval;
mod exec;
mod listing;
mod operation;
mod program;
mod runtime;
mod var;

pub use console::Console;
pub use eval::{assign, compare, evaluate};
pub use exec::{execute, Flow, INPUT_PROMPT, INVALID_NUMBER};
pub use listing::Listing;
pub use operation::Operation;
pub use program::{Program, State};
pub use runtime::{Event, Runtime};
pub use var::Var;

#[cfg(test)]
mod tests;
