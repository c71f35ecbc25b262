//! # BASIC
//!
//! Interactive front end for the integer BASIC interpreter.
//!

mod term;

fn main() {
    term::main();
}
