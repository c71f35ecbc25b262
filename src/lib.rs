//! # Integer BASIC
//!
//! A small line-numbered BASIC with integer arithmetic and scalar variables.
//!
//! Install with `cargo install tiny-basic` and run `basic`.
//! Type a program, then `RUN` it.
//! ```text
//! 10 LET x = 5
//! 20 PRINT x
//! 30 END
//! RUN
//! 5
//! ```
//!
//! The [`lang`] module turns text into statements. The [`mach`] module
//! stores and runs them. A front end implements [`mach::Console`] and
//! hands each typed line to [`mach::Runtime::enter`].

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
