use super::exec::execute;
use super::{Console, Program, Var};
use crate::error;
use crate::lang::ast::Statement;
use crate::lang::{Error, Line, LineNumber, Word};
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

const HELP: &[&str] = &[
    "COMMANDS: RUN  LIST  CLEAR  QUIT  HELP",
    "STATEMENTS: REM  LET  PRINT  INPUT  END  GOTO  IF ... THEN",
    "ONLY LET, PRINT AND INPUT MAY BE USED WITHOUT A LINE NUMBER",
    "ENTER A LINE NUMBER ALONE TO DELETE THAT LINE",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Ready,
    Quit,
}

/// ## One interpreter session
///
/// Owns the program store and variable memory and classifies each line
/// entered into a program line, a command, or a direct statement.

#[derive(Debug, Default)]
pub struct Runtime {
    program: Program,
    var: Var,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    pub fn enter(&mut self, s: &str, console: &mut dyn Console) -> Result<Event> {
        let line = Line::new(s);
        let result = if let Some(ln) = line.number() {
            self.enter_indirect(ln, line).map(|_| Event::Ready)
        } else if line.is_empty() {
            Ok(Event::Ready)
        } else if let Some(word) = line.command() {
            self.command(word, &line, console)
        } else {
            self.enter_direct(&line, console).map(|_| Event::Ready)
        };
        if let Err(e) = &result {
            debug!(line = ?e.line_number(), detail = e.detail(), "{}", e);
        }
        result
    }

    fn enter_indirect(&mut self, ln: LineNumber, line: Line) -> Result<()> {
        if line.is_empty() {
            if self.program.listing_mut().remove(ln).is_some() {
                debug!(line = ln, "removed");
            }
            return Ok(());
        }
        let statement = line.ast()?;
        debug!(line = ln, "stored");
        self.program.listing_mut().insert(ln, line, statement);
        Ok(())
    }

    fn enter_direct(&mut self, line: &Line, console: &mut dyn Console) -> Result<()> {
        let statement = line.ast()?;
        match statement {
            Statement::Let(_) | Statement::Print(_) | Statement::Input(_) => {
                execute(&statement, &mut self.var, console)?;
                Ok(())
            }
            Statement::Rem
            | Statement::End
            | Statement::Goto(_)
            | Statement::If(..) => Err(error!(SyntaxError; "ILLEGAL DIRECT")),
        }
    }

    fn command(&mut self, word: Word, line: &Line, console: &mut dyn Console) -> Result<Event> {
        if line.tokens().len() > 1 {
            return Err(error!(SyntaxError; "UNEXPECTED TOKEN"));
        }
        match word {
            Word::Run => {
                if let Err(e) = self.program.run(&mut self.var, console) {
                    self.program.stop();
                    return Err(e);
                }
            }
            Word::List => self.program.list(console),
            Word::Clear => {
                debug!("clear");
                self.program.clear(&mut self.var);
            }
            Word::Help => {
                for s in HELP {
                    console.print_line(s);
                }
            }
            Word::Quit => return Ok(Event::Quit),
            _ => return Err(error!(SyntaxError; "EXPECTED COMMAND")),
        }
        Ok(Event::Ready)
    }
}
