use super::exec::{execute, Flow};
use super::{Console, Listing, Var};
use crate::error;
use crate::lang::{Error, LineNumber};
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Stopped,
    Running,
}

/// ## Program store and run state machine
///
/// `cursor` is only meaningful while the state is `Running`.

#[derive(Debug, Default)]
pub struct Program {
    listing: Listing,
    cursor: LineNumber,
    state: State,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn listing_mut(&mut self) -> &mut Listing {
        &mut self.listing
    }

    pub fn cursor(&self) -> LineNumber {
        self.cursor
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    /// Executes from the lowest line until `END`, the last line, a break
    /// from the console, or an error. Errors leave the state as it was and
    /// carry the line they happened on.
    pub fn run(&mut self, var: &mut Var, console: &mut dyn Console) -> Result<()> {
        let first = match self.listing.first() {
            Some(ln) => ln,
            None => return Ok(()),
        };
        debug!(first, lines = self.listing.len(), "run");
        self.state = State::Running;
        self.cursor = first;
        while self.is_running() {
            if console.interrupted() {
                console.print_line(&format!("BREAK IN {}", self.cursor));
                self.stop();
                break;
            }
            let cursor = self.cursor;
            trace!(line = cursor, "execute");
            let flow = match self.listing.statement(cursor) {
                Some(statement) => execute(statement, var, console),
                None => Err(error!(LineNumberError; "CURSOR ON MISSING LINE")),
            };
            if let Err(e) = flow.and_then(|flow| self.apply(flow)) {
                return Err(if e.is_direct() {
                    e.in_line_number(cursor)
                } else {
                    e
                });
            }
        }
        debug!(line = self.cursor, "stopped");
        Ok(())
    }

    fn apply(&mut self, flow: Flow) -> Result<()> {
        match flow {
            Flow::Next => self.advance_to_next_line(),
            Flow::Jump(target) => self.jump_to(target)?,
            Flow::Stop => self.stop(),
        }
        Ok(())
    }

    /// Moves to the next stored line, stopping after the last one.
    pub fn advance_to_next_line(&mut self) {
        match self.listing.next_after(self.cursor) {
            Some(ln) => self.cursor = ln,
            None => self.stop(),
        }
    }

    pub fn jump_to(&mut self, target: LineNumber) -> Result<()> {
        if !self.listing.contains(target) {
            return Err(error!(LineNumberError));
        }
        trace!(from = self.cursor, to = target, "jump");
        self.cursor = target;
        Ok(())
    }

    pub fn stop(&mut self) {
        self.state = State::Stopped;
    }

    /// Every stored line in ascending order, as typed.
    pub fn list(&self, console: &mut dyn Console) {
        for line in self.listing.lines() {
            console.print_line(&line.to_string());
        }
    }

    /// Discards all lines and all variables.
    pub fn clear(&mut self, var: &mut Var) {
        self.listing.clear();
        self.cursor = 0;
        self.state = State::Stopped;
        var.clear();
    }
}
