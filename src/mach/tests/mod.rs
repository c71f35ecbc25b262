use crate::lang::ast::Statement;
use crate::lang::{ErrorCode, Line};
use crate::mach::*;
use std::collections::VecDeque;


#[derive(Default)]
struct Script {
    input: VecDeque<&'static str>,
    output: Vec<String>,
    prompts: usize,
    break_after: Option<usize>,
}

impl Script {
    fn with_input(input: &[&'static str]) -> Script {
        Script {
            input: input.iter().copied().collect(),
            ..Script::default()
        }
    }
}

impl Console for Script {
    fn print_line(&mut self, s: &str) {
        self.output.push(s.to_string());
    }

    fn read_line(&mut self, prompt: &str) -> String {
        assert_eq!(prompt, INPUT_PROMPT);
        self.prompts += 1;
        match self.input.pop_front() {
            Some(s) => s.to_string(),
            None => panic!("program asked for more input than scripted"),
        }
    }

    fn interrupted(&mut self) -> bool {
        match &mut self.break_after {
            Some(0) => true,
            Some(n) => {
                *n -= 1;
                false
            }
            None => false,
        }
    }
}

fn program(lines: &[&str]) -> Program {
    let mut program = Program::new();
    for s in lines {
        let line = Line::new(s);
        let statement = line.ast().unwrap();
        program
            .listing_mut()
            .insert(line.number().unwrap(), line, statement);
    }
    program
}

fn statement(s: &str) -> Statement {
    Line::new(s).ast().unwrap()
}
