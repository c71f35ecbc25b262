#![allow(dead_code)]
use basic::mach::{Console, Event, Runtime};
use std::collections::VecDeque;

#[derive(Default)]
pub struct Script {
    pub input: VecDeque<String>,
    pub output: String,
}

impl Console for Script {
    fn print_line(&mut self, s: &str) {
        self.output.push_str(s);
        self.output.push('\n');
    }

    fn read_line(&mut self, prompt: &str) -> String {
        self.output.push_str(prompt);
        match self.input.pop_front() {
            Some(s) => s,
            None => panic!("out of scripted input"),
        }
    }
}

/// Enters program lines, panicking on any error.
pub fn enter_all(runtime: &mut Runtime, lines: &[&str]) {
    let mut script = Script::default();
    for line in lines {
        if let Err(error) = runtime.enter(line, &mut script) {
            panic!("{:?} entering {:?}", error, line);
        }
    }
}

pub fn exec(runtime: &mut Runtime, line: &str) -> String {
    exec_with_input(runtime, line, &[])
}

/// Enters one line and returns everything the console saw, errors
/// included as the session would print them.
pub fn exec_with_input(runtime: &mut Runtime, line: &str, input: &[&str]) -> String {
    let mut script = Script {
        input: input.iter().map(|s| s.to_string()).collect(),
        output: String::new(),
    };
    match runtime.enter(line, &mut script) {
        Ok(Event::Ready) => {}
        Ok(Event::Quit) => script.output.push_str("QUIT\n"),
        Err(error) => script.output.push_str(&format!("{}\n", error)),
    }
    assert!(script.input.is_empty(), "unused scripted input");
    script.output
}
