extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use basic::lang::Error;
use basic::mach::{Console, Event, Runtime};
use clap::Parser;
use linefeed::{DefaultTerminal, Interface, ReadResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "basic")]
#[command(version, about = "A line-numbered integer BASIC interpreter", long_about = None)]
pub struct Config {
    /// Log interpreter activity to stderr (overrides RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print errors without terminal styling
    #[arg(long)]
    pub no_color: bool,

    /// Prompt shown while waiting for a command
    #[arg(long, default_value = "")]
    pub prompt: String,
}

pub fn main() {
    let config = Config::parse();
    let filter = if config.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(&config, &interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(config: &Config, interrupted: &AtomicBool) -> std::io::Result<()> {
    let mut runtime = Runtime::new();
    let command = Interface::new("BASIC")?;
    command.set_prompt(&config.prompt)?;
    let input = Interface::new("INPUT")?;
    let mut console = Terminal {
        command: &command,
        input: &input,
        interrupted,
    };

    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        interrupted.store(false, Ordering::SeqCst);
        match runtime.enter(&string, &mut console) {
            Ok(Event::Ready) => {}
            Ok(Event::Quit) => break,
            Err(error) => console.error(&error, config.no_color),
        }
        if !string.trim().is_empty() {
            command.add_history_unique(string);
        }
    }
    Ok(())
}

struct Terminal<'a> {
    command: &'a Interface<DefaultTerminal>,
    input: &'a Interface<DefaultTerminal>,
    interrupted: &'a AtomicBool,
}

impl<'a> Terminal<'a> {
    fn error(&mut self, error: &Error, no_color: bool) {
        if no_color {
            self.print_line(&error.to_string());
        } else {
            self.print_line(&Style::new().bold().paint(error.to_string()).to_string());
        }
    }
}

impl<'a> Console for Terminal<'a> {
    fn print_line(&mut self, s: &str) {
        if let Err(error) = self.command.write_fmt(format_args!("{}\n", s)) {
            warn!(%error, "write failed");
        }
    }

    fn read_line(&mut self, prompt: &str) -> String {
        if let Err(error) = self.input.set_prompt(prompt) {
            warn!(%error, "prompt failed");
        }
        match self.input.read_line() {
            Ok(ReadResult::Input(string)) => string,
            Ok(ReadResult::Signal(_)) | Ok(ReadResult::Eof) => {
                debug!("input closed");
                std::process::exit(0)
            }
            Err(error) => {
                eprintln!("{}", error);
                std::process::exit(1)
            }
        }
    }

    fn interrupted(&mut self) -> bool {
        self.interrupted.swap(false, Ordering::SeqCst)
    }
}
