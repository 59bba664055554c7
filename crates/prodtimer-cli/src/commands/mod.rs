pub mod config;
pub mod countdown;
pub mod stopwatch;

use std::sync::mpsc::{self, Receiver};
use std::thread;

use prodtimer_core::Phase;

/// Clap-facing phase argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PhaseArg {
    Work,
    Break,
}

impl From<PhaseArg> for Phase {
    fn from(arg: PhaseArg) -> Self {
        match arg {
            PhaseArg::Work => Phase::Work,
            PhaseArg::Break => Phase::Break,
        }
    }
}

/// Forward stdin lines to the main loop as trimmed intent strings.
/// The reader thread owns stdin; every engine mutation stays on the
/// caller's thread.
pub(crate) fn stdin_intents() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut line = String::new();
        loop {
            line.clear();
            match std::io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    if tx.send(line.trim().to_string()).is_err() {
                        break;
                    }
                }
            }
        }
    });
    rx
}
