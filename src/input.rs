//! Collecting subnet text from the user.
//!
//! The outcome is returned as an [`Acquisition`] value so "nothing was
//! entered" and "nobody answered" stay distinct from a parse failure.

use crate::parser::is_subnet_input;
use std::error::Error;
use std::io::{BufRead, BufReader, IsTerminal, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

pub const PROMPT: &str = "Subnet (a.b.c.d/len or a.b.c.d m.m.m.m): ";

/// What the user supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acquisition {
    /// One or more candidate inputs, not yet validated.
    Supplied(Vec<String>),
    /// Blank answer, empty stream, or nothing usable.
    NoInput,
    /// The interactive prompt was not answered in time.
    TimedOut,
}

/// Join positional arguments into one input, so `10.0.0.0 255.0.0.0` given
/// as two arguments reads as the mask form.
pub fn from_args(args: &[String]) -> Option<String> {
    let joined = args.join(" ");
    if joined.trim().is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Wait up to `timeout` for a single line from `reader`.
///
/// The read runs on a helper thread; on timeout that thread is left blocked
/// and the caller carries on.
pub fn prompt_line<R>(reader: R, timeout: Duration) -> Result<Acquisition, Box<dyn Error>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut reader = reader;
        let mut line = String::new();
        let result = reader.read_line(&mut line).map(|_| line);
        // Receiver may have given up already.
        let _ = tx.send(result);
    });

    match rx.recv_timeout(timeout) {
        Ok(Ok(line)) => {
            let line = line.trim();
            if line.is_empty() {
                Ok(Acquisition::NoInput)
            } else {
                Ok(Acquisition::Supplied(vec![line.to_string()]))
            }
        }
        Ok(Err(e)) => Err(format!("Error reading input: {e}").into()),
        Err(RecvTimeoutError::Timeout) => {
            log::warn!("No answer within {}s", timeout.as_secs());
            Ok(Acquisition::TimedOut)
        }
        Err(RecvTimeoutError::Disconnected) => Ok(Acquisition::NoInput),
    }
}

/// Read every line of a non-interactive stream.
///
/// Every non-blank line is a candidate input; malformed lines are kept so
/// they are reported as errors rather than lost.
pub fn read_batch<R: BufRead>(reader: R) -> Result<Acquisition, Box<dyn Error>> {
    let mut inputs = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Error reading line {}: {e}", i + 1))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !is_subnet_input(line) {
            log::debug!("Line {} does not look like subnet input: {line:?}", i + 1);
        }
        inputs.push(line.to_string());
    }
    log::debug!("Read {} inputs from stdin", inputs.len());

    if inputs.is_empty() {
        Ok(Acquisition::NoInput)
    } else {
        Ok(Acquisition::Supplied(inputs))
    }
}

/// Collect input from arguments, a prompt on an interactive terminal, or a
/// piped stdin batch, in that order.
pub fn acquire(args: &[String], timeout: Duration) -> Result<Acquisition, Box<dyn Error>> {
    if let Some(input) = from_args(args) {
        log::debug!("Using input from arguments: {input}");
        return Ok(Acquisition::Supplied(vec![input]));
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("{PROMPT}");
        std::io::stderr().flush()?;
        prompt_line(BufReader::new(stdin), timeout)
    } else {
        read_batch(stdin.lock())
    }
}
