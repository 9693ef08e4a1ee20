//! Input sources and normalization for the command loop

use std::io::{self, BufRead};
use std::thread;

use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Lines buffered between the stdin thread and the command loop.
const LINE_BUFFER: usize = 16;

/// Reads stdin line by line on a dedicated OS thread.
///
/// A blocking read on stdin cannot be cancelled, so it is kept off the Tokio
/// runtime; dropping the runtime then never waits on the terminal. The
/// channel closes on end of input, on a read error, or once the receiver is
/// dropped and the next line arrives.
pub fn spawn_stdin_reader() -> io::Result<mpsc::Receiver<String>> {
    let (tx, rx) = mpsc::channel(LINE_BUFFER);

    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.blocking_send(line).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        warn!("Failed to read stdin: {}", err);
                        break;
                    }
                }
            }
            debug!("stdin reader finished");
        })?;

    Ok(rx)
}

/// Splits a line into lowercase words, dropping surrounding whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
