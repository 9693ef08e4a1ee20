//! REPL Module
//!
//! Interactive Pokedex loop: reads commands, pages through location areas
//! via the PokeAPI client, and reports cache statistics.

mod commands;
mod input;

use std::io::Write;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::cache::Cache;
use crate::error::ReplError;
use crate::pokeapi::PokeApiClient;

pub use commands::{Command, Flow};
pub use input::{clean_input, spawn_stdin_reader};

const PROMPT: &str = "Pokedex > ";

/// Links to the pages around the one last shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pager {
    pub next: Option<String>,
    pub previous: Option<String>,
}

/// Command loop state.
#[derive(Debug)]
pub struct Repl {
    client: PokeApiClient,
    cache: Cache,
    pager: Pager,
}

impl Repl {
    pub fn new(client: PokeApiClient, cache: Cache) -> Self {
        Self {
            client,
            cache,
            pager: Pager::default(),
        }
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Reads commands from `lines` until `exit` or the channel closes.
    ///
    /// A failing command is reported on `out` and the loop carries on. Only
    /// I/O errors on `out` end the loop early.
    pub async fn run<W: Write>(
        &mut self,
        mut lines: mpsc::Receiver<String>,
        out: &mut W,
    ) -> Result<(), ReplError> {
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.recv().await else {
                debug!("End of input, leaving the command loop");
                writeln!(out)?;
                return Ok(());
            };

            let words = clean_input(&line);
            let Some(name) = words.first() else {
                continue;
            };

            let Some(command) = Command::from_name(name) else {
                writeln!(out, "Unknown command")?;
                continue;
            };

            match self.execute(command, out).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(ReplError::Io(err)) => return Err(ReplError::Io(err)),
                Err(err) => {
                    warn!("Command {} failed: {}", command.name(), err);
                    writeln!(out, "Error: {}", err)?;
                }
            }
        }
    }

    /// Runs a single command, writing its output to `out`.
    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        out: &mut W,
    ) -> Result<Flow, ReplError> {
        match command {
            Command::Help => {
                writeln!(out, "Welcome to the Pokedex!")?;
                writeln!(out, "Usage:")?;
                writeln!(out)?;
                for command in Command::ALL {
                    writeln!(out, "{}: {}", command.name(), command.description())?;
                }
            }
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => {
                let url = self
                    .pager
                    .next
                    .clone()
                    .unwrap_or_else(|| self.client.location_areas_url());
                self.show_locations(&url, out).await?;
            }
            Command::MapBack => match self.pager.previous.clone() {
                Some(url) => self.show_locations(&url, out).await?,
                None => writeln!(out, "you're on the first page")?,
            },
            Command::Cache => {
                let stats = self.cache.stats();
                writeln!(out, "entries: {}", stats.total_entries)?;
                writeln!(out, "hits: {}", stats.hits)?;
                writeln!(out, "misses: {}", stats.misses)?;
                writeln!(out, "reaped: {}", stats.reaped)?;
                writeln!(out, "hit rate: {:.0}%", stats.hit_rate() * 100.0)?;
            }
        }

        Ok(Flow::Continue)
    }

    async fn show_locations<W: Write>(&mut self, url: &str, out: &mut W) -> Result<(), ReplError> {
        let page = self.client.fetch_location_areas(url).await?;

        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }

        self.pager = Pager {
            next: page.next,
            previous: page.previous,
        };
        Ok(())
    }
}
