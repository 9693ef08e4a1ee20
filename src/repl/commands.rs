//! Command Registry
//!
//! Named commands understood by the Pokedex loop.

/// A command the user can type at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Cache,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 5] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::MapBack,
        Command::Cache,
    ];

    /// Looks a command up by the name typed at the prompt.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Cache => "cache",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Displays the names of the next 20 locations",
            Command::MapBack => "Displays the names of the previous 20 locations",
            Command::Cache => "Displays response cache statistics",
        }
    }
}

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}
