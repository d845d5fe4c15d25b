//! Text console for playing against the engine.
//!
//! A line-oriented command protocol modelled on GTP: every command gets a
//! response starting with `=` on success or `?` on failure, optionally
//! followed by the numeric id given with the command.
//!
//! ## Supported Commands
//!
//! - `name`, `version` - Engine identification
//! - `list_commands`, `known_command <cmd>` - Command discovery
//! - `quit` - Exit the loop
//! - `reset` / `clear_board` - Start a new game
//! - `play <row>,<col>` - Play the human move
//! - `genmove` - Let the AI play its move
//! - `show` - Print the board
//! - `rules` - Show which rule of the rule chain would fire
//! - `set <key> <value>` - Change a setting (`simulations`, `depth`,
//!   `nearby`, `radius`, `shortcut`, `first`)
//!
//! In interactive mode a bare `<row>,<col>` line is a `play` command, and the
//! AI answers every human move right away.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::board::Coord;
use crate::rules::RuleStrategy;
use crate::session::{GameSession, SessionDefaults, SettingsUpdate};

/// The list of known console commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "quit",
    "reset",
    "rules",
    "set",
    "show",
    "version",
];

/// Parse a `row,col` coordinate.
pub fn parse_coord(s: &str) -> Result<Coord> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected row,col but got '{s}'"))?;
    let row = row.trim().parse().with_context(|| format!("invalid row '{row}'"))?;
    let col = col.trim().parse().with_context(|| format!("invalid column '{col}'"))?;
    Ok((row, col))
}

/// Format a coordinate as `row,col`.
pub fn str_coord((row, col): Coord) -> String {
    format!("{row},{col}")
}

/// Console engine state.
pub struct Console {
    session: GameSession,
    /// Answer each human move with an AI move and echo the board
    interactive: bool,
}

impl Console {
    pub fn new(defaults: &SessionDefaults, interactive: bool) -> Self {
        Self {
            session: GameSession::new(defaults),
            interactive,
        }
    }

    #[inline]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Run the command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        if self.interactive {
            writeln!(stdout, "Gomoku: you are player 1 (X), the AI is player 2 (O).")?;
            writeln!(stdout, "Enter moves as row,col (e.g. 3,4); 'help' lists commands.\n")?;
            if self.session.is_ai_turn() {
                let (_, reply) = self.execute("genmove", &[]);
                writeln!(stdout, "{reply}")?;
            }
            write!(stdout, "{}", self.session.board())?;
            stdout.flush()?;
        }

        for line in stdin.lock().lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some(first) = parts.first() else {
                continue;
            };

            let mut command = first.to_lowercase();
            let mut args = &parts[1..];
            if self.interactive && command.contains(',') {
                command = "play".to_string();
                args = &parts[..];
            }
            if command == "help" {
                command = "list_commands".to_string();
            }

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(stdout, "{prefix}{id_str} {message}\n")?;

            if self.interactive && success && matches!(command.as_str(), "play" | "genmove" | "reset") {
                write!(stdout, "{}", self.session.board())?;
                if self.session.board().is_over() {
                    writeln!(stdout, "{}", self.session.message())?;
                }
            }
            stdout.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end == 0 || trimmed[end..].starts_with(',') {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "reset" | "clear_board" => {
                self.session.reset();
                if self.interactive && self.session.is_ai_turn() {
                    return self.genmove();
                }
                (true, self.session.message().to_string())
            }

            "show" => (true, format!("\n{}", self.session.board())),

            "play" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let coord = match parse_coord(&args.join("")) {
                    Ok(c) => c,
                    Err(e) => return (false, e.to_string()),
                };
                if let Err(e) = self.session.submit_move(coord) {
                    return (false, e.to_string());
                }
                if self.interactive && self.session.is_ai_turn() {
                    return self.genmove();
                }
                (true, self.session.message().to_string())
            }

            "genmove" => self.genmove(),

            "rules" => {
                let board = self.session.board();
                let mut rng = self.session.config().rng();
                match RuleStrategy::new(board).decide_with_rule(&mut rng) {
                    Some((rule, coord)) => (true, format!("{rule:?} {}", str_coord(coord))),
                    None => (false, "no legal moves".to_string()),
                }
            }

            "set" => match args {
                [key, value] => match self.apply_setting(key, value) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                },
                _ => (false, "usage: set <key> <value>".to_string()),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn genmove(&mut self) -> (bool, String) {
        match self.session.request_ai_move() {
            Ok(outcome) => {
                debug!(?outcome, "console genmove");
                if self.interactive {
                    (true, self.session.message().to_string())
                } else {
                    (true, str_coord(outcome.coord))
                }
            }
            Err(e) => (false, e.to_string()),
        }
    }

    fn apply_setting(&mut self, key: &str, value: &str) -> Result<()> {
        let mut update = SettingsUpdate::default();
        match key {
            "simulations" => update.simulation_times = Some(value.parse()?),
            "depth" => update.simulation_depth = Some(value.parse()?),
            "nearby" => update.only_nearby = Some(value.parse()?),
            "radius" => update.proximity_radius = Some(value.parse()?),
            "shortcut" => update.rule_shortcut = Some(value.parse()?),
            "first" => update.player_first = Some(value == "human"),
            _ => return Err(anyhow!("unknown setting '{key}'")),
        }
        self.session.update_settings(&update);
        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(&SessionDefaults::default(), false)
    }
}
