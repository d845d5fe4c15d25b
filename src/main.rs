//! Gomoku-MCTS: play five-in-a-row against a Monte Carlo Tree Search AI.
//!
//! ## Usage
//!
//! - `gomoku-mcts serve` - Start the HTTP API for the browser front end
//! - `gomoku-mcts play` - Play in the terminal
//! - `gomoku-mcts console` - Line-oriented command protocol
//! - `gomoku-mcts demo` - Run the MCTS demo (default)

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gomoku_mcts::board::Board;
use gomoku_mcts::console::{Console, str_coord};
use gomoku_mcts::constants::{
    DEFAULT_BIND, DEFAULT_SIZE, N_SIMS, PROXIMITY_RADIUS, SIMULATION_DEPTH,
};
use gomoku_mcts::mcts::{SearchConfig, TreeNode, tree_search};
use gomoku_mcts::session::{SessionDefaults, SessionStore};
use gomoku_mcts::web::{self, AppState};

/// Gomoku-MCTS: a five-in-a-row engine
#[derive(Parser)]
#[command(name = "gomoku-mcts")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = DEFAULT_BIND)]
        bind: String,
    },
    /// Play against the AI in the terminal
    Play,
    /// Run the command protocol on stdin/stdout
    Console,
    /// Run a simple demo of the engine
    Demo,
}

/// Game and search settings shared by all subcommands.
#[derive(Args, Clone)]
struct EngineArgs {
    /// Board size (NxN)
    #[arg(long, global = true, default_value_t = DEFAULT_SIZE)]
    size: usize,
    /// Simulation cycles per AI move
    #[arg(long, global = true, default_value_t = N_SIMS)]
    simulations: usize,
    /// Maximum plies per rollout
    #[arg(long, global = true, default_value_t = SIMULATION_DEPTH)]
    depth: usize,
    /// Expand only cells near existing stones
    #[arg(long, global = true, default_value_t = true, action = ArgAction::Set)]
    nearby: bool,
    /// Proximity radius for nearby-only expansion
    #[arg(long, global = true, default_value_t = PROXIMITY_RADIUS)]
    radius: usize,
    /// Play forced tactical moves without searching
    #[arg(long, global = true)]
    rule_shortcut: bool,
    /// Wall-clock cap per AI move in milliseconds
    #[arg(long, global = true)]
    time_limit_ms: Option<u64>,
    /// Seed for reproducible searches
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Let the AI move first
    #[arg(long, global = true)]
    ai_first: bool,
    /// Keep the search tree between turns
    #[arg(long, global = true)]
    reuse_tree: bool,
}

impl EngineArgs {
    fn search_config(&self) -> SearchConfig {
        let mut config = SearchConfig::default()
            .with_simulations(self.simulations)
            .with_depth(self.depth)
            .with_rule_shortcut(self.rule_shortcut);
        config = if self.nearby {
            config.with_proximity(self.radius)
        } else {
            config.with_full_expansion()
        };
        if let Some(ms) = self.time_limit_ms {
            config = config.with_time_limit(Duration::from_millis(ms));
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }

    fn session_defaults(&self) -> SessionDefaults {
        SessionDefaults {
            size: self.size,
            config: self.search_config(),
            player_first: !self.ai_first,
            reuse_tree: self.reuse_tree,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gomoku_mcts=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let engine = cli.engine;

    match cli.command {
        Some(Commands::Serve { bind }) => {
            let state = Arc::new(AppState {
                sessions: SessionStore::new(engine.session_defaults()),
            });
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(web::serve(&bind, state))
        }
        Some(Commands::Play) => Console::new(&engine.session_defaults(), true).run(),
        Some(Commands::Console) => Console::new(&engine.session_defaults(), false).run(),
        Some(Commands::Demo) | None => run_demo(&engine),
    }
}

fn run_demo(engine: &EngineArgs) -> Result<()> {
    println!("Gomoku-MCTS: five-in-a-row with Monte Carlo Tree Search\n");

    let config = engine.search_config();
    let mut board = Board::new(engine.size);
    let center = engine.size / 2;
    board.apply_move((center, center))?;
    println!("{board}");

    println!("Running {} MCTS simulations...", config.simulation_count);
    let mut rng = config.rng();
    let mut root = TreeNode::new(board.clone());
    let outcome = tree_search(&mut root, &config, &mut rng)?;
    println!("Best move: {}", str_coord(outcome.coord));
    println!("Root winrate: {:.1}%", root.winrate() * 100.0);

    let mut stats = root.child_stats();
    stats.sort_by(|a, b| b.visits.cmp(&a.visits));
    for s in stats.iter().take(5) {
        println!(
            "move {} v={} w={:.1} wr={:.3}",
            str_coord(s.coord),
            s.visits,
            s.wins,
            s.wins / s.visits.max(1) as f64
        );
    }

    board.apply_move(outcome.coord)?;
    println!("\n{board}");
    Ok(())
}
