use anyhow::Result;
use clap::{Parser, Subcommand};
use serpent::game::GameConfig;
use serpent::modes::{HumanMode, SimulateMode};

#[derive(Parser)]
#[command(name = "serpent")]
#[command(version, about = "Classic snake in the terminal, with recordable games")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively (the default)
    Play,
    /// Let the computer play random games and improve a recording
    Simulate {
        /// Replay-and-continue rounds after the initial random game
        #[arg(long, default_value_t = 10)]
        rounds: usize,

        /// Echo each kept move sequence as U/D/L/R tags
        #[arg(long)]
        verbose: bool,

        /// Fix the fruit plan and move randomness for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let config = GameConfig::default();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let mut mode = HumanMode::new(config);
            mode.run().await?;
        }
        Command::Simulate {
            rounds,
            verbose,
            seed,
        } => {
            let mut mode = SimulateMode::new(config, rounds, verbose, seed);
            mode.run()?;
        }
    }

    Ok(())
}
