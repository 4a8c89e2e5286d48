//! LCR Binary
//!
//! Runs a batch of Left-Center-Right games and reports win counts and
//! game lengths. Type "Q" + Enter while running to stop after the current game.
//!
//! Options: --players, --games, --seed, --config, --json, --interactive
use clap::Parser;
use colored::Colorize;
use lcr::*;

#[derive(Parser, Debug)]
#[command(name = "lcr", about = "Simulate batches of Left-Center-Right")]
struct Args {
    /// Players around the table
    #[arg(short, long, default_value_t = DEFAULT_PLAYERS)]
    players: usize,
    /// Games to simulate
    #[arg(short, long, default_value_t = DEFAULT_GAMES)]
    games: usize,
    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,
    /// JSON file holding {"players": .., "games": ..}
    #[arg(short, long, conflicts_with_all = ["players", "games", "interactive"])]
    config: Option<std::path::PathBuf>,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
    /// Prompt for players and games
    #[arg(short, long)]
    interactive: bool,
}

impl Args {
    fn resolve(&self) -> anyhow::Result<Config> {
        match (&self.config, self.interactive) {
            (Some(path), _) => Config::try_from(std::fs::read_to_string(path)?.as_str()),
            (None, true) => Config::new(
                prompt("Players", self.players, MIN_PLAYERS, "Must have at least two players")?,
                prompt("Games", self.games, MIN_GAMES, "Must play at least one game per simulation")?,
            ),
            (None, false) => Config::new(self.players, self.games),
        }
    }
}

fn prompt(label: &str, default: usize, min: usize, complaint: &'static str) -> anyhow::Result<usize> {
    let n = dialoguer::Input::<usize>::new()
        .with_prompt(label)
        .default(default)
        .validate_with(move |n: &usize| -> Result<(), &str> {
            match *n >= min {
                true => Ok(()),
                false => Err(complaint),
            }
        })
        .interact_text()?;
    Ok(n)
}

fn report(summary: &Summary) {
    let leader = summary.leader().map(|s| s.seat);
    println!("{}", Summary::header().bold());
    for standing in summary.players.iter() {
        let row = summary.row(standing);
        match Some(standing.seat) == leader {
            true => println!("{}", row.green()),
            false => println!("{}", row),
        }
    }
    println!();
    let [games, shortest, longest, average] = summary.totals();
    println!("{:<10}{}", games.0, games.1);
    println!("{:<10}{}", shortest.0, shortest.1.cyan());
    println!("{:<10}{}", longest.0, longest.1.red());
    println!("{:<10}{}", average.0, average.1.yellow());
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.resolve()?;
    log()?;
    let mut simulation = match args.seed {
        Some(seed) => Simulation::seeded(config, seed)?,
        None => Simulation::new(config)?,
    };
    brb(simulation.interrupt());
    let summary = simulation.run();
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&summary)?),
        false => report(&summary),
    }
    Ok(())
}
