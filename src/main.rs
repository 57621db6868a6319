use std::error::Error;

use clap::builder::PossibleValuesParser;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use life_terminal::config::LifeConfig;
use life_terminal::grid::Grid;
use life_terminal::patterns;
use life_terminal::report::RunSummary;
use life_terminal::runner::{self, RunLimit, Simulation};
use life_terminal::terminal::{self, KeyboardControls, TerminalSession};

#[derive(Parser, Debug)]
#[command(name = "life_terminal")]
#[command(about = "Conway's Game of Life on a fixed grid in the terminal (press q to quit)")]
struct Args {
    /// Grid height in cells
    #[arg(short, long, default_value = "40", value_parser = clap::value_parser!(u16).range(1..))]
    rows: u16,

    /// Grid width in cells
    #[arg(short, long, default_value = "80", value_parser = clap::value_parser!(u16).range(1..))]
    cols: u16,

    /// Pause between generations in milliseconds
    #[arg(short, long, default_value = "200")]
    speed: u64,

    /// Number of generations to run before exiting
    #[arg(short, long, default_value = "10000000")]
    generations: u64,

    /// Seed pattern
    #[arg(
        short,
        long,
        default_value = "r-pentomino",
        value_parser = PossibleValuesParser::new(patterns::names())
    )]
    pattern: String,

    /// Random seed for the "random" pattern (uses random seed if not specified)
    #[arg(long)]
    seed: Option<u64>,

    /// Fraction of cells alive in the "random" pattern (0.0 to 1.0)
    #[arg(long, default_value = "0.3", value_parser = parse_density)]
    density: f64,

    /// Stop as soon as a generation changes nothing
    #[arg(long)]
    stop_when_stable: bool,

    /// Print a JSON run summary on exit
    #[arg(long)]
    report: bool,

    /// List the built-in patterns and exit
    #[arg(long)]
    list_patterns: bool,
}

fn parse_density(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("density must be between 0.0 and 1.0, got {}", value))
    }
}

impl From<&Args> for LifeConfig {
    fn from(args: &Args) -> Self {
        Self {
            rows: args.rows as usize,
            cols: args.cols as usize,
            speed_ms: args.speed,
            max_generations: args.generations,
            pattern: args.pattern.clone(),
            seed: args.seed,
            density: args.density,
            stop_when_stable: args.stop_when_stable,
        }
    }
}

fn build_grid(config: &mut LifeConfig) -> Grid {
    let mut grid = Grid::new(config.rows, config.cols);

    if config.is_random() {
        let seed = *config.seed.get_or_insert_with(rand::random);
        println!("Seeding random soup with seed: {} (density {:.2})", seed, config.density);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        grid.randomize(config.density, &mut rng);
    } else if let Some(pattern) = patterns::find(&config.pattern) {
        let placed = grid.seed_pattern(pattern, pattern.origin);
        if placed < pattern.cells.len() {
            eprintln!(
                "Pattern '{}' only partly fits a {}x{} grid ({} of {} cells placed)",
                pattern.name, config.rows, config.cols, placed, pattern.cells.len()
            );
        }
    }

    grid
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if args.list_patterns {
        for name in patterns::names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let mut config = LifeConfig::from(&args);
    let grid = build_grid(&mut config);
    println!("Grid: {}x{}, {} cells alive", config.rows, config.cols, grid.live_count());

    let mut sim = Simulation::new(grid);
    let mut session = TerminalSession::start()?;
    let result = runner::run(
        session.terminal(),
        &mut sim,
        &mut KeyboardControls::new(),
        RunLimit::from(&config),
        config.speed_ms,
    );
    let result = terminal::settle(result, session.restore());

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Terminal error: {}", e);
            return Err(e.into());
        }
    };

    let summary = RunSummary::new(&config, &outcome);
    println!("{}", summary.headline());
    if args.report {
        println!("{}", summary.to_json()?);
    }

    Ok(())
}
