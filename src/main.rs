use batalha_naval::{
    init_logging, overlay, place_fixed_ships, place_random_fleet, print_board, Board, Pattern,
    Shape, ABILITY_SIZE, DEMO_SHIP_CELLS, MAX_PLACEMENT_ATTEMPTS,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Place two straight and two diagonal ships at random and show the board.
    Random {
        #[arg(long, help = "Fix RNG seed for reproducible placement (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = MAX_PLACEMENT_ATTEMPTS)]
        max_attempts: usize,
    },
    /// Stamp the cone, cross and diamond abilities over a fixed fleet.
    Abilities,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Random { seed, max_attempts } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (placement will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let mut board = Board::new();
            place_random_fleet(&mut board, &mut rng, max_attempts)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_board(&board);
        }
        Commands::Abilities => {
            let mut board = Board::new();
            for (shape, (row, col)) in [
                (Shape::Cone, (3, 4)),
                (Shape::Cross, (6, 6)),
                (Shape::Diamond, (1, 1)),
            ] {
                board.reset();
                place_fixed_ships(&mut board, &DEMO_SHIP_CELLS)
                    .map_err(|e| anyhow::anyhow!(e))?;
                let pattern: Pattern<ABILITY_SIZE> = shape.pattern();
                overlay(&mut board, &pattern, row, col);
                println!("Board with {:?} ability (origin at {},{}):", shape, row, col);
                print_board(&board);
                println!();
            }
        }
    }
    Ok(())
}
