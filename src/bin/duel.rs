use broadside::{
    init_logging, AdvancedStrategy, RandomStrategy, Referee, ShotOutcome, Strategy,
};
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about = "Pit two targeting strategies against each other", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1)]
    games: u64,
    #[arg(long, value_enum, default_value_t = Opponent::Random)]
    opponent: Opponent,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Opponent {
    Random,
    Advanced,
}

struct Side {
    strategy: Box<dyn Strategy>,
    rng: SmallRng,
    moves: usize,
}

impl Side {
    fn new(strategy: Box<dyn Strategy>, rng: SmallRng) -> Self {
        Side {
            strategy,
            rng,
            moves: 0,
        }
    }

    /// Fire one shot at the opponent's referee and digest the feedback.
    fn take_turn(&mut self, opponent: &mut Referee) -> anyhow::Result<bool> {
        let coord = self
            .strategy
            .next_move(&mut self.rng)
            .map_err(|e| anyhow::anyhow!(e))?;
        self.moves += 1;
        match opponent.shoot(coord).map_err(|e| anyhow::anyhow!(e))? {
            ShotOutcome::Miss => self.strategy.miss(coord),
            ShotOutcome::Hit => self.strategy.hit(coord, None),
            ShotOutcome::Sunk(length) => self.strategy.hit(coord, Some(length)),
        }
        Ok(opponent.all_sunk())
    }
}

fn play_game(mut first: Side, mut second: Side) -> anyhow::Result<(Option<usize>, usize, usize)> {
    let layout1 = first
        .strategy
        .generate_board(&mut first.rng)
        .map_err(|e| anyhow::anyhow!(e))?;
    let layout2 = second
        .strategy
        .generate_board(&mut second.rng)
        .map_err(|e| anyhow::anyhow!(e))?;
    let mut referee1 = Referee::new(&layout1).map_err(|e| anyhow::anyhow!(e))?;
    let mut referee2 = Referee::new(&layout2).map_err(|e| anyhow::anyhow!(e))?;

    for _round in 0..200 {
        if first.take_turn(&mut referee2)? {
            return Ok((Some(0), first.moves, second.moves));
        }
        if second.take_turn(&mut referee1)? {
            return Ok((Some(1), first.moves, second.moves));
        }
    }
    Ok((None, first.moves, second.moves))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut results = Vec::new();
    let mut wins = [0u64, 0u64];

    for game in 0..cli.games {
        let (rng1, rng2) = match cli.seed {
            Some(s) => {
                let base = s.wrapping_add(game.wrapping_mul(2));
                (
                    SmallRng::seed_from_u64(base),
                    SmallRng::seed_from_u64(base.wrapping_add(1)),
                )
            }
            None => {
                let mut seed_rng = rand::rng();
                (
                    SmallRng::from_rng(&mut seed_rng),
                    SmallRng::from_rng(&mut seed_rng),
                )
            }
        };

        let advanced = Side::new(Box::new(AdvancedStrategy::new()), rng1);
        let opponent: Box<dyn Strategy> = match cli.opponent {
            Opponent::Random => Box::new(RandomStrategy::new()),
            Opponent::Advanced => Box::new(AdvancedStrategy::new()),
        };
        let opponent = Side::new(opponent, rng2);

        let (winner, moves1, moves2) = play_game(advanced, opponent)?;
        if let Some(w) = winner {
            wins[w] += 1;
        }
        results.push(json!({
            "game": game,
            "winner": winner.map(|w| if w == 0 { "advanced" } else { "opponent" }),
            "advanced_moves": moves1,
            "opponent_moves": moves2,
        }));
    }

    let report = json!({
        "opponent": format!("{:?}", cli.opponent),
        "games": results,
        "advanced_wins": wins[0],
        "opponent_wins": wins[1],
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
