//! snakes: play one seeded game in the terminal.
//!
//! Rolls dice from a seeded `Dice`, prints each turn's message and the
//! final statistics. Set `RUST_LOG=debug` to see engine logs.

use std::env;
use std::process;

use snakes_ladders::{Dice, Engine, PlayerId};

fn print_help() {
    println!(
        r#"snakes - play Snakes and Ladders with seeded dice

USAGE:
    snakes [--seed S] [--max-turns N]

OPTIONS:
    --seed S         Dice seed (default: random)
    --max-turns N    Stop after N turns even without a winner (default: 1000)
    -h, --help       Print this help message
"#
    );
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    let Some(raw) = args.get(i + 1) else {
        eprintln!("Missing value for {flag}");
        process::exit(1);
    };
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {flag} value: {raw}");
        process::exit(1);
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut seed: Option<u64> = None;
    let mut max_turns: usize = 1000;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return;
            }
            "--seed" => {
                seed = Some(parse_value(&args, i, "--seed"));
                i += 2;
            }
            "--max-turns" => {
                max_turns = parse_value(&args, i, "--max-turns");
                i += 2;
            }
            other => {
                eprintln!("Unknown option: {other}");
                eprintln!("Run `snakes --help` for usage.");
                process::exit(1);
            }
        }
    }

    let mut dice = seed.map_or_else(Dice::from_entropy, Dice::new);
    log::info!("Starting game with dice seed {}", dice.seed());

    let mut engine = Engine::new();
    while !engine.is_game_over() && engine.state().turns() < max_turns {
        let result = engine.play(dice.roll());
        println!("{result}");
    }

    if !engine.is_game_over() {
        log::warn!("No winner after {max_turns} turns");
    }

    let stats = engine.stats();
    println!();
    println!("Turns: {}", stats.turns);
    for player in PlayerId::all() {
        let s = stats.player(player);
        println!(
            "  - {player}: square {}, moves={}, snakes={}, ladders={}, doubles={}, bounces={}",
            engine.positions()[player],
            s.moves,
            s.snakes,
            s.ladders,
            s.doubles,
            s.bounces
        );
    }
}
