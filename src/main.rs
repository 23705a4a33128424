use pokemon_skirmish::{
    initialize_rules, prefab_trainer, Battle, RandomChance, Side, Strategy, TeamRocket,
};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const MAX_TURNS: usize = 500;

/// Usage: pokemon-skirmish [RULES.ron] [PLAYER] [ENEMY]
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "pokemon_skirmish=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Some(path) = args.first().filter(|arg| arg.ends_with(".ron")) {
        if let Err(e) = initialize_rules(Path::new(path)) {
            eprintln!("Error loading rules: {}", e);
            return ExitCode::FAILURE;
        }
    }
    let names: Vec<&str> = args
        .iter()
        .filter(|arg| !arg.ends_with(".ron"))
        .map(String::as_str)
        .collect();
    let player_name = names.first().copied().unwrap_or("Ash");
    let enemy_name = names.get(1).copied().unwrap_or("Jessie");

    let (player, enemy) = match (prefab_trainer(player_name), prefab_trainer(enemy_name)) {
        (Ok(player), Ok(enemy)) => (player, enemy),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Error loading teams: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut battle = match Battle::new(player, enemy, true) {
        Ok(battle) => battle,
        Err(e) => {
            eprintln!("Error starting battle: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "{} challenges {}!",
        battle.trainer(Side::Player),
        battle.trainer(Side::Enemy)
    );

    // The player hunts nothing in particular, the enemy hunts pikachu
    let player_strategy = TeamRocket::new("");
    let enemy_strategy = TeamRocket::default();
    let strategies: [(Side, &dyn Strategy); 2] =
        [(Side::Player, &player_strategy), (Side::Enemy, &enemy_strategy)];
    let mut chance = RandomChance::new();

    for _ in 0..MAX_TURNS {
        if battle.is_over() {
            break;
        }
        if battle.turn().is_none() {
            for (side, strategy) in strategies {
                match strategy.decide(&battle, side) {
                    Ok(action) => {
                        if !battle.queue_action(action, side) {
                            tracing::warn!(%side, "strategy picked an invalid action");
                        }
                    }
                    Err(e) => {
                        eprintln!("Error choosing action: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            }
        }
        match battle.enact_turn(&mut chance) {
            Ok(summary) => print!("{}", summary),
            Err(e) => {
                eprintln!("Battle stalled: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    let finished = battle.is_over();
    let (player, enemy) = battle.into_trainers();
    if !finished {
        println!("Both sides are exhausted. It's a draw.");
    } else if enemy.all_pokemon_fainted() {
        println!("{} wins!", player);
    } else {
        println!("{} wins!", enemy);
    }

    match serde_json::to_string_pretty(&[&player, &enemy]) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing trainers: {}", e),
    }
    ExitCode::SUCCESS
}
