//! LifeRPG - Entry Point
//!
//! A minimal line-oriented front end: it renders state and forwards
//! intents into the core, which owns all of the rules.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use liferpg::items::ItemId;
use liferpg::progression::RestKind;
use liferpg::tasks::TaskId;
use liferpg::Game;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    log::info!("Starting LifeRPG v{}", env!("CARGO_PKG_VERSION"));

    let mut game = Game::new();
    println!("LifeRPG - type 'help' for commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => print_help(),
            "add" => {
                let outcome = game.add_task(rest).map(|_| ());
                report(outcome, &game);
            }
            "done" => match parse_id(rest) {
                Some(id) => {
                    let outcome = game.complete_task(TaskId(id)).map(|_| ());
                    report(outcome, &game);
                }
                None => println!("usage: done <task-id>"),
            },
            "equip" => match parse_id(rest) {
                Some(id) => {
                    let outcome = game.equip_item(ItemId(id)).map(|_| ());
                    report(outcome, &game);
                }
                None => println!("usage: equip <item-id>"),
            },
            "sell" => match parse_id(rest) {
                Some(id) => {
                    let outcome = game.sell_item(ItemId(id)).map(|_| ());
                    report(outcome, &game);
                }
                None => println!("usage: sell <item-id>"),
            },
            "rest" => match rest {
                "video" => {
                    let outcome = game.rest(RestKind::Video);
                    report(outcome, &game);
                }
                "game" => {
                    let outcome = game.rest(RestKind::Game);
                    report(outcome, &game);
                }
                _ => println!("usage: rest video|game"),
            },
            "status" => print_status(&game),
            "state" => println!("{}", serde_json::to_string_pretty(&game.snapshot())?),
            "quit" | "exit" => break,
            other => println!("unknown command '{}', try 'help'", other),
        }
    }

    Ok(())
}

fn parse_id(arg: &str) -> Option<u64> {
    arg.trim_start_matches('#').parse().ok()
}

/// Print the outcome of an intent: the core's latest notice on success,
/// the error itself on a declined intent.
fn report(outcome: Result<(), liferpg::ActionError>, game: &Game) {
    match outcome {
        Ok(()) => {
            if let Some(message) = game.latest_message() {
                println!("{}", message.text);
            }
        }
        Err(err) => println!("{}", err),
    }
}

fn print_status(game: &Game) {
    let player = game.player();
    println!(
        "Level {} | XP {} | Gold {}",
        player.level, player.xp, player.gold
    );

    println!("Tasks:");
    for task in game.tasks().tasks() {
        let mark = if task.completed { "x" } else { " " };
        println!("  [{}] {} {}", mark, task.id, task.description);
    }

    println!("Inventory:");
    for item in game.inventory().items() {
        println!("  {} {}", item.id, item.name);
    }

    println!("Equipment:");
    for slot in game.snapshot().equipment {
        println!("  {:<9} {}", slot.slot, slot.item.unwrap_or("-"));
    }
}

fn print_help() {
    println!("  add <description>   add a task (+10 xp, +5 gold)");
    println!("  done <task-id>      complete a task and loot an item");
    println!("  equip <item-id>     equip an item from the inventory");
    println!("  sell <item-id>      sell an item for 10 gold");
    println!("  rest video|game     spend 30 gold on 30 minutes of rest");
    println!("  status              show player, tasks, and gear");
    println!("  state               dump the full state as JSON");
    println!("  quit                exit");
}
