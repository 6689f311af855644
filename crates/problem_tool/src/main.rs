//! Problem tool CLI
//!
//! Check authored problems, ask an opponent for a reply, count positions.

use std::env;
use std::path::Path;

use anyhow::{bail, Context, Result};
use problem_tool::{create_opponent, Problem};
use shogi_core::{perft, BoardState};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("ML-shogi Problem Tool");
    println!();
    println!("Usage:");
    println!("  problem_tool check <problem.toml>...");
    println!("  problem_tool export <problem.toml>");
    println!("  problem_tool reply <board> [--opponent NAME]");
    println!("  problem_tool perft <board> <depth>");
    println!();
    println!("Opponents:");
    println!("  defender      - Scripted check defence (default)");
    println!("  random        - Uniformly random legal move");
    println!();
    println!("Examples:");
    println!("  problem_tool check problems/corner_mate.toml");
    println!("  problem_tool reply \"4k4/4G4/9/9/9/9/9/9/4K4 w -\" --opponent random");
}

fn run_check(args: &[String]) -> Result<bool> {
    if args.is_empty() {
        bail!("check requires at least one problem file");
    }

    let mut all_clean = true;
    for file in args {
        let problem = Problem::load(Path::new(file))?;
        let report = problem.check()?;

        println!(
            "{}: {} lines, {} ending in mate, {} issues",
            problem.name,
            report.lines,
            report.mates,
            report.issues.len()
        );
        for issue in &report.issues {
            println!("  {issue}");
        }
        all_clean &= report.is_clean();
    }
    Ok(all_clean)
}

fn run_export(args: &[String]) -> Result<()> {
    let Some(file) = args.first() else {
        bail!("export requires a problem file");
    };
    let problem = Problem::load(Path::new(file))?;
    problem.start_state()?;

    let stored = move_tree::ProblemLines::from_tree(&problem.tree());
    println!("{}", stored.to_json()?);
    Ok(())
}

fn run_reply(args: &[String]) -> Result<()> {
    let Some(board) = args.first() else {
        bail!("reply requires a board");
    };

    let mut opponent_name = "defender".to_string();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--opponent" | "-o" => {
                if i + 1 < args.len() {
                    opponent_name = args[i + 1].clone();
                    i += 1;
                }
            }
            other => bail!("unexpected argument '{other}'"),
        }
        i += 1;
    }

    let state = BoardState::from_sfen(board).context("Invalid board")?;
    let mut opponent = create_opponent(&opponent_name)
        .with_context(|| format!("Unknown opponent: {opponent_name}"))?;
    opponent.new_problem();

    let reply = opponent.reply(&state);
    info!(opponent = opponent.name(), nodes = reply.nodes, "reply computed");
    match reply.best_move {
        Some(mv) => println!("{mv} (score {})", reply.score),
        None => println!("no legal reply"),
    }
    Ok(())
}

fn run_perft(args: &[String]) -> Result<()> {
    let [board, depth] = args else {
        bail!("perft requires a board and a depth");
    };
    let state = BoardState::from_sfen(board).context("Invalid board")?;
    let depth: u8 = depth
        .parse()
        .with_context(|| format!("Invalid depth '{depth}'"))?;

    println!("{}", perft(&state, depth));
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "check" => {
            if !run_check(rest)? {
                std::process::exit(1);
            }
        }
        "export" => run_export(rest)?,
        "reply" => run_reply(rest)?,
        "perft" => run_perft(rest)?,
        "help" | "--help" | "-h" => print_usage(),
        other => {
            print_usage();
            bail!("unknown command '{other}'");
        }
    }
    Ok(())
}
