//! Ziffi Chess CLI
//!
//! Play in the terminal, or run matches between difficulty tiers.

use std::env;
use std::io::{self, BufRead, Write};
use std::thread;
use tracing_subscriber::EnvFilter;
use ziffi_controller::{
    render_board, ControllerConfig, FileStore, GameController, GameMode, GameStore, MatchConfig,
    MatchRunner,
};
use ziffi_core::{Color, PieceKind, Square};

fn print_usage() {
    println!("Ziffi Chess");
    println!();
    println!("Usage:");
    println!("  ziffi play [--mode M] [--difficulty D] [--color w|b] [--config PATH]");
    println!("  ziffi match <tier1> <tier2> [--games N]");
    println!();
    println!("Modes:");
    println!("  human-vs-engine    - You against the computer (default)");
    println!("  engine-vs-engine   - Watch two engines play");
    println!("  local-two-player   - Two people at one keyboard");
    println!("  online-two-player  - Opponent moves are typed in for the remote side");
    println!();
    println!("Difficulty tiers:");
    println!("  0 weighted random, 1 capture-biased, 2 greedy, 3-5 minimax depth 2-4");
    println!();
    println!("Examples:");
    println!("  ziffi play --difficulty 4 --color b");
    println!("  ziffi match 5 2 --games 20");
}

fn print_commands() {
    println!("Commands:");
    println!("  d4e5        move (append q/r/b/n to choose a promotion piece)");
    println!("  moves <sq>  list legal moves of a piece");
    println!("  undo, redo  step through history");
    println!("  flip        turn the board around");
    println!("  swap        swap sides with the engine");
    println!("  new         restart the game");
    println!("  save        save the game");
    println!("  load <id>   load a saved game");
    println!("  list        list saved games");
    println!("  status      show turn and result");
    println!("  help, quit");
}

/// Parses `d4e5` or `b7b8n`.
fn parse_move(input: &str) -> Option<(Square, Square, Option<PieceKind>)> {
    if !input.is_ascii() || !(4..=5).contains(&input.len()) {
        return None;
    }
    let from = Square::parse(&input[0..2])?;
    let to = Square::parse(&input[2..4])?;
    let promotion = match input[4..].chars().next() {
        None => None,
        Some(c) => match c.to_ascii_lowercase() {
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            _ => return None,
        },
    };
    Some((from, to, promotion))
}

fn show(controller: &GameController) {
    let highlights: Vec<Square> = controller.valid_moves().iter().map(|mv| mv.to).collect();
    println!();
    print!("{}", render_board(controller.engine(), &highlights));
    println!("{}", controller.status());
}

/// Lets the engine move for as long as it has the turn.
fn run_ai(controller: &mut GameController) {
    while controller.is_ai_turn() {
        thread::sleep(controller.think_delay());
        match controller.ai_turn() {
            Some(mv) => {
                println!("Engine plays {}", mv);
                show(controller);
            }
            None => break,
        }
        if controller.mode() == Some(GameMode::EngineVsEngine) && controller.is_ai_turn() {
            thread::sleep(controller.autoplay_delay());
        }
    }
}

fn run_play(args: &[String]) {
    let mut config_path = String::from("ziffi.toml");
    let mut mode = None;
    let mut difficulty = None;
    let mut color = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--mode" | "-m" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<GameMode>() {
                        Ok(m) => mode = Some(m),
                        Err(e) => eprintln!("Warning: {}", e),
                    }
                    i += 1;
                }
            }
            "--difficulty" | "-d" => {
                if i + 1 < args.len() {
                    difficulty = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--color" | "-c" => {
                if i + 1 < args.len() {
                    color = args[i + 1].chars().next().and_then(Color::from_code);
                    i += 1;
                }
            }
            "--config" => {
                if i + 1 < args.len() {
                    config_path = args[i + 1].clone();
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    let mut config = match ControllerConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    if let Some(d) = difficulty {
        config.difficulty = d;
    }
    if let Some(c) = color {
        config.human_color = c;
    }
    let mode = mode.unwrap_or(config.mode);

    let mut store = FileStore::new(config.save_dir.clone());
    let mut controller = GameController::new(config);
    controller.set_game_mode(mode);

    println!("=== Ziffi Chess: {} ===", mode);
    print_commands();
    show(&controller);
    run_ai(&mut controller);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let mut words = line.split_whitespace();
        let Some(cmd) = words.next() else {
            continue;
        };

        match cmd {
            "quit" | "exit" | "q" => break,
            "help" | "?" => print_commands(),
            "status" => println!("{}", controller.status()),
            "undo" => {
                if !controller.undo_move() {
                    println!("Nothing to undo");
                }
                show(&controller);
            }
            "redo" => {
                if !controller.redo_move() {
                    println!("Nothing to redo");
                }
                show(&controller);
            }
            "flip" => {
                controller.flip_board();
                show(&controller);
            }
            "swap" => {
                controller.swap_roles();
                show(&controller);
            }
            "new" => {
                controller.new_game();
                show(&controller);
            }
            "save" => match controller.save_current_game(&mut store) {
                Ok(id) => println!("Saved as {}", id),
                Err(e) => eprintln!("Error: {}", e),
            },
            "load" => match words.next() {
                Some(id) => match controller.load_game(&store, id) {
                    Ok(()) => show(&controller),
                    Err(e) => eprintln!("Error: {}", e),
                },
                None => eprintln!("Error: load requires a game id"),
            },
            "list" => match store.list() {
                Ok(ids) if ids.is_empty() => println!("No saved games in {}", store.dir().display()),
                Ok(ids) => ids.iter().for_each(|id| println!("  {}", id)),
                Err(e) => eprintln!("Error: {}", e),
            },
            "moves" => match words.next().and_then(Square::parse) {
                Some(sq) => {
                    let moves: Vec<String> = controller
                        .select_square(sq.row, sq.col)
                        .iter()
                        .map(|mv| mv.to_string())
                        .collect();
                    show(&controller);
                    println!("{}", if moves.is_empty() { "no moves".to_string() } else { moves.join(" ") });
                    controller.clear_selection();
                }
                None => eprintln!("Error: moves requires a square, e.g. moves d3"),
            },
            other => match parse_move(other) {
                Some((from, to, promotion)) => {
                    let played = controller.submit_move(from, to, promotion)
                        || controller.apply_remote_move(from, to, promotion);
                    if played {
                        show(&controller);
                    } else {
                        println!("Illegal move: {}", other);
                    }
                }
                None => println!("Unknown command: {} (try help)", other),
            },
        }

        run_ai(&mut controller);
    }
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two difficulty tiers");
        print_usage();
        return;
    }

    let (Ok(tier1), Ok(tier2)) = (args[0].parse::<u8>(), args[1].parse::<u8>()) else {
        eprintln!("Error: tiers must be numbers, got {} and {}", args[0], args[1]);
        return;
    };

    let mut num_games: u32 = 10;
    let mut i = 2;
    while i < args.len() {
        if matches!(args[i].as_str(), "--games" | "-g") && i + 1 < args.len() {
            num_games = args[i + 1].parse().unwrap_or(10);
            i += 1;
        }
        i += 1;
    }

    println!("=== Match: tier {} vs tier {} ===", tier1, tier2);
    println!("Games: {}", num_games);
    println!();

    let config = MatchConfig {
        num_games,
        verbose: true,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    let result = runner.run_match(tier1, tier2, &mut rand::thread_rng());

    println!();
    println!("=== Final Result ===");
    println!(
        "tier {}: {} wins, {} losses, {} draws",
        tier1, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "play" => run_play(&args[2..]),
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
