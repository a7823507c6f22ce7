//! Terminal driver: play the human side against the engine.
//!
//! Commands: `select R C`, `move R C`, `reset`, `show`, `quit`.
//! Set `RUST_LOG=debug` to watch the machine think.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use elimination_tactics::{Engine, EngineConfig, GameState, Position, RuleKind};

#[derive(Parser)]
#[command(author, version, about = "Play elimination tactics in the terminal", long_about = None)]
struct Args {
    /// TOML engine configuration; command-line options override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Elimination rule: blocking, trapped_piece or flood_fill_capture.
    #[arg(long)]
    rule: Option<RuleKind>,

    #[arg(long)]
    seed: Option<u64>,

    /// Bound of the random offset added to machine scores.
    #[arg(long)]
    jitter: Option<u32>,
}

#[derive(Parser)]
enum Command {
    #[command(about = "Select one of your pieces", alias = "s")]
    Select { row: usize, col: usize },
    #[command(about = "Move the selected piece", alias = "m")]
    Move { row: usize, col: usize },
    #[command(about = "Start a new game")]
    Reset,
    #[command(about = "Print the board")]
    Show,
}

fn main() {
    env_logger::init();
    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(rule) = args.rule {
        config = config.with_rule(rule);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(jitter) = args.jitter {
        config = config.with_jitter(jitter);
    }
    config.validate()?;
    log::info!("starting game with {} rule", config.rule);

    let engine = Engine::new(config);
    let mut state = engine.init_game();
    render(&state)?;

    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let mut input = String::new();
        if std::io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        match input.trim() {
            "" => continue,
            "quit" | "exit" => break,
            line => match Command::try_parse_from(std::iter::once("> ").chain(line.split_whitespace())) {
                Err(e) => eprintln!("{e}"),
                Ok(command) => {
                    let next = match command {
                        Command::Select { row, col } => engine.select_piece(state.clone(), row, col),
                        Command::Move { row, col } => engine.submit_move(state.clone(), row, col),
                        Command::Reset => Ok(engine.reset_game()),
                        Command::Show => Ok(state.clone()),
                    };
                    match next {
                        Ok(next) => state = next,
                        Err(e) => eprintln!("rejected: {e}"),
                    }
                    render(&state)?;
                }
            },
        }
    }
    Ok(())
}

fn render(state: &GameState) -> Result<(), Box<dyn std::error::Error>> {
    let targets = state.valid_destinations()?;
    println!("    0 1 2 3");
    for (row, line) in state.board().to_string().lines().enumerate() {
        let cells: Vec<String> = line
            .chars()
            .enumerate()
            .map(|(col, symbol)| {
                let pos = Position::new(row, col);
                if state.selected() == Some(pos) {
                    "*".to_string()
                } else if targets.contains(&pos) {
                    "o".to_string()
                } else {
                    symbol.to_string()
                }
            })
            .collect();
        println!("{row}   {}", cells.join(" "));
    }
    if let Some(reply) = state.last_machine_move() {
        println!("machine played {reply}");
    }
    println!("{}", state.message());
    Ok(())
}
