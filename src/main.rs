//! Number Circles entry point
//!
//! Headless front end: prints the board as JSON, then reads taps as `x y`
//! lines from stdin and prints the status after each one.
//!
//! Usage: `number-circles [WIDTH HEIGHT [SEED]]`

use std::io::{self, BufRead, Write};
use std::time::Instant;

use glam::Vec2;

use number_circles::persistence::JsonFileStore;
use number_circles::{Game, Settings};

const SETTINGS_PATH: &str = "number_circles.json";
const BEST_TIME_PATH: &str = "number_circles_best.json";

const DEFAULT_WIDTH: f32 = 480.0;
const DEFAULT_HEIGHT: f32 = 800.0;

/// Surface size and optional seed from the command line
struct Args {
    width: f32,
    height: f32,
    seed: Option<u64>,
}

impl Args {
    fn parse() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let number = |s: &String| s.parse::<f32>().map_err(|e| format!("bad dimension {:?}: {}", s, e));

        let (width, height) = match args.as_slice() {
            [] => (DEFAULT_WIDTH, DEFAULT_HEIGHT),
            [w, h, ..] => (number(w)?, number(h)?),
            [_] => return Err("expected both WIDTH and HEIGHT".to_string()),
        };
        let seed = match args.get(2) {
            Some(s) => Some(s.parse::<u64>().map_err(|e| format!("bad seed {:?}: {}", s, e))?),
            None => None,
        };

        Ok(Self { width, height, seed })
    }
}

fn main() {
    env_logger::init();
    log::info!("Number Circles starting...");

    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse()?;
    let settings = Settings::load_from(SETTINGS_PATH);
    let mut game = Game::new(settings, JsonFileStore::new(BEST_TIME_PATH))?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout().lock();
    let mut seed = args.seed;

    loop {
        if game.needs_layout() {
            // A fixed seed applies to the first board only
            let packing = game.new_round(args.width, args.height, seed.take())?;
            writeln!(stdout, "{}", serde_json::to_string(packing)?)?;
            writeln!(stdout, "{}", game.status())?;
            stdout.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line == "q" {
            break;
        }

        let Some(point) = parse_point(line) else {
            writeln!(stdout, "expected `x y`, got {:?}", line)?;
            continue;
        };

        let outcome = game.tap(point, Instant::now());
        if outcome.feedback {
            // Terminal bell stands in for vibration
            write!(stdout, "\x07")?;
        }
        if let Some(warning) = &outcome.warning {
            writeln!(stdout, "warning: {}", warning)?;
        }
        writeln!(stdout, "{}", outcome.status)?;
        stdout.flush()?;
    }

    log::info!("Bye");
    Ok(())
}

fn parse_point(line: &str) -> Option<Vec2> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    parts.next().is_none().then(|| Vec2::new(x, y))
}
