use std::env;
use std::fmt;
use std::process;

use xorshift128::{ParseStateError, XorShift128};

const DEFAULT_COUNT: usize = 8;
const USAGE: &str = "usage: xs128 <seed <u32> | state <32 hex digits>> [count]";

#[derive(Debug)]
enum ArgError {
    Usage,
    Seed(String),
    Count(String),
    State(ParseStateError),
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgError::Usage => f.write_str(USAGE),
            ArgError::Seed(raw) => write!(f, "invalid seed '{raw}'"),
            ArgError::Count(raw) => write!(f, "invalid count '{raw}'"),
            ArgError::State(err) => write!(f, "invalid state: {err}"),
        }
    }
}

impl std::error::Error for ArgError {}

/// Accepts decimal or `0x`-prefixed hex.
fn parse_seed(raw: &str) -> Result<u32, ArgError> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => raw.parse(),
    };
    parsed.map_err(|_| ArgError::Seed(raw.to_string()))
}

fn parse_count(arg: Option<&String>) -> Result<usize, ArgError> {
    let raw = match arg {
        Some(raw) => raw.clone(),
        None => match env::var("XS128_COUNT") {
            Ok(raw) => raw,
            Err(_) => return Ok(DEFAULT_COUNT),
        },
    };
    raw.trim().parse().map_err(|_| ArgError::Count(raw))
}

fn build(args: &[String]) -> Result<(XorShift128, usize), ArgError> {
    let rng = match (args.get(1).map(String::as_str), args.get(2)) {
        (Some("seed"), Some(raw)) => XorShift128::new(parse_seed(raw)?),
        (Some("state"), Some(raw)) => raw.parse::<XorShift128>().map_err(ArgError::State)?,
        _ => return Err(ArgError::Usage),
    };
    if args.len() > 4 {
        return Err(ArgError::Usage);
    }
    Ok((rng, parse_count(args.get(3))?))
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (mut rng, count) = match build(&args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{err}");
            if !matches!(err, ArgError::Usage) {
                eprintln!("{USAGE}");
            }
            process::exit(2);
        }
    };

    log::info!("generating {count} values from {rng}");
    println!("{}", rng.full_state());
    for _ in 0..count {
        println!("{:08X}", rng.next());
    }
    log::debug!("final state {rng}");
}
