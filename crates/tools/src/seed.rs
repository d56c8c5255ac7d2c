use std::env;
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable that overrides the configured seed.
pub const SEED_ENV_VAR: &str = "MAZE_SEED";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Flag(u64),
    Env(u64),
    Config(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Flag(seed) | Self::Env(seed) | Self::Config(seed) | Self::Generated(seed) => seed,
        }
    }

    pub fn source_label(self) -> &'static str {
        match self {
            Self::Flag(_) => "flag",
            Self::Env(_) => SEED_ENV_VAR,
            Self::Config(_) => "config",
            Self::Generated(_) => "generated",
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

pub fn env_seed() -> Option<String> {
    env::var(SEED_ENV_VAR).ok()
}

/// Picks the seed by precedence: flag, then environment, then config file, then `generated`.
pub fn resolve_seed(
    flag: Option<u64>,
    env_value: Option<&str>,
    config: Option<u64>,
    generated: u64,
) -> Result<SeedChoice, String> {
    if let Some(seed) = flag {
        return Ok(SeedChoice::Flag(seed));
    }
    if let Some(raw) = env_value.map(str::trim).filter(|raw| !raw.is_empty()) {
        return parse_seed_value(raw).map(SeedChoice::Env);
    }
    Ok(match config {
        Some(seed) => SeedChoice::Config(seed),
        None => SeedChoice::Generated(generated),
    })
}

pub fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("seed value '{raw_value}' must be a number"))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
