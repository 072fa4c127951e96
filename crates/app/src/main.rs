mod host;
mod terminal;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use playtime_core::GameConfig;
use playtime_core::model::{GameKind, HUB_PATH};
use services::{AppServices, Clock};

use crate::host::TerminalGame;
use crate::terminal::{TerminalAudio, TerminalNotifier};

#[derive(Debug, Error)]
enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("unknown game: {raw} (see `games`)")]
    UnknownGame { raw: String },
    #[error("invalid --seed value: {raw}")]
    InvalidSeed { raw: String },
    #[error("invalid --db value: {raw}")]
    InvalidDbUrl { raw: String },
    #[error("expected `on` or `off`, got: {raw}")]
    InvalidSwitch { raw: String },
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- games                 [--db <sqlite_url>] [--config <path>]");
    eprintln!("  cargo run -p app -- play <game> [--seed <n>] [--db <sqlite_url>] [--config <path>]");
    eprintln!("  cargo run -p app -- mute <on|off>         [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://playtime.sqlite3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PLAYTIME_DB_URL, PLAYTIME_CONFIG, PLAYTIME_SEED, PLAYTIME_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Games,
    Play(GameKind),
    Mute(bool),
}

struct Args {
    command: Command,
    db_url: String,
    config_path: Option<PathBuf>,
    seed: Option<u64>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let command = match args.next().as_deref() {
            None | Some("games") => Command::Games,
            Some("play") => {
                let raw = require_value(&mut args, "play")?;
                let kind = GameKind::from_slug(&raw)
                    .or_else(|| GameKind::from_path(&raw))
                    .ok_or(ArgsError::UnknownGame { raw })?;
                Command::Play(kind)
            }
            Some("mute") => match require_value(&mut args, "mute")?.as_str() {
                "on" => Command::Mute(true),
                "off" => Command::Mute(false),
                raw => {
                    return Err(ArgsError::InvalidSwitch {
                        raw: raw.to_owned(),
                    });
                }
            },
            Some(other) => return Err(ArgsError::UnknownArg(other.to_owned())),
        };

        let mut db_url = std::env::var("PLAYTIME_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://playtime.sqlite3".into(), normalize_sqlite_url);
        let mut config_path = std::env::var_os("PLAYTIME_CONFIG").map(PathBuf::from);
        let mut seed = std::env::var("PLAYTIME_SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--config" => {
                    config_path = Some(PathBuf::from(require_value(&mut args, "--config")?));
                }
                "--seed" => {
                    let value = require_value(&mut args, "--seed")?;
                    let parsed = value
                        .parse::<u64>()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            command,
            db_url,
            config_path,
            seed,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let raw = std::fs::read_to_string(path)?;
    let config = GameConfig::from_json_str(&raw)?;
    tracing::info!(path = %path.display(), "loaded game config");
    Ok(config)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("PLAYTIME_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn random_seed() -> u64 {
    let now = Clock::default_clock().now();
    u64::try_from(now.timestamp_micros()).unwrap_or_default()
}

fn build_game(services: &AppServices, kind: GameKind, seed: u64) -> Box<dyn TerminalGame> {
    match kind {
        GameKind::Colors => Box::new(services.color_game(seed)),
        GameKind::Shapes => Box::new(services.shape_game(seed)),
        GameKind::Numbers => Box::new(services.counting_game(seed)),
        GameKind::Letters => Box::new(services.letter_game(seed)),
        GameKind::Music => Box::new(services.sequencer()),
        GameKind::Memory => Box::new(services.memory_game(seed)),
        GameKind::Sorting => Box::new(services.sorting_game(seed)),
        GameKind::DailyChallenge => Box::new(services.daily_challenge()),
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let config = load_config(parsed.config_path.as_ref())?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(
        &parsed.db_url,
        config,
        Clock::default_clock(),
        Arc::new(TerminalAudio),
        Arc::new(TerminalNotifier),
    )
    .await?;
    tracing::info!(db = %parsed.db_url, "playtime ready");

    match parsed.command {
        Command::Games => {
            println!("Games ({HUB_PATH}):");
            for kind in services.catalog() {
                println!("  {:<16} {:<18} {}", kind.slug(), kind.title(), kind.description());
            }
            println!("Sound: {}", if services.audio().is_muted() { "off" } else { "on" });
        }
        Command::Play(kind) => {
            let seed = parsed.seed.unwrap_or_else(random_seed);
            tracing::info!(game = %kind, path = %kind.path(), seed, "starting game");
            let mut game = build_game(&services, kind, seed);
            host::run(&services, game.as_mut()).await?;
        }
        Command::Mute(muted) => {
            services.audio().set_muted(muted).await?;
            println!("Sound {}", if muted { "off" } else { "on" });
        }
    }

    services.shutdown();
    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
