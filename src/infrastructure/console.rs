//! Text console - stands in for the in-game UI buttons
//!
//! One command per line. Each command maps onto a [`GameSession`] trigger and
//! produces a reply line for the operator.

use std::fmt::Write as _;
use std::io::BufRead;
use std::str::FromStr;

use chrono::Utc;
use tokio::sync::mpsc;

use crate::application::services::GameSession;
use crate::domain::value_objects::{AddressId, CustomValue};

pub const HELP: &str = "commands: buy <id> <price> [date] | sell <id> <price> | upgrade <id> <level> \
| tag <id> <key> <value> | list | candidates | collect | pause | resume | save | load | new | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Buy {
        address_id: AddressId,
        price: i64,
        date: Option<String>,
    },
    Sell {
        address_id: AddressId,
        price: i64,
    },
    Upgrade {
        address_id: AddressId,
        level: u32,
    },
    Tag {
        address_id: AddressId,
        key: String,
        value: CustomValue,
    },
    List,
    Candidates,
    Collect,
    Pause,
    Resume,
    Save,
    Load,
    NewGame,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("missing argument <{0}>")]
    MissingArgument(&'static str),
    #[error("invalid {name}: '{value}'")]
    InvalidArgument { name: &'static str, value: String },
}

fn parse_arg<T: FromStr>(
    args: &[&str],
    position: usize,
    name: &'static str,
) -> Result<T, CommandParseError> {
    let raw = args
        .get(position)
        .ok_or(CommandParseError::MissingArgument(name))?;
    raw.parse().map_err(|_| CommandParseError::InvalidArgument {
        name,
        value: raw.to_string(),
    })
}

/// `true`/`false` become flags, finite numbers become numbers, anything else
/// (the rest of the line) is text
fn parse_custom_value(args: &[&str], position: usize) -> Result<CustomValue, CommandParseError> {
    if args.len() <= position {
        return Err(CommandParseError::MissingArgument("value"));
    }
    let raw = args[position..].join(" ");
    if let Ok(flag) = raw.parse::<bool>() {
        return Ok(flag.into());
    }
    match raw.parse::<f64>() {
        Ok(number) => CustomValue::try_from(number).map_err(|_| CommandParseError::InvalidArgument {
            name: "value",
            value: raw,
        }),
        Err(_) => Ok(raw.into()),
    }
}

impl FromStr for ConsoleCommand {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandParseError::Empty)?;
        let args: Vec<&str> = words.collect();

        match verb.to_ascii_lowercase().as_str() {
            "buy" => Ok(ConsoleCommand::Buy {
                address_id: parse_arg(&args, 0, "id")?,
                price: parse_arg(&args, 1, "price")?,
                date: (args.len() > 2).then(|| args[2..].join(" ")),
            }),
            "sell" => Ok(ConsoleCommand::Sell {
                address_id: parse_arg(&args, 0, "id")?,
                price: parse_arg(&args, 1, "price")?,
            }),
            "upgrade" => Ok(ConsoleCommand::Upgrade {
                address_id: parse_arg(&args, 0, "id")?,
                level: parse_arg(&args, 1, "level")?,
            }),
            "tag" => Ok(ConsoleCommand::Tag {
                address_id: parse_arg(&args, 0, "id")?,
                key: parse_arg(&args, 1, "key")?,
                value: parse_custom_value(&args, 2)?,
            }),
            "list" | "ls" => Ok(ConsoleCommand::List),
            "candidates" => Ok(ConsoleCommand::Candidates),
            "collect" => Ok(ConsoleCommand::Collect),
            "pause" => Ok(ConsoleCommand::Pause),
            "resume" => Ok(ConsoleCommand::Resume),
            "save" => Ok(ConsoleCommand::Save),
            "load" => Ok(ConsoleCommand::Load),
            "new" => Ok(ConsoleCommand::NewGame),
            "help" | "?" => Ok(ConsoleCommand::Help),
            "quit" | "exit" => Ok(ConsoleCommand::Quit),
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleReply {
    Text(String),
    Quit,
}

/// Run one command against the session
pub fn handle_command(session: &mut GameSession, command: ConsoleCommand) -> ConsoleReply {
    let text = match command {
        ConsoleCommand::Buy {
            address_id,
            price,
            date,
        } => {
            let date = date.unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());
            match session.purchase(address_id, price, date) {
                Ok(business) => format!(
                    "bought {} '{}' ({}) for {}",
                    business.address_id, business.name, business.business_type, price
                ),
                Err(e) => format!("purchase failed: {}", e),
            }
        }
        ConsoleCommand::Sell { address_id, price } => match session.sell(address_id, price) {
            Ok(business) => format!("sold {} '{}' for {}", address_id, business.name, price),
            Err(e) => format!("sale failed: {}", e),
        },
        ConsoleCommand::Upgrade { address_id, level } => {
            match session.set_upgrade_level(address_id, level) {
                Ok(()) => format!("{} is now upgrade level {}", address_id, level),
                Err(e) => format!("upgrade failed: {}", e),
            }
        }
        ConsoleCommand::Tag {
            address_id,
            key,
            value,
        } => {
            let reply = format!("{} {} = {}", address_id, key, value);
            match session.set_custom_value(address_id, key, value) {
                Ok(()) => reply,
                Err(e) => format!("tag failed: {}", e),
            }
        }
        ConsoleCommand::List => render_ledger(session),
        ConsoleCommand::Candidates => {
            let candidates = session.candidates();
            let mut out = format!("{} candidate(s)", candidates.len());
            for c in &candidates {
                let _ = write!(
                    out,
                    "\n  {:>6}  {:<28} staff {:>3}  {}",
                    c.address_id(),
                    c.address.name,
                    c.employee_count,
                    c.floor_name
                );
            }
            out
        }
        ConsoleCommand::Collect => format!("collected {}", session.collect_now()),
        ConsoleCommand::Pause => {
            session.set_paused(true);
            "paused".to_string()
        }
        ConsoleCommand::Resume => {
            session.set_paused(false);
            "resumed".to_string()
        }
        ConsoleCommand::Save => {
            session.on_game_saved();
            "saved".to_string()
        }
        ConsoleCommand::Load => {
            session.reload();
            format!("loaded {} business(es)", session.ledger().len())
        }
        ConsoleCommand::NewGame => {
            session.on_new_game();
            format!("new game, {} business(es) on file", session.ledger().len())
        }
        ConsoleCommand::Help => HELP.to_string(),
        ConsoleCommand::Quit => return ConsoleReply::Quit,
    };
    ConsoleReply::Text(text)
}

/// Read stdin lines on a dedicated thread.
///
/// The channel closes when stdin reaches EOF or fails.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("Console input failed: {}", e);
                    break;
                }
            }
        }
    });
    rx
}

fn render_ledger(session: &GameSession) -> String {
    let ledger = session.ledger();
    let settings = ledger.settings();
    let mut out = format!(
        "{} business(es), {} per collection, next in {}s",
        ledger.len(),
        ledger.total_daily_income(),
        session.timer().remaining().as_secs()
    );
    for b in ledger.businesses() {
        let _ = write!(
            out,
            "\n  {:>6}  {:<28} {:<14} lvl {}  staff {:>3}  income {}",
            b.address_id,
            b.name,
            b.business_type,
            b.upgrade_level,
            b.employee_count,
            b.income(settings)
        );
        for (key, value) in &b.custom_data {
            let _ = write!(out, "\n          {} = {}", key, value);
        }
    }
    out
}
