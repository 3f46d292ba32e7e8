//! Parsing of REPL input lines.
//!
//! Anything that does not start with `/` (and is not `quit`/`exit`) is a chat
//! message. Slash commands adjust filters, pick presets or show state.

use std::str::FromStr;

use thiserror::Error;
use wineai_core::filter::{Grape, PriceRange, Region};
use wineai_core::quick_prompt::{QUICK_PROMPTS, quick_prompt};

/// Slash commands offered for completion, in help order.
pub const COMMANDS: &[&str] = &[
    "/grape",
    "/grapes",
    "/region",
    "/regions",
    "/price",
    "/filters",
    "/preset",
    "/presets",
    "/1",
    "/2",
    "/3",
    "/history",
    "/help",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    History,
    Filters,
    Grapes,
    Regions,
    Presets,
    SetGrape(Grape),
    SetRegion(Region),
    SetPrice(PriceRange),
    /// A preset prompt to send right away.
    Preset(&'static str),
    /// Free text for the sommelier (may be blank).
    Message(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type /help for the list of commands.")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    MissingArgument(&'static str),

    #[error("Unknown grape '{0}'. Type /grapes to see the options.")]
    UnknownGrape(String),

    #[error("Unknown region '{0}'. Type /regions to see the options.")]
    UnknownRegion(String),

    #[error("Invalid price range '{0}'. Usage: /price <min> <max>")]
    InvalidPrice(String),

    #[error("There is no preset '{0}'. Choose 1 to {count}.", count = QUICK_PROMPTS.len())]
    UnknownPreset(String),
}

pub fn parse(line: &str) -> Result<ReplCommand, CommandError> {
    let trimmed = line.trim();

    if trimmed == "quit" || trimmed == "exit" {
        return Ok(ReplCommand::Quit);
    }

    let Some(rest) = trimmed.strip_prefix('/') else {
        return Ok(ReplCommand::Message(line.to_string()));
    };

    let (name, argument) = match rest.split_once(char::is_whitespace) {
        Some((name, argument)) => (name, argument.trim()),
        None => (rest, ""),
    };

    match name {
        "help" => Ok(ReplCommand::Help),
        "history" => Ok(ReplCommand::History),
        "filters" => Ok(ReplCommand::Filters),
        "grapes" => Ok(ReplCommand::Grapes),
        "regions" => Ok(ReplCommand::Regions),
        "presets" => Ok(ReplCommand::Presets),
        "grape" => {
            require(argument, "/grape <name|any>")?;
            Grape::from_str(argument)
                .map(ReplCommand::SetGrape)
                .map_err(|_| CommandError::UnknownGrape(argument.to_string()))
        }
        "region" => {
            require(argument, "/region <name|any>")?;
            Region::from_str(argument)
                .map(ReplCommand::SetRegion)
                .map_err(|_| CommandError::UnknownRegion(argument.to_string()))
        }
        "price" => {
            require(argument, "/price <min> <max>")?;
            parse_price(argument).map(ReplCommand::SetPrice)
        }
        "preset" => {
            require(argument, "/preset <1-3>")?;
            parse_preset(argument)
        }
        slot if slot.chars().all(|c| c.is_ascii_digit()) && !slot.is_empty() => {
            parse_preset(slot)
        }
        _ => Err(CommandError::UnknownCommand(format!("/{name}"))),
    }
}

fn require(argument: &str, usage: &'static str) -> Result<(), CommandError> {
    if argument.is_empty() {
        Err(CommandError::MissingArgument(usage))
    } else {
        Ok(())
    }
}

/// Accepts `30 120`, `30-120` and `$30 - $120`.
fn parse_price(argument: &str) -> Result<PriceRange, CommandError> {
    let invalid = || CommandError::InvalidPrice(argument.to_string());

    let bounds: Vec<u32> = argument
        .split(|c: char| c.is_whitespace() || c == '-')
        .map(|part| part.trim().trim_start_matches('$'))
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<u32>().map_err(|_| invalid()))
        .collect::<Result<_, _>>()?;

    match bounds.as_slice() {
        [min, max] => Ok(PriceRange::from_slider(*min, *max)),
        _ => Err(invalid()),
    }
}

fn parse_preset(slot: &str) -> Result<ReplCommand, CommandError> {
    slot.parse::<usize>()
        .ok()
        .and_then(quick_prompt)
        .map(ReplCommand::Preset)
        .ok_or_else(|| CommandError::UnknownPreset(slot.to_string()))
}
