//! Terminal output.

use std::path::Path;

use colored::Colorize;
use strum::IntoEnumIterator;
use wineai_application::TurnReply;
use wineai_core::conversation::{ConversationMessage, MessageRole};
use wineai_core::filter::{FilterSelection, Grape, PRICE_CEILING, PRICE_FLOOR, PRICE_STEP, Region};
use wineai_core::persona::{APP_CAPTION, APP_TITLE};
use wineai_core::quick_prompt::QUICK_PROMPTS;

use crate::commands::COMMANDS;

pub fn print_banner() {
    println!("{}", format!("=== {APP_TITLE} ===").bright_magenta().bold());
    println!("{}", APP_CAPTION.bright_black());
    println!(
        "{}",
        "Type a message, '/help' for commands, or 'quit' to exit.".bright_black()
    );
    println!();
}

pub fn print_user(text: &str) {
    println!("{}", format!("> {}", text.trim()).green());
}

pub fn print_assistant(text: &str) {
    for line in text.lines() {
        println!("{}", line.bright_blue());
    }
}

pub fn print_thinking() {
    println!("{}", "Thinking...".bright_black().italic());
}

pub fn print_turn(turn: &TurnReply) {
    if let Some(failure) = &turn.failure {
        eprintln!("{}", failure.banner().red());
    }
    print_assistant(&turn.reply.display_text);
    if let Some(query) = turn.reply.image_query() {
        println!(
            "{}",
            format!("(Suggested image search: {query})").bright_black().italic()
        );
    }
    println!();
}

pub fn print_history(messages: &[&ConversationMessage]) {
    for message in messages {
        match message.role {
            MessageRole::User => print_user(&message.content),
            MessageRole::Assistant => print_assistant(&message.content),
            MessageRole::System => {}
        }
        println!();
    }
}

pub fn print_filters(filters: &FilterSelection) {
    println!("{}", "Wine Preferences".bright_yellow());
    println!("  Grape Variety: {}", filters.grape.label().yellow());
    println!("  Region:        {}", filters.region.label().yellow());
    println!("  Price Range:   {}", filters.price.to_string().yellow());
}

pub fn print_grapes(current: Grape) {
    println!("{}", "Grape varieties:".bright_yellow());
    for grape in Grape::iter() {
        print_option(grape.label(), grape == current);
    }
}

pub fn print_regions(current: Region) {
    println!("{}", "Regions:".bright_yellow());
    for region in Region::iter() {
        print_option(region.label(), region == current);
    }
}

fn print_option(label: &str, selected: bool) {
    if selected {
        println!("  {}", format!("* {label}").green());
    } else {
        println!("    {label}");
    }
}

pub fn print_presets() {
    println!("{}", "Or try one of these:".bright_yellow());
    for (index, prompt) in QUICK_PROMPTS.iter().enumerate() {
        println!("  /{}  {}", index + 1, prompt);
    }
}

pub fn print_help() {
    println!("{}", "Commands:".bright_yellow());
    for command in COMMANDS {
        println!("  {} {}", format!("{command:<10}").bright_cyan(), describe(command));
    }
    println!("  {} Leave WineAI", format!("{:<10}", "quit").bright_cyan());
}

fn describe(command: &str) -> String {
    match command {
        "/grape" => "Set the grape variety (name or 'any')".to_string(),
        "/grapes" => "List grape varieties".to_string(),
        "/region" => "Set the region (name or 'any')".to_string(),
        "/regions" => "List regions".to_string(),
        "/price" => format!(
            "Set the price range, e.g. '/price 20 80' (${PRICE_FLOOR}-${PRICE_CEILING}, steps of ${PRICE_STEP})"
        ),
        "/filters" => "Show the current preferences".to_string(),
        "/preset" => "Send a preset prompt, e.g. '/preset 2'".to_string(),
        "/presets" => "List the preset prompts".to_string(),
        "/history" => "Show the conversation so far".to_string(),
        "/help" => "Show this help".to_string(),
        slot => match slot
            .trim_start_matches('/')
            .parse::<usize>()
            .ok()
            .and_then(|n| QUICK_PROMPTS.get(n.wrapping_sub(1)))
        {
            Some(prompt) => format!("Send \"{prompt}\""),
            None => String::new(),
        },
    }
}

pub fn print_warning(message: &str) {
    println!("{}", message.yellow());
}

pub fn print_missing_credentials(secret_file: &Path) {
    eprintln!(
        "{}",
        format!(
            "OpenAI API Key not found. Please set it in {} or as an environment variable OPENAI_API_KEY.",
            secret_file.display()
        )
        .red()
        .bold()
    );
}
