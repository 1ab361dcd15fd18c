//! CLI Niu Niu example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use niurs::{Card, Color, Deck, EvaluationResult, RuleSet, evaluate_with};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    let level = if std::env::args().any(|arg| arg == "-v") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);

    println!("Niu Niu CLI example (type 'q' to quit)");
    println!("Enter five codes like `As 10h 3d 6c Kh`, 'd' to deal, 'r' to toggle rules.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::new(seed);
    let mut rules = RuleSet::default();

    loop {
        let input = prompt_line("> ");
        let codes: Vec<String> = match input.as_str() {
            "q" | "quit" => break,
            "" => continue,
            "r" => {
                rules = if rules == RuleSet::default() {
                    RuleSet::revised()
                } else {
                    RuleSet::default()
                };
                println!("Pair tail pays x{}.", rules.pair_multiplier);
                continue;
            }
            "d" => {
                if deck.remaining() < 5 {
                    deck.reshuffle();
                    println!("Deck reshuffled.");
                }
                let Some(hand) = deck.deal_hand() else {
                    continue;
                };
                hand.into()
            }
            line => line.split_whitespace().map(str::to_string).collect(),
        };

        println!("Hand: {}", format_codes(&codes));
        let result = evaluate_with(&codes, &rules);
        print_result(&result);
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_string()
}

fn print_result(result: &EvaluationResult) {
    println!(
        "{} x{}",
        colorize(&result.label, result.color),
        result.multiplier
    );
    if !result.body.is_empty() {
        println!("  body: {}", format_codes(&result.body));
    }
    if !result.tail.is_empty() {
        println!("  tail: {}", format_codes(&result.tail));
    }
}

fn format_codes(codes: &[String]) -> String {
    codes
        .iter()
        .map(|code| Card::decode(code).map_or_else(|_| code.clone(), |card| card.label()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn colorize(text: &str, color: Color) -> String {
    format!(
        "\u{1b}[38;2;{};{};{}m{text}\u{1b}[0m",
        color.r, color.g, color.b
    )
}
