//! Interactive practice loop.
//!
//! Run with: `cargo run --example practice`
//!
//! Each round shows one drill question. Press Enter to reveal the matching
//! hands (painted with their tier colors) and the combo coverage, or type
//! `q` to quit. Pass a numeric argument to seed the session and replay the
//! same question sequence: `cargo run --example practice -- 42`.

use std::io::{self, BufRead, Write};

use colored::{ColoredString, Colorize};

use range_trainer::{DrillSession, HandClass, Tier};

/// Paint a hand code with its tier color, background inverted so the tier
/// reads as a swatch.
fn paint(hand: &HandClass) -> ColoredString {
    let code = hand.code.as_str();
    match hand.tier {
        Tier::Purple   => code.magenta().reversed(),
        Tier::White    => code.white().reversed(),
        Tier::Blue     => code.blue().reversed(),
        Tier::Green    => code.green().reversed(),
        Tier::Yellow   => code.yellow().reversed(),
        Tier::Red      => code.red().reversed(),
        Tier::Navy     => code.bright_blue().reversed(),
        Tier::Unranked => code.normal(),
    }
}

fn main() -> io::Result<()> {
    let seed = std::env::args().nth(1).and_then(|arg| arg.parse::<u64>().ok());
    let mut session = DrillSession::new(seed);

    println!("=== Hand range practice ===");
    println!("Press Enter for the answer, 'q' to quit.");

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        let round = session.next_round();

        println!();
        println!("{}", round.prompt.question.as_str().bold());
        print!("\nPress Enter to reveal ('q' to quit): ");
        io::stdout().flush()?;

        line.clear();
        stdin.lock().read_line(&mut line)?;
        if line.trim().eq_ignore_ascii_case("q") {
            println!("Done.");
            return Ok(());
        }

        println!();
        println!("=== Answer ===");
        if round.matches.is_empty() {
            println!("No matching hands.");
        } else {
            let rendered: Vec<String> =
                round.matches.iter().map(|h| paint(h).to_string()).collect();
            println!("{}", rendered.join(", "));
        }
        match round.percent() {
            Some(pct) => println!(
                "Combos: {} / {} = {pct} %",
                round.match_combos, round.pool_combos
            ),
            None => println!("The drilled range holds no combos."),
        }
        println!("==============");
    }
}
