//! Simple interactive CLI mode
//!
//! Text-based game where the player guesses a generated secret

use crate::core::DigitSequence;
use crate::game::Game;
use crate::output::formatters::answer_marks;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the
/// requested secret length is invalid.
pub fn run_simple<R: Rng>(game: &mut Game<R>, length: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Bulls and Cows - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I've picked a secret of {length} distinct digits. Try to guess it!");
    println!("  - Bull: right digit in the right place");
    println!("  - Cow:  right digit in the wrong place\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'reveal' to show the secret\n");

    game.generate_secret(length).map_err(|e| e.to_string())?;
    let mut history: Vec<String> = Vec::new();

    loop {
        let input = get_user_input(&format!("Guess #{}", history.len() + 1))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.generate_secret(length).map_err(|e| e.to_string())?;
                history.clear();
                println!("\n🔄 New secret generated!\n");
                continue;
            }
            "reveal" | "r" => {
                if let Some(secret) = game.secret() {
                    println!("🔍 The secret is {}\n", secret.to_string().bright_yellow());
                }
                continue;
            }
            _ => {}
        }

        let guess = match DigitSequence::new(&input) {
            Ok(guess) => guess,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        let answer = match game.propose(&guess) {
            Ok(answer) => answer,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        history.push(guess.to_string());

        if answer.is_win(length) {
            println!("\n{}", "═".repeat(70).bright_cyan());
            println!(
                "  🎉 #{} {} is the secret. Congratulations!",
                history.len(),
                guess.to_string().bright_green().bold()
            );
            println!(
                "  Found in {} {}",
                history.len().to_string().bright_cyan().bold(),
                if history.len() == 1 { "guess" } else { "guesses" }
            );
            println!("{}\n", "═".repeat(70).bright_cyan());

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    game.generate_secret(length).map_err(|e| e.to_string())?;
                    history.clear();
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        } else {
            println!("   {}  {answer}\n", answer_marks(answer, length));
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
