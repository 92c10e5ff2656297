//! Interactive play mode
//!
//! The user keeps the secret; the solver suggests guesses and reads back the
//! feedback as `exact partial`.

use crate::core::Feedback;
use crate::output::formatters::{code_to_pegs, feedback_to_pegs};
use crate::solver::minimax::worst_case_reduction;
use crate::solver::{Game, Solver, SolverError, Strategy};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Quit,
    New,
    Undo,
    Win,
    Feedback(Feedback),
    Invalid,
}

/// What the user answered to a suggested guess
enum Reply {
    Feedback(Feedback),
    New,
    Undo,
}

fn parse_input(input: &str) -> Input {
    match input.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::New,
        "undo" | "u" => Input::Undo,
        "win" | "correct" | "yes" | "solved" => Input::Win,
        other => Feedback::from_str(other).map_or(Input::Invalid, Input::Feedback),
    }
}

/// Run the interactive mode
///
/// # Errors
///
/// Returns an error on I/O failure or if the solver cannot provide a guess for
/// a reason other than contradictory feedback.
pub fn run_play<S: Strategy>(solver: &Solver<S>) -> Result<()> {
    let length = solver.config().length();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Mastermind Solver - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a secret ({}).", solver.config());
    println!("After each guess, enter the feedback as two numbers:\n");
    println!("  - exact:   right color in the right position");
    println!("  - partial: right color in the wrong position");
    println!("  - e.g. '1 2', or 'win' if the guess is your secret\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last feedback\n");

    let mut game = solver.new_game();

    loop {
        let guess = match solver.next_guess(&game) {
            Ok(guess) => guess,
            Err(SolverError::NoCandidates) => {
                println!("\n❌ No candidates remain! Your feedback may be incorrect.");
                match recover(game, solver)? {
                    Some(recovered) => game = recovered,
                    None => return Ok(()),
                }
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let candidates = game.candidates();
        let remaining = candidates.len();
        let worst = remaining - worst_case_reduction(&guess, candidates.codes());

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {}: {remaining} candidates remaining", game.round() + 1);
        println!("────────────────────────────────────────────────────────────");
        println!("\n📊 Suggested guess: {}", code_to_pegs(&guess));
        println!("   Worst case:      {worst} candidates\n");

        if remaining <= 10 {
            println!("Remaining candidates:");
            for candidate in candidates {
                println!("  • {}", code_to_pegs(candidate));
            }
            println!();
        }

        game.submit_guess(guess)?;

        let feedback = loop {
            let input = get_user_input("Enter feedback (exact partial, 'win', or command)")?;
            match parse_input(&input) {
                Input::Quit => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Input::New => break Reply::New,
                Input::Undo if game.round() == 0 => println!("Nothing to undo!\n"),
                Input::Undo => break Reply::Undo,
                Input::Win => break Reply::Feedback(Feedback::perfect(length)),
                Input::Feedback(feedback) if feedback.fits(length) => {
                    break Reply::Feedback(feedback);
                }
                Input::Feedback(_) | Input::Invalid => {
                    println!("❌ Invalid feedback! Enter two numbers adding up to at most {length}");
                }
            }
        };

        let feedback = match feedback {
            Reply::Feedback(feedback) => feedback,
            Reply::New => {
                game = solver.new_game();
                println!("\n🔄 New game started!\n");
                continue;
            }
            Reply::Undo => {
                game = game.rewound(solver.space());
                println!("✓ Undone! Back to turn {}\n", game.round() + 1);
                continue;
            }
        };

        match game.apply_feedback(feedback).cloned() {
            Ok(round) if feedback.is_solved(length) => {
                celebrate(&game, round.number, length);

                if get_user_input("Play again? (yes/no)")?.to_lowercase().starts_with('y') {
                    game = solver.new_game();
                    println!("\n🔄 New game started!\n");
                } else {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
            Ok(round) => {
                println!(
                    "\n{} {}  {} → {} candidates\n",
                    code_to_pegs(&round.guess),
                    feedback_to_pegs(round.feedback, length),
                    round.candidates_before,
                    round.candidates_after
                );
            }
            Err(SolverError::NoCandidates) => {
                println!("\n❌ Earlier feedback already ruled that guess out.");
                match recover(game, solver)? {
                    Some(recovered) => game = recovered,
                    None => return Ok(()),
                }
            }
            Err(SolverError::Unresolved { remaining }) => {
                println!("\n❌ {remaining} candidates still fit your feedback.");
                match recover(game, solver)? {
                    Some(recovered) => game = recovered,
                    None => return Ok(()),
                }
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Offer undo, new game or quit after contradictory feedback
///
/// Returns `None` when the user quits.
fn recover<S: Strategy>(mut game: Game, solver: &Solver<S>) -> Result<Option<Game>> {
    println!("Type 'undo' to go back, or 'new' to start over.\n");

    loop {
        match parse_input(&get_user_input("Command")?) {
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(None);
            }
            Input::New => {
                println!("\n🔄 New game started!\n");
                return Ok(Some(solver.new_game()));
            }
            Input::Undo => {
                game = game.rewound(solver.space());
                println!("✓ Undone! Back to turn {}\n", game.round() + 1);
                return Ok(Some(game));
            }
            _ => println!("Please type 'undo', 'new' or 'quit'."),
        }
    }
}

fn celebrate(game: &Game, turns: usize, length: usize) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "        🎉 ✨  M A S T E R M I N D   S O L V E D !  ✨ 🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "step" } else { "steps" }
    );

    println!("\n  Guess history:");
    for round in game.rounds() {
        println!(
            "    {}. {} {}",
            round.number.to_string().bright_black(),
            code_to_pegs(&round.guess),
            feedback_to_pegs(round.feedback, length)
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt; end of input reads as `quit`
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_input("quit"), Input::Quit);
        assert_eq!(parse_input(" Q "), Input::Quit);
        assert_eq!(parse_input("new"), Input::New);
        assert_eq!(parse_input("u"), Input::Undo);
        assert_eq!(parse_input("WIN"), Input::Win);
    }

    #[test]
    fn parses_feedback() {
        assert_eq!(parse_input("1 2"), Input::Feedback(Feedback::new(1, 2)));
        assert_eq!(parse_input("0,0"), Input::Feedback(Feedback::new(0, 0)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_input("maybe"), Input::Invalid);
        assert_eq!(parse_input(""), Input::Invalid);
    }
}
