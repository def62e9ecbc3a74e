/// All commands a player can issue at the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Draw a card for each side and settle the round.
    Draw,
    /// Print the running score.
    Score,
    /// Print help.
    Help,
    /// Quit the game.
    Quit,
}

/// Parse a single line of text input into a `Command`.
///
/// Syntax reference (case-insensitive):
/// ```text
/// draw | d            -- Draw a round
/// score | s           -- Show wins and losses
/// help | h | ?        -- Help
/// quit | q | exit     -- Quit
/// ```
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }

    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() > 1 {
        return Err(format!("'{}' takes no arguments", tokens[0]));
    }

    match tokens[0].to_lowercase().as_str() {
        "draw" | "d" => Ok(Command::Draw),
        "score" | "s" => Ok(Command::Score),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => Err(format!("Unknown command '{}'. Type 'help' for help.", tokens[0])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases() {
        for (input, cmd) in [
            ("draw", Command::Draw),
            ("D", Command::Draw),
            ("  score \n", Command::Score),
            ("s", Command::Score),
            ("help", Command::Help),
            ("h", Command::Help),
            ("?", Command::Help),
            ("quit", Command::Quit),
            ("Q", Command::Quit),
            ("exit", Command::Quit),
        ] {
            assert_eq!(parse_command(input), Ok(cmd), "{:?}", input);
        }
    }

    #[test]
    fn rejects_junk() {
        assert_eq!(parse_command("   "), Err("Empty input".to_string()));
        assert!(parse_command("deal").unwrap_err().contains("Unknown command 'deal'"));
        assert!(parse_command("draw 2").unwrap_err().contains("no arguments"));
    }
}
