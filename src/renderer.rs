use crate::card::Suit;
use crate::face::{back_lines, face_lines, FACE_WIDTH};
use crate::table::{Table, IDLE_PROMPT};

/// Trait that abstracts the console output layer, so the game loop can be
/// driven against a recording renderer in tests.
pub trait Renderer {
    /// Render the cards on the table, the result line and the score.
    fn render(&mut self, table: &Table);
    /// Display the score on its own.
    fn score(&mut self, table: &Table);
    /// Display an informational message.
    fn info(&mut self, msg: &str);
    /// Display an error message.
    fn error(&mut self, msg: &str);
    /// Display the help text.
    fn help(&mut self);
}

// ---------------------------------------------------------------------------
// CLI Renderer
// ---------------------------------------------------------------------------

/// A simple ANSI-color CLI renderer.
pub struct CliRenderer {
    color: bool,
}

impl CliRenderer {
    pub fn new() -> Self {
        CliRenderer { color: true }
    }

    /// Plain output, without escape codes.
    pub fn plain() -> Self {
        CliRenderer { color: false }
    }

    fn paint(&self, line: &str, suit: Option<Suit>) -> String {
        match suit {
            Some(s) if self.color && s.is_red() => format!("\x1b[31m{}\x1b[0m", line),
            _ => line.to_string(),
        }
    }

    /// The table as text: captions, two cards side by side, the result
    /// and the score.
    pub fn table_text(&self, table: &Table) -> String {
        let mut out = String::new();
        let gap = "    ";

        out.push_str(&format!(
            "  {:^w$}{}{:^w$}\n",
            "You",
            gap,
            "Computer",
            w = FACE_WIDTH
        ));

        let (left, right, player_suit, house_suit) = match table.last() {
            Some(dealt) => (
                face_lines(dealt.round.player_card, dealt.player_suit),
                face_lines(dealt.round.house_card, dealt.house_suit),
                Some(dealt.player_suit),
                Some(dealt.house_suit),
            ),
            None => (back_lines(), back_lines(), None, None),
        };
        for (l, r) in left.iter().zip(right.iter()) {
            out.push_str(&format!(
                "  {}{}{}\n",
                self.paint(l, player_suit),
                gap,
                self.paint(r, house_suit)
            ));
        }

        out.push('\n');
        match table.last() {
            Some(dealt) => {
                out.push_str(&format!("  {}\n", dealt.round.describe()));
                out.push_str(&format!("  {}\n", dealt.round.result.message()));
            }
            None => out.push_str(&format!("  {}\n", IDLE_PROMPT)),
        }
        out.push_str(&format!("  {}\n", self.score_text(table)));
        out
    }

    /// A tagged status line, e.g. `[INFO] msg`.
    pub fn message_text(&self, tag: &str, ansi: &str, msg: &str) -> String {
        if self.color {
            format!("\x1b[{}m[{}]\x1b[0m {}", ansi, tag, msg)
        } else {
            format!("[{}] {}", tag, msg)
        }
    }

    fn score_text(&self, table: &Table) -> String {
        let line = table.score().to_string();
        if self.color {
            format!("\x1b[32m{}\x1b[0m", line)
        } else {
            line
        }
    }
}

impl Default for CliRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for CliRenderer {
    fn render(&mut self, table: &Table) {
        println!();
        print!("{}", self.table_text(table));
        println!();
    }

    fn score(&mut self, table: &Table) {
        println!("  {}", self.score_text(table));
    }

    fn info(&mut self, msg: &str) {
        println!("{}", self.message_text("INFO", "36", msg));
    }

    fn error(&mut self, msg: &str) {
        println!("{}", self.message_text("ERR ", "31", msg));
    }

    fn help(&mut self) {
        println!(
            r#"
╔══════════════════════════════════════════════════════════════╗
║                 High Card – CLI Help                         ║
╠══════════════════════════════════════════════════════════════╣
║  GOAL: Draw a higher card than the computer.                 ║
║                                                              ║
║  CARDS: Ace (low) through King. Every draw is independent,   ║
║         so the same card can come up on both sides.          ║
║         Suits are for show and never decide a round.         ║
║                                                              ║
║  SCORE: A win or a loss is counted; a tie is not.            ║
║         The score lasts until you quit.                      ║
╠══════════════════════════════════════════════════════════════╣
║  COMMANDS (case-insensitive):                                ║
║                                                              ║
║  draw  | d               Draw a card for each side           ║
║  score | s               Show wins and losses                ║
║  help  | h | ?           Show this help                      ║
║  quit  | q | exit        Exit                                ║
╚══════════════════════════════════════════════════════════════╝
"#
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::SuitChoice;
    use crate::source::ScriptedSource;

    #[test]
    fn empty_table_shows_card_backs_and_prompt() {
        let text = CliRenderer::plain().table_text(&Table::default());
        assert!(text.contains("░░░"));
        assert!(text.contains("Press d to generate a card"));
        assert!(text.contains("Wins: 0  Losses: 0"));
    }

    #[test]
    fn played_table_shows_both_cards_and_result() {
        let mut table = Table::new(SuitChoice::Fixed(Suit::Spades));
        let mut src = ScriptedSource::new([5, 9]).unwrap();
        table.play(&mut src).unwrap();

        let text = CliRenderer::plain().table_text(&table);
        assert!(text.contains("│5        │    │9        │"));
        assert!(text.contains("Your card is 5, the computer's card is 9"));
        assert!(text.contains("You lose."));
        assert!(text.contains("Wins: 0  Losses: 1"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn plain_messages_have_no_escape_codes() {
        let plain = CliRenderer::plain();
        let info = plain.message_text("INFO", "36", "Thanks for playing.");
        let error = plain.message_text("ERR ", "31", "Round discarded: out of cards");
        assert_eq!(info, "[INFO] Thanks for playing.");
        assert_eq!(error, "[ERR ] Round discarded: out of cards");
        assert!(!info.contains('\x1b') && !error.contains('\x1b'));

        let colored = CliRenderer::new().message_text("ERR ", "31", "oops");
        assert_eq!(colored, "\x1b[31m[ERR ]\x1b[0m oops");
    }

    #[test]
    fn red_suits_are_colored() {
        let mut table = Table::new(SuitChoice::Fixed(Suit::Hearts));
        let mut src = ScriptedSource::new([13, 1]).unwrap();
        table.play(&mut src).unwrap();
        assert!(CliRenderer::new().table_text(&table).contains("\x1b[31m"));
    }
}
