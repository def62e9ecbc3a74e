use std::io::{self, BufRead, Write};

use crate::command::{parse_command, Command};
use crate::renderer::Renderer;
use crate::source::CardSource;
use crate::table::Table;

/// The console game loop.  `renderer` is injected so the loop stays
/// renderer-agnostic; the full-screen shell lives in `tui`.
pub struct Game<S: CardSource, R: Renderer> {
    table: Table,
    source: S,
    renderer: R,
}

impl<S: CardSource, R: Renderer> Game<S, R> {
    pub fn new(table: Table, source: S, renderer: R) -> Self {
        Game {
            table,
            source,
            renderer,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Run the interactive loop on stdin until the player quits.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        self.run_with(stdin.lock())
    }

    /// Run the loop against any line source.  Ends on `quit` or EOF.
    pub fn run_with<B: BufRead>(&mut self, mut input: B) -> io::Result<()> {
        let mut stdout = io::stdout();
        self.renderer.render(&self.table);

        loop {
            print!("> ");
            stdout.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // EOF
                break;
            }

            match parse_command(&line) {
                Err(e) => self.renderer.error(&e),
                Ok(cmd) => {
                    if self.handle(cmd) {
                        break;
                    }
                }
            }
        }

        let score = self.table.score();
        tracing::debug!(%score, rounds = score.rounds_decided(), "console session over");
        Ok(())
    }

    /// Dispatch a command.  Returns `true` if the game should exit.
    fn handle(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Quit => {
                self.renderer
                    .info(&format!("Thanks for playing. Final score: {}", self.table.score()));
                return true;
            }
            Command::Help => self.renderer.help(),
            Command::Score => self.renderer.score(&self.table),
            Command::Draw => {
                let played = self.table.play(&mut self.source).map(|_| ());
                match played {
                    Ok(()) => self.renderer.render(&self.table),
                    Err(e) => self.renderer.error(&format!("Round discarded: {}", e)),
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedSource;
    use crate::table::Score;

    /// Records what the loop asked to show.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, table: &Table) {
            let result = table
                .last()
                .map(|d| d.round.result.message())
                .unwrap_or("-");
            self.events.push(format!("render {} | {}", result, table.score()));
        }
        fn score(&mut self, table: &Table) {
            self.events.push(format!("score {}", table.score()));
        }
        fn info(&mut self, msg: &str) {
            self.events.push(format!("info {}", msg));
        }
        fn error(&mut self, msg: &str) {
            self.events.push(format!("error {}", msg));
        }
        fn help(&mut self) {
            self.events.push("help".to_string());
        }
    }

    fn game(values: &[u8]) -> Game<ScriptedSource, Recorder> {
        let source = ScriptedSource::new(values.iter().copied()).unwrap();
        Game::new(Table::default(), source, Recorder::default())
    }

    #[test]
    fn draws_update_the_score() {
        let mut g = game(&[5, 9, 1, 1, 13, 2]);
        g.run_with("d\nd\ndraw\nscore\n".as_bytes()).unwrap();
        assert_eq!(g.table().score(), Score { wins: 1, losses: 1 });
        assert_eq!(
            g.renderer.events,
            [
                "render - | Wins: 0  Losses: 0",
                "render You lose. | Wins: 0  Losses: 1",
                "render It's a tie. | Wins: 0  Losses: 1",
                "render You win! | Wins: 1  Losses: 1",
                "score Wins: 1  Losses: 1",
            ]
        );
    }

    #[test]
    fn exhausted_source_reports_and_keeps_score() {
        let mut g = game(&[13, 2, 4]);
        g.run_with("d\nd\nq\nd\n".as_bytes()).unwrap();
        assert_eq!(g.table().score(), Score { wins: 1, losses: 0 });
        let events = &g.renderer.events;
        assert!(events[2].starts_with("error Round discarded"));
        assert_eq!(events[3], "info Thanks for playing. Final score: Wins: 1  Losses: 0");
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn bad_input_is_reported_and_loop_continues() {
        let mut g = game(&[]);
        g.run_with("shuffle\n\nhelp\n".as_bytes()).unwrap();
        let events = &g.renderer.events;
        assert!(events[1].starts_with("error Unknown command"));
        assert_eq!(events[2], "error Empty input");
        assert_eq!(events[3], "help");
    }
}
