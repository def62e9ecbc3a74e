use std::io;

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{DefaultTerminal, Frame};

use crate::card::Suit;
use crate::face::{back_lines, face_lines, FACE_HEIGHT, FACE_WIDTH};
use crate::source::CardSource;
use crate::table::{Score, Table, IDLE_PROMPT};

/// What the result label says.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Status {
    Ready,
    Played,
    Failed(String),
}

/// Full-screen front end: a result label, the two cards, a score label and
/// a draw key.
pub struct TuiApp<S: CardSource> {
    table: Table,
    source: S,
    status: Status,
    quit: bool,
}

impl<S: CardSource> TuiApp<S> {
    pub fn new(table: Table, source: S) -> Self {
        TuiApp {
            table,
            source,
            status: Status::Ready,
            quit: false,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Draw and handle input until the player quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        while !self.quit {
            terminal.draw(|frame| self.render(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char(' ') | KeyCode::Enter => {
                self.draw_round()
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn draw_round(&mut self) {
        let played = self.table.play(&mut self.source).map(|_| ());
        self.status = match played {
            Ok(()) => Status::Played,
            Err(e) => Status::Failed(format!("Round discarded: {}", e)),
        };
    }

    pub fn render(&self, frame: &mut Frame) {
        let [title, result, cards, score, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(FACE_HEIGHT as u16 + 2),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(Line::from("High Card").bold().centered(), title);
        frame.render_widget(self.result_label(), result);
        self.render_cards(frame, cards);
        frame.render_widget(score_label(self.table.score()), score);
        frame.render_widget(
            Line::from("d / space / enter: draw   q / esc: quit").dim().centered(),
            hints,
        );
    }

    fn result_label(&self) -> Paragraph<'static> {
        let text = match (&self.status, self.table.last()) {
            (Status::Failed(msg), _) => Text::from(msg.clone()).fg(Color::Red),
            (Status::Played, Some(dealt)) => Text::from(vec![
                Line::from(dealt.round.describe()),
                Line::from(dealt.round.result.message()).add_modifier(Modifier::BOLD),
            ]),
            _ => Text::from(IDLE_PROMPT),
        };
        Paragraph::new(text)
            .block(Block::bordered())
            .style(Style::new().bg(Color::LightBlue).fg(Color::Blue))
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect) {
        let width = FACE_WIDTH as u16;
        let [left, right] = Layout::horizontal([Constraint::Length(width); 2])
            .flex(Flex::Center)
            .spacing(6)
            .areas(area);

        let (player, house) = match self.table.last() {
            Some(dealt) => (
                card_widget(
                    "You",
                    face_lines(dealt.round.player_card, dealt.player_suit),
                    Some(dealt.player_suit),
                ),
                card_widget(
                    "Computer",
                    face_lines(dealt.round.house_card, dealt.house_suit),
                    Some(dealt.house_suit),
                ),
            ),
            None => (
                card_widget("You", back_lines(), None),
                card_widget("Computer", back_lines(), None),
            ),
        };
        frame.render_widget(player, left);
        frame.render_widget(house, right);
    }
}

fn card_widget(
    caption: &'static str,
    face: [String; FACE_HEIGHT],
    suit: Option<Suit>,
) -> Paragraph<'static> {
    let style = match suit {
        Some(s) if s.is_red() => Style::new().fg(Color::Red),
        _ => Style::new(),
    };
    let mut lines = vec![Line::from(caption).centered()];
    lines.extend(face.into_iter().map(|l| Line::styled(l, style)));
    Paragraph::new(lines)
}

fn score_label(score: Score) -> Paragraph<'static> {
    Paragraph::new(score.to_string())
        .block(Block::bordered())
        .style(Style::new().bg(Color::LightGreen).fg(Color::Green))
}

/// Take over the terminal, play until the player quits, and give the
/// terminal back even when the loop fails.
pub fn run<S: CardSource>(table: Table, source: S) -> anyhow::Result<Score> {
    let mut terminal = ratatui::try_init().context("failed to set up the terminal")?;
    let mut app = TuiApp::new(table, source);
    let result = app.run(&mut terminal);
    ratatui::restore();
    result.context("terminal UI failed")?;
    Ok(app.table().score())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::SuitChoice;
    use crate::source::ScriptedSource;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app(values: &[u8]) -> TuiApp<ScriptedSource> {
        let source = ScriptedSource::new(values.iter().copied()).unwrap();
        TuiApp::new(Table::new(SuitChoice::Fixed(Suit::Clubs)), source)
    }

    fn press(app: &mut TuiApp<ScriptedSource>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen(app: &TuiApp<ScriptedSource>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn starts_face_down() {
        let app = app(&[]);
        let text = screen(&app);
        assert!(text.contains("Press d to generate a card"));
        assert!(text.contains("Wins: 0  Losses: 0"));
        assert!(text.contains("░░░"));
    }

    #[test]
    fn draw_key_plays_a_round() {
        let mut app = app(&[13, 2, 5, 9]);
        press(&mut app, KeyCode::Char('d'));
        let text = screen(&app);
        assert!(text.contains("Your card is King, the computer's card is 2"));
        assert!(text.contains("You win!"));
        assert!(text.contains("Wins: 1  Losses: 0"));

        press(&mut app, KeyCode::Enter);
        assert!(screen(&app).contains("Wins: 1  Losses: 1"));
    }

    #[test]
    fn failed_round_is_shown_and_not_counted() {
        let mut app = app(&[1, 1, 7]);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char(' '));
        let text = screen(&app);
        assert!(text.contains("Round discarded"));
        assert!(text.contains("Wins: 0  Losses: 0"));
        assert_eq!(app.table().score(), Score::default());
    }

    #[test]
    fn quit_keys() {
        let mut app = app(&[]);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.quit);
    }
}
