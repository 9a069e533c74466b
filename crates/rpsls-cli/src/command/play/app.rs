use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Flex, Layout},
    style::{Color, Style},
    text::{Line, Text},
    widgets::Block,
};
use rpsls_engine::{Move, RoundReport, Session, SessionState};

use crate::ui::widgets::{HistoryDisplay, RoundDisplay, ScoreDisplay, style};

const MOVE_KEYS: [(char, Move); Move::LEN] = [
    ('r', Move::Rock),
    ('p', Move::Paper),
    ('s', Move::Scissors),
    ('l', Move::Lizard),
    ('k', Move::Spock),
];

fn move_for_key(c: char) -> Option<Move> {
    let c = c.to_ascii_lowercase();
    MOVE_KEYS
        .iter()
        .find_map(|&(key, kind)| (key == c).then_some(kind))
}

#[derive(Debug)]
pub(crate) struct PlayApp {
    session: Session,
    reveal: bool,
    last_round: Option<RoundReport>,
    is_exiting: bool,
}

impl PlayApp {
    pub(crate) fn new(session: Session, reveal: bool) -> Self {
        Self {
            session,
            reveal,
            last_round: None,
            is_exiting: false,
        }
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        while !self.is_exiting {
            terminal.draw(|f| self.draw(f))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn opponent_title(&self) -> String {
        let opponent = self.session.opponent();
        if self.reveal || !self.session.state().is_playing() {
            format!(" {} ({}) ", opponent.name(), opponent.strategy())
        } else {
            format!(" {} ", opponent.name())
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let border_style = match self.session.state() {
            SessionState::Playing => style::BORDER,
            SessionState::HumanWon => style::HUMAN,
            SessionState::ComputerWon => style::COMPUTER,
        };
        let block = |title: &str| {
            Block::bordered()
                .title(Line::from(title.to_owned()).centered())
                .border_style(border_style)
        };

        let score = ScoreDisplay::new(&self.session).block(block(" SCORE "));
        let round = RoundDisplay::new(self.last_round.as_ref(), self.session.state())
            .block(block(&self.opponent_title()));
        let history = HistoryDisplay::new(self.session.ledger()).block(block(" HISTORY "));

        let help_text = if self.session.state().is_playing() {
            "Controls: R (Rock) | P (Paper) | S (Scissors) | L (Lizard) | K (Spock) | Q (Quit)"
        } else {
            "Play again? Y (Yes) | N (No)"
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        let [top_area, history_area] =
            Layout::vertical([Constraint::Length(score.height()), Constraint::Fill(1)])
                .areas(main_area);
        let [score_area, round_area] =
            Layout::horizontal([Constraint::Length(score.width()), Constraint::Fill(1)])
                .flex(Flex::Start)
                .spacing(1)
                .areas(top_area);

        frame.render_widget(score, score_area);
        frame.render_widget(round, round_area);
        frame.render_widget(history, history_area);
        frame.render_widget(help_text, help_area);
    }

    fn handle_events(&mut self) -> anyhow::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        let is_playing = self.session.state().is_playing();
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
            KeyCode::Char('n') if !is_playing => self.is_exiting = true,
            KeyCode::Char('y') if !is_playing => self.play_again(),
            KeyCode::Char(c) if is_playing => {
                if let Some(human) = move_for_key(c) {
                    self.play(human);
                }
            }
            _ => {}
        }
    }

    fn play(&mut self, human: Move) {
        match self.session.play_round(human) {
            Ok(report) => self.last_round = Some(report),
            Err(e) => tracing::warn!(%e, "ignored move"),
        }
    }

    fn play_again(&mut self) {
        self.session.restart_with_new_opponent();
        self.last_round = None;
    }
}
