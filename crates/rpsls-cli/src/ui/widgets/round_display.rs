use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Text},
    widgets::{Block, BlockExt as _, Widget},
};
use rpsls_engine::{Outcome, RoundEntry, RoundReport, SessionState};

use crate::ui::widgets::style;

/// What happened in the last round, and the session result once it is over.
pub struct RoundDisplay<'a> {
    last_round: Option<&'a RoundReport>,
    state: SessionState,
    block: Option<Block<'a>>,
}

impl<'a> RoundDisplay<'a> {
    pub fn new(last_round: Option<&'a RoundReport>, state: SessionState) -> Self {
        Self {
            last_round,
            state,
            block: None,
        }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

/// The rule that decided the round, e.g. "Paper covers rock."
pub fn rule_text(entry: &RoundEntry) -> String {
    let (winner, loser) = match entry.outcome() {
        Outcome::Human => (entry.human_move(), entry.computer_move()),
        Outcome::Computer => (entry.computer_move(), entry.human_move()),
        Outcome::Tie => return format!("Tie! Both threw {}.", entry.human_move()),
    };
    let verb = winner.verb_against(loser).unwrap_or("beats");
    format!("{} {verb} {loser}.", winner.title())
}

fn outcome_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Human => "You win the round!",
        Outcome::Computer => "The computer wins the round.",
        Outcome::Tie => "Nobody scores.",
    }
}

impl Widget for RoundDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let mut lines = vec![];
        match self.last_round {
            None => lines.push(Line::styled("Choose your move.", style::DIM)),
            Some(report) => {
                let entry = &report.entry;
                let outcome_style = style::outcome(entry.outcome());
                lines.push(Line::styled(
                    format!(
                        "You: {}   Computer: {}",
                        entry.human_move().title(),
                        entry.computer_move().title()
                    ),
                    style::DEFAULT,
                ));
                lines.push(Line::styled(rule_text(entry), outcome_style));
                lines.push(Line::styled(outcome_text(entry.outcome()), outcome_style));
            }
        }
        match self.state {
            SessionState::Playing => {}
            SessionState::HumanWon => {
                lines.push(Line::from(""));
                lines.push(Line::styled("You won the session!", style::HUMAN));
            }
            SessionState::ComputerWon => {
                lines.push(Line::from(""));
                lines.push(Line::styled("The computer won the session.", style::COMPUTER));
            }
        }

        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let text = Text::from(lines).centered();
        text.render(area.centered_vertically(Constraint::Length(height)), buf);
    }
}

#[cfg(test)]
mod tests {
    use rpsls_engine::{Ledger, Move};

    use super::*;

    fn entry(outcome: Outcome, human: Move, computer: Move) -> RoundEntry {
        *Ledger::new().record(outcome, human, computer)
    }

    #[test]
    fn test_rule_text_names_winning_rule() {
        assert_eq!(
            rule_text(&entry(Outcome::Human, Move::Paper, Move::Rock)),
            "Paper covers rock."
        );
        assert_eq!(
            rule_text(&entry(Outcome::Computer, Move::Scissors, Move::Spock)),
            "Spock smashes scissors."
        );
        assert_eq!(
            rule_text(&entry(Outcome::Human, Move::Lizard, Move::Spock)),
            "Lizard poisons spock."
        );
    }

    #[test]
    fn test_rule_text_for_tie() {
        assert_eq!(
            rule_text(&entry(Outcome::Tie, Move::Lizard, Move::Lizard)),
            "Tie! Both threw lizard."
        );
    }
}
