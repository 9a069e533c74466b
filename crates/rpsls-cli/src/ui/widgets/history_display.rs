use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Block, BlockExt as _, Row, Table, Widget},
};
use rpsls_engine::{Ledger, Outcome};

use crate::ui::widgets::style;

/// Rounds of the current session, newest first.
pub struct HistoryDisplay<'a> {
    ledger: &'a Ledger,
    block: Option<Block<'a>>,
}

impl<'a> HistoryDisplay<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self {
            ledger,
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

fn winner_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Human => "You",
        Outcome::Computer => "Computer",
        Outcome::Tie => "Tie",
    }
}

impl Widget for HistoryDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let rows = self.ledger.entries().iter().rev().map(|entry| {
            Row::new([
                entry.round_number().to_string(),
                entry.human_move().to_string(),
                entry.computer_move().to_string(),
                winner_label(entry.outcome()).to_owned(),
            ])
            .style(style::outcome(entry.outcome()))
        });
        let widths = [
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Fill(1),
        ];
        let table = Table::new(rows, widths)
            .header(Row::new(["Round", "You", "Computer", "Winner"]).style(style::HEADER))
            .column_spacing(2);
        table.render(area, buf);
    }
}
