use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, BlockExt as _, Widget},
};
use rpsls_engine::Session;

use crate::ui::widgets::style;

/// Running score of the current session plus the sessions won so far.
pub struct ScoreDisplay<'a> {
    session: &'a Session,
    block: Option<Block<'a>>,
}

impl<'a> ScoreDisplay<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        22 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS.len()).unwrap() + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    LabelValue(&'static str, &'static dyn Fn(&Session) -> String),
}

const ROWS: &[Row] = &[
    Row::LabelValue("YOU:", &|session| {
        session.scoreboard().human_wins().to_string()
    }),
    Row::LabelValue("COMPUTER:", &|session| {
        session.scoreboard().computer_wins().to_string()
    }),
    Row::LabelValue("TIES:", &|session| session.scoreboard().ties().to_string()),
    Row::Empty,
    Row::LabelValue("ROUNDS:", &|session| session.ledger().len().to_string()),
    Row::LabelValue("FIRST TO:", &|session| session.winning_score().to_string()),
    Row::Empty,
    Row::LabelValue("SESSIONS:", &|session| {
        let won = session.sessions_won();
        format!("{}-{}", won.human_wins(), won.computer_wins())
    }),
];

impl Widget for ScoreDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;
        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.session), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
