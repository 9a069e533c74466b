use ratatui::{layout::Rect, widgets::Block};

pub use self::{history_display::*, round_display::*, score_display::*};

mod history_display;
mod round_display;
mod score_display;

mod color {
    use ratatui::style::Color;

    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Modifier, Style};
    use rpsls_engine::Outcome;

    use crate::ui::widgets::color;

    pub const DEFAULT: Style = Style::new().fg(color::WHITE);
    pub const BORDER: Style = Style::new().fg(color::WHITE);
    pub const HEADER: Style = Style::new().fg(color::CYAN).add_modifier(Modifier::BOLD);
    pub const HUMAN: Style = Style::new().fg(color::GREEN);
    pub const COMPUTER: Style = Style::new().fg(color::RED);
    pub const TIE: Style = Style::new().fg(color::YELLOW);
    pub const DIM: Style = Style::new().fg(color::GRAY);

    pub const fn outcome(outcome: Outcome) -> Style {
        match outcome {
            Outcome::Human => HUMAN,
            Outcome::Computer => COMPUTER,
            Outcome::Tie => TIE,
        }
    }
}

fn block_vertical_margin(block: Option<&Block>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&Block>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
