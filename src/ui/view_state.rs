//! What the GUI currently shows, as told by the game through `GameView`

use egui::Color32;

use crate::game::{GameView, Outcome};
use crate::{Board, Mark, Pos};

use super::theme::{AI_WIN, HUMAN_WIN, TIE};

/// Board snapshot, move log and result message for the GUI
#[derive(Debug, Default)]
pub struct ViewState {
    pub board: Board,
    pub last_move: Option<Pos>,
    pub move_log: Vec<(Pos, Mark)>,
    pub message: Option<Outcome>,
}

impl ViewState {
    /// Text and color of the current result message
    pub fn message_text(&self) -> Option<(&'static str, Color32)> {
        self.message.map(|outcome| (outcome.message(), outcome_color(outcome)))
    }
}

/// Message color for a result
pub fn outcome_color(outcome: Outcome) -> Color32 {
    match outcome {
        Outcome::HumanWins => HUMAN_WIN,
        Outcome::AiWins => AI_WIN,
        Outcome::Draw => TIE,
    }
}

impl GameView for ViewState {
    fn render_board(&mut self, board: &Board) {
        self.board = *board;
    }

    fn report_move(&mut self, pos: Pos, mark: Mark) {
        self.board.place(pos, mark);
        self.last_move = Some(pos);
        self.move_log.push((pos, mark));
    }

    fn show_message(&mut self, outcome: Outcome) {
        self.message = Some(outcome);
    }

    fn clear_message(&mut self) {
        self.message = None;
        self.last_move = None;
        self.move_log.clear();
    }
}
