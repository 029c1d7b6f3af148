//! Game session management
//!
//! [`Game`] runs one session of human (O) against the engine (X) without
//! any knowledge of how it is drawn. Everything the player should see is
//! pushed through the [`GameView`] trait, so the GUI and the tests drive
//! the same code.

use std::time::{Duration, Instant};

use derive_more::{Display, Error};
use tracing::{info, instrument, warn};

use crate::board::{Board, Mark, Pos, AI_MARK, HUMAN_MARK};
use crate::config::GameConfig;
use crate::engine::{AiEngine, MoveResult};
use crate::rules::{check_winner, is_full, winning_line};

/// What the presentation layer must be able to show
pub trait GameView {
    /// Show the whole board
    fn render_board(&mut self, board: &Board);

    /// A mark was placed
    fn report_move(&mut self, pos: Pos, mark: Mark);

    /// The game ended
    fn show_message(&mut self, outcome: Outcome);

    /// A new game started; drop the previous result
    fn clear_message(&mut self) {}
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    HumanWins,
    AiWins,
    Draw,
}

impl Outcome {
    /// Text shown to the player
    pub fn message(self) -> &'static str {
        match self {
            Outcome::HumanWins => "You win!",
            Outcome::AiWins => "AI wins!",
            Outcome::Draw => "It's a tie!",
        }
    }
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: Outcome,
    pub winning_line: Option<[Pos; 3]>,
}

/// Rejected human move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("cell {pos} is already occupied")]
    Occupied { pos: Pos },
    #[display("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
    #[display("game is over")]
    GameOver,
}

/// Results of the games played this session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub human_wins: u32,
    pub ai_wins: u32,
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::HumanWins => self.human_wins += 1,
            Outcome::AiWins => self.ai_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.human_wins + self.ai_wins + self.draws
    }
}

/// Cancellable one-shot timer for the automatic restart
#[derive(Debug, Clone, Copy, Default)]
pub struct RestartTimer {
    deadline: Option<Instant>,
}

impl RestartTimer {
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Time left before the restart, if one is scheduled
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(now))
    }
}

/// One session: the board, the engine and the restart schedule
#[derive(Debug)]
pub struct Game {
    board: Board,
    engine: AiEngine,
    config: GameConfig,
    game_over: Option<GameResult>,
    last_move: Option<Pos>,
    move_history: Vec<(Pos, Mark)>,
    last_ai_result: Option<MoveResult>,
    tally: Tally,
    restart: RestartTimer,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            engine: AiEngine::new(),
            config,
            game_over: None,
            last_move: None,
            move_history: Vec::with_capacity(9),
            last_ai_result: None,
            tally: Tally::default(),
            restart: RestartTimer::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn game_over(&self) -> Option<&GameResult> {
        self.game_over.as_ref()
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn move_history(&self) -> &[(Pos, Mark)] {
        &self.move_history
    }

    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Time left before the automatic restart, if one is scheduled
    pub fn restart_remaining(&self, now: Instant) -> Option<Duration> {
        self.restart.remaining(now)
    }

    /// Human clicked cell (`row`, `col`)
    pub fn play_at<V: GameView + ?Sized>(
        &mut self,
        row: usize,
        col: usize,
        now: Instant,
        view: &mut V,
    ) -> Result<(), MoveError> {
        if !Pos::is_valid(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        self.play_human(Pos::new(row as u8, col as u8), now, view)
    }

    /// Place O at `pos`, then answer with X unless the game is over.
    #[instrument(skip_all, fields(pos = %pos))]
    pub fn play_human<V: GameView + ?Sized>(
        &mut self,
        pos: Pos,
        now: Instant,
        view: &mut V,
    ) -> Result<(), MoveError> {
        let (row, col) = (usize::from(pos.row), usize::from(pos.col));
        if !Pos::is_valid(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if self.game_over.is_some() || self.restart.is_pending() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied { pos });
        }

        info!("human move");
        self.apply(pos, HUMAN_MARK, view);

        if !self.check_end(now, view) {
            self.ai_move(now, view);
        }

        view.render_board(&self.board);
        Ok(())
    }

    /// Ask the engine for X's move and apply it
    fn ai_move<V: GameView + ?Sized>(&mut self, now: Instant, view: &mut V) {
        let result = self.engine.get_move_with_stats(&self.board);
        let best_move = result.best_move;
        self.last_ai_result = Some(result);

        match best_move {
            Some(pos) => {
                info!(%pos, "AI move");
                self.apply(pos, AI_MARK, view);
                self.check_end(now, view);
            }
            None => warn!("AI found no move on a board that is not full"),
        }
    }

    fn apply<V: GameView + ?Sized>(&mut self, pos: Pos, mark: Mark, view: &mut V) {
        self.board.place(pos, mark);
        self.move_history.push((pos, mark));
        self.last_move = Some(pos);
        view.report_move(pos, mark);
    }

    /// Win check, then the full-board check. Returns true if the game ended.
    ///
    /// Only the side that just moved can hold a line here.
    fn check_end<V: GameView + ?Sized>(&mut self, now: Instant, view: &mut V) -> bool {
        if let Some(mark) = check_winner(&self.board) {
            let outcome = if mark == HUMAN_MARK {
                Outcome::HumanWins
            } else {
                Outcome::AiWins
            };
            let line = winning_line(&self.board, mark);
            self.finish(outcome, line, now, view);
            true
        } else if is_full(&self.board) {
            self.finish(Outcome::Draw, None, now, view);
            true
        } else {
            false
        }
    }

    fn finish<V: GameView + ?Sized>(
        &mut self,
        outcome: Outcome,
        winning_line: Option<[Pos; 3]>,
        now: Instant,
        view: &mut V,
    ) {
        info!(?outcome, moves = self.move_history.len(), "game over");
        self.game_over = Some(GameResult {
            outcome,
            winning_line,
        });
        self.tally.record(outcome);
        self.restart.schedule(now, self.config.restart_delay);
        view.show_message(outcome);
    }

    /// Restart if the delay after a finished game has run out.
    ///
    /// Returns true if the board was reset.
    pub fn tick<V: GameView + ?Sized>(&mut self, now: Instant, view: &mut V) -> bool {
        if !self.restart.is_due(now) {
            return false;
        }
        self.reset(view);
        true
    }

    /// Start a new game now, cancelling any pending restart
    pub fn reset<V: GameView + ?Sized>(&mut self, view: &mut V) {
        self.restart.cancel();
        self.board.reset();
        self.game_over = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        info!("new game");

        view.clear_message();
        view.render_board(&self.board);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
