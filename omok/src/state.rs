use std::fmt::Display;

use crate::{colour::Colour, game_result::GameResult, grid::Grid, rules::Rules, PlayError};

/// Result of a game from the perspective of the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ongoing,
    Win,
    Loss,
    Draw,
}

impl Default for Outcome {
    fn default() -> Self {
        Outcome::Ongoing
    }
}

/// A position seen by the player to move.
///
/// `own` holds the stones of the player to move and `opponent` the stones of
/// the player who moved last. Playing a move swaps the two, so a state is
/// always evaluated from the perspective of its mover.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    rules: Rules,
    own: Grid,
    opponent: Grid,
    last_action: Option<usize>,
    // Whether own / opponent stones contain a winning line.
    win: bool,
    lose: bool,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(Rules::default())
    }
}

impl GameState {
    pub fn new(rules: Rules) -> Self {
        GameState {
            rules,
            own: Grid::new(rules.n_actions()),
            opponent: Grid::new(rules.n_actions()),
            last_action: None,
            win: false,
            lose: false,
        }
    }

    /// Create a state from arbitrary stone placements.
    /// Both grids are scanned fully for winning lines.
    pub fn from_grids(
        rules: Rules,
        own: Grid,
        opponent: Grid,
        last_action: Option<usize>,
    ) -> Result<Self, PlayError> {
        if own.len() != rules.n_actions() || opponent.len() != rules.n_actions() {
            return Err(PlayError::OutOfBounds);
        }
        if !own.is_disjoint(&opponent) {
            return Err(PlayError::Overlap);
        }
        if let Some(action) = last_action {
            if !opponent.get(action) {
                return Err(PlayError::LastActionNotOpponent);
            }
        }
        let win = rules.has_line(&own);
        let lose = rules.has_line(&opponent);
        Ok(GameState {
            rules,
            own,
            opponent,
            last_action,
            win,
            lose,
        })
    }

    /// Replay a sequence of actions from the empty board.
    pub fn from_actions(rules: Rules, actions: &[usize]) -> Result<Self, PlayError> {
        actions
            .iter()
            .try_fold(GameState::new(rules), |state, &action| state.next(action))
    }

    /// Play `action` for the player to move and hand the turn over.
    pub fn next(&self, action: usize) -> Result<Self, PlayError> {
        if action >= self.rules.n_actions() {
            return Err(PlayError::OutOfBounds);
        }
        if self.own.get(action) || self.opponent.get(action) {
            return Err(PlayError::AlreadyOccupied);
        }
        let mut moved = self.own.clone();
        moved.set(action);
        let lose = self.win || self.rules.line_through(&moved, action);
        Ok(GameState {
            rules: self.rules,
            own: self.opponent.clone(),
            opponent: moved,
            last_action: Some(action),
            win: self.lose,
            lose,
        })
    }

    /// Rebuild the state with both grids and the last action remapped.
    /// Winning lines survive board symmetries, so the flags carry over.
    pub(crate) fn remap(&self, own: Grid, opponent: Grid, last_action: Option<usize>) -> Self {
        GameState {
            rules: self.rules,
            own,
            opponent,
            last_action,
            win: self.win,
            lose: self.lose,
        }
    }

    pub fn legal_actions(&self) -> Vec<usize> {
        self.own.empty_cells(&self.opponent).collect()
    }

    pub fn is_legal(&self, action: usize) -> bool {
        action < self.rules.n_actions() && !self.own.get(action) && !self.opponent.get(action)
    }

    /// The player to move has a winning line.
    pub fn is_win(&self) -> bool {
        self.win
    }

    /// The player who moved last has a winning line.
    pub fn is_lose(&self) -> bool {
        self.lose
    }

    pub fn is_full(&self) -> bool {
        self.stones() >= self.rules.n_actions()
    }

    pub fn is_draw(&self) -> bool {
        self.is_full() && !self.win && !self.lose
    }

    pub fn is_done(&self) -> bool {
        self.win || self.lose || self.is_full()
    }

    pub fn is_first_player(&self) -> bool {
        self.stones() % 2 == 0
    }

    pub fn outcome(&self) -> Outcome {
        if self.lose {
            Outcome::Loss
        } else if self.win {
            Outcome::Win
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    pub fn to_move(&self) -> Colour {
        if self.is_first_player() {
            Colour::Black
        } else {
            Colour::White
        }
    }

    /// Result of the game in absolute terms.
    pub fn result(&self) -> GameResult {
        match self.outcome() {
            Outcome::Loss => GameResult::Winner(self.to_move().next()),
            Outcome::Win => GameResult::Winner(self.to_move()),
            Outcome::Draw => GameResult::Draw,
            Outcome::Ongoing => GameResult::Ongoing,
        }
    }

    pub fn stones(&self) -> usize {
        self.own.count() + self.opponent.count()
    }

    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn n_actions(&self) -> usize {
        self.rules.n_actions()
    }

    pub fn own(&self) -> &Grid {
        &self.own
    }

    pub fn opponent(&self) -> &Grid {
        &self.opponent
    }

    pub fn last_action(&self) -> Option<usize> {
        self.last_action
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // First player's stones are always drawn black.
        let (black, white) = if self.is_first_player() {
            (&self.own, &self.opponent)
        } else {
            (&self.opponent, &self.own)
        };
        // Every label takes as many characters as the widest one.
        let width = (self.rules.cols() - 1).to_string().len();
        let row_width = if self.rules.rows() <= 26 {
            1
        } else {
            (self.rules.rows() - 1).to_string().len()
        };
        write!(f, "{:row_width$}", "")?;
        for col in 0..self.rules.cols() {
            write!(f, " {col:>width$}")?;
        }
        writeln!(f)?;
        for row in 0..self.rules.rows() {
            match u8::try_from(row).ok().filter(|_| self.rules.rows() <= 26) {
                Some(r) => write!(f, "{}", (b'A' + r) as char)?,
                None => write!(f, "{row:>row_width$}")?,
            }
            for col in 0..self.rules.cols() {
                let cell = self.rules.to_action(row, col);
                let symbol = if black.get(cell) {
                    '●'
                } else if white.get(cell) {
                    '○'
                } else {
                    '.'
                };
                write!(f, " {symbol:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
