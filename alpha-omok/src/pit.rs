use log::info;
use omok::{Colour, GameResult, GameState};
use rand::Rng;

use crate::{config::Config, error::Error, mcts::Mcts, Oracle};

/// Score of a candidate against the incumbent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PitResult {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl PitResult {
    pub fn games(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    fn rate(&self, points: f64) -> f64 {
        match self.games() {
            0 => 0.0,
            games => points / f64::from(games),
        }
    }

    /// One point per win and half a point per draw, averaged over all games.
    pub fn average_point(&self) -> f64 {
        self.rate(f64::from(self.wins) + f64::from(self.draws) / 2.)
    }

    pub fn win_rate(&self) -> f64 {
        self.rate(f64::from(self.wins))
    }

    pub fn non_loss_rate(&self) -> f64 {
        self.rate(f64::from(self.wins + self.draws))
    }

    pub fn is_improvement(&self, threshold: f64) -> bool {
        self.games() > 0 && self.average_point() >= threshold
    }

    /// Record a game in which the candidate played `colour`.
    pub fn update(&mut self, result: GameResult, colour: Colour) {
        match result {
            GameResult::Winner(winner) => {
                if winner == colour {
                    self.wins += 1
                } else {
                    self.losses += 1
                }
            }
            GameResult::Draw => self.draws += 1,
            GameResult::Ongoing => {}
        }
    }
}

/// Pits two oracles against each other, alternating who moves first.
/// Returns wins, draws, and losses of `new`.
pub fn pit<A, B, R>(new: &A, old: &B, config: &Config, rng: &mut R) -> Result<PitResult, Error>
where
    A: Oracle + ?Sized,
    B: Oracle + ?Sized,
    R: Rng + ?Sized,
{
    info!("pitting two oracles against each other");
    let new = Mcts::new(new, config);
    let old = Mcts::new(old, config);

    let mut result = PitResult::default();
    for i in 0..config.pit_games {
        let my_colour = if i % 2 == 0 { Colour::Black } else { Colour::White };
        let mut game = GameState::new(config.rules);
        while !game.is_done() {
            let action = if game.to_move() == my_colour {
                new.sample_action(&game, config.eval_temperature, rng)?
            } else {
                old.sample_action(&game, config.eval_temperature, rng)?
            };
            game = game.next(action)?;
        }

        let game_result = game.result();
        result.update(game_result, my_colour);
        info!(
            "pit game {}/{}: {game_result:?} as {my_colour:?} in {} plies [{}/{}/{}]\n{game}",
            i + 1,
            config.pit_games,
            game.stones(),
            result.wins,
            result.draws,
            result.losses,
        );
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use omok::{Colour, GameResult, GameState, Rules};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::{pit, PitResult};
    use crate::{
        config::Config,
        error::OracleError,
        oracle::{Eval, Policy, UniformOracle},
    };

    #[test]
    fn rates() {
        let result = PitResult {
            wins: 5,
            draws: 2,
            losses: 3,
        };
        assert_eq!(result.games(), 10);
        assert!((result.average_point() - 0.6).abs() < 1e-12);
        assert!((result.win_rate() - 0.5).abs() < 1e-12);
        assert!((result.non_loss_rate() - 0.7).abs() < 1e-12);
        assert!(result.is_improvement(0.55));
        assert!(!result.is_improvement(0.65));
    }

    #[test]
    fn empty_result() {
        let result = PitResult::default();
        assert_eq!(result.average_point(), 0.0);
        assert_eq!(result.win_rate(), 0.0);
        assert_eq!(result.non_loss_rate(), 0.0);
        assert!(!result.is_improvement(0.0));
    }

    #[test]
    fn update_from_candidate_view() {
        let mut result = PitResult::default();
        result.update(GameResult::Winner(Colour::Black), Colour::Black);
        result.update(GameResult::Winner(Colour::Black), Colour::White);
        result.update(GameResult::Draw, Colour::White);
        result.update(GameResult::Ongoing, Colour::White);
        assert_eq!(result, PitResult {
            wins: 1,
            draws: 1,
            losses: 1
        });
    }

    /// Prefers the lowest free cell.
    fn greedy(state: &GameState) -> Result<(Policy, Eval), OracleError> {
        let n = state.n_actions();
        Ok(((0..n).map(|cell| (n - cell) as f32).collect(), 0.0))
    }

    #[test]
    fn alternating_colours() {
        // On a 1 x 2 board with a winning length of 1 the first player always wins.
        let config = Config {
            rules: Rules::new(1, 2, 1).unwrap(),
            simulations: 4,
            pit_games: 6,
            ..Default::default()
        };
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let result = pit(&greedy, &UniformOracle, &config, &mut rng).unwrap();
        assert_eq!(result, PitResult {
            wins: 3,
            draws: 0,
            losses: 3
        });
        assert_eq!(result.average_point(), 0.5);
    }

    #[test]
    fn full_boards_are_draws() {
        // Nobody can make a line of three on a 1 x 2 board.
        let config = Config {
            rules: Rules::new(1, 2, 3).unwrap(),
            simulations: 4,
            pit_games: 2,
            ..Default::default()
        };
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let result = pit(&UniformOracle, &UniformOracle, &config, &mut rng).unwrap();
        assert_eq!(result.draws, 2);
        assert_eq!(result.non_loss_rate(), 1.0);
    }
}
