use omok::{GameState, Rules, Symmetric, Symmetry};

use super::{game_repr, EncodingMode};

fn small_game() -> GameState {
    // . x .
    // . o .
    // . . x   with o to move and x having just played 8
    GameState::from_actions(Rules::new(3, 3, 3).unwrap(), &[1, 4, 8]).unwrap()
}

#[test]
fn channel_counts() {
    let state = GameState::default();
    for (mode, channels) in [
        (EncodingMode::Basic, 2),
        (EncodingMode::SideToMove, 3),
        (EncodingMode::LastMove, 4),
        (EncodingMode::Previous, 5),
    ] {
        assert_eq!(mode.channels(), channels);
        assert_eq!(game_repr(&state, mode).shape(), [channels, 9, 9]);
    }
}

#[test]
fn empty_board() {
    let tensor = game_repr(&GameState::default(), EncodingMode::LastMove);
    assert!(tensor.plane(0).iter().all(|&x| x == 0.0));
    assert!(tensor.plane(1).iter().all(|&x| x == 0.0));
    assert!(tensor.plane(2).iter().all(|&x| x == 0.0));
    // first player to move
    assert!(tensor.plane(3).iter().all(|&x| x == 1.0));
}

#[test]
fn last_move_planes() {
    let (x, o) = (1.0_f32, 0.0_f32);
    let tensor = game_repr(&small_game(), EncodingMode::LastMove);
    assert_eq!(tensor.plane(0), &[o, o, o, o, x, o, o, o, o]);
    assert_eq!(tensor.plane(1), &[o, x, o, o, o, o, o, o, x]);
    assert_eq!(tensor.plane(2), &[o, o, o, o, o, o, o, o, x]);
    assert_eq!(tensor.plane(3), &[o; 9]);
}

#[test]
fn previous_planes_drop_the_last_stone() {
    let (x, o) = (1.0_f32, 0.0_f32);
    let tensor = game_repr(&small_game(), EncodingMode::Previous);
    assert_eq!(tensor.plane(2), &[o, o, o, o, x, o, o, o, o]);
    assert_eq!(tensor.plane(3), &[o, x, o, o, o, o, o, o, o]);
    assert_eq!(tensor.plane(4), &[o; 9]);
}

#[test]
fn side_to_move_plane() {
    let state = small_game().next(0).unwrap();
    let tensor = game_repr(&state, EncodingMode::SideToMove);
    assert!(tensor.plane(2).iter().all(|&x| x == 1.0));
}

#[test]
fn tensor_transform_matches_state_transform() {
    let state = small_game();
    for symmetry in Symmetry::ALL {
        for mode in [EncodingMode::LastMove, EncodingMode::Previous] {
            assert_eq!(
                game_repr(&state, mode).transform(symmetry),
                game_repr(&state.transform(symmetry), mode),
                "{symmetry:?} {mode}"
            );
        }
    }
}

#[test]
fn encoding_names_round_trip() {
    for mode in [
        EncodingMode::Basic,
        EncodingMode::SideToMove,
        EncodingMode::LastMove,
        EncodingMode::Previous,
    ] {
        assert_eq!(mode.to_string().parse::<EncodingMode>(), Ok(mode));
        assert_eq!(mode.channels().to_string().parse::<EncodingMode>(), Ok(mode));
    }
    assert!("six".parse::<EncodingMode>().is_err());
}
