use omok::*;

fn play(rules: Rules, actions: &[usize]) -> Result<GameState, PlayError> {
    GameState::from_actions(rules, actions)
}

/// First player places `line`, second player answers with `filler`.
fn interleave(line: &[usize], filler: &[usize]) -> Vec<usize> {
    line.iter()
        .zip(filler.iter())
        .flat_map(|(&a, &b)| [a, b])
        .chain(line.iter().skip(filler.len()).copied())
        .collect()
}

#[test]
fn row_win() -> Result<(), PlayError> {
    let state = play(Rules::default(), &interleave(&[0, 1, 2, 3, 4], &[72, 73, 74, 75]))?;
    assert!(state.is_done());
    assert!(state.is_lose());
    assert!(!state.is_win());
    Ok(())
}

#[test]
fn column_win() -> Result<(), PlayError> {
    let state = play(Rules::default(), &interleave(&[4, 13, 22, 31, 40], &[0, 1, 2, 3]))?;
    assert!(state.is_lose());
    Ok(())
}

#[test]
fn diagonal_win() -> Result<(), PlayError> {
    let state = play(Rules::default(), &interleave(&[0, 10, 20, 30, 40], &[8, 17, 26, 35]))?;
    assert!(state.is_lose());
    Ok(())
}

#[test]
fn anti_diagonal_win() -> Result<(), PlayError> {
    // (0, 8), (1, 7), (2, 6), (3, 5), (4, 4)
    let state = play(Rules::default(), &interleave(&[8, 16, 24, 32, 40], &[0, 9, 18, 27]))?;
    assert!(state.is_lose());
    Ok(())
}

#[test]
fn second_player_win_is_attributed_to_them() -> Result<(), PlayError> {
    // The first player scatters stones while the second builds a column.
    let state = play(
        Rules::default(),
        &interleave(&[0, 2, 4, 6, 8], &[10, 19, 28, 37, 46]),
    )?;
    // Second player just moved with the fifth stone of the column.
    assert_eq!(state.stones(), 10);
    assert!(state.is_first_player());
    assert!(state.is_lose());

    // From the winner's side the same position is a win.
    let after = state.next(80)?;
    assert!(after.is_win());
    assert!(after.is_done());
    Ok(())
}

#[test]
fn four_in_a_row_is_not_enough() -> Result<(), PlayError> {
    let state = play(Rules::default(), &interleave(&[0, 1, 2, 3], &[72, 73, 74, 75]))?;
    assert!(!state.is_done());
    assert!(!state.is_lose());
    assert!(!state.is_win());
    Ok(())
}

#[test]
fn filling_the_fifth_cell_loses() -> Result<(), PlayError> {
    let rules = Rules::default();
    // Four stones in a row with the fifth cell (4) open, owned by the player to move.
    let own = Grid::from_cells(rules.n_actions(), [0, 1, 2, 3]).unwrap();
    let opponent = Grid::from_cells(rules.n_actions(), [72, 73, 74, 75]).unwrap();
    let before = GameState::from_grids(rules, own, opponent, Some(75))?;
    assert!(!before.is_lose());
    assert!(!before.is_done());

    let after = before.next(4)?;
    assert!(after.is_lose());
    assert!(after.is_done());
    Ok(())
}

#[test]
fn opponent_four_completed_after_a_reply() -> Result<(), PlayError> {
    let rules = Rules::default();
    // The opponent holds four collinear stones, the fifth cell (40) is open.
    let own = Grid::from_cells(rules.n_actions(), [0, 1, 2, 3]).unwrap();
    let opponent = Grid::from_cells(rules.n_actions(), [36, 37, 38, 39]).unwrap();
    let before = GameState::from_grids(rules, own, opponent, Some(39))?;
    assert!(!before.is_lose());

    // The mover fails to block and the opponent fills the fifth cell.
    let after = before.next(80)?.next(40)?;
    assert!(after.is_lose());
    Ok(())
}

#[test]
fn smaller_winning_length() -> Result<(), PlayError> {
    let rules = Rules::new(3, 3, 3)?;
    let state = play(rules, &[0, 3, 4, 5, 8])?;
    assert!(state.is_lose());
    Ok(())
}
