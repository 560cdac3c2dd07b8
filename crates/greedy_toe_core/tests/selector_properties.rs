//! Properties of the heuristic move selector.

use greedy_toe_core::{
    Board, NoMoveAvailable, Player, Position, PriorityGroup, Tier, select_move,
    select_move_with_tier,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_takes_winning_square() {
    let cases = [
        ("OO.X.X...", Position::TopRight),
        ("X..XO..O.", Position::TopCenter),
        ("O.X.OX...", Position::BottomRight),
        ("X.OXO....", Position::BottomLeft),
    ];
    let mut rng = StdRng::seed_from_u64(1);
    for (layout, expected) in cases {
        assert_eq!(
            select_move(&board(layout), Player::O, &mut rng),
            Ok(expected),
            "board {layout}"
        );
    }
}

#[test]
fn test_blocks_the_other_player() {
    // X threatens 2; O has no line of its own.
    let b = board("XX..O....");
    let mut rng = StdRng::seed_from_u64(2);
    assert_eq!(select_move(&b, Player::O, &mut rng), Ok(Position::TopRight));

    // X threatens the left column at 6.
    let b = board("X.OX.....");
    assert_eq!(select_move(&b, Player::O, &mut rng), Ok(Position::BottomLeft));
}

#[test]
fn test_tactical_moves_are_deterministic() {
    let boards = ["XX..O....", "OO.X.X...", "X.OX....."];
    for layout in boards {
        let b = board(layout);
        let first = select_move(&b, Player::O, &mut StdRng::seed_from_u64(0)).unwrap();
        for seed in 1..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(select_move(&b, Player::O, &mut rng), Ok(first));
        }
    }
}

#[test]
fn test_empty_board_picks_head_of_drawn_group() {
    let b = Board::new();
    let mut rng = StdRng::seed_from_u64(99);
    let mut seen = HashSet::new();
    for _ in 0..500 {
        let pos = select_move(&b, Player::O, &mut rng).unwrap();
        seen.insert(pos.to_index());
    }
    assert_eq!(seen, HashSet::from([0, 4, 1]));
}

#[test]
fn test_open_corner_scenario() {
    // X took the top-left corner; nothing tactical exists.
    let b = board("X........");
    let mut rng = StdRng::seed_from_u64(5);
    let mut seen = HashSet::new();
    for _ in 0..500 {
        let pos = select_move(&b, Player::O, &mut rng).unwrap();
        assert_ne!(pos, Position::TopLeft);
        seen.insert(pos.to_index());
    }
    assert_eq!(seen, HashSet::from([2, 4, 1]));
}

#[test]
fn test_group_without_free_squares_is_skipped() {
    // Center taken: drawing it first falls through to the next group.
    let b = board("....X....");
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..300 {
        let (pos, tier) = select_move_with_tier(&b, Player::O, &mut rng).unwrap();
        match tier {
            Tier::Positional(PriorityGroup::Edges) => assert_eq!(pos, Position::TopCenter),
            Tier::Positional(PriorityGroup::Corners) => assert_eq!(pos, Position::TopLeft),
            other => panic!("unexpected tier {other:?} choosing {pos}"),
        }
    }
}

#[test]
fn test_block_scenario_with_center_taken() {
    let b = board("XX..O....");
    let mut rng = StdRng::seed_from_u64(3);
    let (pos, tier) = select_move_with_tier(&b, Player::O, &mut rng).unwrap();
    assert_eq!(pos.to_index(), 2);
    assert_eq!(tier, Tier::Block);
}

#[test]
fn test_selector_does_not_mutate_input() {
    let layouts = ["XX..O....", "OO.X.X...", "X........", ".........", "XOXOXXOXO"];
    let mut rng = StdRng::seed_from_u64(4);
    for layout in layouts {
        let b = board(layout);
        let before = b;
        let _ = select_move(&b, Player::O, &mut rng);
        assert_eq!(b, before);
    }
}

#[test]
fn test_full_board_reports_no_move() {
    let mut rng = StdRng::seed_from_u64(6);
    assert_eq!(
        select_move(&board("XOXOXXOXO"), Player::O, &mut rng),
        Err(NoMoveAvailable)
    );
}

#[test]
fn test_selected_square_is_always_empty() {
    let mut rng = StdRng::seed_from_u64(12);
    let layouts = ["X.O.X.O..", "XO.......", ".X.O.X.O.", "OXOXOX..."];
    for layout in layouts {
        let b = board(layout);
        for _ in 0..50 {
            let pos = select_move(&b, Player::O, &mut rng).unwrap();
            assert!(b.is_empty(pos), "{pos} is taken on {layout}");
        }
    }
}
