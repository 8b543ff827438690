use tictactoe::{Board, BoardError, Cell, Player};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

#[test]
fn new_board_is_empty_three_by_three() {
    let b = Board::new();
    assert_eq!(b.size(), 3);
    assert_eq!(b.mark_count(), 0);
    assert_eq!(b.empty_cells().len(), 9);
    assert_eq!(b.center(), (1, 1));
    assert!(!b.is_full());
}

#[test]
fn parse_and_display_agree() {
    let text = "XO.\n.X.\nO..";
    let b = board(text);
    assert_eq!(b.get(0, 0), Some(Cell::Occupied(Player::X)));
    assert_eq!(b.get(0, 1), Some(Cell::Occupied(Player::O)));
    assert_eq!(b.get(2, 2), Some(Cell::Empty));
    assert_eq!(b.get(3, 0), None);
    assert_eq!(b.to_string(), text);
}

#[test]
fn rejects_malformed_boards() {
    assert_eq!("XO\n..".parse::<Board>().unwrap_err(), BoardError::InvalidSize(2));
    assert_eq!("X".parse::<Board>().unwrap_err(), BoardError::InvalidSize(1));
    assert_eq!("XO.\n..\n...".parse::<Board>().unwrap_err(), BoardError::NotSquare);
    assert_eq!("XO.\n.Z.\n...".parse::<Board>().unwrap_err(), BoardError::InvalidCell('Z'));
}

#[test]
fn empty_cells_are_row_major() {
    let b = board("X.X\nOOX\n.X.");
    assert_eq!(b.empty_cells(), vec![(0, 1), (2, 0), (2, 2)]);
}

#[test]
fn run_length_counts_both_directions() {
    let b = board(
        ".....\n\
         XXXX.\n\
         .....\n\
         .....\n\
         .....",
    );
    assert_eq!(b.run_length(1, 1, (0, 1)), 4);
    assert_eq!(b.run_length(1, 1, (1, 0)), 1);
    assert_eq!(b.run_length(1, 4, (0, 1)), 0);
}

#[test]
fn wins_through_each_direction() {
    let row = board("...\nOOO\n...");
    assert!(row.wins_through(1, 0, 3));
    let col = board(".X.\n.X.\n.X.");
    assert!(col.wins_through(2, 1, 3));
    let diag = board("O..\n.O.\n..O");
    assert!(diag.wins_through(1, 1, 3));
    let anti = board("..X\n.X.\nX..");
    assert!(anti.wins_through(0, 2, 3));
    assert!(!anti.wins_through(0, 2, 4));
}

#[test]
fn wins_through_only_sees_lines_through_the_cell() {
    // Row 0 is a completed line, but (2, 2) is not on it.
    let b = board("XXX\n...\n..X");
    assert!(!b.wins_through(2, 2, 3));
    assert!(b.wins_through(0, 1, 3));
}

#[test]
fn expand_recenters_contents() {
    let mut b = board("XO.\n.X.\nO.X");
    let before = b.clone();
    b.expand();
    assert_eq!(b.size(), 5);
    assert_eq!(b.mark_count(), before.mark_count());
    for r in 0..3 {
        for c in 0..3 {
            assert_eq!(b.get(r + 1, c + 1), before.get(r, c));
        }
    }
    for i in 0..5 {
        assert_eq!(b.get(0, i), Some(Cell::Empty));
        assert_eq!(b.get(4, i), Some(Cell::Empty));
        assert_eq!(b.get(i, 0), Some(Cell::Empty));
        assert_eq!(b.get(i, 4), Some(Cell::Empty));
    }
    assert_eq!(b.center(), (2, 2));
    assert_eq!(b.get(2, 2), Some(Cell::Occupied(Player::X)));
}

#[test]
fn winner_scans_the_whole_board() {
    assert_eq!(board("XO.\n.X.\nO..").winner(3), None);
    assert_eq!(board("O..\nXXX\n.O.").winner(3), Some(Player::X));
    assert_eq!(board("..O\n.O.\nOXX").winner(3), Some(Player::O));
    assert_eq!(board(".....\n.OOO.\n.....\n.....\n.....").winner(4), None);
    assert_eq!(board(".....\n.OOO.\n.....\n.....\n.....").winner(3), Some(Player::O));
}
