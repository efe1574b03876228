#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::error::PuzzleError;
    use crate::puzzle::{moves_str, Board, Direction};
    use crate::tile::Tile;
    use crate::traits::puzzle::{DebugPrintable, Heuristic, ManhattanDistance};

    #[test]
    fn can_generate_legal_set_of_moves() {
        let test_cases: HashMap<&str, Vec<Direction>> = [
            ("3,3,012345678", vec![Direction::Right, Direction::Down]),
            ("3,3,102345678", vec![Direction::Left, Direction::Right, Direction::Down]),
            (
                "3,3,123405678",
                vec![Direction::Left, Direction::Right, Direction::Up, Direction::Down],
            ),
            ("3,3,123456780", vec![Direction::Left, Direction::Up]),
            ("3,3,123456708", vec![Direction::Left, Direction::Right, Direction::Up]),
            ("2,2,1230", vec![Direction::Left, Direction::Up]),
        ]
        .iter()
        .cloned()
        .collect();

        for (puzzle_str, expected_result) in test_cases {
            let puzzle: Board = puzzle_str.parse().unwrap();
            let legal_moves: Vec<Direction> = puzzle.legal_moves().collect();
            assert_eq!(legal_moves, expected_result, "board {puzzle_str}");
        }
    }

    #[test]
    fn neighbors_are_emitted_left_right_up_down() {
        let puzzle: Board = "3,3,123405678".parse().unwrap();
        let neighbors: Vec<String> = puzzle
            .neighbors()
            .iter()
            .map(|b| b.serialized().unwrap())
            .collect();

        assert_eq!(
            neighbors,
            vec![
                "3,3,123045678",
                "3,3,123450678",
                "3,3,103425678",
                "3,3,123475608",
            ]
        );
    }

    #[test]
    fn calculates_manhattan_distance_correctly() {
        let puzzle: Board = "3,3,123456708".parse().unwrap();
        let solved = Board::solved(3).unwrap();

        assert_eq!(puzzle.heuristic(&solved), 1);
        assert_eq!(solved.heuristic(&solved), 0);

        // 1 2 3      1 2 3
        // 4 0 5  ->  4 5 6
        // 6 7 8      7 8 0
        let puzzle: Board = "3,3,123405678".parse().unwrap();
        assert_eq!(puzzle.heuristic(&solved), 6);
    }

    #[test]
    fn manhattan_distance_is_measured_against_the_given_goal() {
        let goal: Board = "3,3,087654321".parse().unwrap();
        let puzzle: Board = "3,3,807654321".parse().unwrap();
        let heuristic = ManhattanDistance::new(&goal);

        assert_eq!(heuristic.estimate(&goal), 0);
        assert_eq!(heuristic.estimate(&puzzle), 1);
        assert_eq!(puzzle.heuristic(&goal), heuristic.estimate(&puzzle));
    }

    #[test]
    fn move_space_swaps_correctly() {
        let puzzle: Board = "3,3,123405678".parse().unwrap();
        let starting_idx = puzzle.space_idx();

        let moved = puzzle.apply(Direction::Down).expect("illegal move made");
        assert_eq!(moved.space_idx(), starting_idx + 3);
        assert_eq!(moved.tile_at(1, 1), Tile::new(7));
        // Moving leaves the receiver as it was.
        assert_eq!(puzzle.space_idx(), starting_idx);

        let corner = Board::solved(3).unwrap();
        let error = corner.apply(Direction::Right).unwrap_err();
        assert!(matches!(
            error,
            PuzzleError::IllegalMove {
                direction: Direction::Right,
                row: 2,
                col: 2
            }
        ));
        assert!(corner.apply(Direction::Down).is_err());
    }

    #[test]
    fn check_is_solved_works() {
        let puzzle: Board = "3,3,123456708".parse().unwrap();
        let solved = Board::solved(3).unwrap();

        assert!(!puzzle.is_goal(&solved));
        assert!(puzzle.apply(Direction::Right).unwrap().is_goal(&solved));
    }

    #[test]
    fn keys_depend_only_on_contents() {
        let built = Board::from_rows(&[[1u8, 2, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
        let parsed: Board = "3,3,123456780".parse().unwrap();
        let moved = "3,3,123456708"
            .parse::<Board>()
            .unwrap()
            .apply(Direction::Right)
            .unwrap();

        assert_eq!(built.key(), parsed.key());
        assert_eq!(built.key(), moved.key());
        assert_ne!(built.key(), Board::solved(3).unwrap().neighbors()[0].key());
        assert_eq!(built.key().to_string(), "1,2,3,4,5,6,7,8,0");
    }

    #[test]
    fn move_between_recovers_directions() {
        let start: Board = "3,3,123405678".parse().unwrap();
        let mut path = vec![start.clone()];
        for direction in [Direction::Right, Direction::Down, Direction::Left] {
            let next = path.last().unwrap().apply(direction).unwrap();
            path.push(next);
        }

        let moves: Vec<Direction> = path
            .windows(2)
            .map(|pair| Board::move_between(&pair[0], &pair[1]).unwrap())
            .collect();
        assert_eq!(moves_str(&moves), "RDL");
        assert_eq!(Board::move_between(&start, &path[2]), None);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn parses_and_serializes_text_boards() {
        let puzzle: Board = "4,4,123456789abcdef0".parse().unwrap();
        assert_eq!(puzzle, Board::solved(4).unwrap());
        assert_eq!(puzzle.serialized().as_deref(), Some("4,4,123456789abcdef0"));

        assert!(matches!(
            "3,2,123456".parse::<Board>(),
            Err(PuzzleError::Parse { .. })
        ));
        assert!(matches!(
            "3,3,12345678".parse::<Board>(),
            Err(PuzzleError::CellCount {
                expected: 9,
                found: 8
            })
        ));
        assert!(matches!(
            "3,3,123456789".parse::<Board>(),
            Err(PuzzleError::MissingBlank)
        ));
        assert!(matches!(
            "1,1,0".parse::<Board>(),
            Err(PuzzleError::InvalidDimension(1))
        ));
        assert!(matches!("x,3,0".parse::<Board>(), Err(PuzzleError::Parse { .. })));
        assert!(matches!(
            "4294967296,4294967296,0".parse::<Board>(),
            Err(PuzzleError::InvalidDimension(_))
        ));
        assert!(matches!(
            "17,17,0".parse::<Board>(),
            Err(PuzzleError::InvalidDimension(17))
        ));
    }

    #[test]
    fn validate_reports_malformed_contents() {
        assert!(Board::solved(3).unwrap().validate().is_ok());

        let duplicate = Board::from_cells(2, vec![1, 1, 3, 0]).unwrap();
        assert!(matches!(duplicate.validate(), Err(PuzzleError::DuplicateTile(1))));

        let out_of_range = Board::from_cells(2, vec![1, 9, 3, 0]).unwrap();
        assert!(matches!(
            out_of_range.validate(),
            Err(PuzzleError::TileOutOfRange { tile: 9, dimension: 2 })
        ));

        let two_blanks = Board::from_cells(2, vec![1, 0, 3, 0]).unwrap();
        assert!(matches!(two_blanks.validate(), Err(PuzzleError::DuplicateTile(0))));
    }

    #[test]
    fn detects_parity_of_unreachable_goals() {
        let solved3 = Board::solved(3).unwrap();
        assert!("3,3,123405678".parse::<Board>().unwrap().is_solvable_towards(&solved3));
        assert!(!"3,3,213456780".parse::<Board>().unwrap().is_solvable_towards(&solved3));

        let solved2 = Board::solved(2).unwrap();
        assert!("2,2,0132".parse::<Board>().unwrap().is_solvable_towards(&solved2));
        assert!(!"2,2,2130".parse::<Board>().unwrap().is_solvable_towards(&solved2));

        let solved4 = Board::solved(4).unwrap();
        let up = solved4.apply(Direction::Up).unwrap();
        assert!(up.is_solvable_towards(&solved4));
        assert!(!"4,4,213456789abcdef0".parse::<Board>().unwrap().is_solvable_towards(&solved4));
    }

    #[test]
    fn displays_rows_of_values() {
        let puzzle: Board = "3,3,123405678".parse().unwrap();
        assert_eq!(puzzle.to_string(), "1 2 3\n4 0 5\n6 7 8");
    }

    #[test]
    fn renders_a_box_grid() {
        let puzzle: Board = "2,2,1230".parse().unwrap();
        let rendered = puzzle.render(false);
        let expected = "\
┌───┬───┐
│ 1 │ 2 │
├───┼───┤
│ 3 │   │
└───┴───┘
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn boards_round_trip_through_json_rows() {
        let puzzle: Board = "3,3,123405678".parse().unwrap();
        let json = serde_json::to_string(&puzzle).unwrap();
        assert_eq!(json, "[[1,2,3],[4,0,5],[6,7,8]]");

        let from_text: Board = serde_json::from_str("\"3,3,123405678\"").unwrap();
        assert_eq!(from_text, puzzle);
    }
}
