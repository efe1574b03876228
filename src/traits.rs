pub mod puzzle {
    use std::fmt::Write;

    use colored::Colorize;

    use crate::puzzle::Board;

    pub trait DebugPrintable {
        /// Box-drawn grid of the board, the blank highlighted when `color` is set.
        fn render(&self, color: bool) -> String;
    }

    impl DebugPrintable for Board {
        fn render(&self, color: bool) -> String {
            let dimension = self.dimension();
            let cell_width = (dimension * dimension - 1).to_string().len() + 2;
            let rule = "─".repeat(cell_width);
            let border = |left: &str, mid: &str, right: &str| {
                let mut line = String::from(left);
                for col in 0..dimension {
                    line.push_str(&rule);
                    line.push_str(if col < dimension - 1 { mid } else { right });
                }
                line.push('\n');
                line
            };

            let mut out = border("┌", "┬", "┐");
            for (row_idx, row) in self.rows().enumerate() {
                out.push('│');
                for tile in row {
                    if !tile.is_blank() {
                        let _ = write!(out, "{:^cell_width$}", tile.value());
                    } else if color {
                        let _ = write!(out, "{}", " ".repeat(cell_width).on_green());
                    } else {
                        out.push_str(&" ".repeat(cell_width));
                    }
                    out.push('│');
                }
                out.push('\n');

                if row_idx < dimension - 1 {
                    out.push_str(&border("├", "┼", "┤"));
                }
            }
            out.push_str(&border("└", "┴", "┘"));
            out
        }
    }

    /// Admissible estimate of the number of moves left until the goal.
    pub trait Heuristic {
        fn estimate(&self, board: &Board) -> u32;
    }

    /// Sum over the numbered tiles of their row and column offset from the goal cell.
    #[derive(Debug, Clone)]
    pub struct ManhattanDistance {
        dimension: usize,
        targets: Vec<(usize, usize)>,
    }

    impl ManhattanDistance {
        pub fn new(goal: &Board) -> Self {
            let dimension = goal.dimension();
            let mut targets = vec![(0, 0); goal.tiles().len()];
            for (idx, tile) in goal.tiles().iter().enumerate() {
                if let Some(target) = targets.get_mut(tile.value() as usize) {
                    *target = (idx / dimension, idx % dimension);
                }
            }

            Self { dimension, targets }
        }
    }

    impl Heuristic for ManhattanDistance {
        fn estimate(&self, board: &Board) -> u32 {
            let mut heuristic = 0;

            for (idx, tile) in board.tiles().iter().enumerate() {
                if tile.is_blank() {
                    continue;
                }
                let Some(&(goal_row, goal_col)) = self.targets.get(tile.value() as usize) else {
                    continue;
                };
                let (row, col) = (idx / self.dimension, idx % self.dimension);
                heuristic += (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32;
            }

            heuristic
        }
    }
}
