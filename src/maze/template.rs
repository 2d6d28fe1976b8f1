use crate::core::{BoundedGrid, Cell, Vec2};

/// A square prefab room. The outer ring of cells is a socket describing what
/// the neighbouring template must provide; only the interior is stitched into
/// a maze.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Template {
    grid: BoundedGrid<Cell>,
}

impl Template {
    /// `None` unless the grid is square and at least 3 cells wide.
    pub fn new(grid: BoundedGrid<Cell>) -> Option<Template> {
        if grid.height() != grid.width() || grid.width() < 3 {
            return None;
        }
        Some(Template { grid })
    }

    pub fn filled(size: i32, cell: Cell) -> Template {
        Template {
            grid: BoundedGrid::new_with_size(size, size, cell),
        }
    }

    pub fn size(&self) -> i32 {
        self.grid.width()
    }

    /// Side length of the part copied into the maze.
    pub fn fill_size(&self) -> i32 {
        self.size() - 2
    }

    pub fn at(&self, i: i32, j: i32) -> Cell {
        self.grid[Vec2 { i, j }]
    }

    pub fn grid(&self) -> &BoundedGrid<Cell> {
        &self.grid
    }

    /// One quarter turn clockwise: transpose, then reverse every row.
    pub fn rotate_clockwise(&self) -> Template {
        let n = self.size();
        let mut grid = self.grid.clone();
        for i in 0..n {
            for j in 0..n {
                grid[Vec2 { i: j, j: i }] = self.grid[Vec2 { i, j }];
            }
        }
        for i in 0..n {
            for j in 0..n / 2 {
                grid.swap(&Vec2 { i, j }, &Vec2 { i, j: n - 1 - j });
            }
        }
        Template { grid }
    }

    pub fn rotated(&self, times: u32) -> Template {
        (0..times).fold(self.clone(), |template, _| template.rotate_clockwise())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::Tile;
    use crate::maze::catalog::parse_template;
    use proptest::prelude::*;

    #[test]
    fn rotate_clockwise_moves_top_row_to_right_column() {
        let template = parse_template(&["###", "#  ", "_  "]).unwrap();
        let rotated = template.rotate_clockwise();
        let expected = parse_template(&["_##", "  #", "  #"]).unwrap();
        assert_eq!(rotated, expected);
    }

    #[test]
    fn rotated_zero_times_is_identity() {
        let template = parse_template(&["#_#", "   ", "###"]).unwrap();
        assert_eq!(template.rotated(0), template);
        assert_eq!(template.rotated(2), template.rotate_clockwise().rotate_clockwise());
    }

    fn tile_strategy() -> impl Strategy<Value = Cell> {
        prop_oneof![
            Just(Cell::tile(Tile::Void)),
            Just(Cell::tile(Tile::Wall)),
            Just(Cell::tile(Tile::Floor)),
            Just(Cell::tile(Tile::Goal)),
        ]
    }

    fn template_strategy() -> impl Strategy<Value = Template> {
        (3usize..8).prop_flat_map(|n| {
            prop::collection::vec(prop::collection::vec(tile_strategy(), n), n)
                .prop_map(|rows| Template::new(BoundedGrid::from_rows(rows).unwrap()).unwrap())
        })
    }

    proptest! {
        #[test]
        fn four_quarter_turns_are_identity(template in template_strategy()) {
            let turned = (0..4).fold(template.clone(), |t, _| t.rotate_clockwise());
            prop_assert_eq!(turned, template);
        }

        #[test]
        fn rotation_is_cyclic(template in template_strategy(), k in 0u32..16) {
            prop_assert_eq!(template.rotated(k), template.rotated(k % 4));
            prop_assert_eq!(template.rotated(k + 4), template.rotated(k));
        }
    }
}
