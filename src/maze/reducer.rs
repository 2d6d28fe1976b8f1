use crate::core::{BoundedGrid, Cell, Maze, Tile, Vec2};

/// Thins solid wall mass, then crops the void border.
pub fn reduce_maze(mut maze: Maze) -> Maze {
    remove_extra_walls(&mut maze);
    strip_void_lines(&maze)
}

/// A blocked cell with no walkable cell in its clipped 3x3 neighbourhood is
/// voided. Voiding never changes walkability, so scanning in place is safe.
pub fn remove_extra_walls(maze: &mut Maze) {
    let positions: Vec<Vec2> = maze.size().positions().collect();
    for pos in positions {
        if can_void(maze, &pos) {
            maze[pos] = Cell::VOID;
        }
    }
}

fn can_void(maze: &Maze, pos: &Vec2) -> bool {
    if maze[pos].is_walkable() {
        return false;
    }
    for di in -1..=1 {
        for dj in -1..=1 {
            let around = Vec2 { i: pos.i + di, j: pos.j + dj };
            if maze.get(&around).is_some_and(|cell| cell.is_walkable()) {
                return false;
            }
        }
    }
    true
}

fn is_void(cell: &Cell) -> bool {
    cell.get_tile() == Tile::Void
}

/// Crops to the smallest rectangle holding every non-void cell. Void rows or
/// columns between rooms stay, so separate rooms never end up touching.
pub fn strip_void_lines(maze: &Maze) -> Maze {
    let row_has_content = |i: i32| (0..maze.width()).any(|j| !is_void(&maze[Vec2 { i, j }]));
    let col_has_content = |j: i32| (0..maze.height()).any(|i| !is_void(&maze[Vec2 { i, j }]));

    let (Some(top), Some(left)) = (
        (0..maze.height()).find(|&i| row_has_content(i)),
        (0..maze.width()).find(|&j| col_has_content(j)),
    ) else {
        return Maze::new_with_size(0, 0, Cell::VOID);
    };
    let bottom = (top..maze.height()).rev().find(|&i| row_has_content(i)).unwrap_or(top);
    let right = (left..maze.width()).rev().find(|&j| col_has_content(j)).unwrap_or(left);

    let rows: Vec<Vec<Cell>> = (top..=bottom)
        .map(|i| (left..=right).map(|j| maze[Vec2 { i, j }]).collect())
        .collect();
    BoundedGrid::from_rows(rows).unwrap_or_else(|| Maze::new_with_size(0, 0, Cell::VOID))
}
