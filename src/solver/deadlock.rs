use crate::core::{SharedGameState, Vec2, DIRECTION_DOWN, DIRECTION_LEFT, DIRECTION_RIGHT, DIRECTION_UP};

/// Which orthogonal neighbours of a cell are blocked by terrain. Boxes are
/// not considered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockedSides {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl BlockedSides {
    pub fn around(shared: &SharedGameState, pos: Vec2) -> BlockedSides {
        BlockedSides {
            up: !shared.is_walkable(&(pos + DIRECTION_UP)),
            down: !shared.is_walkable(&(pos + DIRECTION_DOWN)),
            left: !shared.is_walkable(&(pos + DIRECTION_LEFT)),
            right: !shared.is_walkable(&(pos + DIRECTION_RIGHT)),
        }
    }

    pub fn count(&self) -> usize {
        [self.up, self.down, self.left, self.right].iter().filter(|&&b| b).count()
    }

    pub fn is_corner(&self) -> bool {
        (self.left || self.right) && (self.up || self.down)
    }
}

/// Corner and line rules applied to every box that is not on a goal.
pub fn is_simple_deadlock(shared: &SharedGameState, boxes: &[Vec2]) -> bool {
    boxes.iter().any(|&game_box| is_box_trapped(shared, game_box))
}

fn is_box_trapped(shared: &SharedGameState, game_box: Vec2) -> bool {
    if shared.is_goal(&game_box) {
        return false;
    }

    let blocked = BlockedSides::around(shared, game_box);
    if blocked.is_corner() {
        return true;
    }

    // walled in above and below: the box can only travel along its row
    if blocked.up && blocked.down && !shared.goals.iter().any(|g| g.i == game_box.i) {
        return true;
    }
    if blocked.left && blocked.right && !shared.goals.iter().any(|g| g.j == game_box.j) {
        return true;
    }

    false
}

/// The 2x2 block spanned from `anchor` one step along `vertical` and one step
/// along `horizontal`.
fn box_formation(anchor: Vec2, vertical: Vec2, horizontal: Vec2) -> [Vec2; 4] {
    [
        anchor,
        anchor + horizontal,
        anchor + vertical,
        anchor + vertical + horizontal,
    ]
}

/// Two or more touching boxes sharing a 2x2 block that holds fewer goals than
/// boxes.
pub fn is_advanced_deadlock(shared: &SharedGameState, boxes: &[Vec2]) -> bool {
    for (index, first) in boxes.iter().enumerate() {
        for second in &boxes[index + 1..] {
            if first.chebyshev(second) > 1 {
                continue;
            }
            let formations = [
                box_formation(*first, DIRECTION_DOWN, DIRECTION_RIGHT),
                box_formation(*first, DIRECTION_DOWN, DIRECTION_LEFT),
                box_formation(*first, DIRECTION_UP, DIRECTION_RIGHT),
                box_formation(*first, DIRECTION_UP, DIRECTION_LEFT),
            ];
            for formation in &formations {
                let boxes_inside = formation.iter().filter(|p| boxes.contains(p)).count();
                if boxes_inside < 2 {
                    continue;
                }
                let goals_inside = formation.iter().filter(|p| shared.is_goal(p)).count();
                if boxes_inside > goals_inside {
                    return true;
                }
            }
        }
    }
    false
}

pub fn is_deadlock(shared: &SharedGameState, boxes: &[Vec2]) -> bool {
    is_simple_deadlock(shared, boxes) || is_advanced_deadlock(shared, boxes)
}
