use crate::core::{SharedGameState, Vec2};
use crate::solver::deadlock::BlockedSides;

/// Greedy box to goal matching: each box in turn takes the nearest goal no
/// earlier box claimed. Not an optimal assignment.
pub fn greedy_goal_distance(boxes: &[Vec2], goals: &[Vec2]) -> u32 {
    let mut used = vec![false; goals.len()];
    let mut total = 0;
    for game_box in boxes {
        let nearest = goals
            .iter()
            .enumerate()
            .filter(|(index, _)| !used[*index])
            .map(|(index, goal)| (game_box.manhattan(goal), index))
            .min();
        if let Some((distance, index)) = nearest {
            used[index] = true;
            total += distance;
        }
    }
    total
}

/// Sides of boxes touching terrain that cannot be walked on.
pub fn blocked_box_sides(shared: &SharedGameState, boxes: &[Vec2]) -> usize {
    boxes
        .iter()
        .map(|&game_box| BlockedSides::around(shared, game_box).count())
        .sum()
}

pub fn estimate_cost(shared: &SharedGameState, boxes: &[Vec2], wall_penalty: f64) -> f64 {
    greedy_goal_distance(boxes, &shared.goals) as f64
        + blocked_box_sides(shared, boxes) as f64 * wall_penalty
}
