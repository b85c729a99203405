//! Implements the self-collision check of the chain.
//!
//! This is a coarse point proximity check rather than a volumetric one: the end of the newly
//! placed link must stay at least the minimal distance away from the ends of all links placed
//! before it in the same chain. In practice it detects the chain folding back onto itself.

use nalgebra::distance;
use crate::kinematic_traits::{LinkId, Position};
use crate::manipulator_error::ManipulatorError;

/// Checks the end of link `id` at `position` against all `placed` link ends.
/// Returns the first violation found, in chain order.
pub fn check_separation(
    placed: &[(LinkId, Position)],
    id: LinkId,
    position: &Position,
    min_distance: f64,
) -> Result<(), ManipulatorError> {
    match placed
        .iter()
        .map(|(other, other_position)| (*other, distance(position, other_position)))
        .find(|&(_, d)| d < min_distance)
    {
        Some((other, distance)) => Err(ManipulatorError::Collision {
            id,
            other,
            distance,
            position: *position,
        }),
        None => Ok(()),
    }
}

/// Returns all pairs of chain links (by index) whose ends are closer than `min_distance`.
/// Unlike `check_separation` this does not stop on the first collision.
pub fn collision_details(placed: &[(LinkId, Position)], min_distance: f64) -> Vec<(LinkId, LinkId)> {
    let mut collisions = Vec::new();
    for i in 0..placed.len() {
        for j in (i + 1)..placed.len() {
            if distance(&placed[i].1, &placed[j].1) < min_distance {
                collisions.push((placed[i].0, placed[j].0));
            }
        }
    }
    collisions
}
