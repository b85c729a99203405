//! Forward kinematics of the manipulator.
//!
//! Position of link n in global coordinates is the position of link n-1 plus its own
//! displacement (r cos(yaw) sin(pitch), r sin(yaw) sin(pitch), r cos(pitch)). The base
//! (control block) is the origin. The base link cannot point below the horizon nor
//! rotate past pi/2 in yaw; the other links can take any angles as long as the chain
//! does not collide with itself.

use std::f64::consts::FRAC_PI_2;
use tracing::debug;
use crate::collisions::{check_separation, collision_details};
use crate::kinematic_traits::{Kinematics, LinkId, Position, BASE_LINK_ID, BASE_POSITION};
use crate::link::Link;
use crate::manipulator::{report, Manipulator};
use crate::manipulator_error::ManipulatorError;

impl Kinematics for Manipulator {
    fn forward(&self, id: LinkId) -> Result<Position, ManipulatorError> {
        Ok(self.forward_with_link_positions(id)?
            .last()
            .map_or(BASE_POSITION, |(_, position)| *position))
    }

    fn forward_with_link_positions(&self, id: LinkId)
                                   -> Result<Vec<(LinkId, Position)>, ManipulatorError> {
        let chain = self.chain(id)?;
        let mut placed: Vec<(LinkId, Position)> = Vec::with_capacity(chain.len());
        let mut position = BASE_POSITION;

        for &link_id in &chain {
            // chain() has resolved every id already.
            let link = self.get_link(link_id).ok_or_else(|| report(ManipulatorError::UnknownId(link_id)))?;
            check_domain(link).map_err(report)?;

            position += link.displacement();
            debug!(link = link_id, x = position.x, y = position.y, z = position.z, "link placed");

            // The first link is only attached to the base, nothing to collide with yet.
            check_separation(&placed, link_id, &position, self.min_link_distance()).map_err(report)?;
            placed.push((link_id, position));
        }
        Ok(placed)
    }
}

impl Manipulator {
    /// Absolute position of the end of the given link, see [`Kinematics::forward`].
    pub fn calculate_position(&self, id: LinkId) -> Result<Position, ManipulatorError> {
        self.forward(id)
    }

    /// Lists all pairs of links on the chain to `id` whose ends are too close, without
    /// stopping at the first one. The base link domain is not checked here.
    pub fn collision_details(&self, id: LinkId) -> Result<Vec<(LinkId, LinkId)>, ManipulatorError> {
        let chain = self.chain(id)?;
        let mut placed = Vec::with_capacity(chain.len());
        let mut position = BASE_POSITION;
        for link_id in chain {
            let link = self.get_link(link_id).ok_or_else(|| report(ManipulatorError::UnknownId(link_id)))?;
            position += link.displacement();
            placed.push((link_id, position));
        }
        Ok(collision_details(&placed, self.min_link_distance()))
    }
}

/// Pitch and yaw of the base link must not exceed pi/2. Lower bounds are not checked.
fn check_domain(link: &Link) -> Result<(), ManipulatorError> {
    if link.id() != BASE_LINK_ID {
        return Ok(());
    }
    let orientation = link.orientation();
    // Negated comparison so that NaN angles are rejected too.
    if !(orientation.pitch <= FRAC_PI_2 && orientation.yaw <= FRAC_PI_2) {
        return Err(ManipulatorError::DomainViolation {
            id: link.id(),
            pitch: orientation.pitch,
            yaw: orientation.yaw,
        });
    }
    Ok(())
}
