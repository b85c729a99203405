//! Resolves the kinematic chain from the base to the given link

use crate::kinematic_traits::{BASE_ID, LinkId};
use crate::manipulator::{report, Manipulator};
use crate::manipulator_error::ManipulatorError;

impl Manipulator {
    /// Returns ids of links from the one attached to the base up to `id` (inclusive).
    /// The chain of the base itself is empty. Fails with UnknownId if `id` is not
    /// registered and with IncompleteChain if the prev_id references do not reach the base,
    /// either because some ancestor is missing or because they loop.
    pub fn chain(&self, id: LinkId) -> Result<Vec<LinkId>, ManipulatorError> {
        if id == BASE_ID {
            return Ok(Vec::new());
        }
        if !self.contains(id) {
            return Err(report(ManipulatorError::UnknownId(id)));
        }

        let mut chain = Vec::new();
        let mut current = id;
        while current != BASE_ID {
            // A chain longer than the number of links must revisit some link.
            if chain.len() == self.len() {
                return Err(report(ManipulatorError::IncompleteChain { target: id, stopped_at: current }));
            }
            let link = self.get_link(current)
                .ok_or_else(|| report(ManipulatorError::IncompleteChain { target: id, stopped_at: current }))?;
            chain.push(current);
            current = link.prev_id();
        }

        chain.reverse();
        Ok(chain)
    }
}
