//! The manipulator owns all links, keyed by their ids

use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;
use crate::kinematic_traits::{BASE_ID, LinkId, MIN_LINK_DISTANCE};
use crate::link::Link;
use crate::manipulator_error::{Capability, ManipulatorError};

/// Tree of links attached to the fixed base. Only the prev_id references define the
/// kinematic chains, the storage order does not affect any computed result.
#[derive(Debug, Clone)]
pub struct Manipulator {
    links: BTreeMap<LinkId, Link>,

    /// Ends of two links of the same chain closer than this are treated as collision.
    min_link_distance: f64,
}

impl Default for Manipulator {
    fn default() -> Self {
        Manipulator {
            links: BTreeMap::new(),
            min_link_distance: MIN_LINK_DISTANCE,
        }
    }
}

impl Manipulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the collision threshold. NaN, infinite or negative values would disable the
    /// collision check and are rejected.
    pub fn with_min_link_distance(mut self, min_link_distance: f64) -> Result<Self, ManipulatorError> {
        if !min_link_distance.is_finite() || min_link_distance < 0.0 {
            return Err(report(ManipulatorError::InvalidMinLinkDistance(min_link_distance)));
        }
        self.min_link_distance = min_link_distance;
        Ok(self)
    }

    pub fn min_link_distance(&self) -> f64 {
        self.min_link_distance
    }

    /// Adds the link under its own id. If the id is already taken, the existing link
    /// stays as it was and DuplicateId is returned.
    pub fn add_link(&mut self, link: Link) -> Result<(), ManipulatorError> {
        let id = link.id();
        if id == BASE_ID {
            return Err(report(ManipulatorError::InvalidLink {
                id,
                reason: "id 0 is reserved for the base".to_string(),
            }));
        }
        if !link.length().is_finite() || link.length() < 0.0 {
            return Err(report(ManipulatorError::InvalidLink {
                id,
                reason: format!("length must be finite and non-negative, got {}", link.length()),
            }));
        }
        if self.links.contains_key(&id) {
            return Err(report(ManipulatorError::DuplicateId(id)));
        }
        self.links.insert(id, link);
        Ok(())
    }

    pub fn get_link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(&id)
    }

    pub fn contains(&self, id: LinkId) -> bool {
        self.links.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// All links in ascending id order.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    /// Sets the live orientation of the link. Angles are not validated here,
    /// the kinematics does this when computing positions.
    pub fn set_direction(&mut self, id: LinkId, pitch: f64, yaw: f64, roll: f64)
                         -> Result<(), ManipulatorError> {
        self.link_mut(id)?.set_direction(pitch, yaw, roll);
        Ok(())
    }

    pub fn open_gripper(&mut self, id: LinkId, angle: f64) -> Result<(), ManipulatorError> {
        let link = self.link_mut(id)?;
        link.as_gripper_mut()
            .ok_or_else(|| report(ManipulatorError::WrongCapability { id, capability: Capability::Gripper }))?
            .open(angle);
        link.log_action("gripper opened");
        Ok(())
    }

    pub fn close_gripper(&mut self, id: LinkId) -> Result<(), ManipulatorError> {
        let link = self.link_mut(id)?;
        link.as_gripper_mut()
            .ok_or_else(|| report(ManipulatorError::WrongCapability { id, capability: Capability::Gripper }))?
            .close();
        link.log_action("gripper closed");
        Ok(())
    }

    /// Takes a photo with the camera on the given link, returning the photo number.
    pub fn take_photo(&mut self, id: LinkId) -> Result<u32, ManipulatorError> {
        let link = self.link_mut(id)?;
        let photo = link.as_camera_mut()
            .ok_or_else(|| report(ManipulatorError::WrongCapability { id, capability: Capability::Camera }))?
            .take_photo();
        link.log_action("photo taken");
        Ok(photo)
    }

    fn link_mut(&mut self, id: LinkId) -> Result<&mut Link, ManipulatorError> {
        self.links.get_mut(&id).ok_or_else(|| report(ManipulatorError::UnknownId(id)))
    }
}

/// Sends the condition to the diagnostic channel and hands it back for returning.
pub(crate) fn report(error: ManipulatorError) -> ManipulatorError {
    warn!("{}", error);
    error
}

impl fmt::Display for Manipulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Manipulator Structure ---")?;
        for link in self.links() {
            writeln!(f, "{}", link)?;
        }
        write!(f, "------------------------------")
    }
}
