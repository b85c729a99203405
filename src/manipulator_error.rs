//! Errors reported by the manipulator registry and kinematics

use crate::kinematic_traits::{LinkId, Position};

/// Capability that only some link variants support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Gripper,
    Camera,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Capability::Gripper => write!(f, "gripper"),
            Capability::Camera => write!(f, "camera"),
        }
    }
}

/// All conditions the manipulator can report. Registry errors (duplicate, unknown id,
/// wrong capability) leave the manipulator untouched. Kinematic errors abort the
/// computation and no position is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ManipulatorError {
    /// Link with this id already exists, the existing link is kept.
    DuplicateId(LinkId),
    /// No link with this id is registered.
    UnknownId(LinkId),
    /// The link exists but does not support the requested operation.
    WrongCapability { id: LinkId, capability: Capability },
    /// Link cannot be registered (reserved id, bad length).
    InvalidLink { id: LinkId, reason: String },
    /// Collision threshold must be finite and non-negative.
    InvalidMinLinkDistance(f64),
    /// Ancestry of the target does not reach the base. `stopped_at` is the id
    /// that could not be resolved, or where the walk gave up on a cycle.
    IncompleteChain { target: LinkId, stopped_at: LinkId },
    /// Pitch or yaw of the base link exceeds pi/2.
    DomainViolation { id: LinkId, pitch: f64, yaw: f64 },
    /// End of link `id` came closer than allowed to the end of link `other`.
    Collision { id: LinkId, other: LinkId, distance: f64, position: Position },
}

impl std::fmt::Display for ManipulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ManipulatorError::DuplicateId(id) =>
                write!(f, "Link with id {} already exists", id),
            ManipulatorError::UnknownId(id) =>
                write!(f, "Link with id {} does not exist", id),
            ManipulatorError::WrongCapability { id, capability } =>
                write!(f, "Link {} is not a {}", id, capability),
            ManipulatorError::InvalidLink { id, ref reason } =>
                write!(f, "Invalid link {}: {}", id, reason),
            ManipulatorError::InvalidMinLinkDistance(distance) =>
                write!(f, "Minimal link distance must be finite and non-negative, got {}", distance),
            ManipulatorError::IncompleteChain { target, stopped_at } =>
                write!(f, "Incomplete chain to link {} (stopped at {})", target, stopped_at),
            ManipulatorError::DomainViolation { id, pitch, yaw } =>
                write!(f, "Pitch and yaw of link {} can't be greater than pi/2: pitch={}, yaw={}",
                       id, pitch, yaw),
            ManipulatorError::Collision { id, other, distance, position } =>
                write!(f, "Collision detected for link {} at position ({}, {}, {}): {} from link {}",
                       id, position.x, position.y, position.z, distance, other),
        }
    }
}

impl std::error::Error for ManipulatorError {}
