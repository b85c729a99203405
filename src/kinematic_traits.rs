//! Defines the link identifiers, position types and the kinematics trait

extern crate nalgebra as na;

use na::{Point3, Vector3};
use crate::manipulator_error::ManipulatorError;

/// Identifier of the link in the manipulator. Value 0 is reserved for the fixed base.
pub type LinkId = u32;

/// Position of the link end in global coordinates
/// ```
/// extern crate nalgebra as na;
/// use na::Point3;
///
/// type Position = Point3<f64>;
///
/// let position = Position::new(1.0, 0.0, 1.0);
/// assert_eq!(position.x, 1.0);
/// ```
pub type Position = Point3<f64>;

/// Offset of the link end relative to the end of the previous link.
pub type Displacement = Vector3<f64>;

/// Sentinel id of the fixed base. Every chain must end here.
pub const BASE_ID: LinkId = 0;

/// The link directly attached to the control block. Its pitch and yaw cannot
/// exceed pi/2.
pub const BASE_LINK_ID: LinkId = 1;

/// Default minimal distance between ends of any two links of the same chain.
pub const MIN_LINK_DISTANCE: f64 = 0.1;

/// Position of the fixed base in global coordinates.
pub const BASE_POSITION: Position = Point3::new(0.0, 0.0, 0.0);

pub trait Kinematics {
    /// Absolute position of the end of the given link. The id of the base (0)
    /// always resolves to the origin.
    fn forward(&self, id: LinkId) -> Result<Position, ManipulatorError>;

    /// Absolute positions of all links on the chain from the base up to the given link
    /// (root first, target last). The base itself is not included.
    fn forward_with_link_positions(&self, id: LinkId)
                                   -> Result<Vec<(LinkId, Position)>, ManipulatorError>;
}
