//! Rigid links of the manipulator and their specialized variants.
//!
//! Every link has a fixed length, a mutable orientation (pitch, yaw, roll) and
//! the id of the previous link in the chain. Roll is stored but does not move the
//! link end: rods rotate about their own axis without displacing other rods.
//! Grippers and cameras carry extra state that does not affect kinematics.

use std::fmt;
use tracing::info;
use crate::kinematic_traits::{Displacement, LinkId};
use crate::manipulator_error::Capability;

/// Orientation of the link, all angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl Orientation {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Orientation { pitch, yaw, roll }
    }
}

/// Gripper mounted on the link.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gripper {
    /// Current aperture angle, radians. Zero when closed.
    pub aperture: f64,
}

impl Gripper {
    pub fn open(&mut self, angle: f64) {
        self.aperture = angle;
    }

    pub fn close(&mut self) {
        self.aperture = 0.0;
    }

    pub fn is_open(&self) -> bool {
        self.aperture != 0.0
    }
}

/// Camera mounted on the link.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    /// Number of photos taken so far.
    pub photos_taken: u32,
}

impl Camera {
    /// Takes a photo and returns its sequence number (starting from 1).
    pub fn take_photo(&mut self) -> u32 {
        self.photos_taken += 1;
        self.photos_taken
    }
}

/// Closed set of link variants. Only the variant decides which specialized
/// operations are available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinkKind {
    Plain,
    Gripper(Gripper),
    Camera(Camera),
}

impl LinkKind {
    pub fn supports(&self, capability: Capability) -> bool {
        matches!(
            (self, capability),
            (LinkKind::Gripper(_), Capability::Gripper) | (LinkKind::Camera(_), Capability::Camera)
        )
    }

    fn name(&self) -> &'static str {
        match self {
            LinkKind::Plain => "link",
            LinkKind::Gripper(_) => "gripper",
            LinkKind::Camera(_) => "camera",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    id: LinkId,
    length: f64,
    prev_id: LinkId,
    orientation: Orientation,
    kind: LinkKind,
}

impl Link {
    /// Plain link with all angles at zero (pointing straight up).
    pub fn new(id: LinkId, length: f64, prev_id: LinkId) -> Self {
        Link {
            id,
            length,
            prev_id,
            orientation: Orientation::default(),
            kind: LinkKind::Plain,
        }
    }

    /// Link with a closed gripper.
    pub fn gripper(id: LinkId, length: f64, prev_id: LinkId) -> Self {
        Link::new(id, length, prev_id).with_kind(LinkKind::Gripper(Gripper::default()))
    }

    /// Link with a camera that has not taken any photos yet.
    pub fn camera(id: LinkId, length: f64, prev_id: LinkId) -> Self {
        Link::new(id, length, prev_id).with_kind(LinkKind::Camera(Camera::default()))
    }

    pub fn with_kind(mut self, kind: LinkKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn id(&self) -> LinkId {
        self.id
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn prev_id(&self) -> LinkId {
        self.prev_id
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn kind(&self) -> &LinkKind {
        &self.kind
    }

    pub fn set_direction(&mut self, pitch: f64, yaw: f64, roll: f64) {
        self.orientation = Orientation { pitch, yaw, roll };
    }

    /// Offset of the link end from its start, spherical to Cartesian:
    /// (r cos(yaw) sin(pitch), r sin(yaw) sin(pitch), r cos(pitch)). Roll is ignored.
    pub fn displacement(&self) -> Displacement {
        let Orientation { pitch, yaw, .. } = self.orientation;
        let r = self.length;
        Displacement::new(
            r * yaw.cos() * pitch.sin(),
            r * yaw.sin() * pitch.sin(),
            r * pitch.cos(),
        )
    }

    pub fn as_gripper_mut(&mut self) -> Option<&mut Gripper> {
        match &mut self.kind {
            LinkKind::Gripper(gripper) => Some(gripper),
            _ => None,
        }
    }

    pub fn as_camera_mut(&mut self) -> Option<&mut Camera> {
        match &mut self.kind {
            LinkKind::Camera(camera) => Some(camera),
            _ => None,
        }
    }

    pub(crate) fn log_action(&self, action: &str) {
        info!(link = self.id, kind = self.kind.name(), "{}", action);
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = &self.orientation;
        write!(
            f,
            "{} {}: r={:.3}, prev={}, pitch={:.2}°, yaw={:.2}°, roll={:.2}°",
            self.kind.name(), self.id, self.length, self.prev_id,
            o.pitch.to_degrees(), o.yaw.to_degrees(), o.roll.to_degrees()
        )?;
        match self.kind {
            LinkKind::Plain => Ok(()),
            LinkKind::Gripper(g) => write!(f, ", aperture={:.2}°", g.aperture.to_degrees()),
            LinkKind::Camera(c) => write!(f, ", photos={}", c.photos_taken),
        }
    }
}
