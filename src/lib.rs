//! Rust implementation of forward kinematics for a tree of rigid links attached to a fixed base
//!
//! Every link has a fixed length and a spherical joint at its start, oriented by pitch and yaw
//! (roll is stored but does not displace the link end). The position of the link end in global
//! coordinates is the sum of the spherical-to-Cartesian displacements of all links on the chain
//! from the base to this link.
//!
//! # Features
//!
//! - Links are registered by unique id and refer to the previous link of their chain by id.
//!   Id 0 is the fixed base (control block), placed at the origin.
//! - Positions are computed for any link of any chain, with explicit errors for broken or
//!   cyclic chains instead of sentinel values.
//! - The link attached to the control block (id 1) cannot rotate past pi/2 in pitch or yaw.
//! - Configurations where the chain folds onto itself (ends of two links closer than 0.1 by
//!   default) are rejected as collisions.
//! - Links can carry a gripper or a camera. Using the wrong capability is a typed error.
//! - Manipulator description can be read from YAML file.
//!
//! ## Example
//!
//! ```
//! use std::f64::consts::FRAC_PI_2;
//! use rs_link_kinematics::kinematic_traits::Kinematics;
//! use rs_link_kinematics::link::Link;
//! use rs_link_kinematics::manipulator::Manipulator;
//!
//! let mut manipulator = Manipulator::new();
//! manipulator.add_link(Link::new(1, 1.0, 0)).unwrap();
//! manipulator.add_link(Link::gripper(2, 1.0, 1)).unwrap();
//! manipulator.set_direction(2, FRAC_PI_2, 0.0, 0.0).unwrap();
//!
//! let position = manipulator.forward(2).unwrap();
//! assert!((position.x - 1.0).abs() < 1e-9 && (position.z - 1.0).abs() < 1e-9);
//! ```

pub mod kinematic_traits;
pub mod manipulator_error;

pub mod link;
pub mod manipulator;
pub mod chain;
pub mod collisions;
pub mod kinematics_impl;

#[path = "utils/utils.rs"]
pub mod utils;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

#[cfg(test)]
#[cfg(feature = "allow_filesystem")]
mod tests;
