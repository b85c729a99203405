//! Helper functions

use crate::kinematic_traits::{LinkId, Position};
use crate::manipulator::Manipulator;

/// Print the position of the link end.
pub fn dump_position(id: LinkId, position: &Position) {
    println!("{}", format_position(id, position));
}

/// Print positions of all links on the chain, root first.
pub fn dump_chain(positions: &[(LinkId, Position)]) {
    if positions.is_empty() {
        println!("Empty chain (base)");
    }
    for (id, position) in positions {
        dump_position(*id, position);
    }
}

/// Print all links of the manipulator, ordered by id.
pub fn dump_structure(manipulator: &Manipulator) {
    println!("\n{}", manipulator);
}

pub(crate) fn format_position(id: LinkId, position: &Position) -> String {
    format!("link {}: x: {:.5}, y: {:.5}, z: {:.5}", id, position.x, position.y, position.z)
}

/// Allows to specify pitch, yaw and roll in degrees (converts to radians)
pub fn as_radians(degrees: [f64; 3]) -> [f64; 3] {
    degrees.map(f64::to_radians)
}
