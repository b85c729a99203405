use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::kinematic_traits::{Kinematics, Position, BASE_ID, BASE_POSITION};
use crate::link::Link;
use crate::manipulator::Manipulator;
use crate::manipulator_error::ManipulatorError;
use crate::tests::test_utils::{are_positions_approx_equal, build_manipulator, spherical};

const SMALL: f64 = 1e-9;

fn check_xyz(positions: &[(u32, Position)], expected: &[(u32, (f64, f64, f64))]) {
    assert_eq!(positions.len(), expected.len(), "Chain length differs");
    for ((id, position), (expected_id, (x, y, z))) in positions.iter().zip(expected) {
        assert_eq!(id, expected_id);
        let expected_position = Position::new(*x, *y, *z);
        assert!(
            are_positions_approx_equal(position, &expected_position, SMALL),
            "Link {} is at {:?}, expected {:?}", id, position, expected_position
        );
    }
}

#[test]
fn test_base_link_straight_up() {
    let manipulator = build_manipulator(&[(1, 0, 1.0, 0.0, 0.0)]);
    let position = manipulator.calculate_position(1).expect("position expected");
    assert!(are_positions_approx_equal(&position, &Position::new(0.0, 0.0, 1.0), SMALL));
}

#[test]
fn test_second_link_horizontal() {
    let manipulator = build_manipulator(&[
        (1, 0, 1.0, 0.0, 0.0),
        (2, 1, 1.0, FRAC_PI_2, 0.0),
    ]);
    let positions = manipulator.forward_with_link_positions(2).expect("positions expected");
    check_xyz(&positions, &[(1, (0.0, 0.0, 1.0)), (2, (1.0, 0.0, 1.0))]);

    let tcp = manipulator.forward(2).unwrap();
    assert!(are_positions_approx_equal(&tcp, &positions[1].1, SMALL));
}

#[test]
fn test_zero_length_link_collides() {
    let manipulator = build_manipulator(&[
        (1, 0, 1.0, 0.0, 0.0),
        (2, 1, 0.0, 1.234, 0.0),
    ]);
    match manipulator.forward(2) {
        Err(ManipulatorError::Collision { id, other, distance, .. }) => {
            assert_eq!((id, other), (2, 1));
            assert!(distance < 0.1);
        }
        other => panic!("Collision expected, got {:?}", other),
    }
    // Link 1 alone is still fine
    assert!(manipulator.forward(1).is_ok());
}

#[test]
fn test_base_id_is_origin() {
    let manipulator = build_manipulator(&[(1, 0, 1.0, 0.3, 0.3)]);
    assert_eq!(manipulator.forward(BASE_ID), Ok(BASE_POSITION));
}

#[test]
fn test_chain_sum_of_displacements() {
    let links = [
        (1, 0, 0.5, FRAC_PI_4, FRAC_PI_4),
        (2, 1, 0.7, FRAC_PI_2, -FRAC_PI_4),
        (3, 2, 0.3, 2.5, 1.0),
        (4, 3, 0.9, 0.2, PI),
    ];
    let manipulator = build_manipulator(&links);

    let mut expected = Position::origin();
    let mut expected_chain = Vec::new();
    for &(id, _, r, pitch, yaw) in &links {
        expected += spherical(r, pitch, yaw).coords;
        expected_chain.push((id, (expected.x, expected.y, expected.z)));
    }

    let positions = manipulator.forward_with_link_positions(4).unwrap();
    check_xyz(&positions, &expected_chain);
    assert!(are_positions_approx_equal(&manipulator.forward(4).unwrap(), &expected, SMALL));
}

#[test]
fn test_branches_do_not_interfere() {
    // Two branches from link 1: their ends are close to each other but never on the same chain.
    let manipulator = build_manipulator(&[
        (1, 0, 1.0, 0.0, 0.0),
        (2, 1, 1.0, FRAC_PI_2, 0.0),
        (3, 1, 1.0, FRAC_PI_2, 0.01),
    ]);
    assert!(manipulator.forward(2).is_ok());
    assert!(manipulator.forward(3).is_ok());
}

#[test]
fn test_registration_order_does_not_matter() {
    let links = [
        (1, 0, 1.0, 0.4, 0.2),
        (2, 1, 0.5, 1.1, -0.3),
        (3, 2, 0.8, 2.0, 2.0),
    ];
    let forward = build_manipulator(&links);
    let mut reversed = links;
    reversed.reverse();
    let backward = build_manipulator(&reversed);
    assert_eq!(forward.forward(3), backward.forward(3));
}

#[test]
fn test_domain_violation_pitch() {
    let mut manipulator = build_manipulator(&[
        (1, 0, 1.0, 0.0, 0.0),
        (2, 1, 1.0, FRAC_PI_2, 0.0),
    ]);
    manipulator.set_direction(1, FRAC_PI_2 + 0.01, 0.0, 0.0).unwrap();
    assert!(matches!(manipulator.forward(2),
        Err(ManipulatorError::DomainViolation { id: 1, .. })));
    assert!(matches!(manipulator.forward(1),
        Err(ManipulatorError::DomainViolation { id: 1, .. })));
}

#[test]
fn test_domain_violation_yaw_regardless_of_others() {
    let mut manipulator = build_manipulator(&[
        (1, 0, 1.0, 0.5, 2.0),
        (2, 1, 1.0, 0.1, 0.1),
    ]);
    assert_eq!(
        manipulator.forward(2),
        Err(ManipulatorError::DomainViolation { id: 1, pitch: 0.5, yaw: 2.0 })
    );
    // Links other than 1 may take any angles
    manipulator.set_direction(1, 0.5, 0.5, 0.0).unwrap();
    manipulator.set_direction(2, 5.0, -7.0, 3.0).unwrap();
    assert!(manipulator.forward(2).is_ok());
}

#[test]
fn test_negative_base_angles_accepted() {
    let manipulator = build_manipulator(&[(1, 0, 1.0, -0.3, -0.2)]);
    let position = manipulator.forward(1).unwrap();
    assert!(are_positions_approx_equal(&position, &spherical(1.0, -0.3, -0.2), SMALL));
}

#[test]
fn test_incomplete_chain() {
    let manipulator = build_manipulator(&[
        (1, 0, 1.0, 0.0, 0.0),
        (3, 2, 1.0, 0.0, 0.0),
    ]);
    assert_eq!(
        manipulator.forward(3),
        Err(ManipulatorError::IncompleteChain { target: 3, stopped_at: 2 })
    );
}

#[test]
fn test_unknown_target() {
    let manipulator = build_manipulator(&[(1, 0, 1.0, 0.0, 0.0)]);
    assert_eq!(manipulator.forward(17), Err(ManipulatorError::UnknownId(17)));
}

#[test]
fn test_orientation_change_is_picked_up() {
    let mut manipulator = Manipulator::new();
    manipulator.add_link(Link::new(1, 1.0, 0)).unwrap();
    manipulator.add_link(Link::camera(2, 1.0, 1)).unwrap();
    manipulator.set_direction(2, FRAC_PI_2, 0.0, 0.0).unwrap();
    let before = manipulator.forward(2).unwrap();

    manipulator.set_direction(2, FRAC_PI_2, FRAC_PI_2, 0.0).unwrap();
    let after = manipulator.forward(2).unwrap();
    assert!(are_positions_approx_equal(&before, &Position::new(1.0, 0.0, 1.0), SMALL));
    assert!(are_positions_approx_equal(&after, &Position::new(0.0, 1.0, 1.0), SMALL));

    // Roll and camera state do not move anything
    manipulator.set_direction(2, FRAC_PI_2, FRAC_PI_2, 1.0).unwrap();
    manipulator.take_photo(2).unwrap();
    assert_eq!(manipulator.forward(2).unwrap(), after);
}
