use super::*;
use approx::assert_relative_eq;

#[test]
fn test_symmetric_target_on_x_axis() {
    // D = (9 - 4 - 4) / 8 = 0.125
    let angles = solve(DVec2::new(3.0, 0.0), LinkLengths::new(2.0, 2.0)).expect("Lösung erwartet");

    assert_relative_eq!(angles.theta2_deg, 82.819_244, epsilon = 1e-4);
    assert_relative_eq!(angles.theta1_deg, -41.409_622, epsilon = 1e-4);
}

#[test]
fn test_folded_arm_at_origin() {
    // D = -1 exakt: Arm komplett zurückgefaltet
    let angles = solve(DVec2::ZERO, LinkLengths::new(2.0, 2.0)).expect("Lösung erwartet");

    assert_relative_eq!(angles.theta1_deg, 0.0);
    assert_relative_eq!(angles.theta2_deg, 180.0);
}

#[test]
fn test_fully_stretched_arm() {
    // D = +1 exakt: Ziel auf dem äußeren Rand des Kreisrings
    let angles = solve(DVec2::new(4.0, 0.0), LinkLengths::new(2.0, 2.0)).expect("Lösung erwartet");

    assert_relative_eq!(angles.theta1_deg, 0.0, epsilon = 1e-9);
    assert_relative_eq!(angles.theta2_deg, 0.0, epsilon = 1e-9);
}

#[test]
fn test_target_beyond_max_reach() {
    // D = (25 - 1 - 1) / 2 = 11.5
    let result = solve(DVec2::new(5.0, 0.0), LinkLengths::new(1.0, 1.0));

    assert_eq!(result, Err(IkError::UnreachableTarget));
}

#[test]
fn test_target_inside_inner_hole() {
    // min_reach = |2 - 1| = 1, Ziel bei Radius 0.5
    let links = LinkLengths::new(2.0, 1.0);
    assert_relative_eq!(links.min_reach(), 1.0);

    let result = solve(DVec2::new(0.5, 0.0), links);

    assert_eq!(result, Err(IkError::UnreachableTarget));
}

#[test]
fn test_forward_kinematics_round_trip() {
    let links = LinkLengths::new(2.0, 1.5);
    let targets = [
        DVec2::new(3.0, 0.5),
        DVec2::new(-1.2, 2.0),
        DVec2::new(0.0, -2.5),
        DVec2::new(1.0, 1.0),
    ];

    for target in targets {
        let angles = solve(target, links).expect("Ziel liegt im Kreisring");
        let reproduced = forward_kinematics(angles, links);

        assert_relative_eq!(reproduced.x, target.x, epsilon = 1e-9);
        assert_relative_eq!(reproduced.y, target.y, epsilon = 1e-9);
    }
}

#[test]
fn test_solver_always_picks_elbow_up_branch() {
    let links = LinkLengths::new(2.0, 2.0);

    for target in [
        DVec2::new(3.0, 0.0),
        DVec2::new(0.0, 3.0),
        DVec2::new(-2.0, -1.0),
        DVec2::new(1.5, -2.5),
    ] {
        let angles = solve(target, links).expect("Lösung erwartet");
        // Positive Wurzel in theta2 → Ellbogenwinkel immer in [0°, 180°]
        assert!((0.0..=180.0).contains(&angles.theta2_deg));
    }
}

#[test]
fn test_invalid_link_lengths_rejected() {
    let target = DVec2::new(1.0, 1.0);

    assert_eq!(
        solve(target, LinkLengths::new(0.0, 2.0)),
        Err(IkError::InvalidLinkLengths)
    );
    assert_eq!(
        solve(target, LinkLengths::new(2.0, -1.0)),
        Err(IkError::InvalidLinkLengths)
    );
    assert_eq!(
        solve(target, LinkLengths::new(f64::NAN, 2.0)),
        Err(IkError::InvalidLinkLengths)
    );
    assert_eq!(
        solve(target, LinkLengths::new(f64::INFINITY, 2.0)),
        Err(IkError::InvalidLinkLengths)
    );
}

#[test]
fn test_reach_annulus_bounds() {
    let links = LinkLengths::new(2.0, 1.0);

    assert_relative_eq!(links.max_reach(), 3.0);
    assert_relative_eq!(links.min_reach(), 1.0);
    assert!(links.is_valid());
    assert!(!LinkLengths::new(0.0, 1.0).is_valid());
}

#[test]
fn test_arm_pose_joint_positions() {
    let links = LinkLengths::new(2.0, 2.0);
    let angles = solve(DVec2::ZERO, links).expect("Lösung erwartet");
    let pose = ArmPose::from_angles(angles, links);

    // Zurückgefalteter Arm: Ellbogen bei (2, 0), Effektor wieder im Ursprung
    assert_relative_eq!(pose.elbow.x, 2.0, epsilon = 1e-9);
    assert_relative_eq!(pose.elbow.y, 0.0, epsilon = 1e-9);
    assert_relative_eq!(pose.effector.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(pose.effector.y, 0.0, epsilon = 1e-9);
}
