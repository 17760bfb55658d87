//! Handler für Arm-Eingaben und Solver-Läufe.

use crate::app::AppState;
use crate::core::ArmInputs;
use crate::shared::options::{LINK_LENGTH_MAX, LINK_LENGTH_MIN, TARGET_RANGE};
use glam::DVec2;

/// Übernimmt einen kompletten Eingabe-Schnappschuss und löst neu.
///
/// Werte werden auf die Slider-Bereiche geklemmt, bevor sie in den
/// State gelangen; der Solver sieht nie Eingaben außerhalb der Grenzen.
pub fn apply_inputs(state: &mut AppState, inputs: ArmInputs) {
    state.inputs = clamp_inputs(inputs);
    state.resolve();

    match state.solved_angles() {
        Some(angles) => log::debug!(
            "IK gelöst: Ziel ({:.2}, {:.2}) → θ1 = {:.2}°, θ2 = {:.2}°",
            state.inputs.target.x,
            state.inputs.target.y,
            angles.theta1_deg,
            angles.theta2_deg
        ),
        None => log::debug!(
            "IK ohne Lösung: Ziel ({:.2}, {:.2}), L1 = {:.2}, L2 = {:.2}",
            state.inputs.target.x,
            state.inputs.target.y,
            state.inputs.links.l1,
            state.inputs.links.l2
        ),
    }
}

/// Setzt nur die Zielposition (Viewport-Drag) und löst neu.
pub fn set_target(state: &mut AppState, target: DVec2) {
    let mut inputs = state.inputs;
    inputs.target = target;
    apply_inputs(state, inputs);
}

/// Setzt die Eingaben auf die Standardwerte zurück und löst neu.
pub fn reset_inputs(state: &mut AppState) {
    log::info!("Eingaben auf Standardwerte zurückgesetzt");
    apply_inputs(state, ArmInputs::default());
}

/// Klemmt alle vier Eingaben auf ihre Slider-Bereiche.
fn clamp_inputs(mut inputs: ArmInputs) -> ArmInputs {
    inputs.target.x = inputs.target.x.clamp(-TARGET_RANGE, TARGET_RANGE);
    inputs.target.y = inputs.target.y.clamp(-TARGET_RANGE, TARGET_RANGE);
    inputs.links.l1 = inputs.links.l1.clamp(LINK_LENGTH_MIN, LINK_LENGTH_MAX);
    inputs.links.l2 = inputs.links.l2.clamp(LINK_LENGTH_MIN, LINK_LENGTH_MAX);
    inputs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{IkError, LinkLengths};

    #[test]
    fn apply_inputs_updates_solution() {
        let mut state = AppState::new();
        let inputs = ArmInputs {
            target: DVec2::new(3.0, 0.0),
            links: LinkLengths::new(2.0, 2.0),
        };

        apply_inputs(&mut state, inputs);

        assert!(state.target_reachable());
        let angles = state.solved_angles().expect("Lösung erwartet");
        assert!((angles.theta2_deg - 82.82).abs() < 0.01);
    }

    #[test]
    fn apply_inputs_reports_unreachable_target() {
        let mut state = AppState::new();
        let inputs = ArmInputs {
            target: DVec2::new(5.0, 0.0),
            links: LinkLengths::new(1.0, 1.0),
        };

        apply_inputs(&mut state, inputs);

        assert_eq!(state.solution, Err(IkError::UnreachableTarget));
    }

    #[test]
    fn apply_inputs_clamps_to_slider_ranges() {
        let mut state = AppState::new();
        let inputs = ArmInputs {
            target: DVec2::new(100.0, -100.0),
            links: LinkLengths::new(0.0, 50.0),
        };

        apply_inputs(&mut state, inputs);

        assert_eq!(state.inputs.target, DVec2::new(TARGET_RANGE, -TARGET_RANGE));
        assert_eq!(state.inputs.links.l1, LINK_LENGTH_MIN);
        assert_eq!(state.inputs.links.l2, LINK_LENGTH_MAX);
        // Geklemmte Längen sind immer gültig → nie InvalidLinkLengths
        assert_ne!(state.solution, Err(IkError::InvalidLinkLengths));
    }

    #[test]
    fn set_target_keeps_link_lengths() {
        let mut state = AppState::new();
        let links_before = state.inputs.links;

        set_target(&mut state, DVec2::new(1.0, -1.0));

        assert_eq!(state.inputs.links, links_before);
        assert_eq!(state.inputs.target, DVec2::new(1.0, -1.0));
        assert!(state.target_reachable());
    }

    #[test]
    fn reset_inputs_restores_defaults() {
        let mut state = AppState::new();
        set_target(&mut state, DVec2::new(5.9, 5.9));

        reset_inputs(&mut state);

        assert_eq!(state.inputs, ArmInputs::default());
        assert!(state.target_reachable());
    }
}
