//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ArmInputsChanged { inputs } => vec![AppCommand::ApplyArmInputs { inputs }],
        AppIntent::ResetInputsRequested => {
            // Zurückgesetzte Eingaben ändern die Reichweite → Ansicht neu einpassen
            vec![AppCommand::ResetArmInputs, AppCommand::FitViewToReach]
        }
        AppIntent::TargetDragged { world_pos } => vec![AppCommand::SetTarget {
            target: world_pos.as_dvec2(),
        }],
        AppIntent::FitViewRequested => vec![AppCommand::FitViewToReach],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        AppIntent::ShowOptionsRequested => vec![AppCommand::ShowOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ArmInputs;

    #[test]
    fn inputs_changed_maps_to_apply_inputs() {
        let state = AppState::new();
        let inputs = ArmInputs::default();

        let commands = map_intent_to_commands(&state, AppIntent::ArmInputsChanged { inputs });

        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], AppCommand::ApplyArmInputs { .. }));
    }

    #[test]
    fn reset_inputs_also_refits_view() {
        let state = AppState::new();

        let commands = map_intent_to_commands(&state, AppIntent::ResetInputsRequested);

        assert!(matches!(commands[0], AppCommand::ResetArmInputs));
        assert!(matches!(commands[1], AppCommand::FitViewToReach));
    }

    #[test]
    fn target_drag_converts_to_f64_world_position() {
        let state = AppState::new();

        let commands = map_intent_to_commands(
            &state,
            AppIntent::TargetDragged {
                world_pos: glam::Vec2::new(1.5, -2.0),
            },
        );

        match &commands[0] {
            AppCommand::SetTarget { target } => {
                assert!((target.x - 1.5).abs() < 1e-6);
                assert!((target.y + 2.0).abs() < 1e-6);
            }
            other => panic!("Unerwarteter Command: {other:?}"),
        }
    }

    #[test]
    fn exit_maps_to_request_exit() {
        let state = AppState::new();

        let commands = map_intent_to_commands(&state, AppIntent::ExitRequested);

        assert!(matches!(commands[0], AppCommand::RequestExit));
    }
}
