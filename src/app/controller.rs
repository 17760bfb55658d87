//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Arm & Solver ===
            AppCommand::ApplyArmInputs { inputs } => handlers::arm::apply_inputs(state, inputs),
            AppCommand::SetTarget { target } => handlers::arm::set_target(state, target),
            AppCommand::ResetArmInputs => handlers::arm::reset_inputs(state),

            // === Kamera & Viewport ===
            AppCommand::FitViewToReach => handlers::view::fit_view_to_reach(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),

            // === Optionen ===
            AppCommand::ShowOptionsDialog => state.show_options_dialog = true,
            AppCommand::CloseOptionsDialog => {
                state.show_options_dialog = false;
                state.options.save_to_file(&crate::shared::StudioOptions::config_path())?;
            }
            AppCommand::ApplyOptions { options } => state.options = *options,
            AppCommand::ResetOptions => state.options = crate::shared::StudioOptions::default(),

            // === Lifecycle ===
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
