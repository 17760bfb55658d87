//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Ziel: ({:.2}, {:.2}) | L1: {:.2} | L2: {:.2}",
                state.inputs.target.x,
                state.inputs.target.y,
                state.inputs.links.l1,
                state.inputs.links.l2
            ));

            ui.separator();

            match state.solved_angles() {
                Some(angles) => {
                    ui.label(format!(
                        "θ1: {:.2}° | θ2: {:.2}°",
                        angles.theta1_deg, angles.theta2_deg
                    ));
                }
                None => {
                    ui.label(
                        egui::RichText::new("⚠ Ziel nicht erreichbar")
                            .color(egui::Color32::YELLOW),
                    );
                }
            }

            ui.separator();

            ui.label(format!("Zoom: {:.2}x", state.view.camera.zoom));

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
