//! Arm-Panel (rechte Seitenleiste) mit den vier Eingabe-Slidern.

use crate::app::{AppIntent, AppState};
use crate::shared::options::{LINK_LENGTH_MAX, LINK_LENGTH_MIN, TARGET_RANGE};

/// Rendert das Arm-Panel und gibt erzeugte Events zurück.
///
/// Alle vier Slider arbeiten auf einer Kopie des Eingabe-Schnappschusses;
/// jede Änderung erzeugt genau einen `ArmInputsChanged`-Intent.
pub fn render_controls_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("arm_panel")
        .default_width(240.0)
        .min_width(200.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("2R-Arm");
            ui.separator();

            let mut inputs = state.inputs;
            let mut changed = false;

            ui.label("Endeffektor-Ziel");
            changed |= ui
                .add(
                    egui::Slider::new(&mut inputs.target.x, -TARGET_RANGE..=TARGET_RANGE)
                        .text("X")
                        .fixed_decimals(2),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut inputs.target.y, -TARGET_RANGE..=TARGET_RANGE)
                        .text("Y")
                        .fixed_decimals(2),
                )
                .changed();

            ui.separator();
            ui.label("Gliedlängen");
            changed |= ui
                .add(
                    egui::Slider::new(&mut inputs.links.l1, LINK_LENGTH_MIN..=LINK_LENGTH_MAX)
                        .text("L1")
                        .fixed_decimals(2),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut inputs.links.l2, LINK_LENGTH_MIN..=LINK_LENGTH_MAX)
                        .text("L2")
                        .fixed_decimals(2),
                )
                .changed();

            if changed {
                events.push(AppIntent::ArmInputsChanged { inputs });
            }

            ui.separator();
            render_solution_info(ui, state);

            ui.separator();
            if ui.button("Standardwerte").clicked() {
                events.push(AppIntent::ResetInputsRequested);
            }
        });

    events
}

/// Zeigt Gelenkwinkel bzw. die Fehlermeldung für die aktuelle Lösung.
fn render_solution_info(ui: &mut egui::Ui, state: &AppState) {
    ui.label("Lösung");

    match state.solved_angles() {
        Some(angles) => {
            ui.label(format!("θ1 (Schulter): {:.2}°", angles.theta1_deg));
            ui.label(format!("θ2 (Ellbogen): {:.2}°", angles.theta2_deg));
        }
        None => {
            ui.label(
                egui::RichText::new("⚠ Ziel nicht erreichbar").color(egui::Color32::YELLOW),
            );
        }
    }

    ui.add_space(4.0);
    ui.label(format!(
        "Reichweite: {:.2} – {:.2}",
        state.inputs.links.min_reach(),
        state.inputs.links.max_reach()
    ));
}
