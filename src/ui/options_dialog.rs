//! Optionen-Dialog für Farben, Größen und Overlays.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(420.0)
                .show(ui, |ui| {
                    // ── Arm ─────────────────────────────────────────
                    ui.collapsing("Arm", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Glied-Breite (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.link_thickness_px)
                                        .range(0.5..=12.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Glied-Farbe:", &mut opts.link_color);
                        ui.horizontal(|ui| {
                            ui.label("Gelenk-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.joint_radius_px)
                                        .range(1.0..=20.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Gelenk-Farbe:", &mut opts.joint_color);
                        ui.horizontal(|ui| {
                            ui.label("Effektor-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.effector_radius_px)
                                        .range(1.0..=20.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Effektor-Farbe:", &mut opts.effector_color);
                        changed |= color_edit(ui, "Ziel-Farbe:", &mut opts.target_color);
                    });

                    // ── Overlays ────────────────────────────────────
                    ui.collapsing("Overlays", |ui| {
                        changed |= ui.checkbox(&mut opts.show_grid, "Raster").changed();
                        changed |= ui
                            .checkbox(&mut opts.show_reach_bounds, "Reichweiten-Grenzen")
                            .changed();
                        changed |= ui
                            .checkbox(&mut opts.show_angle_labels, "Winkel-Beschriftung")
                            .changed();
                        changed |= color_edit(ui, "Raster-Farbe:", &mut opts.grid_color);
                        changed |= color_edit(ui, "Grenzen-Farbe:", &mut opts.reach_color);
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Menü):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_zoom_step)
                                        .range(1.01..=3.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Schritt (Scroll):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_scroll_zoom_step)
                                        .range(1.01..=2.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Einpass-Rand (Welt):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.view_fit_margin)
                                        .range(0.0..=5.0)
                                        .speed(0.05),
                                )
                                .changed();
                        });
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed = ui.color_edit_button_rgba_unmultiplied(color).changed();
    });
    changed
}
