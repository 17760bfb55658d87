//! Hauptzustand der Anwendung.

use crate::app::CommandLog;
use crate::core::{solve, ArmInputs, ArmPose, Camera2D, IkError, JointAngles};
use crate::shared::StudioOptions;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelle Nutzereingaben (Ziel + Gliedlängen)
    pub inputs: ArmInputs,
    /// Ergebnis des letzten Solver-Laufs
    pub solution: Result<ArmPose, IkError>,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Breiten)
    pub options: StudioOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit gelösten Standardeingaben.
    pub fn new() -> Self {
        let inputs = ArmInputs::default();
        Self {
            inputs,
            solution: solve(inputs.target, inputs.links).map(|a| ArmPose::from_angles(a, inputs.links)),
            view: ViewState::new(),
            command_log: CommandLog::new(),
            options: StudioOptions::default(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Löst die IK für die aktuellen Eingaben neu und legt das Ergebnis ab.
    pub fn resolve(&mut self) {
        self.solution = solve(self.inputs.target, self.inputs.links)
            .map(|angles| ArmPose::from_angles(angles, self.inputs.links));
    }

    /// Gibt die gelösten Gelenkwinkel zurück (für UI-Anzeige).
    pub fn solved_angles(&self) -> Option<JointAngles> {
        self.solution.as_ref().ok().map(|pose| pose.angles)
    }

    /// Gibt zurück, ob das aktuelle Ziel erreichbar ist.
    pub fn target_reachable(&self) -> bool {
        self.solution.is_ok()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
