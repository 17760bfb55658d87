//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::StudioOptions;
use crate::core::{ArmInputs, ArmPose, Camera2D, IkError};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Eingabe-Schnappschuss (Ziel + Gliedlängen) dieses Frames
    pub inputs: ArmInputs,
    /// Ergebnis des letzten Solver-Laufs
    pub solution: Result<ArmPose, IkError>,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: StudioOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine gültige Armkonfiguration vorliegt.
    pub fn is_solved(&self) -> bool {
        self.solution.is_ok()
    }
}
