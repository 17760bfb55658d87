//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.
//!
//! Intents sind Eingaben aus UI/System ohne direkte Mutationslogik;
//! Commands sind die daraus abgeleiteten mutierenden Operationen.

use crate::core::ArmInputs;
use crate::shared::StudioOptions;

/// Eingaben aus UI und System.
///
/// Slider-Änderungen laufen als ein einziger `ArmInputsChanged`-Intent
/// mit komplettem Eingabe-Schnappschuss, nicht als vier Einzel-Callbacks.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Slider-Eingaben haben sich geändert (kompletter Schnappschuss)
    ArmInputsChanged { inputs: ArmInputs },
    /// Eingaben auf die Standardwerte zurücksetzen
    ResetInputsRequested,
    /// Ziel per Klick/Drag im Viewport gesetzt
    TargetDragged { world_pos: glam::Vec2 },
    /// Ansicht auf die Arm-Reichweite einpassen
    FitViewRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Options-Dialog öffnen
    ShowOptionsRequested,
    /// Options-Dialog schließen (persistiert die Optionen)
    CloseOptionsDialogRequested,
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Optionen wurden im Dialog geändert (Live-Preview)
    OptionsChanged { options: Box<StudioOptions> },
    /// Anwendung beenden
    ExitRequested,
}

/// Mutierende Commands auf dem AppState.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Eingabe-Schnappschuss übernehmen und neu lösen
    ApplyArmInputs { inputs: ArmInputs },
    /// Nur die Zielposition setzen und neu lösen
    SetTarget { target: glam::DVec2 },
    /// Eingaben auf Standardwerte zurücksetzen
    ResetArmInputs,
    /// Ansicht auf die aktuelle Arm-Reichweite einpassen
    FitViewToReach,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen (optional fokus-stabil)
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Options-Dialog öffnen
    ShowOptionsDialog,
    /// Options-Dialog schließen und Optionen speichern
    CloseOptionsDialog,
    /// Optionen übernehmen (Live-Preview)
    ApplyOptions { options: Box<StudioOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Anwendung kontrolliert beenden
    RequestExit,
}
