//! Zentrale Konfiguration für das Arm2R IK Studio.
//!
//! `StudioOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Eingabebereiche ─────────────────────────────────────────────────

/// Slider-Bereich für die Zielposition: ±TARGET_RANGE auf beiden Achsen.
pub const TARGET_RANGE: f64 = 6.0;
/// Minimale Gliedlänge (0 ist mathematisch degeneriert).
pub const LINK_LENGTH_MIN: f64 = 0.01;
/// Maximale Gliedlänge.
pub const LINK_LENGTH_MAX: f64 = 6.0;

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 100.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;
/// Rand um die Arm-Reichweite beim Einpassen der Ansicht (Welteinheiten).
pub const VIEW_FIT_MARGIN: f32 = 1.0;

// ── Arm-Rendering ───────────────────────────────────────────────────

/// Linienstärke der Armglieder in Pixeln.
pub const LINK_THICKNESS_PX: f32 = 3.0;
/// Radius der Gelenkmarker (Schulter, Ellbogen) in Pixeln.
pub const JOINT_RADIUS_PX: f32 = 6.0;
/// Radius des Endeffektor-Markers in Pixeln.
pub const EFFECTOR_RADIUS_PX: f32 = 7.0;
/// Farbe der Armglieder (RGBA: Hellgrau).
pub const LINK_COLOR: [f32; 4] = [0.88, 0.88, 0.88, 1.0];
/// Farbe der Gelenkmarker (RGBA: Blau).
pub const JOINT_COLOR: [f32; 4] = [0.25, 0.55, 1.0, 1.0];
/// Farbe des Endeffektor-Markers (RGBA: Rot).
pub const EFFECTOR_COLOR: [f32; 4] = [0.9, 0.2, 0.2, 1.0];
/// Farbe des Ziel-Markers bei unerreichbarem Ziel (RGBA: Orange).
pub const TARGET_COLOR: [f32; 4] = [1.0, 0.6, 0.1, 1.0];
/// Farbe der Kreisring-Grenzen (RGBA: Grün, halbtransparent).
pub const REACH_COLOR: [f32; 4] = [0.3, 0.8, 0.5, 0.4];
/// Farbe des Hintergrund-Rasters (RGBA: Weiß, fast transparent).
pub const GRID_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.07];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Studio-Optionen.
/// Wird als `arm2r_ik_studio.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudioOptions {
    // ── Arm ─────────────────────────────────────────────────────
    /// Linienstärke der Armglieder in Pixeln
    pub link_thickness_px: f32,
    /// Farbe der Armglieder (RGBA)
    pub link_color: [f32; 4],
    /// Radius der Gelenkmarker in Pixeln
    pub joint_radius_px: f32,
    /// Farbe der Gelenkmarker
    pub joint_color: [f32; 4],
    /// Radius des Endeffektor-Markers in Pixeln
    pub effector_radius_px: f32,
    /// Farbe des Endeffektor-Markers
    pub effector_color: [f32; 4],
    /// Farbe des Ziel-Markers bei unerreichbarem Ziel
    pub target_color: [f32; 4],

    // ── Overlays ────────────────────────────────────────────────
    /// Hintergrund-Raster (1-Welteinheit-Abstand) zeichnen
    pub show_grid: bool,
    /// Grenzen des erreichbaren Kreisrings zeichnen
    pub show_reach_bounds: bool,
    /// Winkel-Beschriftung am Endeffektor zeichnen
    #[serde(default = "default_show_angle_labels")]
    pub show_angle_labels: bool,
    /// Farbe der Kreisring-Grenzen
    pub reach_color: [f32; 4],
    /// Farbe des Hintergrund-Rasters
    pub grid_color: [f32; 4],

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,
    /// Rand um die Arm-Reichweite beim Einpassen der Ansicht
    #[serde(default = "default_view_fit_margin")]
    pub view_fit_margin: f32,
}

impl Default for StudioOptions {
    fn default() -> Self {
        Self {
            link_thickness_px: LINK_THICKNESS_PX,
            link_color: LINK_COLOR,
            joint_radius_px: JOINT_RADIUS_PX,
            joint_color: JOINT_COLOR,
            effector_radius_px: EFFECTOR_RADIUS_PX,
            effector_color: EFFECTOR_COLOR,
            target_color: TARGET_COLOR,

            show_grid: true,
            show_reach_bounds: true,
            show_angle_labels: true,
            reach_color: REACH_COLOR,
            grid_color: GRID_COLOR,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            view_fit_margin: VIEW_FIT_MARGIN,
        }
    }
}

/// Serde-Default für `show_angle_labels` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_show_angle_labels() -> bool {
    true
}

/// Serde-Default für `view_fit_margin` (Abwärtskompatibilität).
fn default_view_fit_margin() -> f32 {
    VIEW_FIT_MARGIN
}

impl StudioOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("arm2r_ik_studio"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("arm2r_ik_studio.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_round_trip_through_toml() {
        let opts = StudioOptions::default();
        let toml_str = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let parsed: StudioOptions = toml::from_str(&toml_str).expect("Parsen erwartet");

        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_missing_fields_fall_back_to_serde_defaults() {
        // Ältere TOML-Dateien ohne die neueren Felder bleiben ladbar
        let opts = StudioOptions::default();
        let mut toml_str = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        toml_str = toml_str
            .lines()
            .filter(|l| !l.starts_with("show_angle_labels") && !l.starts_with("view_fit_margin"))
            .collect::<Vec<_>>()
            .join("\n");

        let parsed: StudioOptions = toml::from_str(&toml_str).expect("Parsen erwartet");
        assert!(parsed.show_angle_labels);
        assert_eq!(parsed.view_fit_margin, VIEW_FIT_MARGIN);
    }
}
