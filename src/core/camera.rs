//! 2D-Kamera für Pan und Zoom über der Arm-Ebene.
//!
//! Welt-Koordinaten sind mathematisch orientiert (Y nach oben),
//! Screen-Koordinaten egui-üblich (Y nach unten); die Umrechnung
//! flippt Y entsprechend.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
    /// Sichtbare Welt-Halbhöhe bei Zoom 1.0
    pub base_extent: f32,
}

impl Camera2D {
    /// Standard-Halbhöhe: Reichweite des Default-Arms (2+2) plus Rand.
    pub const DEFAULT_EXTENT: f32 = 5.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 100.0;

    /// Erstellt eine neue Kamera auf den Ursprung zentriert.
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
            base_extent: Self::DEFAULT_EXTENT,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level mit den eingebauten Grenzen.
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom_by_clamped(factor, Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Ändert den Zoom-Level mit konfigurierbaren Grenzen.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Setzt die Kamera so, dass die Welt-Halbhöhe `extent` sichtbar ist.
    /// Position und Zoom werden auf Default zurückgesetzt.
    pub fn fit_extent(&mut self, extent: f32) {
        self.position = Vec2::ZERO;
        self.zoom = 1.0;
        self.base_extent = extent.max(f32::EPSILON);
    }

    /// Pixel pro Welteinheit bei aktueller Viewport-Höhe.
    fn pixels_per_unit(&self, viewport_height: f32) -> f32 {
        self.zoom * viewport_height.max(1.0) / (2.0 * self.base_extent)
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten (relativ zum Viewport).
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let scale = self.pixels_per_unit(screen_size.y);
        let rel = world_pos - self.position;
        Vec2::new(
            screen_size.x * 0.5 + rel.x * scale,
            screen_size.y * 0.5 - rel.y * scale,
        )
    }

    /// Konvertiert Screen-Koordinaten (relativ zum Viewport) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let scale = self.pixels_per_unit(screen_size.y);
        Vec2::new(
            self.position.x + (screen_pos.x - screen_size.x * 0.5) / scale,
            self.position.y - (screen_pos.y - screen_size.y * 0.5) / scale,
        )
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f32) -> f32 {
        2.0 * self.base_extent / (self.zoom * viewport_height.max(1.0))
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_pan() {
        let mut camera = Camera2D::new();
        camera.pan(Vec2::new(10.0, 5.0));
        assert_relative_eq!(camera.position.x, 10.0);
        assert_relative_eq!(camera.position.y, 5.0);
    }

    #[test]
    fn test_camera_zoom_clamps() {
        let mut camera = Camera2D::new();
        camera.zoom_by(2.0);
        assert_relative_eq!(camera.zoom, 2.0);

        camera.zoom_by(0.0001);
        assert_relative_eq!(camera.zoom, Camera2D::ZOOM_MIN);
    }

    #[test]
    fn test_screen_center_maps_to_camera_position() {
        let mut camera = Camera2D::new();
        camera.look_at(Vec2::new(1.5, -0.5));
        let screen_size = Vec2::new(800.0, 600.0);

        let world = camera.screen_to_world(Vec2::new(400.0, 300.0), screen_size);

        assert_relative_eq!(world.x, 1.5, epsilon = 1e-5);
        assert_relative_eq!(world.y, -0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_screen_to_world_round_trip() {
        let mut camera = Camera2D::new();
        camera.zoom = 2.5;
        camera.position = Vec2::new(0.7, 1.3);
        let screen_size = Vec2::new(800.0, 600.0);
        let screen = Vec2::new(123.0, 456.0);

        let world = camera.screen_to_world(screen, screen_size);
        let back = camera.world_to_screen(world, screen_size);

        assert_relative_eq!(back.x, screen.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, screen.y, epsilon = 1e-3);
    }

    #[test]
    fn test_screen_y_axis_points_down() {
        let camera = Camera2D::new();
        let screen_size = Vec2::new(800.0, 600.0);

        // Welt-Punkt oberhalb des Ursprungs liegt auf dem Screen weiter oben
        let up = camera.world_to_screen(Vec2::new(0.0, 1.0), screen_size);
        let origin = camera.world_to_screen(Vec2::ZERO, screen_size);
        assert!(up.y < origin.y);
    }

    #[test]
    fn test_world_per_pixel_halves_with_double_zoom() {
        let mut camera = Camera2D::new();
        let wpp1 = camera.world_per_pixel(600.0);
        camera.zoom = 2.0;
        let wpp2 = camera.world_per_pixel(600.0);
        assert_relative_eq!(wpp2, wpp1 / 2.0);
    }

    #[test]
    fn test_fit_extent_resets_pose() {
        let mut camera = Camera2D::new();
        camera.pan(Vec2::new(3.0, 3.0));
        camera.zoom_by(4.0);

        camera.fit_extent(7.0);

        assert_eq!(camera.position, Vec2::ZERO);
        assert_relative_eq!(camera.zoom, 1.0);
        assert_relative_eq!(camera.base_extent, 7.0);
    }
}
