//! Painter-basierter Renderer für die Arm-Szene.
//!
//! Zeichnet Raster, Kreisring-Grenzen, die zwei Armglieder und die
//! Gelenkmarker direkt über den egui-Painter. Für zwei Liniensegmente
//! braucht es keine eigene GPU-Pipeline.

use crate::core::IkError;
use crate::shared::RenderScene;
use glam::{DVec2, Vec2};

/// Mindest-Pixelabstand, unter dem das 1-Einheiten-Raster ausgeblendet wird.
const GRID_MIN_SPACING_PX: f32 = 8.0;

/// Zeichnet die komplette Szene in den Viewport `rect`.
pub fn draw_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(18));

    if scene.options.show_grid {
        draw_grid(painter, rect, scene);
    }
    if scene.options.show_reach_bounds {
        draw_reach_bounds(painter, rect, scene);
    }

    match &scene.solution {
        Ok(pose) => draw_arm(painter, rect, scene, pose),
        Err(error) => draw_no_solution(painter, rect, scene, *error),
    }
}

/// Hintergrund-Raster mit 1-Welteinheit-Abstand plus Achsen durch den Ursprung.
fn draw_grid(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let size = Vec2::new(rect.width(), rect.height());
    let camera = &scene.camera;

    let px_per_unit = 1.0 / camera.world_per_pixel(size.y);
    let grid_color = rgba_to_color32(scene.options.grid_color);
    let axis_color = egui::Color32::from_gray(90);

    // Sichtbare Welt-Grenzen aus den Viewport-Ecken
    let top_left = camera.screen_to_world(Vec2::ZERO, size);
    let bottom_right = camera.screen_to_world(size, size);

    if px_per_unit >= GRID_MIN_SPACING_PX {
        let x_start = top_left.x.floor() as i32;
        let x_end = bottom_right.x.ceil() as i32;
        for x in x_start..=x_end {
            let color = if x == 0 { axis_color } else { grid_color };
            let sx = to_screen(camera, rect, DVec2::new(f64::from(x), 0.0)).x;
            painter.line_segment(
                [egui::pos2(sx, rect.top()), egui::pos2(sx, rect.bottom())],
                egui::Stroke::new(1.0, color),
            );
        }

        let y_start = bottom_right.y.floor() as i32;
        let y_end = top_left.y.ceil() as i32;
        for y in y_start..=y_end {
            let color = if y == 0 { axis_color } else { grid_color };
            let sy = to_screen(camera, rect, DVec2::new(0.0, f64::from(y))).y;
            painter.line_segment(
                [egui::pos2(rect.left(), sy), egui::pos2(rect.right(), sy)],
                egui::Stroke::new(1.0, color),
            );
        }
    }
}

/// Äußere und innere Grenze des erreichbaren Kreisrings.
fn draw_reach_bounds(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let size = Vec2::new(rect.width(), rect.height());
    let camera = &scene.camera;
    let px_per_unit = 1.0 / camera.world_per_pixel(size.y);

    let origin = to_screen(camera, rect, DVec2::ZERO);
    let stroke = egui::Stroke::new(1.0, rgba_to_color32(scene.options.reach_color));

    let outer = scene.inputs.links.max_reach() as f32 * px_per_unit;
    painter.circle_stroke(origin, outer, stroke);

    let inner = scene.inputs.links.min_reach() as f32 * px_per_unit;
    if inner > 0.5 {
        painter.circle_stroke(origin, inner, stroke);
    }
}

/// Zeichnet die gelöste Armkonfiguration: Glieder, Gelenke, Winkel-Label.
fn draw_arm(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &RenderScene,
    pose: &crate::core::ArmPose,
) {
    let camera = &scene.camera;
    let opts = &scene.options;

    let shoulder = to_screen(camera, rect, DVec2::ZERO);
    let elbow = to_screen(camera, rect, pose.elbow);
    let effector = to_screen(camera, rect, pose.effector);

    let link_stroke = egui::Stroke::new(opts.link_thickness_px, rgba_to_color32(opts.link_color));
    painter.line_segment([shoulder, elbow], link_stroke);
    painter.line_segment([elbow, effector], link_stroke);

    let joint_color = rgba_to_color32(opts.joint_color);
    painter.circle_filled(shoulder, opts.joint_radius_px, joint_color);
    painter.circle_filled(elbow, opts.joint_radius_px, joint_color);
    painter.circle_filled(
        effector,
        opts.effector_radius_px,
        rgba_to_color32(opts.effector_color),
    );

    if opts.show_angle_labels {
        painter.text(
            effector + egui::vec2(10.0, -10.0),
            egui::Align2::LEFT_BOTTOM,
            format!(
                "θ1: {:.2}°\nθ2: {:.2}°",
                pose.angles.theta1_deg, pose.angles.theta2_deg
            ),
            egui::FontId::proportional(13.0),
            egui::Color32::from_gray(220),
        );
    }
}

/// Zeichnet Ziel-Kreuz und Meldung, wenn keine Lösung existiert.
fn draw_no_solution(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &RenderScene,
    error: IkError,
) {
    let target = to_screen(&scene.camera, rect, scene.inputs.target);
    let color = rgba_to_color32(scene.options.target_color);
    let stroke = egui::Stroke::new(2.0, color);
    let r = 8.0;

    painter.line_segment(
        [target + egui::vec2(-r, -r), target + egui::vec2(r, r)],
        stroke,
    );
    painter.line_segment(
        [target + egui::vec2(-r, r), target + egui::vec2(r, -r)],
        stroke,
    );

    let message = match error {
        IkError::UnreachableTarget => "No solution possible\nfor the given x, y",
        IkError::InvalidLinkLengths => "Link lengths must be\npositive and finite",
    };
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        message,
        egui::FontId::proportional(18.0),
        color,
    );
}

/// Welt-Koordinate → absolute Screen-Position im Viewport.
fn to_screen(camera: &crate::core::Camera2D, rect: egui::Rect, world: DVec2) -> egui::Pos2 {
    let size = Vec2::new(rect.width(), rect.height());
    let local = camera.world_to_screen(world.as_vec2(), size);
    egui::pos2(rect.left() + local.x, rect.top() + local.y)
}

/// Konvertiert eine RGBA-Farbe aus den Optionen in `Color32`.
fn rgba_to_color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0).round() as u8,
        (rgba[1] * 255.0).round() as u8,
        (rgba[2] * 255.0).round() as u8,
        (rgba[3] * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_conversion() {
        assert_eq!(
            rgba_to_color32([1.0, 0.0, 0.0, 1.0]),
            egui::Color32::from_rgba_unmultiplied(255, 0, 0, 255)
        );
        assert_eq!(
            rgba_to_color32([0.0, 0.5, 1.0, 0.4]),
            egui::Color32::from_rgba_unmultiplied(0, 128, 255, 102)
        );
    }
}
