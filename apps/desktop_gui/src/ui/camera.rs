//! Orthographic orbit camera and screen-space hit-testing.

use eframe::egui;
use nalgebra::Vector3;
use shared::domain::RegionId;
use shared::protocol::{PickRegistry, SceneBounds, Vec3};

fn v(p: Vec3) -> Vector3<f32> {
    Vector3::new(p.x, p.y, p.z)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub elevation_deg: f32,
    pub azimuth_deg: f32,
    pub zoom: f32,
}

impl OrbitCamera {
    pub fn new(elevation_deg: f32, azimuth_deg: f32) -> Self {
        Self {
            elevation_deg,
            azimuth_deg,
            zoom: 1.0,
        }
    }

    /// Horizontal drag spins around the vertical axis, vertical drag tilts.
    pub fn drag(&mut self, delta: egui::Vec2) {
        self.azimuth_deg = (self.azimuth_deg - delta.x * 0.4).rem_euclid(360.0);
        self.elevation_deg = (self.elevation_deg + delta.y * 0.4).clamp(-89.0, 89.0);
    }

    pub fn scroll(&mut self, delta: f32) {
        self.zoom = (self.zoom * (1.0 + delta * 0.001)).clamp(0.2, 8.0);
    }

    /// Screen basis in world space: (right, up, toward the viewer).
    fn basis(&self) -> (Vector3<f32>, Vector3<f32>, Vector3<f32>) {
        let (se, ce) = self.elevation_deg.to_radians().sin_cos();
        let (sa, ca) = self.azimuth_deg.to_radians().sin_cos();
        let eye = Vector3::new(ce * ca, ce * sa, se);
        let right = Vector3::new(-sa, ca, 0.0);
        let up = eye.cross(&right);
        (right, up, eye)
    }

    /// Fits `bounds` into `viewport` at the current zoom.
    pub fn projection(&self, bounds: &SceneBounds, viewport: egui::Rect) -> Projection {
        let (right, up, eye) = self.basis();
        let extent = bounds.diagonal().max(1.0);
        Projection {
            right,
            up,
            eye,
            target: v(bounds.center()),
            scale: viewport.width().min(viewport.height()) / extent * self.zoom,
            screen_center: viewport.center(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Projection {
    right: Vector3<f32>,
    up: Vector3<f32>,
    eye: Vector3<f32>,
    target: Vector3<f32>,
    scale: f32,
    screen_center: egui::Pos2,
}

impl Projection {
    pub fn project(&self, p: Vec3) -> egui::Pos2 {
        let rel = v(p) - self.target;
        self.screen_center + egui::vec2(rel.dot(&self.right), -rel.dot(&self.up)) * self.scale
    }

    /// Larger is closer to the viewer.
    pub fn depth(&self, p: Vec3) -> f32 {
        (v(p) - self.target).dot(&self.eye)
    }

    pub fn faces_viewer(&self, normal: Vec3) -> bool {
        v(normal).dot(&self.eye) > 0.0
    }
}

/// Nearest pick region whose projected anchor lies within `radius` of `pointer`.
/// Ties keep the lower region id.
pub fn hit_test(
    projection: &Projection,
    registry: &PickRegistry,
    pointer: egui::Pos2,
    radius: f32,
) -> Option<RegionId> {
    let mut best: Option<(f32, RegionId)> = None;
    for region in registry.iter() {
        let distance = projection.project(region.anchor).distance(pointer);
        if distance > radius {
            continue;
        }
        if best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, region.id));
        }
    }
    best.map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use shared::domain::{Dimensions, LogicalIndex, SelectionState};

    use super::*;

    fn viewport() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn top_down_view_keeps_x_right_and_y_up() {
        let camera = OrbitCamera::new(89.0, -90.0);
        let bounds = SceneBounds {
            min: Vec3::new(-1.0, -1.0, 0.0),
            max: Vec3::new(1.0, 1.0, 1.0),
        };
        let projection = camera.projection(&bounds, viewport());
        let origin = projection.project(Vec3::new(0.0, 0.0, 0.5));
        let plus_x = projection.project(Vec3::new(1.0, 0.0, 0.5));
        let plus_y = projection.project(Vec3::new(0.0, 1.0, 0.5));
        assert!(plus_x.x > origin.x);
        assert!(plus_y.y < origin.y);
        assert!(projection.faces_viewer(Vec3::new(0.0, 0.0, 1.0)));
        assert!(!projection.faces_viewer(Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn points_toward_the_eye_are_closer() {
        let camera = OrbitCamera::new(25.0, -60.0);
        let bounds = SceneBounds {
            min: Vec3::new(0.0, 0.0, 0.0),
            max: Vec3::new(2.0, 2.0, 2.0),
        };
        let projection = camera.projection(&bounds, viewport());
        assert!(projection.depth(Vec3::new(1.0, 1.0, 2.0)) > projection.depth(Vec3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn hit_test_resolves_each_anchor_and_ignores_empty_space() {
        let dims = Dimensions::new(2, 2, 2).expect("dims");
        let frame = layout::build_frame(dims, &SelectionState::Idle).expect("frame");
        let projection = OrbitCamera::new(25.0, -60.0).projection(&frame.bounds, viewport());

        for region in frame.pick_registry.iter() {
            let at = projection.project(region.anchor);
            assert_eq!(
                hit_test(&projection, &frame.pick_registry, at, 16.0),
                Some(region.id)
            );
        }

        let far = egui::pos2(-500.0, -500.0);
        assert_eq!(hit_test(&projection, &frame.pick_registry, far, 16.0), None);
        assert_eq!(
            frame
                .pick_registry
                .resolve(layout::region_id(dims, LogicalIndex::new(1, 1))),
            Some(LogicalIndex::new(1, 1))
        );
    }

    #[test]
    fn drag_clamps_elevation() {
        let mut camera = OrbitCamera::new(25.0, -60.0);
        camera.drag(egui::vec2(0.0, 1000.0));
        assert_eq!(camera.elevation_deg, 89.0);
        camera.scroll(1.0e6);
        assert_eq!(camera.zoom, 8.0);
    }
}
