//! Painter-based drawing of a [`RenderFrame`]: back-to-front faces, then labels.

use eframe::egui;
use selection::SceneRenderer;
use shared::protocol::{LabelEmphasis, LabelKind, RenderFrame, Vec3};

use crate::ui::camera::Projection;
use crate::ui::theme::ScenePalette;

/// Outward normal and corner indices (see `Cuboid::corners`) of each box face.
const FACES: [(Vec3, [usize; 4]); 6] = [
    (Vec3::new(-1.0, 0.0, 0.0), [0, 2, 6, 4]),
    (Vec3::new(1.0, 0.0, 0.0), [1, 3, 7, 5]),
    (Vec3::new(0.0, -1.0, 0.0), [0, 1, 5, 4]),
    (Vec3::new(0.0, 1.0, 0.0), [2, 3, 7, 6]),
    (Vec3::new(0.0, 0.0, -1.0), [0, 1, 3, 2]),
    (Vec3::new(0.0, 0.0, 1.0), [4, 5, 7, 6]),
];

/// Latest frame handed over by the selection controller.
#[derive(Debug, Default)]
pub struct FrameSlot {
    frame: Option<RenderFrame>,
}

impl FrameSlot {
    pub fn frame(&self) -> Option<&RenderFrame> {
        self.frame.as_ref()
    }
}

impl SceneRenderer for FrameSlot {
    fn draw_frame(&mut self, frame: &RenderFrame) {
        self.frame = Some(frame.clone());
    }
}

struct Face {
    depth: f32,
    points: Vec<egui::Pos2>,
    fill: egui::Color32,
    edge: egui::Stroke,
}

pub fn paint_frame(
    painter: &egui::Painter,
    frame: &RenderFrame,
    projection: &Projection,
    palette: &ScenePalette,
) {
    let mut faces = Vec::with_capacity(frame.cuboids.len() * 3);
    for cuboid in &frame.cuboids {
        let style = palette.cuboid(cuboid.zone, cuboid.highlight);
        let corners = cuboid.corners();
        for (normal, indices) in FACES {
            if !projection.faces_viewer(normal) {
                continue;
            }
            let world = indices.map(|i| corners[i]);
            let center = Vec3::new(
                world.iter().map(|p| p.x).sum::<f32>() / 4.0,
                world.iter().map(|p| p.y).sum::<f32>() / 4.0,
                world.iter().map(|p| p.z).sum::<f32>() / 4.0,
            );
            faces.push(Face {
                depth: projection.depth(center),
                points: clockwise(world.iter().map(|p| projection.project(*p)).collect()),
                fill: style.fill,
                edge: style.edge,
            });
        }
    }

    faces.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    for face in faces {
        painter.add(egui::Shape::convex_polygon(face.points, face.fill, face.edge));
    }

    for label in &frame.labels {
        let (color, size) = match label.kind {
            LabelKind::AxisCaption(axis) => (palette.caption(axis), 13.0),
            LabelKind::Cell(_) if label.emphasis == LabelEmphasis::Strong => {
                (palette.label(label.emphasis), 13.0)
            }
            LabelKind::Cell(_) => (palette.label(label.emphasis), 11.0),
        };
        painter.text(
            projection.project(label.anchor),
            egui::Align2::CENTER_CENTER,
            &label.text,
            egui::FontId::proportional(size),
            color,
        );
    }
}

/// Screen space has y pointing down, so a positive shoelace sum is clockwise.
fn clockwise(mut points: Vec<egui::Pos2>) -> Vec<egui::Pos2> {
    let area: f32 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    if area < 0.0 {
        points.reverse();
    }
    points
}
