//! Colour table for the scene: two tiers per zone plus label and caption colours.

use eframe::egui;
use shared::domain::{Axis, HighlightClass, Zone};
use shared::protocol::LabelEmphasis;

fn rgba(r: f32, g: f32, b: f32, a: f32) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(channel(r), channel(g), channel(b), channel(a))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuboidStyle {
    pub fill: egui::Color32,
    pub edge: egui::Stroke,
}

#[derive(Debug, Clone, Copy)]
pub struct ScenePalette {
    pub glass: egui::Color32,
    pub glass_edge: egui::Color32,
    pub matrix_off: egui::Color32,
    pub core_active: egui::Color32,
    pub input_active: egui::Color32,
    pub result_active: egui::Color32,
    pub edge: egui::Color32,
    pub background: egui::Color32,
}

impl Default for ScenePalette {
    fn default() -> Self {
        Self {
            glass: rgba(0.85, 0.85, 0.85, 0.08),
            glass_edge: rgba(0.6, 0.6, 0.6, 0.1),
            matrix_off: rgba(0.7, 0.7, 0.7, 0.15),
            core_active: rgba(1.0, 0.2, 0.2, 1.0),
            input_active: rgba(0.0, 0.8, 0.2, 1.0),
            result_active: rgba(0.0, 0.4, 1.0, 1.0),
            edge: egui::Color32::BLACK,
            background: egui::Color32::WHITE,
        }
    }
}

impl ScenePalette {
    pub fn cuboid(&self, zone: Zone, highlight: HighlightClass) -> CuboidStyle {
        let solid_edge = egui::Stroke::new(0.7, self.edge);
        match (zone, highlight) {
            (Zone::Core, HighlightClass::Active) => CuboidStyle {
                fill: self.core_active,
                edge: solid_edge,
            },
            (Zone::Core, HighlightClass::Inactive) => CuboidStyle {
                fill: self.glass,
                edge: egui::Stroke::new(0.3, self.glass_edge),
            },
            (Zone::MatrixA | Zone::MatrixB, HighlightClass::Active) => CuboidStyle {
                fill: self.input_active,
                edge: solid_edge,
            },
            (Zone::MatrixC, HighlightClass::Active) => CuboidStyle {
                fill: self.result_active,
                edge: solid_edge,
            },
            (_, HighlightClass::Inactive) => CuboidStyle {
                fill: self.matrix_off,
                edge: solid_edge,
            },
        }
    }

    pub fn label(&self, emphasis: LabelEmphasis) -> egui::Color32 {
        match emphasis {
            LabelEmphasis::Normal => egui::Color32::BLACK,
            LabelEmphasis::Dimmed => rgba(0.0, 0.0, 0.0, 0.3),
            LabelEmphasis::Strong => egui::Color32::WHITE,
        }
    }

    pub fn caption(&self, axis: Axis) -> egui::Color32 {
        match axis {
            Axis::I => egui::Color32::from_rgb(0, 128, 0),
            Axis::K => egui::Color32::from_rgb(128, 0, 128),
            Axis::J => egui::Color32::RED,
        }
    }
}
