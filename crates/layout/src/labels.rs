//! Text annotations: one per matrix cell plus the three axis captions.

use shared::domain::{Axis, Dimensions, SelectionState, Zone};
use shared::protocol::{Label, LabelEmphasis, LabelKind, Vec3};

use crate::{geometry, highlight};

const HALF: f32 = geometry::CELL * 0.5;

pub fn title(dims: Dimensions) -> String {
    let (i, j, k) = (dims.rows(), dims.inner(), dims.cols());
    format!("Tensor Calculator: A({i}x{j}) \u{2022} B({j}x{k}) = C({i}x{k})")
}

pub const SUBTITLE: &str = "Click on any BLUE/GRAY block on the TOP layer";

pub fn cell_labels(dims: Dimensions, selection: &SelectionState) -> Vec<Label> {
    let mut labels = Vec::with_capacity(
        (dims.rows() * dims.inner() + dims.inner() * dims.cols() + dims.rows() * dims.cols()) as usize,
    );

    for i in 0..dims.rows() {
        let emphasis = input_emphasis(highlight::matrix_a(selection, i).is_active());
        for j in 0..dims.inner() {
            labels.push(Label {
                kind: LabelKind::Cell(Zone::MatrixA),
                text: format!("A{},{}", i + 1, j + 1),
                anchor: geometry::a_origin(i, j) + Vec3::new(HALF, -geometry::SLAB, HALF),
                emphasis,
            });
        }
    }

    for k in 0..dims.cols() {
        let emphasis = input_emphasis(highlight::matrix_b(selection, k).is_active());
        for j in 0..dims.inner() {
            labels.push(Label {
                kind: LabelKind::Cell(Zone::MatrixB),
                text: format!("B{},{}", j + 1, k + 1),
                anchor: geometry::b_origin(dims, j, k) + Vec3::new(HALF, HALF, HALF),
                emphasis,
            });
        }
    }

    for index in dims.result_cells() {
        let emphasis = if highlight::matrix_c(selection, index.i, index.k).is_active() {
            LabelEmphasis::Strong
        } else {
            LabelEmphasis::Normal
        };
        labels.push(Label {
            kind: LabelKind::Cell(Zone::MatrixC),
            text: index.to_string(),
            anchor: geometry::c_origin(dims, index.i, index.k) + Vec3::new(HALF, HALF, 0.3),
            emphasis,
        });
    }

    labels
}

pub fn axis_captions(dims: Dimensions) -> Vec<Label> {
    let caption = |axis, text: &str, anchor| Label {
        kind: LabelKind::AxisCaption(axis),
        text: text.to_string(),
        anchor,
        emphasis: LabelEmphasis::Normal,
    };
    vec![
        caption(Axis::I, "Dimension i (Rows)", Vec3::new(-1.0, -2.0, 0.0)),
        caption(
            Axis::K,
            "Dimension k (Cols)",
            Vec3::new(dims.rows() as f32 + 1.0, dims.cols() as f32 + 1.0, 0.0),
        ),
        caption(
            Axis::J,
            "Dimension j (Sum)",
            Vec3::new(-1.0, -1.0, dims.inner() as f32 / 2.0),
        ),
    ]
}

fn input_emphasis(active: bool) -> LabelEmphasis {
    if active {
        LabelEmphasis::Normal
    } else {
        LabelEmphasis::Dimmed
    }
}
