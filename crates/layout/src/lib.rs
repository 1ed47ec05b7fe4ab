//! Scene layout for the matrix multiplication visualizer.
//!
//! Everything here is a pure function of the [`Dimensions`] and the current
//! [`SelectionState`]: the same inputs always produce the same frame, and only the
//! highlight classes depend on the selection.

pub mod geometry;
pub mod highlight;
pub mod labels;

use shared::{
    domain::{Dimensions, LogicalIndex, RegionId, SelectionState, Zone},
    error::LayoutError,
    protocol::{Cuboid, PickRegion, PickRegistry, RenderFrame},
};

/// Row-major id of the pick region for one result cell.
pub fn region_id(dims: Dimensions, index: LogicalIndex) -> RegionId {
    RegionId(index.i * dims.cols() + index.k)
}

pub fn check_selection(dims: Dimensions, selection: &SelectionState) -> Result<(), LayoutError> {
    match selection.selected() {
        Some(index) if !dims.contains(index) => {
            Err(LayoutError::SelectionOutOfBounds { index, dims })
        }
        _ => Ok(()),
    }
}

/// All cuboids of one frame: core, then A, then B, then C.
pub fn build_cuboids(dims: Dimensions, selection: &SelectionState) -> Vec<Cuboid> {
    let (rows, inner, cols) = (dims.rows(), dims.inner(), dims.cols());
    let total = rows * inner * cols + rows * inner + inner * cols + rows * cols;
    let mut cuboids = Vec::with_capacity(total as usize);

    for i in 0..rows {
        for k in 0..cols {
            let fiber = highlight::core(selection, i, k);
            for j in 0..inner {
                cuboids.push(Cuboid {
                    zone: Zone::Core,
                    i: Some(i),
                    j: Some(j),
                    k: Some(k),
                    origin: geometry::core_origin(i, j, k),
                    extents: geometry::CORE_EXTENTS,
                    highlight: fiber,
                });
            }
        }
    }

    for i in 0..rows {
        let row = highlight::matrix_a(selection, i);
        for j in 0..inner {
            cuboids.push(Cuboid {
                zone: Zone::MatrixA,
                i: Some(i),
                j: Some(j),
                k: None,
                origin: geometry::a_origin(i, j),
                extents: geometry::A_EXTENTS,
                highlight: row,
            });
        }
    }

    for k in 0..cols {
        let column = highlight::matrix_b(selection, k);
        for j in 0..inner {
            cuboids.push(Cuboid {
                zone: Zone::MatrixB,
                i: None,
                j: Some(j),
                k: Some(k),
                origin: geometry::b_origin(dims, j, k),
                extents: geometry::B_EXTENTS,
                highlight: column,
            });
        }
    }

    for index in dims.result_cells() {
        cuboids.push(Cuboid {
            zone: Zone::MatrixC,
            i: Some(index.i),
            j: None,
            k: Some(index.k),
            origin: geometry::c_origin(dims, index.i, index.k),
            extents: geometry::C_EXTENTS,
            highlight: highlight::matrix_c(selection, index.i, index.k),
        });
    }

    cuboids
}

/// One pick region per result cell; nothing outside the C layer is pickable.
pub fn build_pick_registry(dims: Dimensions) -> PickRegistry {
    let regions = dims
        .result_cells()
        .map(|index| PickRegion {
            id: region_id(dims, index),
            index,
            anchor: geometry::pick_anchor(dims, index.i, index.k),
        })
        .collect();
    PickRegistry::from_regions(regions)
}

pub fn build_frame(dims: Dimensions, selection: &SelectionState) -> Result<RenderFrame, LayoutError> {
    check_selection(dims, selection)?;

    let cuboids = build_cuboids(dims, selection);
    let mut annotations = labels::cell_labels(dims, selection);
    annotations.extend(labels::axis_captions(dims));

    tracing::trace!(
        dims = %dims,
        cuboids = cuboids.len(),
        selection = ?selection,
        "built scene frame"
    );

    Ok(RenderFrame {
        dims,
        selection: *selection,
        title: labels::title(dims),
        subtitle: labels::SUBTITLE.to_string(),
        cuboids,
        pick_registry: build_pick_registry(dims),
        labels: annotations,
        bounds: geometry::scene_bounds(dims),
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
