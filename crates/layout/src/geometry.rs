//! Coordinate mapping from logical tensor indices to world space.
//!
//! World axes: x follows `i`, y follows `k`, z follows `j`, so the summation axis is
//! vertical. Every cell is 0.8 wide along its in-plane axes, leaving a 0.2 gap to the
//! next cell. Matrix slabs are 0.2 thick.

use shared::domain::Dimensions;
use shared::protocol::{SceneBounds, Vec3};

pub const CELL: f32 = 0.8;
pub const SLAB: f32 = 0.2;

/// A sits on the negative-y side of the core.
pub const OFFSET_A_Y: f32 = -1.5;

/// Lift of a pick anchor above the bottom of its C slab.
pub const PICK_LIFT: f32 = 0.5;

/// B sits past the last core column on the positive-x side.
pub fn offset_b_x(dims: Dimensions) -> f32 {
    dims.rows() as f32 + 0.5
}

/// C sits above the topmost core layer.
pub fn offset_c_z(dims: Dimensions) -> f32 {
    dims.inner() as f32 + 0.5
}

pub fn core_origin(i: u32, j: u32, k: u32) -> Vec3 {
    Vec3::new(i as f32, k as f32, j as f32)
}

pub const CORE_EXTENTS: Vec3 = Vec3::new(CELL, CELL, CELL);

pub fn a_origin(i: u32, j: u32) -> Vec3 {
    Vec3::new(i as f32, OFFSET_A_Y, j as f32)
}

pub const A_EXTENTS: Vec3 = Vec3::new(CELL, SLAB, CELL);

pub fn b_origin(dims: Dimensions, j: u32, k: u32) -> Vec3 {
    Vec3::new(offset_b_x(dims), k as f32, j as f32)
}

pub const B_EXTENTS: Vec3 = Vec3::new(SLAB, CELL, CELL);

pub fn c_origin(dims: Dimensions, i: u32, k: u32) -> Vec3 {
    Vec3::new(i as f32, k as f32, offset_c_z(dims))
}

pub const C_EXTENTS: Vec3 = Vec3::new(CELL, CELL, SLAB);

/// Centre of the C cell footprint, raised above the slab so it is never occluded by it.
pub fn pick_anchor(dims: Dimensions, i: u32, k: u32) -> Vec3 {
    Vec3::new(
        i as f32 + CELL * 0.5,
        k as f32 + CELL * 0.5,
        offset_c_z(dims) + PICK_LIFT,
    )
}

/// Viewing volume framed around the whole scene, sized by the largest dimension.
pub fn scene_bounds(dims: Dimensions) -> SceneBounds {
    let limit = dims.largest() as f32;
    SceneBounds {
        min: Vec3::new(-1.0, -2.0, 0.0),
        max: Vec3::new(limit + 1.0, limit + 1.0, limit + 2.0),
    }
}
