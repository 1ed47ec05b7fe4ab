use thiserror::Error;

use crate::domain::{Axis, Dimensions, LogicalIndex};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("dimension {axis} must be a positive integer, got {value}")]
    NonPositiveDimension { axis: Axis, value: i64 },
    #[error("a {i}x{j}x{k} grid has {cells} cells, more than a region id can address")]
    GridTooLarge { i: u32, j: u32, k: u32, cells: u128 },
    #[error("selection {index} lies outside the {dims} result grid")]
    SelectionOutOfBounds {
        index: LogicalIndex,
        dims: Dimensions,
    },
}
