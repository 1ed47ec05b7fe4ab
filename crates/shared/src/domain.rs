use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u32);
    };
}

id_newtype!(RegionId);

/// Sizes of the multiplication `C(I x K) = A(I x J) * B(J x K)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions")]
pub struct Dimensions {
    i: u32,
    j: u32,
    k: u32,
}

impl Dimensions {
    pub fn new(i: u32, j: u32, k: u32) -> Result<Self, LayoutError> {
        for (axis, value) in [(Axis::I, i), (Axis::J, j), (Axis::K, k)] {
            if value == 0 {
                return Err(LayoutError::NonPositiveDimension {
                    axis,
                    value: i64::from(value),
                });
            }
        }
        let (wi, wj, wk) = (u128::from(i), u128::from(j), u128::from(k));
        let cells = wi * wj * wk + wi * wj + wj * wk + wi * wk;
        if cells > u128::from(u32::MAX) {
            return Err(LayoutError::GridTooLarge { i, j, k, cells });
        }
        Ok(Self { i, j, k })
    }

    /// Signed entry point for values read from users; rejects anything below one.
    pub fn from_signed(i: i64, j: i64, k: i64) -> Result<Self, LayoutError> {
        let checked = |axis: Axis, value: i64| {
            u32::try_from(value)
                .ok()
                .filter(|v| *v > 0)
                .ok_or(LayoutError::NonPositiveDimension { axis, value })
        };
        Self::new(checked(Axis::I, i)?, checked(Axis::J, j)?, checked(Axis::K, k)?)
    }

    /// Rows of A and C.
    pub fn rows(&self) -> u32 {
        self.i
    }

    /// Shared summation length: columns of A, rows of B.
    pub fn inner(&self) -> u32 {
        self.j
    }

    /// Columns of B and C.
    pub fn cols(&self) -> u32 {
        self.k
    }

    pub fn largest(&self) -> u32 {
        self.i.max(self.j).max(self.k)
    }

    pub fn contains(&self, index: LogicalIndex) -> bool {
        index.i < self.i && index.k < self.k
    }

    /// Result cells in row-major order.
    pub fn result_cells(&self) -> impl Iterator<Item = LogicalIndex> + '_ {
        (0..self.i).flat_map(move |i| (0..self.k).map(move |k| LogicalIndex { i, k }))
    }
}

#[derive(Deserialize)]
struct RawDimensions {
    i: u32,
    j: u32,
    k: u32,
}

impl TryFrom<RawDimensions> for Dimensions {
    type Error = LayoutError;

    fn try_from(raw: RawDimensions) -> Result<Self, Self::Error> {
        Self::new(raw.i, raw.j, raw.k)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.i, self.j, self.k)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    I,
    J,
    K,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::I => "I",
            Axis::J => "J",
            Axis::K => "K",
        };
        f.write_str(name)
    }
}

/// One result cell `C[i,k]`, and with it row `i` of A, column `k` of B and one fiber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LogicalIndex {
    pub i: u32,
    pub k: u32,
}

impl LogicalIndex {
    pub fn new(i: u32, k: u32) -> Self {
        Self { i, k }
    }
}

impl fmt::Display for LogicalIndex {
    /// One-based, the way cells are labelled on screen.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{},{}", self.i + 1, self.k + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Core,
    MatrixA,
    MatrixB,
    MatrixC,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Core, Zone::MatrixA, Zone::MatrixB, Zone::MatrixC];

    pub fn label(self) -> &'static str {
        match self {
            Zone::Core => "core",
            Zone::MatrixA => "A",
            Zone::MatrixB => "B",
            Zone::MatrixC => "C",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightClass {
    Active,
    Inactive,
}

impl HighlightClass {
    pub fn from_active(active: bool) -> Self {
        if active {
            HighlightClass::Active
        } else {
            HighlightClass::Inactive
        }
    }

    pub fn is_active(self) -> bool {
        self == HighlightClass::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "index", rename_all = "snake_case")]
pub enum SelectionState {
    #[default]
    Idle,
    Focused(LogicalIndex),
}

impl SelectionState {
    pub fn selected(&self) -> Option<LogicalIndex> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Focused(index) => Some(*index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimension() {
        let err = Dimensions::new(2, 0, 3).expect_err("zero inner");
        assert_eq!(
            err,
            LayoutError::NonPositiveDimension {
                axis: Axis::J,
                value: 0
            }
        );
    }

    #[test]
    fn rejects_negative_signed_dimension() {
        let err = Dimensions::from_signed(2, 2, -4).expect_err("negative cols");
        assert_eq!(
            err,
            LayoutError::NonPositiveDimension {
                axis: Axis::K,
                value: -4
            }
        );
    }

    #[test]
    fn rejects_grids_whose_cells_overflow_region_ids() {
        let err = Dimensions::new(70_000, 1, 70_000).expect_err("too many cells");
        assert!(matches!(err, LayoutError::GridTooLarge { cells, .. } if cells > u128::from(u32::MAX)));
        assert!(Dimensions::new(u32::MAX, u32::MAX, u32::MAX).is_err());
        assert!(Dimensions::new(40_000, 1, 40_000).is_ok());
    }

    #[test]
    fn deserializing_validates_dimensions() {
        let err = serde_json::from_str::<Dimensions>(r#"{"i":0,"j":0,"k":0}"#)
            .expect_err("zero dimensions");
        assert!(err.to_string().contains("must be a positive integer"));

        let dims: Dimensions = serde_json::from_str(r#"{"i":2,"j":3,"k":4}"#).expect("dims");
        assert_eq!(dims, Dimensions::new(2, 3, 4).expect("dims"));
        assert_eq!(serde_json::to_value(dims).expect("serialize")["j"], 3);
    }

    #[test]
    fn result_cells_are_row_major() {
        let dims = Dimensions::new(2, 5, 3).expect("dims");
        let cells: Vec<_> = dims.result_cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], LogicalIndex::new(0, 0));
        assert_eq!(cells[1], LogicalIndex::new(0, 1));
        assert_eq!(cells[3], LogicalIndex::new(1, 0));
    }

    #[test]
    fn logical_index_displays_one_based() {
        assert_eq!(LogicalIndex::new(1, 0).to_string(), "C2,1");
    }

    #[test]
    fn selection_state_serializes_tagged() {
        let focused = SelectionState::Focused(LogicalIndex::new(1, 2));
        let json = serde_json::to_value(focused).expect("serialize");
        assert_eq!(json["state"], "focused");
        assert_eq!(json["index"]["i"], 1);
        assert_eq!(json["index"]["k"], 2);
        assert_eq!(SelectionState::default().selected(), None);
    }
}
