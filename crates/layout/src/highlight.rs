//! Active/inactive classification derived from the current selection.

use shared::domain::{HighlightClass, SelectionState};

/// Every core cell of the selected fiber lights up together.
pub fn core(selection: &SelectionState, i: u32, k: u32) -> HighlightClass {
    HighlightClass::from_active(
        selection
            .selected()
            .is_some_and(|sel| sel.i == i && sel.k == k),
    )
}

/// Whole row of A.
pub fn matrix_a(selection: &SelectionState, i: u32) -> HighlightClass {
    HighlightClass::from_active(selection.selected().is_some_and(|sel| sel.i == i))
}

/// Whole column of B.
pub fn matrix_b(selection: &SelectionState, k: u32) -> HighlightClass {
    HighlightClass::from_active(selection.selected().is_some_and(|sel| sel.k == k))
}

pub fn matrix_c(selection: &SelectionState, i: u32, k: u32) -> HighlightClass {
    core(selection, i, k)
}
