use super::*;

use shared::domain::Zone;

fn controller(i: u32, j: u32, k: u32) -> (SelectionController, RecordingRenderer) {
    let dims = Dimensions::new(i, j, k).expect("dims");
    let mut controller = SelectionController::new(dims);
    let mut renderer = RecordingRenderer::default();
    controller.render(&mut renderer).expect("initial render");
    (controller, renderer)
}

fn region_of(controller: &SelectionController, i: u32, k: u32) -> RegionId {
    controller
        .registry()
        .region_for(LogicalIndex::new(i, k))
        .expect("result cell is registered")
}

#[test]
fn starts_idle_with_everything_inactive() {
    let (controller, renderer) = controller(2, 3, 2);
    assert_eq!(controller.current_selection(), None);
    assert_eq!(controller.state(), SelectionState::Idle);

    let frame = renderer.last().expect("initial frame");
    assert_eq!(frame.active().count(), 0);
    assert_eq!(controller.frames_rendered(), 1);
}

#[test]
fn nothing_is_pickable_before_first_render() {
    let dims = Dimensions::new(2, 2, 2).expect("dims");
    let mut controller = SelectionController::new(dims);
    assert_eq!(controller.handle_pick(RegionId(0)), PickOutcome::Ignored);
    assert_eq!(controller.current_selection(), None);
}

#[test]
fn valid_pick_focuses_and_rerenders() {
    let (mut controller, mut renderer) = controller(2, 2, 2);
    let region = region_of(&controller, 1, 0);

    let outcome = controller
        .pick_and_render(region, &mut renderer)
        .expect("pick");
    assert_eq!(
        outcome,
        PickOutcome::Selected {
            previous: None,
            current: LogicalIndex::new(1, 0),
        }
    );
    assert_eq!(controller.current_selection(), Some(LogicalIndex::new(1, 0)));

    let frame = renderer.last().expect("frame after pick");
    assert_eq!(frame.selection, SelectionState::Focused(LogicalIndex::new(1, 0)));
    let active_c: Vec<_> = frame
        .zone(Zone::MatrixC)
        .filter(|c| c.is_active())
        .map(|c| (c.i, c.k))
        .collect();
    assert_eq!(active_c, vec![(Some(1), Some(0))]);
    assert_eq!(renderer.frames().len(), 2);
}

#[test]
fn repeated_pick_is_idempotent() {
    let (mut controller, mut renderer) = controller(3, 2, 3);
    let region = region_of(&controller, 2, 1);

    controller
        .pick_and_render(region, &mut renderer)
        .expect("first pick");
    let first = renderer.last().cloned().expect("first frame");

    let outcome = controller
        .pick_and_render(region, &mut renderer)
        .expect("second pick");
    assert_eq!(outcome, PickOutcome::Unchanged(LogicalIndex::new(2, 1)));
    assert!(!outcome.changed());
    assert_eq!(renderer.last(), Some(&first));
}

#[test]
fn unknown_region_never_changes_selection() {
    let (mut controller, mut renderer) = controller(2, 2, 2);

    let outcome = controller
        .pick_and_render(RegionId(99), &mut renderer)
        .expect("stray pick");
    assert_eq!(outcome, PickOutcome::Ignored);
    assert_eq!(controller.current_selection(), None);

    let region = region_of(&controller, 0, 1);
    controller.handle_pick(region);
    assert_eq!(controller.handle_pick(RegionId(4)), PickOutcome::Ignored);
    assert_eq!(controller.current_selection(), Some(LogicalIndex::new(0, 1)));
}

#[test]
fn new_pick_replaces_previous_selection() {
    let (mut controller, mut renderer) = controller(2, 2, 2);
    let first = region_of(&controller, 0, 0);
    let second = region_of(&controller, 1, 1);

    controller.pick_and_render(first, &mut renderer).expect("first");
    let outcome = controller
        .pick_and_render(second, &mut renderer)
        .expect("second");

    assert_eq!(
        outcome,
        PickOutcome::Selected {
            previous: Some(LogicalIndex::new(0, 0)),
            current: LogicalIndex::new(1, 1),
        }
    );
    let frame = renderer.last().expect("frame");
    assert_eq!(frame.active().count(), 1 + 3 * 2);
}

#[test]
fn every_result_cell_is_reachable_by_pick() {
    let (mut controller, mut renderer) = controller(3, 1, 4);
    let cells: Vec<_> = controller.dims().result_cells().collect();
    for index in cells {
        let region = controller
            .registry()
            .region_for(index)
            .expect("registered");
        controller
            .pick_and_render(region, &mut renderer)
            .expect("pick");
        assert_eq!(controller.current_selection(), Some(index));
    }
}

#[test]
fn frame_matches_rendered_frame() {
    let (controller, renderer) = controller(2, 2, 3);
    let frame = controller.frame().expect("frame");
    assert_eq!(renderer.last(), Some(&frame));
}
