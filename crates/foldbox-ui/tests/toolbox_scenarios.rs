//! End-to-end layout scenarios driven through the public toolbox API.
//!
//! All toolboxes use the default style: 20px titles and 5px handles.

use foldbox_ui::{
    ContentId, FixedContent, IVec2, SizeHints, ToolBox, ToolBoxConfig, ToolBoxEvent,
};

fn toolbox(hints: &[(i32, i32, i32)], height: i32) -> ToolBox {
    let mut toolbox = ToolBox::new(ToolBoxConfig::new().animate_transitions(false));
    toolbox.resize(200, height);
    for (i, &(preferred, min, max)) in hints.iter().enumerate() {
        let key = format!("pane-{i}");
        toolbox.add_pane(
            FixedContent::new(&key, SizeHints::new(preferred, min, max)),
            key,
            None,
        );
    }
    toolbox
}

fn heights(toolbox: &ToolBox) -> Vec<i32> {
    (0..toolbox.len())
        .filter_map(|i| toolbox.layout_height(i))
        .collect()
}

fn container_heights(toolbox: &ToolBox) -> Vec<i32> {
    (0..toolbox.len())
        .filter_map(|i| toolbox.pane_geometry(i))
        .map(|g| g.container.height)
        .collect()
}

#[test]
fn test_three_panes_shrink_to_fit() {
    let tb = toolbox(&[(180, 50, 1000); 3], 600);

    assert_eq!(heights(&tb), vec![177, 177, 176]);
    assert_eq!(container_heights(&tb), vec![177, 177, 176]);
    assert_eq!(tb.contents_height(), 600);
    assert_eq!(tb.box_spacing(), 0);

    let last = tb.pane_geometry(2).unwrap();
    assert_eq!(last.container.bottom(), 599);
}

#[test]
fn test_collapse_middle_pane_gives_space_to_last() {
    // 3 titles + 2 handles + 3 * 180
    let mut tb = toolbox(&[(180, 50, 1000); 3], 610);
    assert_eq!(heights(&tb), vec![180, 180, 180]);

    tb.set_expanded(1, false);
    assert!(!tb.is_expanded(1));
    assert_eq!(heights(&tb), vec![180, 0, 360]);
    assert_eq!(tb.manual_height(1), Some(180));
    assert_eq!(tb.contents_height(), 610);

    tb.set_expanded(1, true);
    assert_eq!(heights(&tb), vec![180, 180, 180]);
    assert_eq!(tb.contents_height(), 610);
}

#[test]
fn test_divider_drag_moves_space_between_neighbours() {
    // 2 titles + 1 handle + 200 + 150
    let mut tb = toolbox(&[(200, 50, 1000), (150, 50, 400)], 395);
    assert_eq!(heights(&tb), vec![200, 150]);

    let handle = tb.pane_geometry(1).unwrap().handle.unwrap();
    assert_eq!(handle.y, 220);

    // pointer moves up 40px: the divider follows it
    assert!(tb.handle_press(1, IVec2::new(10, 222)));
    assert!(tb.handle_move(IVec2::new(10, 182)));
    assert_eq!(heights(&tb), vec![160, 190]);
    assert_eq!(tb.pane_geometry(1).unwrap().handle.unwrap().y, 180);

    // further moves stay relative to the press point
    tb.handle_move(IVec2::new(10, 242));
    assert_eq!(heights(&tb), vec![220, 130]);

    tb.handle_release(IVec2::new(10, 242));
    assert_eq!(tb.manual_height(0), Some(220));
    assert_eq!(tb.manual_height(1), Some(130));
    assert_eq!(tb.contents_height(), 395);
}

#[test]
fn test_divider_drag_respects_bounds() {
    let mut tb = toolbox(&[(200, 50, 1000), (150, 50, 170)], 395);
    tb.handle_press(1, IVec2::new(10, 222));

    // the lower pane can only grow by 20
    tb.handle_move(IVec2::new(10, 0));
    assert_eq!(heights(&tb), vec![180, 170]);

    // the lower pane can only shrink to its minimum
    tb.handle_move(IVec2::new(10, 900));
    assert_eq!(heights(&tb), vec![300, 50]);
    tb.handle_release(IVec2::new(10, 900));
}

#[test]
fn test_reorder_first_pane_to_end() {
    // titles at 0, 125, 250; last container ends at 369
    let mut tb = toolbox(&[(100, 50, 1000); 3], 370);
    let moved = ContentId::new("pane-0");
    let total = tb.contents_height();

    assert!(tb.begin_drag(0, IVec2::new(10, 5)));
    assert_eq!(tb.resolve_drop_target(340), Some(2));
    assert_eq!(tb.drop_at(340), Some(2));

    assert!(!tb.is_dragging());
    assert_eq!(tb.index_of(moved), Some(2));
    assert_eq!(tb.label(0), Some("pane-1"));
    assert_eq!(tb.contents_height(), total);
}

#[test]
fn test_drop_onto_own_position_is_rejected() {
    let mut tb = toolbox(&[(100, 50, 1000); 3], 370);
    tb.begin_drag(1, IVec2::new(10, 130));
    assert_eq!(tb.resolve_drop_target(130), None);
    assert!(tb.drag_over(130).is_none());
    assert_eq!(tb.drop_at(130), None);
    assert!(!tb.is_dragging());
    assert_eq!(tb.label(1), Some("pane-1"));
}

#[test]
fn test_drag_over_reports_preview() {
    let mut tb = toolbox(&[(100, 50, 1000); 3], 370);
    tb.begin_drag(0, IVec2::new(10, 5));

    let preview = tb.drag_over(340).unwrap();
    assert_eq!(preview.target, 2);
    assert_eq!(preview.rect.y, 310);
    assert_eq!(tb.drop_preview(), Some(&preview));

    tb.drag_leave();
    assert!(tb.drop_preview().is_none());
    assert!(tb.is_dragging());
}

#[test]
fn test_removing_pane_during_drag_shifts_source() {
    let mut tb = toolbox(&[(100, 50, 1000); 3], 370);
    tb.begin_drag(2, IVec2::new(10, 255));

    tb.remove_pane(0);
    // the dragged pane is now at index 1; the first pane spans 0..=182
    assert_eq!(tb.drop_at(10), Some(0));
    assert_eq!(tb.index_of(ContentId::new("pane-2")), Some(0));
}

#[test]
fn test_reorder_during_drag_follows_dragged_pane() {
    let mut tb = toolbox(&[(100, 50, 1000); 3], 370);
    tb.begin_drag(2, IVec2::new(10, 255));

    // order becomes pane-1, pane-2, pane-0
    tb.commit_reorder(0, 2).unwrap();
    assert!(tb.is_dragging());
    assert_eq!(tb.drop_at(5), Some(0));

    assert_eq!(tb.index_of(ContentId::new("pane-2")), Some(0));
    assert_eq!(tb.label(1), Some("pane-1"));
    assert_eq!(tb.label(2), Some("pane-0"));
}

#[test]
fn test_removing_dragged_pane_cancels_drag() {
    let mut tb = toolbox(&[(100, 50, 1000); 3], 370);
    tb.begin_drag(1, IVec2::new(10, 130));

    tb.remove_pane(1);
    assert!(!tb.is_dragging());
    assert_eq!(tb.drop_at(10), None);
    assert_eq!(tb.len(), 2);
}

#[test]
fn test_reorder_event_is_emitted() {
    let mut tb = toolbox(&[(100, 50, 1000); 3], 370);
    let events = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = events.clone();
    tb.on_event(move |e| {
        if let ToolBoxEvent::Reordered { .. } = e {
            sink.borrow_mut().push(e.clone());
        }
    });

    tb.commit_reorder(2, 0).unwrap();
    assert_eq!(
        *events.borrow(),
        vec![ToolBoxEvent::Reordered { from: 2, to: 0 }]
    );
    assert_eq!(tb.label(0), Some("pane-2"));
}

#[test]
fn test_hidden_pane_takes_no_space() {
    let mut tb = toolbox(&[(100, 50, 1000); 3], 370);
    tb.set_visible(1, false);

    assert_eq!(tb.layout_height(1), Some(0));
    assert_eq!(tb.contents_height(), 370);
    // one title and one handle fewer to fill
    assert_eq!(tb.layout_height(0).unwrap() + tb.layout_height(2).unwrap(), 370 - 45);
    assert!(tb.pane_geometry(2).unwrap().handle.is_some());

    tb.set_visible(1, true);
    assert_eq!(tb.contents_height(), 370);
    assert!(tb.is_visible(1));
}

#[test]
fn test_first_visible_pane_has_no_handle() {
    let mut tb = toolbox(&[(100, 50, 1000); 3], 370);
    tb.set_visible(0, false);
    assert!(tb.pane_geometry(1).unwrap().handle.is_none());
    assert!(tb.pane_geometry(2).unwrap().handle.is_some());
}
