//! Pointer input, notifications, menu model and painting.

use std::cell::RefCell;
use std::rc::Rc;

use foldbox_ui::{
    ContentId, DefaultStyle, FixedContent, Icon, IVec2, InputEvent, MenuAction, PaintCommand,
    PaintRecorder, PointerButton, SizeHints, TitleState, ToolBox, ToolBoxConfig, ToolBoxEvent,
};

type Events = Rc<RefCell<Vec<ToolBoxEvent>>>;

/// Three 100px panes filling 370px exactly: titles at 0, 125, 250.
fn toolbox() -> ToolBox {
    let mut toolbox = ToolBox::new(ToolBoxConfig::new().animate_transitions(false));
    toolbox.resize(200, 370);
    for i in 0..3 {
        let key = format!("pane-{i}");
        toolbox.add_pane(FixedContent::new(&key, SizeHints::new(100, 50, 1000)), key, None);
    }
    toolbox
}

fn record(toolbox: &mut ToolBox) -> Events {
    let events: Events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    toolbox.on_event(move |e| sink.borrow_mut().push(e.clone()));
    events
}

fn press(x: i32, y: i32) -> InputEvent {
    InputEvent::Press {
        pos: IVec2::new(x, y),
        button: PointerButton::Primary,
    }
}

fn release(x: i32, y: i32) -> InputEvent {
    InputEvent::Release {
        pos: IVec2::new(x, y),
        button: PointerButton::Primary,
    }
}

#[test]
fn test_title_click_toggles_pane() {
    let mut tb = toolbox();
    let events = record(&mut tb);

    tb.input(press(50, 130));
    tb.input(release(50, 130));

    assert!(!tb.is_expanded(1));
    assert!(events.borrow().contains(&ToolBoxEvent::TitleClicked { index: 1 }));

    tb.input(press(50, 130));
    tb.input(release(50, 130));
    assert!(tb.is_expanded(1));
}

#[test]
fn test_disabled_toolbox_ignores_input() {
    let mut tb = toolbox();
    tb.set_enabled(false);
    let events = record(&mut tb);

    tb.input(press(50, 130));
    tb.input(release(50, 130));
    assert!(tb.is_expanded(1));

    tb.input(press(10, 5));
    tb.input(InputEvent::Move(IVec2::new(10, 340)));
    assert!(!tb.is_dragging());
    tb.input(release(10, 340));

    tb.input(press(10, 122));
    tb.input(InputEvent::Move(IVec2::new(10, 142)));
    assert_eq!(tb.layout_height(0), Some(100));
    assert!(events.borrow().is_empty());

    tb.set_enabled(true);
    tb.input(press(50, 130));
    tb.input(release(50, 130));
    assert!(!tb.is_expanded(1));
}

#[test]
fn test_disabling_mid_drag_keeps_resized_heights() {
    let mut tb = toolbox();
    tb.input(press(10, 122));
    tb.input(InputEvent::Move(IVec2::new(10, 142)));
    assert!(tb.is_dragging());

    tb.set_enabled(false);
    assert!(!tb.is_dragging());
    assert_eq!(tb.manual_height(0), Some(120));
    assert_eq!(tb.manual_height(1), Some(80));

    tb.set_enabled(true);
    tb.input(InputEvent::Move(IVec2::new(10, 160)));
    tb.input(release(10, 160));
    assert_eq!(tb.layout_height(0), Some(120));
}

#[test]
fn test_release_outside_title_is_not_a_click() {
    let mut tb = toolbox();
    // the title spans 125..=144; the move stays under the drag distance
    tb.input(press(50, 140));
    tb.input(InputEvent::Move(IVec2::new(50, 146)));
    tb.input(release(50, 146));
    assert!(!tb.is_dragging());
    assert!(tb.is_expanded(1));
}

#[test]
fn test_secondary_press_requests_menu() {
    let mut tb = toolbox();
    let events = record(&mut tb);

    let pos = IVec2::new(40, 255);
    tb.input(InputEvent::Press {
        pos,
        button: PointerButton::Secondary,
    });
    assert_eq!(
        *events.borrow(),
        vec![ToolBoxEvent::ContextMenuRequested { index: 2, position: pos }]
    );
}

#[test]
fn test_title_drag_reorders_panes() {
    let mut tb = toolbox();
    let events = record(&mut tb);

    tb.input(press(10, 5));
    tb.input(InputEvent::Move(IVec2::new(10, 30)));
    assert!(tb.is_dragging());
    assert!(events.borrow().contains(&ToolBoxEvent::DragStarted {
        index: 0,
        origin: IVec2::new(10, 5),
    }));

    tb.input(InputEvent::Move(IVec2::new(10, 340)));
    assert_eq!(tb.drop_preview().map(|p| p.target), Some(2));

    tb.input(release(10, 340));
    assert!(!tb.is_dragging());
    assert_eq!(tb.index_of(ContentId::new("pane-0")), Some(2));
    assert!(events.borrow().contains(&ToolBoxEvent::Reordered { from: 0, to: 2 }));
    // the press never became a click
    assert!(tb.is_expanded(2));
}

#[test]
fn test_small_title_move_is_still_a_click() {
    let mut tb = toolbox();
    tb.input(press(10, 5));
    tb.input(InputEvent::Move(IVec2::new(14, 9)));
    assert!(!tb.is_dragging());
    tb.input(release(14, 9));
    assert!(!tb.is_expanded(0));
}

#[test]
fn test_handle_drag_through_input() {
    let mut tb = toolbox();
    // handle above the second pane spans 120..=124
    tb.input(press(10, 122));
    tb.input(InputEvent::Move(IVec2::new(10, 142)));
    assert_eq!(tb.layout_height(0), Some(120));
    assert_eq!(tb.layout_height(1), Some(80));

    tb.input(release(10, 142));
    assert_eq!(tb.manual_height(0), Some(120));
    assert_eq!(tb.manual_height(1), Some(80));
    assert!(!tb.is_dragging());
}

#[test]
fn test_hover_requests_repaint() {
    let mut tb = toolbox();
    let events = record(&mut tb);

    tb.input(InputEvent::HoverMove(IVec2::new(5, 130)));
    tb.input(InputEvent::HoverMove(IVec2::new(6, 131)));
    tb.input(InputEvent::HoverLeave);

    let repaints = events
        .borrow()
        .iter()
        .filter(|e| **e == ToolBoxEvent::RepaintRequested)
        .count();
    assert_eq!(repaints, 2);
}

#[test]
fn test_menu_hides_pane_but_keeps_last_one() {
    let mut tb = toolbox();

    let menu = tb.pane_menu(Some(0), IVec2::new(5, 5));
    assert!(tb.apply_menu_action(&menu, MenuAction::Hide));
    assert!(!tb.is_visible(0));

    let menu = tb.pane_menu(Some(1), IVec2::ZERO);
    assert!(tb.apply_menu_action(&menu, MenuAction::Toggle(2)));
    assert!(!tb.is_visible(2));

    // only pane 1 is left
    let menu = tb.pane_menu(Some(1), IVec2::ZERO);
    assert!(!menu.hide.as_ref().unwrap().enabled);
    assert!(!tb.apply_menu_action(&menu, MenuAction::Hide));
    assert!(!tb.apply_menu_action(&menu, MenuAction::Toggle(1)));
    assert!(tb.is_visible(1));

    assert!(tb.apply_menu_action(&menu, MenuAction::Toggle(0)));
    assert_eq!(
        tb.list_panes(),
        vec![
            ("pane-0".to_string(), true),
            ("pane-1".to_string(), true),
            ("pane-2".to_string(), false),
        ]
    );
}

#[test]
fn test_set_visible_same_state_is_noop() {
    let mut tb = toolbox();
    let before: Vec<_> = (0..3).map(|i| tb.layout_height(i)).collect();
    let events = record(&mut tb);

    tb.set_visible(1, true);
    assert!(events.borrow().is_empty());
    assert_eq!((0..3).map(|i| tb.layout_height(i)).collect::<Vec<_>>(), before);
}

#[test]
fn test_size_hint_changes_are_reported() {
    let mut tb = toolbox();
    // 3 titles + 2 handles + 3 * 100 preferred
    assert_eq!(tb.size_hint().height, 370);
    assert_eq!(tb.minimum_size_hint().height, 60 + 10 + 150);

    let events = record(&mut tb);
    tb.resize(200, 800);
    assert!(events.borrow().is_empty());

    tb.set_label(0, "A considerably longer label");
    let changed = events
        .borrow()
        .iter()
        .any(|e| matches!(e, ToolBoxEvent::SizeHintChanged { .. }));
    assert!(changed);
    assert_eq!(tb.size_hint().width, 12 + 27 * 7);
}

#[test]
fn test_paint_walks_visible_panes() {
    let mut tb = toolbox();
    tb.set_icon(1, Some(Icon::new("brush")));
    tb.set_visible(2, false);

    let mut recorder = PaintRecorder::new();
    tb.paint(&mut recorder);

    assert_eq!(recorder.titles().count(), 2);
    let handles: Vec<_> = recorder.handles().collect();
    assert_eq!(handles.len(), 1);
    assert_eq!(handles[0].index, 1);

    let second = recorder
        .titles()
        .find_map(|c| match c {
            PaintCommand::Title { index: 1, state, branch_rect, .. } => Some((*state, *branch_rect)),
            _ => None,
        })
        .unwrap();
    assert!(second.0.contains(TitleState::OPEN | TitleState::HAS_ICON | TitleState::ENABLED));
    assert_eq!(second.1.map(|r| r.width), Some(20));
}

#[test]
fn test_zero_indentation_drops_branch_rect() {
    let mut tb = toolbox();
    tb.set_text_indentation(0);

    let mut recorder = PaintRecorder::new();
    tb.paint(&mut recorder);
    assert!(recorder.titles().all(|c| matches!(
        c,
        PaintCommand::Title { branch_rect: None, .. }
    )));
}

#[test]
fn test_style_change_with_new_handle_width_relayouts() {
    let mut tb = toolbox();
    tb.style_changed(DefaultStyle::new().with_handle_width(1));
    assert_eq!(tb.handle_width(), 1);
    assert_eq!(tb.contents_height(), 370);

    // hairline handles get a wider grab area
    let handle = tb.pane_geometry(1).unwrap().handle.unwrap();
    assert_eq!(handle.height, 5);
}

#[test]
fn test_content_destroyed_removes_pane() {
    let mut tb = toolbox();
    let events = record(&mut tb);

    assert!(tb.content_destroyed(ContentId::new("pane-1")));
    assert!(!tb.content_destroyed(ContentId::new("pane-1")));
    assert_eq!(tb.len(), 2);
    assert!(events.borrow().contains(&ToolBoxEvent::PaneRemoved { index: 1 }));
    assert_eq!(tb.contents_height(), 370);

    assert_eq!(tb.pending_disposal_count(), 1);
    tb.tick(0.016);
    assert_eq!(tb.pending_disposal_count(), 0);
}

#[test]
fn test_content_is_resized_and_hidden() {
    let mut tb = toolbox();
    let content = tb.content_as::<FixedContent>(1).unwrap();
    assert_eq!(content.size.height, 100);
    assert!(content.visible);

    tb.set_visible(1, false);
    assert!(!tb.content_as::<FixedContent>(1).unwrap().visible);

    let removed = tb.remove_pane(0).unwrap();
    let removed = removed.as_any().downcast_ref::<FixedContent>().unwrap();
    assert!(!removed.visible);
}
