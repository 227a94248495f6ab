//! Headless Toolbox Example - driving the pane stack without a window
//!
//! Builds a three-pane toolbox, then replays a short session:
//! - Collapse a pane and run the animation to rest
//! - Drag a divider to rebalance two panes
//! - Drag a title to reorder the stack
//! - Hide a pane through the menu model
//!
//! Every step prints the resulting geometry. Run with `RUST_LOG=foldbox_ui=debug`
//! to see the layout passes.

use foldbox_core::logging;
use foldbox_core::math::to_pixel;
use foldbox_ui::{
    FixedContent, IVec2, InputEvent, MenuAction, PaintCommand, PaintRecorder, PointerButton,
    SizeHints, ToolBox, ToolBoxConfig, ToolBoxEvent,
};

fn dump(toolbox: &ToolBox, step: &str) {
    tracing::info!("{step}");
    for index in 0..toolbox.len() {
        let Some(geometry) = toolbox.pane_geometry(index) else {
            continue;
        };
        tracing::info!(
            "  [{index}] {:<10} expanded={:<5} visible={:<5} title.y={:<4} container={}x{}",
            toolbox.label(index).unwrap_or_default(),
            toolbox.is_expanded(index),
            toolbox.is_visible(index),
            geometry.title.y,
            geometry.container.width,
            geometry.container.height,
        );
    }
    tracing::info!(
        "  contents={} spacing={}",
        toolbox.contents_height(),
        toolbox.box_spacing()
    );
}

fn click(toolbox: &mut ToolBox, pos: IVec2) {
    toolbox.input(InputEvent::Press { pos, button: PointerButton::Primary });
    toolbox.input(InputEvent::Release { pos, button: PointerButton::Primary });
}

fn drag(toolbox: &mut ToolBox, from: IVec2, to: IVec2) {
    toolbox.input(InputEvent::Press { pos: from, button: PointerButton::Primary });
    let steps = 8;
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        let pos = to_pixel(from.as_vec2().lerp(to.as_vec2(), t));
        toolbox.input(InputEvent::Move(pos));
    }
    toolbox.input(InputEvent::Release { pos: to, button: PointerButton::Primary });
}

fn main() {
    logging::init();

    let mut toolbox = ToolBox::new(ToolBoxConfig::default());
    toolbox.on_event(|event| match event {
        ToolBoxEvent::RepaintRequested => {}
        other => tracing::info!("  event: {other:?}"),
    });

    toolbox.resize(240, 600);
    toolbox.add_pane(FixedContent::new("tools", SizeHints::new(180, 60, 400)), "Tools", None);
    toolbox.add_pane(FixedContent::new("layers", SizeHints::new(180, 50, 1000)), "Layers", None);
    toolbox.add_pane(FixedContent::new("history", SizeHints::new(120, 50, 1000)), "History", None);
    dump(&toolbox, "initial layout");

    // Click the second title and let the collapse animation finish.
    let title = toolbox.pane_geometry(1).map_or(0, |g| g.title.y);
    click(&mut toolbox, IVec2::new(60, title + 5));
    let mut frames = 0;
    while toolbox.tick(1.0 / 60.0) {
        frames += 1;
    }
    dump(&toolbox, &format!("collapsed 'Layers' after {frames} frames"));

    // Pull the divider above 'History' up by 40px.
    if let Some(handle) = toolbox.pane_geometry(2).and_then(|g| g.handle) {
        let start = IVec2::new(60, handle.y + handle.height / 2);
        drag(&mut toolbox, start, start - IVec2::new(0, 40));
    }
    dump(&toolbox, "moved the 'History' divider");

    // Drag the first title to the bottom of the stack.
    let bottom = toolbox.contents_height() - 10;
    drag(&mut toolbox, IVec2::new(60, 5), IVec2::new(60, bottom));
    dump(&toolbox, "moved 'Tools' to the end");

    // Hide the pane now at the top through the context menu model.
    let menu = toolbox.pane_menu(Some(0), IVec2::new(60, 5));
    for entry in &menu.entries {
        tracing::info!(
            "  menu: [{}] {} enabled={}",
            if entry.checked { 'x' } else { ' ' },
            entry.label,
            entry.enabled
        );
    }
    toolbox.apply_menu_action(&menu, MenuAction::Hide);
    dump(&toolbox, "hid the top pane");

    let mut recorder = PaintRecorder::new();
    toolbox.paint(&mut recorder);
    for command in &recorder.commands {
        match command {
            PaintCommand::Title { label, rect, .. } => {
                tracing::info!("  paint title '{label}' at y={} h={}", rect.y, rect.height)
            }
            PaintCommand::Handle(handle) => {
                tracing::info!("  paint handle at y={} h={}", handle.rect.y, handle.rect.height)
            }
        }
    }
}
