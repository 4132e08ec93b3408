// Copyright 2026 the Beziertool Authors
// SPDX-License-Identifier: Apache-2.0

//! Headless demo: drives an edit session through a scripted gesture sequence
//! and logs the resulting spline. A smoke run of the editing core without a
//! render surface; pass a settings TOML path as the first argument to
//! override the defaults.

use anyhow::Context;
use beziertool::{EditKey, EditSession, Modifiers, PointerEvent, Settings};
use kurbo::Point;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("beziertool=info".parse()?),
        )
        .init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(std::path::Path::new(&path))
            .with_context(|| format!("loading settings from {path}"))?,
        None => Settings::default(),
    };
    let mut session = EditSession::new(settings);
    let mut clock = 0u64;

    // Click three points onto the surface...
    for pos in [
        Point::new(100.0, 100.0),
        Point::new(220.0, 60.0),
        Point::new(340.0, 140.0),
    ] {
        click(&mut session, pos, &mut clock);
    }

    // ...drag the middle point up...
    drag(&mut session, Point::new(220.0, 60.0), Point::new(220.0, 20.0), &mut clock);

    // ...and pull a tangent handle out of it.
    drag_handle(&mut session, Point::new(220.0, 20.0), Point::new(260.0, 0.0), &mut clock);

    let frame = session.frame_state();
    tracing::info!(
        "spline has {} points; sampled path has {} positions, length {:.1}",
        frame.points.len(),
        frame.path.len(),
        frame.path.length()
    );

    session.key_up(EditKey::Delete);
    tracing::info!("after delete: {} points remain", session.spline.len());
    Ok(())
}

/// Press and release in place, quickly: the create-point gesture
fn click(session: &mut EditSession, pos: Point, clock: &mut u64) {
    session.pointer_down(&PointerEvent::new(pos, *clock));
    *clock += 80;
    session.pointer_up(&PointerEvent::new(pos, *clock));
}

/// Press on `from`, move to `to`, release
fn drag(session: &mut EditSession, from: Point, to: Point, clock: &mut u64) {
    session.pointer_down(&PointerEvent::new(from, *clock));
    *clock += 120;
    session.pointer_move(&PointerEvent::new(to, *clock));
    *clock += 120;
    session.pointer_up(&PointerEvent::new(to, *clock));
}

/// Same as `drag`, with the drag-tangent modifier held throughout
fn drag_handle(session: &mut EditSession, from: Point, to: Point, clock: &mut u64) {
    let mods = Modifiers {
        drag_tangent: true,
        snap_to_grid: false,
    };
    session.pointer_down(&PointerEvent::with_modifiers(from, mods, *clock));
    *clock += 120;
    session.pointer_move(&PointerEvent::with_modifiers(to, mods, *clock));
    *clock += 120;
    session.pointer_up(&PointerEvent::with_modifiers(to, mods, *clock));
}
