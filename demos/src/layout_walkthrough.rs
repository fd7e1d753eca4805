// Copyright 2026 the Fixedgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walks through a typical editing session: place elements, snap them to
//! the grid, restack them, resize one, and finally relocate the view
//! between folders.

use fixedgrid_element::{
    CoordSpace, ElementConfig, ElementProxy, ElementStack, GridSize, HandleAnchor, OrderDirection,
};
use fixedgrid_relocate::{Container, ObjectRecord, relocate};
use kurbo::{Point, Vec2};

fn dump(label: &str, stack: &ElementStack) {
    println!("{label}:");
    for (index, config) in stack.iter().enumerate() {
        let kind = if config.is_line() { "line" } else { "box " };
        println!(
            "  [{index}] {kind} ({:?}) x={} y={} w={} h={}",
            config.coord_space(),
            config.x,
            config.y,
            config.width,
            config.height
        );
    }
}

fn main() {
    let grid = GridSize::square(10.0);
    let mut stack = ElementStack::new();

    stack.push(ElementConfig::new(CoordSpace::Pixels, 25.0, 35.0, 47.0, 12.0));
    stack.push(ElementConfig::new(CoordSpace::Pixels, 60.0, 10.0, 40.0, 40.0));
    stack.push(
        ElementConfig::new(CoordSpace::Pixels, 0.0, 0.0, 100.0, 60.0)
            .with_endpoint(Point::new(100.0, 60.0)),
    );
    dump("initial, pixel space", &stack);

    // Snap the first element to the grid. The 47x12 px box becomes 5x1
    // cells; the position rounds to the nearest cell.
    let mut proxy = ElementProxy::new(&mut stack, 0, grid).expect("index 0 is live");
    proxy.set_units(CoordSpace::Grid);
    println!(
        "snapped: x={} y={} w={} h={} (min {}x{})",
        proxy.x(),
        proxy.y(),
        proxy.width(),
        proxy.height(),
        proxy.min_width(),
        proxy.min_height()
    );

    // Bring it to the front, then grow it by dragging the bottom-right
    // corner 35 px (3.5 cells, snapped to 4).
    let front = proxy.order(OrderDirection::Top);
    println!("restacked to index {front:?}");
    proxy.drag_resize(HandleAnchor::BottomRight, Vec2::new(35.0, 35.0));
    dump("after restack and resize", &stack);

    // Relocate the whole view from one folder to another.
    let mut view = ObjectRecord::new("layout-1", Some("missions"));
    let mut missions = Container::new("missions");
    missions.composition.push("layout-1");
    let mut archive = Container::new("archive");

    match relocate(&mut view, &mut missions, &mut archive, |_, _| true) {
        Ok(()) => println!("relocated layout-1 into {:?}", view.location),
        Err(denial) => println!("move denied: {denial}"),
    }
}
