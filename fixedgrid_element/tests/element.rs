// Copyright 2026 the Fixedgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `fixedgrid_element` crate.
//!
//! These exercise the editing surface the way a containing view drives it:
//! proxies constructed per interaction over a shared stack, unit switching,
//! reordering, and the staleness discipline across structural changes.

use fixedgrid_element::{
    CoordSpace, ElementConfig, ElementProxy, ElementStack, GridSize, OrderDirection,
};
use kurbo::Point;

const GRID: GridSize = GridSize::new(10.0, 10.0);

fn pixel_element(x: f64, y: f64, width: f64, height: f64) -> ElementConfig {
    ElementConfig::new(CoordSpace::Pixels, x, y, width, height)
}

#[test]
fn unit_switching_is_idempotent() {
    let mut stack = ElementStack::new();
    stack.push(pixel_element(25.0, 35.0, 47.0, 12.0));

    let mut proxy = ElementProxy::new(&mut stack, 0, GRID).unwrap();
    proxy.set_units(CoordSpace::Grid);
    let once = (proxy.x(), proxy.y(), proxy.width(), proxy.height());
    proxy.set_units(CoordSpace::Grid);
    let twice = (proxy.x(), proxy.y(), proxy.width(), proxy.height());

    assert_eq!(once, twice);
    assert_eq!(once, (3.0, 4.0, 5.0, 1.0));
}

#[test]
fn grid_pixel_grid_round_trip_never_moves_or_shrinks() {
    let mut stack = ElementStack::new();
    stack.push(ElementConfig::new(CoordSpace::Grid, 3.0, 7.0, 4.0, 1.0));

    let mut proxy = ElementProxy::new(&mut stack, 0, GRID).unwrap();
    let before = (proxy.x(), proxy.y(), proxy.width(), proxy.height());

    proxy.set_units(CoordSpace::Pixels);
    proxy.set_units(CoordSpace::Grid);

    assert_eq!((proxy.x(), proxy.y()), (before.0, before.1), "positions are exact");
    assert!(proxy.width() >= before.2 && proxy.width() <= before.2 + 1.0);
    assert!(proxy.height() >= before.3 && proxy.height() <= before.3 + 1.0);
    assert!(proxy.width() >= proxy.min_width());
    assert!(proxy.height() >= proxy.min_height());
}

#[test]
fn conversion_enforces_minimums_for_every_element() {
    let mut stack = ElementStack::new();
    stack.push(pixel_element(0.0, 0.0, 4.0, 4.0));
    stack.push(pixel_element(50.0, 50.0, 47.0, 12.0));
    stack.push(pixel_element(12.0, 12.0, 300.0, 9.0));

    for index in 0..stack.len() {
        let mut proxy = ElementProxy::new(&mut stack, index, GRID).unwrap();
        proxy.set_units(CoordSpace::Grid);
        assert!(proxy.width() >= proxy.min_width());
        assert!(proxy.height() >= proxy.min_height());
    }
}

#[test]
fn single_step_order_splices_one_slot_and_reports_the_new_index() {
    // Moving the element at index 2 of [A, B, C, D] one step toward the
    // back splices it to index 1: [A, C, B, D].
    let mut stack = ElementStack::new();
    let labels = [10.0, 20.0, 30.0, 40.0];
    for x in labels {
        stack.push(pixel_element(x, 0.0, 20.0, 20.0));
    }

    let mut proxy = ElementProxy::new(&mut stack, 2, GRID).unwrap();
    assert_eq!(proxy.order(OrderDirection::Down), Some(1));
    assert_eq!(proxy.index(), 1);

    let order: Vec<f64> = stack.iter().map(|config| config.x).collect();
    assert_eq!(order, [10.0, 30.0, 20.0, 40.0]);
}

#[test]
fn boundary_orders_leave_the_sequence_untouched() {
    let mut stack = ElementStack::new();
    for x in [1.0, 2.0, 3.0] {
        stack.push(pixel_element(x, 0.0, 20.0, 20.0));
    }
    let snapshot: Vec<f64> = stack.iter().map(|config| config.x).collect();

    let mut front = ElementProxy::new(&mut stack, 2, GRID).unwrap();
    assert_eq!(front.order(OrderDirection::Top), None);

    let mut back = ElementProxy::new(&mut stack, 0, GRID).unwrap();
    assert_eq!(back.order(OrderDirection::Bottom), None);

    let after: Vec<f64> = stack.iter().map(|config| config.x).collect();
    assert_eq!(after, snapshot);
}

#[test]
fn a_recorded_handle_goes_inert_after_someone_else_splices() {
    let mut stack = ElementStack::new();
    let _bottom = stack.push(pixel_element(0.0, 0.0, 20.0, 20.0));
    let recorded = stack.push(pixel_element(5.0, 5.0, 20.0, 20.0));
    let victim = stack.handle_at(0).unwrap();

    // Another proxy removes the bottom element.
    ElementProxy::from_handle(&mut stack, victim, GRID)
        .unwrap()
        .remove();

    // `recorded` still names the surviving element but at the wrong index.
    assert_eq!(stack.reorder(recorded, OrderDirection::Top), None);
    assert_eq!(stack.remove(recorded), None);
    assert!(ElementProxy::from_handle(&mut stack, recorded, GRID).is_none());
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.get(0).unwrap().x, 5.0);

    // Re-deriving from the live index works again.
    let fresh = stack.handle_at(stack.index_of(recorded.id()).unwrap()).unwrap();
    assert_eq!(stack.reorder(fresh, OrderDirection::Top), None, "already at the top");
}

#[test]
fn line_elements_convert_their_endpoint_with_the_body() {
    let mut stack = ElementStack::new();
    stack.push(
        ElementConfig::new(CoordSpace::Pixels, 25.0, 35.0, 47.0, 12.0)
            .with_endpoint(Point::new(72.0, 47.0)),
    );

    let mut proxy = ElementProxy::new(&mut stack, 0, GRID).unwrap();
    assert!(proxy.is_line());
    proxy.set_units(CoordSpace::Grid);

    let config = stack.get(0).unwrap();
    assert_eq!(config.endpoint, Some(Point::new(7.0, 5.0)));
}

#[test]
fn grid_size_changes_reprice_minimums_without_touching_stored_fields() {
    let mut stack = ElementStack::new();
    stack.push(ElementConfig::new(CoordSpace::Grid, 2.0, 2.0, 3.0, 3.0));

    let mut proxy = ElementProxy::new(&mut stack, 0, GRID).unwrap();
    assert_eq!(proxy.min_width(), 1.0);

    proxy.set_grid_size(GridSize::new(4.0, 2.0));
    assert_eq!(proxy.min_width(), 3.0, "ceil(10 / 4)");
    assert_eq!(proxy.min_height(), 5.0, "ceil(10 / 2)");
    assert_eq!((proxy.x(), proxy.width()), (2.0, 3.0), "stored fields stay put");
}
