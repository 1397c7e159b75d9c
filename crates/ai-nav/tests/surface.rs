use ai_nav::{NavBody, NavGrid, NavSurface, OpenSurface, Vec3};

#[test]
fn open_surface_accepts_any_point() {
    let p = Vec3::new(-100.0, 3.0, 42.0);
    assert_eq!(OpenSurface.sample_position(p, 0.0), Some(p));
    assert!(OpenSurface.is_navigable(p));
}

#[test]
fn grid_keeps_walkable_points_unchanged() {
    let grid = NavGrid::new(4, 4, 1.0);
    let p = Vec3::new(1.25, 0.5, 2.75);
    assert_eq!(grid.sample_position(p, 1.0), Some(p));
}

#[test]
fn grid_snaps_blocked_points_to_nearest_walkable_cell() {
    let mut grid = NavGrid::new(5, 5, 1.0);
    grid.set_blocked(2, 2, true);

    let snapped = grid
        .sample_position(Vec3::ground(2.5, 2.9), 1.0)
        .expect("neighbour cell within reach");
    assert_eq!(snapped, Vec3::ground(2.5, 3.5));
}

#[test]
fn grid_rejects_points_with_nothing_walkable_in_reach() {
    let mut grid = NavGrid::new(3, 3, 1.0);
    for x in 0..3 {
        for z in 0..3 {
            grid.set_blocked(x, z, true);
        }
    }
    assert_eq!(grid.sample_position(Vec3::ground(1.5, 1.5), 2.0), None);
    assert!(!grid.is_navigable(Vec3::ground(1.5, 1.5)));
}

#[test]
fn points_outside_the_grid_are_not_navigable() {
    let grid = NavGrid::new(2, 2, 1.0);
    assert!(!grid.is_navigable(Vec3::ground(-0.5, 0.5)));
    assert_eq!(
        grid.sample_position(Vec3::ground(-0.5, 0.5), 1.0),
        Some(Vec3::ground(0.5, 0.5))
    );
}

#[test]
fn body_walks_to_stopping_distance_and_reports_arrival() {
    let mut body = NavBody::new(Vec3::ZERO, 2.0, 0.5);
    assert!(body.has_arrived());

    body.set_destination(Vec3::ground(10.0, 0.0));
    assert_eq!(body.remaining_distance(), 10.0);
    assert!(!body.has_arrived());

    for _ in 0..100 {
        body.advance(0.1);
    }

    assert!(body.has_arrived());
    assert!((body.position.x - 9.5).abs() < 1e-3);
}

#[test]
fn horizontal_projection_drops_height() {
    let a = Vec3::new(0.0, 5.0, 0.0);
    let b = Vec3::new(3.0, -2.0, 4.0);
    assert_eq!(a.horizontal_distance(b), 5.0);
    assert_eq!((b - a).horizontal().normalize_or_zero(), Vec3::new(0.6, 0.0, 0.8));
}

#[test]
#[should_panic(expected = "exceed i32 cell coordinates")]
fn grid_rejects_dimensions_beyond_cell_coordinates() {
    NavGrid::new(u32::MAX, 1, 1.0);
}

#[test]
#[should_panic(expected = "too large")]
fn grid_rejects_cell_counts_that_overflow() {
    NavGrid::new(65_536, 65_536, 1.0);
}
