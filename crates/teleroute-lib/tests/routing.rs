mod common;

use teleroute_lib::{
    find_path, plan_route, reconstruct_route, Coordinate, LegKind, RouteOutcome, RouteRequest,
};

use common::{free_cells, open_grid_with_teleports, sample_grid};

#[test]
fn sample_route_uses_teleport_pair() {
    let grid = sample_grid();
    let request = RouteRequest::new(Coordinate::new(0, 0), Coordinate::new(5, 5));
    let plan = plan_route(&grid, &request).expect("valid request");
    let route = plan.outcome.route().expect("route exists");

    let pair = grid.teleports();
    assert_eq!(pair.first, Coordinate::new(1, 1));
    assert_eq!(pair.second, Coordinate::new(2, 4));

    let hop = route
        .legs()
        .find(|leg| leg.kind == LegKind::Teleport)
        .expect("route takes the teleport");
    assert_eq!(hop.from, pair.first);
    assert_eq!(hop.to, pair.second);

    let manhattan = request.start.manhattan(&request.end);
    assert_eq!(manhattan, 10);
    assert!(route.steps < manhattan);
    // Two moves to reach (1, 1), then four from (2, 4) to (5, 5).
    assert_eq!(route.steps, 6);
    assert_eq!(route.teleport_hops, 1);
    assert_eq!(route.cells.first(), Some(&request.start));
    assert_eq!(route.cells.last(), Some(&request.end));
}

#[test]
fn start_equal_to_end_is_a_zero_step_route() {
    let grid = sample_grid();
    for cell in free_cells(&grid) {
        let outcome = reconstruct_route(&find_path(&grid, cell, cell));
        let route = outcome.into_route().expect("trivial route");
        assert_eq!(route.cells, vec![cell]);
        assert_eq!(route.steps, 0);
    }
}

#[test]
fn open_grid_steps_match_manhattan_unless_teleport_helps() {
    let size = 5;
    let first = Coordinate::new(0, 4);
    let second = Coordinate::new(4, 0);
    let grid = open_grid_with_teleports(size, first, second);
    let cells = free_cells(&grid);

    for &start in &cells {
        for &end in &cells {
            let route = reconstruct_route(&find_path(&grid, start, end))
                .into_route()
                .expect("open grid is connected");

            let walking = start.manhattan(&end);
            let via_first = start.manhattan(&first) + second.manhattan(&end);
            let via_second = start.manhattan(&second) + first.manhattan(&end);
            let via_teleport = via_first.min(via_second);

            // Breadth-first depth counts the hop as one move, so the teleport
            // only wins outright when it saves at least two moves.
            if walking < via_teleport + 1 {
                assert_eq!(route.steps, walking, "{start} -> {end}");
                assert_eq!(route.teleport_hops, 0);
            } else if via_teleport + 1 < walking {
                assert_eq!(route.steps, via_teleport, "{start} -> {end}");
                assert_eq!(route.teleport_hops, 1);
            } else {
                assert!(route.steps <= walking, "{start} -> {end}");
                assert!(route.steps >= via_teleport, "{start} -> {end}");
            }
        }
    }
}

#[test]
fn every_leg_is_adjacent_or_the_teleport_pair() {
    let grid = sample_grid();
    let pair = grid.teleports();
    let cells = free_cells(&grid);

    for &start in &cells {
        for &end in &cells {
            let outcome = reconstruct_route(&find_path(&grid, start, end));
            let Some(route) = outcome.route() else {
                panic!("sample grid is connected: {start} -> {end}");
            };
            for leg in route.legs() {
                match leg.kind {
                    LegKind::Walk => assert!(leg.from.is_adjacent(&leg.to)),
                    LegKind::Teleport => assert!(pair.links(leg.from, leg.to)),
                }
            }
            let walks = route.legs().filter(|leg| leg.kind == LegKind::Walk).count();
            assert_eq!(walks, route.steps);
        }
    }
}

#[test]
fn enclosed_end_without_teleport_escape_has_no_route() {
    let grid = teleroute_lib::load_grid(
        &common::fixtures_dir().join("enclosed_4x4.csv"),
        Some(4),
        None,
    )
    .expect("fixture loads");

    let outcome = reconstruct_route(&find_path(
        &grid,
        Coordinate::new(0, 0),
        Coordinate::new(3, 3),
    ));
    assert_eq!(outcome, RouteOutcome::NoRouteFound);

    // A start equal to the end is found even inside the enclosure.
    let outcome = reconstruct_route(&find_path(
        &grid,
        Coordinate::new(3, 3),
        Coordinate::new(3, 3),
    ));
    assert!(outcome.is_found());
}

#[test]
fn teleport_lets_route_escape_an_enclosure() {
    // Start is walled into the left column; only the teleport reaches the right.
    let grid = teleroute_lib::parse_grid("1,0,1\n2,0,2\n1,0,1\n", None, Some(3))
        .expect("valid grid");
    let plan = plan_route(
        &grid,
        &RouteRequest::new(Coordinate::new(0, 0), Coordinate::new(2, 2)),
    )
    .expect("valid request");

    let route = plan.outcome.route().expect("teleport escape");
    assert_eq!(
        route.cells,
        vec![
            Coordinate::new(0, 0),
            Coordinate::new(1, 0),
            Coordinate::new(1, 2),
            Coordinate::new(2, 2),
        ]
    );
    assert_eq!(route.steps, 2);
}

#[test]
fn repeated_searches_are_identical() {
    let grid = sample_grid();
    let start = Coordinate::new(5, 0);
    let end = Coordinate::new(0, 5);

    let first = reconstruct_route(&find_path(&grid, start, end));
    for _ in 0..10 {
        assert_eq!(reconstruct_route(&find_path(&grid, start, end)), first);
    }
}

#[test]
fn ties_prefer_right_then_down() {
    let grid = open_grid_with_teleports(4, Coordinate::new(3, 0), Coordinate::new(3, 3));
    let route = reconstruct_route(&find_path(
        &grid,
        Coordinate::new(0, 0),
        Coordinate::new(1, 1),
    ))
    .into_route()
    .expect("route exists");

    // (0, 1) is enqueued before (1, 0), so it discovers (1, 1) first.
    assert_eq!(
        route.cells,
        vec![
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 1),
        ]
    );
}
