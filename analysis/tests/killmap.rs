use analysis::killmap::{self, Bounds, Canvas, KillFilter, Point};
use analysis::{Config, InvalidInput};
use common::match_stats::{KillPosition, Position};
use pretty_assertions::assert_eq;

fn kill(round: u32, attacker: &str, victim: &str, weapon: &str, from: (f64, f64), to: (f64, f64)) -> KillPosition {
    KillPosition {
        round_number: round,
        attacker_steam_id: attacker.to_owned(),
        victim_steam_id: victim.to_owned(),
        attacker_pos: Position {
            x: from.0,
            y: from.1,
            z: 0.0,
        },
        victim_pos: Position {
            x: to.0,
            y: to.1,
            z: 0.0,
        },
        weapon: weapon.to_owned(),
        is_headshot: false,
    }
}

fn sample_kills() -> Vec<KillPosition> {
    vec![
        kill(1, "a1", "b1", "usp_silencer", (0.0, 0.0), (10.0, 10.0)),
        kill(5, "a2", "b2", "ak47", (20.0, 0.0), (30.0, 10.0)),
        kill(5, "b3", "a1", "ak47", (200.0, 100.0), (150.0, 50.0)),
        kill(5, "a1", "b3", "awp", (40.0, 20.0), (60.0, 30.0)),
        kill(7, "b2", "a3", "ak47", (80.0, 20.0), (90.0, 30.0)),
    ]
}

#[test]
fn single_point_gets_unit_padding() {
    let kills = vec![kill(1, "a", "b", "ak47", (100.0, 100.0), (100.0, 100.0))];

    let bounds = killmap::compute_bounds(&kills, &Config::default()).unwrap();

    assert_eq!(
        Bounds {
            min_x: 99.0,
            max_x: 101.0,
            min_y: 99.0,
            max_y: 101.0,
        },
        bounds
    );
}

#[test]
fn bounds_cover_attackers_and_victims() {
    let bounds = killmap::compute_bounds(&sample_kills(), &Config::default()).unwrap();

    assert_eq!(
        Bounds {
            min_x: -10.0,
            max_x: 210.0,
            min_y: -5.0,
            max_y: 105.0,
        },
        bounds
    );
}

#[test]
fn empty_kills_use_unit_bounds() {
    assert_eq!(Bounds::UNIT, killmap::compute_bounds(&[], &Config::default()).unwrap());
}

#[test]
fn non_finite_position() {
    let kills = vec![
        kill(1, "a", "b", "ak47", (1.0, 1.0), (2.0, 2.0)),
        kill(3, "a", "b", "ak47", (f64::NAN, 1.0), (2.0, 2.0)),
    ];

    assert_eq!(
        Err(InvalidInput::NonFiniteCoordinate { round: 3 }),
        killmap::compute_bounds(&kills, &Config::default())
    );
}

#[test]
fn normalize_into_canvas() {
    let bounds = Bounds {
        min_x: 99.0,
        max_x: 101.0,
        min_y: 0.0,
        max_y: 1000.0,
    };
    let canvas = Canvas::new(600.0);

    assert_eq!(Ok(Point { x: 20.0, y: 20.0 }), bounds.normalize(99.0, 0.0, &canvas));
    assert_eq!(Ok(Point { x: 580.0, y: 580.0 }), bounds.normalize(101.0, 1000.0, &canvas));
    assert_eq!(Ok(Point { x: 300.0, y: 300.0 }), bounds.normalize(100.0, 500.0, &canvas));

    let no_margin = canvas.with_margin(0.0);
    assert_eq!(Ok(Point { x: 600.0, y: 0.0 }), bounds.normalize(101.0, 0.0, &no_margin));
}

#[test]
fn normalize_rejects_non_finite_points() {
    let canvas = Canvas::new(600.0);

    assert!(matches!(
        Bounds::UNIT.normalize(f64::NAN, 0.5, &canvas),
        Err(InvalidInput::NonFinitePoint { .. })
    ));
    assert!(matches!(
        Bounds::UNIT.normalize(0.5, f64::INFINITY, &canvas),
        Err(InvalidInput::NonFinitePoint { .. })
    ));
}

#[test]
fn normalize_rejects_degenerate_bounds() {
    let canvas = Canvas::new(600.0);

    let flat = Bounds {
        min_x: 50.0,
        max_x: 50.0,
        min_y: 0.0,
        max_y: 1.0,
    };
    assert_eq!(Err(InvalidInput::DegenerateBounds), flat.normalize(50.0, 0.5, &canvas));

    let unbounded = Bounds {
        min_x: f64::NEG_INFINITY,
        max_x: f64::INFINITY,
        min_y: 0.0,
        max_y: 1.0,
    };
    assert_eq!(Err(InvalidInput::DegenerateBounds), unbounded.normalize(0.0, 0.5, &canvas));
}

#[test]
fn overflowing_range_is_rejected() {
    let kills = vec![kill(4, "a", "b", "awp", (-1e308, 0.0), (1e308, 10.0))];

    assert_eq!(
        Err(InvalidInput::DegenerateBounds),
        killmap::compute_bounds(&kills, &Config::default())
    );
    assert_eq!(
        Err(InvalidInput::DegenerateBounds),
        killmap::kill_markers(&kills, &KillFilter::default(), &Canvas::new(600.0), &Config::default())
    );
}

#[test]
fn negative_padding_is_rejected() {
    let config = Config {
        bounds_padding: -0.5,
        ..Config::default()
    };
    let kills = vec![kill(1, "a", "b", "ak47", (0.0, 0.0), (100.0, 100.0))];

    assert_eq!(
        Err(InvalidInput::InvalidPadding { padding: -0.5 }),
        killmap::compute_bounds(&kills, &config)
    );
    assert!(killmap::compute_bounds(&[], &config).is_err());
}

#[test]
fn zero_padding_keeps_exact_range() {
    let config = Config {
        bounds_padding: 0.0,
        ..Config::default()
    };
    let kills = vec![kill(1, "a", "b", "ak47", (0.0, 20.0), (100.0, 20.0))];

    assert_eq!(
        Bounds {
            min_x: 0.0,
            max_x: 100.0,
            min_y: 19.0,
            max_y: 21.0,
        },
        killmap::compute_bounds(&kills, &config).unwrap()
    );
}

#[test]
fn filter_by_round_and_weapon() {
    let kills = sample_kills();

    let filter = KillFilter {
        round: Some(5),
        weapon: Some("ak47".to_owned()),
        ..KillFilter::default()
    };
    let result = killmap::filter_kills(&kills, &filter);

    assert_eq!(2, result.len());
    assert!(result.iter().all(|k| k.round_number == 5 && k.weapon == "ak47"));
}

#[test]
fn player_filter_matches_attacker_or_victim() {
    let kills = sample_kills();

    let filter = KillFilter {
        player_id: Some("a1".to_owned()),
        ..KillFilter::default()
    };
    let result = killmap::filter_kills(&kills, &filter);

    assert_eq!(
        vec![("a1", "b1"), ("b3", "a1"), ("a1", "b3")],
        result
            .iter()
            .map(|k| (k.attacker_steam_id.as_str(), k.victim_steam_id.as_str()))
            .collect::<Vec<_>>()
    );
}

#[test]
fn unset_filter_keeps_everything() {
    let kills = sample_kills();

    assert_eq!(kills.len(), killmap::filter_kills(&kills, &KillFilter::default()).len());
    assert_eq!(KillFilter::default(), KillFilter::from_selection(0, "", ""));
    assert_eq!(
        KillFilter {
            round: Some(7),
            player_id: None,
            weapon: Some("awp".to_owned()),
        },
        KillFilter::from_selection(7, "", "awp")
    );
}

#[test]
fn weapons_sorted_and_unique() {
    assert_eq!(
        vec!["ak47", "awp", "usp_silencer"],
        killmap::distinct_weapons(&sample_kills())
    );
}

#[test]
fn markers_use_bounds_of_all_kills() {
    let kills = vec![
        kill(1, "a", "b", "ak47", (0.0, 0.0), (100.0, 100.0)),
        kill(2, "a", "b", "awp", (50.0, 50.0), (50.0, 50.0)),
    ];
    let filter = KillFilter {
        round: Some(2),
        ..KillFilter::default()
    };

    let markers =
        killmap::kill_markers(&kills, &filter, &Canvas::new(600.0), &Config::default()).unwrap();

    assert_eq!(1, markers.len());
    assert_eq!(2, markers[0].kill.round_number);
    assert_eq!(Point { x: 300.0, y: 300.0 }, markers[0].attacker);
}
