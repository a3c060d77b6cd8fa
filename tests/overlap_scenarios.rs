//! End-to-end lineup scenarios for the overlap validator

use volley_overlap::validation::ViolationFamily;
use volley_overlap::{
    Lineup, OverlapValidator, PlayerState, Point, Role, RotationSlot, Tolerance, ViolationCode,
};

fn legal_lineup() -> Vec<PlayerState> {
    vec![
        PlayerState::new("ana", 1, 7.0, 8.0)
            .with_role(Role::Setter)
            .with_name("Ana")
            .serving(),
        PlayerState::new("bea", 2, 8.0, 4.0).with_role(Role::Opposite),
        PlayerState::new("cam", 3, 4.5, 4.0).with_role(Role::MiddleBlocker1),
        PlayerState::new("dee", 4, 1.0, 4.0).with_role(Role::OutsideHitter1),
        PlayerState::new("eve", 5, 2.0, 8.0).with_role(Role::OutsideHitter2),
        PlayerState::new("fay", 6, 4.5, 8.0).with_role(Role::MiddleBlocker2),
    ]
}

fn moved(slot: u8, x: f64, y: f64) -> Vec<PlayerState> {
    let mut players = legal_lineup();
    for p in players.iter_mut().filter(|p| p.slot == slot) {
        p.x = x;
        p.y = y;
    }
    players
}

#[test]
fn test_legal_lineup_passes() {
    let result = OverlapValidator::default().validate(&legal_lineup());
    assert!(result.is_legal);
    assert!(result.violations.is_empty());
}

#[test]
fn test_row_order_violation() {
    let result = OverlapValidator::default().validate(&moved(3, 8.0, 4.0));
    assert!(!result.is_legal);

    let v = result
        .violations_with(ViolationCode::RowOrder)
        .find(|v| v.involves(RotationSlot::RightFront) && v.involves(RotationSlot::MiddleFront))
        .expect("row order violation for slots 2 and 3");
    assert_eq!(v.slots.len(), 2);
    assert!(v.message.contains("MB MF"));
    assert!(v.coordinates.is_some());
}

#[test]
fn test_front_back_violation() {
    let result = OverlapValidator::default().validate(&moved(4, 1.0, 8.0));
    assert!(!result.is_legal);
    let v = result
        .violations_with(ViolationCode::FrontBack)
        .next()
        .expect("front/back violation");
    assert_eq!(v.slots, vec![RotationSlot::LeftFront, RotationSlot::LeftBack]);
}

#[test]
fn test_front_back_when_back_player_moves_forward() {
    let result = OverlapValidator::default().validate(&moved(5, 2.0, 3.0));
    assert!(result.has_code(ViolationCode::FrontBack));
    assert!(!result.has_code(ViolationCode::RowOrder));
}

#[test]
fn test_multiple_servers() {
    let mut players = legal_lineup();
    players[3].is_server = true;
    let result = OverlapValidator::default().validate(&players);
    assert!(!result.is_legal);
    assert!(result.has_code(ViolationCode::MultipleServers));
    assert_eq!(
        result.violations[0].family(),
        ViolationFamily::MultipleServers
    );
}

#[test]
fn test_no_server() {
    let mut players = legal_lineup();
    players[0].is_server = false;
    let result = OverlapValidator::default().validate(&players);
    assert!(result.has_code(ViolationCode::NoServer));
}

#[test]
fn test_five_players() {
    let mut players = legal_lineup();
    players.pop();
    let result = OverlapValidator::default().validate(&players);
    assert!(!result.is_legal);
    assert!(result.has_code(ViolationCode::InvalidPlayerCount));
    assert!(result
        .violations
        .iter()
        .all(|v| v.family() == ViolationFamily::InvalidLineup));
}

#[test]
fn test_shared_slot() {
    let mut players = legal_lineup();
    players[1].slot = 1;
    let result = OverlapValidator::default().validate(&players);
    assert!(result.has_code(ViolationCode::DuplicateSlot));
    assert!(!result.has_code(ViolationCode::RowOrder));
}

#[test]
fn test_garbage_input_still_reports() {
    let players = vec![
        PlayerState::new("x", 0, f64::NAN, f64::INFINITY),
        PlayerState::new("y", 9, -1.0, 100.0),
    ];
    let result = OverlapValidator::default().validate(&players);
    assert!(!result.is_legal);
    for code in [
        ViolationCode::InvalidPlayerCount,
        ViolationCode::InvalidSlot,
        ViolationCode::NoServer,
        ViolationCode::InvalidCoordinates,
    ] {
        assert!(result.has_code(code), "missing {code}");
    }
}

#[test]
fn test_empty_lineup() {
    let result = OverlapValidator::default().validate(&[]);
    assert!(!result.is_legal);
    assert!(result.has_code(ViolationCode::InvalidPlayerCount));
}

#[test]
fn test_server_exempt_in_service_zone() {
    let result = OverlapValidator::default().validate(&moved(1, 7.0, 10.0));
    assert!(!result.has_code(ViolationCode::FrontBack));
    assert!(result.is_legal);
}

#[test]
fn test_server_still_bound_by_row_order() {
    // Serving from the left of the service zone crosses slot 6
    let result = OverlapValidator::default().validate(&moved(1, 3.0, 10.0));
    assert!(!result.is_legal);
    let v = result.violations_with(ViolationCode::RowOrder).next().unwrap();
    assert_eq!(v.slots, vec![RotationSlot::MiddleBack, RotationSlot::RightBack]);
}

#[test]
fn test_server_past_service_zone_is_not_exempt() {
    let mut players = moved(1, 7.0, 11.5);
    // Front counterpart deep on court so only the exemption decides
    for p in players.iter_mut().filter(|p| p.slot == 2) {
        p.y = 11.6;
    }
    let result = OverlapValidator::default().validate(&players);
    assert!(result.has_code(ViolationCode::FrontBack));
}

#[test]
fn test_server_just_past_endline_is_not_exempt() {
    // Server just barely behind the endline does not count as in the zone
    let mut players = moved(1, 7.0, 9.02);
    for p in players.iter_mut().filter(|p| p.slot == 2) {
        p.y = 9.0;
    }
    let result = OverlapValidator::default().validate(&players);
    assert!(result.has_code(ViolationCode::FrontBack));
}

#[test]
fn test_every_violated_pair_reported_once() {
    // Mirror the whole lineup left-right: every row pair inverts
    let players: Vec<PlayerState> = legal_lineup()
        .into_iter()
        .map(|mut p| {
            p.x = 9.0 - p.x;
            p
        })
        .collect();
    let result = OverlapValidator::default().validate(&players);
    let row: Vec<_> = result.violations_with(ViolationCode::RowOrder).collect();
    assert_eq!(row.len(), 4);
    let order: Vec<(u8, u8)> = row
        .iter()
        .map(|v| (v.slots[0].number(), v.slots[1].number()))
        .collect();
    assert_eq!(order, vec![(4, 3), (3, 2), (5, 6), (6, 1)]);
}

#[test]
fn test_validation_is_deterministic() {
    let validator = OverlapValidator::default();
    let players = moved(3, 8.0, 9.0);
    assert_eq!(validator.validate(&players), validator.validate(&players));
}

#[test]
fn test_custom_tolerance_changes_verdict() {
    // 0.1 m apart: legal at 3 cm, overlapping at 20 cm
    let players = moved(3, 7.9, 4.0);
    assert!(OverlapValidator::new(Tolerance::default()).validate(&players).is_legal);
    assert!(!OverlapValidator::new(Tolerance::new(0.2)).validate(&players).is_legal);
}

#[test]
fn test_validate_lineup_matches_validate() {
    let validator = OverlapValidator::default();
    let lineup = Lineup::new(legal_lineup()).unwrap();
    let moved = lineup.with_position(RotationSlot::LeftFront, Point::new(5.0, 4.0));
    assert_eq!(
        validator.validate_lineup(&moved),
        validator.validate(moved.players())
    );
}

#[test]
fn test_result_json_shape() {
    let result = OverlapValidator::default().validate(&moved(4, 1.0, 8.0));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["isLegal"], false);
    assert_eq!(json["violations"][0]["code"], "FRONT_BACK");
    assert_eq!(json["violations"][0]["slots"], serde_json::json!([4, 5]));
}

#[test]
fn test_lineup_parses_from_host_json() {
    let json = r#"[
        {"id": "a", "slot": 1, "x": 7, "y": 8, "isServer": true, "role": "setter"},
        {"id": "b", "slot": 2, "x": 8, "y": 4},
        {"id": "c", "slot": 3, "x": 4.5, "y": 4},
        {"id": "d", "slot": 4, "x": 1, "y": 4},
        {"id": "e", "slot": 5, "x": 2, "y": 8},
        {"id": "f", "slot": 6, "x": 4.5, "y": 8}
    ]"#;
    let players: Vec<PlayerState> = serde_json::from_str(json).unwrap();
    assert!(OverlapValidator::default().validate(&players).is_legal);
}

#[test]
fn test_demo_lineups() {
    let legal: Vec<PlayerState> =
        serde_json::from_str(include_str!("../demos/lineup_legal.json")).unwrap();
    let overlap: Vec<PlayerState> =
        serde_json::from_str(include_str!("../demos/lineup_overlap.json")).unwrap();

    let validator = OverlapValidator::default();
    assert!(validator.validate(&legal).is_legal);

    let result = validator.validate(&overlap);
    assert!(result.has_code(ViolationCode::RowOrder));
    assert!(result.has_code(ViolationCode::FrontBack));
}
