use futures::executor::block_on;
use grid_skirmish_core::numeric_types::*;
use grid_skirmish_core::serialization::{Class, Lineup, Team, UnitTemplate};
use grid_skirmish_core::{Error, Platform, Roster, Vector};
use grid_skirmish_tests::*;

fn template(class: Class, team: Team, x: i32, y: i32, image: &str) -> UnitTemplate {
    UnitTemplate {
        class,
        team,
        position: Vector::new(x, y),
        stats: stats(100, 10),
        image: image.to_owned(),
    }
}

fn shipped_lineup() -> Lineup {
    Lineup {
        units: vec![
            template(Class::Melee, Team::Player, 0, 0, "blue/knight.png"),
            template(Class::Archer, Team::Player, 1, 0, "blue/archer.png"),
            template(Class::Melee, Team::Enemy, 6, 7, "red/knight.png"),
        ],
    }
}

fn encoded(lineup: &Lineup) -> Vec<u8> {
    rmp_serde::encode::to_vec(lineup).expect("lineup should encode")
}

#[test]
fn deploys_the_shipped_lineup() {
    let (platform, _expected) = TestPlatform::new();
    let platform = platform.with_file("lineups/skirmish.lineup", encoded(&shipped_lineup()));

    let roster = block_on(grid_skirmish_core::deploy(&platform, "skirmish")).expect("deployed");
    assert_eq!(roster.len(), 3);

    let units = roster.iter().map(|(_, u)| u).collect::<Vec<_>>();
    assert_eq!(units[1].class(), Class::Archer);
    assert_eq!(units[2].team, Team::Enemy);
    assert_eq!(units[2].position(), Vector::new(6, 7));
    assert_eq!(units[0].attack_power, hp(10));
    assert!(units.iter().all(|u| u.has_image()));
}

#[test]
fn user_lineup_takes_precedence() {
    let json = r#"{
        "units": [
            {
                "class": "archer",
                "team": "enemy",
                "position": { "x": 5, "y": 2 },
                "stats": { "health": 70, "attack_power": 12, "defense": 3, "speed": 2, "vision": 6 },
                "image": "red/archer.png"
            }
        ]
    }"#;
    let (platform, _expected) = TestPlatform::new();
    let platform = platform
        .with_file("lineups/skirmish.lineup", encoded(&shipped_lineup()))
        .with_user_file("lineup.json", json.as_bytes().to_vec());

    let lineup = block_on(platform.get_lineup("skirmish")).expect("lineup should load");
    assert_eq!(lineup.units.len(), 1);
    assert_eq!(lineup.units[0].class, Class::Archer);
    assert_eq!(lineup.units[0].stats.health, hp(70));
    assert_eq!(lineup.units[0].stats.vision, map_dist(6));
}

#[test]
fn missing_lineup_is_a_file_error() {
    let (platform, _expected) = TestPlatform::new();
    let result = block_on(platform.get_lineup("nowhere"));
    assert!(matches!(result, Err(Error::File(_))));
}

#[test]
fn corrupt_lineup_is_a_decode_error() {
    let (platform, _expected) = TestPlatform::new();
    let platform = platform.with_file("lineups/broken.lineup", vec![0xc1, 0x00]);
    let result = block_on(platform.get_lineup("broken"));
    assert!(matches!(result, Err(Error::Decode(_))));
}

#[test]
fn lineups_must_stay_on_the_board() {
    let mut lineup = shipped_lineup();
    lineup
        .units
        .push(template(Class::Melee, Team::Enemy, 3, 8, "red/knight.png"));
    let (platform, _expected) = TestPlatform::new();
    let platform = platform.with_file("lineups/skirmish.lineup", encoded(&lineup));

    let result = block_on(platform.get_lineup("skirmish"));
    assert!(matches!(result, Err(Error::OffGrid { x: 3, y: 8 })));
    assert!(block_on(grid_skirmish_core::deploy(&platform, "skirmish")).is_none());
}

#[test]
fn missing_image_aborts_the_deployment() {
    let mut lineup = shipped_lineup();
    lineup.units[1].image = format!("{}/archer.png", MISSING_PREFIX);

    let result = block_on(Roster::<TestPlatform>::from_lineup(&lineup));
    match result {
        Err(Error::ImageLoad { path }) => assert_eq!(path, "missing/archer.png"),
        _ => panic!("expected an image load failure"),
    }
}

#[test]
fn sample_lineup_is_valid() {
    let json = include_str!("../../../json-files/skirmish.json");
    let lineup: Lineup = serde_json::from_str(json).expect("sample lineup should parse");
    assert!(lineup.validate().is_ok());
    assert_eq!(lineup.units.len(), 4);

    let decoded: Lineup = rmp_serde::decode::from_read_ref(&encoded(&lineup)).expect("decodes");
    assert_eq!(decoded.units[3].position, Vector::new(7, 0));
    assert_eq!(decoded.units[3].class, Class::Archer);
}
