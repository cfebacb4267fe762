use grid_skirmish_core::constants::CELL_SIZE;
use grid_skirmish_core::numeric_types::*;
use grid_skirmish_core::serialization::{Class, Team};
use grid_skirmish_core::{Color, Roster};
use grid_skirmish_tests::*;

#[test]
fn draws_image_on_its_tile() {
    let (platform, expected) = TestPlatform::new();
    let unit = loaded("knight.png", Team::Player, 2, 3);

    let _ = expected.send(image("knight.png", 120, 180, CELL_SIZE, CELL_SIZE));
    unit.draw(&platform);
    platform.assert_done();
}

#[test]
fn image_follows_the_unit() {
    let (platform, expected) = TestPlatform::new();
    let mut unit = loaded("knight.png", Team::Enemy, 7, 0);
    assert!(unit.move_by(map_dist(-2), map_dist(4)));

    let _ = expected.send(image("knight.png", 300, 240, 60, 60));
    unit.draw(&platform);
    platform.assert_done();
}

#[test]
fn falls_back_to_team_colors_without_an_image() {
    let (platform, expected) = TestPlatform::new();
    let player = headless(Class::Melee, Team::Player, 0, 0, 100);
    let enemy = headless(Class::Archer, Team::Enemy, 4, 1, 100);

    let _ = expected.send(fill(Color::BLUE, 0, 0, 60, 60));
    let _ = expected.send(fill(Color::RED, 240, 60, 60, 60));
    player.draw(&platform);
    enemy.draw(&platform);
    platform.assert_done();
}

#[test]
fn healthbar_sits_above_the_tile() {
    let (platform, expected) = TestPlatform::new();
    let unit = headless(Class::Melee, Team::Player, 1, 2, 100);

    let _ = expected.send(fill(Color::RED, 60, 113, 60, 5));
    let _ = expected.send(fill(Color::GREEN, 60, 113, 30, 5));
    unit.draw_healthbar(&platform, hp(50));
    platform.assert_done();
}

#[test]
fn healthbar_is_not_clamped() {
    let (platform, expected) = TestPlatform::new();
    let unit = headless(Class::Melee, Team::Enemy, 0, 0, 150);

    let _ = expected.send(fill(Color::RED, 0, -7, 60, 5));
    let _ = expected.send(fill(Color::GREEN, 0, -7, 90, 5));
    unit.draw_healthbar(&platform, unit.health);
    platform.assert_done();
}

#[test]
fn roster_draws_units_with_their_health() {
    let (platform, expected) = TestPlatform::new();
    let mut roster = Roster::new();
    let knight = roster.add(loaded("knight.png", Team::Player, 0, 1));
    let raider = roster.add(headless(Class::Melee, Team::Enemy, 1, 1, 100));
    assert!(roster.attack(knight, raider));

    let _ = expected.send(image("knight.png", 0, 60, 60, 60));
    let _ = expected.send(fill(Color::RED, 0, 53, 60, 5));
    let _ = expected.send(fill(Color::GREEN, 0, 53, 60, 5));
    let _ = expected.send(fill(Color::RED, 60, 60, 60, 60));
    let _ = expected.send(fill(Color::RED, 60, 53, 60, 5));
    let _ = expected.send(fill(Color::GREEN, 60, 53, 57, 5));
    roster.draw(&platform);
    platform.assert_done();
}
