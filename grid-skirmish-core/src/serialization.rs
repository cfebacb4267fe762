use crate::numeric_types::{HitPoints, MapDistance};
use crate::{Color, Error, Vector};

// Faction a unit fights for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Player,
    Enemy,
}

impl Team {
    // Color used when a unit has no image to draw
    pub fn color(self) -> Color {
        match self {
            Team::Player => Color::BLUE,
            Team::Enemy => Color::RED,
        }
    }
}

// Kind of unit to deploy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Class {
    Melee,
    Archer,
}

// Combat statistics shared by every kind of unit
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stats {
    pub health: HitPoints,
    pub attack_power: HitPoints,
    pub defense: HitPoints,
    pub speed: MapDistance,
    pub vision: MapDistance,
}

// Serialized format for a single unit in a lineup
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct UnitTemplate {
    pub class: Class,
    pub team: Team,
    pub position: Vector<MapDistance>,
    pub stats: Stats,
    pub image: String,
}

// Serialized format for the units placed on the board at the start of a game
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Lineup {
    pub units: Vec<UnitTemplate>,
}

impl Lineup {
    // Rejects lineups that place a unit off the board
    pub fn validate(&self) -> Result<(), Error> {
        match self.units.iter().find(|u| !u.position.on_grid()) {
            Some(u) => Err(Error::OffGrid {
                x: u.position.x.value,
                y: u.position.y.value,
            }),
            None => Ok(()),
        }
    }
}
