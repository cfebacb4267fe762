use std::collections::BTreeMap;

use num_traits::FromPrimitive;

use crate::numeric_types::{hp, HitPoints, MapDistance};
use crate::serialization::{Class, Stats, Team, UnitTemplate};
use crate::*;

use super::constants::*;

// Damage-over-time effect left on a target by a fire arrow
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotEffect {
    pub damage: HitPoints,
    pub remaining_turns: u32,
}

// Ranged ability carried by archers. Burning targets are tracked by id; the archer never owns
// them
#[derive(Clone, Debug)]
pub struct Ranged {
    pub range: MapDistance,
    dot_targets: BTreeMap<UnitId, DotEffect>,
}

impl Ranged {
    fn new() -> Self {
        Self {
            range: ARCHER_RANGE,
            dot_targets: BTreeMap::new(),
        }
    }

    pub fn dot_targets(&self) -> &BTreeMap<UnitId, DotEffect> {
        &self.dot_targets
    }

    pub fn dot_on(&self, target: UnitId) -> Option<&DotEffect> {
        self.dot_targets.get(&target)
    }

    pub(super) fn take_dots(&mut self) -> BTreeMap<UnitId, DotEffect> {
        std::mem::take(&mut self.dot_targets)
    }

    pub(super) fn restore_dots(&mut self, dots: BTreeMap<UnitId, DotEffect>) {
        self.dot_targets = dots;
    }
}

pub enum UnitKind {
    Melee,
    Archer(Ranged),
}

// A unit on the board
pub struct Unit<P: Platform> {
    position: Vector<MapDistance>,
    pub health: HitPoints,
    pub attack_power: HitPoints,
    // Stored but never applied to incoming damage
    pub defense: HitPoints,
    pub speed: MapDistance,
    pub vision: MapDistance,
    pub team: Team,
    pub is_selected: bool,
    pub kind: UnitKind,
    image: Option<P::Image>,
}

fn check_position(position: Vector<MapDistance>) -> Result<(), Error> {
    if position.on_grid() {
        Ok(())
    } else {
        Err(Error::OffGrid {
            x: position.x.value,
            y: position.y.value,
        })
    }
}

impl<P: Platform> Unit<P> {
    pub fn new(
        class: Class,
        team: Team,
        position: Vector<MapDistance>,
        stats: Stats,
        image: Option<P::Image>,
    ) -> Result<Self, Error> {
        check_position(position)?;
        let kind = match class {
            Class::Melee => UnitKind::Melee,
            Class::Archer => UnitKind::Archer(Ranged::new()),
        };
        Ok(Self {
            position,
            health: stats.health,
            attack_power: stats.attack_power,
            defense: stats.defense,
            speed: stats.speed,
            vision: stats.vision,
            team,
            is_selected: false,
            kind,
            image,
        })
    }

    // Builds a unit without an image; it is drawn as a square in its team color
    pub fn headless(
        class: Class,
        team: Team,
        position: Vector<MapDistance>,
        stats: Stats,
    ) -> Result<Self, Error> {
        Self::new(class, team, position, stats, None)
    }

    // Builds a unit and loads its image. The image is loaded once and kept for every draw
    pub async fn load(
        class: Class,
        team: Team,
        position: Vector<MapDistance>,
        stats: Stats,
        image_path: &str,
    ) -> Result<Self, Error> {
        check_position(position)?;
        let image = P::get_image(image_path)
            .await
            .ok_or_else(|| Error::ImageLoad {
                path: image_path.to_owned(),
            })?;
        Self::new(class, team, position, stats, Some(image))
    }

    pub async fn from_template(template: &UnitTemplate) -> Result<Self, Error> {
        Self::load(
            template.class,
            template.team,
            template.position,
            template.stats,
            template.image.as_str(),
        )
        .await
    }

    pub fn position(&self) -> Vector<MapDistance> {
        self.position
    }

    pub fn class(&self) -> Class {
        match self.kind {
            UnitKind::Melee => Class::Melee,
            UnitKind::Archer(_) => Class::Archer,
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn ranged(&self) -> Option<&Ranged> {
        match &self.kind {
            UnitKind::Archer(ranged) => Some(ranged),
            UnitKind::Melee => None,
        }
    }

    pub fn ranged_mut(&mut self) -> Option<&mut Ranged> {
        match &mut self.kind {
            UnitKind::Archer(ranged) => Some(ranged),
            UnitKind::Melee => None,
        }
    }

    pub fn distance_to(&self, target: &Unit<P>) -> MapDistance {
        self.position.chebyshev_distance(target.position)
    }

    // Moves by an offset. Moves that would leave the board are rejected whole, including offsets
    // too large to add to the current position
    pub fn move_by(&mut self, dx: MapDistance, dy: MapDistance) -> bool {
        let x = self.position.x.value.checked_add(dx.value);
        let y = self.position.y.value.checked_add(dy.value);
        let destination = match (x, y) {
            (Some(x), Some(y)) => Vector::new(x, y),
            _ => {
                log::trace!("rejected move by ({}, {})", dx.value, dy.value);
                return false;
            }
        };
        if !destination.on_grid() {
            log::trace!(
                "rejected move to ({}, {})",
                destination.x.value,
                destination.y.value
            );
            return false;
        }
        self.position = destination;
        true
    }

    // Health has no floor; it saturates at the bounds of i32 instead of wrapping
    pub(super) fn take_damage(&mut self, damage: HitPoints) {
        self.health = hp(self.health.value.saturating_sub(damage.value));
    }

    // Melee attack against an adjacent unit (diagonals included)
    pub fn attack(&self, target: &mut Unit<P>) -> bool {
        if self.distance_to(target) > MELEE_REACH {
            return false;
        }
        target.take_damage(self.attack_power);
        log::debug!(
            "melee hit for {}, target health now {}",
            self.attack_power.value,
            target.health.value
        );
        true
    }

    // Whether the target is within bow range. Both axes are bounded by the range; units without a
    // bow have no range at all
    pub fn in_range(&self, target: &Unit<P>) -> bool {
        match self.ranged() {
            Some(ranged) => self.distance_to(target) <= ranged.range,
            None => false,
        }
    }

    pub fn normal_arrow(&self, target: &mut Unit<P>) -> bool {
        if !self.in_range(target) {
            return false;
        }
        target.take_damage(self.attack_power);
        log::debug!(
            "arrow hit for {}, target health now {}",
            self.attack_power.value,
            target.health.value
        );
        true
    }

    // Deals half damage now and sets the target burning for a quarter of the attack power on each
    // of the next few turns. A second fire arrow on the same target restarts the burn. The id must
    // be the target's own, so only the roster calls this
    pub(crate) fn fire_arrow(&mut self, target_id: UnitId, target: &mut Unit<P>) -> bool {
        if !self.in_range(target) {
            return false;
        }
        let initial_damage = hp(self.attack_power.value / 2);
        let dot_damage = hp(self.attack_power.value / 4);
        target.take_damage(initial_damage);
        if let Some(ranged) = self.ranged_mut() {
            ranged.dot_targets.insert(
                target_id,
                DotEffect {
                    damage: dot_damage,
                    remaining_turns: FIRE_ARROW_TURNS,
                },
            );
        }
        log::debug!(
            "fire arrow hit for {}, burning {:?} for {} per turn",
            initial_damage.value,
            target_id,
            dot_damage.value
        );
        true
    }

    // Screen rectangle covered by the unit's tile
    pub fn cell(&self) -> Rectangle<P::ScreenDistance> {
        let cell_size = Vector {
            x: CELL_SIZE,
            y: CELL_SIZE,
        };
        Rectangle {
            top_left: self.position.values().piecewise_multiply(cell_size).cast(),
            size: cell_size.cast(),
        }
    }

    pub fn draw(&self, platform: &P) {
        let cell = self.cell();
        match &self.image {
            Some(image) => platform.draw(image, &cell),
            None => platform.fill(self.team.color(), &cell),
        }
    }

    // Width of the green part of a health bar. Health is measured against FULL_HEALTH rather than
    // the unit's starting health, and is not clamped
    pub fn healthbar_width(health: HitPoints) -> P::ScreenDistance {
        let width = f64::from(CELL_SIZE) * f64::from(health.value) / f64::from(FULL_HEALTH.value);
        P::ScreenDistance::from_f64(width).unwrap_or_else(|| 0.into())
    }

    // Draws a health bar just above the unit's tile
    pub fn draw_healthbar(&self, platform: &P, health: HitPoints) {
        let position = self.position.values();
        let background: Rectangle<P::ScreenDistance> = Rectangle {
            top_left: Vector {
                x: position.x * CELL_SIZE,
                y: position.y * CELL_SIZE - HEALTHBAR_HEIGHT - HEALTHBAR_GAP,
            }
            .cast(),
            size: Vector {
                x: CELL_SIZE,
                y: HEALTHBAR_HEIGHT,
            }
            .cast(),
        };
        platform.fill(Color::RED, &background);

        let remaining = Rectangle {
            size: Vector {
                x: Self::healthbar_width(health),
                y: background.height(),
            },
            ..background
        };
        platform.fill(Color::GREEN, &remaining);
    }
}
