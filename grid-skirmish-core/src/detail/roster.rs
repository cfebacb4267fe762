use crate::numeric_types::MapDistance;
use crate::serialization::Lineup;
use crate::*;

// Identifies a unit in a roster. Ids are never reused, so an id held after its unit was removed
// simply stops resolving
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitId(usize);

impl UnitId {
    #[cfg(test)]
    pub(crate) fn from_index(index: usize) -> Self {
        UnitId(index)
    }
}

// Every unit in play, addressed by id
pub struct Roster<P: Platform> {
    units: Vec<Option<Unit<P>>>,
}

impl<P: Platform> Default for Roster<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Platform> Roster<P> {
    pub fn new() -> Self {
        Self { units: Vec::new() }
    }

    // Builds every unit in a lineup, loading the images concurrently
    pub async fn from_lineup(lineup: &Lineup) -> Result<Self, Error> {
        let loads = lineup.units.iter().map(|t| Unit::<P>::from_template(t));
        let units = futures::future::try_join_all(loads).await?;
        let mut roster = Self::new();
        for u in units.into_iter() {
            roster.add(u);
        }
        Ok(roster)
    }

    pub fn add(&mut self, unit: Unit<P>) -> UnitId {
        self.units.push(Some(unit));
        UnitId(self.units.len() - 1)
    }

    pub fn remove(&mut self, id: UnitId) -> Option<Unit<P>> {
        self.units.get_mut(id.0)?.take()
    }

    pub fn get(&self, id: UnitId) -> Option<&Unit<P>> {
        self.units.get(id.0)?.as_ref()
    }

    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut Unit<P>> {
        self.units.get_mut(id.0)?.as_mut()
    }

    pub fn len(&self) -> usize {
        self.units.iter().filter(|u| u.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (UnitId, &Unit<P>)> {
        self.units
            .iter()
            .enumerate()
            .filter_map(|(i, u)| Some((UnitId(i), u.as_ref()?)))
    }

    pub fn unit_at(&self, position: Vector<MapDistance>) -> Option<UnitId> {
        self.iter()
            .find(|(_, u)| u.position() == position)
            .map(|(id, _)| id)
    }

    pub fn selected(&self) -> impl Iterator<Item = (UnitId, &Unit<P>)> {
        self.iter().filter(|(_, u)| u.is_selected)
    }

    // Borrows two distinct units mutably at once
    fn pair_mut(&mut self, first: UnitId, second: UnitId) -> Option<(&mut Unit<P>, &mut Unit<P>)> {
        if first == second {
            return None;
        }
        let (low, high) = if first < second {
            (first.0, second.0)
        } else {
            (second.0, first.0)
        };
        if high >= self.units.len() {
            return None;
        }
        let (head, tail) = self.units.split_at_mut(high);
        let low_unit = head[low].as_mut()?;
        let high_unit = tail[0].as_mut()?;
        if first < second {
            Some((low_unit, high_unit))
        } else {
            Some((high_unit, low_unit))
        }
    }

    pub fn attack(&mut self, attacker: UnitId, target: UnitId) -> bool {
        match self.pair_mut(attacker, target) {
            Some((a, t)) => a.attack(t),
            None => false,
        }
    }

    pub fn normal_arrow(&mut self, archer: UnitId, target: UnitId) -> bool {
        match self.pair_mut(archer, target) {
            Some((a, t)) => a.normal_arrow(t),
            None => false,
        }
    }

    pub fn fire_arrow(&mut self, archer: UnitId, target: UnitId) -> bool {
        match self.pair_mut(archer, target) {
            Some((a, t)) => a.fire_arrow(target, t),
            None => false,
        }
    }

    // Applies one turn of every burn registered by an archer and returns how many targets took
    // damage. Burns that have run out, or whose target has left the roster, are dropped
    pub fn apply_dot(&mut self, archer: UnitId) -> usize {
        let mut dots = match self.get_mut(archer).and_then(Unit::ranged_mut) {
            Some(ranged) => ranged.take_dots(),
            None => return 0,
        };
        let mut applied = 0;
        dots.retain(|target, effect| {
            let unit = match self.get_mut(*target) {
                Some(u) => u,
                None => return false,
            };
            if effect.remaining_turns > 0 {
                unit.take_damage(effect.damage);
                effect.remaining_turns -= 1;
                applied += 1;
                log::debug!(
                    "{:?} burns for {}, {} turns left",
                    target,
                    effect.damage.value,
                    effect.remaining_turns
                );
            }
            effect.remaining_turns > 0
        });
        if let Some(ranged) = self.get_mut(archer).and_then(Unit::ranged_mut) {
            ranged.restore_dots(dots);
        }
        applied
    }

    // Runs one turn of burns for every archer in play
    pub fn apply_all_dots(&mut self) -> usize {
        let archers = self
            .iter()
            .filter(|(_, u)| u.ranged().is_some())
            .map(|(id, _)| id)
            .collect::<Vec<_>>();
        archers.into_iter().map(|id| self.apply_dot(id)).sum()
    }

    // Draws every unit with a health bar showing its current health
    pub fn draw(&self, platform: &P) {
        for (_, u) in self.iter() {
            u.draw(platform);
            u.draw_healthbar(platform, u.health);
        }
    }
}
