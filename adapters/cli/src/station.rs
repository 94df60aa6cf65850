//! Procedurally generated station grid serving as the organism's host.
//!
//! The station is a rectangle of hull floor surrounded by open space,
//! with interior walls and a wandering-free crew sprinkled from a seeded
//! RNG. It implements the host traits the world mutates through, so the
//! whole simulation stays deterministic for a given seed.

use std::collections::BTreeMap;

use overmind_core::{
    ActorHandle, ActorSpawner, AttackKind, DamageKind, DamageTarget, GridPoint, Occupant,
    OccupantFilter, SpawnKind, WorldGrid,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const WALL_INTEGRITY: u32 = 80;
const CREW_HEALTH: u32 = 100;
const WALL_DENSITY: f64 = 0.08;

#[derive(Clone, Copy, Debug)]
struct Crew {
    at: GridPoint,
    health: u32,
}

/// Deterministic station host backing a command-line session.
#[derive(Debug)]
pub(crate) struct Station {
    width: i32,
    height: i32,
    walls: BTreeMap<GridPoint, u32>,
    crew: BTreeMap<ActorHandle, Crew>,
    organisms: BTreeMap<ActorHandle, GridPoint>,
    next_handle: u64,
    walls_breached: u32,
    crew_downed: u32,
}

impl Station {
    /// Generates a station of the given size from a seed.
    pub(crate) fn generate(width: i32, height: i32, crew_count: u32, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut station = Self {
            width,
            height,
            walls: BTreeMap::new(),
            crew: BTreeMap::new(),
            organisms: BTreeMap::new(),
            next_handle: 0,
            walls_breached: 0,
            crew_downed: 0,
        };

        for y in 0..height {
            for x in 0..width {
                // Keep the centre open so the core always has room.
                let near_centre =
                    (x - width / 2).abs() <= 2 && (y - height / 2).abs() <= 2;
                if !near_centre && rng.gen_bool(WALL_DENSITY) {
                    let _ = station
                        .walls
                        .insert(GridPoint::new(x, y), WALL_INTEGRITY);
                }
            }
        }

        for _ in 0..crew_count {
            let at = GridPoint::new(rng.gen_range(0..width), rng.gen_range(0..height));
            if station.walls.contains_key(&at) {
                continue;
            }
            let handle = station.allocate();
            let _ = station.crew.insert(
                handle,
                Crew {
                    at,
                    health: CREW_HEALTH,
                },
            );
        }

        station
    }

    /// Coordinate at the middle of the hull.
    pub(crate) fn centre(&self) -> GridPoint {
        GridPoint::new(self.width / 2, self.height / 2)
    }

    /// Number of walls the organism has battered down.
    pub(crate) fn walls_breached(&self) -> u32 {
        self.walls_breached
    }

    /// Number of crew members the organism has incapacitated.
    pub(crate) fn crew_downed(&self) -> u32 {
        self.crew_downed
    }

    /// Crew members still on their feet.
    pub(crate) fn crew_standing(&self) -> u32 {
        self.crew.values().filter(|crew| crew.health > 0).count() as u32
    }

    fn allocate(&mut self) -> ActorHandle {
        self.next_handle += 1;
        ActorHandle::new(self.next_handle)
    }

    fn in_hull(&self, at: GridPoint) -> bool {
        at.x() >= 0 && at.x() < self.width && at.y() >= 0 && at.y() < self.height
    }
}

impl WorldGrid for Station {
    fn is_space_at(&self, at: GridPoint) -> bool {
        !self.in_hull(at)
    }

    fn is_passable_at(&self, at: GridPoint) -> bool {
        !self.walls.contains_key(&at)
    }

    fn occupants_at(&self, at: GridPoint, filter: OccupantFilter) -> Vec<Occupant> {
        match filter {
            OccupantFilter::Players => self
                .crew
                .iter()
                .filter(|(_, crew)| crew.at == at)
                .map(|(handle, crew)| Occupant {
                    handle: *handle,
                    living: true,
                    alive: crew.health > 0,
                    passable: true,
                    destructible: false,
                    organism: false,
                })
                .collect(),
            OccupantFilter::Objects => Vec::new(),
        }
    }

    fn apply_damage(
        &mut self,
        target: DamageTarget,
        amount: u32,
        _attack: AttackKind,
        _damage: DamageKind,
    ) {
        match target {
            DamageTarget::Actor(handle) => {
                if let Some(crew) = self.crew.get_mut(&handle) {
                    let was_standing = crew.health > 0;
                    crew.health = crew.health.saturating_sub(amount);
                    if was_standing && crew.health == 0 {
                        self.crew_downed += 1;
                    }
                }
            }
            DamageTarget::Barrier(at) => {
                if let Some(integrity) = self.walls.get_mut(&at) {
                    *integrity = integrity.saturating_sub(amount);
                    if *integrity == 0 {
                        let _ = self.walls.remove(&at);
                        self.walls_breached += 1;
                    }
                }
            }
        }
    }

    fn is_alive(&self, actor: ActorHandle) -> bool {
        self.organisms.contains_key(&actor)
            || self.crew.get(&actor).is_some_and(|crew| crew.health > 0)
    }
}

impl ActorSpawner for Station {
    fn spawn(&mut self, _kind: SpawnKind, at: GridPoint) -> Option<ActorHandle> {
        let handle = self.allocate();
        let _ = self.organisms.insert(handle, at);
        Some(handle)
    }

    fn despawn(&mut self, actor: ActorHandle) {
        let _ = self.organisms.remove(&actor);
    }

    fn relocate(&mut self, actor: ActorHandle, to: GridPoint) {
        if let Some(at) = self.organisms.get_mut(&actor) {
            *at = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = Station::generate(20, 20, 8, 7);
        let b = Station::generate(20, 20, 8, 7);
        assert_eq!(a.walls.keys().collect::<Vec<_>>(), b.walls.keys().collect::<Vec<_>>());
        assert_eq!(a.crew.len(), b.crew.len());
    }

    #[test]
    fn hull_centre_stays_open() {
        let station = Station::generate(20, 20, 0, 99);
        let centre = station.centre();
        assert!(station.is_passable_at(centre));
        assert!(!station.is_space_at(centre));
        assert!(station.is_space_at(GridPoint::new(-1, 0)));
    }

    #[test]
    fn battered_walls_eventually_breach() {
        let mut station = Station::generate(20, 20, 0, 3);
        let wall = *station
            .walls
            .keys()
            .next()
            .expect("generated station has walls");
        for _ in 0..2 {
            station.apply_damage(
                DamageTarget::Barrier(wall),
                WALL_INTEGRITY / 2,
                AttackKind::Melee,
                DamageKind::Brute,
            );
        }
        assert!(station.is_passable_at(wall));
        assert_eq!(station.walls_breached(), 1);
    }
}
