#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure resolution of placement-or-attack decisions against host occupancy.
//!
//! Given the occupants of a coordinate, [`resolve`] decides whether the
//! organism should strike something, stay silent because the coordinate is
//! already organism structure, or treat the coordinate as clear for growth.
//! The ordering is load-bearing: living targets always outrank inert
//! obstacles, and organism-owned tiles are never attacked by their own
//! organism. Damage delivery stays with the caller so resolution itself is a
//! read-only query.

use overmind_core::{
    AttackKind, Config, DamageKind, DamageTarget, GridPoint, OccupantFilter, WorldGrid,
};

/// Outcome of resolving a coordinate for placement-or-attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Something hostile or obstructive occupies the coordinate; strike it.
    Attacked {
        /// Target the damage should be delivered to.
        target: DamageTarget,
        /// Amount of damage to deliver.
        amount: u32,
        /// Delivery mechanism to report to the host.
        attack: AttackKind,
        /// Damage classification to report to the host.
        damage: DamageKind,
    },
    /// The only impassable occupant is organism structure; silent no-op.
    Blocked,
    /// The coordinate is eligible for growth.
    Clear,
}

/// Resolves the occupancy of `at`, first match wins.
///
/// 1. A living player occupant takes `player_damage`.
/// 2. An impassable non-organism object: a living NPC takes `player_damage`,
///    an inert destructible object takes `object_damage`. Dead occupants and
///    passable clutter (an open door, say) are skipped.
/// 3. If organism structure occupies the coordinate the result is
///    [`Resolution::Blocked`].
/// 4. An impassable bare barrier (wall, window, grille) takes `layer_damage`.
/// 5. Otherwise the coordinate is [`Resolution::Clear`].
#[must_use]
pub fn resolve(grid: &impl WorldGrid, at: GridPoint, config: &Config) -> Resolution {
    for player in grid.occupants_at(at, OccupantFilter::Players) {
        if player.alive {
            return Resolution::Attacked {
                target: DamageTarget::Actor(player.handle),
                amount: config.player_damage,
                attack: AttackKind::Melee,
                damage: DamageKind::Brute,
            };
        }
    }

    let objects = grid.occupants_at(at, OccupantFilter::Objects);

    for hit in objects.iter().filter(|hit| !hit.passable && !hit.organism) {
        if hit.living {
            if hit.alive {
                return Resolution::Attacked {
                    target: DamageTarget::Actor(hit.handle),
                    amount: config.player_damage,
                    attack: AttackKind::Melee,
                    damage: DamageKind::Brute,
                };
            }
            continue;
        }

        if hit.destructible {
            return Resolution::Attacked {
                target: DamageTarget::Actor(hit.handle),
                amount: config.object_damage,
                attack: AttackKind::Melee,
                damage: DamageKind::Brute,
            };
        }
    }

    if objects.iter().any(|hit| hit.organism) {
        return Resolution::Blocked;
    }

    if !grid.is_passable_at(at) {
        return Resolution::Attacked {
            target: DamageTarget::Barrier(at),
            amount: config.layer_damage,
            attack: AttackKind::Melee,
            damage: DamageKind::Brute,
        };
    }

    Resolution::Clear
}

#[cfg(test)]
mod tests {
    use super::{resolve, Resolution};
    use overmind_core::{
        ActorHandle, AttackKind, Config, DamageKind, DamageTarget, GridPoint, Occupant,
        OccupantFilter, WorldGrid,
    };

    struct StubGrid {
        players: Vec<Occupant>,
        objects: Vec<Occupant>,
        passable: bool,
    }

    impl StubGrid {
        fn empty() -> Self {
            Self {
                players: Vec::new(),
                objects: Vec::new(),
                passable: true,
            }
        }
    }

    impl WorldGrid for StubGrid {
        fn is_space_at(&self, _at: GridPoint) -> bool {
            false
        }

        fn is_passable_at(&self, _at: GridPoint) -> bool {
            self.passable
        }

        fn occupants_at(&self, _at: GridPoint, filter: OccupantFilter) -> Vec<Occupant> {
            match filter {
                OccupantFilter::Players => self.players.clone(),
                OccupantFilter::Objects => self.objects.clone(),
            }
        }

        fn apply_damage(
            &mut self,
            _target: DamageTarget,
            _amount: u32,
            _attack: AttackKind,
            _damage: DamageKind,
        ) {
        }

        fn is_alive(&self, _actor: ActorHandle) -> bool {
            true
        }
    }

    fn occupant(handle: u64) -> Occupant {
        Occupant {
            handle: ActorHandle::new(handle),
            living: false,
            alive: false,
            passable: false,
            destructible: false,
            organism: false,
        }
    }

    const AT: GridPoint = GridPoint::new(3, -2);

    #[test]
    fn living_player_outranks_everything() {
        let mut grid = StubGrid::empty();
        grid.players.push(Occupant {
            living: true,
            alive: true,
            passable: true,
            ..occupant(1)
        });
        grid.objects.push(Occupant {
            destructible: true,
            ..occupant(2)
        });

        let config = Config::default();
        assert_eq!(
            resolve(&grid, AT, &config),
            Resolution::Attacked {
                target: DamageTarget::Actor(ActorHandle::new(1)),
                amount: config.player_damage,
                attack: AttackKind::Melee,
                damage: DamageKind::Brute,
            }
        );
    }

    #[test]
    fn dead_player_is_skipped() {
        let mut grid = StubGrid::empty();
        grid.players.push(Occupant {
            living: true,
            alive: false,
            passable: true,
            ..occupant(1)
        });

        assert_eq!(resolve(&grid, AT, &Config::default()), Resolution::Clear);
    }

    #[test]
    fn living_npc_takes_player_damage() {
        let mut grid = StubGrid::empty();
        grid.objects.push(Occupant {
            living: true,
            alive: true,
            ..occupant(4)
        });

        let config = Config::default();
        assert_eq!(
            resolve(&grid, AT, &config),
            Resolution::Attacked {
                target: DamageTarget::Actor(ActorHandle::new(4)),
                amount: config.player_damage,
                attack: AttackKind::Melee,
                damage: DamageKind::Brute,
            }
        );
    }

    #[test]
    fn dead_npc_falls_through_to_destructible_object() {
        let mut grid = StubGrid::empty();
        grid.objects.push(Occupant {
            living: true,
            alive: false,
            ..occupant(4)
        });
        grid.objects.push(Occupant {
            destructible: true,
            ..occupant(5)
        });

        let config = Config::default();
        assert_eq!(
            resolve(&grid, AT, &config),
            Resolution::Attacked {
                target: DamageTarget::Actor(ActorHandle::new(5)),
                amount: config.object_damage,
                attack: AttackKind::Melee,
                damage: DamageKind::Brute,
            }
        );
    }

    #[test]
    fn passable_clutter_is_ignored() {
        let mut grid = StubGrid::empty();
        grid.objects.push(Occupant {
            passable: true,
            destructible: true,
            ..occupant(6)
        });

        assert_eq!(resolve(&grid, AT, &Config::default()), Resolution::Clear);
    }

    #[test]
    fn organism_structure_blocks_silently() {
        let mut grid = StubGrid::empty();
        grid.objects.push(Occupant {
            organism: true,
            ..occupant(7)
        });
        grid.passable = false;

        assert_eq!(resolve(&grid, AT, &Config::default()), Resolution::Blocked);
    }

    #[test]
    fn bare_barrier_takes_layer_damage() {
        let mut grid = StubGrid::empty();
        grid.passable = false;

        let config = Config::default();
        assert_eq!(
            resolve(&grid, AT, &config),
            Resolution::Attacked {
                target: DamageTarget::Barrier(AT),
                amount: config.layer_damage,
                attack: AttackKind::Melee,
                damage: DamageKind::Brute,
            }
        );
    }

    #[test]
    fn empty_passable_coordinate_is_clear() {
        let grid = StubGrid::empty();
        assert_eq!(resolve(&grid, AT, &Config::default()), Resolution::Clear);
    }
}
