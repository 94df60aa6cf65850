#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative organism state management for Overmind.
//!
//! The world owns the tile registry, the resource ledger, per-node expansion
//! frontiers, factory rosters, and the overmind avatar position. All
//! mutation flows through [`apply`], which executes a single [`Command`]
//! against the state and the external host, then pushes [`Event`] values
//! describing what happened. Every tick is logically sequential; phases that
//! outlive a mutation (expansion passes, pulse targets, query views) operate
//! on snapshot copies rather than live references.

use std::collections::BTreeMap;
use std::time::Duration;

use overmind_core::{
    ActionError, ActorHandle, Command, Config, Event, GridPoint, Host, SpawnKind, StructureId,
    StructureKind, ADJACENCY_OFFSETS,
};
use overmind_system_combat::{resolve, Resolution};

const RNG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const RNG_INCREMENT: u64 = 1;

/// Represents the authoritative Overmind organism state.
#[derive(Debug)]
pub struct World {
    config: Config,
    clock: Duration,
    rng_state: u64,
    next_structure: u32,
    tiles: BTreeMap<GridPoint, StructureId>,
    structures: BTreeMap<StructureId, Structure>,
    factories: BTreeMap<StructureId, Vec<ActorHandle>>,
    core: Option<StructureId>,
    ledger: Ledger,
    econ_modifier: f32,
    attack_ready_at: Duration,
    victorious: bool,
    rapid_expand: bool,
    has_died: bool,
    overmind_at: GridPoint,
    peak_total: u32,
    peak_anchored: u32,
}

impl World {
    /// Creates a new organism world awaiting an `Establish` command.
    #[must_use]
    pub fn new(config: Config, rng_seed: u64) -> Self {
        Self {
            clock: Duration::ZERO,
            rng_state: rng_seed,
            next_structure: 0,
            tiles: BTreeMap::new(),
            structures: BTreeMap::new(),
            factories: BTreeMap::new(),
            core: None,
            ledger: Ledger::new(config.max_capacity),
            econ_modifier: config.econ_modifier,
            attack_ready_at: Duration::ZERO,
            victorious: false,
            rapid_expand: config.rapid_expand,
            has_died: false,
            overmind_at: GridPoint::default(),
            peak_total: 0,
            peak_anchored: 0,
            config,
        }
    }

    fn allocate_id(&mut self) -> StructureId {
        let id = StructureId::new(self.next_structure);
        self.next_structure = self.next_structure.wrapping_add(1);
        id
    }

    fn is_adjacent(&self, at: GridPoint) -> bool {
        ADJACENCY_OFFSETS
            .iter()
            .any(|&(dx, dy)| self.tiles.contains_key(&at.offset(dx, dy)))
    }

    fn advance_rng(&mut self) -> u64 {
        self.rng_state = self
            .rng_state
            .wrapping_mul(RNG_MULTIPLIER)
            .wrapping_add(RNG_INCREMENT);
        self.rng_state
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        for index in (1..items.len()).rev() {
            let value = self.advance_rng();
            let swap_index = (value % (index as u64 + 1)) as usize;
            items.swap(index, swap_index);
        }
    }

    fn establish<H: Host>(&mut self, host: &mut H, at: GridPoint, out_events: &mut Vec<Event>) {
        if self.core.is_some() || self.has_died {
            reject(out_events, ActionError::InvalidTarget);
            return;
        }

        let Some(handle) = host.spawn(SpawnKind::Structure(StructureKind::Core), at) else {
            reject(out_events, ActionError::AlreadyOccupied);
            return;
        };

        let id = self.allocate_id();
        let mut core = Structure::new(id, StructureKind::Core, at, handle);
        core.anchored = !host.is_space_at(at);
        core.reset_discs(at, self.config.spread_radius);

        let _ = self.tiles.insert(at, id);
        let _ = self.structures.insert(id, core);
        self.core = Some(id);
        self.overmind_at = at;

        out_events.push(Event::Established { core: id, at });
    }

    fn tick(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        self.clock = self.clock.saturating_add(dt);
        out_events.push(Event::TimeAdvanced { dt });

        let total = self.tiles.len() as u32;
        let anchored = self
            .structures
            .values()
            .filter(|structure| structure.anchored)
            .count() as u32;
        self.peak_total = self.peak_total.max(total);
        self.peak_anchored = self.peak_anchored.max(anchored);
        out_events.push(Event::CensusUpdated { total, anchored });

        if let Some(core) = self.core.and_then(|id| self.structures.get(&id)) {
            out_events.push(Event::CoreIntegrityChanged {
                current: core.integrity,
            });
        }
    }

    fn manual_place_or_attack<H: Host>(
        &mut self,
        host: &mut H,
        at: GridPoint,
        out_events: &mut Vec<Event>,
    ) {
        if self.has_died {
            reject(out_events, ActionError::OrganismDead);
            return;
        }

        if !self.is_adjacent(at) {
            reject(out_events, ActionError::NotAdjacent);
            return;
        }

        if self.ledger.balance() < self.config.attack_cost {
            reject(
                out_events,
                ActionError::InsufficientResources {
                    missing: self.config.attack_cost - self.ledger.balance(),
                },
            );
            return;
        }

        if self.clock < self.attack_ready_at {
            reject(out_events, ActionError::OnCooldown);
            return;
        }

        match resolve(&*host, at, &self.config) {
            Resolution::Attacked {
                target,
                amount,
                attack,
                damage,
            } => {
                host.apply_damage(target, amount, attack, damage);
                if !self.victorious {
                    self.attack_ready_at = self.clock.saturating_add(self.config.attack_cooldown);
                }
                // Cost is settled only after the strike landed.
                let _ = self.ledger.try_debit(self.config.attack_cost);
                out_events.push(Event::StrikeLanded {
                    at,
                    target,
                    amount,
                    auto: false,
                });
                out_events.push(Event::ResourcesChanged {
                    total: self.ledger.balance(),
                });
            }
            Resolution::Blocked => {}
            Resolution::Clear => {
                let _ = self.grow_normal(host, at, false, out_events);
            }
        }
    }

    /// Grows a Normal tile at `at`, returning whether growth happened.
    ///
    /// Manual growth settles its cost only after the host confirms the
    /// spawn. Auto growth is free.
    fn grow_normal<H: Host>(
        &mut self,
        host: &mut H,
        at: GridPoint,
        auto: bool,
        out_events: &mut Vec<Event>,
    ) -> bool {
        let cost = self.config.normal_cost;
        if !auto && self.ledger.balance() < cost {
            reject(
                out_events,
                ActionError::InsufficientResources {
                    missing: cost - self.ledger.balance(),
                },
            );
            return false;
        }

        if self.tiles.contains_key(&at) {
            if !auto {
                reject(out_events, ActionError::AlreadyOccupied);
            }
            return false;
        }

        let Some(handle) = host.spawn(SpawnKind::Structure(StructureKind::Normal), at) else {
            return false;
        };

        let id = self.allocate_id();
        let mut structure = Structure::new(id, StructureKind::Normal, at, handle);
        structure.anchored = !host.is_space_at(at);
        let _ = self.tiles.insert(at, id);
        let _ = self.structures.insert(id, structure);

        if !auto {
            let _ = self.ledger.try_debit(cost);
            out_events.push(Event::ResourcesChanged {
                total: self.ledger.balance(),
            });
        }

        out_events.push(Event::TileGrown {
            id,
            kind: StructureKind::Normal,
            at,
            auto,
        });
        true
    }

    fn attempt_auto<H: Host>(
        &mut self,
        host: &mut H,
        at: GridPoint,
        out_events: &mut Vec<Event>,
    ) -> bool {
        match resolve(&*host, at, &self.config) {
            Resolution::Attacked {
                target,
                amount,
                attack,
                damage,
            } => {
                host.apply_damage(target, amount, attack, damage);
                out_events.push(Event::StrikeLanded {
                    at,
                    target,
                    amount,
                    auto: true,
                });
                false
            }
            Resolution::Blocked => false,
            Resolution::Clear => self.grow_normal(host, at, true, out_events),
        }
    }

    fn expand<H: Host>(&mut self, host: &mut H, out_events: &mut Vec<Event>) {
        if self.has_died {
            return;
        }

        let mut node_ids: Vec<StructureId> = self
            .structures
            .values()
            .filter(|structure| structure.kind.is_node_like())
            .map(|structure| structure.id)
            .collect();
        self.shuffle(&mut node_ids);

        for node_id in node_ids {
            let Some(node) = self.structures.get(&node_id) else {
                continue;
            };
            if node.depleted {
                continue;
            }

            let mut frontier = node.frontier.clone();
            self.shuffle(&mut frontier);

            for candidate in frontier {
                // Adjacency is re-validated at evaluation time, not cached.
                if !self.is_adjacent(candidate) {
                    continue;
                }

                if self.attempt_auto(host, candidate, out_events) {
                    if let Some(node) = self.structures.get_mut(&node_id) {
                        node.frontier.retain(|point| *point != candidate);
                    }
                    continue;
                }

                if self.rapid_expand {
                    continue;
                }
                break;
            }

            if let Some(node) = self.structures.get_mut(&node_id) {
                if node.frontier.is_empty() && !node.depleted {
                    node.depleted = true;
                    out_events.push(Event::NodeDepleted { node: node_id });
                }
            }
        }
    }

    fn place_special<H: Host>(
        &mut self,
        host: &mut H,
        kind: StructureKind,
        at: GridPoint,
        out_events: &mut Vec<Event>,
    ) {
        if self.has_died {
            reject(out_events, ActionError::OrganismDead);
            return;
        }

        let required_base = match kind {
            StructureKind::Strong => StructureKind::Normal,
            StructureKind::Reflective => StructureKind::Strong,
            StructureKind::Node | StructureKind::Factory | StructureKind::Resource => {
                StructureKind::Normal
            }
            StructureKind::Core | StructureKind::Normal => {
                reject(out_events, ActionError::InvalidTarget);
                return;
            }
        };

        if !self.is_adjacent(at) {
            reject(out_events, ActionError::NotAdjacent);
            return;
        }

        let Some(existing) = self.tiles.get(&at).and_then(|id| self.structures.get(id)) else {
            reject(out_events, ActionError::InvalidTarget);
            return;
        };
        if existing.kind != required_base {
            reject(out_events, ActionError::InvalidTarget);
            return;
        }
        let existing_id = existing.id;
        let existing_kind = existing.kind;
        let existing_handle = existing.handle;
        let existing_anchored = existing.anchored;

        if !self.spacing_clear(kind, at) {
            reject(
                out_events,
                ActionError::DistanceTooClose {
                    limit: self.config.build_distance_limit,
                },
            );
            return;
        }

        let cost = self.config.cost_of(kind);
        if self.ledger.balance() < cost {
            reject(
                out_events,
                ActionError::InsufficientResources {
                    missing: cost - self.ledger.balance(),
                },
            );
            return;
        }

        let Some(handle) = host.spawn(SpawnKind::Structure(kind), at) else {
            return;
        };
        host.despawn(existing_handle);
        let _ = self.structures.remove(&existing_id);

        let id = self.allocate_id();
        let mut structure = Structure::new(id, kind, at, handle);
        structure.anchored = existing_anchored;
        if kind == StructureKind::Node {
            structure.reset_discs(at, self.config.spread_radius);
        }
        // Overwrite semantics: the coordinate keeps its key, the body changes.
        let _ = self.tiles.insert(at, id);
        let _ = self.structures.insert(id, structure);
        if kind == StructureKind::Factory {
            let _ = self.factories.insert(id, Vec::new());
        }

        let _ = self.ledger.try_debit(cost);
        out_events.push(Event::ResourcesChanged {
            total: self.ledger.balance(),
        });
        out_events.push(Event::TileUpgraded {
            id,
            from: existing_kind,
            to: kind,
            at,
        });
    }

    /// Specialised structures of the same class keep a minimum spacing:
    /// Nodes measure against other Nodes, Factories and Resources measure
    /// against each other. Strong and Reflective upgrades have no spacing.
    fn spacing_clear(&self, kind: StructureKind, at: GridPoint) -> bool {
        let rivals: &[StructureKind] = match kind {
            StructureKind::Node => &[StructureKind::Node],
            StructureKind::Factory | StructureKind::Resource => {
                &[StructureKind::Factory, StructureKind::Resource]
            }
            _ => return true,
        };

        let limit = i64::from(self.config.build_distance_limit);
        let limit_squared = limit * limit;
        self.structures
            .values()
            .filter(|structure| rivals.contains(&structure.kind))
            .all(|structure| structure.at.distance_squared(at) > limit_squared)
    }

    fn remove<H: Host>(&mut self, host: &mut H, at: GridPoint, out_events: &mut Vec<Event>) {
        if self.has_died {
            reject(out_events, ActionError::OrganismDead);
            return;
        }

        let Some(structure) = self.tiles.get(&at).and_then(|id| self.structures.get(id)) else {
            reject(out_events, ActionError::InvalidTarget);
            return;
        };
        if structure.kind.is_node_like() {
            reject(out_events, ActionError::InvalidTarget);
            return;
        }
        let id = structure.id;
        let handle = structure.handle;
        let kind = structure.kind;

        let refund = (self.config.cost_of(kind) as f32 * self.config.refund_fraction).round() as u32;
        let refunded = self.ledger.credit(refund);

        host.despawn(handle);
        let _ = self.tiles.remove(&at);
        let _ = self.structures.remove(&id);
        let _ = self.factories.remove(&id);

        out_events.push(Event::TileRemoved { at, refunded });
        out_events.push(Event::ResourcesChanged {
            total: self.ledger.balance(),
        });
    }

    fn relocate_core<H: Host>(&mut self, host: &mut H, at: GridPoint, out_events: &mut Vec<Event>) {
        if self.has_died {
            reject(out_events, ActionError::OrganismDead);
            return;
        }

        let Some(core_id) = self.core else {
            reject(out_events, ActionError::InvalidTarget);
            return;
        };
        let Some(node) = self.tiles.get(&at).and_then(|id| self.structures.get(id)) else {
            reject(out_events, ActionError::InvalidTarget);
            return;
        };
        if node.kind != StructureKind::Node {
            reject(out_events, ActionError::InvalidTarget);
            return;
        }
        let node_id = node.id;

        let cost = self.config.relocate_core_cost;
        if self.ledger.balance() < cost {
            reject(
                out_events,
                ActionError::InsufficientResources {
                    missing: cost - self.ledger.balance(),
                },
            );
            return;
        }

        let core_at = match self.structures.get(&core_id) {
            Some(core) => core.at,
            None => {
                reject(out_events, ActionError::InvalidTarget);
                return;
            }
        };

        let radius = self.config.spread_radius;
        if let Some(core) = self.structures.get_mut(&core_id) {
            core.at = at;
            core.reset_discs(at, radius);
            host.relocate(core.handle, at);
            core.anchored = !host.is_space_at(at);
        }
        if let Some(node) = self.structures.get_mut(&node_id) {
            node.at = core_at;
            node.reset_discs(core_at, radius);
            host.relocate(node.handle, core_at);
            node.anchored = !host.is_space_at(core_at);
        }
        let _ = self.tiles.insert(at, core_id);
        let _ = self.tiles.insert(core_at, node_id);

        let _ = self.ledger.try_debit(cost);
        out_events.push(Event::CoreRelocated {
            core_at: at,
            node_at: core_at,
        });
        out_events.push(Event::ResourcesChanged {
            total: self.ledger.balance(),
        });
    }

    fn recall_overmind(&mut self, out_events: &mut Vec<Event>) {
        if self.has_died {
            return;
        }

        let mut best: Option<(i64, GridPoint)> = None;
        for structure in self.structures.values() {
            if structure.kind != StructureKind::Node {
                continue;
            }
            let distance = structure.at.distance_squared(self.overmind_at);
            if best.map_or(true, |(closest, _)| distance < closest) {
                best = Some((distance, structure.at));
            }
        }

        let destination = match best {
            Some((_, at)) => at,
            None => match self.core.and_then(|id| self.structures.get(&id)) {
                Some(core) => core.at,
                None => return,
            },
        };

        self.overmind_at = destination;
        out_events.push(Event::OvermindRecalled { to: destination });
    }

    fn accrue_income(&mut self, out_events: &mut Vec<Event>) {
        if self.has_died {
            return;
        }

        let resource_count = self
            .structures
            .values()
            .filter(|structure| structure.kind == StructureKind::Resource)
            .count() as u32;
        // Base income of three exists with zero Resource tiles.
        let income = ((resource_count as f32 + 3.0) * self.econ_modifier).round() as u32;
        let applied = self.ledger.credit(income);
        if applied > 0 {
            out_events.push(Event::ResourcesChanged {
                total: self.ledger.balance(),
            });
        }
    }

    fn spawn_minions<H: Host>(&mut self, host: &mut H, out_events: &mut Vec<Event>) {
        if self.has_died {
            return;
        }

        let factory_ids: Vec<StructureId> = self.factories.keys().copied().collect();
        for factory_id in factory_ids {
            let Some(origin) = self
                .structures
                .get(&factory_id)
                .map(|structure| structure.at)
            else {
                continue;
            };

            if let Some(minions) = self.factories.get_mut(&factory_id) {
                minions.retain(|minion| host.is_alive(*minion));
                if minions.len() >= self.config.max_minions_per_factory {
                    continue;
                }
            }

            let Some(minion) = host.spawn(SpawnKind::Minion, origin) else {
                continue;
            };
            if let Some(minions) = self.factories.get_mut(&factory_id) {
                minions.push(minion);
            }
            out_events.push(Event::MinionSpawned {
                factory: factory_id,
                minion,
            });
        }
    }

    fn pulse_integrity(&mut self) {
        if self.has_died {
            return;
        }

        let pulses: Vec<(bool, Vec<GridPoint>)> = self
            .structures
            .values()
            .filter(|structure| structure.kind.is_node_like())
            .map(|structure| {
                (
                    structure.kind == StructureKind::Core,
                    structure.pulse_points.clone(),
                )
            })
            .collect();

        for (from_core, points) in pulses {
            let amount = if from_core { 3 } else { 1 };
            for point in points {
                let Some(&id) = self.tiles.get(&point) else {
                    continue;
                };
                if let Some(tile) = self.structures.get_mut(&id) {
                    tile.integrity = tile.max_integrity.min(tile.integrity + amount);
                }
            }
        }
    }

    fn damage_structure<H: Host>(
        &mut self,
        host: &mut H,
        at: GridPoint,
        amount: u32,
        out_events: &mut Vec<Event>,
    ) {
        if self.has_died {
            return;
        }

        let Some(&id) = self.tiles.get(&at) else {
            return;
        };
        let Some(structure) = self.structures.get_mut(&id) else {
            return;
        };

        structure.integrity = structure.integrity.saturating_sub(amount);
        if structure.integrity > 0 {
            return;
        }

        let kind = structure.kind;
        let handle = structure.handle;

        if kind == StructureKind::Core {
            self.die(host, out_events);
            return;
        }

        host.despawn(handle);
        let _ = self.tiles.remove(&at);
        let _ = self.structures.remove(&id);
        let _ = self.factories.remove(&id);
        out_events.push(Event::TileDestroyed { at, kind });
    }

    fn die<H: Host>(&mut self, host: &mut H, out_events: &mut Vec<Event>) {
        self.has_died = true;
        self.core = None;

        let tiles_lost = self.tiles.len() as u32;
        for structure in self.structures.values() {
            host.despawn(structure.handle);
        }
        self.tiles.clear();
        self.structures.clear();
        self.factories.clear();

        out_events.push(Event::OrganismDied { tiles_lost });
    }

    fn declare_victory(&mut self, out_events: &mut Vec<Event>) {
        if self.victorious || self.has_died {
            return;
        }

        self.victorious = true;
        self.ledger.raise_capacity(self.config.victory_capacity);
        self.econ_modifier = self.config.victory_econ_modifier;
        self.rapid_expand = true;
        out_events.push(Event::VictoryAchieved);
    }
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Rejected actions leave state unchanged and surface as
/// [`Event::ActionRejected`].
pub fn apply<H: Host>(
    world: &mut World,
    host: &mut H,
    command: Command,
    out_events: &mut Vec<Event>,
) {
    match command {
        Command::Establish { at } => world.establish(host, at, out_events),
        Command::Tick { dt } => world.tick(dt, out_events),
        Command::PlaceOrAttack { at } => world.manual_place_or_attack(host, at, out_events),
        Command::PlaceSpecial { kind, at } => world.place_special(host, kind, at, out_events),
        Command::Remove { at } => world.remove(host, at, out_events),
        Command::RelocateCore { at } => world.relocate_core(host, at, out_events),
        Command::MoveOvermind { to } => {
            world.overmind_at = to;
            out_events.push(Event::OvermindMoved { to });
        }
        Command::RecallOvermind => world.recall_overmind(out_events),
        Command::Expand => world.expand(host, out_events),
        Command::AccrueIncome => world.accrue_income(out_events),
        Command::SpawnMinions => world.spawn_minions(host, out_events),
        Command::PulseIntegrity => world.pulse_integrity(),
        Command::DamageStructure { at, amount } => {
            world.damage_structure(host, at, amount, out_events);
        }
        Command::AnnounceMilestone { milestone } => {
            out_events.push(Event::MilestoneReached { milestone });
        }
        Command::DeclareVictory => world.declare_victory(out_events),
    }
}

fn reject(out_events: &mut Vec<Event>, reason: ActionError) {
    out_events.push(Event::ActionRejected { reason });
}

/// Enumerates the disc of coordinates within `radius` of `center`.
///
/// The closed bounding square is scanned in row-major order and offsets with
/// `dx² + dy² ≤ radius²` are kept, so the enumeration order of the
/// unshuffled candidate set is fixed and reproducible.
#[must_use]
pub fn disc_points(center: GridPoint, radius: u32) -> Vec<GridPoint> {
    let r = radius as i32;
    let r_squared = r * r;
    let mut points = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r_squared {
                points.push(center.offset(dx, dy));
            }
        }
    }
    points
}

#[derive(Clone, Debug)]
struct Structure {
    id: StructureId,
    kind: StructureKind,
    at: GridPoint,
    handle: ActorHandle,
    integrity: u32,
    max_integrity: u32,
    anchored: bool,
    frontier: Vec<GridPoint>,
    pulse_points: Vec<GridPoint>,
    depleted: bool,
}

impl Structure {
    fn new(id: StructureId, kind: StructureKind, at: GridPoint, handle: ActorHandle) -> Self {
        Self {
            id,
            kind,
            at,
            handle,
            integrity: kind.base_integrity(),
            max_integrity: kind.base_integrity(),
            anchored: false,
            frontier: Vec::new(),
            pulse_points: Vec::new(),
            depleted: false,
        }
    }

    /// Regenerates the expansion frontier and the pulse disc wholesale,
    /// clearing the depleted latch. Used at creation and on relocation.
    fn reset_discs(&mut self, at: GridPoint, radius: u32) {
        self.frontier = disc_points(at, radius);
        self.pulse_points = self.frontier.clone();
        self.depleted = false;
    }
}

/// Bounded resource counter backing the organism economy.
#[derive(Debug)]
struct Ledger {
    resources: u32,
    capacity: u32,
}

impl Ledger {
    fn new(capacity: u32) -> Self {
        Self {
            resources: 0,
            capacity,
        }
    }

    fn balance(&self) -> u32 {
        self.resources
    }

    /// Credits up to the capacity, returning the amount actually applied.
    fn credit(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.capacity - self.resources);
        self.resources += applied;
        applied
    }

    /// Deducts `amount` iff the full amount is available.
    fn try_debit(&mut self, amount: u32) -> bool {
        if self.resources >= amount {
            self.resources -= amount;
            return true;
        }
        false
    }

    fn raise_capacity(&mut self, capacity: u32) {
        self.capacity = self.capacity.max(capacity);
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::time::Duration;

    use super::World;
    use overmind_core::{
        Config, GridPoint, NodeSnapshot, NodeView, StructureKind, TileSnapshot, TileView,
        ADJACENCY_OFFSETS,
    };

    /// Balance knobs the world was constructed with.
    #[must_use]
    pub fn config(world: &World) -> &Config {
        &world.config
    }

    /// Current balance of the resource ledger.
    #[must_use]
    pub fn resources(world: &World) -> u32 {
        world.ledger.balance()
    }

    /// Current upper bound of the resource ledger.
    #[must_use]
    pub fn capacity(world: &World) -> u32 {
        world.ledger.capacity
    }

    /// Number of coordinates the organism currently occupies.
    #[must_use]
    pub fn tile_count(world: &World) -> u32 {
        world.tiles.len() as u32
    }

    /// Number of occupied coordinates anchored to station ground.
    #[must_use]
    pub fn anchored_tile_count(world: &World) -> u32 {
        world
            .structures
            .values()
            .filter(|structure| structure.anchored)
            .count() as u32
    }

    /// Largest total and anchored tile counts observed so far.
    #[must_use]
    pub fn peak_counts(world: &World) -> (u32, u32) {
        (world.peak_total, world.peak_anchored)
    }

    /// Reports whether the organism reached its victory threshold.
    #[must_use]
    pub fn is_victorious(world: &World) -> bool {
        world.victorious
    }

    /// Reports whether the Core is still alive.
    #[must_use]
    pub fn is_alive(world: &World) -> bool {
        world.core.is_some()
    }

    /// Reports whether expansion passes continue past failed candidates.
    #[must_use]
    pub fn rapid_expand(world: &World) -> bool {
        world.rapid_expand
    }

    /// Simulated time accumulated by the world clock.
    #[must_use]
    pub fn clock(world: &World) -> Duration {
        world.clock
    }

    /// Remaining integrity of the Core, if it still exists.
    #[must_use]
    pub fn core_integrity(world: &World) -> Option<u32> {
        world
            .core
            .and_then(|id| world.structures.get(&id))
            .map(|core| core.integrity)
    }

    /// Coordinate currently occupied by the overmind avatar.
    #[must_use]
    pub fn overmind_position(world: &World) -> GridPoint {
        world.overmind_at
    }

    /// Reports whether `at` touches the organism (itself or a cardinal
    /// neighbour).
    #[must_use]
    pub fn is_adjacent_to_organism(world: &World, at: GridPoint) -> bool {
        ADJACENCY_OFFSETS
            .iter()
            .any(|&(dx, dy)| world.tiles.contains_key(&at.offset(dx, dy)))
    }

    /// Snapshot of the tile occupying `at`, if any.
    #[must_use]
    pub fn tile_at(world: &World, at: GridPoint) -> Option<TileSnapshot> {
        let id = world.tiles.get(&at)?;
        world.structures.get(id).map(|structure| TileSnapshot {
            id: structure.id,
            kind: structure.kind,
            at: structure.at,
            integrity: structure.integrity,
            max_integrity: structure.max_integrity,
            anchored: structure.anchored,
        })
    }

    /// Captures a read-only view of every tile the organism holds.
    #[must_use]
    pub fn tile_view(world: &World) -> TileView {
        let snapshots: Vec<TileSnapshot> = world
            .structures
            .values()
            .map(|structure| TileSnapshot {
                id: structure.id,
                kind: structure.kind,
                at: structure.at,
                integrity: structure.integrity,
                max_integrity: structure.max_integrity,
                anchored: structure.anchored,
            })
            .collect();
        TileView::from_snapshots(snapshots)
    }

    /// Captures a read-only view of every expansion source.
    #[must_use]
    pub fn node_view(world: &World) -> NodeView {
        let snapshots: Vec<NodeSnapshot> = world
            .structures
            .values()
            .filter(|structure| structure.kind.is_node_like())
            .map(|structure| NodeSnapshot {
                id: structure.id,
                at: structure.at,
                frontier: structure.frontier.clone(),
                depleted: structure.depleted,
            })
            .collect();
        NodeView::from_snapshots(snapshots)
    }

    /// Snapshot of positions held by the provided specialised kind.
    #[must_use]
    pub fn positions_of(world: &World, kind: StructureKind) -> Vec<GridPoint> {
        world
            .structures
            .values()
            .filter(|structure| structure.kind == kind)
            .map(|structure| structure.at)
            .collect()
    }
}
