#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Overmind simulation.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.
//!
//! The host traits at the bottom of the crate describe the external
//! collaborators the organism depends on: the station occupancy grid, the
//! actor spawner, and the narrative broadcast sink.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Plants the organism's Core at the provided coordinate.
    Establish {
        /// Coordinate the Core should occupy.
        at: GridPoint,
    },
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Requests a manual placement-or-attack at the provided coordinate.
    PlaceOrAttack {
        /// Coordinate targeted by the overmind.
        at: GridPoint,
    },
    /// Requests an upgrade of an existing tile into a specialised structure.
    PlaceSpecial {
        /// Structure kind to grow at the coordinate.
        kind: StructureKind,
        /// Coordinate holding the tile to upgrade.
        at: GridPoint,
    },
    /// Requests removal of an organism tile, refunding part of its cost.
    Remove {
        /// Coordinate holding the tile to remove.
        at: GridPoint,
    },
    /// Requests that the Core swap positions with the Node at the coordinate.
    RelocateCore {
        /// Coordinate holding the destination Node.
        at: GridPoint,
    },
    /// Moves the overmind avatar to the provided coordinate.
    MoveOvermind {
        /// Destination coordinate for the avatar.
        to: GridPoint,
    },
    /// Snaps the overmind avatar back to the nearest Node (or the Core).
    RecallOvermind,
    /// Runs one auto-expansion pass over every active Node frontier.
    Expand,
    /// Credits periodic income derived from the Resource tile count.
    AccrueIncome,
    /// Prunes dead minions and tops up each Factory to its live cap.
    SpawnMinions,
    /// Restores integrity to organism tiles within each Node's pulse disc.
    PulseIntegrity,
    /// Applies external damage to the organism tile at the coordinate.
    DamageStructure {
        /// Coordinate holding the damaged tile.
        at: GridPoint,
        /// Amount of integrity to remove.
        amount: u32,
    },
    /// Records that a one-shot milestone fired.
    AnnounceMilestone {
        /// Milestone that latched.
        milestone: Milestone,
    },
    /// Unleashes the organism after the victory threshold is reached.
    DeclareVictory,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// Confirms that the Core was planted and the organism is live.
    Established {
        /// Identifier assigned to the Core structure.
        core: StructureId,
        /// Coordinate the Core occupies.
        at: GridPoint,
    },
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Reports the refreshed tile census after a tick.
    CensusUpdated {
        /// Number of coordinates the organism currently occupies.
        total: u32,
        /// Number of occupied coordinates anchored to station ground.
        anchored: u32,
    },
    /// Reports the Core's current integrity after a tick.
    CoreIntegrityChanged {
        /// Remaining integrity of the Core structure.
        current: u32,
    },
    /// Reports a change to the stored resource balance.
    ResourcesChanged {
        /// Balance after the change was applied.
        total: u32,
    },
    /// Confirms that a new tile joined the organism.
    TileGrown {
        /// Identifier assigned to the structure by the world.
        id: StructureId,
        /// Kind of structure that was grown.
        kind: StructureKind,
        /// Coordinate the structure occupies.
        at: GridPoint,
        /// Indicates the growth came from an auto-expansion pass.
        auto: bool,
    },
    /// Confirms that an attack resolved and damage was delivered to the host.
    StrikeLanded {
        /// Coordinate that was struck.
        at: GridPoint,
        /// Target the damage was applied to.
        target: DamageTarget,
        /// Amount of damage delivered.
        amount: u32,
        /// Indicates the strike came from an auto-expansion pass.
        auto: bool,
    },
    /// Confirms that a tile mutated into a specialised structure.
    TileUpgraded {
        /// Identifier assigned to the replacement structure.
        id: StructureId,
        /// Kind the tile held before the upgrade.
        from: StructureKind,
        /// Kind the tile holds after the upgrade.
        to: StructureKind,
        /// Coordinate the tile occupies.
        at: GridPoint,
    },
    /// Confirms that a tile was removed by the overmind.
    TileRemoved {
        /// Coordinate the tile occupied.
        at: GridPoint,
        /// Resources refunded through the capped ledger.
        refunded: u32,
    },
    /// Reports that external damage destroyed an organism tile.
    TileDestroyed {
        /// Coordinate the tile occupied.
        at: GridPoint,
        /// Kind of structure that was destroyed.
        kind: StructureKind,
    },
    /// Reports that a Node exhausted its expansion frontier.
    NodeDepleted {
        /// Identifier of the depleted Node.
        node: StructureId,
    },
    /// Confirms that the Core swapped positions with a Node.
    CoreRelocated {
        /// Coordinate the Core occupies after the swap.
        core_at: GridPoint,
        /// Coordinate the displaced Node occupies after the swap.
        node_at: GridPoint,
    },
    /// Confirms that the overmind avatar moved.
    OvermindMoved {
        /// Coordinate the avatar occupies after the move.
        to: GridPoint,
    },
    /// Confirms that the overmind avatar was recalled to the organism.
    OvermindRecalled {
        /// Coordinate the avatar was snapped back to.
        to: GridPoint,
    },
    /// Confirms that a Factory spawned a minion through the host.
    MinionSpawned {
        /// Identifier of the Factory structure.
        factory: StructureId,
        /// Handle of the spawned minion actor.
        minion: ActorHandle,
    },
    /// Reports that a requested action was rejected without mutating state.
    ActionRejected {
        /// Specific reason the action failed.
        reason: ActionError,
    },
    /// Announces that a one-shot milestone latched.
    MilestoneReached {
        /// Milestone that fired.
        milestone: Milestone,
    },
    /// Announces that the organism reached its victory threshold.
    VictoryAchieved,
    /// Announces that the Core was destroyed and the organism collapsed.
    OrganismDied {
        /// Number of tiles despawned by the collapse.
        tiles_lost: u32,
    },
}

/// Location of a single grid coordinate on the organism's plane.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct GridPoint {
    x: i32,
    y: i32,
}

impl GridPoint {
    /// Creates a new grid coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal component of the coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical component of the coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Returns the coordinate displaced by the provided offsets.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Computes the squared Euclidean distance between two coordinates.
    ///
    /// Distance gates compare squared values against squared limits so the
    /// checks stay exact in integer arithmetic.
    #[must_use]
    pub fn distance_squared(self, other: GridPoint) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }
}

/// Offsets defining the adjacency neighbourhood used by every placement gate:
/// the coordinate itself plus its four cardinal neighbours.
pub const ADJACENCY_OFFSETS: [(i32, i32); 5] = [(0, 0), (0, 1), (1, 0), (0, -1), (-1, 0)];

/// Unique identifier assigned to an organism structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StructureId(u32);

impl StructureId {
    /// Creates a new structure identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Opaque handle referencing an actor owned by the host world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorHandle(u64);

impl ActorHandle {
    /// Creates a new actor handle with the provided numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the handle.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

/// Structural kinds an organism tile can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    /// The organism's heart; exactly one exists and its death is terminal.
    Core,
    /// Expansion source owning a frontier of growth candidates.
    Node,
    /// Income-producing tile counted by the economy.
    Resource,
    /// Minion-producing tile with a bounded live population.
    Factory,
    /// Default growth tile; prerequisite for every upgrade.
    Normal,
    /// Hardened tile upgraded from a Normal tile.
    Strong,
    /// Deflecting tile upgraded from a Strong tile.
    Reflective,
}

impl StructureKind {
    /// Initial and maximum integrity of a freshly grown structure.
    #[must_use]
    pub const fn base_integrity(self) -> u32 {
        match self {
            Self::Core => 400,
            Self::Node => 200,
            Self::Resource | Self::Factory => 60,
            Self::Normal => 25,
            Self::Strong | Self::Reflective => 150,
        }
    }

    /// Reports whether the kind acts as an expansion source.
    #[must_use]
    pub const fn is_node_like(self) -> bool {
        matches!(self, Self::Core | Self::Node)
    }
}

/// One-shot narrative milestones observed by the victory tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Milestone {
    /// The station detected the organism (tile count or elapsed time).
    Detected,
    /// The organism holds half the tiles required for victory.
    Halfway,
    /// The organism holds four fifths of the tiles required for victory.
    NearVictory,
}

/// Target damage is delivered to when an attack resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DamageTarget {
    /// A living or destructible actor owned by the host.
    Actor(ActorHandle),
    /// An impassable bare barrier (wall, window, grille) at a coordinate.
    Barrier(GridPoint),
}

/// Delivery mechanism reported alongside damage.
///
/// The organism only ever lashes out with its own mass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackKind {
    /// Direct melee contact from adjacent organism tissue.
    Melee,
}

/// Damage classification reported alongside damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageKind {
    /// Blunt structural damage.
    Brute,
}

/// Reasons a requested action may be rejected by the world.
///
/// Every rejection is recoverable and leaves state untouched; the `Display`
/// strings double as the user-facing messages shown by adapters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum ActionError {
    /// The ledger cannot cover the cost of the action.
    #[error("not enough biomass, {missing} more needed")]
    InsufficientResources {
        /// Amount missing from the stored balance.
        missing: u32,
    },
    /// The coordinate is not adjacent to any existing organism tile.
    #[error("growth can only happen on or next to existing organism tiles")]
    NotAdjacent,
    /// The attack cooldown has not elapsed yet.
    #[error("the organism is still recovering from its last strike")]
    OnCooldown,
    /// The targeted tile does not support the requested action.
    #[error("the targeted tile does not support this action")]
    InvalidTarget,
    /// Another specialised structure sits within the minimum spacing.
    #[error("too close to another specialised structure, spread out at least {limit} tiles")]
    DistanceTooClose {
        /// Minimum spacing measured in tiles.
        limit: u32,
    },
    /// The coordinate was claimed before the registry insert completed.
    #[error("that coordinate is already occupied by organism growth")]
    AlreadyOccupied,
    /// The Core is gone; no further actions are possible.
    #[error("the organism is dead")]
    OrganismDead,
}

/// Tunable parameters governing the organism simulation.
///
/// Defaults hold the balance values the simulation was tuned with.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Cost of growing a Normal tile manually.
    pub normal_cost: u32,
    /// Cost of upgrading a Normal tile into a Strong tile.
    pub strong_cost: u32,
    /// Cost of upgrading a Strong tile into a Reflective tile.
    pub reflective_cost: u32,
    /// Cost of upgrading a Normal tile into a Resource tile.
    pub resource_cost: u32,
    /// Cost of upgrading a Normal tile into a Node.
    pub node_cost: u32,
    /// Cost of upgrading a Normal tile into a Factory.
    pub factory_cost: u32,
    /// Cost of swapping the Core with a Node.
    pub relocate_core_cost: u32,
    /// Cost reserved by every manual placement-or-attack request.
    pub attack_cost: u32,
    /// Fraction of a tile's cost refunded on voluntary removal.
    pub refund_fraction: f32,
    /// Damage delivered to living targets.
    pub player_damage: u32,
    /// Damage delivered to destructible inert objects.
    pub object_damage: u32,
    /// Damage delivered to bare barriers (walls, windows, grilles).
    pub layer_damage: u32,
    /// Radius of the disc from which Node frontiers are generated.
    pub spread_radius: u32,
    /// Minimum spacing between specialised structures of the same class.
    pub build_distance_limit: u32,
    /// Upper bound of the resource ledger before victory.
    pub max_capacity: u32,
    /// Multiplier applied to periodic income before victory.
    pub econ_modifier: f32,
    /// Anchored tile count required for victory.
    pub victory_target: u32,
    /// Total tile count at which the station detects the organism.
    pub detection_threshold: u32,
    /// Simulated time after which detection fires regardless of size.
    pub announce_delay: Duration,
    /// Minimum simulated time between successive manual strikes.
    pub attack_cooldown: Duration,
    /// Whether expansion passes continue past their first failed candidate.
    pub rapid_expand: bool,
    /// Maximum number of live minions a Factory sustains.
    pub max_minions_per_factory: usize,
    /// Ledger capacity after victory is declared.
    pub victory_capacity: u32,
    /// Income multiplier after victory is declared.
    pub victory_econ_modifier: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            normal_cost: 4,
            strong_cost: 15,
            reflective_cost: 15,
            resource_cost: 40,
            node_cost: 50,
            factory_cost: 60,
            relocate_core_cost: 80,
            attack_cost: 1,
            refund_fraction: 0.4,
            player_damage: 20,
            object_damage: 50,
            layer_damage: 40,
            spread_radius: 4,
            build_distance_limit: 4,
            max_capacity: 100,
            econ_modifier: 1.0,
            victory_target: 400,
            detection_threshold: 75,
            announce_delay: Duration::from_secs(600),
            attack_cooldown: Duration::from_secs(1),
            rapid_expand: false,
            max_minions_per_factory: 3,
            victory_capacity: 5000,
            victory_econ_modifier: 10.0,
        }
    }
}

impl Config {
    /// Growth cost of the provided structure kind.
    ///
    /// The Core is never bought directly; relocating it has its own cost.
    #[must_use]
    pub const fn cost_of(&self, kind: StructureKind) -> u32 {
        match kind {
            StructureKind::Core => 0,
            StructureKind::Node => self.node_cost,
            StructureKind::Resource => self.resource_cost,
            StructureKind::Factory => self.factory_cost,
            StructureKind::Normal => self.normal_cost,
            StructureKind::Strong => self.strong_cost,
            StructureKind::Reflective => self.reflective_cost,
        }
    }
}

/// Immutable representation of a single tile's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileSnapshot {
    /// Identifier allocated to the structure by the world.
    pub id: StructureId,
    /// Kind of structure occupying the tile.
    pub kind: StructureKind,
    /// Coordinate the tile occupies.
    pub at: GridPoint,
    /// Remaining integrity of the structure.
    pub integrity: u32,
    /// Maximum integrity of the structure.
    pub max_integrity: u32,
    /// Indicates the tile sits above station ground rather than space.
    pub anchored: bool,
}

/// Read-only snapshot describing every tile the organism holds.
#[derive(Clone, Debug, Default)]
pub struct TileView {
    snapshots: Vec<TileSnapshot>,
}

impl TileView {
    /// Creates a new tile view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<TileSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured tile snapshots in deterministic order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &TileSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<TileSnapshot> {
        self.snapshots
    }
}

/// Immutable representation of a single Node's expansion state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeSnapshot {
    /// Identifier of the Node structure.
    pub id: StructureId,
    /// Coordinate the Node occupies.
    pub at: GridPoint,
    /// Frontier coordinates the Node has not yet grown into.
    pub frontier: Vec<GridPoint>,
    /// Indicates the frontier is exhausted and the Node is skipped.
    pub depleted: bool,
}

/// Read-only snapshot describing every expansion source.
#[derive(Clone, Debug, Default)]
pub struct NodeView {
    snapshots: Vec<NodeSnapshot>,
}

impl NodeView {
    /// Creates a new node view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<NodeSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured node snapshots in deterministic order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &NodeSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<NodeSnapshot> {
        self.snapshots
    }
}

/// Filter applied to host occupancy queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OccupantFilter {
    /// Player-controlled actors standing on the coordinate.
    Players,
    /// Inert and NPC objects registered on the coordinate.
    Objects,
}

/// Descriptor of a single actor occupying a coordinate on the host grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occupant {
    /// Handle referencing the actor.
    pub handle: ActorHandle,
    /// Indicates the actor carries a health behaviour.
    pub living: bool,
    /// Indicates the living actor has not died yet.
    pub alive: bool,
    /// Indicates the actor can be walked through.
    pub passable: bool,
    /// Indicates the actor's integrity can be damaged.
    pub destructible: bool,
    /// Indicates the actor is organism structure (this or any organism).
    pub organism: bool,
}

/// Kinds of actors the organism asks the host to spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpawnKind {
    /// An organism structure tile of the provided kind.
    Structure(StructureKind),
    /// A minion actor produced by a Factory.
    Minion,
}

/// Occupancy and damage queries answered by the external station grid.
pub trait WorldGrid {
    /// Reports whether the coordinate lies in open space.
    fn is_space_at(&self, at: GridPoint) -> bool;

    /// Reports whether the coordinate can be walked through.
    fn is_passable_at(&self, at: GridPoint) -> bool;

    /// Enumerates actors occupying the coordinate, filtered by category.
    fn occupants_at(&self, at: GridPoint, filter: OccupantFilter) -> Vec<Occupant>;

    /// Delivers damage to the provided target.
    fn apply_damage(
        &mut self,
        target: DamageTarget,
        amount: u32,
        attack: AttackKind,
        damage: DamageKind,
    );

    /// Reports whether the referenced actor is still alive.
    fn is_alive(&self, actor: ActorHandle) -> bool;
}

/// Actor lifecycle operations delegated to the external world.
pub trait ActorSpawner {
    /// Attempts to spawn an actor, returning its handle on success.
    fn spawn(&mut self, kind: SpawnKind, at: GridPoint) -> Option<ActorHandle>;

    /// Removes a previously spawned actor from the world.
    fn despawn(&mut self, actor: ActorHandle);

    /// Moves a previously spawned actor to a new coordinate.
    fn relocate(&mut self, actor: ActorHandle, to: GridPoint);
}

/// Fire-and-forget broadcast of narrative and status strings.
///
/// Notifications are presentation only and never affect core correctness.
pub trait NotificationSink {
    /// Publishes a narrative message to whatever surface the adapter owns.
    fn notify(&mut self, message: &str);
}

/// Combined host contract consumed by the world's `apply` entry point.
pub trait Host: WorldGrid + ActorSpawner {}

impl<T: WorldGrid + ActorSpawner> Host for T {}

#[cfg(test)]
mod tests {
    use super::{
        ActionError, ActorHandle, Config, GridPoint, Milestone, StructureId, StructureKind,
    };
    use serde::{de::DeserializeOwned, Serialize};

    #[test]
    fn distance_squared_matches_expectation() {
        let origin = GridPoint::new(1, 1);
        let destination = GridPoint::new(4, 3);
        assert_eq!(origin.distance_squared(destination), 13);
        assert_eq!(destination.distance_squared(origin), 13);
    }

    #[test]
    fn offset_wraps_components_independently() {
        let point = GridPoint::new(-2, 7);
        assert_eq!(point.offset(3, -7), GridPoint::new(1, 0));
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn structure_id_round_trips_through_bincode() {
        assert_round_trip(&StructureId::new(42));
    }

    #[test]
    fn actor_handle_round_trips_through_bincode() {
        assert_round_trip(&ActorHandle::new(0xdead_beef));
    }

    #[test]
    fn structure_kind_round_trips_through_bincode() {
        assert_round_trip(&StructureKind::Reflective);
    }

    #[test]
    fn action_error_round_trips_through_bincode() {
        assert_round_trip(&ActionError::InsufficientResources { missing: 9 });
    }

    #[test]
    fn milestone_round_trips_through_bincode() {
        assert_round_trip(&Milestone::NearVictory);
    }

    #[test]
    fn grid_point_round_trips_through_bincode() {
        assert_round_trip(&GridPoint::new(-17, 3));
    }

    #[test]
    fn config_round_trips_through_bincode() {
        assert_round_trip(&Config::default());
    }

    #[test]
    fn rejection_messages_name_the_shortfall() {
        let error = ActionError::InsufficientResources { missing: 12 };
        assert_eq!(error.to_string(), "not enough biomass, 12 more needed");
    }

    #[test]
    fn default_costs_match_balance_table() {
        let config = Config::default();
        assert_eq!(config.cost_of(StructureKind::Normal), 4);
        assert_eq!(config.cost_of(StructureKind::Node), 50);
        assert_eq!(config.cost_of(StructureKind::Factory), 60);
        assert_eq!(config.cost_of(StructureKind::Core), 0);
    }

    #[test]
    fn node_like_kinds_cover_core_and_node() {
        assert!(StructureKind::Core.is_node_like());
        assert!(StructureKind::Node.is_node_like());
        assert!(!StructureKind::Strong.is_node_like());
    }
}
