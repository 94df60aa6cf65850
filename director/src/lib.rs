#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Orchestration layer that drives a complete organism session.
//!
//! The director owns the world plus the pure upkeep and progress systems
//! and exposes the operations an embedding host calls: establish, tick,
//! and the overmind's manual actions. Every operation runs the same
//! pipeline: translate the request into commands, apply them to the
//! world, feed the resulting events back through the systems, and narrate
//! noteworthy events to the host's notification sink.

use std::time::Duration;

use overmind_core::{
    Command, Config, Event, GridPoint, Host, Milestone, NotificationSink, StructureKind,
};
use overmind_system_cadence::Cadence;
use overmind_system_victory::Victory;
use overmind_world::{apply, query, World};

/// How long the overmind avatar may linger away from the organism before
/// being snapped back.
const RECALL_GRACE: Duration = Duration::from_secs(1);

/// Drives one organism from establishment to victory or collapse.
#[derive(Debug)]
pub struct Director {
    world: World,
    cadence: Cadence,
    victory: Victory,
    remove_mode: bool,
    recall_deadline: Option<Duration>,
    events: Vec<Event>,
}

impl Director {
    /// Creates a director with a fresh, unestablished world.
    #[must_use]
    pub fn new(config: Config, cadence: overmind_system_cadence::Config, rng_seed: u64) -> Self {
        Self {
            world: World::new(config, rng_seed),
            cadence: Cadence::new(cadence),
            victory: Victory::new(),
            remove_mode: false,
            recall_deadline: None,
            events: Vec::new(),
        }
    }

    /// Plants the Core at `at` and narrates the organism's arrival.
    pub fn establish<H: Host, N: NotificationSink>(
        &mut self,
        host: &mut H,
        sink: &mut N,
        at: GridPoint,
    ) -> &[Event] {
        self.events.clear();
        apply(&mut self.world, host, Command::Establish { at }, &mut self.events);
        self.narrate(sink);
        &self.events
    }

    /// Advances the session by `dt`, running upkeep and progress tracking.
    pub fn tick<H: Host, N: NotificationSink>(
        &mut self,
        host: &mut H,
        sink: &mut N,
        dt: Duration,
    ) -> &[Event] {
        self.events.clear();
        apply(&mut self.world, host, Command::Tick { dt }, &mut self.events);

        let mut commands = Vec::new();
        let alive = query::is_alive(&self.world);
        self.cadence.handle(&self.events, alive, &mut commands);
        if alive {
            self.victory
                .handle(&self.events, query::config(&self.world), &mut commands);
        }
        for command in commands {
            apply(&mut self.world, host, command, &mut self.events);
        }

        self.enforce_recall(host);
        self.narrate(sink);
        &self.events
    }

    /// Executes the overmind's primary action at `at`.
    ///
    /// In remove mode the action reclaims an organism tile; otherwise it
    /// grows toward or strikes the coordinate.
    pub fn primary_action<H: Host, N: NotificationSink>(
        &mut self,
        host: &mut H,
        sink: &mut N,
        at: GridPoint,
    ) -> &[Event] {
        let command = if self.remove_mode {
            Command::Remove { at }
        } else {
            Command::PlaceOrAttack { at }
        };
        self.run(host, sink, command)
    }

    /// Reclaims the organism tile at `at`, refunding part of its cost.
    pub fn remove<H: Host, N: NotificationSink>(
        &mut self,
        host: &mut H,
        sink: &mut N,
        at: GridPoint,
    ) -> &[Event] {
        self.run(host, sink, Command::Remove { at })
    }

    /// Mutates an existing tile into the requested specialised structure.
    pub fn place_special<H: Host, N: NotificationSink>(
        &mut self,
        host: &mut H,
        sink: &mut N,
        kind: StructureKind,
        at: GridPoint,
    ) -> &[Event] {
        self.run(host, sink, Command::PlaceSpecial { kind, at })
    }

    /// Swaps the Core with the Node at `at`.
    pub fn relocate_core<H: Host, N: NotificationSink>(
        &mut self,
        host: &mut H,
        sink: &mut N,
        at: GridPoint,
    ) -> &[Event] {
        self.run(host, sink, Command::RelocateCore { at })
    }

    /// Moves the overmind avatar, arming the recall timer when it leaves
    /// the organism.
    pub fn move_overmind<H: Host, N: NotificationSink>(
        &mut self,
        host: &mut H,
        sink: &mut N,
        to: GridPoint,
    ) -> &[Event] {
        self.events.clear();
        apply(&mut self.world, host, Command::MoveOvermind { to }, &mut self.events);
        self.arm_recall_if_detached();
        self.narrate(sink);
        &self.events
    }

    /// Reports external damage dealt to the organism tile at `at`.
    pub fn report_damage<H: Host, N: NotificationSink>(
        &mut self,
        host: &mut H,
        sink: &mut N,
        at: GridPoint,
        amount: u32,
    ) -> &[Event] {
        self.run(host, sink, Command::DamageStructure { at, amount })
    }

    /// Toggles whether the primary action removes tiles instead of
    /// growing them.
    pub fn set_remove_mode(&mut self, enabled: bool) {
        self.remove_mode = enabled;
    }

    /// Reports whether the primary action currently removes tiles.
    #[must_use]
    pub fn remove_mode(&self) -> bool {
        self.remove_mode
    }

    /// Read-only access to the underlying world for query functions.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    fn run<H: Host, N: NotificationSink>(
        &mut self,
        host: &mut H,
        sink: &mut N,
        command: Command,
    ) -> &[Event] {
        self.events.clear();
        apply(&mut self.world, host, command, &mut self.events);
        self.narrate(sink);
        &self.events
    }

    fn arm_recall_if_detached(&mut self) {
        let at = query::overmind_position(&self.world);
        if query::is_adjacent_to_organism(&self.world, at) {
            self.recall_deadline = None;
        } else if self.recall_deadline.is_none() {
            self.recall_deadline = Some(query::clock(&self.world).saturating_add(RECALL_GRACE));
        }
    }

    /// Re-checks the avatar's adjacency every tick. The snap-back only
    /// happens if the avatar is still detached when the grace expires.
    fn enforce_recall<H: Host>(&mut self, host: &mut H) {
        if !query::is_alive(&self.world) {
            self.recall_deadline = None;
            return;
        }

        let at = query::overmind_position(&self.world);
        if query::is_adjacent_to_organism(&self.world, at) {
            self.recall_deadline = None;
            return;
        }

        match self.recall_deadline {
            None => {
                self.recall_deadline =
                    Some(query::clock(&self.world).saturating_add(RECALL_GRACE));
            }
            Some(deadline) if query::clock(&self.world) >= deadline => {
                self.recall_deadline = None;
                apply(
                    &mut self.world,
                    host,
                    Command::RecallOvermind,
                    &mut self.events,
                );
            }
            Some(_) => {}
        }
    }

    fn narrate<N: NotificationSink>(&self, sink: &mut N) {
        for event in &self.events {
            match event {
                Event::Established { .. } => {
                    sink.notify("The overmind core burrows into the deck.");
                }
                Event::MilestoneReached { milestone } => match milestone {
                    Milestone::Detected => sink.notify(
                        "Biohazard alert: a hostile organism has been detected aboard the station.",
                    ),
                    Milestone::Halfway => sink.notify(
                        "The organism has claimed half the territory it needs to overrun the station.",
                    ),
                    Milestone::NearVictory => sink.notify(
                        "Critical biomass approaching. Destroy the core immediately.",
                    ),
                },
                Event::VictoryAchieved => {
                    sink.notify("The organism has overrun the station.");
                }
                Event::OrganismDied { .. } => {
                    sink.notify("The overmind core has been destroyed. The organism withers.");
                }
                Event::CoreRelocated { .. } => {
                    sink.notify("The core slithers into a new shell.");
                }
                Event::OvermindRecalled { .. } => {
                    sink.notify("The overmind snaps back to its organism.");
                }
                Event::ActionRejected { reason } => {
                    sink.notify(&reason.to_string());
                }
                _ => {}
            }
        }
    }
}
