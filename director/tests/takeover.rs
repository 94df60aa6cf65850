//! End-to-end session: an organism on an open deck grows from a single
//! core to a declared victory, announcing every milestone on the way.

use std::collections::BTreeSet;
use std::time::Duration;

use overmind_core::{
    ActorHandle, ActorSpawner, AttackKind, Config, DamageKind, DamageTarget, GridPoint,
    NotificationSink, Occupant, OccupantFilter, SpawnKind, WorldGrid,
};
use overmind_director::Director;
use overmind_world::query;

#[derive(Debug, Default)]
struct OpenDeck {
    next_handle: u64,
    space: BTreeSet<GridPoint>,
}

impl WorldGrid for OpenDeck {
    fn is_space_at(&self, at: GridPoint) -> bool {
        self.space.contains(&at)
    }

    fn is_passable_at(&self, _at: GridPoint) -> bool {
        true
    }

    fn occupants_at(&self, _at: GridPoint, _filter: OccupantFilter) -> Vec<Occupant> {
        Vec::new()
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

impl ActorSpawner for OpenDeck {
    fn spawn(&mut self, _kind: SpawnKind, _at: GridPoint) -> Option<ActorHandle> {
        self.next_handle += 1;
        Some(ActorHandle::new(self.next_handle))
    }

    fn despawn(&mut self, _actor: ActorHandle) {}

    fn relocate(&mut self, _actor: ActorHandle, _to: GridPoint) {}
}

#[derive(Debug, Default)]
struct Transcript {
    messages: Vec<String>,
}

impl NotificationSink for Transcript {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

fn position_of(transcript: &Transcript, needle: &str) -> Option<usize> {
    transcript
        .messages
        .iter()
        .position(|message| message.contains(needle))
}

#[test]
fn organism_grows_to_victory_on_an_open_deck() {
    let mut config = Config::default();
    config.victory_target = 8;
    config.detection_threshold = 3;

    let mut deck = OpenDeck::default();
    let mut transcript = Transcript::default();
    let mut director = Director::new(
        config,
        overmind_system_cadence::Config::default(),
        0xfeed,
    );

    let _ = director.establish(&mut deck, &mut transcript, GridPoint::new(0, 0));

    let dt = Duration::from_secs(1);
    for _ in 0..600 {
        let _ = director.tick(&mut deck, &mut transcript, dt);
        if query::is_victorious(director.world()) {
            break;
        }
    }

    assert!(query::is_victorious(director.world()));
    assert!(query::anchored_tile_count(director.world()) >= config.victory_target);

    let detected = position_of(&transcript, "detected").expect("detection announced");
    let halfway = position_of(&transcript, "half the territory").expect("halfway announced");
    let near = position_of(&transcript, "Critical biomass").expect("near-victory announced");
    let overrun = position_of(&transcript, "overrun the station").expect("victory announced");
    assert!(detected <= halfway, "detection precedes halfway");
    assert!(halfway <= near, "halfway precedes near-victory");
    assert!(near <= overrun, "near-victory precedes victory");

    // Victory lifts the economy: the raised cap lets income pile far past
    // the pre-victory ceiling.
    for _ in 0..200 {
        let _ = director.tick(&mut deck, &mut transcript, dt);
    }
    assert!(query::resources(director.world()) > Config::default().max_capacity);
}

#[test]
fn unanchored_growth_never_wins() {
    let mut config = Config::default();
    config.victory_target = 4;

    let mut deck = OpenDeck::default();
    // Everything except the core's own tile hangs over open space.
    for x in -30..=30 {
        for y in -30..=30 {
            if (x, y) != (0, 0) {
                let _ = deck.space.insert(GridPoint::new(x, y));
            }
        }
    }
    let mut transcript = Transcript::default();
    let mut director = Director::new(
        config,
        overmind_system_cadence::Config::default(),
        0xfeed,
    );

    let _ = director.establish(&mut deck, &mut transcript, GridPoint::new(0, 0));
    for _ in 0..120 {
        let _ = director.tick(&mut deck, &mut transcript, Duration::from_secs(1));
    }

    assert!(query::tile_count(director.world()) > config.victory_target);
    assert!(!query::is_victorious(director.world()));
    assert_eq!(query::anchored_tile_count(director.world()), 1);
}
