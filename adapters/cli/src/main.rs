#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a headless organism session against a
//! procedurally generated station.

mod station;

use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use overmind_core::{Config, Event, NotificationSink, StructureKind};
use overmind_director::Director;
use overmind_world::query;

use crate::station::Station;

/// Command-line arguments controlling the simulated session.
#[derive(Debug, Parser)]
#[command(name = "overmind", about = "Headless organism takeover simulation")]
struct Args {
    /// Seed shared by the station generator and the organism's RNG.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Number of one-second ticks to simulate before giving up.
    #[arg(long, default_value_t = 1_800)]
    ticks: u32,

    /// Station hull width in tiles.
    #[arg(long, default_value_t = 40)]
    width: i32,

    /// Station hull height in tiles.
    #[arg(long, default_value_t = 40)]
    height: i32,

    /// Number of crew members wandering the station.
    #[arg(long, default_value_t = 12)]
    crew: u32,

    /// Anchored tiles required for the organism to win.
    #[arg(long, default_value_t = 400)]
    victory_target: u32,
}

/// Notification sink that prints narrative lines to standard output.
#[derive(Debug, Default)]
struct Console;

impl NotificationSink for Console {
    fn notify(&mut self, message: &str) {
        println!("[station] {message}");
    }
}

/// Sink that swallows the rejection chatter from speculative placements.
#[derive(Debug, Default)]
struct Quiet;

impl NotificationSink for Quiet {
    fn notify(&mut self, _message: &str) {}
}

/// Attempts one specialised placement on any eligible plain tile.
fn try_upgrade(director: &mut Director, station: &mut Station, kind: StructureKind) -> bool {
    let mut quiet = Quiet;
    let tiles = query::tile_view(director.world()).into_vec();
    for tile in tiles {
        if tile.kind != StructureKind::Normal {
            continue;
        }
        let upgraded = director
            .place_special(station, &mut quiet, kind, tile.at)
            .iter()
            .any(|event| matches!(event, Event::TileUpgraded { .. }));
        if upgraded {
            return true;
        }
    }
    false
}

/// Spends banked resources on the build order: Nodes to widen the
/// frontier, then Resources, then a Factory.
fn invest(director: &mut Director, station: &mut Station) {
    let config = *query::config(director.world());
    loop {
        let resources = query::resources(director.world());
        let placed = if resources >= config.node_cost + config.normal_cost {
            try_upgrade(director, station, StructureKind::Node)
        } else if resources >= config.resource_cost + config.normal_cost {
            try_upgrade(director, station, StructureKind::Resource)
        } else if resources >= config.factory_cost + config.normal_cost
            && query::positions_of(director.world(), StructureKind::Factory).is_empty()
        {
            try_upgrade(director, station, StructureKind::Factory)
        } else {
            false
        };
        if !placed {
            return;
        }
    }
}

/// Entry point for the Overmind command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    if args.width < 8 || args.height < 8 {
        bail!("station hull must be at least 8x8 tiles");
    }

    let mut config = Config::default();
    config.victory_target = args.victory_target;

    let mut station = Station::generate(args.width, args.height, args.crew, args.seed);
    let mut console = Console;
    let mut director = Director::new(
        config,
        overmind_system_cadence::Config::default(),
        args.seed,
    );

    let origin = station.centre();
    let _ = director.establish(&mut station, &mut console, origin);
    println!("[overmind] core planted at ({}, {})", origin.x(), origin.y());

    let dt = Duration::from_secs(1);
    for tick in 0..args.ticks {
        let _ = director.tick(&mut station, &mut console, dt);
        invest(&mut director, &mut station);

        if tick % 60 == 0 {
            println!(
                "[overmind] t={:>4}s tiles={} anchored={} resources={}",
                tick,
                query::tile_count(director.world()),
                query::anchored_tile_count(director.world()),
                query::resources(director.world()),
            );
        }

        if query::is_victorious(director.world()) || !query::is_alive(director.world()) {
            break;
        }
    }

    let (peak_total, peak_anchored) = query::peak_counts(director.world());
    println!("[overmind] session over after {:?}", query::clock(director.world()));
    println!(
        "[overmind] outcome: {}",
        if query::is_victorious(director.world()) {
            "station overrun"
        } else if query::is_alive(director.world()) {
            "stalemate"
        } else {
            "organism destroyed"
        }
    );
    println!("[overmind] peak tiles: {peak_total} total, {peak_anchored} anchored");
    println!(
        "[overmind] collateral: {} walls breached, {} of {} crew downed",
        station.walls_breached(),
        station.crew_downed(),
        station.crew_downed() + station.crew_standing(),
    );

    Ok(())
}
