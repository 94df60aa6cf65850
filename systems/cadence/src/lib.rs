#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic scheduler that converts elapsed time into periodic
//! organism upkeep commands.
//!
//! The world never keeps its own timers for expansion, income, minion
//! production, or integrity pulses. This system accumulates
//! `TimeAdvanced` events and emits one upkeep command per elapsed
//! interval, so replaying the same tick sequence always yields the same
//! command stream.

use std::time::Duration;

use overmind_core::{Command, Event};

/// Configuration parameters required to construct the cadence system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    expand_interval: Duration,
    income_interval: Duration,
    minion_interval: Duration,
    pulse_interval: Duration,
}

impl Config {
    /// Creates a new configuration from explicit upkeep intervals.
    #[must_use]
    pub const fn new(
        expand_interval: Duration,
        income_interval: Duration,
        minion_interval: Duration,
        pulse_interval: Duration,
    ) -> Self {
        Self {
            expand_interval,
            income_interval,
            minion_interval,
            pulse_interval,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            Duration::from_secs(1),
            Duration::from_secs(5),
            Duration::from_secs(10),
            Duration::from_secs(10),
        )
    }
}

/// Pure system that emits upkeep commands on fixed intervals.
#[derive(Debug)]
pub struct Cadence {
    timers: [Timer; 4],
}

#[derive(Clone, Copy, Debug)]
struct Timer {
    interval: Duration,
    accumulator: Duration,
    command: Command,
}

impl Timer {
    const fn new(interval: Duration, command: Command) -> Self {
        Self {
            interval,
            accumulator: Duration::ZERO,
            command,
        }
    }

    fn emit_elapsed(&mut self, accumulated: Duration, out: &mut Vec<Command>) {
        if self.interval.is_zero() {
            return;
        }
        self.accumulator = self.accumulator.saturating_add(accumulated);
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            out.push(self.command);
        }
    }
}

impl Cadence {
    /// Creates a new cadence system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            timers: [
                Timer::new(config.expand_interval, Command::Expand),
                Timer::new(config.income_interval, Command::AccrueIncome),
                Timer::new(config.minion_interval, Command::SpawnMinions),
                Timer::new(config.pulse_interval, Command::PulseIntegrity),
            ],
        }
    }

    /// Consumes events and emits the upkeep commands whose intervals
    /// elapsed.
    ///
    /// A dead organism stops all timers and discards accumulated time, so
    /// upkeep never resumes with a burst after a collapse.
    pub fn handle(&mut self, events: &[Event], alive: bool, out: &mut Vec<Command>) {
        if !alive {
            for timer in &mut self.timers {
                timer.accumulator = Duration::ZERO;
            }
            return;
        }

        let mut accumulated = Duration::ZERO;
        for event in events {
            if let Event::TimeAdvanced { dt } = event {
                accumulated = accumulated.saturating_add(*dt);
            }
        }

        if accumulated.is_zero() {
            return;
        }

        for timer in &mut self.timers {
            timer.emit_elapsed(accumulated, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance(cadence: &mut Cadence, dt: Duration, out: &mut Vec<Command>) {
        cadence.handle(&[Event::TimeAdvanced { dt }], true, out);
    }

    fn count(out: &[Command], wanted: Command) -> usize {
        out.iter().filter(|command| **command == wanted).count()
    }

    #[test]
    fn one_second_tick_emits_only_expansion() {
        let mut cadence = Cadence::new(Config::default());
        let mut out = Vec::new();
        advance(&mut cadence, Duration::from_secs(1), &mut out);
        assert_eq!(out, vec![Command::Expand]);
    }

    #[test]
    fn intervals_fire_in_lockstep_over_ten_seconds() {
        let mut cadence = Cadence::new(Config::default());
        let mut out = Vec::new();
        for _ in 0..10 {
            advance(&mut cadence, Duration::from_secs(1), &mut out);
        }
        assert_eq!(count(&out, Command::Expand), 10);
        assert_eq!(count(&out, Command::AccrueIncome), 2);
        assert_eq!(count(&out, Command::SpawnMinions), 1);
        assert_eq!(count(&out, Command::PulseIntegrity), 1);
    }

    #[test]
    fn oversized_tick_emits_one_command_per_elapsed_interval() {
        let mut cadence = Cadence::new(Config::default());
        let mut out = Vec::new();
        advance(&mut cadence, Duration::from_secs(3), &mut out);
        assert_eq!(count(&out, Command::Expand), 3);
        assert_eq!(count(&out, Command::AccrueIncome), 0);
    }

    #[test]
    fn fractional_ticks_accumulate_across_calls() {
        let mut cadence = Cadence::new(Config::default());
        let mut out = Vec::new();
        advance(&mut cadence, Duration::from_millis(600), &mut out);
        assert!(out.is_empty());
        advance(&mut cadence, Duration::from_millis(600), &mut out);
        assert_eq!(out, vec![Command::Expand]);
    }

    #[test]
    fn dead_organism_discards_accumulated_time() {
        let mut cadence = Cadence::new(Config::default());
        let mut out = Vec::new();
        advance(&mut cadence, Duration::from_millis(900), &mut out);
        cadence.handle(
            &[Event::TimeAdvanced {
                dt: Duration::from_millis(900),
            }],
            false,
            &mut out,
        );
        assert!(out.is_empty());
        // Time after the reset starts from zero again.
        advance(&mut cadence, Duration::from_millis(900), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn zero_interval_never_emits() {
        let config = Config::new(
            Duration::ZERO,
            Duration::from_secs(5),
            Duration::from_secs(10),
            Duration::from_secs(10),
        );
        let mut cadence = Cadence::new(config);
        let mut out = Vec::new();
        advance(&mut cadence, Duration::from_secs(2), &mut out);
        assert!(out.is_empty());
    }
}
