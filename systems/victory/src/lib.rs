#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure progress-tracking system that latches organism milestones.
//!
//! The system watches `CensusUpdated` and `TimeAdvanced` events and emits
//! milestone announcements and the victory declaration. Every latch is
//! one-shot: once a threshold fires it never fires again, even if the
//! census later drops back below it.

use std::time::Duration;

use overmind_core::{Command, Config, Event, Milestone};

/// Pure system that converts census reports into milestone commands.
#[derive(Debug)]
pub struct Victory {
    clock: Duration,
    detected: bool,
    halfway: bool,
    near_victory: bool,
    declared: bool,
}

impl Victory {
    /// Creates a new tracker with no milestones latched.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clock: Duration::ZERO,
            detected: false,
            halfway: false,
            near_victory: false,
            declared: false,
        }
    }

    /// Consumes world events and emits the milestone commands that latched.
    pub fn handle(&mut self, events: &[Event], config: &Config, out: &mut Vec<Command>) {
        let mut census: Option<(u32, u32)> = None;
        for event in events {
            match event {
                Event::TimeAdvanced { dt } => {
                    self.clock = self.clock.saturating_add(*dt);
                }
                Event::CensusUpdated { total, anchored } => {
                    census = Some((*total, *anchored));
                }
                _ => {}
            }
        }

        if !self.detected
            && (census.map_or(false, |(total, _)| total >= config.detection_threshold)
                || self.clock >= config.announce_delay)
        {
            self.detected = true;
            out.push(Command::AnnounceMilestone {
                milestone: Milestone::Detected,
            });
        }

        let Some((_, anchored)) = census else {
            return;
        };
        let target = config.victory_target;

        if !self.halfway && anchored >= target / 2 {
            self.halfway = true;
            out.push(Command::AnnounceMilestone {
                milestone: Milestone::Halfway,
            });
        }

        // Integer form of "within 80% of the target", n >= T / 1.25.
        if !self.near_victory && anchored * 5 >= target * 4 {
            self.near_victory = true;
            out.push(Command::AnnounceMilestone {
                milestone: Milestone::NearVictory,
            });
        }

        if !self.declared && anchored >= target {
            self.declared = true;
            out.push(Command::DeclareVictory);
        }
    }
}

impl Default for Victory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn census(total: u32, anchored: u32) -> Vec<Event> {
        vec![Event::CensusUpdated { total, anchored }]
    }

    fn commands_for(victory: &mut Victory, events: &[Event], config: &Config) -> Vec<Command> {
        let mut out = Vec::new();
        victory.handle(events, config, &mut out);
        out
    }

    #[test]
    fn detection_latches_on_tile_count() {
        let config = Config::default();
        let mut victory = Victory::new();
        assert!(commands_for(&mut victory, &census(74, 0), &config).is_empty());
        assert_eq!(
            commands_for(&mut victory, &census(75, 0), &config),
            vec![Command::AnnounceMilestone {
                milestone: Milestone::Detected
            }]
        );
        // The latch never repeats, even after shrinking and regrowing.
        assert!(commands_for(&mut victory, &census(10, 0), &config).is_empty());
        assert!(commands_for(&mut victory, &census(80, 0), &config).is_empty());
    }

    #[test]
    fn detection_latches_on_elapsed_time_alone() {
        let config = Config::default();
        let mut victory = Victory::new();
        let events = vec![Event::TimeAdvanced {
            dt: config.announce_delay,
        }];
        assert_eq!(
            commands_for(&mut victory, &events, &config),
            vec![Command::AnnounceMilestone {
                milestone: Milestone::Detected
            }]
        );
    }

    #[test]
    fn progress_milestones_use_anchored_tiles_only() {
        let config = Config::default();
        let target = config.victory_target;
        let mut victory = Victory::new();

        // Unanchored tiles never advance progress milestones.
        let out = commands_for(&mut victory, &census(target, 0), &config);
        assert_eq!(out.len(), 1, "only detection should fire: {out:?}");

        let out = commands_for(&mut victory, &census(target, target / 2), &config);
        assert_eq!(
            out,
            vec![Command::AnnounceMilestone {
                milestone: Milestone::Halfway
            }]
        );
    }

    #[test]
    fn near_victory_fires_at_eighty_percent() {
        let config = Config::default();
        let target = config.victory_target;
        let below = target * 4 / 5 - 1;
        let mut victory = Victory::new();
        let out = commands_for(&mut victory, &census(below, below), &config);
        assert!(!out.contains(&Command::AnnounceMilestone {
            milestone: Milestone::NearVictory
        }));

        let out = commands_for(&mut victory, &census(target * 4 / 5, target * 4 / 5), &config);
        assert!(out.contains(&Command::AnnounceMilestone {
            milestone: Milestone::NearVictory
        }));
    }

    #[test]
    fn reaching_the_target_declares_victory_once() {
        let config = Config::default();
        let target = config.victory_target;
        let mut victory = Victory::new();
        let out = commands_for(&mut victory, &census(target, target), &config);
        assert!(out.contains(&Command::DeclareVictory));

        let out = commands_for(&mut victory, &census(target + 5, target + 5), &config);
        assert!(out.is_empty());
    }

    #[test]
    fn skipped_thresholds_all_fire_in_one_report() {
        let config = Config::default();
        let target = config.victory_target;
        let mut victory = Victory::new();
        let out = commands_for(&mut victory, &census(target, target), &config);
        assert_eq!(
            out,
            vec![
                Command::AnnounceMilestone {
                    milestone: Milestone::Detected
                },
                Command::AnnounceMilestone {
                    milestone: Milestone::Halfway
                },
                Command::AnnounceMilestone {
                    milestone: Milestone::NearVictory
                },
                Command::DeclareVictory,
            ]
        );
    }
}
