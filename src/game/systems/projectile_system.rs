//! Projectile lifecycle system.
//!
//! Owns the single cannonball and its physics config. Before launch the ball
//! follows the muzzle; in flight it integrates, scores against the targets,
//! rebounds off the range walls and finally drops below the cutoff.

use crate::game::config::FloorPolicy;
use crate::game::targets::{ScoreCounter, TARGET_COUNT, TargetSet};
use crate::physics::{BallisticsConfig, Circle, Projectile, Rebound};

/// What happened to the ball during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShotReport {
    /// Targets knocked down this tick
    pub hits: [bool; TARGET_COUNT],
    pub rebound: Rebound,
    /// Ball is below the cutoff after this tick
    pub below_cutoff: bool,
    /// Ball went back to the muzzle this tick
    pub rearmed: bool,
}

impl ShotReport {
    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|&&hit| hit).count()
    }
}

pub struct ProjectileSystem {
    projectile: Projectile,
    config: BallisticsConfig,
    floor_policy: FloorPolicy,
}

impl ProjectileSystem {
    pub fn new(config: BallisticsConfig, radius: f32, floor_policy: FloorPolicy) -> Self {
        Self {
            projectile: Projectile::resting(glam::Vec2::ZERO, radius),
            config,
            floor_policy,
        }
    }

    /// Launch from the current muzzle position.
    ///
    /// Returns `true` if the ball was fired; a shot already in flight wins.
    pub fn fire(&mut self, angle_degrees: f32, speed: f32) -> bool {
        let fired = self.projectile.launch(angle_degrees, speed);
        if fired {
            tracing::info!(
                angle = angle_degrees,
                speed,
                x = self.projectile.position.x,
                y = self.projectile.position.y,
                "[Projectile] fired"
            );
        }
        fired
    }

    /// Keep the resting ball on the muzzle.
    pub fn track_muzzle(&mut self, muzzle: glam::Vec2) {
        self.projectile.track_muzzle(muzzle);
    }

    /// Run one physics tick for a launched ball.
    pub fn advance(&mut self, targets: &mut TargetSet, score: &mut ScoreCounter) -> ShotReport {
        let mut report = ShotReport::default();
        if !self.projectile.launched {
            return report;
        }

        self.projectile.integrate(&self.config);

        let ball = Circle::new(self.projectile.position, self.projectile.radius);
        report.hits = targets.register_hits(&ball);
        for (index, _) in report.hits.iter().enumerate().filter(|(_, hit)| **hit) {
            score.record_hit();
            tracing::info!(target_index = index, score = score.value(), "[Projectile] target hit");
        }

        report.rebound = self.projectile.apply_rebound(&self.config);
        if report.rebound.horizontal || report.rebound.vertical {
            tracing::trace!(
                horizontal = report.rebound.horizontal,
                vertical = report.rebound.vertical,
                "[Projectile] rebound"
            );
        }

        report.below_cutoff = self.projectile.is_below_cutoff(&self.config);
        if report.below_cutoff && self.floor_policy == FloorPolicy::Rearm {
            self.projectile.rearm();
            report.rearmed = true;
            tracing::debug!("[Projectile] dropped out, rearmed");
        }

        report
    }

    pub fn is_launched(&self) -> bool {
        self.projectile.launched
    }

    /// True while a frozen ball sits below the cutoff.
    pub fn is_frozen(&self) -> bool {
        self.floor_policy == FloorPolicy::Freeze
            && self.projectile.launched
            && self.projectile.is_below_cutoff(&self.config)
    }

    pub fn projectile(&self) -> &Projectile {
        &self.projectile
    }

    pub fn config(&self) -> &BallisticsConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::targets::Target;
    use glam::Vec2;

    fn far_targets() -> TargetSet {
        TargetSet::new([
            Target::new(Vec2::new(100.0, 100.0), 0.1),
            Target::new(Vec2::new(-100.0, 100.0), 0.1),
            Target::new(Vec2::new(100.0, -100.0), 0.1),
        ])
    }

    #[test]
    fn test_unlaunched_ball_does_not_move() {
        let mut system = ProjectileSystem::new(BallisticsConfig::default(), 0.1, FloorPolicy::Rearm);
        system.track_muzzle(Vec2::new(1.0, 1.16));
        let report = system.advance(&mut far_targets(), &mut ScoreCounter::default());
        assert_eq!(report, ShotReport::default());
        assert_eq!(system.projectile().position, Vec2::new(1.0, 1.16));
    }

    #[test]
    fn test_second_fire_ignored() {
        let mut system = ProjectileSystem::new(BallisticsConfig::default(), 0.1, FloorPolicy::Rearm);
        assert!(system.fire(0.0, 0.03));
        assert!(!system.fire(45.0, 0.5));
        assert_eq!(system.projectile().velocity, Vec2::new(0.0, 0.03));
    }

    #[test]
    fn test_hit_scores_once() {
        let mut system = ProjectileSystem::new(BallisticsConfig::default(), 0.1, FloorPolicy::Rearm);
        system.track_muzzle(Vec2::new(1.0, 1.0));
        let mut targets = TargetSet::new([
            Target::new(Vec2::new(1.0, 1.0), 5.0),
            Target::new(Vec2::new(100.0, 100.0), 0.1),
            Target::new(Vec2::new(-100.0, 100.0), 0.1),
        ]);
        let mut score = ScoreCounter::default();
        system.fire(0.0, 0.03);

        let first = system.advance(&mut targets, &mut score);
        assert_eq!(first.hits, [true, false, false]);
        let second = system.advance(&mut targets, &mut score);
        assert_eq!(second.hit_count(), 0);
        assert_eq!(score.value(), 1);
    }

    #[test]
    fn test_rearm_policy_returns_to_muzzle() {
        let mut system = ProjectileSystem::new(BallisticsConfig::default(), 0.1, FloorPolicy::Rearm);
        system.track_muzzle(Vec2::new(1.0, -1.99));
        system.fire(180.0, 0.5);
        let report = system.advance(&mut far_targets(), &mut ScoreCounter::default());
        assert!(report.below_cutoff);
        assert!(report.rearmed);
        assert!(!system.is_launched());
        assert!(system.fire(0.0, 0.03));
    }

    #[test]
    fn test_freeze_policy_keeps_flying() {
        let mut system = ProjectileSystem::new(BallisticsConfig::default(), 0.1, FloorPolicy::Freeze);
        system.track_muzzle(Vec2::new(1.0, -1.99));
        system.fire(180.0, 0.5);
        let report = system.advance(&mut far_targets(), &mut ScoreCounter::default());
        assert!(report.below_cutoff);
        assert!(!report.rearmed);
        assert!(system.is_launched());
        assert!(system.is_frozen());
        assert!(!system.fire(0.0, 0.03));
    }
}
