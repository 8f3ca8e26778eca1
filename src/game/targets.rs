//! Targets and Score
//!
//! The three target discs live in a fixed-size array; a target is addressed
//! by its index, never by reference held across frames.

use glam::Vec2;

use crate::physics::Circle;

use super::config::TargetConfig;

/// Number of targets on the range.
pub const TARGET_COUNT: usize = 3;

static_assertions::const_assert_eq!(TARGET_COUNT, 3);

/// A target disc. Once hit it stays hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub center: Vec2,
    pub radius: f32,
    hit: bool,
}

impl Target {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            hit: false,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }

    /// Mark the target hit if `ball` touches it.
    ///
    /// Returns `true` only on the transition; an already hit target never
    /// reports again.
    pub fn try_hit(&mut self, ball: &Circle) -> bool {
        if self.hit || !self.circle().overlaps(ball) {
            return false;
        }
        self.hit = true;
        true
    }
}

/// The fixed target arena.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetSet {
    targets: [Target; TARGET_COUNT],
}

impl TargetSet {
    pub fn new(targets: [Target; TARGET_COUNT]) -> Self {
        Self { targets }
    }

    pub fn from_config(configs: &[TargetConfig; TARGET_COUNT]) -> Self {
        Self::new(configs.map(|config| Target::new(config.center, config.radius)))
    }

    pub fn get(&self, index: usize) -> Option<&Target> {
        self.targets.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    pub fn remaining(&self) -> usize {
        self.targets.iter().filter(|t| !t.is_hit()).count()
    }

    pub fn all_hit(&self) -> bool {
        self.remaining() == 0
    }

    /// Check `ball` against every standing target.
    ///
    /// Returns a flag per target that was knocked down by this call.
    pub fn register_hits(&mut self, ball: &Circle) -> [bool; TARGET_COUNT] {
        let mut newly_hit = [false; TARGET_COUNT];
        for (flag, target) in newly_hit.iter_mut().zip(self.targets.iter_mut()) {
            *flag = target.try_hit(ball);
        }
        newly_hit
    }
}

/// Monotonic hit counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCounter {
    value: u32,
}

impl ScoreCounter {
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn record_hit(&mut self) {
        self.value += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32) -> Circle {
        Circle::new(Vec2::new(x, y), 0.1)
    }

    #[test]
    fn test_hit_is_terminal() {
        let mut target = Target::new(Vec2::new(1.0, 1.0), 0.5);
        assert!(target.try_hit(&ball_at(1.2, 1.0)));
        assert!(target.is_hit());
        assert!(!target.try_hit(&ball_at(1.0, 1.0)));
        assert!(target.is_hit());
    }

    #[test]
    fn test_miss_leaves_target_standing() {
        let mut target = Target::new(Vec2::new(1.0, 1.0), 0.5);
        assert!(!target.try_hit(&ball_at(3.0, 3.0)));
        assert!(!target.is_hit());
    }

    #[test]
    fn test_register_hits_only_reports_transitions() {
        let mut set = TargetSet::new([
            Target::new(Vec2::new(0.0, 0.0), 0.5),
            Target::new(Vec2::new(5.0, 0.0), 0.5),
            Target::new(Vec2::new(0.0, 5.0), 0.5),
        ]);
        assert_eq!(set.register_hits(&ball_at(0.2, 0.0)), [true, false, false]);
        assert_eq!(set.register_hits(&ball_at(0.2, 0.0)), [false, false, false]);
        assert_eq!(set.remaining(), 2);
        assert!(!set.all_hit());
    }

    #[test]
    fn test_fixed_size() {
        let set = TargetSet::from_config(&crate::game::config::RangeConfig::default().targets);
        assert_eq!(set.iter().count(), TARGET_COUNT);
        assert!(set.get(TARGET_COUNT).is_none());
    }

    #[test]
    fn test_score_counts_up() {
        let mut score = ScoreCounter::default();
        score.record_hit();
        score.record_hit();
        assert_eq!(score.value(), 2);
    }
}
