//! Game State
//!
//! Owns every system of the range and runs one tick per rendered frame:
//! apply queued events, advance the aim, pose the cannon, move the ball,
//! then emit the draw list.

use crate::game::config::RangeConfig;
use crate::game::frame::{MeshId, RenderCommand};
use crate::game::input::GameEvent;
use crate::game::systems::{AimingSystem, ProjectileSystem, ShotReport};
use crate::game::targets::{ScoreCounter, TargetSet};
use crate::game::transform::TransformComposer;

/// Result of one tick.
#[derive(Debug, Clone, Default)]
pub struct FrameOutput {
    /// Draws in submission order
    pub commands: Vec<RenderCommand>,
    pub report: ShotReport,
    /// A quit event was seen; nothing else was processed
    pub quit: bool,
}

pub struct GameState {
    composer: TransformComposer,
    aiming: AimingSystem,
    projectiles: ProjectileSystem,
    targets: TargetSet,
    score: ScoreCounter,
    ticks: u64,
}

impl GameState {
    pub fn new(config: RangeConfig, width: u32, height: u32) -> Self {
        let composer = TransformComposer::new(config.camera, config.layout, width, height);
        let aiming = AimingSystem::new(config.aiming);
        let mut projectiles = ProjectileSystem::new(
            config.ballistics,
            config.projectile_radius,
            config.floor_policy,
        );
        let pose = composer.pose_cannon(aiming.angle_degrees());
        projectiles.track_muzzle(composer.muzzle_position(&pose));

        tracing::debug!(
            floor_policy = ?config.floor_policy,
            speed = aiming.speed(),
            "[State] range ready"
        );

        Self {
            composer,
            aiming,
            projectiles,
            targets: TargetSet::from_config(&config.targets),
            score: ScoreCounter::default(),
            ticks: 0,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.composer.resize(width, height);
    }

    /// Run one tick with the events queued since the previous one.
    pub fn update(&mut self, events: &[GameEvent]) -> FrameOutput {
        for event in events {
            match event {
                GameEvent::Quit => {
                    return FrameOutput {
                        quit: true,
                        ..FrameOutput::default()
                    };
                }
                GameEvent::Fire => self.fire(),
                other => self.aiming.handle(other),
            }
        }

        let report = if self.projectiles.is_launched() {
            self.projectiles.advance(&mut self.targets, &mut self.score)
        } else {
            ShotReport::default()
        };

        // A frozen ball below the floor holds the aim on the same tick
        if !self.projectiles.is_frozen() {
            self.aiming.advance();
        }

        self.composer.begin_frame();
        let pose = self.composer.pose_cannon(self.aiming.angle_degrees());
        self.projectiles
            .track_muzzle(self.composer.muzzle_position(&pose));

        self.ticks += 1;

        let mut commands = Vec::with_capacity(MeshId::COUNT);
        let scene = self.composer.scene();
        commands.push(RenderCommand { mesh: MeshId::Spire, transform: scene });
        commands.push(RenderCommand { mesh: MeshId::Column, transform: scene });
        commands.push(RenderCommand { mesh: MeshId::Ledge, transform: scene });

        for (mesh, target) in MeshId::TARGETS.into_iter().zip(self.targets.iter()) {
            if !target.is_hit() {
                commands.push(RenderCommand {
                    mesh,
                    transform: self.composer.at(target.center),
                });
            }
        }

        commands.push(RenderCommand {
            mesh: MeshId::Cannon,
            transform: self.composer.cannon(&pose),
        });
        commands.push(RenderCommand {
            mesh: MeshId::Hub,
            transform: self.composer.hub(&pose),
        });
        commands.push(RenderCommand {
            mesh: MeshId::Pivot,
            transform: self.composer.pivot(),
        });

        if !report.below_cutoff {
            let transform = if self.projectiles.is_launched() {
                self.composer.at(self.projectiles.projectile().position)
            } else {
                self.composer.resting_projectile(&pose)
            };
            commands.push(RenderCommand {
                mesh: MeshId::Projectile,
                transform,
            });
        }

        FrameOutput {
            commands,
            report,
            quit: false,
        }
    }

    fn fire(&mut self) {
        let pose = self.composer.pose_cannon(self.aiming.angle_degrees());
        self.projectiles
            .track_muzzle(self.composer.muzzle_position(&pose));
        if !self
            .projectiles
            .fire(self.aiming.angle_degrees(), self.aiming.speed())
        {
            tracing::debug!("[State] fire ignored, shot in flight");
        }
    }

    pub fn score(&self) -> u32 {
        self.score.value()
    }

    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    pub fn aiming(&self) -> &AimingSystem {
        &self.aiming
    }

    pub fn projectiles(&self) -> &ProjectileSystem {
        &self.projectiles
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(RangeConfig::default(), 1280, 720)
    }

    #[test]
    fn test_idle_frame_draws_everything() {
        let mut state = state();
        let frame = state.update(&[]);
        let meshes: Vec<MeshId> = frame.commands.iter().map(|c| c.mesh).collect();
        assert_eq!(meshes, MeshId::ALL.to_vec());
        assert!(!frame.quit);
    }

    #[test]
    fn test_quit_short_circuits() {
        let mut state = state();
        let frame = state.update(&[GameEvent::RotateLeftDown, GameEvent::Quit, GameEvent::Fire]);
        assert!(frame.quit);
        assert!(frame.commands.is_empty());
        assert!(!state.projectiles().is_launched());
    }

    #[test]
    fn test_fire_launches_from_muzzle() {
        let mut state = state();
        state.update(&[GameEvent::Fire]);
        let ball = state.projectiles().projectile();
        assert!(ball.launched);
        assert_eq!(ball.elapsed, 0.1);
        assert!((ball.position.x - 1.0).abs() < 1e-5);
        assert!(ball.position.y > 1.16);
    }

    #[test]
    fn test_rotation_moves_resting_ball() {
        let mut state = state();
        state.update(&[GameEvent::RotateLeftDown]);
        assert_eq!(state.aiming().angle_degrees(), 5.0);
        assert!(state.projectiles().projectile().position.x < 1.0);
    }

    #[test]
    fn test_ticks_count_simulated_frames_only() {
        let mut state = state();
        state.update(&[]);
        state.update(&[GameEvent::Fire]);
        state.update(&[GameEvent::Quit]);
        assert_eq!(state.ticks(), 2);
    }
}
