//! Axis-aligned collision and the per-tick scoring sweep
//!
//! Every sprite is treated as its bounding box at the current scale.

use glam::Vec2;

use super::state::{GameEvent, GameState};
use crate::consts::{COLLECTIBLE_BONUS, METEOR_PENALTY};

/// Axis-aligned bounding box stored as center + half extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size * 0.5,
        }
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.half.y
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Overlap test; boxes sharing an edge count as touching
    pub fn touches(&self, other: &Aabb) -> bool {
        let d = (self.center - other.center).abs();
        d.x <= self.half.x + other.half.x && d.y <= self.half.y + other.half.y
    }

    /// Move `self` out of `obstacle` along the axis of least penetration.
    /// Boxes that only share an edge are left where they are.
    pub fn push_out_of(&self, obstacle: &Aabb) -> Aabb {
        let delta = self.center - obstacle.center;
        let pen = self.half + obstacle.half - delta.abs();
        if pen.x <= 0.0 || pen.y <= 0.0 {
            return *self;
        }

        let mut center = self.center;
        if pen.y <= pen.x {
            center.y += if delta.y < 0.0 { -pen.y } else { pen.y };
        } else {
            center.x += if delta.x < 0.0 { -pen.x } else { pen.x };
        }
        Aabb { center, ..*self }
    }
}

/// Overlap queries and obstacle resolution used by the simulation.
///
/// The render/input engine supplies these; the defaults are plain box
/// geometry.
pub trait Physics {
    fn overlaps(&self, a: &Aabb, b: &Aabb) -> bool {
        a.touches(b)
    }

    /// Where `mover` ends up after being pushed out of a static `obstacle`
    fn resolve(&self, mover: &Aabb, obstacle: &Aabb) -> Aabb {
        mover.push_out_of(obstacle)
    }
}

/// Box-geometry physics with no engine behind it
#[derive(Debug, Clone, Copy, Default)]
pub struct AabbPhysics;

impl Physics for AabbPhysics {}

/// What a sweep did this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub meteors_hit: u32,
    pub hearts_collected: u32,
    pub despawned: u32,
}

/// Advance every falling entity, apply player hits and drop what left the
/// screen. Each entity gets at most one outcome per tick.
pub fn sweep<P: Physics + ?Sized>(state: &mut GameState, physics: &P) -> SweepReport {
    let player = state.player.bounds();
    let mut report = SweepReport::default();

    let mut hit_ids = Vec::new();
    state.meteors.retain_mut(|meteor| {
        meteor.pos.y += meteor.fall_speed;
        if physics.overlaps(&player, &meteor.bounds()) {
            hit_ids.push(meteor.id);
            false
        } else if meteor.is_offscreen() {
            report.despawned += 1;
            false
        } else {
            true
        }
    });

    let mut collected_ids = Vec::new();
    state.collectibles.retain_mut(|heart| {
        heart.pos.y += heart.fall_speed;
        if physics.overlaps(&player, &heart.bounds()) {
            collected_ids.push(heart.id);
            false
        } else if heart.is_offscreen() {
            report.despawned += 1;
            false
        } else {
            true
        }
    });

    for id in hit_ids {
        state.lives -= 1;
        state.score -= METEOR_PENALTY;
        report.meteors_hit += 1;
        log::debug!("Meteor {} hit the dino, lives now {}", id, state.lives);
        state.push_event(GameEvent::MeteorHit { id });
    }
    for id in collected_ids {
        state.lives += 1;
        state.score += COLLECTIBLE_BONUS;
        report.hearts_collected += 1;
        log::debug!("Heart {} collected, lives now {}", id, state.lives);
        state.push_event(GameEvent::LifeCollected { id });
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{EntityKind, FallingEntity};

    fn entity(state: &mut GameState, kind: EntityKind, pos: Vec2, fall_speed: f32) -> FallingEntity {
        FallingEntity {
            id: state.next_entity_id(),
            kind,
            pos,
            fall_speed,
            scale: 1.0,
        }
    }

    #[test]
    fn test_touches_is_inclusive() {
        let a = Aabb::from_center(Vec2::ZERO, Vec2::splat(10.0));
        let b = Aabb::from_center(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        let c = Aabb::from_center(Vec2::new(10.5, 0.0), Vec2::splat(10.0));
        assert!(a.touches(&b));
        assert!(!a.touches(&c));
    }

    #[test]
    fn test_push_out_rests_on_top() {
        let ground = Aabb::from_center(Vec2::new(300.0, 750.0), Vec2::new(600.0, 100.0));
        let player = Aabb::from_center(Vec2::new(300.0, 680.0), Vec2::splat(48.0));
        let resolved = player.push_out_of(&ground);
        assert_eq!(resolved.bottom(), ground.top());
        assert_eq!(resolved.center.x, 300.0);

        // Edge contact only: no movement
        assert_eq!(resolved.push_out_of(&ground), resolved);
    }

    #[test]
    fn test_push_out_sideways_when_shallower() {
        let wall = Aabb::from_center(Vec2::ZERO, Vec2::new(20.0, 200.0));
        let mover = Aabb::from_center(Vec2::new(-12.0, 0.0), Vec2::splat(10.0));
        let resolved = mover.push_out_of(&wall);
        assert_eq!(resolved.center, Vec2::new(-15.0, 0.0));
    }

    #[test]
    fn test_meteor_hit_costs_life_and_score() {
        let mut state = GameState::new(1);
        state.lives = 2;
        let above_player = state.player.pos - Vec2::new(0.0, 40.0);
        let meteor = entity(&mut state, EntityKind::Meteor, above_player, 6.0);
        state.meteors.push(meteor);

        let report = sweep(&mut state, &AabbPhysics);
        assert_eq!(report.meteors_hit, 1);
        assert_eq!(state.lives, 1);
        assert_eq!(state.score, -METEOR_PENALTY);
        assert!(state.meteors.is_empty());
    }

    #[test]
    fn test_heart_pickup_grants_life_and_bonus() {
        let mut state = GameState::new(1);
        let pos = state.player.pos;
        let heart = entity(&mut state, EntityKind::Collectible, pos, COLLECTIBLE_SPEED);
        state.collectibles.push(heart);

        let report = sweep(&mut state, &AabbPhysics);
        assert_eq!(report.hearts_collected, 1);
        assert_eq!(state.lives, 2);
        assert_eq!(state.score, COLLECTIBLE_BONUS);
        assert!(state.collectibles.is_empty());
        assert!(matches!(
            state.drain_events().as_slice(),
            [GameEvent::LifeCollected { .. }]
        ));
    }

    #[test]
    fn test_offscreen_meteor_removed_without_penalty() {
        let mut state = GameState::new(1);
        let far_left = Vec2::new(0.0, OFFSCREEN_Y - 3.0);
        let meteor = entity(&mut state, EntityKind::Meteor, far_left, 5.0);
        state.meteors.push(meteor);
        state.player.pos.x = SCREEN_WIDTH;

        let report = sweep(&mut state, &AabbPhysics);
        assert_eq!(report.despawned, 1);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.score, 0);
        assert!(state.meteors.is_empty());
    }

    #[test]
    fn test_distant_entities_keep_falling() {
        let mut state = GameState::new(1);
        let meteor = entity(&mut state, EntityKind::Meteor, Vec2::new(20.0, SPAWN_Y), 7.0);
        let heart = entity(&mut state, EntityKind::Collectible, Vec2::new(40.0, SPAWN_Y), COLLECTIBLE_SPEED);
        state.meteors.push(meteor);
        state.collectibles.push(heart);

        let report = sweep(&mut state, &AabbPhysics);
        assert_eq!(report, SweepReport::default());
        assert_eq!(state.meteors[0].pos.y, SPAWN_Y + 7.0);
        assert_eq!(state.collectibles[0].pos.y, SPAWN_Y + COLLECTIBLE_SPEED);
    }

    struct NeverTouch;
    impl Physics for NeverTouch {
        fn overlaps(&self, _a: &Aabb, _b: &Aabb) -> bool {
            false
        }
    }

    #[test]
    fn test_sweep_uses_injected_physics() {
        let mut state = GameState::new(1);
        let pos = state.player.pos;
        let meteor = entity(&mut state, EntityKind::Meteor, pos, 1.0);
        state.meteors.push(meteor);

        sweep(&mut state, &NeverTouch);
        assert_eq!(state.meteors.len(), 1);
        assert_eq!(state.lives, STARTING_LIVES);
    }
}
