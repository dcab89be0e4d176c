//! Reference driver: spawning, per-tick updates, collision queries and
//! outcome dispatch around the combat core

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::Config;
use crate::util::time::{tick_duration, MonotonicClock};

use super::combat::{CombatSystem, DamageOutcome};
use super::combatant::{Combatant, CombatantError, CombatantKind, CombatantSpec, SpriteId};
use super::projectile::{Bounds, Projectile};
use super::snapshot::{ArenaSnapshot, CombatantView, PickupKind, PickupView, ProjectileView};

/// Extra reach added to the player hitbox when collecting pickups
pub const PICKUP_RADIUS: f32 = 16.0;
/// Enemies stop closing in once this near the player
pub const ENGAGE_DISTANCE: f32 = 240.0;

const PLAYER_SPRITE: SpriteId = SpriteId(0);
const BASIC_SPRITE: SpriteId = SpriteId(1);
const FIRE_SPRITE: SpriteId = SpriteId(2);
const PLAYER_BULLET_COLOR: &str = "#4dd2ff";
const BASIC_BULLET_COLOR: &str = "#ff4d4d";
const FIRE_BULLET_COLOR: &str = "#ff9900";

/// Arena phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArenaPhase {
    InProgress,
    /// The player died
    GameOver,
}

/// Player intent for the next tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    /// Movement direction, normalized before use
    pub move_x: f32,
    pub move_y: f32,
    /// Aim direction in radians
    pub aim: f32,
    pub shoot: bool,
}

/// Something the renderer/UI layer may react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ArenaEvent {
    EnemySpawned {
        enemy_id: Uuid,
        kind: CombatantKind,
        x: f32,
        y: f32,
    },
    Shot {
        shooter_id: Uuid,
        owner_is_player: bool,
        x: f32,
        y: f32,
        angle: f32,
    },
    Hit {
        shooter_id: Uuid,
        target_id: Uuid,
        damage: u32,
        x: f32,
        y: f32,
        remaining_health: i32,
    },
    EnemyDestroyed {
        enemy_id: Uuid,
        outcome: DamageOutcome,
        score: u32,
    },
    PickupSpawned {
        pickup_id: Uuid,
        kind: PickupKind,
        x: f32,
        y: f32,
    },
    PickupCollected {
        pickup_id: Uuid,
        kind: PickupKind,
    },
    PlayerDied {
        x: f32,
        y: f32,
    },
}

/// Dropped item waiting to be collected
#[derive(Debug, Clone, PartialEq)]
pub struct Pickup {
    pub id: Uuid,
    pub kind: PickupKind,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone)]
struct ActiveProjectile {
    shooter_id: Uuid,
    projectile: Projectile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Player,
    Enemy(Uuid),
}

/// End-of-run statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaSummary {
    pub seed: u64,
    pub ticks: u64,
    pub phase: ArenaPhase,
    pub score: u32,
    pub enemies_spawned: u32,
    pub shots_fired: u32,
    pub hits: u32,
    pub hearts_collected: u32,
    pub buffs_collected: u32,
    pub player_health: i32,
}

/// Single-threaded arena owning every combatant and projectile
pub struct Arena {
    config: Config,
    bounds: Bounds,
    rng: ChaCha8Rng,
    phase: ArenaPhase,
    tick: u64,

    player_id: Uuid,
    player: Combatant,
    input: PlayerInput,
    /// Freshly spawned enemies are clones of these
    basic_template: Combatant,
    fire_template: Combatant,
    enemies: BTreeMap<Uuid, Combatant>,
    projectiles: Vec<ActiveProjectile>,
    pickups: Vec<Pickup>,

    score: u32,
    enemies_spawned: u32,
    shots_fired: u32,
    hits: u32,
    hearts_collected: u32,
    buffs_collected: u32,
}

impl Arena {
    pub fn new(config: Config) -> Result<Self, CombatantError> {
        let bounds = Bounds::new(config.arena_width, config.arena_height);
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let player_id = next_id(&mut rng);
        let player = Combatant::new(CombatantSpec {
            x: bounds.width / 2.0,
            y: bounds.height / 2.0,
            is_player: true,
            bullet_speed: config.player_bullet_speed,
            fire_rate: config.player_fire_rate_ms,
            bullet_color: PLAYER_BULLET_COLOR.to_string(),
            kind: CombatantKind::Basic,
            sprite: PLAYER_SPRITE,
        })?;

        let basic_template = Combatant::new(enemy_spec(&config, CombatantKind::Basic))?;
        let fire_template = Combatant::new(enemy_spec(&config, CombatantKind::Fire))?;

        Ok(Self {
            config,
            bounds,
            rng,
            phase: ArenaPhase::InProgress,
            tick: 0,
            player_id,
            player,
            input: PlayerInput::default(),
            basic_template,
            fire_template,
            enemies: BTreeMap::new(),
            projectiles: Vec::new(),
            pickups: Vec::new(),
            score: 0,
            enemies_spawned: 0,
            shots_fired: 0,
            hits: 0,
            hearts_collected: 0,
            buffs_collected: 0,
        })
    }

    /// Run the headless tick loop until the player dies or `max_ticks` pass
    pub async fn run(mut self, max_ticks: u64) -> ArenaSummary {
        info!(seed = self.config.seed, tps = self.config.tps, "Arena started");

        let mut ticker = interval(tick_duration(self.config.tps));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let clock = MonotonicClock::new();

        while self.tick < max_ticks && self.phase == ArenaPhase::InProgress {
            ticker.tick().await;
            let input = self.autopilot();
            self.set_input(input);
            let events = self.step(clock.now_ms());
            for event in &events {
                debug!(tick = self.tick, ?event, "Arena event");
            }
        }

        let summary = self.summary();
        info!(
            ticks = summary.ticks,
            score = summary.score,
            phase = ?summary.phase,
            "Arena finished"
        );
        summary
    }

    pub fn set_input(&mut self, input: PlayerInput) {
        self.input = input;
    }

    /// Advance the whole simulation by one tick
    pub fn step(&mut self, now_ms: u64) -> Vec<ArenaEvent> {
        let mut events = Vec::new();
        if self.phase == ArenaPhase::GameOver {
            // frozen, but shakes still run out
            self.tick_feedback(now_ms);
            return events;
        }
        self.tick += 1;

        self.spawn_enemies(&mut events);
        self.update_player(now_ms, &mut events);
        self.update_enemies(now_ms, &mut events);
        self.update_projectiles(&mut events);
        self.collect_pickups(&mut events);
        self.tick_feedback(now_ms);

        events
    }

    fn tick_feedback(&mut self, now_ms: u64) {
        self.player.tick(now_ms, &mut self.rng);
        for enemy in self.enemies.values_mut() {
            enemy.tick(now_ms, &mut self.rng);
        }
    }

    /// Headless input policy: aim at the nearest enemy and keep firing,
    /// drifting toward the nearest pickup
    pub fn autopilot(&self) -> PlayerInput {
        let (px, py) = (self.player.x(), self.player.y());
        let mut input = PlayerInput::default();

        let nearest_enemy = self
            .enemies
            .values()
            .filter(|e| e.is_alive())
            .min_by(|a, b| {
                distance_sq(px, py, a.x(), a.y()).total_cmp(&distance_sq(px, py, b.x(), b.y()))
            });
        if let Some(enemy) = nearest_enemy {
            input.aim = (enemy.y() - py).atan2(enemy.x() - px);
            input.shoot = true;
        }

        let nearest_pickup = self.pickups.iter().min_by(|a, b| {
            distance_sq(px, py, a.x, a.y).total_cmp(&distance_sq(px, py, b.x, b.y))
        });
        if let Some(pickup) = nearest_pickup {
            input.move_x = pickup.x - px;
            input.move_y = pickup.y - py;
        }

        input
    }

    fn spawn_enemies(&mut self, events: &mut Vec<ArenaEvent>) {
        while self.enemies.len() < self.config.enemy_count {
            self.enemies_spawned += 1;
            let kind = if self.config.fire_enemy_every > 0
                && self.enemies_spawned % self.config.fire_enemy_every == 0
            {
                CombatantKind::Fire
            } else {
                CombatantKind::Basic
            };

            let (x, y) = self.edge_position();
            let mut enemy = match kind {
                CombatantKind::Basic => self.basic_template.clone(),
                CombatantKind::Fire => self.fire_template.clone(),
            };
            enemy.update_position(x, y);
            let enemy_id = next_id(&mut self.rng);
            self.enemies.insert(enemy_id, enemy);

            debug!(enemy_id = %enemy_id, kind = ?kind, x, y, "Enemy spawned");
            events.push(ArenaEvent::EnemySpawned { enemy_id, kind, x, y });
        }
    }

    /// Random point on one of the four arena edges
    fn edge_position(&mut self) -> (f32, f32) {
        let along: f32 = self.rng.gen();
        let Bounds { width, height } = self.bounds;
        match self.rng.gen_range(0..4) {
            0 => (along * width, 0.0),
            1 => (width, along * height),
            2 => (along * width, height),
            _ => (0.0, along * height),
        }
    }

    fn update_player(&mut self, now_ms: u64, events: &mut Vec<ArenaEvent>) {
        let input = self.input;
        let len = (input.move_x * input.move_x + input.move_y * input.move_y).sqrt();
        if len > f32::EPSILON {
            let step = self.config.player_speed.min(len);
            let (x, y) = self.bounds.clamp(
                self.player.x() + input.move_x / len * step,
                self.player.y() + input.move_y / len * step,
            );
            self.player.update_position(x, y);
        }
        self.player.set_angle(input.aim);

        if input.shoot {
            if let Some(projectile) = self.player.shoot(now_ms) {
                self.push_projectile(self.player_id, projectile, events);
            }
        }
    }

    fn update_enemies(&mut self, now_ms: u64, events: &mut Vec<ArenaEvent>) {
        let (px, py) = (self.player.x(), self.player.y());
        let speed = self.config.enemy_speed;
        let mut fired = Vec::new();

        for (id, enemy) in self.enemies.iter_mut() {
            enemy.aim_at(px, py);
            let dist = distance_sq(px, py, enemy.x(), enemy.y()).sqrt();
            if dist > ENGAGE_DISTANCE {
                let angle = enemy.angle();
                enemy.update_position(
                    enemy.x() + angle.cos() * speed,
                    enemy.y() + angle.sin() * speed,
                );
            }
            if let Some(projectile) = enemy.shoot(now_ms) {
                fired.push((*id, projectile));
            }
        }

        for (id, projectile) in fired {
            self.push_projectile(id, projectile, events);
        }
    }

    fn push_projectile(
        &mut self,
        shooter_id: Uuid,
        projectile: Projectile,
        events: &mut Vec<ArenaEvent>,
    ) {
        self.shots_fired += 1;
        events.push(ArenaEvent::Shot {
            shooter_id,
            owner_is_player: projectile.owner_is_player(),
            x: projectile.x(),
            y: projectile.y(),
            angle: projectile.angle(),
        });
        self.projectiles.push(ActiveProjectile {
            shooter_id,
            projectile,
        });
    }

    fn update_projectiles(&mut self, events: &mut Vec<ArenaEvent>) {
        let in_flight = std::mem::take(&mut self.projectiles);
        let mut remaining = Vec::with_capacity(in_flight.len());

        for mut shot in in_flight {
            shot.projectile.advance();
            if shot.projectile.is_out_of_bounds(&self.bounds) {
                continue;
            }
            match self.find_target(&shot.projectile) {
                Some(target) => self.resolve(target, &shot, events),
                None => remaining.push(shot),
            }
        }

        self.projectiles = remaining;
    }

    /// Collision query honouring projectile ownership
    fn find_target(&self, projectile: &Projectile) -> Option<Target> {
        if projectile.owner_is_player() {
            self.enemies
                .iter()
                .find(|(_, enemy)| CombatSystem::check_hit(projectile, enemy))
                .map(|(id, _)| Target::Enemy(*id))
        } else if CombatSystem::check_hit(projectile, &self.player) {
            Some(Target::Player)
        } else {
            None
        }
    }

    fn resolve(&mut self, target: Target, shot: &ActiveProjectile, events: &mut Vec<ArenaEvent>) {
        let (target_id, combatant) = match target {
            Target::Player => (self.player_id, &mut self.player),
            Target::Enemy(id) => match self.enemies.get_mut(&id) {
                Some(enemy) => (id, enemy),
                None => return,
            },
        };

        let hit = CombatSystem::resolve_hit(&shot.projectile, combatant, &mut self.rng);
        let (x, y) = (combatant.x(), combatant.y());
        self.hits += 1;
        events.push(ArenaEvent::Hit {
            shooter_id: shot.shooter_id,
            target_id,
            damage: hit.damage,
            x: hit.x,
            y: hit.y,
            remaining_health: hit.remaining_health,
        });

        match hit.outcome {
            DamageOutcome::None => {}
            DamageOutcome::PlayerDied => {
                self.phase = ArenaPhase::GameOver;
                info!(tick = self.tick, score = self.score, "Player died, game over");
                events.push(ArenaEvent::PlayerDied { x, y });
            }
            DamageOutcome::DroppedHeart | DamageOutcome::DroppedBuff => {
                self.enemies.remove(&target_id);
                self.score += 1;
                events.push(ArenaEvent::EnemyDestroyed {
                    enemy_id: target_id,
                    outcome: hit.outcome,
                    score: self.score,
                });

                let kind = if hit.outcome == DamageOutcome::DroppedBuff {
                    PickupKind::Buff
                } else {
                    PickupKind::Heart
                };
                let pickup_id = next_id(&mut self.rng);
                self.pickups.push(Pickup {
                    id: pickup_id,
                    kind,
                    x,
                    y,
                });

                info!(enemy_id = %target_id, ?kind, score = self.score, "Enemy destroyed");
                events.push(ArenaEvent::PickupSpawned {
                    pickup_id,
                    kind,
                    x,
                    y,
                });
            }
        }
    }

    fn collect_pickups(&mut self, events: &mut Vec<ArenaEvent>) {
        let reach = self.player.hitbox_radius() + PICKUP_RADIUS;
        let (px, py) = (self.player.x(), self.player.y());
        let (collected, left): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pickups)
            .into_iter()
            .partition(|p| distance_sq(px, py, p.x, p.y) <= reach * reach);
        self.pickups = left;

        for pickup in collected {
            match pickup.kind {
                PickupKind::Heart => {
                    self.player.heal();
                    self.hearts_collected += 1;
                }
                PickupKind::Buff => {
                    self.player.set_buffed(true);
                    self.buffs_collected += 1;
                }
            }
            info!(pickup_id = %pickup.id, kind = ?pickup.kind, "Pickup collected");
            events.push(ArenaEvent::PickupCollected {
                pickup_id: pickup.id,
                kind: pickup.kind,
            });
        }
    }

    /// Build a render frame
    pub fn snapshot(&self) -> ArenaSnapshot {
        ArenaSnapshot {
            tick: self.tick,
            score: self.score,
            game_over: self.phase == ArenaPhase::GameOver,
            player: CombatantView::of(self.player_id, &self.player),
            enemies: self
                .enemies
                .iter()
                .filter_map(|(id, enemy)| CombatantView::of(*id, enemy))
                .collect(),
            projectiles: self
                .projectiles
                .iter()
                .map(|shot| ProjectileView::from(&shot.projectile))
                .collect(),
            pickups: self
                .pickups
                .iter()
                .map(|p| PickupView {
                    id: p.id,
                    kind: p.kind,
                    x: p.x,
                    y: p.y,
                })
                .collect(),
        }
    }

    pub fn summary(&self) -> ArenaSummary {
        ArenaSummary {
            seed: self.config.seed,
            ticks: self.tick,
            phase: self.phase,
            score: self.score,
            enemies_spawned: self.enemies_spawned,
            shots_fired: self.shots_fired,
            hits: self.hits,
            hearts_collected: self.hearts_collected,
            buffs_collected: self.buffs_collected,
            player_health: self.player.health(),
        }
    }

    pub fn phase(&self) -> ArenaPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn player_id(&self) -> Uuid {
        self.player_id
    }

    pub fn enemies(&self) -> impl Iterator<Item = (&Uuid, &Combatant)> {
        self.enemies.iter()
    }

    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }
}

fn enemy_spec(config: &Config, kind: CombatantKind) -> CombatantSpec {
    let (bullet_color, sprite) = match kind {
        CombatantKind::Basic => (BASIC_BULLET_COLOR, BASIC_SPRITE),
        CombatantKind::Fire => (FIRE_BULLET_COLOR, FIRE_SPRITE),
    };
    CombatantSpec {
        x: 0.0,
        y: 0.0,
        is_player: false,
        bullet_speed: config.enemy_bullet_speed,
        fire_rate: config.enemy_fire_rate_ms,
        bullet_color: bullet_color.to_string(),
        kind,
        sprite,
    }
}

/// Ids come from the arena rng so a seed replays identically
fn next_id(rng: &mut ChaCha8Rng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

fn distance_sq(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::feedback::{SHAKE_INTERVAL_MS, SHAKE_STEPS};

    fn config() -> Config {
        Config {
            enemy_count: 1,
            fire_enemy_every: 0,
            ..Config::default()
        }
    }

    #[test]
    fn spawns_up_to_enemy_count() {
        let mut arena = Arena::new(Config {
            enemy_count: 3,
            fire_enemy_every: 3,
            ..Config::default()
        })
        .unwrap();
        let events = arena.step(0);

        let spawned: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                ArenaEvent::EnemySpawned { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect();
        assert_eq!(
            spawned,
            vec![CombatantKind::Basic, CombatantKind::Basic, CombatantKind::Fire]
        );
        assert_eq!(arena.enemies().count(), 3);
    }

    #[test]
    fn player_movement_is_clamped() {
        let mut arena = Arena::new(Config {
            enemy_count: 0,
            player_speed: 10_000.0,
            ..Config::default()
        })
        .unwrap();
        arena.set_input(PlayerInput {
            move_x: -1.0,
            move_y: 0.0,
            ..PlayerInput::default()
        });
        arena.step(0);
        // speed is capped by the requested distance, then by the bounds
        assert_eq!(arena.player().x(), 479.0);

        arena.set_input(PlayerInput {
            move_x: -5_000.0,
            move_y: 0.0,
            ..PlayerInput::default()
        });
        arena.step(16);
        assert_eq!(arena.player().x(), 0.0);
    }

    #[test]
    fn hits_respect_ownership() {
        let mut arena = Arena::new(Config {
            enemy_count: 3,
            ..config()
        })
        .unwrap();
        let player_id = arena.player_id();

        let mut hits = 0;
        for t in 0..2_000u64 {
            let input = arena.autopilot();
            arena.set_input(input);
            for event in arena.step(t * 16) {
                if let ArenaEvent::Hit {
                    shooter_id,
                    target_id,
                    ..
                } = event
                {
                    hits += 1;
                    // exactly one side of every hit is the player
                    assert!((shooter_id == player_id) != (target_id == player_id));
                }
            }
        }
        assert!(hits > 0);
    }

    #[test]
    fn destroyed_enemy_leaves_pickup_and_scores() {
        let mut arena = Arena::new(Config {
            enemy_fire_rate_ms: 60_000,
            ..config()
        })
        .unwrap();

        let mut destroyed = None;
        for t in 0..5_000u64 {
            let input = arena.autopilot();
            arena.set_input(PlayerInput {
                move_x: 0.0,
                move_y: 0.0,
                ..input
            });
            let events = arena.step(t * 16);
            let found = events
                .iter()
                .find(|e| matches!(e, ArenaEvent::EnemyDestroyed { .. }))
                .cloned();
            if let Some(event) = found {
                destroyed = Some((event, events));
                break;
            }
        }

        let (event, events) = destroyed.expect("player should kill an enemy");
        let ArenaEvent::EnemyDestroyed {
            enemy_id,
            outcome,
            score,
        } = event
        else {
            unreachable!()
        };
        assert_eq!(score, 1);
        assert_eq!(arena.score(), 1);
        assert!(matches!(
            outcome,
            DamageOutcome::DroppedHeart | DamageOutcome::DroppedBuff
        ));
        assert!(arena.enemies().all(|(id, _)| *id != enemy_id));
        assert!(events
            .iter()
            .any(|e| matches!(e, ArenaEvent::PickupSpawned { .. })));
        assert_eq!(arena.pickups().len(), 1);
    }

    #[test]
    fn heart_pickup_heals_player() {
        let mut arena = Arena::new(Config {
            enemy_count: 0,
            ..config()
        })
        .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        arena.player.take_damage(2, &mut rng);
        let (px, py) = (arena.player().x(), arena.player().y());
        arena.pickups.push(Pickup {
            id: Uuid::nil(),
            kind: PickupKind::Heart,
            x: px + 10.0,
            y: py,
        });
        arena.pickups.push(Pickup {
            id: Uuid::nil(),
            kind: PickupKind::Buff,
            x: px + 500.0,
            y: py,
        });

        let events = arena.step(0);
        assert_eq!(arena.player().health(), 3);
        assert_eq!(arena.pickups().len(), 1);
        assert!(!arena.player().is_buffed());
        assert!(events.contains(&ArenaEvent::PickupCollected {
            pickup_id: Uuid::nil(),
            kind: PickupKind::Heart,
        }));
    }

    #[test]
    fn game_over_freezes_the_arena() {
        let mut arena = Arena::new(Config {
            enemy_count: 6,
            fire_enemy_every: 1,
            enemy_fire_rate_ms: 50,
            enemy_bullet_speed: 12.0,
            ..Config::default()
        })
        .unwrap();

        let mut now = 0;
        while arena.phase() == ArenaPhase::InProgress && now < 600_000 {
            arena.step(now);
            now += 16;
        }
        assert_eq!(arena.phase(), ArenaPhase::GameOver);
        assert_eq!(arena.player().health(), 0);
        assert!(arena.snapshot().player.is_none());
        assert!(arena.step(now).is_empty());
    }

    #[test]
    fn shakes_settle_after_game_over() {
        let mut arena = Arena::new(config()).unwrap();
        arena.step(0);
        for enemy in arena.enemies.values_mut() {
            enemy.take_damage(1, &mut arena.rng);
        }
        arena.player.take_damage(1, &mut arena.rng);
        arena.step(16);

        let shaking = arena
            .enemies
            .values()
            .chain(std::iter::once(&arena.player))
            .filter(|c| c.shake().is_active())
            .count();
        assert_eq!(shaking, 2);

        arena.phase = ArenaPhase::GameOver;
        let frozen_tick = arena.tick;
        let mut now = 16;
        for _ in 0..SHAKE_STEPS * 2 {
            now += SHAKE_INTERVAL_MS + 1;
            assert!(arena.step(now).is_empty());
        }

        assert_eq!(arena.tick, frozen_tick);
        assert_eq!(arena.player().shake_offset(), (0.0, 0.0));
        for (_, enemy) in arena.enemies() {
            assert_eq!(enemy.shake_offset(), (0.0, 0.0));
            assert_eq!(enemy.draw_position(), (enemy.x(), enemy.y()));
        }
    }
}
