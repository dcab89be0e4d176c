//! Combatants: player and enemy entities with health, aim and cadence

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::util::rng::RandomSource;

use super::combat::{outcome_for_roll, DamageOutcome, DROP_ROLL_SIDES};
use super::feedback::{health_ratio, HealthBand, ShakeState};
use super::projectile::Projectile;

/// Starting health of the player on the basic profile
pub const PLAYER_BASE_HEALTH: i32 = 4;
/// Starting health of an enemy on the basic profile
pub const ENEMY_BASE_HEALTH: i32 = 2;
/// Fixed display size of the player sprite (square)
pub const PLAYER_DISPLAY_SIZE: f32 = 112.0;
/// Gap between the sprite edge and the health bar
pub const HEALTH_BAR_GAP: f32 = 10.0;

/// Combatant variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatantKind {
    /// Standard profile
    #[default]
    Basic,
    /// Bigger, tankier, heavy shots
    Fire,
}

/// Per-kind geometry and bullet profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatantProfile {
    pub width: f32,
    pub height: f32,
    /// Collision radius, independent of sprite size
    pub hitbox_radius: f32,
    pub barrel_length: f32,
    pub barrel_thickness: f32,
    pub bullet_size: f32,
    pub bullet_damage: u32,
    /// Health override applied after the player/enemy default
    pub health_override: Option<i32>,
}

impl CombatantProfile {
    pub fn base() -> Self {
        Self {
            width: 105.0,
            height: 52.0,
            hitbox_radius: 52.0,
            barrel_length: 52.0,
            barrel_thickness: 6.0,
            bullet_size: 6.0,
            bullet_damage: 1,
            health_override: None,
        }
    }

    pub fn for_kind(kind: CombatantKind) -> Self {
        let base = Self::base();
        match kind {
            CombatantKind::Basic => base,
            CombatantKind::Fire => Self {
                width: base.width + 45.0,
                height: base.height + 60.0,
                bullet_size: 18.0,
                bullet_damage: 4,
                health_override: Some(4),
                ..base
            },
        }
    }
}

/// Opaque handle to the drawable the renderer uses for a combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SpriteId(pub u32);

/// Construction arguments for a combatant
#[derive(Debug, Clone, PartialEq)]
pub struct CombatantSpec {
    pub x: f32,
    pub y: f32,
    pub is_player: bool,
    pub bullet_speed: f32,
    /// Milliseconds between shots
    pub fire_rate: u64,
    pub bullet_color: String,
    pub kind: CombatantKind,
    pub sprite: SpriteId,
}

/// Invalid construction arguments
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CombatantError {
    #[error("fire rate must be positive")]
    ZeroFireRate,

    #[error("bullet speed must be finite and positive, got {0}")]
    InvalidBulletSpeed(f32),

    #[error("position must be finite, got ({0}, {1})")]
    NonFinitePosition(f32, f32),
}

/// A player- or enemy-controlled entity
#[derive(Debug, Clone)]
pub struct Combatant {
    is_player: bool,
    kind: CombatantKind,
    sprite: SpriteId,

    x: f32,
    y: f32,
    angle: f32,

    health: i32,
    max_health: i32,
    fire_rate: u64,
    bullet_speed: f32,
    bullet_color: String,
    is_buffed: bool,

    profile: CombatantProfile,
    last_shot_ms: Option<u64>,
    shake: ShakeState,
}

impl Combatant {
    /// Build a combatant. Kind overrides are applied after the player/enemy
    /// defaults, and max health is fixed from the final value.
    pub fn new(spec: CombatantSpec) -> Result<Self, CombatantError> {
        if spec.fire_rate == 0 {
            return Err(CombatantError::ZeroFireRate);
        }
        if !spec.bullet_speed.is_finite() || spec.bullet_speed <= 0.0 {
            return Err(CombatantError::InvalidBulletSpeed(spec.bullet_speed));
        }
        if !spec.x.is_finite() || !spec.y.is_finite() {
            return Err(CombatantError::NonFinitePosition(spec.x, spec.y));
        }

        let profile = CombatantProfile::for_kind(spec.kind);
        let mut health = if spec.is_player {
            PLAYER_BASE_HEALTH
        } else {
            ENEMY_BASE_HEALTH
        };
        if let Some(override_health) = profile.health_override {
            health = override_health;
        }

        Ok(Self {
            is_player: spec.is_player,
            kind: spec.kind,
            sprite: spec.sprite,
            x: spec.x,
            y: spec.y,
            angle: 0.0,
            health,
            max_health: health,
            fire_rate: spec.fire_rate,
            bullet_speed: spec.bullet_speed,
            bullet_color: spec.bullet_color,
            is_buffed: false,
            profile,
            last_shot_ms: None,
            shake: ShakeState::new(),
        })
    }

    /// Fire a projectile if alive and off cooldown.
    ///
    /// Nothing is mutated when no shot is fired.
    pub fn shoot(&mut self, now_ms: u64) -> Option<Projectile> {
        if !self.is_alive() {
            return None;
        }
        if let Some(last) = self.last_shot_ms {
            if now_ms.saturating_sub(last) <= self.effective_fire_rate() {
                return None;
            }
        }

        self.last_shot_ms = Some(now_ms);
        let (muzzle_x, muzzle_y) = self.muzzle();

        trace!(
            is_player = self.is_player,
            kind = ?self.kind,
            x = muzzle_x,
            y = muzzle_y,
            "Shot fired"
        );

        Some(Projectile::new(
            muzzle_x,
            muzzle_y,
            self.angle,
            self.bullet_speed,
            self.bullet_color.clone(),
            self.profile.bullet_size,
            self.is_player,
            self.profile.bullet_damage,
            self.kind,
        ))
    }

    /// Apply damage and report what the death, if any, turns into.
    ///
    /// A combatant that is already dead ignores further damage and reports
    /// `DamageOutcome::None`. Health never stays below zero.
    pub fn take_damage<R: RandomSource + ?Sized>(
        &mut self,
        amount: u32,
        rng: &mut R,
    ) -> DamageOutcome {
        if !self.is_alive() {
            return DamageOutcome::None;
        }

        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.health = self.health.saturating_sub(amount);
        self.shake.start();

        debug!(
            is_player = self.is_player,
            kind = ?self.kind,
            damage = amount,
            health = self.health,
            "Combatant hit"
        );

        if self.health > 0 {
            return DamageOutcome::None;
        }

        let outcome = if self.is_player {
            DamageOutcome::PlayerDied
        } else {
            outcome_for_roll(rng.next_below(DROP_ROLL_SIDES))
        };
        self.health = 0;
        outcome
    }

    /// Restore one point of health, never above max
    pub fn heal(&mut self) {
        if self.health < self.max_health {
            self.health += 1;
        }
    }

    /// Overwrite position; movement rules belong to the driver
    pub fn update_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    /// Turn to face a point
    pub fn aim_at(&mut self, target_x: f32, target_y: f32) {
        self.angle = (target_y - self.y).atan2(target_x - self.x);
    }

    pub fn set_buffed(&mut self, buffed: bool) {
        self.is_buffed = buffed;
    }

    /// Advance per-tick cosmetic state
    pub fn tick<R: RandomSource + ?Sized>(&mut self, now_ms: u64, rng: &mut R) {
        self.shake.advance(now_ms, rng);
    }

    /// Barrel tip in world space
    pub fn muzzle(&self) -> (f32, f32) {
        (
            self.x + self.angle.cos() * self.profile.barrel_length,
            self.y + self.angle.sin() * self.profile.barrel_length,
        )
    }

    /// Cooldown in ms, halved while buffed
    pub fn effective_fire_rate(&self) -> u64 {
        if self.is_buffed {
            (self.fire_rate / 2).max(1)
        } else {
            self.fire_rate
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_player(&self) -> bool {
        self.is_player
    }

    pub fn kind(&self) -> CombatantKind {
        self.kind
    }

    pub fn sprite(&self) -> SpriteId {
        self.sprite
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn fire_rate(&self) -> u64 {
        self.fire_rate
    }

    pub fn bullet_speed(&self) -> f32 {
        self.bullet_speed
    }

    pub fn bullet_color(&self) -> &str {
        &self.bullet_color
    }

    pub fn is_buffed(&self) -> bool {
        self.is_buffed
    }

    pub fn last_shot_ms(&self) -> Option<u64> {
        self.last_shot_ms
    }

    pub fn profile(&self) -> &CombatantProfile {
        &self.profile
    }

    pub fn width(&self) -> f32 {
        self.profile.width
    }

    pub fn height(&self) -> f32 {
        self.profile.height
    }

    pub fn hitbox_radius(&self) -> f32 {
        self.profile.hitbox_radius
    }

    pub fn barrel_length(&self) -> f32 {
        self.profile.barrel_length
    }

    pub fn barrel_thickness(&self) -> f32 {
        self.profile.barrel_thickness
    }

    pub fn shake(&self) -> &ShakeState {
        &self.shake
    }

    pub fn shake_offset(&self) -> (f32, f32) {
        self.shake.offset()
    }

    /// Position plus shake offset
    pub fn draw_position(&self) -> (f32, f32) {
        let (dx, dy) = self.shake.offset();
        (self.x + dx, self.y + dy)
    }

    /// Sprite size on screen; the player uses a fixed square
    pub fn display_size(&self) -> (f32, f32) {
        if self.is_player {
            (PLAYER_DISPLAY_SIZE, PLAYER_DISPLAY_SIZE)
        } else {
            (self.profile.width, self.profile.height)
        }
    }

    pub fn health_ratio(&self) -> f32 {
        health_ratio(self.health, self.max_health)
    }

    pub fn health_band(&self) -> HealthBand {
        HealthBand::for_ratio(self.health_ratio())
    }

    /// Vertical distance from the sprite centre to the health bar
    pub fn health_bar_offset(&self) -> f32 {
        // fire sprites keep their own height even for the player
        let height = if self.is_player && self.kind != CombatantKind::Fire {
            PLAYER_DISPLAY_SIZE
        } else {
            self.profile.height
        };
        height / 2.0 + HEALTH_BAR_GAP
    }
}
