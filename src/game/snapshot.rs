//! Render views of the arena

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::combatant::{Combatant, CombatantKind, SpriteId};
use super::feedback::HealthBand;
use super::projectile::Projectile;

/// What the renderer needs to draw one live combatant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantView {
    pub id: Uuid,
    pub kind: CombatantKind,
    pub is_player: bool,
    pub sprite: SpriteId,
    /// Position including shake offset
    pub draw_x: f32,
    pub draw_y: f32,
    pub angle: f32,
    pub display_width: f32,
    pub display_height: f32,
    pub health: i32,
    pub max_health: i32,
    pub health_ratio: f32,
    pub health_band: HealthBand,
    pub health_bar_offset: f32,
}

impl CombatantView {
    /// `None` for dead combatants, which are never drawn
    pub fn of(id: Uuid, combatant: &Combatant) -> Option<Self> {
        if !combatant.is_alive() {
            return None;
        }
        let (draw_x, draw_y) = combatant.draw_position();
        let (display_width, display_height) = combatant.display_size();
        Some(Self {
            id,
            kind: combatant.kind(),
            is_player: combatant.is_player(),
            sprite: combatant.sprite(),
            draw_x,
            draw_y,
            angle: combatant.angle(),
            display_width,
            display_height,
            health: combatant.health(),
            max_health: combatant.max_health(),
            health_ratio: combatant.health_ratio(),
            health_band: combatant.health_band(),
            health_bar_offset: combatant.health_bar_offset(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: String,
    pub owner_is_player: bool,
}

impl From<&Projectile> for ProjectileView {
    fn from(p: &Projectile) -> Self {
        Self {
            x: p.x(),
            y: p.y(),
            size: p.size(),
            color: p.color().to_string(),
            owner_is_player: p.owner_is_player(),
        }
    }
}

/// Pickup kinds left behind by dead enemies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupKind {
    Heart,
    Buff,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupView {
    pub id: Uuid,
    pub kind: PickupKind,
    pub x: f32,
    pub y: f32,
}

/// Full frame for the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub tick: u64,
    pub score: u32,
    pub game_over: bool,
    pub player: Option<CombatantView>,
    pub enemies: Vec<CombatantView>,
    pub projectiles: Vec<ProjectileView>,
    pub pickups: Vec<PickupView>,
}
