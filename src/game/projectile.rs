//! Projectiles fired by combatants

use serde::{Deserialize, Serialize};

use super::combatant::CombatantKind;

/// Playfield rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height
    }

    /// Clamp a point into the playfield
    pub fn clamp(&self, x: f32, y: f32) -> (f32, f32) {
        (x.clamp(0.0, self.width), y.clamp(0.0, self.height))
    }
}

/// A single fired shot.
///
/// Everything except the position is fixed at creation. Ownership is carried
/// but not checked here: the driver's collision query decides which targets
/// a projectile may hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    x: f32,
    y: f32,
    angle: f32,
    speed: f32,
    color: String,
    size: f32,
    owner_is_player: bool,
    damage: u32,
    source_kind: CombatantKind,
}

impl Projectile {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        x: f32,
        y: f32,
        angle: f32,
        speed: f32,
        color: String,
        size: f32,
        owner_is_player: bool,
        damage: u32,
        source_kind: CombatantKind,
    ) -> Self {
        debug_assert!(damage > 0, "projectile damage must be positive");
        Self {
            x,
            y,
            angle,
            speed,
            color,
            size,
            owner_is_player,
            damage,
            source_kind,
        }
    }

    /// Move one tick along the heading
    pub fn advance(&mut self) {
        self.x += self.angle.cos() * self.speed;
        self.y += self.angle.sin() * self.speed;
    }

    pub fn is_out_of_bounds(&self, bounds: &Bounds) -> bool {
        !bounds.contains(self.x, self.y)
    }

    /// Point-in-circle test against a target hitbox
    pub fn hits(&self, target_x: f32, target_y: f32, hitbox_radius: f32) -> bool {
        let dx = self.x - target_x;
        let dy = self.y - target_y;
        dx * dx + dy * dy <= hitbox_radius * hitbox_radius
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Teleport the shot, for setting up collision cases in tests
    #[cfg(test)]
    pub(crate) fn place(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn owner_is_player(&self) -> bool {
        self.owner_is_player
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn source_kind(&self) -> CombatantKind {
        self.source_kind
    }
}
