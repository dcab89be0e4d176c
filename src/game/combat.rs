//! Combat resolution - ownership rule, hit detection, death outcomes

use serde::{Deserialize, Serialize};

use crate::util::rng::RandomSource;

use super::combatant::Combatant;
use super::projectile::Projectile;

/// Sides of the die rolled when an enemy dies
pub const DROP_ROLL_SIDES: u32 = 10;
/// Rolls strictly above this drop a buff; everything else drops a heart
pub const BUFF_ROLL_THRESHOLD: u32 = 7;

/// What a hit turned into, for the driver to dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageOutcome {
    /// Target survived, or was already dead
    #[default]
    None,
    /// The player was killed
    PlayerDied,
    /// An enemy was killed and leaves a heart pickup
    DroppedHeart,
    /// An enemy was killed and leaves a buff pickup
    DroppedBuff,
}

impl DamageOutcome {
    pub fn is_death(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Map a `[0, DROP_ROLL_SIDES)` roll to an enemy death outcome
pub fn outcome_for_roll(roll: u32) -> DamageOutcome {
    if roll > BUFF_ROLL_THRESHOLD {
        DamageOutcome::DroppedBuff
    } else {
        DamageOutcome::DroppedHeart
    }
}

/// Hit result from combat resolution
#[derive(Debug, Clone, PartialEq)]
pub struct HitResult {
    pub damage: u32,
    pub x: f32,
    pub y: f32,
    pub remaining_health: i32,
    pub outcome: DamageOutcome,
}

/// Combat rules shared by every driver
pub struct CombatSystem;

impl CombatSystem {
    /// Player shots hit enemies only, enemy shots hit the player only
    pub fn can_damage(projectile: &Projectile, target: &Combatant) -> bool {
        projectile.owner_is_player() != target.is_player()
    }

    /// Whether a projectile strikes a live, valid target
    pub fn check_hit(projectile: &Projectile, target: &Combatant) -> bool {
        target.is_alive()
            && Self::can_damage(projectile, target)
            && projectile.hits(target.x(), target.y(), target.hitbox_radius())
    }

    /// Apply a projectile to the combatant it struck.
    ///
    /// The caller must have filtered by ownership already; a mismatch is a
    /// bug in the collision query.
    pub fn resolve_hit<R: RandomSource + ?Sized>(
        projectile: &Projectile,
        target: &mut Combatant,
        rng: &mut R,
    ) -> HitResult {
        debug_assert!(
            Self::can_damage(projectile, target),
            "projectile owned by {} struck {}",
            side(projectile.owner_is_player()),
            side(target.is_player()),
        );

        let outcome = target.take_damage(projectile.damage(), rng);
        HitResult {
            damage: projectile.damage(),
            x: projectile.x(),
            y: projectile.y(),
            remaining_health: target.health(),
            outcome,
        }
    }
}

fn side(is_player: bool) -> &'static str {
    if is_player {
        "player"
    } else {
        "enemy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::combatant::{CombatantKind, CombatantSpec, SpriteId};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn combatant(x: f32, y: f32, is_player: bool, kind: CombatantKind) -> Combatant {
        Combatant::new(CombatantSpec {
            x,
            y,
            is_player,
            bullet_speed: 5.0,
            fire_rate: 300,
            bullet_color: "#fff".to_string(),
            kind,
            sprite: SpriteId::default(),
        })
        .unwrap()
    }

    #[test]
    fn roll_threshold() {
        for roll in 0..=7 {
            assert_eq!(outcome_for_roll(roll), DamageOutcome::DroppedHeart);
        }
        assert_eq!(outcome_for_roll(8), DamageOutcome::DroppedBuff);
        assert_eq!(outcome_for_roll(9), DamageOutcome::DroppedBuff);
    }

    #[test]
    fn ownership_rule() {
        let mut player = combatant(0.0, 0.0, true, CombatantKind::Basic);
        let mut enemy = combatant(0.0, 0.0, false, CombatantKind::Basic);
        let player_shot = player.shoot(0).unwrap();
        let enemy_shot = enemy.shoot(0).unwrap();

        assert!(CombatSystem::can_damage(&player_shot, &enemy));
        assert!(!CombatSystem::can_damage(&player_shot, &player));
        assert!(CombatSystem::can_damage(&enemy_shot, &player));
        assert!(!CombatSystem::can_damage(&enemy_shot, &enemy));
    }

    #[test]
    fn fire_hitbox_ignores_sprite_size() {
        let mut shooter = combatant(0.0, 0.0, true, CombatantKind::Basic);
        let target = combatant(200.0, 0.0, false, CombatantKind::Fire);
        let mut shot = shooter.shoot(0).unwrap();

        // inside the 150px-wide sprite but outside the 52px hitbox
        shot.place(200.0 - 70.0, 0.0);
        assert!(!CombatSystem::check_hit(&shot, &target));

        shot.place(200.0 - 52.0, 0.0);
        assert!(CombatSystem::check_hit(&shot, &target));
    }

    #[test]
    fn resolve_hit_reports_outcome() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut enemy = combatant(60.0, 0.0, false, CombatantKind::Fire);
        let mut player = combatant(0.0, 0.0, true, CombatantKind::Basic);

        let shot = player.shoot(0).unwrap();
        let hit = CombatSystem::resolve_hit(&shot, &mut enemy, &mut rng);
        assert_eq!(hit.damage, 1);
        assert_eq!(hit.remaining_health, 3);
        assert_eq!(hit.outcome, DamageOutcome::None);

        let mut finished = None;
        for t in 1..=3u64 {
            let shot = player.shoot(t * 1_000).unwrap();
            finished = Some(CombatSystem::resolve_hit(&shot, &mut enemy, &mut rng));
        }
        let hit = finished.unwrap();
        assert_eq!(hit.remaining_health, 0);
        assert!(matches!(
            hit.outcome,
            DamageOutcome::DroppedHeart | DamageOutcome::DroppedBuff
        ));
    }

    #[test]
    fn dead_targets_are_not_hit() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let mut player = combatant(0.0, 0.0, true, CombatantKind::Basic);
        let mut enemy = combatant(52.0, 0.0, false, CombatantKind::Basic);
        enemy.take_damage(2, &mut rng);

        let shot = player.shoot(0).unwrap();
        assert!(!CombatSystem::check_hit(&shot, &enemy));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "projectile owned by enemy struck enemy")]
    fn friendly_fire_is_a_bug() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let mut shooter = combatant(0.0, 0.0, false, CombatantKind::Basic);
        let mut other = combatant(52.0, 0.0, false, CombatantKind::Basic);

        let shot = shooter.shoot(0).unwrap();
        CombatSystem::resolve_hit(&shot, &mut other, &mut rng);
    }
}
