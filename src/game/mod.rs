//! Combat simulation modules

pub mod arena;
pub mod combat;
pub mod combatant;
pub mod feedback;
pub mod projectile;
pub mod snapshot;

pub use arena::{Arena, ArenaEvent, ArenaPhase, ArenaSummary, PlayerInput};
pub use combat::{CombatSystem, DamageOutcome, HitResult};
pub use combatant::{Combatant, CombatantError, CombatantKind, CombatantSpec, SpriteId};
pub use projectile::{Bounds, Projectile};
