//! Shooter Sim - combat simulation core for a top-down arcade shooter
//!
//! Tracks player and enemy combatants and resolves shooting, damage, death
//! outcomes and hit feedback once per tick. The `Arena` type is a headless
//! reference driver built on top of the core.

pub mod config;
pub mod game;
pub mod util;
