//! # Catalog Module
//!
//! The fixed chemical data of the simulation domain: the shared molecule
//! instances every equation refers to, the three equation-family factories,
//! and the hand-verified equation set itself.
//!
//! Catalog entries are in-memory literals, not loaded from files. Defective
//! entries (reference coefficients that do not balance) fail fast at
//! construction rather than surfacing as equations that never balance.

pub mod equations;
pub mod factories;
pub mod molecules;
