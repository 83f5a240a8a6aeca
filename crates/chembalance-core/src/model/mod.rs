//! # Model Module
//!
//! The fundamental data structures and algorithms for representing chemical
//! equations and deriving their balance state.
//!
//! ## Key Components
//!
//! - [`element`] - The fixed element set, comparable by identity
//! - [`molecule`] - Immutable ordered-atom species with display symbols
//! - [`observable`] - A small observable-value abstraction for coefficient state
//! - [`config`] - Coefficient range and default-value settings
//! - [`term`] - One coefficient-bearing molecule occurrence in an equation
//! - [`equation`] - The equation aggregate and its derived balance facts
//! - [`counting`] - The ordered per-element atom tally both sides are compared by
//! - [`snapshot`] - Coefficient state save/restore

pub mod config;
pub mod counting;
pub mod element;
pub mod equation;
pub mod molecule;
pub mod observable;
pub mod snapshot;
pub mod term;
