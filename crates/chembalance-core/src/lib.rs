//! # chembalance Core Library
//!
//! A library for modeling chemical equations and deciding, from user-adjustable
//! integer coefficients, whether an equation is balanced and whether it is
//! balanced in simplest form.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers to keep the algorithmic core free of
//! any fixed chemical data:
//!
//! - **[`model`]: The Foundation.** Immutable molecules built from an element
//!   catalog, coefficient-bearing equation terms with observable state, the
//!   `Equation` aggregate with its derived balance facts, and the ordered
//!   atom-counting algorithm those facts rest on.
//!
//! - **[`catalog`]: The Data.** The fixed, hand-verified molecule and equation
//!   literals of the simulation domain, plus the three equation-family
//!   factories (synthesis, decomposition, displacement) used to author them.
//!
//! Presentation layers (visualizations, game scoring, persistence frameworks)
//! are consumers of the model's public state and do not live here.

pub mod catalog;
pub mod model;
