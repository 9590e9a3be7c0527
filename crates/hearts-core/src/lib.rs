//! Rules engine for four-player standard Hearts: the card and deck model,
//! the legal-move validator, trick resolution, deal scoring with the
//! shoot-the-moon exception, and match-level state. Input, rendering, and
//! card choosers live in the crates above this one.

#![deny(warnings)]

pub mod game;
pub mod model;
pub mod rules;
