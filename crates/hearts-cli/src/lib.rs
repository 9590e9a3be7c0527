//! Terminal front end: argument parsing, the stdin input provider, the
//! card-token parser and command interceptor, event sinks, and the match
//! controller that sequences deals and turns.

#![deny(warnings)]

pub mod cli;
pub mod controller;
pub mod display;
pub mod events;
pub mod input;
pub mod logging;
pub mod parse;
