#![allow(clippy::similar_names, clippy::module_name_repetitions)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
//! Automatic switching of a vehicle altimeter between height above sea level
//! and height above terrain.
//!
//! Every frame the host hands a [`mode_control::Frame`] to a
//! [`mode_control::FlightSession`]. The session forecasts near-term terrain
//! collisions ([`forecast`]), weighs them against parachute deployment and the
//! vessel's situation, and only then decides whether to issue a
//! [`mode_control::ModeCommand`], never overruling a recent manual choice of
//! the pilot.

pub mod forecast;
mod logger;
pub mod mode_control;
pub mod vessel;
