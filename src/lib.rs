//! Date Dialog - Conversational Departure Date Resolution
//!
//! This crate implements the date-collection step of a booking dialog:
//! it resolves ambiguous or partial timex expressions into a definite
//! departure date through prompt/reprompt orchestration against an
//! external prompt capability.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
