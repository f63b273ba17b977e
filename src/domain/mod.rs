//! Domain layer: pure decision logic for departure date resolution.

pub mod foundation;
pub mod resolution;
pub mod timex;
