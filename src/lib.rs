//! Bioterio - breeding colony records for a laboratory animal facility.
//!
//! Tracks breeding pairs, their litters and the weaned groups separated from
//! them, and allocates the strain-prefixed cage labels (`A1`, `B7`, ...) that
//! identify every occupied cage.

pub mod adapters;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
