//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that the host calls
//! - **Outbound (Driven)**: Storage this subsystem needs

pub mod inbound;
pub mod outbound;
