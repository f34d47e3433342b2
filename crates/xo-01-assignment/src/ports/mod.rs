//! Ports module for the assignment subsystem
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::AssignmentApi;
pub use outbound::{AssignmentSink, IdentifierSource, ObjectShuffler};
