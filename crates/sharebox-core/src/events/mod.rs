//! Audit events emitted by ShareBox operations.
//!
//! Events are dispatched through the audit bus and consumed by the
//! external audit-logging collaborator. Emission is fire-and-forget:
//! it never blocks or fails the primary operation.

pub mod audit;

pub use audit::{AuditBus, AuditEvent};
