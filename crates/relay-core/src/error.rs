//! Error types for the command toolkit.

/// Errors from command construction.
///
/// Construction is the only validated surface in this crate; absent branches,
/// absent sequence slots, and missing dialog outcomes all degrade to
/// documented defaults instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("branch condition is required")]
    MissingCondition,
}
