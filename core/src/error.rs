// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{EventId, FormErrors};

/// Errors raised by the event store, form validation and configuration.
///
/// Occurrence and conflict queries never fail, an empty result is not an error.
#[non_exhaustive]
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// No event with the given id exists in the collection.
    #[error("Event not found: {0}")]
    NotFound(EventId),

    /// User-entered fields were rejected.
    #[error("Invalid event: {0}")]
    Invalid(#[from] FormErrors),

    /// Configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(String),
}
