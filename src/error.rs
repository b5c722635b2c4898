use thiserror::Error;

/// Failures surfaced by the profile lookup flow.
///
/// The `Display` text of each variant is the exact message shown to the
/// user; no other detail about a failure is retained. Nothing here is fatal:
/// every failure leaves the page in its error state, and issuing a new query
/// is the only recovery path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The profile endpoint returned 404 for the requested username.
    #[error("User not found. Please check the username and try again.")]
    UserNotFound,

    /// The profile endpoint returned a non-404 failure status.
    #[error("Failed to fetch profile. Please try again later.")]
    ProfileRequestFailed,

    /// The repository endpoint returned a failure status.
    #[error("Failed to fetch repositories.")]
    RepositoryRequestFailed,

    /// Anything outside the status-code taxonomy: the network was
    /// unreachable or a response body failed to deserialize.
    #[error("An unexpected error occurred.")]
    Unexpected,
}
