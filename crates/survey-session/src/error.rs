use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Any failure from the remote API, passed through unchanged.
    #[error(transparent)]
    Remote(#[from] survey_client::RemoteError),

    #[error(transparent)]
    Core(#[from] survey_core::error::CoreError),
}
