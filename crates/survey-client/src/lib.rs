//! survey-client
//!
//! The remote API collaborator. Traits the session services depend on,
//! plus an HTTP implementation over `reqwest`.

pub mod error;
pub mod http;
pub mod remote;

pub use crate::error::RemoteError;
pub use crate::http::{HttpApiClient, HttpClientSettings};
pub use crate::remote::{AssessmentRemoteClient, BoxFuture, PatientRemoteClient};
