#![forbid(unsafe_code)]

//! Runtime for the Trestle node: credentials, the authenticated API client and the batch loop.
//!
//! Request construction lives in `trestle-core`; this crate sends what core builds.

pub mod credentials;
pub mod executor;
pub mod secrets;

pub use crate::credentials::TrestleApiCredential;
pub use crate::executor::{
    ApiTransport, BatchAborted, BatchRunner, ExecConfig, ItemError, RemoteError, TrestleClient,
};
