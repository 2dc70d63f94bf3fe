pub mod check_credential;
pub mod config;
pub mod preview;
pub mod run;
