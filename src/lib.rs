pub mod auth;
pub mod logging;
pub mod model;
pub mod remote;
pub mod upload;
