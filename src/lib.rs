pub mod config;
pub mod domain;
pub mod relay_client;
mod routes;
mod startup;
pub mod submission;
pub mod telemetry;
mod util;
pub mod visitor;

pub use startup::run;
