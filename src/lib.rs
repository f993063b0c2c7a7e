pub mod catalog;
pub mod config;
pub mod db;
pub mod diagnostics;
pub mod dto;
pub mod error;
pub mod extract;
pub mod importer;
pub mod models;
pub mod password;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;

#[cfg(test)]
mod test_support;
