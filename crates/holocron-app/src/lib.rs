//! Holocron App Services
//!
//! Catalog sources, durable storage, the favorites store, and the view
//! controller. Depends on the `holocron` core crate.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod network;
pub mod providers;
