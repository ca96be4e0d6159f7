//! Shelfwright Library
//!
//! This library provides the layout engines behind a parametric furniture
//! configurator: column splits, constraint validation, fallback selection,
//! zone resolution, pricing and the compact URL form of column selections.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod services;
