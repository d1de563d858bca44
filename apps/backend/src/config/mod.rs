//! Environment-driven configuration.

pub mod db;
