//! Infrastructure implementations.
//!
//! Configuration, the landing page template, and the story graph port.

pub mod config;
pub mod index_page;
pub mod ports;
