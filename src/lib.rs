#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A terminal contact form.
//!
//! Collects a name, email, phone number, and message, validates them, and
//! posts them as JSON to a configurable endpoint.

pub mod api;
pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod tui;
