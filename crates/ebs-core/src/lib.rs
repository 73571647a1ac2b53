//! Client library for the e-book store HTTP API.
//!
//! The server owns all data; this crate is the thin, typed client side:
//! a cookie-carrying HTTP wrapper, session state for user/admin auth,
//! pure form validators, catalog queries, and the lead-capture download
//! flow that saves the fetched file to disk.

pub mod config;
pub mod logging;

pub mod admin;
pub mod api;
pub mod catalog;
pub mod download;
pub mod sanitize;
pub mod session;
pub mod validate;
