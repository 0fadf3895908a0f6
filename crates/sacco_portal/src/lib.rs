#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # SACCO Portal
//!
//! Back office listings for a savings and credit co-operative, built on
//! [`datatable`].
//!
//! Each listing (members, loan products, loans, payments, expense
//! categories) is a column layout over one record type. The binary loads a
//! JSON export of that entity, drives the table with the controls given on
//! the command line, and prints the rendered page.
//!
//! Modules:
//! - **records** - The SACCO record types
//! - **pages** - Column layouts per listing
//! - **config** - Table options from file and flags
//! - **cli** - Command-line contract
//! - **app** - Loading data and driving the table
//! - **logging** - Subscriber setup
//! - **error** - Error types

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod records;

pub use cli::{Cli, Entity};
pub use config::Config;
pub use error::{ConfigError, PortalError};
