//! Command implementations for the CLI
//!
//! - render: Build and print the pricing page payload
//! - rates: Display the overage rate table
//! - quote: Estimate overage charges
//! - validate: Check configuration and catalog

pub mod quote;
pub mod rates;
pub mod render;
pub mod validate;
