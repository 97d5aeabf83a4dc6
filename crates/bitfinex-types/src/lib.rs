//! Shared types for the Bitfinex v1 REST API
//!
//! This crate provides the static command tables, symbol sets, request
//! payloads and the decimal-aware JSON value used across the workspace.
//! It has no I/O and can be used independently.
//!
//! # Key Types
//!
//! - [`Command`], [`Scope`] - Supported API commands and their symbol scope
//! - [`Currency`], [`Pair`], [`Symbol`] - Known currencies and trading pairs
//! - [`Payload`], [`PayloadValue`] - Typed request payloads
//! - [`ApiValue`] - JSON tree with exact [`Decimal`] values
//! - [`decimalize`], [`to_string_form`] - The decimal codec
//! - [`OrderSide`], [`OrderType`], [`Exchange`], [`WalletType`] - Order vocabulary
//! - [`InputError`] - Validation errors

pub mod command;
pub mod decimal;
pub mod enums;
pub mod error;
pub mod payload;
pub mod symbol;

// Re-export commonly used types
pub use command::*;
pub use decimal::*;
pub use enums::*;
pub use error::*;
pub use payload::*;
pub use symbol::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
