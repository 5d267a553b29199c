// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Identity labels for diagnostics.
//!
//! Produces `<TypeName>@<hex>` strings that tell object instances apart in
//! log lines: the value's type name, an `@`, and the lowercase hexadecimal
//! identity hash of that particular instance.
//!
//! # Features
//!
//! - **Injected introspection**: type name and identity hash come from an
//!   [`Introspect`] capability; [`HostIntrospector`] uses compiler type names
//!   and value addresses
//! - **Lazy labels**: [`Label`] implements `Display`, so nothing is formatted
//!   unless the log line is emitted
//! - **Stable identities**: [`Tagged`] keeps a label across moves
//! - **Configurable hashing**: [`LabelConfig`] can mix addresses with a seed
//!
//! Labels are not unique: distinct instances may collide.
//!
//! # Example
//!
//! ```rust
//! use objlabel::{object_string, IdentityLabelFormatter, LabelError};
//!
//! let request = vec![1u8, 2, 3];
//! let label = object_string(Some(&request)).unwrap();
//! assert!(label.starts_with("alloc::vec::Vec<u8>@"));
//!
//! let formatter = IdentityLabelFormatter::new();
//! assert!(matches!(
//!     formatter.format::<u8>(None),
//!     Err(LabelError::InvalidArgument { .. })
//! ));
//! ```

mod config;
mod error;
mod formatter;
mod introspect;
mod tagged;

pub use config::{ConfigError, LabelConfig};
pub use error::{LabelError, Result};
pub use formatter::{label_of, object_string, IdentityLabelFormatter, Label};
pub use introspect::{HashSource, HostIntrospector, Introspect};
pub use tagged::{Tagged, TaggedIntrospector};
