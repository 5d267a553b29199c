// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Identity label formatting: `<TypeName>@<hex>`.

use crate::{HostIntrospector, Introspect, LabelError, Result};
use std::fmt;

static HOST: HostIntrospector = HostIntrospector::new();

/// Formats values as `<TypeName>@<hex identity hash>`.
///
/// The formatter holds no state besides its introspection capability and
/// never inspects the value's contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityLabelFormatter<I = HostIntrospector> {
    introspector: I,
}

impl IdentityLabelFormatter {
    /// Formatter backed by compiler type names and address-derived hashes.
    pub const fn new() -> Self {
        Self {
            introspector: HostIntrospector::new(),
        }
    }
}

impl<I> IdentityLabelFormatter<I> {
    /// Formatter using a caller-supplied capability.
    pub const fn with_introspector(introspector: I) -> Self {
        Self { introspector }
    }

    /// Underlying capability.
    pub fn introspector(&self) -> &I {
        &self.introspector
    }

    /// Format `value` into a label.
    ///
    /// # Errors
    ///
    /// [`LabelError::InvalidArgument`] when `value` is `None`.
    pub fn format<T: ?Sized>(&self, value: Option<&T>) -> Result<String>
    where
        I: Introspect<T>,
    {
        match value {
            Some(value) => Ok(self.label(value).to_string()),
            None => {
                let err = LabelError::absent::<T>();
                tracing::debug!(
                    type_name = std::any::type_name::<T>(),
                    "Rejected absent reference"
                );
                Err(err)
            }
        }
    }

    /// Lazy label for interpolation into log lines; nothing is computed
    /// until it is displayed.
    pub fn label<'a, T: ?Sized>(&'a self, value: &'a T) -> Label<'a, T, I>
    where
        I: Introspect<T>,
    {
        Label {
            introspector: &self.introspector,
            value,
        }
    }
}

/// Display adapter writing `<TypeName>@<hex>`.
pub struct Label<'a, T: ?Sized, I> {
    introspector: &'a I,
    value: &'a T,
}

impl<T: ?Sized, I: Introspect<T>> fmt::Display for Label<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // LowerHex on i32 prints two's complement: -1 -> ffffffff.
        write!(
            f,
            "{}@{:x}",
            self.introspector.type_name(self.value),
            self.introspector.identity_hash(self.value)
        )
    }
}

impl<T: ?Sized, I: Introspect<T>> fmt::Debug for Label<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Format `value` with the default host-backed formatter.
///
/// # Errors
///
/// [`LabelError::InvalidArgument`] when `value` is `None`.
pub fn object_string<T: ?Sized>(value: Option<&T>) -> Result<String> {
    IdentityLabelFormatter::new().format(value)
}

/// Lazy host-backed label, e.g. `debug!("unary req={}", label_of(&req))`.
pub fn label_of<T: ?Sized>(value: &T) -> Label<'_, T, HostIntrospector> {
    Label {
        introspector: &HOST,
        value,
    }
}
