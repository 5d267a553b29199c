// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Generation-counter identities.
//!
//! Address-derived hashes change when a value moves. Wrapping a value in
//! [`Tagged`] pins its identity to a counter value taken at construction, so
//! the label survives moves (into channels, `Vec` growth, etc.).

use crate::Introspect;
use std::borrow::Cow;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_TAG: AtomicU32 = AtomicU32::new(1);

fn next_tag() -> u32 {
    // Wraps after 2^32 allocations; labels may then collide.
    NEXT_TAG.fetch_add(1, Ordering::Relaxed)
}

/// A value carrying a process-unique (until wrap) identity tag.
pub struct Tagged<T> {
    tag: u32,
    value: T,
}

impl<T> Tagged<T> {
    /// Wrap `value` with a fresh tag.
    pub fn new(value: T) -> Self {
        Self {
            tag: next_tag(),
            value,
        }
    }

    /// Identity tag.
    pub fn tag(&self) -> u32 {
        self.tag
    }

    /// Unwrap, discarding the identity.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Clones are new instances and get a new tag.
impl<T: Clone> Clone for Tagged<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T> Deref for Tagged<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Tagged<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tagged<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tagged")
            .field("tag", &self.tag)
            .field("value", &self.value)
            .finish()
    }
}

/// Introspection for [`Tagged`] values: inner type name, tag as hash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaggedIntrospector;

impl<T> Introspect<Tagged<T>> for TaggedIntrospector {
    fn type_name(&self, _value: &Tagged<T>) -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<T>())
    }

    fn identity_hash(&self, value: &Tagged<T>) -> i32 {
        value.tag as i32
    }
}
