// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type-name and identity-hash capability consumed by the formatter.
//!
//! Rust has no open runtime reflection and no per-object identity hash, so
//! both are supplied through [`Introspect`]. The default [`HostIntrospector`]
//! uses `core::any::type_name` and derives the identity hash from the value's
//! address. Other implementations (see [`crate::TaggedIntrospector`]) may use
//! a generation counter or a fixed table instead.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Capability supplying a type name and identity hash for values of type `T`.
///
/// Implementations must be deterministic for a live, unmoved value and must
/// not depend on the value's contents.
pub trait Introspect<T: ?Sized> {
    /// Runtime type name, reported verbatim in the label.
    fn type_name(&self, value: &T) -> Cow<'static, str>;

    /// 32-bit identity hash of this particular instance.
    fn identity_hash(&self, value: &T) -> i32;
}

/// How [`HostIntrospector`] turns an address into an identity hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HashSource {
    /// Fold the 64-bit address to 32 bits (`high ^ low`).
    #[default]
    Address,
    /// Mix the address with a seed before folding, so raw addresses never
    /// reach log output.
    Mixed {
        /// Mixing key. Must be non-zero and at most `i64::MAX`, the largest
        /// TOML integer.
        seed: u64,
    },
}

impl HashSource {
    /// Derive the identity hash for `addr`.
    pub fn hash_address(&self, addr: usize) -> i32 {
        match *self {
            Self::Address => fold(addr as u64),
            Self::Mixed { seed } => fold(splitmix64(addr as u64 ^ seed)),
        }
    }
}

/// Introspection backed by the compiler's type names and value addresses.
///
/// Type names are static: a `&dyn Trait` reports `dyn path::Trait`, not the
/// concrete type behind it. Inject an [`Introspect`] impl when the concrete
/// name is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostIntrospector {
    source: HashSource,
}

impl HostIntrospector {
    /// Address-derived hashes.
    pub const fn new() -> Self {
        Self {
            source: HashSource::Address,
        }
    }

    /// Hashes derived according to `source`.
    pub const fn with_source(source: HashSource) -> Self {
        Self { source }
    }

    /// Active hash source.
    pub fn source(&self) -> HashSource {
        self.source
    }
}

impl<T: ?Sized> Introspect<T> for HostIntrospector {
    fn type_name(&self, _value: &T) -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<T>())
    }

    fn identity_hash(&self, value: &T) -> i32 {
        // Thin the pointer so slices and trait objects hash by data address.
        let addr = (value as *const T).cast::<()>() as usize;
        self.source.hash_address(addr)
    }
}

fn fold(v: u64) -> i32 {
    ((v >> 32) ^ v) as u32 as i32
}

// splitmix64 finaliser
fn splitmix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold() {
        assert_eq!(fold(0), 0);
        assert_eq!(fold(0xff), 0xff);
        assert_eq!(fold(0x0000_0001_0000_0001), 0);
        assert_eq!(fold(0x0000_0001_0000_0000), 1);
        assert_eq!(fold(0xffff_ffff), -1);
    }

    #[test]
    fn test_address_source_is_plain_fold() {
        let source = HashSource::Address;
        assert_eq!(source.hash_address(0x1000), 0x1000);
        assert_eq!(source.hash_address(0), 0);
    }

    #[test]
    fn test_mixed_source_hides_address() {
        let source = HashSource::Mixed { seed: 0x1234 };
        assert_eq!(source.hash_address(0x1000), source.hash_address(0x1000));
        assert_ne!(source.hash_address(0x1000), 0x1000);
        assert_ne!(source.hash_address(0x1000), source.hash_address(0x1008));
    }

    #[test]
    fn test_host_type_name() {
        let host = HostIntrospector::new();
        assert_eq!(Introspect::<u8>::type_name(&host, &7u8), "u8");
        assert_eq!(Introspect::<str>::type_name(&host, "abc"), "str");
        assert_eq!(
            Introspect::<Vec<u16>>::type_name(&host, &Vec::new()),
            "alloc::vec::Vec<u16>"
        );
    }

    #[test]
    fn test_trait_object_reports_erased_name() {
        let host = HostIntrospector::new();
        let value: &dyn std::fmt::Debug = &5u8;
        assert_eq!(host.type_name(value), "dyn core::fmt::Debug");
    }

    #[test]
    fn test_host_hash_follows_address() {
        let host = HostIntrospector::new();
        let values = [1u64, 2u64];

        let addr_a = std::ptr::addr_of!(values[0]) as usize;
        let addr_b = std::ptr::addr_of!(values[1]) as usize;

        let a = host.identity_hash(&values[0]);
        let b = host.identity_hash(&values[1]);

        assert_eq!(a, host.identity_hash(&values[0]));
        assert_eq!(a, HashSource::Address.hash_address(addr_a));
        assert_eq!(b, HashSource::Address.hash_address(addr_b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_fold_of_high_stack_addresses() {
        // Bit 3 of the high word is set, so +8 in the low word folds to -8.
        let source = HashSource::Address;
        let base = source.hash_address(0x7ffc_e1b0_0000);
        let next = source.hash_address(0x7ffc_e1b0_0008);
        assert_eq!(next.wrapping_sub(base), -8);
        assert_eq!(next, fold(0x7ffc_e1b0_0008));
    }

    #[test]
    fn test_host_hash_ignores_contents() {
        let host = HostIntrospector::new();
        let mut value = 10u32;
        let before = host.identity_hash(&value);
        value += 1;
        assert_eq!(host.identity_hash(&value), before);
    }

    #[test]
    fn test_unsized_hash_uses_data_address() {
        let host = HostIntrospector::new();
        let data = [1u8, 2, 3];
        let slice: &[u8] = &data;
        assert_eq!(host.identity_hash(slice), host.identity_hash(&data[0]));
    }
}
