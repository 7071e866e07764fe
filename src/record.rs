//! The three record shapes under measurement.
//!
//! Each shape is logically the same 3-tuple of integer fields `x`, `y`,
//! `z`; they differ only in how they are declared and constructed:
//!
//! - [`FieldRecord`]: named, independently assignable fields
//! - [`TripleTuple`]: a bare fixed-shape tuple
//! - [`TupleRecord`]: a declared tuple struct
//!
//! Collections are built with [`generate`], drawing every field
//! independently from the shape's inclusive range.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::size::RetainedSize;

/// Number of records generated per collection.
pub const RECORD_COUNT: usize = 1000;

/// Field range for [`FieldRecord`] and [`TripleTuple`].
pub const FIELD_RANGE: RangeInclusive<i64> = 1000..=10000;

/// Field range for [`TupleRecord`].
pub const WIDE_FIELD_RANGE: RangeInclusive<i64> = 10000..=100000;

/// A record built from named, mutable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRecord {
    /// First field
    pub x: i64,
    /// Second field
    pub y: i64,
    /// Third field
    pub z: i64,
}

/// A record as a bare fixed-shape tuple: `(x, y, z)`.
pub type TripleTuple = (i64, i64, i64);

/// A record as a declared tuple struct: positional fields behind a
/// named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TupleRecord(pub i64, pub i64, pub i64);

/// A record shape that can be filled with random field values.
pub trait RandomRecord: Sized {
    /// Build one record, drawing each field independently.
    fn random(rng: &mut impl Rng) -> Self;
}

impl RandomRecord for FieldRecord {
    fn random(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(FIELD_RANGE),
            y: rng.gen_range(FIELD_RANGE),
            z: rng.gen_range(FIELD_RANGE),
        }
    }
}

impl RandomRecord for TripleTuple {
    fn random(rng: &mut impl Rng) -> Self {
        (
            rng.gen_range(FIELD_RANGE),
            rng.gen_range(FIELD_RANGE),
            rng.gen_range(FIELD_RANGE),
        )
    }
}

impl RandomRecord for TupleRecord {
    fn random(rng: &mut impl Rng) -> Self {
        Self(
            rng.gen_range(WIDE_FIELD_RANGE),
            rng.gen_range(WIDE_FIELD_RANGE),
            rng.gen_range(WIDE_FIELD_RANGE),
        )
    }
}

/// Generate a collection of `count` records.
pub fn generate<R: RandomRecord>(count: usize, rng: &mut impl Rng) -> Vec<R> {
    (0..count).map(|_| R::random(rng)).collect()
}

impl RetainedSize for FieldRecord {
    #[inline(always)]
    fn heap_size(&self) -> usize {
        0
    }
}

impl RetainedSize for TupleRecord {
    #[inline(always)]
    fn heap_size(&self) -> usize {
        0
    }
}
