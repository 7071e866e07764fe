//! # recsize
//!
//! A micro-benchmark measuring the in-memory footprint of three
//! equivalent record layouts: a named-field struct, a bare tuple, and a
//! tuple struct, each holding the same three integer fields.
//!
//! The binary generates 1000 records of each shape with random field
//! values, measures the retained size of each collection, and prints
//! one human-readable line per shape:
//!
//! ```text
//! structs size: 24.0 kB
//! tuples size: 24.0 kB
//! tuple structs size: 24.0 kB
//! ```
//!
//! ## Example
//!
//! ```rust
//! use recsize::{generate, FieldRecord, Footprint, RECORD_COUNT};
//!
//! let mut rng = rand::thread_rng();
//! let records: Vec<FieldRecord> = generate(RECORD_COUNT, &mut rng);
//!
//! let footprint = Footprint::of(&records);
//! assert_eq!(footprint.num_records, 1000);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod human;
pub mod record;
pub mod size;

pub use human::human_bytes;
pub use record::{
    generate, FieldRecord, RandomRecord, TripleTuple, TupleRecord, FIELD_RANGE, RECORD_COUNT,
    WIDE_FIELD_RANGE,
};
pub use size::RetainedSize;

/// Memory usage statistics for one generated collection.
#[derive(Debug, Clone, Default)]
pub struct Footprint {
    /// Total retained bytes: the vector header plus its heap buffer
    pub total_bytes: usize,
    /// Number of records measured
    pub num_records: usize,
    /// Bytes per record (calculated)
    pub bytes_per_record: f64,
}

impl Footprint {
    /// Measure the retained size of a collection of records.
    ///
    /// Takes the vector rather than a slice: unused buffer capacity is
    /// part of what the collection retains.
    #[allow(clippy::ptr_arg)]
    pub fn of<T>(records: &Vec<T>) -> Self
    where
        Vec<T>: RetainedSize,
    {
        let total_bytes = records.retained_size();
        let num_records = records.len();
        Footprint {
            total_bytes,
            num_records,
            bytes_per_record: if num_records > 0 {
                total_bytes as f64 / num_records as f64
            } else {
                0.0
            },
        }
    }
}
