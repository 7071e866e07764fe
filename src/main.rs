//! Compares the in-memory footprint of three equivalent record
//! layouts across 1000 randomly generated instances of each.
//!
//! Run with: cargo run --release

use recsize::{
    generate, human_bytes, FieldRecord, Footprint, TripleTuple, TupleRecord, RECORD_COUNT,
};

fn main() {
    let mut rng = rand::thread_rng();

    let structs: Vec<FieldRecord> = generate(RECORD_COUNT, &mut rng);
    let tuples: Vec<TripleTuple> = generate(RECORD_COUNT, &mut rng);
    let tuple_structs: Vec<TupleRecord> = generate(RECORD_COUNT, &mut rng);

    println!(
        "structs size: {}",
        human_bytes(Footprint::of(&structs).total_bytes)
    );
    println!(
        "tuples size: {}",
        human_bytes(Footprint::of(&tuples).total_bytes)
    );
    println!(
        "tuple structs size: {}",
        human_bytes(Footprint::of(&tuple_structs).total_bytes)
    );
}
