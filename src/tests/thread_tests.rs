use std::{
    sync::{
        Arc, Barrier,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

use arcstr::literal;
use indexmap::indexmap;

use crate::{
    EnumConfig, EnumType, EnumValueConfig, FieldConfig, ObjectConfig, ObjectType, ScalarType,
    Thunk, tests::fixtures::starwars::StarWars,
};

const THREADS: usize = 8;

#[test]
fn forces_fields_once_across_threads() {
    let calls = Arc::new(AtomicUsize::new(0));
    let object = ObjectType::new(ObjectConfig::new(
        "Shared",
        Thunk::deferred({
            let calls = calls.clone();
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
                indexmap! { literal!("f") => FieldConfig::new(ScalarType::string()) }
            }
        }),
    ));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles = (0..THREADS)
        .map(|_| {
            let (object, barrier) = (object.clone(), barrier.clone());
            thread::spawn(move || {
                barrier.wait();
                object.fields().unwrap().len()
            })
        })
        .collect::<Vec<_>>();

    for h in handles {
        assert_eq!(h.join().unwrap(), 1);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn shares_assembled_schema_across_threads() {
    let star_wars = StarWars::declare();
    let schema = Arc::new(star_wars.schema());
    let unrelated = EnumType::new(EnumConfig::new(
        "Unrelated",
        indexmap! { literal!("A") => EnumValueConfig::new() },
    ));

    let handles = (0..THREADS)
        .map(|_| {
            let (schema, unrelated) = (schema.clone(), unrelated.clone());
            thread::spawn(move || {
                assert!(schema.validate().is_empty());
                assert_eq!(unrelated.values().unwrap().len(), 1);
                schema.type_map().len()
            })
        })
        .collect::<Vec<_>>();

    for h in handles {
        assert_eq!(h.join().unwrap(), 7);
    }
}
