//! Record shapes shared by the packing tests, modeled on the kinds the
//! walker must handle: scalars, strings, mappings, nullable sequences,
//! optional references, fixed arrays, byte payloads, dynamic slots.

use std::collections::HashMap;
use wirepack::{record, DynField, Skip};

record! {
    #[derive(Default, PartialEq, Debug, Clone)]
    pub struct Person {
        pub name: String,
        pub age: i32,
        pub height: f64,
    }
}

record! {
    #[derive(Default, PartialEq, Debug, Clone)]
    pub struct Foo {
        pub name: String,
        pub bars: HashMap<i32, String>,
    }
}

record! {
    #[derive(Default, PartialEq, Debug)]
    pub struct FooNil {
        pub nums: Option<Vec<isize>>,
        pub name: String,
    }
}

record! {
    #[derive(Default, PartialEq, Debug, Clone)]
    pub struct Inner {
        pub tag: String,
    }
}

record! {
    #[derive(Default, PartialEq, Debug)]
    pub struct Bar {
        pub b: Option<Box<Inner>>,
        pub bars: HashMap<i32, String>,
    }
}

record! {
    #[derive(Default, PartialEq, Debug, Clone)]
    pub struct ByteCarrier {
        pub id: [u8; 16],
        pub bytes: Vec<u8>,
    }
}

record! {
    #[derive(Default, Debug)]
    pub struct Carrier {
        pub label: String,
        pub payload: Option<DynField>,
    }
}

record! {
    #[derive(Default, PartialEq, Debug)]
    pub struct Job {
        pub name: String,
        pub done_signal: Skip<Option<u32>>,
    }
}

pub fn sample_person() -> Person {
    Person {
        name: String::from("Test999"),
        age: 999,
        height: 999.75,
    }
}

pub fn sample_foo() -> Foo {
    let mut bars = HashMap::new();
    bars.insert(12, String::from("test12"));
    bars.insert(123, String::from("test123"));
    Foo {
        name: String::from("test"),
        bars,
    }
}
