use super::helpers::{sample_foo, sample_person, Bar, FooNil, Inner, Job, Person};
use anyhow::Result;
use std::collections::HashMap;
use wirepack::{record, Packer, PackerPool, Skip};

record! {
    #[derive(Default, PartialEq, Debug)]
    pub struct EveryScalar {
        pub flag: bool,
        pub tiny: i8,
        pub short: i16,
        pub int: i32,
        pub long: i64,
        pub byte: u8,
        pub ushort: u16,
        pub uint: u32,
        pub ulong: u64,
        pub word: isize,
        pub uword: usize,
        pub single: f32,
        pub double: f64,
        pub text: String,
    }
}

#[test]
fn every_scalar_kind_round_trips() -> Result<()> {
    let a = EveryScalar {
        flag: true,
        tiny: -8,
        short: -1600,
        int: -320_000,
        long: -64_000_000_000,
        byte: 0xfe,
        ushort: 65_535,
        uint: 4_000_000_000,
        ulong: u64::MAX,
        word: isize::MIN,
        uword: usize::MAX,
        single: -0.5,
        double: f64::MIN_POSITIVE,
        text: String::from("scalar salad"),
    };

    let mut packer = Packer::new();
    let bytes = packer.pack(&a)?;
    // 1+1+2+4+8 + 1+2+4+8 + 8+8 + 4+8 + (4+12)
    assert_eq!(bytes.len(), 75);

    let mut b = EveryScalar::default();
    packer.unpack(&bytes, &mut b)?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn empty_containers_round_trip() -> Result<()> {
    let a = FooNil {
        nums: Some(vec![]),
        name: String::new(),
    };
    let mut packer = Packer::new();
    let bytes = packer.pack(&a)?;

    let mut b = FooNil::default();
    packer.unpack(&bytes, &mut b)?;
    assert_eq!(b.nums, Some(vec![]));
    assert_eq!(b.name, "");
    Ok(())
}

#[test]
fn string_with_embedded_zero_bytes() -> Result<()> {
    let a = Person {
        name: String::from("nul\0inside\0"),
        ..Person::default()
    };
    let mut packer = Packer::new();
    let bytes = packer.pack(&a)?;
    assert_eq!(&bytes[..4], &11i32.to_be_bytes());

    let mut b = Person::default();
    packer.unpack(&bytes, &mut b)?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn platform_ints_round_trip_extremes() -> Result<()> {
    let mut packer = Packer::new();
    for value in [isize::MIN, -1, 0, 1, isize::MAX] {
        let nums = FooNil {
            nums: Some(vec![value]),
            name: String::new(),
        };
        let bytes = packer.pack(&nums)?;
        let mut back = FooNil::default();
        packer.unpack(&bytes, &mut back)?;
        assert_eq!(back.nums, Some(vec![value]));
    }
    Ok(())
}

#[test]
fn records_nest_inside_containers() -> Result<()> {
    record! {
        #[derive(Default, PartialEq, Debug)]
        pub struct Roster {
            pub by_id: HashMap<i32, Inner>,
            pub ordered: Vec<Inner>,
        }
    }

    let mut by_id = HashMap::new();
    by_id.insert(1, Inner { tag: String::from("one") });
    by_id.insert(2, Inner { tag: String::from("two") });
    let a = Roster {
        by_id,
        ordered: vec![
            Inner { tag: String::from("first") },
            Inner { tag: String::from("second") },
        ],
    };

    let mut packer = Packer::new();
    let bytes = packer.pack(&a)?;
    let mut b = Roster::default();
    packer.unpack(&bytes, &mut b)?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn reference_chain_round_trips() -> Result<()> {
    let mut bars = HashMap::new();
    bars.insert(7, String::from("seven"));
    let a = Bar {
        b: Some(Box::new(Inner {
            tag: String::from("deep"),
        })),
        bars,
    };
    let mut packer = Packer::new();
    let bytes = packer.pack(&a)?;

    let mut b = Bar::default();
    packer.unpack(&bytes, &mut b)?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn channel_like_field_is_ignored() -> Result<()> {
    let a = Job {
        name: String::from("reindex"),
        done_signal: Skip(Some(9)),
    };
    let mut packer = Packer::new();
    let bytes = packer.pack(&a)?;
    assert_eq!(bytes, packer.pack(&a.name)?);

    let mut b = Job {
        done_signal: Skip(Some(1)),
        ..Job::default()
    };
    packer.unpack(&bytes, &mut b)?;
    assert_eq!(b.name, "reindex");
    assert_eq!(*b.done_signal, None);
    Ok(())
}

#[test]
fn output_is_independent_of_pool_size() -> Result<()> {
    let small = PackerPool::new(1);
    let large = PackerPool::new(8);
    let mut lone = Packer::new();

    assert_eq!(small.pack(&sample_person())?, large.pack(&sample_person())?);
    assert_eq!(small.pack(&sample_person())?, lone.pack(&sample_person())?);

    let canonical_small = PackerPool::new_canonical(1);
    let canonical_large = PackerPool::new_canonical(8);
    assert_eq!(
        canonical_small.pack(&sample_foo())?,
        canonical_large.pack(&sample_foo())?
    );
    Ok(())
}
