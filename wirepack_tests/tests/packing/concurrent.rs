use super::helpers::Person;
use anyhow::Result;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::thread;
use wirepack::{Packer, PackerPool};

fn random_person(rng: &mut impl Rng) -> Person {
    let name_len = rng.gen_range(0..24);
    Person {
        name: (0..name_len).map(|_| rng.gen_range('a'..='z')).collect(),
        age: rng.gen(),
        height: rng.gen_range(0.0..250.0),
    }
}

/// More callers than packers; every caller must still see bytes equal to a
/// single-threaded encoding of its own value.
#[test]
fn contended_pool_packs_like_a_lone_packer() -> Result<()> {
    const NUM_THREADS: usize = 8;
    const ITERS_PER_THREAD: usize = 1000;

    let pool = PackerPool::new(2);

    thread::scope(|scope| {
        let handles = (0..NUM_THREADS)
            .map(|thread_i| {
                let pool = pool.clone();
                scope.spawn(move || -> Result<()> {
                    let mut rng = StdRng::seed_from_u64(thread_i as u64);
                    let mut lone = Packer::new();
                    for _ in 0..ITERS_PER_THREAD {
                        let person = random_person(&mut rng);

                        let pooled_bytes = pool.pack(&person)?;
                        assert_eq!(pooled_bytes, lone.pack(&person)?);

                        let mut back = Person::default();
                        pool.unpack(&pooled_bytes, &mut back)?;
                        assert_eq!(back, person);
                    }
                    Ok(())
                })
            })
            .collect_vec();

        for handle in handles {
            handle.join().expect("packing thread panicked")?;
        }
        Ok(())
    })
}

#[test]
fn clones_share_one_pool() -> Result<()> {
    let pool = PackerPool::new(1);
    let clone = pool.clone();

    let person = Person {
        name: String::from("shared"),
        age: 1,
        height: 2.0,
    };
    // with a single packer, interleaved use through both handles still
    // serializes cleanly
    for _ in 0..100 {
        let a = pool.pack(&person)?;
        let b = clone.pack(&person)?;
        assert_eq!(a, b);
    }
    Ok(())
}
