use crate::{ByteSource, Pack, Packer, Record, Result};
use crossbeam_channel::{Receiver, Sender};
use std::io::Read;
use tracing::debug;

/// The pack/unpack facade: a bounded channel of pre-built [`Packer`]s
/// multiplexed across concurrent callers, so scratch buffers amortize.
///
/// Every entry point blocks until a packer is free, runs to completion,
/// and returns it; there is no cancellation and no fairness guarantee
/// beyond the channel's. Clones share the same pool.
#[derive(Clone)]
pub struct PackerPool {
    checkin_tx: Sender<Packer>,
    checkout_rx: Receiver<Packer>,
}

impl PackerPool {
    /// A pool of `num_packers` (≥ 1) reusable codec instances.
    pub fn new(num_packers: usize) -> Self {
        Self::build(num_packers, Packer::new)
    }

    /// Same, with canonical map ordering on every packer.
    pub fn new_canonical(num_packers: usize) -> Self {
        Self::build(num_packers, Packer::new_canonical)
    }

    fn build(num_packers: usize, make_packer: fn() -> Packer) -> Self {
        assert!(num_packers >= 1, "pool must hold at least one packer");
        let (checkin_tx, checkout_rx) = crossbeam_channel::bounded(num_packers);
        for _ in 0..num_packers {
            checkin_tx
                .send(make_packer())
                .expect("pool channel closed during construction");
        }
        debug!(num_packers, "packer pool ready");
        Self {
            checkin_tx,
            checkout_rx,
        }
    }

    pub fn pack<T: Pack + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        let mut packer = self.checkout();
        let res = packer.pack(value);
        self.checkin(packer);
        res
    }

    pub fn unpack<T: Record>(&self, data: &[u8], dest: &mut T) -> Result<()> {
        let mut packer = self.checkout();
        let res = packer.unpack(data, dest);
        self.checkin(packer);
        res
    }

    pub fn unpack_from_source<T: Record>(
        &self,
        src: &mut dyn ByteSource,
        dest: &mut T,
    ) -> Result<()> {
        let mut packer = self.checkout();
        let res = packer.unpack_from_source(src, dest);
        self.checkin(packer);
        res
    }

    pub fn unpack_from_reader<T: Record>(&self, reader: impl Read, dest: &mut T) -> Result<()> {
        let mut packer = self.checkout();
        let res = packer.unpack_from_reader(reader, dest);
        self.checkin(packer);
        res
    }

    // The pool holds both channel ends, so neither call below can observe a
    // disconnected channel while `self` is alive.
    fn checkout(&self) -> Packer {
        self.checkout_rx.recv().expect("packer pool disconnected")
    }

    fn checkin(&self, packer: Packer) {
        self.checkin_tx.send(packer).expect("packer pool disconnected")
    }
}
