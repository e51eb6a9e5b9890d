// vicinity-rs/vicinity/src/test_support.rs

//! Test support helpers for unit and integration tests.
//!
//! These centralize mock and emulator setup so tests across the crate and
//! the tests/ directory reuse the same plumbing. The shared handles exist
//! because a [`Tag`] owns its boxed transceiver: tests hold a clone of the
//! handle and keep inspecting traffic after handing the box over.
#![allow(dead_code)]

use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use crate::constants::UID_LEN;
use crate::tag::{Ready, Tag};
use crate::transport::{EmulatedVicinityTag, MockTransceiver, Transceiver};
use crate::types::Uid;
use crate::Result;

/// Wire-order identifier used across tests.
pub const TEST_UID: [u8; UID_LEN] = [0xE0, 0x04, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06];

/// Well-formed system-information response for `uid`.
#[doc(hidden)]
pub fn system_info_response(
    uid: &[u8],
    dsfid: u8,
    afi: u8,
    count_raw: u8,
    size_raw: u8,
) -> Vec<u8> {
    let mut r = vec![0x00, 0x07];
    r.extend_from_slice(uid);
    r.extend_from_slice(&[dsfid, afi, count_raw, size_raw]);
    r
}

/// Cloneable handle over a [`MockTransceiver`]; clones share one mock.
#[derive(Clone, Default)]
pub struct SharedMock {
    inner: Rc<RefCell<MockTransceiver>>,
}

impl SharedMock {
    /// Fresh mock with the link up and an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// A clone boxed as a trait object, ready to hand to a [`Tag`].
    pub fn boxed(&self) -> Box<dyn Transceiver> {
        Box::new(self.clone())
    }

    /// Queue a response.
    pub fn push_response(&self, resp: Vec<u8>) {
        self.inner.borrow_mut().push_response(resp);
    }

    /// Direct access to the underlying mock.
    pub fn mock(&self) -> RefMut<'_, MockTransceiver> {
        self.inner.borrow_mut()
    }

    /// Snapshot of every frame sent so far.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.inner.borrow().sent.clone()
    }
}

impl Transceiver for SharedMock {
    fn is_connected(&self) -> bool {
        self.inner.borrow().is_connected()
    }

    fn connect(&mut self) -> Result<()> {
        self.inner.borrow_mut().connect()
    }

    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        self.inner.borrow_mut().transceive(frame)
    }

    fn close(&mut self) -> Result<()> {
        self.inner.borrow_mut().close()
    }
}

/// Cloneable handle over an [`EmulatedVicinityTag`]; clones share one tag.
#[derive(Clone)]
pub struct SharedTag {
    inner: Rc<RefCell<EmulatedVicinityTag>>,
}

impl SharedTag {
    /// Fresh blank emulated tag.
    pub fn new(uid: &[u8], block_count: usize, block_size: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(EmulatedVicinityTag::new(
                uid,
                block_count,
                block_size,
            ))),
        }
    }

    /// A clone boxed as a trait object, ready to hand to a [`Tag`].
    pub fn boxed(&self) -> Box<dyn Transceiver> {
        Box::new(self.clone())
    }

    /// Direct access to the underlying emulated tag.
    pub fn emulator(&self) -> RefMut<'_, EmulatedVicinityTag> {
        self.inner.borrow_mut()
    }
}

impl Transceiver for SharedTag {
    fn is_connected(&self) -> bool {
        self.inner.borrow().is_connected()
    }

    fn connect(&mut self) -> Result<()> {
        self.inner.borrow_mut().connect()
    }

    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        self.inner.borrow_mut().transceive(frame)
    }

    fn close(&mut self) -> Result<()> {
        self.inner.borrow_mut().close()
    }
}

/// Ready session against a fresh emulated tag, plus the handle for
/// inspecting it. The exchange counter starts at zero after setup.
#[doc(hidden)]
pub fn ready_emulated_tag(
    block_count: usize,
    block_size: usize,
) -> Result<(Tag<Ready>, SharedTag)> {
    let shared = SharedTag::new(&TEST_UID, block_count, block_size);
    let uid = Uid::from_wire(TEST_UID.to_vec())?;
    let tag = Tag::with_wire_uid(uid, shared.boxed()).initialize()?;
    shared.emulator().exchanges = 0;
    Ok((tag, shared))
}

/// Ready session against a queue mock pre-seeded with a system-information
/// response describing `count_raw + 1` blocks of `size_raw + 1` bytes,
/// then `responses` in order. Returns the shared handle for inspection.
#[doc(hidden)]
pub fn ready_mock_tag(
    count_raw: u8,
    size_raw: u8,
    responses: Vec<Vec<u8>>,
) -> Result<(Tag<Ready>, SharedMock)> {
    let shared = SharedMock::new();
    shared.push_response(system_info_response(&TEST_UID, 0x00, 0x00, count_raw, size_raw));
    for r in responses {
        shared.push_response(r);
    }
    let uid = Uid::from_wire(TEST_UID.to_vec())?;
    let tag = Tag::with_wire_uid(uid, shared.boxed()).initialize()?;
    Ok((tag, shared))
}
