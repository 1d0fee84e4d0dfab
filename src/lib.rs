//! Memory barrier primitives for virtio shared-ring drivers.
//!
//! A ring driver and the device behind it communicate through memory both
//! sides poll: descriptor tables, available/used indices, ready flags. The
//! CPU is free to reorder plain loads and stores around each other, so a
//! descriptor can become visible to the device *after* the index that
//! publishes it unless the driver fences between the two writes. Missed
//! orderings here do not crash; they surface as intermittent stale reads on
//! the other side of the ring.
//!
//! This crate provides that ordering point and nothing else: no locks, no
//! allocation, no device or transport logic, no virtqueue layout.
//!
//! # Module Organization
//! - `barriers` - the public fence trio (`mfence`, `sfence`, `lfence`)
//! - `policy` - build-time classification table selecting fence behavior
//!
//! # Usage
//!
//! Producer side: write the entry fields, fence, then write the index or
//! flag that publishes them. Consumer side: read the index or flag, fence,
//! then read the fields it guards.
//!
//! ```
//! use vring_barrier::mfence;
//!
//! let mut entry = [0u64; 2]; // stand-in for a descriptor
//! let ready: u16;            // stand-in for the published index
//!
//! entry[0] = 0x1000; // buffer address
//! entry[1] = 2048;   // buffer length
//! mfence(); // entry fields visible before the publish below
//! ready = 1;
//! # assert_eq!((entry[0], entry[1], ready), (0x1000, 2048, 1));
//! ```
//!
//! # Platform selection
//!
//! By default every supported target emits real hardware fences. Builds
//! running under a virtualization host that already orders shared-ring
//! accesses may opt into the `host-ordered` feature, which reduces the trio
//! to compiler barriers; see [`policy::HostOrdered`] for the proof
//! obligation that opt-in carries. The choice is fixed at compile time,
//! never probed at runtime.

#![no_std]

pub mod barriers;
pub mod policy;

// Re-exports for convenience
pub use barriers::{lfence, mfence, sfence};
