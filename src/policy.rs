//! Build-time barrier policy table.
//!
//! Every build is classified into exactly one of two variants:
//! [`HardwareFence`] for general-purpose CPUs whose memory model may reorder
//! the guarded accesses, and [`HostOrdered`] for builds where the
//! surrounding virtualization host already orders shared-ring accesses at a
//! coarser granularity. The classification is fixed when the crate is
//! compiled; no runtime branch survives monomorphization.
//!
//! # Classification table
//!
//! | Build | Variant | Emits |
//! |---|---|---|
//! | default | [`HardwareFence`] | hardware fence instructions |
//! | `host-ordered` feature | [`HostOrdered`] | compiler barrier only |
//!
//! # Supported architectures
//!
//! The hardware variant lowers through `core::sync::atomic::fence`:
//!
//! | Architecture | Full-fence lowering |
//! |---|---|
//! | `x86_64` | `mfence` |
//! | `aarch64` / `arm` | `dmb ish` |
//! | `riscv32` / `riscv64` | `fence rw, rw` |
//!
//! Any other architecture fails the build below. Adding one means reviewing
//! its memory model and extending this table, never substituting a weaker
//! primitive.

use core::sync::atomic::{compiler_fence, fence, Ordering};

// Reviewed enumeration of supported targets. A target outside this list
// must be classified here before the crate will build for it.
#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "arm",
    target_arch = "riscv32",
    target_arch = "riscv64",
)))]
compile_error!(
    "unclassified target architecture: add it to the barrier policy table in policy.rs"
);

/// Barrier behavior for one target classification.
///
/// Exactly two implementations exist: [`HardwareFence`] and [`HostOrdered`].
/// Ring drivers never name a variant directly; they call the wrappers in
/// [`crate::barriers`], which dispatch through [`TargetPolicy`].
pub trait BarrierPolicy {
    /// Bidirectional ordering point: no access issued before the call may
    /// be observed after it, and none issued after may be observed before.
    fn full_fence();

    /// Orders all prior stores before all subsequent stores.
    fn store_fence();

    /// Orders all prior loads before all subsequent loads.
    fn load_fence();
}

/// General-CPU variant: emits real fence instructions.
///
/// Used wherever nothing above the CPU guarantees shared-ring ordering.
/// Implemented with `core::sync::atomic::fence` rather than hand-written
/// instruction sequences; `SeqCst` drains the store buffer on every
/// supported architecture (see the module table for the lowering).
pub enum HardwareFence {}

/// Host-ordered variant: the surrounding virtualization layer already
/// orders shared-ring accesses, so no instruction is emitted.
///
/// A compiler barrier is kept: the host-level guarantee covers the hardware
/// only, and nothing in it stops the compiler from reordering the guarded
/// accesses at build time.
///
/// Enabling the `host-ordered` feature is a claim about the platform, not a
/// tuning knob. Whoever enables it must hold a memory-model reference
/// showing that store/load ordering holds for the polled-flag access
/// pattern without fences. A wrong claim shows up as a rare stale read on
/// the other side of the ring, not as a crash.
pub enum HostOrdered {}

impl BarrierPolicy for HardwareFence {
    #[inline]
    fn full_fence() {
        fence(Ordering::SeqCst);
    }

    #[inline]
    fn store_fence() {
        fence(Ordering::Release);
    }

    #[inline]
    fn load_fence() {
        fence(Ordering::Acquire);
    }
}

impl BarrierPolicy for HostOrdered {
    #[inline]
    fn full_fence() {
        compiler_fence(Ordering::SeqCst);
    }

    #[inline]
    fn store_fence() {
        compiler_fence(Ordering::Release);
    }

    #[inline]
    fn load_fence() {
        compiler_fence(Ordering::Acquire);
    }
}

/// The variant selected for this build.
#[cfg(feature = "host-ordered")]
pub type TargetPolicy = HostOrdered;

/// The variant selected for this build.
#[cfg(not(feature = "host-ordered"))]
pub type TargetPolicy = HardwareFence;
