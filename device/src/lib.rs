//! Accelerator discovery and work decomposition.
//!
//! This crate owns the host side of "which device runs this": a one-shot
//! [`registry::Registry`] snapshot of every platform and device, substring
//! resolution of a device by name, and the [`decompose`] work-group policy.
//!
//! Enumeration goes through the [`enumerator::Enumerator`] seam so the same
//! logic runs against the OpenCL runtime (feature `opencl`) or an injected
//! in-memory device table.

pub mod decompose;
pub mod enumerator;
pub mod error;
#[cfg(feature = "opencl")]
pub mod opencl;
pub mod registry;

#[cfg(test)]
pub mod test;

pub use decompose::{DEFAULT_LOCAL_SIZE, Decomposition, NARROW_LOCAL_SIZE, decompose, decompose_for};
pub use enumerator::{Enumerator, StaticDevice, StaticEnumerator, StaticPlatform};
pub use error::*;
#[cfg(feature = "opencl")]
pub use opencl::ClEnumerator;
pub use registry::Registry;
