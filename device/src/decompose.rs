//! Work-group decomposition policy.
//!
//! A cheap heuristic without per-device tuning tables: start from 128-wide
//! work groups and shrink to 64 when that would leave compute units idle
//! for small problems. Not guaranteed optimal; the `compute_units` argument
//! of [`decompose`] is the seam for anything smarter.

use tracing::warn;

use crate::enumerator::Enumerator;

/// Local size used unless the problem would underutilise the device.
pub const DEFAULT_LOCAL_SIZE: usize = 128;

/// Local size used to create more groups for small problems.
pub const NARROW_LOCAL_SIZE: usize = 64;

/// A (local, global) work size pair for one dispatch.
///
/// `global` is the smallest multiple of `local` covering the problem, so
/// `global % local == 0` and `problem <= global < problem + local` always
/// hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposition {
    pub local: usize,
    pub global: usize,
}

/// Picks a decomposition for `problem_size` work items.
///
/// `compute_units` is the device capability if it could be queried; `None`
/// skips the underutilisation check and keeps the default local size, a
/// degraded but functional path.
pub fn decompose(problem_size: usize, compute_units: Option<u32>) -> Decomposition {
    let mut local = DEFAULT_LOCAL_SIZE;

    if let Some(units) = compute_units {
        let groups = problem_size.div_ceil(local);
        if groups < units as usize {
            local = NARROW_LOCAL_SIZE;
        }
    }

    let global = problem_size.div_ceil(local) * local;
    Decomposition { local, global }
}

/// Queries `device` for its compute-unit count and decomposes with it.
///
/// A failed capability query is logged and degrades to the default local
/// size; it never aborts the dispatch.
pub fn decompose_for<E: Enumerator>(enumerator: &E, device: &E::Device, problem_size: usize) -> Decomposition {
    let units = match enumerator.compute_units(device) {
        Ok(units) => Some(units),
        Err(error) => {
            warn!(%error, "compute unit query failed, keeping the default local size");
            None
        }
    };
    decompose(problem_size, units)
}
