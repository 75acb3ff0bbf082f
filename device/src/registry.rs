//! Accelerator discovery and name-based resolution.
//!
//! [`Registry::discover`] enumerates every platform and its devices exactly
//! once, producing an immutable snapshot that is safe to read from any
//! number of threads. Resolution walks the snapshot in discovery order and
//! matches a plain, case-sensitive substring against each device name; a
//! miss is a normal outcome (the machine simply lacks that accelerator),
//! not an error.

use tracing::{debug, info, warn};

use crate::enumerator::Enumerator;

/// One-shot snapshot of every platform and its devices.
pub struct Registry<E: Enumerator> {
    enumerator: E,
    snapshot: Vec<(E::Platform, Vec<E::Device>)>,
}

impl<E: Enumerator> Registry<E> {
    /// Enumerates all platforms and devices through `enumerator`.
    ///
    /// Discovery never fails: a failed platform listing yields an empty
    /// snapshot, and a platform whose device listing fails contributes zero
    /// devices.
    pub fn discover(enumerator: E) -> Self {
        let platforms = match enumerator.platforms() {
            Ok(platforms) => platforms,
            Err(error) => {
                warn!(%error, "platform enumeration failed, continuing with an empty snapshot");
                Vec::new()
            }
        };

        let snapshot: Vec<_> = platforms
            .into_iter()
            .map(|platform| {
                let devices = match enumerator.devices(&platform) {
                    Ok(devices) => devices,
                    Err(error) => {
                        warn!(%error, "device enumeration failed, treating platform as empty");
                        Vec::new()
                    }
                };
                (platform, devices)
            })
            .collect();

        debug!(
            platforms = snapshot.len(),
            devices = snapshot.iter().map(|(_, devices)| devices.len()).sum::<usize>(),
            "discovery complete"
        );
        Self { enumerator, snapshot }
    }

    /// First device whose name contains `pattern`, in discovery order.
    ///
    /// Matching is case-sensitive; platform-then-device enumeration order is
    /// the tie-break, not name specificity. `None` means no accelerator on
    /// this machine matches and the caller may fall back to CPU execution.
    pub fn resolve(&self, pattern: &str) -> Option<&E::Device> {
        for (_, devices) in &self.snapshot {
            for device in devices {
                let name = match self.enumerator.device_name(device) {
                    Ok(name) => name,
                    Err(error) => {
                        warn!(%error, "skipping device with unreadable name");
                        continue;
                    }
                };
                if name.contains(pattern) {
                    info!(device = %name, pattern, "resolved accelerator");
                    return Some(device);
                }
            }
        }
        None
    }

    /// Platforms with their device slices, in discovery order.
    pub fn platforms(&self) -> impl Iterator<Item = (&E::Platform, &[E::Device])> {
        self.snapshot.iter().map(|(platform, devices)| (platform, devices.as_slice()))
    }

    /// Every discovered device, in discovery order.
    pub fn devices(&self) -> impl Iterator<Item = &E::Device> {
        self.snapshot.iter().flat_map(|(_, devices)| devices)
    }

    pub fn device_count(&self) -> usize {
        self.snapshot.iter().map(|(_, devices)| devices.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.device_count() == 0
    }

    /// The backend this snapshot was discovered through.
    pub fn enumerator(&self) -> &E {
        &self.enumerator
    }
}
