//! Enumeration backend seam.
//!
//! The registry is generic over an [`Enumerator`] so the same discovery and
//! resolution logic runs against the real OpenCL runtime (see
//! [`crate::opencl`]) or against an injected in-memory table of named
//! devices ([`StaticEnumerator`]), which tests and CPU-only environments
//! supply instead of compiled-in vendor literals.

use crate::error::{ComputeUnitQuerySnafu, DeviceEnumerationSnafu, Result};

/// A source of accelerator platforms and their devices.
///
/// Handles are whatever the backend uses to identify a platform or device;
/// the registry only ever stores them and hands them back.
pub trait Enumerator {
    type Platform;
    type Device: Clone;

    /// All platforms visible to this backend, in backend order.
    fn platforms(&self) -> Result<Vec<Self::Platform>>;

    /// All devices of one platform, in backend order.
    fn devices(&self, platform: &Self::Platform) -> Result<Vec<Self::Device>>;

    /// Human-readable platform name, for diagnostics only.
    fn platform_name(&self, platform: &Self::Platform) -> Result<String>;

    /// The device name that resolution patterns are matched against.
    fn device_name(&self, device: &Self::Device) -> Result<String>;

    /// Number of parallel compute units the device reports.
    fn compute_units(&self, device: &Self::Device) -> Result<u32>;
}

/// A device entry in a [`StaticEnumerator`] table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDevice {
    pub name: String,
    /// `None` makes the capability query fail, exercising the degraded
    /// decomposition path.
    pub compute_units: Option<u32>,
}

/// A platform entry in a [`StaticEnumerator`] table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPlatform {
    pub name: String,
    pub devices: Vec<StaticDevice>,
    /// Makes device enumeration fail for this platform; discovery must
    /// degrade it to "zero devices".
    pub fail_enumeration: bool,
}

impl StaticPlatform {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), devices: Vec::new(), fail_enumeration: false }
    }

    /// A platform whose device listing always fails.
    pub fn failing(name: impl Into<String>) -> Self {
        Self { name: name.into(), devices: Vec::new(), fail_enumeration: true }
    }

    pub fn with_device(mut self, name: impl Into<String>, compute_units: u32) -> Self {
        self.devices.push(StaticDevice { name: name.into(), compute_units: Some(compute_units) });
        self
    }

    /// Adds a device whose compute-unit query fails.
    pub fn with_unqueryable_device(mut self, name: impl Into<String>) -> Self {
        self.devices.push(StaticDevice { name: name.into(), compute_units: None });
        self
    }
}

/// In-memory enumerator over a fixed platform/device table.
#[derive(Debug, Clone, Default)]
pub struct StaticEnumerator {
    platforms: Vec<StaticPlatform>,
}

impl StaticEnumerator {
    pub fn new(platforms: Vec<StaticPlatform>) -> Self {
        Self { platforms }
    }

    /// Shorthand for a single-platform table.
    pub fn single(platform: StaticPlatform) -> Self {
        Self { platforms: vec![platform] }
    }
}

impl Enumerator for StaticEnumerator {
    type Platform = StaticPlatform;
    type Device = StaticDevice;

    fn platforms(&self) -> Result<Vec<StaticPlatform>> {
        Ok(self.platforms.clone())
    }

    fn devices(&self, platform: &StaticPlatform) -> Result<Vec<StaticDevice>> {
        if platform.fail_enumeration {
            return DeviceEnumerationSnafu { reason: format!("injected failure for platform {}", platform.name) }
                .fail();
        }
        Ok(platform.devices.clone())
    }

    fn platform_name(&self, platform: &StaticPlatform) -> Result<String> {
        Ok(platform.name.clone())
    }

    fn device_name(&self, device: &StaticDevice) -> Result<String> {
        Ok(device.name.clone())
    }

    fn compute_units(&self, device: &StaticDevice) -> Result<u32> {
        device
            .compute_units
            .ok_or_else(|| ComputeUnitQuerySnafu { reason: format!("no compute unit count for {}", device.name) }.build())
    }
}
