//! OpenCL-backed enumeration.
//!
//! Device names come back as owned strings, so arbitrarily long names are
//! matched in full; there is no fixed name buffer and no truncation.

use opencl3::device::{CL_DEVICE_TYPE_ALL, Device};
use opencl3::platform::{Platform, get_platforms};

use crate::enumerator::Enumerator;
use crate::error::{
    ComputeUnitQuerySnafu, DeviceEnumerationSnafu, NameQuerySnafu, PlatformEnumerationSnafu, PlatformNameQuerySnafu,
    Result,
};

/// Enumerates every OpenCL platform and all device types beneath it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClEnumerator;

impl Enumerator for ClEnumerator {
    type Platform = Platform;
    type Device = Device;

    fn platforms(&self) -> Result<Vec<Platform>> {
        get_platforms().map_err(|source| PlatformEnumerationSnafu { reason: source.to_string() }.build())
    }

    fn devices(&self, platform: &Platform) -> Result<Vec<Device>> {
        let ids = platform
            .get_devices(CL_DEVICE_TYPE_ALL)
            .map_err(|source| DeviceEnumerationSnafu { reason: source.to_string() }.build())?;
        Ok(ids.into_iter().map(Device::new).collect())
    }

    fn platform_name(&self, platform: &Platform) -> Result<String> {
        platform.name().map_err(|source| PlatformNameQuerySnafu { reason: source.to_string() }.build())
    }

    fn device_name(&self, device: &Device) -> Result<String> {
        device.name().map_err(|source| NameQuerySnafu { reason: source.to_string() }.build())
    }

    fn compute_units(&self, device: &Device) -> Result<u32> {
        device.max_compute_units().map_err(|source| ComputeUnitQuerySnafu { reason: source.to_string() }.build())
    }
}
