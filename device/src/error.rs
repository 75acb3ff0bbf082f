use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// The platform listing itself failed; discovery degrades to an empty snapshot.
    #[snafu(display("platform enumeration failed: {reason}"))]
    PlatformEnumeration { reason: String },

    /// Listing the devices of one platform failed; that platform contributes zero devices.
    #[snafu(display("device enumeration failed: {reason}"))]
    DeviceEnumeration { reason: String },

    #[snafu(display("device name query failed: {reason}"))]
    NameQuery { reason: String },

    /// Compute-unit query failed; decomposition keeps its default local size.
    #[snafu(display("compute unit query failed: {reason}"))]
    ComputeUnitQuery { reason: String },

    #[snafu(display("platform name query failed: {reason}"))]
    PlatformNameQuery { reason: String },
}
