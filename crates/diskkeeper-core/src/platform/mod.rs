//! Platform-specific functionality — host volume enumeration and host
//! identification for artifact naming.

pub mod host;
pub mod volumes;

pub use host::host_identifier;
pub use volumes::enumerate_volumes;
