//! Host identity reported by the informational endpoints.
//!
//! The hostname is queried from the OS once at startup. Inside a container it
//! identifies the task serving the request, which is what makes blue and green
//! instances distinguishable from the outside.

use std::io;

/// Identity of the machine this process runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub hostname: String,
    /// Operating system family, e.g. `linux` or `macos`
    pub platform: &'static str,
}

impl HostInfo {
    /// Query the operating system for the current host identity.
    pub fn detect() -> io::Result<Self> {
        Ok(Self {
            hostname: hostname()?,
            platform: std::env::consts::OS,
        })
    }
}

/// Network hostname as reported by the operating system.
pub fn hostname() -> io::Result<String> {
    ::hostname::get()?.into_string().map_err(|raw| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("hostname is not valid UTF-8: {raw:?}"),
        )
    })
}
