//! Build-time station configuration
//!
//! The cellular access point and the report sink are fixed strings baked in
//! at build time from the `STATION_APN`, `STATION_SERVER` and `STATION_PORT`
//! environment variables (see `build.rs`). An absent value is a
//! non-startable configuration, reported before the main loop is entered,
//! never a runtime fault.

use crate::devices::ModemEndpoint;
use core::fmt;

/// Longest accepted access point name
pub const MAX_APN_LEN: usize = 63;

/// Longest accepted server host name or address
pub const MAX_SERVER_LEN: usize = 63;

/// Longest accepted port string
pub const MAX_PORT_LEN: usize = 5;

/// Invalid build-time configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    MissingApn,
    MissingServer,
    MissingPort,
    ApnTooLong,
    ServerTooLong,
    PortTooLong,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingApn => write!(f, "STATION_APN is not set"),
            ConfigError::MissingServer => write!(f, "STATION_SERVER is not set"),
            ConfigError::MissingPort => write!(f, "STATION_PORT is not set"),
            ConfigError::ApnTooLong => write!(f, "STATION_APN exceeds {} bytes", MAX_APN_LEN),
            ConfigError::ServerTooLong => {
                write!(f, "STATION_SERVER exceeds {} bytes", MAX_SERVER_LEN)
            }
            ConfigError::PortTooLong => write!(f, "STATION_PORT exceeds {} bytes", MAX_PORT_LEN),
        }
    }
}

/// Station configuration strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationConfig {
    pub apn: &'static str,
    pub server: &'static str,
    pub port: &'static str,
}

impl StationConfig {
    /// Configuration captured from the build environment
    ///
    /// `build.rs` substitutes empty strings for unset variables so the
    /// crate still compiles; [`StationConfig::validate`] turns those into
    /// errors before the station starts.
    pub const fn from_build_env() -> Self {
        Self {
            apn: env!("STATION_APN"),
            server: env!("STATION_SERVER"),
            port: env!("STATION_PORT"),
        }
    }

    /// Check the configuration is present and within limits
    ///
    /// The length limits guarantee the assembled connection command always
    /// fits its buffer.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.apn.is_empty() {
            return Err(ConfigError::MissingApn);
        }
        if self.server.is_empty() {
            return Err(ConfigError::MissingServer);
        }
        if self.port.is_empty() {
            return Err(ConfigError::MissingPort);
        }
        if self.apn.len() > MAX_APN_LEN {
            return Err(ConfigError::ApnTooLong);
        }
        if self.server.len() > MAX_SERVER_LEN {
            return Err(ConfigError::ServerTooLong);
        }
        if self.port.len() > MAX_PORT_LEN {
            return Err(ConfigError::PortTooLong);
        }
        Ok(())
    }

    /// The modem endpoint this configuration describes
    pub fn endpoint(&self) -> ModemEndpoint {
        ModemEndpoint {
            apn: self.apn,
            server: self.server,
            port: self.port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> StationConfig {
        StationConfig {
            apn: "internet",
            server: "203.0.113.5",
            port: "4040",
        }
    }

    #[test]
    fn valid_config_passes() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn empty_fields_are_rejected() {
        let mut c = valid();
        c.apn = "";
        assert_eq!(c.validate(), Err(ConfigError::MissingApn));

        let mut c = valid();
        c.server = "";
        assert_eq!(c.validate(), Err(ConfigError::MissingServer));

        let mut c = valid();
        c.port = "";
        assert_eq!(c.validate(), Err(ConfigError::MissingPort));
    }

    #[test]
    fn overlong_fields_are_rejected() {
        let long = "x".repeat(64);
        let mut c = valid();
        c.apn = Box::leak(long.clone().into_boxed_str());
        assert_eq!(c.validate(), Err(ConfigError::ApnTooLong));

        let mut c = valid();
        c.server = Box::leak(long.into_boxed_str());
        assert_eq!(c.validate(), Err(ConfigError::ServerTooLong));

        let mut c = valid();
        c.port = "123456";
        assert_eq!(c.validate(), Err(ConfigError::PortTooLong));
    }

    #[test]
    fn endpoint_carries_the_strings() {
        let e = valid().endpoint();
        assert_eq!(e.apn, "internet");
        assert_eq!(e.server, "203.0.113.5");
        assert_eq!(e.port, "4040");
    }
}
