//! Shared constants for the configuration editor.

/// Absolute path of the cloud service configuration file on the device.
/// The editor manages exactly this file; the path is never parameterized.
pub const CLOUD_CONFIG_PATH: &str = "/etc/homed/homed-cloud.conf";

/// Where the configuration file format is documented
pub const CLOUD_CONFIG_DOC_URL: &str = "https://wiki.homed.dev/page/Cloud/Configuration";

/// Visible rows of the edit surface
pub const EDIT_SURFACE_ROWS: u8 = 25;

/// Content presented when the configuration file is missing or unreadable.
///
/// Read failures are recovered locally: the operator sees an empty editor,
/// never an error message.
pub const DEFAULT_ON_READ_FAILURE: &str = "";
