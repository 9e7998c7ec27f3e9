//! Shared constants for the status line

/// Fragment used when the memory source can't be read
pub const MEMORY_SENTINEL: &str = "MEM_ERR";

/// Fragment used when a disk path can't be statted
pub const DISK_PLACEHOLDER: &str = "N/A";

/// Fragment used when there is no battery (desktops, missing sysfs node)
pub const BATTERY_SENTINEL: &str = "";

/// strftime pattern for the clock, e.g. "Fri Oct 16 14:03:59"
pub const CLOCK_FORMAT: &str = "%a %b %d %H:%M:%S";
