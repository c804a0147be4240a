pub const VERSION_MAJOR: u32 = 1;
pub const VERSION_MINOR: u32 = 0;

/// Display form reported by `--version`; kept in sync with the numbers above
pub const VERSION_STRING: &str = "ver. 1.0";

/// Version encoded as `major * 10 + minor`, e.g. 1.0 -> 10
pub const fn version() -> u32 {
    VERSION_MAJOR * 10 + VERSION_MINOR
}

/// Version as `ver. <major>.<minor>`
pub fn version_string() -> String {
    format!("ver. {}.{}", VERSION_MAJOR, VERSION_MINOR)
}
