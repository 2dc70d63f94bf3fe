/// Exit codes for CI/automation.
pub const SUCCESS: i32 = 0;
/// Items or node config could not be parsed.
pub const VALIDATION_FAILED: i32 = 2;
/// Strict mode stopped at a failing item, or the credential test failed.
pub const RUN_FAILED: i32 = 3;
pub const RUNTIME_ERROR: i32 = 4;
