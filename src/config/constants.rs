//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Validation
// =============================================================================

/// Username rule: letters, digits and underscore, 3 to 10 characters
pub const USERNAME_PATTERN: &str = "^[A-Za-z0-9_]{3,10}$";

/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 5;

/// Maximum password length
pub const PASSWORD_MAX_LENGTH: usize = 12;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;
