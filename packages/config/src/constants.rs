// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across PartnerDesk

// Storage Configuration
pub const PARTNERDESK_HOME: &str = "PARTNERDESK_HOME";
pub const PARTNERDESK_STORAGE_KEY: &str = "PARTNERDESK_STORAGE_KEY";
pub const PARTNERDESK_PERSIST_EMPTY: &str = "PARTNERDESK_PERSIST_EMPTY";

// Export Configuration
pub const PARTNERDESK_EXPORT_DIR: &str = "PARTNERDESK_EXPORT_DIR";

