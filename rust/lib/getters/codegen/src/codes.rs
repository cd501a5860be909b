//! Stable diagnostic identifiers. Hosts match on these, never on messages.

/// Override type argument is missing or not a direct type reference.
pub const MALFORMED_TYPE_ARGUMENT: &str = "RCG001";

/// Override name argument is missing or not a literal string.
pub const MALFORMED_NAME_ARGUMENT: &str = "RCG002";

/// Two containers map to the same generated source name.
pub const REGISTRATION_NAME_COLLISION: &str = "RCG003";

/// An override's name literal is empty.
pub const EMPTY_ACCESSOR_NAME: &str = "RCG004";

/// Two accessors of one container share a property or cache field name.
pub const DUPLICATE_ACCESSOR: &str = "RCG005";
