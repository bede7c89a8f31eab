// Domain constants (no magic values)

/// Minutes per unit for relative "<n> <unit> ago" phrases
pub const MINUTES_PER_MINUTE: i64 = 1;
pub const MINUTES_PER_HOUR: i64 = 60;
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Sort key used for posted times that could not be parsed
pub const UNPARSED_SORT_KEY: i64 = 0;

/// Separator used when a raw field holds an array of scalars
pub const ARRAY_FIELD_SEPARATOR: &str = ", ";

/// Key whose presence in the first record selects the Upwork schema
pub const UPWORK_DETECTION_KEY: &str = "Title";
