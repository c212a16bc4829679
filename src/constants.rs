//! Application constants for the log statistics processor
//!
//! Markers, delimiters and formats of the monitoring system's export files,
//! plus output naming defaults.

// =============================================================================
// Section Markers
// =============================================================================

/// Character that both opens and closes a section header line
pub const SECTION_DELIMITER: char = '-';

/// Header of the section holding `channel=variableId` mappings
pub const VARIABLES_SECTION: &str = "-VARIABLES-";

/// Header of the section holding `@channel:value;status;timestamp` entries
pub const VALUES_SECTION: &str = "-VALUES-";

// =============================================================================
// Line Field Separators
// =============================================================================

/// Separator between channel token and variable id in mapping lines
pub const MAPPING_SEPARATOR: char = '=';

/// Separator between channel token and payload in value lines (first occurrence only)
pub const CHANNEL_SEPARATOR: char = ':';

/// Marker that prefixes channel tokens in value lines
pub const CHANNEL_PREFIX: char = '@';

/// Separator between value, status and timestamp fields
pub const VALUE_FIELD_SEPARATOR: char = ';';

/// Number of `;`-separated fields expected in a value payload
pub const VALUE_FIELD_COUNT: usize = 3;

// =============================================================================
// Timestamps
// =============================================================================

/// chrono format equivalent of `dd.MM.yyyy HH:mm:ss.fff`
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S%.3f";

/// Exact character length of a timestamp in the fixed format
pub const TIMESTAMP_LENGTH: usize = 23;

// =============================================================================
// Output
// =============================================================================

/// Suffix replacing the input file extension to form the output file name
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_stats.txt";

/// Separator between fields of an output record
pub const OUTPUT_FIELD_SEPARATOR: char = ';';
