/// Base of the polynomial rolling hash used for name keys.
pub const HASH_BASE: i64 = 31;

/// Modulus of the polynomial rolling hash.
pub const HASH_MODULUS: i64 = 10_000_000_009;

/// Actor every bacon-number query measures against.
pub const DEFAULT_REFERENCE_ACTOR: &str = "Bacon, Kevin";

/// Field separator of one dataset line: `Movie/Actor 1/Actor 2/...`.
pub const DEFAULT_DELIMITER: char = '/';

/// Environment variable holding the log filter for the CLI.
pub const LOG_ENV_VAR: &str = "BACON_LOG";

/// Value returned across the integer contract when a query has no answer.
pub const NO_RESULT: i64 = -1;
