/// Response messages shared by handlers and error mapping.
/// Clients match on these strings, so keep them stable.

pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";
pub const INTERNAL_ERROR_MESSAGE: &str = "Something is wrong, please try again";
pub const NOT_A_NUMBER_MESSAGE: &str = "Invalid input: expected number, received NaN";

pub const STUDENT_NOT_FOUND: &str = "Student does not exists";
pub const COURSE_NOT_FOUND: &str = "Course does not exists";
pub const COURSE_ID_NOT_FOUND: &str = "Course Id does not exists";
pub const COURSE_ID_CONFLICT: &str = "Course Id is already exists";
pub const ROUTE_NOT_FOUND: &str = "Route does not exists";

pub const STUDENT_INFO_MESSAGE: &str = "Student Information";

/// Default config file looked up when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
