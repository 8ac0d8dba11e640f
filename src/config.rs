//! Application-level configuration constants.

use log::LevelFilter;

// Element identifiers the page must provide
pub const INTERVAL_RANGE_ID: &str = "interval-range";
pub const INTERVAL_DISPLAY_ID: &str = "interval-display";
pub const VALUE_SELECT_ID: &str = "value";
pub const FILE_INPUT_ID: &str = "input";
pub const FILE_LIST_ID: &str = "file-list";
pub const RESET_FORM_ID: &str = "reset-form";
pub const DATABASE_SELECT_ID: &str = "db";

// Page globals
pub const AVAILABILITY_GLOBAL: &str = "scores_dict";
pub const TOGGLE_GLOBAL: &str = "toggleInterval";

/// Optional radio controls carrying `data-interval-toggle="true|false"`.
pub const TOGGLE_SOURCE_ATTR: &str = "data-interval-toggle";

/// Select value forced when the interval slider is enabled ("Publication year").
pub const PUBLICATION_YEAR_VALUE: &str = "py";

pub const DISABLED_ATTR: &str = "disabled";

pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
