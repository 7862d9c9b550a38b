use std::collections::BTreeMap;

/// Holiday display names for one year, keyed by ISO date string.
pub type HolidayMap = BTreeMap<String, String>;

/// User-entered holidays across all years (date → name).
pub type CustomHolidays = BTreeMap<String, String>;

/// National holidays switched off by the user (date → disabled flag).
pub type DisabledHolidays = BTreeMap<String, bool>;
