/// Julian Day Number offset of the Amete Alem (world) era epoch
pub const JD_EPOCH_OFFSET_AMETE_ALEM: i64 = -285_019;
/// Julian Day Number offset of the Amete Mihret (incarnation) era epoch
pub const JD_EPOCH_OFFSET_AMETE_MIHRET: i64 = 1_723_856;
/// Julian Day Number offset of the proleptic Gregorian epoch
pub const JD_EPOCH_OFFSET_GREGORIAN: i64 = 1_721_426;

/// Days in a common year, shared by both calendars
pub const DAYS_IN_YEAR: i64 = 365;
/// Days in a four-year cycle of three common years and one leap year. The
/// Ethiopian calendar repeats on it; inside a Gregorian century it does too.
pub const FOUR_YEAR_CYCLE_DAYS: i64 = 1461;
/// Days in the three common years that open a four-year cycle
pub(crate) const THREE_COMMON_YEARS_DAYS: i64 = 3 * DAYS_IN_YEAR;
/// Days in the Gregorian four-century cycle
pub(crate) const GREGORIAN_400_YEAR_DAYS: i64 = 146_097;
/// Days in a Gregorian century without a leap century year
pub(crate) const GREGORIAN_100_YEAR_DAYS: i64 = 36_524;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
/// Remainder of `year % 4` that marks an Ethiopian leap year
pub(crate) const ETHIOPIAN_LEAP_REMAINDER: i32 = 3;

/// Number of Gregorian months
pub const GREGORIAN_MONTHS: u8 = 12;
/// Number of Ethiopian months, Pagumē included
pub const ETHIOPIAN_MONTHS: u8 = 13;
/// Zero-based index of Meskerem, the first Ethiopian month
pub const MESKEREM: u8 = 0;
/// Zero-based index of Pagumē, the short thirteenth month
pub const PAGUME: u8 = 12;

/// Days in each of the twelve regular Ethiopian months
pub const ETHIOPIAN_MONTH_DAYS: u8 = 30;
/// Days in Pagumē in a common year
pub const PAGUME_DAYS: u8 = 5;
/// Days in Pagumē in a leap year
pub const PAGUME_DAYS_LEAP: u8 = 6;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Highest day accepted by the Ethiopian conversion boundary
pub const MAX_ETHIOPIAN_DAY: u8 = 30;
/// Highest one-based month accepted by the Ethiopian conversion boundary
pub const MAX_ETHIOPIAN_MONTH: u8 = 13;
/// Highest day accepted by the Gregorian conversion boundary
pub const MAX_GREGORIAN_DAY: u8 = 31;
/// Highest one-based month accepted by the Gregorian conversion boundary
pub const MAX_GREGORIAN_MONTH: u8 = 12;

/// Month number for February (one-based)
pub const FEBRUARY: u8 = 2;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Entries per row in the year and decade views
pub const VIEW_COLUMNS: usize = 3;
/// Year entries in a decade view
pub const DECADE_VIEW_YEARS: i32 = 12;

/// Date component separator of the `YYYY-M-D` string form
pub const DATE_SEPARATOR: char = '-';
/// Separator between the two ends of a `MonthBounds` string
pub const RANGE_SEPARATOR: char = '/';

/// Weekday names, Sunday first (index matches `EthiopianDate::weekday`)
pub const WEEK_NAMES: [&str; 7] = ["እሑድ", "ሰኞ", "ማክሰኞ", "ረቡዕ", "ሓሙስ", "ዓርብ", "ቅዳሜ"];

/// Full month names, indexed by zero-based month
pub const MONTH_NAMES: [&str; 13] = [
    "መስከረም",
    "ጥቅምት",
    "ኅዳር",
    "ታኅሣሥ",
    "ጥር",
    "የካቲት",
    "መጋቢት",
    "ሚያዝያ",
    "ግንቦት",
    "ሰኔ",
    "ሐምሌ",
    "ነሐሴ",
    "ጳጉሜን",
];

/// Abbreviated month names, indexed by zero-based month
pub const SHORT_MONTH_NAMES: [&str; 13] = [
    "መስከ", "ጥቅም", "ኅዳር", "ታኅሣ", "ጥር", "የካቲ", "መጋቢ", "ሚያዝ", "ግንቦ", "ሰኔ", "ሐምሌ", "ነሐሴ", "ጳጉሜ",
];
