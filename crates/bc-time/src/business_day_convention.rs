//! Business-day conventions used by [`HolidayCalendar::adjust`].
//!
//! [`HolidayCalendar::adjust`]: crate::calendar::HolidayCalendar::adjust

/// How to move a date that falls on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessDayConvention {
    /// Keep the date as it is.
    Unadjusted,
    /// The first business day on or after the date.
    Following,
    /// As `Following`, but never leaves the month: when the following
    /// business day is in the next month, the last business day of the
    /// date's month is used instead.
    ModifiedFollowing,
    /// The last business day on or before the date.
    Preceding,
    /// As `Preceding`, unless that lands in the previous month, in which
    /// case `Following` is applied.
    ModifiedPreceding,
    /// The closest business day; ties resolve forward.
    Nearest,
    /// The last business day of the date's month.
    EndOfMonth,
}

impl BusinessDayConvention {
    /// All conventions.
    pub const ALL: [BusinessDayConvention; 7] = [
        BusinessDayConvention::Unadjusted,
        BusinessDayConvention::Following,
        BusinessDayConvention::ModifiedFollowing,
        BusinessDayConvention::Preceding,
        BusinessDayConvention::ModifiedPreceding,
        BusinessDayConvention::Nearest,
        BusinessDayConvention::EndOfMonth,
    ];
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "ModifiedFollowing",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "ModifiedPreceding",
            BusinessDayConvention::Nearest => "Nearest",
            BusinessDayConvention::EndOfMonth => "EndOfMonth",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for BusinessDayConvention {
    type Err = bc_core::Error;

    fn from_str(s: &str) -> bc_core::Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                bc_core::Error::InvalidArgument(format!("unknown business day convention '{s}'"))
            })
    }
}
