//! Rolling conventions for dates that fall on non-trading days.

/// How [`Calendar::adjust`](crate::Calendar::adjust) moves a date that is
/// not a trading day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusinessDayConvention {
    /// Roll forward to the next trading day.
    Following,
    /// Roll forward, unless that crosses into the next month; then roll back.
    ModifiedFollowing,
    /// Roll back to the previous trading day.
    Preceding,
    /// Roll back, unless that crosses into the previous month; then roll
    /// forward.
    ModifiedPreceding,
    /// Keep the date as is.
    Unadjusted,
    /// Roll to the closer trading day; ties roll forward.
    Nearest,
    /// Move to the last trading day of the date's month.
    EndOfMonth,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Nearest => "Nearest",
            BusinessDayConvention::EndOfMonth => "End of Month",
        };
        write!(f, "{s}")
    }
}
