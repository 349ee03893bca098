use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};

use crate::protocol::ExportError;

/// Source of "today" for window resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clock {
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowKind {
    /// `[today, today + 7)`
    RollingForward,
    /// `[today, sunday]`
    WeekRemainder,
    /// `[today - 7, today]`, newest first
    TrailingBack,
    /// `[today, end]`
    ExplicitEnd(NaiveDate),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub end_inclusive: bool,
    pub order: SortOrder,
}

impl WindowKind {
    pub fn resolve(self, today: NaiveDate) -> Result<DateWindow, ExportError> {
        let window = match self {
            WindowKind::RollingForward => DateWindow {
                start: today,
                end: today + Duration::days(7),
                end_inclusive: false,
                order: SortOrder::Ascending,
            },
            WindowKind::WeekRemainder => {
                let rest = 6 - i64::from(today.weekday().num_days_from_monday());
                DateWindow {
                    start: today,
                    end: today + Duration::days(rest),
                    end_inclusive: true,
                    order: SortOrder::Ascending,
                }
            }
            WindowKind::TrailingBack => DateWindow {
                start: today - Duration::days(7),
                end: today,
                end_inclusive: true,
                order: SortOrder::Descending,
            },
            WindowKind::ExplicitEnd(end) => {
                if end < today {
                    return Err(ExportError::InvalidRange(format!(
                        "Ngày kết thúc ({}) phải lớn hơn hoặc bằng ngày hôm nay ({})",
                        end, today
                    )));
                }
                DateWindow {
                    start: today,
                    end,
                    end_inclusive: true,
                    order: SortOrder::Ascending,
                }
            }
        };
        Ok(window)
    }

    pub fn no_data_message(&self) -> String {
        match self {
            WindowKind::RollingForward => "Không có lịch hẹn nào trong 7 ngày tới".to_string(),
            WindowKind::WeekRemainder => "Không có lịch hẹn nào trong tuần này".to_string(),
            WindowKind::TrailingBack => "Không có lịch hẹn nào trong 7 ngày qua".to_string(),
            WindowKind::ExplicitEnd(end) => {
                format!("Không có lịch hẹn nào từ hôm nay đến {}", end)
            }
        }
    }
}

impl DateWindow {
    /// Half-open timestamp range `[from, until)` matching the window's days.
    pub fn bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        let end = if self.end_inclusive {
            self.end + Duration::days(1)
        } else {
            self.end
        };
        (crate::utils::day_start(self.start), crate::utils::day_start(end))
    }
}
