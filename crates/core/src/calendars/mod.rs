//! Business calendars - jurisdiction identifiers and business-day arithmetic.

mod business_calendar;
mod calendars_model;

pub use business_calendar::BusinessCalendar;
pub use calendars_model::CalendarId;
