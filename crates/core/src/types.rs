/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Camp event dates carry no time-of-day component.
pub type EventDate = chrono::NaiveDate;
