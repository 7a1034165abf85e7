pub mod form_loader;
pub mod schedule_writer;

pub use form_loader::{BudgetCsvError, BudgetCsvLoader};
pub use schedule_writer::{ScheduleWriteError, write_schedule, write_schedule_file};
