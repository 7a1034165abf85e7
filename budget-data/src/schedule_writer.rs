//! CSV export of amortization schedules.
//!
//! Columns: `Month,Payment,Principal Payment,Interest Payment,Remaining Balance`.
//! Money columns are rounded half-up to two decimals.

use std::io::Write;
use std::path::Path;

use budget_core::calculations::MonthRecord;
use budget_core::calculations::common::format_money;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ScheduleWriteError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Serialize)]
struct ScheduleRow {
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "Payment")]
    payment: String,
    #[serde(rename = "Principal Payment")]
    principal_payment: String,
    #[serde(rename = "Interest Payment")]
    interest_payment: String,
    #[serde(rename = "Remaining Balance")]
    remaining_balance: String,
}

impl From<&MonthRecord> for ScheduleRow {
    fn from(record: &MonthRecord) -> Self {
        Self {
            month: record.month,
            payment: format_money(record.payment),
            principal_payment: format_money(record.principal_payment),
            interest_payment: format_money(record.interest_payment),
            remaining_balance: format_money(record.remaining_balance),
        }
    }
}

/// Writes `records` as CSV, header first.
pub fn write_schedule<W: Write>(
    writer: W,
    records: &[MonthRecord],
) -> Result<(), ScheduleWriteError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(ScheduleRow::from(record))?;
    }
    csv_writer.flush().map_err(|e| ScheduleWriteError::Csv(e.into()))?;
    Ok(())
}

/// Creates (or truncates) `path` and writes `records` to it.
pub fn write_schedule_file(
    path: &Path,
    records: &[MonthRecord],
) -> Result<(), ScheduleWriteError> {
    let file = std::fs::File::create(path).map_err(|source| ScheduleWriteError::Io {
        path: path.display().to_string(),
        source,
    })?;
    write_schedule(file, records)?;
    info!(path = %path.display(), months = records.len(), "wrote amortization schedule");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn record(
        month: u32,
        remaining_balance: rust_decimal::Decimal,
    ) -> MonthRecord {
        MonthRecord {
            month,
            payment: dec!(1103.879476),
            principal_payment: dec!(970.546143),
            interest_payment: dec!(133.333333),
            remaining_balance,
        }
    }

    #[test]
    fn writes_header_and_rounded_rows() {
        let mut out = Vec::new();

        write_schedule(&mut out, &[record(1, dec!(31029.453857))]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Month,Payment,Principal Payment,Interest Payment,Remaining Balance\n\
             1,1103.88,970.55,133.33,31029.45\n"
        );
    }

    #[test]
    fn negative_final_balance_is_written_as_is() {
        let mut out = Vec::new();

        write_schedule(&mut out, &[record(31, dec!(-45.362951))]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("31,1103.88,970.55,133.33,-45.36\n"));
    }

    #[test]
    fn empty_schedule_writes_nothing() {
        let mut out = Vec::new();

        write_schedule(&mut out, &[]).unwrap();

        assert!(out.is_empty());
    }
}
