//! CSV question log: one row per answered question, in sequence order.

use std::io::Write;

use chrono::NaiveDateTime;

use crate::drill_engine::{error::DrillError, models::QuestionRecord};

pub const CSV_HEADER: [&str; 6] = ["qnum", "problem", "level", "user_answer", "correct", "response_time_s"];

/// Quote a field when it contains a delimiter, quote or line break.
fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

pub fn write_csv_log<W: Write>(records: &[QuestionRecord], mut out: W) -> Result<(), DrillError> {
    writeln!(out, "{}", CSV_HEADER.join(","))?;
    for r in records {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            r.sequence,
            csv_field(&r.statement),
            r.level,
            csv_field(&r.raw_answer),
            r.correct,
            r.response_time_s,
        )?;
    }
    out.flush()?;
    Ok(())
}

/// `"Ada Lovelace"` at 2024-03-01 09:05:07 → `"Ada_Lovelace_20240301-090507.csv"`.
pub fn log_file_name(player: &str, started: NaiveDateTime) -> String {
    format!("{}_{}.csv", player.trim().replace(' ', "_"), started.format("%Y%m%d-%H%M%S"))
}
