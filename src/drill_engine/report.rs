use serde_json::{json, Map, Value};

use crate::drill_engine::{models::Difficulty, tracker::SessionSummary};

/// Per-level map keyed by level name, in Easy → Hard order.
fn by_level(map: &std::collections::BTreeMap<Difficulty, f64>) -> Value {
    let entries: Map<String, Value> = map
        .iter()
        .map(|(lvl, v)| (lvl.to_string(), json!(v)))
        .collect();
    Value::Object(entries)
}

/// Build the end-of-session report printed by `math_drill --json`.
///
/// Percentages are reported as fractions, times in seconds.
pub fn summary_json(summary: &SessionSummary, recommended: Difficulty) -> Value {
    json!({
        "total_questions":   summary.total_questions,
        "accuracy":          summary.accuracy,
        "avg_time_s":        summary.avg_time_s,
        "accuracy_by_level": by_level(&summary.accuracy_by_level),
        "avg_time_by_level": by_level(&summary.avg_time_by_level),
        "transitions":       summary.transitions,
        "recommended_level": recommended.to_string(),
    })
}
