use serde::Serialize;

/// Head counts of the student list, per status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStatistics {
    pub total_students: usize,
    pub active_students: usize,
    pub inactive_students: usize,
    pub left_students: usize,
}
