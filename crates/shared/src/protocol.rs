use serde::{Deserialize, Serialize};

/// One resolved pairing of a student, subject, teacher, and time slot as
/// returned by the scheduling service.
///
/// Field names mirror the service's response keys exactly. Keys the
/// service omits decode to empty strings, so a partial row still renders
/// as empty cells instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleAssignment {
    #[serde(rename = "Student Name", default)]
    pub student_name: String,
    #[serde(rename = "Subject", default)]
    pub subject: String,
    #[serde(rename = "Teacher Name", default)]
    pub teacher_name: String,
    #[serde(rename = "Slot_ID", default)]
    pub slot_id: String,
}

#[cfg(test)]
mod tests {
    use super::ScheduleAssignment;

    #[test]
    fn decodes_the_exact_service_response_keys() {
        let assignment: ScheduleAssignment = serde_json::from_str(
            r#"{"Student Name":"Alice","Subject":"Math","Teacher Name":"Mr. Lee","Slot_ID":"S1"}"#,
        )
        .expect("decode assignment");

        assert_eq!(assignment.student_name, "Alice");
        assert_eq!(assignment.subject, "Math");
        assert_eq!(assignment.teacher_name, "Mr. Lee");
        assert_eq!(assignment.slot_id, "S1");
    }

    #[test]
    fn missing_keys_decode_to_empty_cells() {
        let assignment: ScheduleAssignment =
            serde_json::from_str(r#"{"Student Name":"Bob"}"#).expect("decode partial assignment");

        assert_eq!(assignment.student_name, "Bob");
        assert_eq!(assignment.subject, "");
        assert_eq!(assignment.teacher_name, "");
        assert_eq!(assignment.slot_id, "");
    }

    #[test]
    fn array_order_is_preserved_through_decode() {
        let rows: Vec<ScheduleAssignment> = serde_json::from_str(
            r#"[
                {"Student Name":"Zoe","Subject":"Physics","Teacher Name":"Ms. Wu","Slot_ID":"S3"},
                {"Student Name":"Alice","Subject":"Math","Teacher Name":"Mr. Lee","Slot_ID":"S1"}
            ]"#,
        )
        .expect("decode assignments");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].student_name, "Zoe");
        assert_eq!(rows[1].student_name, "Alice");
    }
}
