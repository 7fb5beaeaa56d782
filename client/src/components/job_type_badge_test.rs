use super::*;

#[test]
fn job_type_label_translates_known_value() {
    assert_eq!(job_type_label(Some("part_time")), "Part-time");
    assert_eq!(job_type_label(Some("not_applicable")), "Not applicable");
}

#[test]
fn job_type_label_shows_unknown_value_verbatim() {
    assert_eq!(job_type_label(Some("seasonal")), "seasonal");
}

#[test]
fn job_type_label_is_empty_for_missing_value() {
    assert_eq!(job_type_label(None), "");
    assert_eq!(job_type_label(Some("")), "");
}
