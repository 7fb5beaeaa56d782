//! English message catalog for display labels.
//!
//! Keys without an entry render as the key itself, which keeps passthrough
//! values from `map_job_type` visible.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

/// Look up the English text for `key`.
pub fn lookup(key: &str) -> Option<&'static str> {
    let text = match key {
        "job_type.full_time" => "Full-time",
        "job_type.part_time" => "Part-time",
        "job_type.contract" => "Contract",
        "job_type.freelance" => "Freelance",
        "job_type.internship" => "Internship",
        "job_type.not_applicable" => "Not applicable",
        _ => return None,
    };
    Some(text)
}

/// Translate `key`, falling back to the key.
pub fn translate(key: &str) -> String {
    lookup(key).map_or_else(|| key.to_owned(), str::to_owned)
}
