//! Display label for a job posting's employment type.

#[cfg(test)]
#[path = "job_type_badge_test.rs"]
mod job_type_badge_test;

use leptos::prelude::*;

use crate::util::i18n::translate;
use crate::util::job_type::map_job_type;

/// Human-readable label for a raw job-type value; empty for missing values.
pub fn job_type_label(value: Option<&str>) -> String {
    translate(&map_job_type(value))
}

/// Badge for a raw job-type value. Renders nothing when the value is missing.
#[component]
pub fn JobTypeBadge(#[prop(optional, into)] value: Option<String>) -> impl IntoView {
    let label = job_type_label(value.as_deref());
    (!label.is_empty()).then(|| view! { <span class="job-type-badge">{label}</span> })
}
