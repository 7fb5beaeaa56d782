//! Dashboard page.
//!
//! This is the authenticated landing route. It is only mounted behind
//! `ProtectedRoute`, so it assumes a signed-in user.

use leptos::prelude::*;

use crate::components::job_type_badge::JobTypeBadge;
use crate::components::layout::AppLayout;
use crate::util::job_type::JobType;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppLayout>
            <section class="dashboard-page">
                <h1 class="dashboard-page__title">"Dashboard"</h1>
                <h2 class="dashboard-page__subtitle">"Job types"</h2>
                <ul class="dashboard-page__job-types">
                    {JobType::ALL
                        .into_iter()
                        .map(|job_type| {
                            view! {
                                <li>
                                    <JobTypeBadge value=job_type.as_str()/>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </AppLayout>
    }
}
