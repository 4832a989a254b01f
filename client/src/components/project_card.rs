//! Project summary card used by listings and dashboards.

use leptos::prelude::*;

use crate::state::projects::Project;
use crate::util::format::{format_sar, progress_style};

/// Link target for a project's detail page.
#[must_use]
pub fn project_href(id: &str) -> String {
    format!("/projects/{id}")
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let percent = project.progress_percent();
    let raised = format_sar(project.raised());
    let goal = format_sar(project.funding_goal);

    view! {
        <article class="project-card">
            <header class="project-card__header">
                <span class="project-card__category">{project.category.clone()}</span>
                <span class="project-card__status">{project.status.label()}</span>
            </header>
            <h3 class="project-card__title">
                <a href=project_href(&project.id)>{project.title.clone()}</a>
            </h3>
            <p class="project-card__summary">{project.summary.clone()}</p>
            <div class="progress" role="progressbar" aria-valuenow=percent aria-valuemin="0" aria-valuemax="100">
                <div class="progress__fill" style=progress_style(percent)></div>
            </div>
            <p class="project-card__funding">
                {raised} " من " {goal} " (" {percent} "%)"
            </p>
        </article>
    }
}
