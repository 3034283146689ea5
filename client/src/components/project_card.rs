//! Project card acting as the case-study trigger control.
//!
//! DESIGN
//! ======
//! The trigger exposes its project id as `data-project` and the click handler
//! reads that attribute back as the lookup key. Without a modal in context
//! the card renders with no listener at all.

use leptos::prelude::*;

use crate::content::case_studies::{CaseStudy, CaseStudyRegistry};
use crate::state::modal::ModalState;

#[cfg(all(test, feature = "ssr"))]
#[path = "project_card_test.rs"]
mod project_card_test;

/// Attribute carrying the project id on trigger controls.
pub const PROJECT_ATTRIBUTE: &str = "data-project";

/// Summary card for one project with a "View Case Study" trigger.
#[component]
pub fn ProjectCard(study: &'static CaseStudy) -> impl IntoView {
    let trigger = match use_context::<RwSignal<ModalState>>() {
        Some(state) => {
            let on_click = move |ev: leptos::ev::MouseEvent| {
                let id = project_id_from_event(&ev).unwrap_or_else(|| study.id.to_owned());
                let mut next = state.get_untracked();
                if next.open(CaseStudyRegistry::builtin(), &id) {
                    #[cfg(feature = "hydrate")]
                    log::debug!("case study opened: {id}");
                    state.set(next);
                }
            };
            view! {
                <button class="btn project-card__trigger" type="button" data-project=study.id on:click=on_click>
                    <span>"View Case Study"</span>
                    <i data-lucide="arrow-right"></i>
                </button>
            }
            .into_any()
        }
        None => view! {
            <button class="btn project-card__trigger" type="button" data-project=study.id>
                <span>"View Case Study"</span>
                <i data-lucide="arrow-right"></i>
            </button>
        }
        .into_any(),
    };

    view! {
        <article class="project-card">
            <img class="project-card__image" src=study.image alt=study.title loading="lazy"/>
            <div class="project-card__content">
                <span class="project-card__tag">{study.tag}</span>
                <h3 class="project-card__title">{study.title}</h3>
                <p class="project-card__summary">{study.summary}</p>
                {trigger}
            </div>
        </article>
    }
}

#[cfg(feature = "hydrate")]
fn project_id_from_event(ev: &leptos::ev::MouseEvent) -> Option<String> {
    use wasm_bindgen::JsCast as _;

    ev.current_target()?
        .dyn_into::<web_sys::Element>()
        .ok()?
        .get_attribute(PROJECT_ATTRIBUTE)
}

#[cfg(not(feature = "hydrate"))]
fn project_id_from_event(_ev: &leptos::ev::MouseEvent) -> Option<String> {
    None
}
