//! Shared modal that displays one project case study at a time.
//!
//! ARCHITECTURE
//! ============
//! The page owns an `RwSignal<ModalState>`; project cards open it and this
//! component renders it. The modal root stays mounted and is shown or hidden
//! through its `is-open` class, while `#modal-body` is re-rendered from the
//! active record on every open.

use leptos::prelude::*;

use crate::content::case_studies::CaseStudy;
use crate::content::sections::{CHALLENGE_HEADING, SOLUTION_HEADING, STACK_HEADING, Section, meta_line, sections};
use crate::state::modal::{CloseTrigger, ModalState};

#[cfg(all(test, feature = "ssr"))]
#[path = "case_study_modal_test.rs"]
mod case_study_modal_test;

pub const MODAL_ROOT_ID: &str = "case-study-modal";
pub const MODAL_BODY_ID: &str = "modal-body";

/// Modal root with overlay, close button and content-injection target.
#[component]
pub fn CaseStudyModal(state: RwSignal<ModalState>) -> impl IntoView {
    let dismiss = move |trigger: CloseTrigger| {
        let mut next = state.get_untracked();
        if next.dismiss(trigger) {
            #[cfg(feature = "hydrate")]
            log::debug!("case study closed via {trigger:?}");
            state.set(next);
        }
    };

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            crate::util::scroll_lock::apply(state.with(ModalState::scroll_locked));
        });

        // Icons inside freshly rendered content stay placeholders until activated.
        Effect::new(move || {
            if state.with(ModalState::render_seq) > 0 {
                crate::util::icons::refresh();
            }
        });

        let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
            if crate::state::modal::is_dismiss_key(&ev.key()) {
                dismiss(CloseTrigger::Escape);
            }
        });

        on_cleanup(move || {
            keydown.remove();
            crate::util::scroll_lock::apply(false);
        });
    }

    let is_open = move || state.with(ModalState::is_open);
    let body = move || state.with(ModalState::active).map(case_study_body);

    view! {
        <div
            id=MODAL_ROOT_ID
            class="modal"
            class:is-open=is_open
            role="dialog"
            aria-modal="true"
            aria-hidden=move || if is_open() { "false" } else { "true" }
        >
            <div class="modal__overlay" on:click=move |_| dismiss(CloseTrigger::Overlay)></div>
            <div class="modal__container">
                <button
                    class="modal__close"
                    type="button"
                    title="Close"
                    aria-label="Close case study"
                    on:click=move |_| dismiss(CloseTrigger::Button)
                >
                    <i data-lucide="x"></i>
                </button>
                <div id=MODAL_BODY_ID class="modal__body">
                    {body}
                </div>
            </div>
        </div>
    }
}

fn case_study_body(study: &'static CaseStudy) -> impl IntoView {
    sections(study).into_iter().map(render_section).collect_view()
}

fn render_section(section: Section) -> AnyView {
    match section {
        Section::Tag(tag) => view! { <span class="modal__tag">{tag}</span> }.into_any(),
        Section::Title(title) => view! { <h2 class="modal__title">{title}</h2> }.into_any(),
        Section::Meta { year, role } => view! {
            <p class="modal__meta">
                <i data-lucide="calendar"></i>
                <span>{meta_line(year, role)}</span>
            </p>
        }
        .into_any(),
        Section::Image { src, alt } => view! {
            <img class="modal__image" src=src alt=alt loading="lazy"/>
        }
        .into_any(),
        Section::Challenge(text) => view! {
            <section class="modal__section">
                <h3>{CHALLENGE_HEADING}</h3>
                <p>{text}</p>
            </section>
        }
        .into_any(),
        Section::Solution { text, features } => view! {
            <section class="modal__section">
                <h3>{SOLUTION_HEADING}</h3>
                <p>{text}</p>
                <ul class="modal__features">
                    {features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class="modal__feature">
                                    <i data-lucide="check-circle"></i>
                                    <div>
                                        <strong>{feature.title}</strong>
                                        <p>{feature.description}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        }
        .into_any(),
        Section::Stack(labels) => view! {
            <section class="modal__section">
                <h3>{STACK_HEADING}</h3>
                <div class="modal__stack">
                    {labels
                        .iter()
                        .map(|label| view! { <span class="chip">{*label}</span> })
                        .collect_view()}
                </div>
            </section>
        }
        .into_any(),
    }
}
