//! Single-page portfolio: hero, project grid and the case-study modal.

use leptos::prelude::*;

use crate::components::case_study_modal::CaseStudyModal;
use crate::components::project_card::ProjectCard;
use crate::content::case_studies::CaseStudyRegistry;
use crate::state::modal::ModalState;

#[component]
pub fn HomePage() -> impl IntoView {
    // Providing the modal state is what arms the project card triggers.
    let modal = RwSignal::new(ModalState::default());
    provide_context(modal);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(crate::util::icons::refresh);
    }

    let cards = CaseStudyRegistry::builtin()
        .iter()
        .map(|study| view! { <ProjectCard study/> })
        .collect_view();

    view! {
        <header class="navbar">
            <a class="navbar__logo" href="/">"Portfolio"</a>
            <nav class="nav-links">
                <a href="#projects">"Projects"</a>
                <a href="#contact">"Contact"</a>
            </nav>
        </header>
        <main>
            <section class="section hero" id="home">
                <div class="hero-content">
                    <p class="hero__eyebrow">"UI/UX Designer & Front-end Developer"</p>
                    <h1>"Designing calm, useful products for everyday people."</h1>
                    <a class="btn" href="#projects">
                        <span>"See my work"</span>
                        <i data-lucide="arrow-down"></i>
                    </a>
                </div>
            </section>
            <section class="section projects" id="projects">
                <h2 class="section__title">"Selected Projects"</h2>
                <div class="projects__grid">{cards}</div>
            </section>
            <section class="section contact" id="contact">
                <h2 class="section__title">"Let's work together"</h2>
                <a class="btn" href="mailto:hello@example.com">
                    <i data-lucide="mail"></i>
                    <span>"hello@example.com"</span>
                </a>
            </section>
        </main>
        <footer class="footer">
            <p>"Built with Rust and Leptos."</p>
        </footer>
        <CaseStudyModal state=modal/>
    }
}
