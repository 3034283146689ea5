use leptos::prelude::*;

use super::*;

fn sayurku() -> &'static CaseStudy {
    CaseStudyRegistry::builtin().lookup("sayurku").unwrap()
}

#[test]
fn card_without_modal_context_still_emits_trigger_markup() {
    let study = sayurku();
    let html = Owner::new().with(|| view! { <ProjectCard study/> }.to_html());
    assert!(html.contains(&format!("{PROJECT_ATTRIBUTE}=\"sayurku\"")));
    assert!(html.contains("View Case Study"));
    assert!(html.contains("SayurKu"));
}

#[test]
fn card_with_modal_context_emits_same_trigger_attribute() {
    let study = sayurku();
    let html = Owner::new().with(|| {
        provide_context(RwSignal::new(ModalState::default()));
        view! { <ProjectCard study/> }.to_html()
    });
    assert!(html.contains(&format!("{PROJECT_ATTRIBUTE}=\"sayurku\"")));
}

#[test]
fn card_renders_summary_and_image() {
    let study = sayurku();
    let html = Owner::new().with(|| view! { <ProjectCard study/> }.to_html());
    assert!(html.contains(study.summary));
    assert!(html.contains(&format!("src=\"{}\"", study.image)));
}
