use super::*;

// =============================================================
// lookup
// =============================================================

#[test]
fn lookup_resolves_every_builtin_id() {
    let registry = CaseStudyRegistry::builtin();
    for id in ["sayurku", "kopisenja", "cryptoapp"] {
        let study = registry.lookup(id).expect("builtin id should resolve");
        assert_eq!(study.id, id);
    }
}

#[test]
fn lookup_returns_expected_titles() {
    let registry = CaseStudyRegistry::builtin();
    assert_eq!(registry.lookup("sayurku").map(|s| s.title), Some("SayurKu"));
    assert_eq!(registry.lookup("kopisenja").map(|s| s.title), Some("Kopi Senja"));
    assert_eq!(registry.lookup("cryptoapp").map(|s| s.title), Some("Crypto Tracker"));
}

#[test]
fn lookup_unknown_id_is_none() {
    let registry = CaseStudyRegistry::builtin();
    assert!(registry.lookup("does-not-exist").is_none());
    assert!(registry.lookup("").is_none());
}

#[test]
fn lookup_is_verbatim() {
    let registry = CaseStudyRegistry::builtin();
    assert!(registry.lookup("SayurKu").is_none());
    assert!(registry.lookup(" sayurku").is_none());
    assert!(registry.lookup("sayurku ").is_none());
}

#[test]
fn lookup_on_custom_registry_only_sees_its_own_table() {
    const ONLY: &[CaseStudy] = &[CaseStudy {
        id: "solo",
        title: "Solo",
        tag: "Case Study",
        meta: CaseStudyMeta { year: "2020", role: "Everything" },
        image: "/images/solo.png",
        summary: "Solo project.",
        challenge: "c",
        solution: "s",
        features: &[Feature { title: "f", description: "d" }],
        stack: &["Rust"],
    }];
    let registry = CaseStudyRegistry::new(ONLY);
    assert_eq!(registry.iter().count(), 1);
    assert!(registry.lookup("solo").is_some());
    assert!(registry.lookup("sayurku").is_none());
}

// =============================================================
// table invariants
// =============================================================

#[test]
fn builtin_ids_are_unique_and_non_empty() {
    let ids: Vec<&str> = CaseStudyRegistry::builtin().ids().collect();
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b, "duplicate case study id {a}");
        }
    }
}

#[test]
fn builtin_records_have_features_and_stack() {
    for study in CaseStudyRegistry::builtin().iter() {
        assert!(!study.features.is_empty(), "{} has no features", study.id);
        assert!(!study.stack.is_empty(), "{} has no stack labels", study.id);
        assert!(!study.meta.year.is_empty());
        assert!(!study.meta.role.is_empty());
        assert!(study.image.starts_with("/images/"));
    }
}

#[test]
fn builtin_images_exist_in_public_assets() {
    let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../public");
    for study in CaseStudyRegistry::builtin().iter() {
        let path = public.join(study.image.trim_start_matches('/'));
        assert!(path.is_file(), "{} image missing at {}", study.id, path.display());
    }
}

#[test]
fn iter_preserves_table_order() {
    let ids: Vec<&str> = CaseStudyRegistry::builtin().ids().collect();
    assert_eq!(ids, vec!["sayurku", "kopisenja", "cryptoapp"]);
}
