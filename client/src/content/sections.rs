//! Display order of a rendered case study.
//!
//! The modal body is always laid out as tag, title, meta line, image,
//! challenge, solution (with features) and tech stack. Views iterate
//! [`sections`] instead of hard-coding that order.

use super::case_studies::{CaseStudy, Feature};

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

pub const CHALLENGE_HEADING: &str = "The Challenge";
pub const SOLUTION_HEADING: &str = "The Solution";
pub const STACK_HEADING: &str = "Tech Stack";

/// One block of the modal body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Tag(&'static str),
    Title(&'static str),
    Meta { year: &'static str, role: &'static str },
    Image { src: &'static str, alt: &'static str },
    Challenge(&'static str),
    Solution { text: &'static str, features: &'static [Feature] },
    Stack(&'static [&'static str]),
}

/// Fieldless discriminant of [`Section`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    Tag,
    Title,
    Meta,
    Image,
    Challenge,
    Solution,
    Stack,
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Tag(_) => SectionKind::Tag,
            Self::Title(_) => SectionKind::Title,
            Self::Meta { .. } => SectionKind::Meta,
            Self::Image { .. } => SectionKind::Image,
            Self::Challenge(_) => SectionKind::Challenge,
            Self::Solution { .. } => SectionKind::Solution,
            Self::Stack(_) => SectionKind::Stack,
        }
    }
}

/// Lay out `study` in display order.
pub fn sections(study: &'static CaseStudy) -> [Section; 7] {
    [
        Section::Tag(study.tag),
        Section::Title(study.title),
        Section::Meta { year: study.meta.year, role: study.meta.role },
        Section::Image { src: study.image, alt: study.title },
        Section::Challenge(study.challenge),
        Section::Solution { text: study.solution, features: study.features },
        Section::Stack(study.stack),
    ]
}

/// Meta line text, e.g. `2024 • Lead UI/UX Designer`.
pub fn meta_line(year: &str, role: &str) -> String {
    format!("{year} • {role}")
}
