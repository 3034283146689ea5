//! Static case-study table keyed by project identifier.
//!
//! DESIGN
//! ======
//! The table is a compile-time `'static` slice wrapped by [`CaseStudyRegistry`].
//! It is never mutated, so every lookup hands out `&'static` records that the
//! modal state can hold without cloning.

#[cfg(test)]
#[path = "case_studies_test.rs"]
mod case_studies_test;

/// Display metadata shown under the case-study title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudyMeta {
    pub year: &'static str,
    pub role: &'static str,
}

/// One highlighted feature in the solution section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// Full content for one project case study.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub id: &'static str,
    pub title: &'static str,
    pub tag: &'static str,
    pub meta: CaseStudyMeta,
    pub image: &'static str,
    /// One-line teaser shown on the project card.
    pub summary: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    /// Display order.
    pub features: &'static [Feature],
    /// Display order.
    pub stack: &'static [&'static str],
}

/// Read-only mapping from project identifier to [`CaseStudy`].
#[derive(Clone, Copy, Debug)]
pub struct CaseStudyRegistry {
    studies: &'static [CaseStudy],
}

impl CaseStudyRegistry {
    pub const fn new(studies: &'static [CaseStudy]) -> Self {
        Self { studies }
    }

    /// The table shipped with the site.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Resolve `id` verbatim. Unknown ids are an expected outcome, not an error.
    pub fn lookup(&self, id: &str) -> Option<&'static CaseStudy> {
        self.studies.iter().find(|study| study.id == id)
    }

    /// Records in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static CaseStudy> + use<> {
        self.studies.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.studies.iter().map(|study| study.id)
    }
}

static BUILTIN: CaseStudyRegistry = CaseStudyRegistry::new(CASE_STUDIES);

const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: "sayurku",
        title: "SayurKu",
        tag: "Case Study",
        meta: CaseStudyMeta { year: "2024", role: "Lead UI/UX Designer" },
        image: "/images/sayurku-mockup.svg",
        summary: "Fresh-produce ordering app connecting local farmers with urban households.",
        challenge: "Local farmers had no direct channel to urban buyers, and existing grocery apps \
                    buried fresh produce behind long category trees. First-time users abandoned \
                    their carts before checkout because delivery slots and prices were unclear.",
        solution: "We rebuilt the ordering flow around the weekly harvest: a single scrollable \
                   catalogue, transparent per-farm pricing and delivery slots chosen up front. \
                   Usability sessions with both farmers and households shaped every screen.",
        features: &[
            Feature {
                title: "Harvest Calendar",
                description: "Shows what each partner farm will pick this week so buyers can plan ahead.",
            },
            Feature {
                title: "One-Page Checkout",
                description: "Delivery slot, address and payment on a single screen with no surprise fees.",
            },
            Feature {
                title: "Farmer Profiles",
                description: "Short stories and photos that let buyers see who grows their food.",
            },
        ],
        stack: &["Figma", "Flutter", "Firebase", "Maze"],
    },
    CaseStudy {
        id: "kopisenja",
        title: "Kopi Senja",
        tag: "Case Study",
        meta: CaseStudyMeta { year: "2023", role: "Product Designer & Front-end Developer" },
        image: "/images/kopisenja-mockup.svg",
        summary: "Brand refresh and pre-order website for a neighbourhood coffee shop.",
        challenge: "Kopi Senja relied on chat messages for pre-orders, which meant missed orders \
                    during the afternoon rush and no way to showcase seasonal blends online.",
        solution: "A lightweight website with a browsable menu and a pickup pre-order form that \
                   lands in a shared queue for the baristas, wrapped in a warm sunset visual \
                   identity that matches the shop.",
        features: &[
            Feature {
                title: "Pickup Pre-orders",
                description: "Customers choose a pickup time and pay on arrival, reducing queue times.",
            },
            Feature {
                title: "Seasonal Menu",
                description: "Staff update blends and pastries from a simple admin page.",
            },
            Feature {
                title: "Loyalty Stamps",
                description: "A digital stamp card that replaces the easily lost paper version.",
            },
        ],
        stack: &["Figma", "HTML", "Tailwind CSS", "JavaScript"],
    },
    CaseStudy {
        id: "cryptoapp",
        title: "Crypto Tracker",
        tag: "Case Study",
        meta: CaseStudyMeta { year: "2023", role: "UI Designer" },
        image: "/images/cryptoapp-mockup.svg",
        summary: "Portfolio dashboard that makes volatile crypto holdings easy to read at a glance.",
        challenge: "Beginner investors found existing trackers overwhelming: dense candlestick \
                    charts, jargon-heavy labels and alerts that fired too often to be useful.",
        solution: "A calm dashboard centred on total portfolio value, with progressive disclosure \
                   for advanced charts and alert rules written in plain language.",
        features: &[
            Feature {
                title: "Portfolio Overview",
                description: "One number, one trend line and a per-asset breakdown on the home screen.",
            },
            Feature {
                title: "Plain-Language Alerts",
                description: "Rules such as \"tell me if Bitcoin drops 10% today\" instead of raw thresholds.",
            },
            Feature {
                title: "Dark-First Design",
                description: "High-contrast palette tuned for late-night market checks.",
            },
        ],
        stack: &["Figma", "React", "Chart.js", "CoinGecko API"],
    },
];
