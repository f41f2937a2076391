// Portfolio content - sections, projects, certifications, profile
use chrono::NaiveDate;

/// One navigation destination: a named, vertically stacked region of the
/// page. Declaration order is document order.
#[derive(Clone, Copy, Debug)]
pub struct SectionDef {
    pub id: &'static str,
    pub title: &'static str,
}

pub const SECTIONS: &[SectionDef] = &[
    SectionDef { id: "home", title: "Home" },
    SectionDef { id: "about", title: "About" },
    SectionDef { id: "skills", title: "Skills" },
    SectionDef { id: "projects", title: "Projects" },
    SectionDef { id: "certifications", title: "Certifications" },
    SectionDef { id: "contact", title: "Contact" },
];

#[derive(Clone, Copy, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub about: &'static [&'static str],
    pub github: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Adrian Mora",
    tagline: "Systems-minded software engineer building fast, reliable tools",
    about: &[
        "I design and ship backend services and developer tooling, with a \
         soft spot for performance work and clean failure modes.",
        "Away from the keyboard I climb, tinker with home automation, and \
         mentor first-time open source contributors.",
    ],
    github: "https://github.com/adrianmora",
    linkedin: "https://www.linkedin.com/in/adrian-mora-dev",
    email: "hello@adrianmora.dev",
};

#[derive(Clone, Copy, Debug)]
pub struct SkillGroup {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        name: "Languages",
        items: &["Rust", "Go", "TypeScript", "Python", "SQL"],
    },
    SkillGroup {
        name: "Backend",
        items: &["PostgreSQL", "Redis", "gRPC", "Kafka", "REST APIs"],
    },
    SkillGroup {
        name: "Infrastructure",
        items: &["Docker", "Kubernetes", "Terraform", "AWS", "CI/CD"],
    },
    SkillGroup {
        name: "Practices",
        items: &["Observability", "Load testing", "Code review", "Incident response"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub category: &'static str,
    pub tech: &'static [&'static str],
    pub url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "ledgerd",
        summary: "Append-only event store with snapshot compaction and a \
                  simple replication protocol.",
        category: "Backend",
        tech: &["Rust", "PostgreSQL", "gRPC"],
        url: "https://github.com/adrianmora/ledgerd",
    },
    Project {
        name: "flightdeck",
        summary: "Self-hosted status dashboard aggregating uptime probes, \
                  deploy events, and alert timelines.",
        category: "Web",
        tech: &["TypeScript", "React", "Go"],
        url: "https://github.com/adrianmora/flightdeck",
    },
    Project {
        name: "crate-scout",
        summary: "CLI that audits a dependency tree for unmaintained crates \
                  and suggests maintained alternatives.",
        category: "Tooling",
        tech: &["Rust", "clap"],
        url: "https://github.com/adrianmora/crate-scout",
    },
    Project {
        name: "queuebert",
        summary: "Work queue with per-tenant fairness and dead-letter \
                  replay, built on Redis streams.",
        category: "Backend",
        tech: &["Go", "Redis"],
        url: "https://github.com/adrianmora/queuebert",
    },
    Project {
        name: "shelfware",
        summary: "Personal library tracker with ISBN lookup and reading \
                  stats, installable as a PWA.",
        category: "Web",
        tech: &["TypeScript", "SvelteKit"],
        url: "https://github.com/adrianmora/shelfware",
    },
    Project {
        name: "tfsort",
        summary: "Formatter that canonicalizes Terraform module blocks so \
                  diffs stay reviewable.",
        category: "Tooling",
        tech: &["Go", "Terraform"],
        url: "https://github.com/adrianmora/tfsort",
    },
];

/// Distinct project categories, in first-appearance order.
pub fn project_categories() -> Vec<&'static str> {
    let mut cats = Vec::new();
    for p in PROJECTS {
        if !cats.contains(&p.category) {
            cats.push(p.category);
        }
    }
    cats
}

#[derive(Clone, Copy, Debug)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub issued: (i32, u32, u32),
    pub credential_url: &'static str,
}

impl Certification {
    pub fn issued_date(&self) -> Option<NaiveDate> {
        let (y, m, d) = self.issued;
        NaiveDate::from_ymd_opt(y, m, d)
    }
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "AWS Certified Solutions Architect - Associate",
        issuer: "Amazon Web Services",
        issued: (2024, 3, 14),
        credential_url: "https://www.credly.com/badges/aws-saa-adrian-mora",
    },
    Certification {
        name: "CKA: Certified Kubernetes Administrator",
        issuer: "Cloud Native Computing Foundation",
        issued: (2023, 9, 2),
        credential_url: "https://www.credly.com/badges/cka-adrian-mora",
    },
    Certification {
        name: "HashiCorp Certified: Terraform Associate",
        issuer: "HashiCorp",
        issued: (2023, 1, 20),
        credential_url: "https://www.credly.com/badges/terraform-adrian-mora",
    },
    Certification {
        name: "PostgreSQL 15 Associate Certification",
        issuer: "EDB",
        issued: (2022, 6, 8),
        credential_url: "https://www.credly.com/badges/postgres-adrian-mora",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            for b in &SECTIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_project_categories_deduplicated_in_order() {
        let cats = project_categories();
        assert_eq!(cats, vec!["Backend", "Web", "Tooling"]);
    }

    #[test]
    fn test_certification_dates_valid() {
        for cert in CERTIFICATIONS {
            assert!(cert.issued_date().is_some(), "bad date for {}", cert.name);
        }
    }
}
