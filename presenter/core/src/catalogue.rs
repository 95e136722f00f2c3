//! Skill Catalogue
//!
//! Ordered (category, skills) pairs. Order is display order.

/// Glyph placed between skills on a box's item line
pub const SKILL_SEPARATOR: &str = " • ";

/// One category and its skills, shown as a single box
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

impl CatalogueEntry {
    /// Skills joined by `separator`, in display order
    pub fn joined(&self, separator: &str) -> String {
        self.skills.join(separator)
    }
}

/// The full catalogue
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillCatalogue {
    entries: Vec<CatalogueEntry>,
}

impl SkillCatalogue {
    pub fn new(entries: impl IntoIterator<Item = CatalogueEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The void arsenal
    pub fn arsenal() -> Self {
        Self::new([
            CatalogueEntry {
                category: "LANGUAGES",
                skills: &["JavaScript", "TypeScript", "CPP", "Python", "Solidity"],
            },
            CatalogueEntry {
                category: "FRONTEND",
                skills: &["React", "Next.js", "TailwindCSS"],
            },
            CatalogueEntry {
                category: "BACKEND",
                skills: &["Node.js", "Express"],
            },
            CatalogueEntry {
                category: "DATABASES",
                skills: &["PostgreSQL", "MySQL", "MongoDB", "Redis"],
            },
            CatalogueEntry {
                category: "DEVOPS",
                skills: &["Git", "Vercel", "Kafka"],
            },
        ])
    }

    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_arsenal_order() {
        let categories: Vec<_> = SkillCatalogue::arsenal()
            .entries()
            .iter()
            .map(|e| e.category)
            .collect();
        assert_eq!(
            categories,
            vec!["LANGUAGES", "FRONTEND", "BACKEND", "DATABASES", "DEVOPS"]
        );
    }

    #[test]
    fn test_joined_keeps_item_order() {
        let catalogue = SkillCatalogue::arsenal();
        assert_eq!(
            catalogue.entries()[0].joined(SKILL_SEPARATOR),
            "JavaScript • TypeScript • CPP • Python • Solidity"
        );
        assert_eq!(catalogue.entries()[2].joined("/"), "Node.js/Express");
    }
}
