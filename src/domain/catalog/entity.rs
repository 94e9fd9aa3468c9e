use serde::{Deserialize, Serialize};

/// A target language the translator can produce.
/// The catalog is fixed at build time; selection is by ISO-639-1 code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// ISO-639-1 code, unique within the catalog
    pub code: String,

    /// Name shown in the selector
    pub name: String,
}

/// A subject domain that steers terminology in the translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Catalog identifier, unique within the catalog
    pub id: String,

    /// Name shown in the selector
    pub name: String,
}

/// Supported target languages, in display order
const LANGUAGES: &[(&str, &str)] = &[
    ("hi", "Hindi"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("kn", "Kannada"),
    ("bn", "Bengali"),
];

/// Supported subject domains, in display order
const DOMAINS: &[(&str, &str)] = &[
    ("academic", "Academic"),
    ("medical", "Healthcare"),
    ("legal", "Legal"),
    ("government", "Government"),
];

/// The full language catalog, for rendering the selector.
pub fn languages() -> Vec<Language> {
    LANGUAGES
        .iter()
        .map(|(code, name)| Language {
            code: (*code).to_string(),
            name: (*name).to_string(),
        })
        .collect()
}

/// The full domain catalog, for rendering the selector.
pub fn domains() -> Vec<Domain> {
    DOMAINS
        .iter()
        .map(|(id, name)| Domain {
            id: (*id).to_string(),
            name: (*name).to_string(),
        })
        .collect()
}

/// Look up a language by its catalog code.
pub fn find_language(code: &str) -> Option<Language> {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(c, name)| Language {
            code: (*c).to_string(),
            name: (*name).to_string(),
        })
}

/// Look up a domain by its catalog id.
pub fn find_domain(id: &str) -> Option<Domain> {
    DOMAINS.iter().find(|(i, _)| *i == id).map(|(i, name)| Domain {
        id: (*i).to_string(),
        name: (*name).to_string(),
    })
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_catalog_members() {
        let all = languages();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].code, "hi");
        assert_eq!(all[0].name, "Hindi");
    }

    #[test]
    fn test_domain_catalog_members() {
        let all = domains();
        assert_eq!(all.len(), 4);
        // "medical" keeps its historical id but displays as Healthcare
        let medical = all.iter().find(|d| d.id == "medical").unwrap();
        assert_eq!(medical.name, "Healthcare");
    }

    #[test]
    fn test_find_language() {
        let tamil = find_language("ta").unwrap();
        assert_eq!(tamil.name, "Tamil");

        assert!(find_language("xx").is_none());
        assert!(find_language("").is_none());
    }

    #[test]
    fn test_find_domain() {
        let legal = find_domain("legal").unwrap();
        assert_eq!(legal.name, "Legal");

        assert!(find_domain("finance").is_none());
    }
}
