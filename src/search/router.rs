//! Domain auto-detection by keyword containment.

use tracing::trace;

/// Keyword list for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainKeywords {
    pub domain: String,
    pub keywords: Vec<String>,
}

/// Picks the table a free-text query most plausibly targets.
///
/// Keywords match as plain substrings of the lowercased query, so
/// multi-word keywords ("stable diffusion") must appear contiguously and
/// short keywords can match inside longer words. The entry order is the
/// tie-break priority: on equal counts the earlier domain wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRouter {
    priority: Vec<DomainKeywords>,
    fallback: String,
}

impl DomainRouter {
    pub fn new(priority: Vec<DomainKeywords>, fallback: impl Into<String>) -> Self {
        Self {
            priority,
            fallback: fallback.into(),
        }
    }

    /// Build from `(domain, keywords)` literals.
    pub fn from_static(priority: &[(&str, &[&str])], fallback: &str) -> Self {
        let priority = priority
            .iter()
            .map(|(domain, keywords)| DomainKeywords {
                domain: (*domain).to_string(),
                keywords: keywords.iter().map(|kw| kw.to_lowercase()).collect(),
            })
            .collect();
        Self::new(priority, fallback)
    }

    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn entries(&self) -> &[DomainKeywords] {
        &self.priority
    }

    /// Keywords registered for `domain`, if it takes part in routing.
    #[must_use]
    pub fn keywords_for(&self, domain: &str) -> Option<&[String]> {
        self.priority
            .iter()
            .find(|entry| entry.domain == domain)
            .map(|entry| entry.keywords.as_slice())
    }

    /// Keyword hit count per domain, in priority order.
    pub fn scores(&self, query: &str) -> Vec<(&str, usize)> {
        let lowered = query.to_lowercase();
        self.priority
            .iter()
            .map(|entry| {
                let hits = entry
                    .keywords
                    .iter()
                    .filter(|kw| lowered.contains(kw.as_str()))
                    .count();
                (entry.domain.as_str(), hits)
            })
            .collect()
    }

    pub fn detect(&self, query: &str) -> &str {
        let mut best: Option<(&str, usize)> = None;
        for (domain, hits) in self.scores(query) {
            // Strictly greater: the first domain keeps a tie.
            if best.is_none_or(|(_, top)| hits > top) {
                best = Some((domain, hits));
            }
        }

        let detected = match best {
            Some((domain, hits)) if hits > 0 => domain,
            _ => self.fallback.as_str(),
        };
        trace!(query, detected, "domain detected");
        detected
    }
}
