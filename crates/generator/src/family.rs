use crate::templates::{self, PageTemplate};
use seo_site_core::RouteParams;
use seo_site_core::catalog::DictionaryKind;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A class of generated pages sharing a path shape and a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteFamily {
    /// `/seo-services/{location}`
    Location,
    /// `/seo-services/{service}/{location}`
    ServiceLocation,
    /// `/compare/{a}-vs-{b}/{location}`
    Comparison,
    /// `/competitors/{competitor}/{location}`
    Competitor,
    /// `/pricing/{pricing}/{location}`
    Pricing,
    /// `/faq/{faq}/{service}/{location}`
    FaqServiceLocation,
    /// `/faq/{topic}/{location}`
    FaqLocation,
}

/// Where one route segment takes its values from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Dictionary(DictionaryKind),
    /// A curated service pair, rendered as "a-vs-b"
    Comparison,
    /// FAQ topic: enumerates published `faq_topic` entries, but also
    /// resolves any FAQ keyword so `/faq/guide/london` is served on request
    Topic,
}

impl Dimension {
    /// Template slots filled by this dimension
    pub fn slots(self) -> &'static [&'static str] {
        match self {
            Dimension::Dictionary(DictionaryKind::Location) => &["location"],
            Dimension::Dictionary(DictionaryKind::Service) => &["service"],
            Dimension::Dictionary(DictionaryKind::Competitor) => &["competitor"],
            Dimension::Dictionary(DictionaryKind::Pricing) => &["pricing"],
            Dimension::Dictionary(DictionaryKind::Faq) => &["faq"],
            Dimension::Dictionary(DictionaryKind::FaqTopic) | Dimension::Topic => &["topic"],
            Dimension::Comparison => &["first", "second"],
        }
    }
}

/// Everything that distinguishes one route family from another
#[derive(Debug)]
pub struct FamilyDescriptor {
    pub family: RouteFamily,
    pub prefix: &'static str,
    pub dimensions: &'static [Dimension],
    pub template: &'static PageTemplate,
    /// Head metadata used when a path under this family does not resolve
    pub fallback_title: &'static str,
    pub fallback_description: &'static str,
}

const LOCATION: Dimension = Dimension::Dictionary(DictionaryKind::Location);
const SERVICE: Dimension = Dimension::Dictionary(DictionaryKind::Service);

static FAMILIES: [FamilyDescriptor; 7] = [
    FamilyDescriptor {
        family: RouteFamily::Location,
        prefix: "/seo-services",
        dimensions: &[LOCATION],
        template: &templates::LOCATION,
        fallback_title: "SEO Services",
        fallback_description: "Professional SEO services across the UK.",
    },
    FamilyDescriptor {
        family: RouteFamily::ServiceLocation,
        prefix: "/seo-services",
        dimensions: &[SERVICE, LOCATION],
        template: &templates::SERVICE_LOCATION,
        fallback_title: "SEO Services",
        fallback_description: "Professional SEO services across the UK.",
    },
    FamilyDescriptor {
        family: RouteFamily::Comparison,
        prefix: "/compare",
        dimensions: &[Dimension::Comparison, LOCATION],
        template: &templates::COMPARISON,
        fallback_title: "SEO Service Comparison",
        fallback_description: "Compare different SEO services for your business.",
    },
    FamilyDescriptor {
        family: RouteFamily::Competitor,
        prefix: "/competitors",
        dimensions: &[Dimension::Dictionary(DictionaryKind::Competitor), LOCATION],
        template: &templates::COMPETITOR,
        fallback_title: "SEO Services",
        fallback_description: "Professional SEO services for your business.",
    },
    FamilyDescriptor {
        family: RouteFamily::Pricing,
        prefix: "/pricing",
        dimensions: &[Dimension::Dictionary(DictionaryKind::Pricing), LOCATION],
        template: &templates::PRICING,
        fallback_title: "SEO Pricing",
        fallback_description: "Transparent SEO pricing for your business.",
    },
    FamilyDescriptor {
        family: RouteFamily::FaqServiceLocation,
        prefix: "/faq",
        dimensions: &[
            Dimension::Dictionary(DictionaryKind::Faq),
            SERVICE,
            LOCATION,
        ],
        template: &templates::FAQ_SERVICE_LOCATION,
        fallback_title: "SEO FAQ",
        fallback_description: "Frequently asked questions about SEO services.",
    },
    FamilyDescriptor {
        family: RouteFamily::FaqLocation,
        prefix: "/faq",
        dimensions: &[Dimension::Topic, LOCATION],
        template: &templates::FAQ_LOCATION,
        fallback_title: "SEO FAQ",
        fallback_description: "Frequently asked questions about SEO services.",
    },
];

impl RouteFamily {
    pub const ALL: [RouteFamily; 7] = [
        RouteFamily::Location,
        RouteFamily::ServiceLocation,
        RouteFamily::Comparison,
        RouteFamily::Competitor,
        RouteFamily::Pricing,
        RouteFamily::FaqServiceLocation,
        RouteFamily::FaqLocation,
    ];

    pub fn descriptor(self) -> &'static FamilyDescriptor {
        &FAMILIES[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            RouteFamily::Location => "location",
            RouteFamily::ServiceLocation => "service-location",
            RouteFamily::Comparison => "comparison",
            RouteFamily::Competitor => "competitor",
            RouteFamily::Pricing => "pricing",
            RouteFamily::FaqServiceLocation => "faq-service-location",
            RouteFamily::FaqLocation => "faq-location",
        }
    }

    pub fn prefix(self) -> &'static str {
        self.descriptor().prefix
    }

    /// Number of slugs in a route of this family
    pub fn arity(self) -> usize {
        self.descriptor().dimensions.len()
    }

    pub fn is_faq(self) -> bool {
        matches!(
            self,
            RouteFamily::FaqServiceLocation | RouteFamily::FaqLocation
        )
    }

    /// Site-relative URL path for `params`
    pub fn path(self, params: &RouteParams) -> String {
        format!("{}/{}", self.prefix(), params.to_path_segments())
    }
}

impl fmt::Display for RouteFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RouteFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteFamily::ALL
            .into_iter()
            .find(|family| family.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = RouteFamily::ALL.iter().map(|f| f.name()).collect();
                format!(
                    "unknown route family '{}' (expected one of: {})",
                    s,
                    names.join(", ")
                )
            })
    }
}

/// Match a request path to a route family by prefix and segment count.
///
/// A leading and a single trailing slash are accepted; an empty segment
/// anywhere else (`/seo-services//london`) matches nothing, so every page has
/// exactly one path. Matching is structural only: the slugs are not checked against any
/// dictionary. When the prefix is known but no family of that prefix has
/// the right arity, the first family of the prefix is returned and the
/// resolver rejects the tuple.
pub fn match_path(path: &str) -> Option<(RouteFamily, RouteParams)> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    let mut segments = trimmed.split('/');
    let head = segments.next().filter(|s| !s.is_empty())?;
    let rest: Vec<String> = segments.map(str::to_string).collect();
    if rest.iter().any(String::is_empty) {
        return None;
    }

    let mut candidates = FAMILIES
        .iter()
        .filter(|d| d.prefix.strip_prefix('/') == Some(head))
        .peekable();
    let first = candidates.peek().map(|d| d.family)?;
    let family = candidates
        .find(|d| d.dimensions.len() == rest.len())
        .map(|d| d.family)
        .unwrap_or(first);

    Some((family, RouteParams::from(rest)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_table_matches_enum_order() {
        for family in RouteFamily::ALL {
            assert_eq!(family.descriptor().family, family);
        }
    }

    #[test]
    fn test_family_names_round_trip() {
        for family in RouteFamily::ALL {
            assert_eq!(family.name().parse::<RouteFamily>(), Ok(family));
        }
        let err = "bogus".parse::<RouteFamily>().unwrap_err();
        assert!(err.contains("service-location"));
    }

    #[test]
    fn test_family_arity() {
        assert_eq!(RouteFamily::Location.arity(), 1);
        assert_eq!(RouteFamily::ServiceLocation.arity(), 2);
        assert_eq!(RouteFamily::Comparison.arity(), 2);
        assert_eq!(RouteFamily::FaqServiceLocation.arity(), 3);
        assert_eq!(RouteFamily::FaqLocation.arity(), 2);
    }

    #[test]
    fn test_family_path() {
        let params = RouteParams::new(["local-seo", "london"]);
        assert_eq!(
            RouteFamily::ServiceLocation.path(&params),
            "/seo-services/local-seo/london"
        );
    }

    #[test]
    fn test_match_path_by_arity() {
        let (family, params) = match_path("/seo-services/london").unwrap();
        assert_eq!(family, RouteFamily::Location);
        assert_eq!(params, RouteParams::new(["london"]));

        let (family, params) = match_path("/seo-services/local-seo/london/").unwrap();
        assert_eq!(family, RouteFamily::ServiceLocation);
        assert_eq!(params, RouteParams::new(["local-seo", "london"]));

        let (family, _) = match_path("/faq/faq/local-seo/london").unwrap();
        assert_eq!(family, RouteFamily::FaqServiceLocation);

        let (family, _) = match_path("/faq/seo-cost/london").unwrap();
        assert_eq!(family, RouteFamily::FaqLocation);

        let (family, params) = match_path("/compare/local-seo-vs-technical-seo/london").unwrap();
        assert_eq!(family, RouteFamily::Comparison);
        assert_eq!(params.get(0), Some("local-seo-vs-technical-seo"));
    }

    #[test]
    fn test_match_path_arity_mismatch_keeps_prefix_family() {
        let (family, params) = match_path("/pricing/seo-cost/london/extra").unwrap();
        assert_eq!(family, RouteFamily::Pricing);
        assert_eq!(params.len(), 3);

        let (family, params) = match_path("/seo-services").unwrap();
        assert_eq!(family, RouteFamily::Location);
        assert!(params.is_empty());
    }

    #[test]
    fn test_match_path_unknown_prefix() {
        assert!(match_path("/").is_none());
        assert!(match_path("").is_none());
        assert!(match_path("/blog/london").is_none());
    }

    #[test]
    fn test_match_path_rejects_empty_segments() {
        assert!(match_path("/seo-services//london").is_none());
        assert!(match_path("//seo-services/london").is_none());
        assert!(match_path("/seo-services/london//").is_none());
        assert!(match_path("/faq/guide/london/").is_some());
    }
}
