//! Dictionaries and branding the site ships with.
//!
//! Only a prefix of the location and service tables is published; the rest
//! resolve on request but are not pre-rendered.

use crate::catalog::{Catalog, Dictionary};
use crate::types::{ComparisonPair, Contact, SiteSettings};
use std::sync::LazyLock;

pub const PUBLISHED_LOCATIONS: usize = 20;
pub const PUBLISHED_SERVICES: usize = 10;

const LOCATIONS: &[(&str, &str)] = &[
    // Major cities
    ("london", "London"),
    ("manchester", "Manchester"),
    ("birmingham", "Birmingham"),
    ("leeds", "Leeds"),
    ("glasgow", "Glasgow"),
    ("edinburgh", "Edinburgh"),
    ("liverpool", "Liverpool"),
    ("bristol", "Bristol"),
    ("cardiff", "Cardiff"),
    ("belfast", "Belfast"),
    ("newcastle", "Newcastle"),
    ("sheffield", "Sheffield"),
    ("nottingham", "Nottingham"),
    ("leicester", "Leicester"),
    ("coventry", "Coventry"),
    ("bradford", "Bradford"),
    ("hull", "Hull"),
    ("plymouth", "Plymouth"),
    ("southampton", "Southampton"),
    ("portsmouth", "Portsmouth"),
    ("derby", "Derby"),
    ("brighton", "Brighton"),
    ("norwich", "Norwich"),
    ("swansea", "Swansea"),
    ("exeter", "Exeter"),
    ("york", "York"),
    ("bath", "Bath"),
    ("cambridge", "Cambridge"),
    ("oxford", "Oxford"),
    ("canterbury", "Canterbury"),
    // Counties
    ("sussex", "Sussex"),
    ("hampshire", "Hampshire"),
    ("kent", "Kent"),
    ("essex", "Essex"),
    ("surrey", "Surrey"),
    ("berkshire", "Berkshire"),
    ("buckinghamshire", "Buckinghamshire"),
    ("hertfordshire", "Hertfordshire"),
    ("bedfordshire", "Bedfordshire"),
    ("cambridgeshire", "Cambridgeshire"),
    ("norfolk", "Norfolk"),
    ("suffolk", "Suffolk"),
    ("devon", "Devon"),
    ("cornwall", "Cornwall"),
    ("somerset", "Somerset"),
    ("dorset", "Dorset"),
    ("wiltshire", "Wiltshire"),
    ("gloucestershire", "Gloucestershire"),
    ("worcestershire", "Worcestershire"),
    ("warwickshire", "Warwickshire"),
    ("staffordshire", "Staffordshire"),
    ("shropshire", "Shropshire"),
    ("herefordshire", "Herefordshire"),
    ("cheshire", "Cheshire"),
    ("lancashire", "Lancashire"),
    ("yorkshire", "Yorkshire"),
    ("durham", "Durham"),
    ("northumberland", "Northumberland"),
    ("cumbria", "Cumbria"),
    ("lincolnshire", "Lincolnshire"),
    ("nottinghamshire", "Nottinghamshire"),
    ("derbyshire", "Derbyshire"),
    ("leicestershire", "Leicestershire"),
    ("rutland", "Rutland"),
    ("northamptonshire", "Northamptonshire"),
    ("oxfordshire", "Oxfordshire"),
    ("west-midlands", "West Midlands"),
    ("merseyside", "Merseyside"),
    ("greater-manchester", "Greater Manchester"),
    ("tyne-and-wear", "Tyne and Wear"),
    ("west-yorkshire", "West Yorkshire"),
    ("south-yorkshire", "South Yorkshire"),
    ("north-yorkshire", "North Yorkshire"),
    ("east-yorkshire", "East Yorkshire"),
    ("humberside", "Humberside"),
    ("cleveland", "Cleveland"),
    ("county-durham", "County Durham"),
    // Popular areas
    ("cotswolds", "Cotswolds"),
    ("lake-district", "Lake District"),
    ("peak-district", "Peak District"),
    ("new-forest", "New Forest"),
    ("south-downs", "South Downs"),
    ("norfolk-broads", "Norfolk Broads"),
    ("yorkshire-dales", "Yorkshire Dales"),
    ("north-york-moors", "North York Moors"),
    ("exmoor", "Exmoor"),
    ("dartmoor", "Dartmoor"),
];

const SERVICES: &[(&str, &str)] = &[
    ("local-seo", "Local SEO"),
    ("ecommerce-seo", "E-commerce SEO"),
    ("saas-seo", "SaaS SEO"),
    ("lawyer-seo", "Lawyer SEO"),
    ("dentist-seo", "Dentist SEO"),
    ("plumber-seo", "Plumber SEO"),
    ("restaurant-seo", "Restaurant SEO"),
    ("hotel-seo", "Hotel SEO"),
    ("fitness-seo", "Fitness SEO"),
    ("beauty-seo", "Beauty SEO"),
    ("auto-repair-seo", "Auto Repair SEO"),
    ("real-estate-seo", "Real Estate SEO"),
    ("accountant-seo", "Accountant SEO"),
    ("consultant-seo", "Consultant SEO"),
    ("contractor-seo", "Contractor SEO"),
    ("electrician-seo", "Electrician SEO"),
    ("hvac-seo", "HVAC SEO"),
    ("landscaping-seo", "Landscaping SEO"),
    ("cleaning-seo", "Cleaning SEO"),
    ("moving-seo", "Moving SEO"),
    ("insurance-seo", "Insurance SEO"),
    ("financial-seo", "Financial SEO"),
    ("healthcare-seo", "Healthcare SEO"),
    ("education-seo", "Education SEO"),
    ("retail-seo", "Retail SEO"),
    ("manufacturing-seo", "Manufacturing SEO"),
    // Comparison-only
    ("technical-seo", "Technical SEO"),
    ("content-seo", "Content SEO"),
];

const COMPETITORS: &[(&str, &str)] = &[
    ("seo-agency", "SEO Agency"),
    ("seo-company", "SEO Company"),
    ("seo-expert", "SEO Expert"),
    ("seo-consultant", "SEO Consultant"),
    ("seo-specialist", "SEO Specialist"),
    ("digital-marketing", "Digital Marketing"),
    ("online-marketing", "Online Marketing"),
    ("search-marketing", "Search Marketing"),
    ("google-ads", "Google Ads"),
    ("ppc-management", "PPC Management"),
    ("social-media-marketing", "Social Media Marketing"),
    ("content-marketing", "Content Marketing"),
    ("link-building", "Link Building"),
];

const PRICING: &[(&str, &str)] = &[
    ("seo-cost", "SEO Cost"),
    ("seo-price", "SEO Price"),
    ("seo-pricing", "SEO Pricing"),
    ("seo-rates", "SEO Rates"),
    ("seo-fees", "SEO Fees"),
    ("affordable-seo", "Affordable SEO"),
    ("cheap-seo", "Cheap SEO"),
    ("budget-seo", "Budget SEO"),
    ("seo-packages", "SEO Packages"),
    ("seo-plans", "SEO Plans"),
];

const FAQS: &[(&str, &str)] = &[
    ("faq", "FAQ"),
    ("questions", "Questions"),
    ("answers", "Answers"),
    ("help", "Help"),
    ("guide", "Guide"),
    ("tips", "Tips"),
    ("advice", "Advice"),
];

const COMPARISONS: &[(&str, &str)] = &[
    ("local-seo", "technical-seo"),
    ("ecommerce-seo", "saas-seo"),
    ("content-seo", "technical-seo"),
    ("lawyer-seo", "accountant-seo"),
    ("restaurant-seo", "hotel-seo"),
    ("fitness-seo", "beauty-seo"),
    ("auto-repair-seo", "real-estate-seo"),
    ("healthcare-seo", "education-seo"),
];

static BUILTIN_CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    locations: Dictionary::from_static(LOCATIONS, PUBLISHED_LOCATIONS),
    services: Dictionary::from_static(SERVICES, PUBLISHED_SERVICES),
    competitors: Dictionary::from_static(COMPETITORS, COMPETITORS.len()),
    pricing: Dictionary::from_static(PRICING, PRICING.len()),
    faqs: Dictionary::from_static(FAQS, FAQS.len()),
    faq_topics: Dictionary::default(),
    comparisons: COMPARISONS
        .iter()
        .map(|(first, second)| ComparisonPair::new(*first, *second))
        .collect(),
});

impl Catalog {
    /// The process-wide catalog used when `site.toml` supplies no
    /// dictionaries of its own.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }
}

pub fn default_settings() -> SiteSettings {
    SiteSettings {
        name: "AutomateSEO.co".to_string(),
        url: "https://www.automateseo.co".to_string(),
        description: "We build you a 1,000+ page SEO engine that ranks for every 'service + town' search. One-off £1,000 + VAT.".to_string(),
    }
}

pub fn default_contact() -> Contact {
    Contact {
        email: "sales@automateseo.co".to_string(),
        whatsapp: "+447810666662".to_string(),
        booking_url: "https://calendly.com/deankeatingpf/30min".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DictionaryKind, Entry};

    #[test]
    fn test_builtin_tables_are_valid_dictionaries() {
        for (kind, rows) in [
            (DictionaryKind::Location, LOCATIONS),
            (DictionaryKind::Service, SERVICES),
            (DictionaryKind::Competitor, COMPETITORS),
            (DictionaryKind::Pricing, PRICING),
            (DictionaryKind::Faq, FAQS),
        ] {
            let entries = rows.iter().map(|(s, n)| Entry::new(*s, *n)).collect();
            assert!(
                Dictionary::new(kind, entries).is_ok(),
                "builtin {} table is invalid",
                kind
            );
        }
    }

    #[test]
    fn test_builtin_published_counts() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.locations.published().count(), PUBLISHED_LOCATIONS);
        assert_eq!(catalog.services.published().count(), PUBLISHED_SERVICES);
        assert_eq!(catalog.competitors.published().count(), 13);
        assert_eq!(catalog.pricing.published().count(), 10);
        assert_eq!(catalog.faqs.published().count(), 7);
        assert!(catalog.faq_topics.is_empty());
        assert_eq!(catalog.comparisons.len(), 8);
    }

    #[test]
    fn test_builtin_comparisons_reference_known_services() {
        assert!(Catalog::builtin().check_comparisons().is_ok());
    }

    #[test]
    fn test_builtin_published_prefix() {
        let catalog = Catalog::builtin();
        let locations = catalog.locations.published_slugs();
        assert_eq!(locations.first(), Some(&"london"));
        assert_eq!(locations.last(), Some(&"portsmouth"));
        assert!(catalog.locations.get("dartmoor").is_some());

        let services = catalog.services.published_slugs();
        assert_eq!(services.last(), Some(&"beauty-seo"));
        assert_eq!(catalog.services.get("technical-seo"), Some("Technical SEO"));
    }
}
