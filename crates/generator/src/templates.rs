//! Fixed page templates, one per route family.
//!
//! Placeholders are `{slot}` for the display name as written and
//! `{slot:lower}` for running prose. Headings keep title case.

#[derive(Debug)]
pub struct PageTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub heading: &'static str,
    pub intro: &'static str,
    pub keywords: &'static [&'static str],
    pub sections: &'static [SectionTemplate],
    /// Prefilled WhatsApp message for the call-to-action
    pub cta_message: &'static str,
}

#[derive(Debug)]
pub struct SectionTemplate {
    pub heading: &'static str,
    pub body: &'static str,
}

const ONE_OFF_PAYMENT: SectionTemplate = SectionTemplate {
    heading: "One-off Payment",
    body: "£1,000 + VAT one-time payment. You own the site and rankings forever. No monthly fees or ongoing costs.",
};

pub static LOCATION: PageTemplate = PageTemplate {
    title: "Best SEO Services in {location}",
    description: "Professional SEO services in {location}. We help businesses in {location} rank higher on Google with our proven programmatic SEO approach.",
    heading: "Best SEO Services in {location}",
    intro: "We help businesses in {location} rank higher on Google with our proven programmatic SEO approach. Get found by your customers when they search for your services.",
    keywords: &[
        "seo services {location:lower}",
        "best seo services {location:lower}",
        "seo company {location:lower}",
        "local seo {location:lower}",
        "seo agency {location:lower}",
        "digital marketing {location:lower}",
        "google ranking {location:lower}",
        "search engine optimization {location:lower}",
    ],
    sections: &[
        SectionTemplate {
            heading: "Why {location} Businesses Choose Programmatic SEO",
            body: "Instead of a handful of pages, we build 1,000+ pages covering every service and town your customers in {location} search for, with clean URLs and structured data.",
        },
        SectionTemplate {
            heading: "How It Works",
            body: "We map every keyword your customers search, build the pages with on-page SEO and internal linking, then deploy, index and monitor them. Most businesses in {location} see rankings within 7 days.",
        },
        ONE_OFF_PAYMENT,
    ],
    cta_message: "Hi, I'm interested in SEO services for my business in {location}.",
};

pub static SERVICE_LOCATION: PageTemplate = PageTemplate {
    title: "{service} Services in {location}",
    description: "Professional {service} services in {location}. We help {service:lower} businesses in {location} dominate local search results.",
    heading: "{service} Services in {location}",
    intro: "We help {service:lower} businesses in {location} dominate local search results. Get found by customers searching for {service:lower} services in {location}.",
    keywords: &[
        "{service:lower} {location:lower}",
        "{service:lower} services {location:lower}",
        "best {service:lower} {location:lower}",
        "{service:lower} company {location:lower}",
        "{service:lower} agency {location:lower}",
        "local {service:lower} {location:lower}",
        "{service:lower} near me {location:lower}",
    ],
    sections: &[
        SectionTemplate {
            heading: "Keyword Research",
            body: "We identify every keyword your {service:lower} customers in {location} are searching for, including long-tail variations and local modifiers.",
        },
        SectionTemplate {
            heading: "Content Generation",
            body: "We create hundreds of optimized pages targeting {service:lower} keywords specific to {location}, with proper internal linking and schema markup.",
        },
        SectionTemplate {
            heading: "Rank & Monitor",
            body: "We deploy your site, submit to search engines, and monitor rankings. Most {service:lower} businesses in {location} see results within 7 days.",
        },
        SectionTemplate {
            heading: "Why Choose Our {service} Services for {location}?",
            body: "We understand the {service:lower} market in {location} and know exactly what your customers are searching for. Our content targets real search intent.",
        },
        ONE_OFF_PAYMENT,
    ],
    cta_message: "Hi, I'm interested in {service} services for my business in {location}.",
};

pub static COMPARISON: PageTemplate = PageTemplate {
    title: "{first} vs {second} in {location}",
    description: "Compare {first} vs {second} services in {location}. See which SEO approach is best for your business with our programmatic SEO solution.",
    heading: "{first} vs {second} in {location}",
    intro: "Compare {first} vs {second} services in {location}. See which approach delivers better results for your business.",
    keywords: &[
        "{first:lower} vs {second:lower}",
        "{first:lower} {location:lower}",
        "{second:lower} {location:lower}",
        "seo comparison {location:lower}",
    ],
    sections: &[
        SectionTemplate {
            heading: "{first} vs {second}: Which is Right for Your {location} Business?",
            body: "Both {first:lower} and {second:lower} have their place, but our programmatic SEO approach combines the best of both.",
        },
        SectionTemplate {
            heading: "{first}",
            body: "{first} focuses specifically on {first:lower} strategies for businesses in {location}.",
        },
        SectionTemplate {
            heading: "{second}",
            body: "{second} provides broader SEO coverage for businesses in {location}.",
        },
        SectionTemplate {
            heading: "Why Choose Programmatic SEO Instead?",
            body: "Instead of choosing between {first:lower} or {second:lower}, we create pages for every possible search your customers make in {location}. One £1,000 payment covers everything, and you own it all.",
        },
    ],
    cta_message: "Hi, I'd like to compare {first} and {second} for my business in {location}.",
};

pub static COMPETITOR: PageTemplate = PageTemplate {
    title: "Best {competitor} in {location}",
    description: "Looking for {competitor} in {location}? We offer superior programmatic SEO services that outperform traditional agencies. Get 1,000+ pages ranking for your business.",
    heading: "Best {competitor} in {location}",
    intro: "Looking for {competitor:lower} in {location}? We offer superior programmatic SEO services that outperform traditional agencies.",
    keywords: &[
        "{competitor:lower} {location:lower}",
        "best {competitor:lower} {location:lower}",
        "seo services {location:lower}",
        "local seo {location:lower}",
    ],
    sections: &[
        SectionTemplate {
            heading: "Why Choose Us Over Traditional {competitor} in {location}?",
            body: "Most {competitor:lower} providers in {location} offer the same old approach: monthly fees, limited pages, and slow results. We're different.",
        },
        SectionTemplate {
            heading: "A Page for Every Search",
            body: "While other {competitor:lower} providers in {location} create a few pages and hope for the best, we build a page for every service and town your customers search.",
        },
        SectionTemplate {
            heading: "Page 1, Many Times Over",
            body: "With 1,000+ pages, you'll appear multiple times on page 1 for every relevant search in {location}.",
        },
        SectionTemplate {
            heading: "No Ongoing Dependency",
            body: "No monthly fees. No ongoing dependency. You own the entire SEO engine.",
        },
    ],
    cta_message: "Hi, I'm comparing {competitor} options in {location}.",
};

pub static PRICING: PageTemplate = PageTemplate {
    title: "{pricing} in {location}",
    description: "Transparent {pricing:lower} in {location}. One-off £1,000 payment for 1,000+ SEO pages. No monthly fees, no ongoing costs.",
    heading: "{pricing} in {location}",
    intro: "Transparent {pricing:lower} in {location}. One-off £1,000 payment for 1,000+ SEO pages. No monthly fees, no ongoing costs.",
    keywords: &[
        "{pricing:lower} {location:lower}",
        "seo pricing {location:lower}",
        "seo cost {location:lower}",
        "affordable seo {location:lower}",
    ],
    sections: &[
        SectionTemplate {
            heading: "Simple, Transparent Pricing for {location} Businesses",
            body: "No hidden fees, no monthly subscriptions, no ongoing costs. Just one payment for everything.",
        },
        SectionTemplate {
            heading: "What's Included",
            body: "Everything you need to dominate local search in {location}: 1,000+ pages, structured data, internal linking, and Search Console setup.",
        },
        SectionTemplate {
            heading: "Compared With Monthly Retainers",
            body: "Traditional SEO agencies in {location} charge £500-£2,000 per month. Our one-off £1,000 + VAT payment covers the whole build and you own it outright.",
        },
    ],
    cta_message: "Hi, I'd like a quote for SEO in {location}.",
};

pub static FAQ_SERVICE_LOCATION: PageTemplate = PageTemplate {
    title: "{faq} About {service} in {location}",
    description: "Common {faq:lower} about {service} services in {location}. Get expert answers about {service:lower} and programmatic SEO.",
    heading: "{faq} About {service} in {location}",
    intro: "Get expert answers about {service} services in {location}.",
    keywords: &[
        "{service:lower} {faq:lower}",
        "{service:lower} {location:lower}",
        "{service:lower} help {location:lower}",
        "seo faq {location:lower}",
    ],
    sections: &[
        SectionTemplate {
            heading: "What is {service}?",
            body: "{service} is a specialized approach to search engine optimization designed for {service:lower} businesses in {location}. It focuses on improving your visibility for relevant local searches.",
        },
        SectionTemplate {
            heading: "How Does Programmatic {service} Work?",
            body: "Our programmatic {service:lower} creates hundreds of targeted pages for every \"{service:lower} in {location}\" search. This comprehensive approach ensures maximum visibility for your business.",
        },
        SectionTemplate {
            heading: "How Is This Different From Traditional {service}?",
            body: "Traditional {service:lower} agencies create limited pages. Our programmatic approach creates 1,000+ pages, ensuring you rank for every relevant search in {location}.",
        },
        SectionTemplate {
            heading: "How Much Does {service} Cost in {location}?",
            body: "Our {service:lower} service costs £1,000 one-time. This includes 1,000+ pages targeting every relevant search in {location}. No monthly fees, no ongoing costs.",
        },
        SectionTemplate {
            heading: "How Long Until I See Results in {location}?",
            body: "Most {service:lower} businesses in {location} see rankings within 2-4 weeks. Our comprehensive approach delivers faster results than traditional SEO methods.",
        },
    ],
    cta_message: "Hi, I have a question about {service} for my business in {location}.",
};

pub static FAQ_LOCATION: PageTemplate = PageTemplate {
    title: "{topic} About SEO in {location}",
    description: "Common {topic:lower} about SEO services in {location}. Get answers about programmatic SEO, pricing, and results.",
    heading: "{topic} About SEO in {location}",
    intro: "Get answers to the most common {topic:lower} about SEO services in {location}.",
    keywords: &[
        "{topic:lower} {location:lower}",
        "seo {location:lower}",
        "seo faq {location:lower}",
    ],
    sections: &[
        SectionTemplate {
            heading: "How Much Does SEO Cost in {location}?",
            body: "Traditional SEO agencies in {location} charge £500-£2,000 per month with ongoing fees. Our programmatic SEO service costs £1,000 one-time for 1,000+ pages. No monthly fees, no ongoing costs.",
        },
        SectionTemplate {
            heading: "How Long Does SEO Take?",
            body: "Traditional SEO takes 6-12 months to show results. Our programmatic SEO approach delivers rankings in 2-4 weeks because we create comprehensive coverage immediately.",
        },
        SectionTemplate {
            heading: "What Makes Programmatic SEO Different?",
            body: "Instead of creating 10-50 pages like traditional agencies, we create 1,000+ pages targeting every possible search your customers make in {location}.",
        },
        SectionTemplate {
            heading: "Do I Own Everything You Build?",
            body: "Yes! Unlike traditional agencies where you pay monthly forever, you own everything we create. No ongoing dependency, no monthly fees.",
        },
        SectionTemplate {
            heading: "What If I'm Not Satisfied?",
            body: "We're confident in our approach. If you're not satisfied with the results after 30 days, we'll refund your payment. No questions asked.",
        },
    ],
    cta_message: "Hi, I have a question about SEO for my business in {location}.",
};
