use crate::navigation::Page;

pub struct ServiceCatalogEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct CarouselEntry {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct QuickLink {
    pub title: &'static str,
    pub description: &'static str,
    pub target: Page,
}

pub struct SocialLink {
    pub href: &'static str,
    pub label: &'static str,
    pub short: &'static str,
}

pub const SERVICE_CATALOG: &[ServiceCatalogEntry] = &[
    ServiceCatalogEntry {
        title: "AI Chat Assistant",
        description: "Intelligent conversational AI that engages customers 24/7 with human-like interactions.",
        benefits: &[
            "Lead capture, Customer support and appointment scheduling all in one",
            "Cheaper than hiring people for these tasks",
            "Always consistent and accurate",
        ],
    },
    ServiceCatalogEntry {
        title: "AI Voice Agent",
        description: "Automated voice systems that handle calls with natural speech and professional efficiency.",
        benefits: &[
            "Best for cold calling and appointment scheduling",
            "Can handle high call volume 24/7",
        ],
    },
    ServiceCatalogEntry {
        title: "Automated Outreach System",
        description: "Smart campaigns that reach prospects at scale with personalized messaging.",
        benefits: &[
            "Higher sales",
            "Generate as much leads as you want",
            "Highly personalized Emails or DMs with follow ups",
        ],
    },
    ServiceCatalogEntry {
        title: "Custom Solution",
        description: "Tailored automation, micro SaaS, MVP, or full-stack SaaS solutions built specifically for your business needs.",
        benefits: &[
            "Custom automations that streamline operations and eliminate repetitive tasks",
            "SaaS products designed with only the features you actually need",
            "Rapid development and launch timeline of just 2-4 weeks",
        ],
    },
];

/// Checkbox options on the booking form. The last one unlocks the free-text field.
pub const BOOKING_SERVICE_OPTIONS: &[&str] = &[
    "AI Chat Assistant",
    "AI Voice Agent",
    "Automated Outreach System",
    "Custom Automation or SAAS",
    "I don't know and would like consultation",
    crate::booking::OTHER_SERVICE,
];

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "What exactly is AI automation?",
        answer: "Implementing AI in other automations to perform tasks and processes that require human effort.",
    },
    FaqEntry {
        question: "How is AI automation different from traditional automation?",
        answer: "Traditional automation follows fixed rules and only does simple tasks. While AI automation uses AI into automation to learn, adapt, and make intelligent decisions from data, handling more complex and variable tasks.",
    },
    FaqEntry {
        question: "What types of tasks and processes can AI automation handle?",
        answer: "It covers a wide range, including customer support (chat-assistants), data entry (appointment scheduling), sales/marketing (cold calling, ghost writing), finance (invoice processing), HR (candidate screening), and operations (supply chain optimization).",
    },
    FaqEntry {
        question: "What are the main benefits of implementing AI solutions for my business?",
        answer: "Key benefits include increased efficiency, cost reduction, improved accuracy, enhanced customer experience, data-driven decisions and scalability, giving you a competitive edge.",
    },
    FaqEntry {
        question: "Will AI automation replace my employees?",
        answer: "Yes, in many cases and it can augment your employee's capability in other cases.",
    },
    FaqEntry {
        question: "How do you identify which areas of my business can benefit most from AI automation?",
        answer: "We start by understanding your goals or pain points then map your current processes and find high-impact opportunities for automation.",
    },
    FaqEntry {
        question: "Do I need technical expertise to implement AI automation with your agency?",
        answer: "No, you don't. Our team handles the entire process, from design and implementation to integration.",
    },
    FaqEntry {
        question: "How long does it take to see results from AI automation projects?",
        answer: "Timelines vary by complexity. Some projects show immediate benefits, while others may take a few months. We will provide clear timelines upfront.",
    },
    FaqEntry {
        question: "How much does AI automation cost?",
        answer: "Costs vary based on your specific needs and project scope. We offer transparent pricing and detailed quotes after an initial discovery, focusing on ROI.",
    },
    FaqEntry {
        question: "What kind of support do you provide after implementation?",
        answer: "We offer comprehensive support, including monitoring, performance optimization, training, troubleshooting, and assistance with future scaling of your AI solutions.",
    },
    FaqEntry {
        question: "Can I integrate AI with my existing business systems and software?",
        answer: "Yes, seamless integration is also a service. We connect AI solutions with your existing CRM, ERP and other software to create unified workflows.",
    },
    FaqEntry {
        question: "How do I get started with exploring AI automation for my business?",
        answer: "Simply schedule a consultation with us to discuss your challenges and how AI automation can benefit your operations.",
    },
    FaqEntry {
        question: "What industries do you serve?",
        answer: "All industries where our service is applicable.",
    },
];

pub const CAROUSEL_ENTRIES: &[CarouselEntry] = &[
    CarouselEntry {
        title: "AI Chat Assistants",
        description: "Intelligent conversational AI that engages customers 24/7 with human-like interactions.",
    },
    CarouselEntry {
        title: "AI Phone Callers",
        description: "Automated voice systems that handle calls with natural speech and professional efficiency.",
    },
    CarouselEntry {
        title: "Automated Outreach Systems",
        description: "Smart campaigns that reach prospects at scale with personalized messaging.",
    },
    CarouselEntry {
        title: "AI Social Agents",
        description: "AI Agents that consistently increase a brand's presence on social media.",
    },
];

pub const SEARCH_SUGGESTIONS: &[&str] = &[
    "AI Chat Assistants",
    "AI Phone Callers",
    "Automated Outreach",
    "AI Social Agents",
    "Business Automation",
    "AI Implementation",
    "Consultation Booking",
    "Pricing Information",
    "Help and Support",
];

pub const QUICK_LINKS: &[QuickLink] = &[
    QuickLink {
        title: "Homepage",
        description: "Return to our main page",
        target: Page::Home,
    },
    QuickLink {
        title: "Our Services",
        description: "Explore AI automation solutions",
        target: Page::Services,
    },
    QuickLink {
        title: "Book a Call",
        description: "Schedule a consultation",
        target: Page::BookCall,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        href: "https://x.com/TurboAutomation",
        label: "Follow us on X (Twitter)",
        short: "X",
    },
    SocialLink {
        href: "https://www.youtube.com/@TurboAutomation",
        label: "Subscribe to our YouTube channel",
        short: "YouTube",
    },
    SocialLink {
        href: "https://www.facebook.com/TurboAutomation",
        label: "Like us on Facebook",
        short: "Facebook",
    },
    SocialLink {
        href: "https://www.linkedin.com/company/turboautomation",
        label: "Connect with us on LinkedIn",
        short: "LinkedIn",
    },
];

/// Suggestions whose text contains `query`, ignoring case. Empty query suggests nothing.
pub fn matching_suggestions(query: &str) -> Vec<&'static str> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    SEARCH_SUGGESTIONS
        .iter()
        .copied()
        .filter(|s| s.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_filter_case_insensitively() {
        assert_eq!(
            matching_suggestions("outreach"),
            vec!["Automated Outreach"]
        );
        assert_eq!(matching_suggestions("AI ").len(), 4);
    }

    #[test]
    fn empty_query_has_no_suggestions() {
        assert!(matching_suggestions("").is_empty());
    }

    #[test]
    fn booking_options_end_with_other() {
        assert_eq!(
            BOOKING_SERVICE_OPTIONS.last().copied(),
            Some(crate::booking::OTHER_SERVICE)
        );
    }

    #[test]
    fn every_catalog_entry_lists_benefits() {
        assert!(SERVICE_CATALOG.iter().all(|entry| !entry.benefits.is_empty()));
    }
}
