use yew::Callback;
use yew_router::prelude::*;

/// Which full-screen view the shell renders.
///
/// The paths only feed canonical links and the one-time pick of the landing
/// view; switching pages afterwards never touches browser history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Routable)]
pub enum Page {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/book-call")]
    BookCall,
    #[at("/faqs")]
    Faqs,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub type Navigate = Callback<Page>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeoMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub path: String,
}

impl Page {
    pub fn seo(&self) -> SeoMeta {
        let (title, description) = match self {
            Page::Home => (
                "TurboAutomation - AI Automation Agency | Transform Your Business with AI",
                "Outperform your competitors and be future-proof with AI automation. Expert AI solutions including chat assistants, phone callers, automated outreach, and social agents.",
            ),
            Page::Services => (
                "AI Automation Services | TurboAutomation - AI Chat, Phone, Outreach & Social",
                "Discover our comprehensive AI automation services: AI Chat Assistants, AI Phone Callers, Automated Outreach Systems, and AI Social Agents. Transform your business operations.",
            ),
            Page::BookCall => (
                "Book a Consultation Call | TurboAutomation AI Automation Agency",
                "Schedule a free consultation to discuss your AI automation needs. Get personalized solutions for your business challenges and explore AI opportunities.",
            ),
            Page::Faqs => (
                "AI Automation FAQs | TurboAutomation AI Automation Agency",
                "Answers to common questions about AI automation, costs, timelines, integration and support from the TurboAutomation team.",
            ),
            Page::NotFound => (
                "Page Not Found | TurboAutomation AI Automation Agency",
                "The page you are looking for could not be found. Explore our AI automation services or contact us for assistance.",
            ),
        };
        SeoMeta {
            title,
            description,
            path: self.to_path(),
        }
    }
}

const SERVICE_KEYWORDS: &[&str] = &["service", "ai", "automation"];
const BOOKING_KEYWORDS: &[&str] = &["call", "book", "consultation"];

/// Picks the page a free-text 404 search should land on.
///
/// Buckets are checked in order (services, booking) and anything else goes
/// home. A blank query yields `None` and nothing should happen.
pub fn search_destination(query: &str) -> Option<Page> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    let query = query.to_lowercase();
    let hits = |keywords: &[&str]| keywords.iter().any(|k| query.contains(k));

    if hits(SERVICE_KEYWORDS) {
        Some(Page::Services)
    } else if hits(BOOKING_KEYWORDS) {
        Some(Page::BookCall)
    } else {
        Some(Page::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_routes_by_keyword_bucket() {
        assert_eq!(search_destination("ai automation services"), Some(Page::Services));
        assert_eq!(search_destination("book a call"), Some(Page::BookCall));
        assert_eq!(search_destination("Consultation"), Some(Page::BookCall));
        assert_eq!(search_destination("pricing"), Some(Page::Home));
    }

    #[test]
    fn blank_search_is_a_no_op() {
        assert_eq!(search_destination(""), None);
        assert_eq!(search_destination("   "), None);
    }

    #[test]
    fn service_bucket_wins_ties() {
        // matches both buckets
        assert_eq!(search_destination("book an automation call"), Some(Page::Services));
    }

    #[test]
    fn seo_paths_follow_routes() {
        assert_eq!(Page::Home.seo().path, "/");
        assert_eq!(Page::Services.seo().path, "/services");
        assert_eq!(Page::BookCall.seo().path, "/book-call");
        assert_eq!(Page::Faqs.seo().path, "/faqs");
        assert_eq!(Page::NotFound.seo().path, "/404");
    }

    #[test]
    fn every_page_has_distinct_title() {
        let pages = [Page::Home, Page::Services, Page::BookCall, Page::Faqs, Page::NotFound];
        for (i, a) in pages.iter().enumerate() {
            for b in &pages[i + 1..] {
                assert_ne!(a.seo().title, b.seo().title);
            }
        }
    }
}
