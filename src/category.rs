/// Tab categorization: closed label set plus the ordered domain table
use crate::domain::extract_domain;

/// Closed set of tab categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Productivity,
    Development,
    Entertainment,
    Social,
    News,
    Shopping,
    Finance,
    Health,
    Education,
    Other,
}

impl Category {
    /// Table order. The category view groups in exactly this order.
    pub const ALL: [Category; 10] = [
        Category::Productivity,
        Category::Development,
        Category::Entertainment,
        Category::Social,
        Category::News,
        Category::Shopping,
        Category::Finance,
        Category::Health,
        Category::Education,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Productivity => "productivity",
            Category::Development => "development",
            Category::Entertainment => "entertainment",
            Category::Social => "social",
            Category::News => "news",
            Category::Shopping => "shopping",
            Category::Finance => "finance",
            Category::Health => "health",
            Category::Education => "education",
            Category::Other => "other",
        }
    }

    /// Capitalized form used by group headers.
    pub fn display(self) -> &'static str {
        match self {
            Category::Productivity => "Productivity",
            Category::Development => "Development",
            Category::Entertainment => "Entertainment",
            Category::Social => "Social",
            Category::News => "News",
            Category::Shopping => "Shopping",
            Category::Finance => "Finance",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }
}

/// Ordered (hostname substring, category) pairs.
///
/// Matching is first-match-wins in definition order, NOT longest-match: when
/// two keys both match a hostname (aws.amazon.com matches "aws.amazon.com"
/// and "amazon."), the earlier entry decides. Editing this table is how the
/// classification changes; rendering never looks at it.
pub const CATEGORY_TABLE: &[(&str, Category)] = &[
    ("docs.google.com", Category::Productivity),
    ("gmail.com", Category::Productivity),
    ("mail.", Category::Productivity),
    ("calendar.google.com", Category::Productivity),
    ("drive.google.com", Category::Productivity),
    ("notion.so", Category::Productivity),
    ("trello.com", Category::Productivity),
    ("slack.com", Category::Productivity),
    ("office.com", Category::Productivity),
    ("github.com", Category::Development),
    ("stackoverflow.com", Category::Development),
    ("gitlab.com", Category::Development),
    ("developer.mozilla.org", Category::Development),
    ("docs.rs", Category::Development),
    ("crates.io", Category::Development),
    ("aws.amazon.com", Category::Development),
    ("youtube.com", Category::Entertainment),
    ("netflix.com", Category::Entertainment),
    ("twitch.tv", Category::Entertainment),
    ("spotify.com", Category::Entertainment),
    ("hulu.com", Category::Entertainment),
    ("twitter.com", Category::Social),
    ("facebook.com", Category::Social),
    ("instagram.com", Category::Social),
    ("linkedin.com", Category::Social),
    ("reddit.com", Category::Social),
    ("cnn.com", Category::News),
    ("bbc.co", Category::News),
    ("nytimes.com", Category::News),
    ("reuters.com", Category::News),
    ("news.ycombinator.com", Category::News),
    ("amazon.", Category::Shopping),
    ("ebay.com", Category::Shopping),
    ("etsy.com", Category::Shopping),
    ("aliexpress.com", Category::Shopping),
    ("paypal.com", Category::Finance),
    ("coinbase.com", Category::Finance),
    ("fidelity.com", Category::Finance),
    ("chase.com", Category::Finance),
    ("webmd.com", Category::Health),
    ("mayoclinic.org", Category::Health),
    ("healthline.com", Category::Health),
    ("nih.gov", Category::Health),
    ("coursera.org", Category::Education),
    ("khanacademy.org", Category::Education),
    ("udemy.com", Category::Education),
    ("edx.org", Category::Education),
    ("wikipedia.org", Category::Education),
];

/// Categorize a tab by its URL.
///
/// The URL's hostname (sentinel if malformed) is scanned against
/// CATEGORY_TABLE in definition order; no key matches → Other.
pub fn categorize(url: &str) -> Category {
    categorize_host(&extract_domain(url))
}

/// Table scan over an already-extracted hostname.
pub(crate) fn categorize_host(host: &str) -> Category {
    CATEGORY_TABLE
        .iter()
        .find(|(key, _)| host.contains(key))
        .map(|&(_, category)| category)
        .unwrap_or(Category::Other)
}
