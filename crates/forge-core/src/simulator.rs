//! Response simulator: canned replies keyed by keywords in the request.
//!
//! Stands in for a generation backend. Matching is case-insensitive and the
//! first topic in `TOPICS` with a hit wins, so more specific topics are
//! listed before generic ones ("app" matches a lot).
//!
//! Single ASCII words only match as whole words (a trailing plural "s" is
//! allowed), so "workshop" is not a shop and "apply" is not an app. Phrases,
//! hyphenated keywords and Arabic keywords match anywhere in the input.

pub use forge_types::config::DEFAULT_REPLY_DELAY_MS;

/// Example prompts offered as one-tap shortcuts on the home view.
pub const QUICK_SUGGESTIONS: &[&str] = &[
    "Build a todo app with reminders and categories",
    "Create an e-commerce store for handmade products",
    "Design an analytics dashboard for monthly sales",
    "Make a simple puzzle game for kids",
    "Build a portfolio website with a contact form",
];

/// How many quick suggestions the home view shows.
pub const HOME_SUGGESTION_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    ECommerce,
    Dashboard,
    Game,
    Website,
    App,
}

struct TopicEntry {
    topic: Topic,
    keywords: &'static [&'static str],
    reply: &'static str,
}

const TOPICS: &[TopicEntry] = &[
    TopicEntry {
        topic: Topic::ECommerce,
        keywords: &["e-commerce", "ecommerce", "online store", "shop", "متجر"],
        reply: "Great, an online store! 🛒\n\
                I'll set up:\n\
                • A product catalog with categories and search\n\
                • A shopping cart and checkout flow\n\
                • Order tracking and an admin area for inventory\n\
                Your store project is being prepared now.",
    },
    TopicEntry {
        topic: Topic::Dashboard,
        keywords: &["dashboard", "admin panel", "analytics", "لوحة"],
        reply: "A dashboard it is! 📊\n\
                I'll include:\n\
                • Key metric cards at the top\n\
                • Interactive charts with date filters\n\
                • Sortable data tables and CSV export\n\
                Your dashboard project is being prepared now.",
    },
    TopicEntry {
        topic: Topic::Game,
        keywords: &["game", "لعبة"],
        reply: "Let's build a game! 🎮\n\
                I'll start with:\n\
                • A core game loop and scoring\n\
                • Levels that ramp up in difficulty\n\
                • A high-score board and simple sound effects\n\
                Your game project is being prepared now.",
    },
    TopicEntry {
        topic: Topic::Website,
        keywords: &["website", "web site", "landing page", "موقع"],
        reply: "A website, coming right up! 🌐\n\
                I'll create:\n\
                • A responsive layout with a hero section\n\
                • Pages for about, services and contact\n\
                • SEO-friendly markup and a contact form\n\
                Your website project is being prepared now.",
    },
    TopicEntry {
        topic: Topic::App,
        keywords: &["app", "تطبيق"],
        reply: "Awesome, let's build your app! 📱\n\
                I'll set up:\n\
                • A clean, mobile-first interface\n\
                • Screens for your core features\n\
                • Local data storage so nothing gets lost\n\
                Your app project is being prepared now.",
    },
];

const DEFAULT_REPLY: &str = "Sounds like a great idea! ✨\n\
                             I'm turning your description into a project:\n\
                             • Planning the structure and main features\n\
                             • Picking a layout that fits your content\n\
                             • Preparing a first version you can refine\n\
                             You can follow its progress in your projects list.";

/// Which topic, if any, `input` is about.
pub fn topic(input: &str) -> Option<Topic> {
    find(input).map(|entry| entry.topic)
}

/// Canned reply for `input`; the default reply when no keyword matches.
pub fn classify(input: &str) -> &'static str {
    find(input).map_or(DEFAULT_REPLY, |entry| entry.reply)
}

/// Reply text for a specific topic.
pub fn reply_for(topic: Topic) -> &'static str {
    TOPICS
        .iter()
        .find(|entry| entry.topic == topic)
        .map_or(DEFAULT_REPLY, |entry| entry.reply)
}

pub fn default_reply() -> &'static str {
    DEFAULT_REPLY
}

/// The subset of suggestions shown on the home view.
pub fn home_suggestions() -> &'static [&'static str] {
    &QUICK_SUGGESTIONS[..HOME_SUGGESTION_COUNT]
}

fn find(input: &str) -> Option<&'static TopicEntry> {
    let lowered = input.to_lowercase();
    TOPICS
        .iter()
        .find(|entry| entry.keywords.iter().any(|kw| matches_keyword(&lowered, kw)))
}

fn matches_keyword(text: &str, keyword: &str) -> bool {
    if !keyword.chars().all(|c| c.is_ascii_alphanumeric()) {
        return text.contains(keyword);
    }
    text.match_indices(keyword).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let rest = &text[start + keyword.len()..];
        let rest = rest.strip_prefix('s').unwrap_or(rest);
        !before.is_some_and(char::is_alphanumeric) && !rest.chars().next().is_some_and(char::is_alphanumeric)
    })
}
