//! Static copy for the portfolio page.

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct DetailList {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

pub struct Tile {
    pub title: &'static str,
    pub description: &'static str,
}

pub const AUTHOR: &str = "Morgan";

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "plus",
        title: "Add Items Easily",
        description: "Quickly add shopping items with names and prices using a clean, intuitive interface.",
    },
    Feature {
        icon: "check-circle",
        title: "Track Purchases",
        description: "Check off items as you shop with visual feedback and strikethrough effects.",
    },
    Feature {
        icon: "dollar-sign",
        title: "Budget Management",
        description: "Real-time tracking of total budget and remaining amount to spend.",
    },
    Feature {
        icon: "trash",
        title: "Manage Items",
        description: "Remove unwanted items with confirmation toasts and smooth animations.",
    },
];

pub const TECH_STACK: [&str; 6] = [
    "Rust",
    "Leptos",
    "WebAssembly",
    "Thaw UI",
    "Leptos Router",
    "Trunk",
];

pub const TECH_DETAILS: [DetailList; 2] = [
    DetailList {
        heading: "Frontend Architecture",
        items: &[
            "Rust compiled to WebAssembly for type safety end to end",
            "Leptos fine-grained signals for reactive rendering",
            "Thaw UI components for cards, badges and toasts",
            "Leptos Router for client-side navigation",
        ],
    },
    DetailList {
        heading: "User Experience",
        items: &[
            "Smooth animations and transitions",
            "Toast notifications for user feedback",
            "Responsive design for all devices",
            "Intuitive interface with visual cues",
        ],
    },
];

pub const CORE_TILES: [Tile; 3] = [
    Tile {
        title: "State Management",
        description: "A view model of signals owns the list; every change goes through its commands",
    },
    Tile {
        title: "Data Persistence",
        description: "Ready for database integration with structured data models",
    },
    Tile {
        title: "Performance",
        description: "Derived totals are memoized and rows update in place",
    },
];
