#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub emoji: &'static str,
    pub value: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offering {
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Value {
    pub emoji: &'static str,
    pub text: &'static str,
}

pub const MENTOR_NAME: &str = "Ravi Rautela";

pub const STATS: [Stat; 5] = [
    Stat { emoji: "🌍", value: 25, suffix: "+", label: "Years of Experience" },
    Stat { emoji: "🚀", value: 100, suffix: "+", label: "Startups Mentored" },
    Stat { emoji: "🎓", value: 5000, suffix: "+", label: "Students Trained" },
    Stat { emoji: "💰", value: 50, suffix: " M+", label: "Funding Facilitated" },
    Stat { emoji: "🌾", value: 1000, suffix: "+", label: "Farms Transformed" },
];

pub const OFFERINGS: [Offering; 4] = [
    Offering {
        emoji: "🧠",
        title: "Mentorship that feels personal, not corporate",
        description: "One-on-one guidance tailored to your journey, not a cookie-cutter program.",
    },
    Offering {
        emoji: "🛠️",
        title: "Real projects > boring theory",
        description: "Build actual products, solve real problems, and create portfolio pieces that matter.",
    },
    Offering {
        emoji: "🌱",
        title: "Build sustainable impact while learning cool tech",
        description: "Work on agritech, edtech, and social entrepreneurship with cutting-edge tools.",
    },
    Offering {
        emoji: "🔗",
        title: "Connect with a tribe that actually gets you",
        description: "Join a community of creators, builders, and innovators who share your vision.",
    },
];

pub const VALUES: [Value; 6] = [
    Value { emoji: "💡", text: "Innovation First" },
    Value { emoji: "🤝", text: "People Empowerment" },
    Value { emoji: "🌍", text: "Social Impact" },
    Value { emoji: "📈", text: "Results Driven" },
    Value { emoji: "🔁", text: "Continuous Learning" },
    Value { emoji: "✨", text: "Excellence" },
];
