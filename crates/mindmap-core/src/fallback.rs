//! Deterministic breakdowns used when model output is unusable.
//!
//! Both generators are driven by the static rule tables below. Rules are
//! evaluated in table order and the first match wins, so an idea that
//! mentions both a website and data only gets the website augmentation.

use crate::node::{MindMap, SubtopicList, TaskNode};

/// Placeholder replaced with the caller's topic in breakdown steps.
const TOPIC: &str = "{topic}";

/// A top-level task with its leaf children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeTemplate {
    pub name: &'static str,
    pub children: &'static [&'static str],
}

impl NodeTemplate {
    pub fn build(&self) -> TaskNode {
        TaskNode::with_children(self.name, self.children.iter().copied())
    }
}

/// Project category that augments the base task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
    /// Index in the base list where `inserted` goes.
    pub insert_at: usize,
    pub inserted: NodeTemplate,
    pub appended: NodeTemplate,
}

/// Ordered five-step template for expanding a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakdownRule {
    pub track: &'static str,
    pub keywords: &'static [&'static str],
    pub steps: &'static [&'static str; 5],
}

pub const BASE_TASKS: &[NodeTemplate] = &[
    NodeTemplate {
        name: "Define project requirements",
        children: &["Identify core features", "Define target audience"],
    },
    NodeTemplate {
        name: "Design project structure",
        children: &["Create system architecture", "Define data models"],
    },
    NodeTemplate {
        name: "Set up development environment",
        children: &["Install necessary tools", "Configure version control"],
    },
    NodeTemplate {
        name: "Implement core functionality",
        children: &["Build essential features", "Create minimal viable product"],
    },
    NodeTemplate {
        name: "Test and debug",
        children: &["Create test cases", "Fix identified issues"],
    },
    NodeTemplate {
        name: "Deploy and launch",
        children: &["Set up hosting environment", "Publish project"],
    },
];

pub const MIND_MAP_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: "website",
        keywords: &["website", "web app", "web application", "site"],
        insert_at: 2,
        inserted: NodeTemplate {
            name: "Design user interface",
            children: &["Create wireframes", "Design responsive layouts"],
        },
        appended: NodeTemplate {
            name: "Optimize for performance",
            children: &["Implement caching", "Optimize load times"],
        },
    },
    CategoryRule {
        category: "mobile_app",
        keywords: &["app", "mobile", "android", "ios"],
        insert_at: 2,
        inserted: NodeTemplate {
            name: "Design user experience",
            children: &["Create UI mockups", "Design navigation flow"],
        },
        appended: NodeTemplate {
            name: "Prepare for app store submission",
            children: &["Create store listings", "Prepare promotional materials"],
        },
    },
    CategoryRule {
        category: "data",
        keywords: &["data", "analysis", "analytics"],
        insert_at: 1,
        inserted: NodeTemplate {
            name: "Collect and prepare data",
            children: &["Identify data sources", "Clean and transform data"],
        },
        appended: NodeTemplate {
            name: "Create visualization dashboard",
            children: &["Design key metrics display", "Implement interactive charts"],
        },
    },
];

pub const BREAKDOWN_RULES: &[BreakdownRule] = &[
    BreakdownRule {
        track: "design",
        keywords: &["design"],
        steps: &[
            "Research best practices for {topic}",
            "Create initial sketches and mockups for {topic}",
            "Gather feedback on early drafts of {topic}",
            "Refine and finalize {topic}",
            "Document design decisions for {topic}",
        ],
    },
    BreakdownRule {
        track: "build",
        keywords: &["develop", "implement", "build", "code", "program"],
        steps: &[
            "Break down {topic} into smaller functions",
            "Write pseudo-code for the core logic of {topic}",
            "Implement baseline functionality for {topic}",
            "Add error handling and edge cases to {topic}",
            "Refactor and optimize the code for {topic}",
        ],
    },
    BreakdownRule {
        track: "test",
        keywords: &["test", "qa", "quality"],
        steps: &[
            "Define test criteria for {topic}",
            "Create test cases covering {topic}",
            "Execute manual testing of {topic}",
            "Implement automated tests for {topic} where applicable",
            "Document test results for {topic}",
        ],
    },
];

/// Used when no breakdown rule matches.
pub static GENERIC_BREAKDOWN: BreakdownRule = BreakdownRule {
    track: "generic",
    keywords: &[],
    steps: &[
        "Research requirements for {topic}",
        "Create a detailed implementation plan for {topic}",
        "Identify potential challenges in {topic}",
        "Execute the core components of {topic}",
        "Review and refine the outcome of {topic}",
    ],
};

fn mentions_any(haystack_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack_lower.contains(k))
}

/// First category whose keywords appear in `project_idea`, case-insensitively.
pub fn matching_category(project_idea: &str) -> Option<&'static CategoryRule> {
    let lower = project_idea.to_lowercase();
    MIND_MAP_RULES
        .iter()
        .find(|rule| mentions_any(&lower, rule.keywords))
}

/// Base task list, augmented by at most one project category.
///
/// Yields 6 tasks when nothing matches and 8 when a category applies.
pub fn create_fallback_tasks(project_idea: &str) -> Vec<TaskNode> {
    let mut tasks: Vec<TaskNode> = BASE_TASKS.iter().map(NodeTemplate::build).collect();

    if let Some(rule) = matching_category(project_idea) {
        tasks.insert(rule.insert_at, rule.inserted.build());
        tasks.push(rule.appended.build());
    }

    tasks
}

/// Rule used to expand `topic`; [`GENERIC_BREAKDOWN`] when none match.
pub fn matching_breakdown(topic: &str) -> &'static BreakdownRule {
    let lower = topic.to_lowercase();
    BREAKDOWN_RULES
        .iter()
        .find(|rule| mentions_any(&lower, rule.keywords))
        .unwrap_or(&GENERIC_BREAKDOWN)
}

/// Five leaf steps with `topic` interpolated verbatim into each.
pub fn create_task_breakdown(topic: &str) -> Vec<TaskNode> {
    matching_breakdown(topic)
        .steps
        .iter()
        .map(|step| TaskNode::leaf(step.replace(TOPIC, topic)))
        .collect()
}

pub fn fallback_mind_map(central_idea: &str) -> MindMap {
    MindMap {
        central: central_idea.to_string(),
        subtopics: create_fallback_tasks(central_idea),
    }
}

pub fn fallback_subtopics(topic: &str) -> SubtopicList {
    SubtopicList {
        subtopics: create_task_breakdown(topic),
    }
}
