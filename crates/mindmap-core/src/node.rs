use serde::{Deserialize, Serialize};

/// A named unit of work in a breakdown.
///
/// Leaf nodes serialize without a `children` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TaskNode>,
}

impl TaskNode {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children<I, S>(name: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            children: children.into_iter().map(TaskNode::leaf).collect(),
        }
    }
}

/// Full breakdown: the user's idea at the center, top-level tasks in
/// display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindMap {
    pub central: String,
    #[serde(default)]
    pub subtopics: Vec<TaskNode>,
}

/// Flat expansion of a single topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtopicList {
    #[serde(default)]
    pub subtopics: Vec<TaskNode>,
}
