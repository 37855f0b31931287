//! JSON rendering of semantic trees.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{ElementType, TreeNode};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

#[derive(Debug, Serialize)]
struct JsonNode {
    #[serde(rename = "type")]
    element_type: ElementType,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<u32>,
    tag: String,
    summary: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<JsonNode>,
}

impl JsonNode {
    fn from_node(node: &TreeNode<'_>) -> Self {
        let element = node.element();
        Self {
            element_type: element.element_type(),
            level: element.level(),
            tag: element.tag().name().to_string(),
            summary: element.summary(),
            children: node.children().iter().map(JsonNode::from_node).collect(),
        }
    }
}

/// Convert a tree, a single node, or a list of nodes to a JSON array.
///
/// Unlike the text outline, every element type is included.
pub fn to_json<'a, T>(target: &T, format: JsonFormat) -> Result<String>
where
    T: AsRef<[TreeNode<'a>]> + ?Sized,
{
    let nodes: Vec<JsonNode> = target.as_ref().iter().map(JsonNode::from_node).collect();
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&nodes),
        JsonFormat::Compact => serde_json::to_string(&nodes),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_tree;
    use crate::parser::{flatten, Document};
    use crate::steps::{Pipeline, ProcessingContext};

    #[test]
    fn test_to_json_nested() {
        let doc = Document::parse("<h2>Risk Factors</h2><p>Markets are volatile.</p>");
        let elements = Pipeline::default()
            .run(flatten(doc.root()), &ProcessingContext::default())
            .unwrap();
        let tree = build_tree(elements);

        let json = to_json(&tree, JsonFormat::Compact).unwrap();
        assert_eq!(
            json,
            r#"[{"type":"title","level":2,"tag":"h2","summary":"Risk Factors","children":[{"type":"text","tag":"p","summary":"Markets are volatile."}]}]"#
        );
    }

    #[test]
    fn test_to_json_pretty() {
        let doc = Document::parse("<p>Hello</p>");
        let tree = build_tree(flatten(doc.root()));
        let json = to_json(&tree, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"generic\""));
        assert!(json.contains('\n'));
    }
}
