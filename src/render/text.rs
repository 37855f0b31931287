//! Plain text rendering of semantic trees, for debugging and fixtures.

use crate::model::{SemanticElement, TreeNode};

use super::{HighlightStyle, RenderOptions};

const ELLIPSIS: &str = "...";

/// Render a tree, a single node, or a list of nodes as an indented outline.
///
/// Nodes are visited depth-first in document order. Each line reads
/// `Type[Llevel]: summary`; nested lines carry box-drawing connectors.
/// Nodes of an ignored type are left out together with their subtrees.
///
/// ```
/// use secparse::render::{to_text, RenderOptions};
/// use secparse::SecParser;
/// use secparse::parser::Document;
///
/// let doc = Document::parse("<h1>Part I</h1><p>Financial statements</p>");
/// let tree = SecParser::new().parse_tree(&doc)?;
/// let text = to_text(&tree, &RenderOptions::default());
/// assert_eq!(text, "Title[L1]: Part I\n└── Text: Financial statements");
/// # Ok::<(), secparse::Error>(())
/// ```
pub fn to_text<'a, T>(target: &T, options: &RenderOptions) -> String
where
    T: AsRef<[TreeNode<'a>]> + ?Sized,
{
    let mut lines = Vec::new();
    render_nodes(target.as_ref(), "", true, options, &mut lines);
    lines.join("\n")
}

fn render_nodes(
    nodes: &[TreeNode<'_>],
    prefix: &str,
    is_root: bool,
    options: &RenderOptions,
    lines: &mut Vec<String>,
) {
    let visible: Vec<&TreeNode<'_>> = nodes
        .iter()
        .filter(|node| !options.is_ignored(node.element().element_type()))
        .collect();

    for (i, node) in visible.iter().enumerate() {
        let is_last = i + 1 == visible.len();
        let label = element_label(node.element(), options);

        let child_prefix = if is_root {
            lines.push(label);
            String::new()
        } else {
            let (connector, continuation) = if is_last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            lines.push(format!("{}{}{}", prefix, connector, label));
            format!("{}{}", prefix, continuation)
        };

        render_nodes(node.children(), &child_prefix, false, options, lines);
    }
}

fn element_label(element: &SemanticElement<'_>, options: &RenderOptions) -> String {
    let type_name = element.element_type().name();
    let level = element
        .level()
        .filter(|level| *level > 0)
        .map(|level| format!("[L{}]", level))
        .unwrap_or_default();

    let mut label = match &options.highlight {
        Some(style) => highlighted(type_name, &level, style),
        None => format!("{}{}", type_name, level),
    };

    let summary = truncate_summary(element.summary().trim(), options.effective_limit());
    if !summary.is_empty() {
        label.push_str(": ");
        label.push_str(&summary);
    }
    label
}

fn highlighted(type_name: &str, level: &str, style: &HighlightStyle) -> String {
    let mut out = format!("{}{}{}", style.type_name, type_name, style.reset);
    if !level.is_empty() {
        out.push_str(&format!("{}{}{}", style.level, level, style.reset));
    }
    out
}

/// Shorten `text` to at most `limit` characters by keeping its start and
/// end around an ellipsis.
///
/// The prefix gets `(limit - 3) / 2` characters and the suffix the rest, so
/// the result is exactly `limit` characters long.
pub fn truncate_summary(text: &str, limit: usize) -> String {
    let count = text.chars().count();
    if count <= limit {
        return text.to_string();
    }
    if limit <= ELLIPSIS.len() {
        return text.chars().take(limit).collect();
    }

    let head = (limit - ELLIPSIS.len()) / 2;
    let tail = limit - ELLIPSIS.len() - head;
    let prefix: String = text.chars().take(head).collect();
    let suffix: String = text.chars().skip(count - tail).collect();
    format!("{}{}{}", prefix, ELLIPSIS, suffix)
}
