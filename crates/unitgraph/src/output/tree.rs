//! Spanning tree rendering for `unitgraph dfs` / `unitgraph bfs` output.

use std::io::{self, Write};

use serde_json::{Value, json};

use super::color::{colorize_relation, colorize_unit, dimmed, root_icon};
use super::{LabelStyle, OutputConfig, OutputMode};
use crate::analysis::SpanningTree;

/// Print a spanning tree with ASCII/Unicode connectors.
///
/// Renders a tree like:
/// ```text
/// ◆ sshd.service
/// ├── network.target (After)
/// │   └── network-pre.target (After)
/// └── basic.target (Requires)
/// ```
pub fn print_tree(tree: &SpanningTree, mode: OutputMode, labels: LabelStyle) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_tree_text(&mut handle, tree, labels, &config),
        OutputMode::Json => {
            let json = tree_to_json(tree, labels);
            let output = serde_json::to_string_pretty(&json).map_err(io::Error::other)?;
            writeln!(handle, "{output}")
        }
    }
}

/// Render the tree with connectors.
///
/// Walks the arena with an explicit stack so deep trees do not recurse.
/// `segments` holds one continuation flag per ancestor level: `true` where
/// the ancestor still has siblings below and needs a `│` drawn. It is cut
/// back to the depth of each popped node.
pub(crate) fn print_tree_text<W: Write>(
    w: &mut W,
    tree: &SpanningTree,
    labels: LabelStyle,
    config: &OutputConfig,
) -> io::Result<()> {
    let (branch, corner, pipe, space) = if config.use_ascii {
        ("|-- ", "`-- ", "|   ", "    ")
    } else {
        ("├── ", "└── ", "│   ", "    ")
    };

    let root = tree.root();
    writeln!(
        w,
        "{} {}",
        root_icon(config),
        colorize_unit(&labels.apply(&root.id), config)
    )?;

    let mut segments: Vec<bool> = Vec::new();
    let mut stack: Vec<(usize, usize, bool)> = root
        .children
        .iter()
        .enumerate()
        .rev()
        .map(|(i, &slot)| (slot, 0, i + 1 == root.children.len()))
        .collect();

    while let Some((slot, depth, is_last)) = stack.pop() {
        let Some(node) = tree.node(slot) else {
            continue;
        };
        segments.truncate(depth);

        let mut prefix = String::new();
        for &has_more in &segments {
            prefix.push_str(&dimmed(if has_more { pipe } else { space }, config));
        }
        let connector = dimmed(if is_last { corner } else { branch }, config);
        let relation = node
            .relation
            .as_ref()
            .map(|r| format!(" {}", colorize_relation(r, config)))
            .unwrap_or_default();

        writeln!(
            w,
            "{}{}{}{}",
            prefix,
            connector,
            colorize_unit(&labels.apply(&node.id), config),
            relation
        )?;

        segments.push(!is_last);
        let child_count = node.children.len();
        for (i, &child) in node.children.iter().enumerate().rev() {
            stack.push((child, depth + 1, i + 1 == child_count));
        }
    }

    Ok(())
}

/// Convert a spanning tree to nested JSON.
///
/// Children always sit after their parent in the arena, so building values
/// from the last slot backwards finds every child already converted.
pub(crate) fn tree_to_json(tree: &SpanningTree, labels: LabelStyle) -> Value {
    let count = tree.node_count();
    let mut built: Vec<Option<Value>> = vec![None; count];

    for slot in (0..count).rev() {
        let Some(node) = tree.node(slot) else {
            continue;
        };
        let children: Vec<Value> = node
            .children
            .iter()
            .filter_map(|&child| built.get_mut(child).and_then(Option::take))
            .collect();

        let mut obj = json!({
            "id": labels.apply(&node.id),
        });
        if let Some(relation) = &node.relation {
            obj["relation"] = json!(relation);
        }
        obj["children"] = Value::Array(children);

        if let Some(entry) = built.get_mut(slot) {
            *entry = Some(obj);
        }
    }

    built
        .into_iter()
        .next()
        .flatten()
        .unwrap_or(Value::Null)
}
