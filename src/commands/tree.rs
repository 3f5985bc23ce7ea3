//! # Tree Command Implementation
//!
//! Prints the navigation of a docs config as a tree: groups as branches,
//! pages as leaves. `--depth` cuts the tree off below a given group depth.
//!
//! This command is read-only.

use anyhow::Result;
use clap::Args;
use ptree::{print_tree, TreeItem};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

use docs_merge::defaults::DOCS_CONFIG_FILE;
use docs_merge::document::DocsConfig;
use docs_merge::navigation::{NavigationEntry, NavigationGroup};
use docs_merge::output::{emoji, OutputConfig};
use docs_merge::suggestions;

/// Show the navigation of a docs config as a tree
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Docs config to display.
    #[arg(short, long, value_name = "FILE", default_value = DOCS_CONFIG_FILE)]
    pub config: PathBuf,

    /// Maximum group depth to display.
    ///
    /// 0 shows only the top-level groups, 1 also shows what they contain, etc.
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,
}

/// Execute the `tree` command.
pub fn execute(args: TreeArgs, out: &OutputConfig) -> Result<()> {
    if !args.config.is_file() {
        return Err(suggestions::docs_config_not_found(&args.config));
    }
    let document = DocsConfig::from_file(&args.config)?;

    println!(
        "{} Navigation of {} ({} pages)",
        emoji(out, "🌳", "[TREE]"),
        args.config.display(),
        document.page_count()
    );

    let root = build_tree(&document, &args.config, args.depth.unwrap_or(usize::MAX), out);
    print_tree(&root).map_err(|e| anyhow::anyhow!("Failed to display tree: {}", e))?;
    Ok(())
}

fn build_tree(
    document: &DocsConfig,
    path: &Path,
    max_depth: usize,
    out: &OutputConfig,
) -> TreeNode {
    let label = document
        .field("name")
        .and_then(|name| name.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string());

    TreeNode {
        label,
        children: document
            .navigation()
            .iter()
            .map(|group| group_node(group, max_depth, 0, out))
            .collect(),
    }
}

fn group_node(group: &NavigationGroup, max_depth: usize, depth: usize, out: &OutputConfig) -> TreeNode {
    let children = if depth >= max_depth {
        vec![]
    } else {
        group
            .pages
            .iter()
            .map(|entry| match entry {
                NavigationEntry::Page(path) => TreeNode {
                    label: path.clone(),
                    children: vec![],
                },
                NavigationEntry::Group(nested) => group_node(nested, max_depth, depth + 1, out),
            })
            .collect()
    };

    TreeNode {
        label: out.group_label(&group.group),
        children,
    }
}

/// Tree node structure for ptree visualization
#[derive(Clone)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: std::io::Write>(&self, f: &mut W, _style: &ptree::Style) -> std::io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        Cow::Borrowed(&self.children)
    }
}
