//! prettymark CLI - annotated structure view for markup fragments
//!
//! Usage:
//!   prettymark <file>             Parse and display the annotated tree
//!   prettymark <file> --json      Output the presentation tree as JSON
//!   prettymark <file> --plain     Uncolored indented output
//!   prettymark <file> --stats     Show node-kind statistics
//!
//! Examples:
//!   prettymark res/snippet.html
//!   prettymark --html '<div class="a">hi</div>'
//!   prettymark --html '<p>unclosed' --json

use std::collections::BTreeMap;
use std::fs;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use prettymark_common::warning::clear_warnings;
use prettymark_dom::Node;
use prettymark_parser::parse;
use prettymark_view::{ViewNode, pretty_print, render_plain};

/// prettymark — tolerant markup pretty-printer
#[derive(Parser, Debug)]
#[command(name = "prettymark")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Format a file
    prettymark snippet.html

    # Format inline markup
    prettymark --html '<div class="a">hi</div>'

    # Presentation tree as JSON
    prettymark --html '<br>' --json

    # Node-kind statistics
    prettymark snippet.html --stats
"#)]
struct Cli {
    /// Path to a markup file to format
    #[arg(value_name = "FILE")]
    path: Option<String>,

    /// Format a markup string directly instead of a file
    #[arg(long, value_name = "MARKUP")]
    html: Option<String>,

    /// Output the presentation tree as JSON
    #[arg(short, long)]
    json: bool,

    /// Uncolored indented output
    #[arg(long)]
    plain: bool,

    /// Print node-kind statistics for the parsed tree
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = match (&cli.html, &cli.path) {
        (Some(markup), _) => markup.clone(),
        (None, Some(path)) => {
            fs::read_to_string(path).with_context(|| format!("failed to read '{path}'"))?
        }
        (None, None) => bail!("provide a FILE argument or --html '<div>...</div>'"),
    };

    // Warnings deduplicate globally; start each invocation fresh.
    clear_warnings();

    let tree = parse(&source);
    let views = pretty_print(&tree);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else if cli.plain {
        print!("{}", render_plain(&views));
    } else {
        print_colored(&views, 0);
    }

    if cli.stats {
        print_stats(&tree);
    }

    Ok(())
}

/// Render the presentation tree with each visual unit styled distinctly:
/// tag names, attribute names, attribute values, comments, and text.
fn print_colored(nodes: &[ViewNode], indent: usize) {
    let prefix = "  ".repeat(indent);
    for node in nodes {
        match node {
            ViewNode::Element(element) => {
                print!("{prefix}<{}", element.open_tag.name.blue().bold());
                for attribute in &element.open_tag.attributes {
                    print!(" {}", attribute.name.yellow());
                    if let Some(value) = &attribute.value {
                        print!("=\"{}\"", value.green());
                    }
                }
                println!(">");
                print_colored(&element.children, indent + 1);
                if let Some(close_tag) = &element.close_tag {
                    println!("{prefix}</{}>", close_tag.name.blue().bold());
                }
            }
            ViewNode::Comment { text } => {
                println!("{prefix}{}", format!("<!--{text}-->").bright_black());
            }
            ViewNode::Text { text } => {
                println!("{prefix}\"{}\"", text.replace('\n', "\\n"));
            }
        }
    }
}

/// Print node-kind counts for the parsed tree.
fn print_stats(tree: &Node) {
    let mut counts = BTreeMap::new();
    count_kinds(tree, &mut counts);

    println!();
    println!("=== Node Kinds ===");
    for (kind, count) in &counts {
        println!("{kind}: {count}");
    }
}

fn count_kinds(node: &Node, counts: &mut BTreeMap<String, usize>) {
    *counts.entry(node.to_string()).or_insert(0) += 1;
    for child in node.children() {
        count_kinds(child, counts);
    }
}
