//! `gk nav` command implementation.

use std::collections::BTreeMap;
use std::io::{self, Write};

use clap::Args;
use gk_config::CliSettings;
use gk_sidebar::{Located, NavigationEntry, SidebarTree, Target, doc_route};

use super::{Site, SiteArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Only print this sidebar.
    #[arg(long)]
    sidebar: Option<String>,

    /// Print the navigation tree as JSON.
    #[arg(long)]
    json: bool,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site fails to load, the sidebar does not exist
    /// or writing to stdout fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load(CliSettings::default())?;
        let trees = select(&site, self.sidebar.as_deref())?;
        let route_base_path = &site.config.docs().route_base_path;

        let mut stdout = io::stdout().lock();
        if self.json {
            let nav: BTreeMap<&str, _> = trees
                .iter()
                .map(|tree| (tree.name(), tree.nav_items(route_base_path)))
                .collect();
            serde_json::to_writer_pretty(&mut stdout, &nav)?;
            writeln!(stdout)?;
        } else {
            for tree in &trees {
                output.highlight(tree.name());
                stdout.write_all(outline(tree, route_base_path).as_bytes())?;
            }
        }
        Ok(())
    }
}

fn select<'a>(site: &'a Site, name: Option<&str>) -> Result<Vec<&'a SidebarTree>, CliError> {
    let Some(name) = name else {
        return Ok(site.sidebars.iter().collect());
    };
    site.sidebars
        .get(name)
        .map(|tree| vec![tree])
        .ok_or_else(|| CliError::UnknownSidebar {
            name: name.to_owned(),
            available: site.sidebars.names().collect::<Vec<_>>().join(", "),
        })
}

/// Indented outline of a tree, one entry per line.
fn outline(tree: &SidebarTree, route_base_path: &str) -> String {
    let mut out = String::new();
    for Located { depth, entry, .. } in tree.located() {
        let indent = "  ".repeat(depth);
        let line = match entry {
            NavigationEntry::Category { label, .. } => format!("{indent}{label}/"),
            NavigationEntry::Link {
                label,
                target: Target::Doc(id),
            } => format!("{indent}{label} -> {}", doc_route(route_base_path, id)),
            NavigationEntry::Link {
                label,
                target: Target::Href(href),
            } => format!("{indent}{label} -> {href}"),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_outline() {
        let tree = SidebarTree::new(
            "docs",
            vec![
                NavigationEntry::doc("intro", "Overview"),
                NavigationEntry::category(
                    "Utilities",
                    vec![
                        NavigationEntry::doc_id("utilities/index"),
                        NavigationEntry::href("https://example.com", "External"),
                    ],
                ),
            ],
        );
        assert_eq!(
            outline(&tree, "/"),
            "Overview -> /intro\n\
             Utilities/\n  \
             Utilities -> /utilities\n  \
             External -> https://example.com\n"
        );
    }
}
