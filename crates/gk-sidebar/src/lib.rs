//! Sidebar navigation trees for guidekit.
//!
//! This crate provides:
//! - [`NavigationEntry`]: a link or a category of further entries
//! - [`SidebarTree`]: immutable tree with pre-order traversal and validation
//! - [`Sidebars`]: named trees loaded from `sidebars.toml`
//! - [`NavItem`]: serializable navigation tree for the site generator
//!
//! # Quick Start
//!
//! ```
//! use gk_sidebar::{NavigationEntry, SidebarTree};
//!
//! let tree = SidebarTree::new(
//!     "docs",
//!     vec![
//!         NavigationEntry::doc("intro", "Overview"),
//!         NavigationEntry::category("Guides", vec![NavigationEntry::doc_id("guides/setup")]),
//!     ],
//! );
//! tree.validate()?;
//!
//! let outline: Vec<_> = tree.iter().map(|(depth, e)| (depth, e.label())).collect();
//! assert_eq!(outline, vec![(0, "Overview"), (0, "Guides"), (1, "Setup")]);
//! # Ok::<(), gk_sidebar::MalformedTreeError>(())
//! ```

mod entry;
mod error;
mod sidebars;
mod tree;

pub use entry::{NavigationEntry, Target, label_from_id};
pub use error::{MalformedKind, MalformedTreeError, SidebarError};
pub use sidebars::Sidebars;
pub use tree::{DuplicateLabel, Located, NavItem, SidebarTree, Traverse, doc_route};
