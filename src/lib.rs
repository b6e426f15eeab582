//! tfdelta - semantic diff for Terraform/HCL configuration trees
//!
//! tfdelta aggregates the `.tf` files of two configuration snapshots into
//! two logical trees and reports the set of paths at which they actually
//! differ, ignoring formatting and comment changes. Concrete-syntax parsing
//! is delegated to hcl-rs; this crate only ever sees the typed tree.

pub mod aggregate;
pub mod compare;
pub mod config;
pub mod diff;
pub mod discover;
pub mod error;
pub mod model;
pub mod render;
pub mod value;

// Re-exports for convenience
pub use aggregate::{aggregate, SourceUnit};
pub use compare::compare_paths;
pub use config::Config;
pub use diff::report::{ChangeReport, Diagnostic};
pub use diff::{BlockMatching, DiffOptions, TreeDiffer};
pub use error::{TfDeltaError, TfDeltaResult};
pub use model::{AttributeSet, ConfigBlock, ConfigTree};
pub use render::render_report;
pub use value::{exprs_equal, LeafValue};
