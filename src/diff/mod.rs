//! Structural diff engine
//!
//! Walks two configuration trees in lock-step, recording changed paths into
//! a [`ChangeReport`]. An attribute change at a level marks that level as
//! changed and, by default, skips block comparison beneath it. Block
//! matching is pluggable: strict positional pairing (the historical
//! behavior) or identity-keyed pairing on `(type, labels)`.

pub mod attributes;
pub mod report;

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::diff::attributes::diff_attributes;
use crate::diff::report::ChangeReport;
use crate::model::{ConfigBlock, ConfigTree};

/// Policy for pairing blocks across the two trees.
///
/// Both the CLI (`--match-by`, via `clap::ValueEnum`) and the TOML config
/// accept the same kebab-case spellings: `positional` and `by-identity`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BlockMatching {
    /// Pair by sequence position. Preserves the historical semantics: a
    /// mid-sequence insertion shifts every later pairing and can cascade
    /// into several reported changes instead of one addition.
    #[default]
    Positional,
    /// Pair the n-th occurrence of each `(type, labels)` identity with the
    /// n-th occurrence on the other side. Insertions and deletions show up
    /// as single additions/removals.
    ByIdentity,
}

/// Tuning knobs for one comparison run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    pub matching: BlockMatching,
    /// An attribute change normally marks the level as changed and skips
    /// nested block comparison below it, so changes under such a level go
    /// unreported. Set this to keep descending anyway; the level itself
    /// still compares unequal.
    pub descend_past_attribute_changes: bool,
}

/// The recursive comparison engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeDiffer {
    options: DiffOptions,
}

impl TreeDiffer {
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    /// Compare two trees, producing the report of changed paths.
    pub fn diff(&self, original: &ConfigTree, modified: &ConfigTree) -> ChangeReport {
        let mut report = ChangeReport::new();
        self.diff_into(original, modified, &mut report);
        report
    }

    /// Compare two trees into an existing report (which may already carry
    /// aggregation diagnostics). Returns true when the trees are equal.
    pub fn diff_into(
        &self,
        original: &ConfigTree,
        modified: &ConfigTree,
        report: &mut ChangeReport,
    ) -> bool {
        self.diff_body(original, modified, &[], report)
    }

    /// Compare one level at `path`. Returns true when the subtrees are equal.
    fn diff_body(
        &self,
        original: &ConfigTree,
        modified: &ConfigTree,
        path: &[String],
        report: &mut ChangeReport,
    ) -> bool {
        let joined = path.join("/");
        let attr_diff = diff_attributes(
            &original.attributes,
            &modified.attributes,
            &joined,
            &mut report.diagnostics,
        );
        if attr_diff.has_changes() {
            report.record_attributes(joined, attr_diff);
            if self.options.descend_past_attribute_changes {
                self.diff_blocks(&original.blocks, &modified.blocks, path, report);
            }
            return false;
        }
        self.diff_blocks(&original.blocks, &modified.blocks, path, report)
    }

    fn diff_blocks(
        &self,
        original: &[ConfigBlock],
        modified: &[ConfigBlock],
        path: &[String],
        report: &mut ChangeReport,
    ) -> bool {
        match self.options.matching {
            BlockMatching::Positional => {
                self.diff_blocks_positional(original, modified, path, report)
            }
            BlockMatching::ByIdentity => {
                self.diff_blocks_by_identity(original, modified, path, report)
            }
        }
    }

    fn diff_blocks_positional(
        &self,
        original: &[ConfigBlock],
        modified: &[ConfigBlock],
        path: &[String],
        report: &mut ChangeReport,
    ) -> bool {
        let mut equal = true;
        let paired = original.len().min(modified.len());

        for i in 0..paired {
            if !self.diff_block_pair(&original[i], &modified[i], path, report) {
                equal = false;
            }
        }

        // Unequal sequence lengths: surplus blocks on either side are
        // unconditional additions/removals at this level.
        for surplus in original[paired..].iter().chain(modified[paired..].iter()) {
            report.add(join_segment(path, &surplus.path_segment()));
            equal = false;
        }

        equal
    }

    /// Compare one paired block. Type mismatch wins over label mismatch,
    /// which wins over body comparison; descent stops at the first
    /// mismatch. Recorded paths are named after the original block.
    fn diff_block_pair(
        &self,
        original: &ConfigBlock,
        modified: &ConfigBlock,
        path: &[String],
        report: &mut ChangeReport,
    ) -> bool {
        let mut extended = path.to_vec();
        extended.push(original.path_segment());

        if original.block_type != modified.block_type {
            report.add(extended.join("/"));
            return false;
        }
        // Equal length and equal values required.
        if original.labels != modified.labels {
            report.add(extended.join("/"));
            return false;
        }

        self.diff_body(&original.body, &modified.body, &extended, report)
    }

    fn diff_blocks_by_identity(
        &self,
        original: &[ConfigBlock],
        modified: &[ConfigBlock],
        path: &[String],
        report: &mut ChangeReport,
    ) -> bool {
        type Identity = (String, Vec<String>);
        let mut groups: BTreeMap<Identity, (Vec<&ConfigBlock>, Vec<&ConfigBlock>)> =
            BTreeMap::new();
        for block in original {
            let identity = (block.block_type.clone(), block.labels.clone());
            groups.entry(identity).or_default().0.push(block);
        }
        for block in modified {
            let identity = (block.block_type.clone(), block.labels.clone());
            groups.entry(identity).or_default().1.push(block);
        }

        let mut equal = true;
        for (originals, modifieds) in groups.values() {
            let paired = originals.len().min(modifieds.len());
            for i in 0..paired {
                let mut extended = path.to_vec();
                extended.push(originals[i].path_segment());
                if !self.diff_body(&originals[i].body, &modifieds[i].body, &extended, report) {
                    equal = false;
                }
            }
            for surplus in originals[paired..].iter().chain(modifieds[paired..].iter()) {
                report.add(join_segment(path, &surplus.path_segment()));
                equal = false;
            }
        }

        equal
    }
}

fn join_segment(path: &[String], segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{}/{}", path.join("/"), segment)
    }
}
