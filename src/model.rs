//! In-memory configuration tree model
//!
//! The parsed, aggregated representation the differ walks: named attribute
//! expressions plus an ordered list of nested blocks. Comments and layout
//! never make it into this model, which is what makes the comparison
//! formatting-insensitive.

use std::collections::BTreeMap;
use std::path::Path;

use hcl::{Block, Body, Expression};

use crate::diff::report::Diagnostic;

/// Name-keyed attribute expressions within one structural level.
///
/// A `BTreeMap` keeps iteration order deterministic, so aggregating the
/// same source units twice yields identical trees.
pub type AttributeSet = BTreeMap<String, Expression>;

/// One level of the logical configuration tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigTree {
    /// Named leaf values at this level
    pub attributes: AttributeSet,
    /// Nested blocks in source order. Order matters: the positional matcher
    /// pairs blocks by index.
    pub blocks: Vec<ConfigBlock>,
}

/// A typed, optionally labeled structural unit owning a nested tree.
///
/// Identity for diff purposes is `(block_type, labels)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigBlock {
    pub block_type: String,
    pub labels: Vec<String>,
    pub body: ConfigTree,
}

impl ConfigTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert one parsed `hcl::Body` into a tree level.
    ///
    /// Duplicate attribute names within a level resolve first-wins and are
    /// recorded as diagnostics, not errors.
    pub fn from_body(body: &Body, file: &Path, diagnostics: &mut Vec<Diagnostic>) -> Self {
        let mut tree = ConfigTree::new();
        tree.absorb(body, file, diagnostics);
        tree
    }

    /// Merge one parsed body into this level: first-wins on attribute
    /// names, blocks appended in order.
    pub(crate) fn absorb(&mut self, body: &Body, file: &Path, diagnostics: &mut Vec<Diagnostic>) {
        for attr in body.attributes() {
            let name = attr.key.as_str();
            if self.attributes.contains_key(name) {
                diagnostics.push(Diagnostic::DuplicateAttribute {
                    name: name.to_string(),
                    file: file.to_path_buf(),
                });
            } else {
                self.attributes.insert(name.to_string(), attr.expr.clone());
            }
        }
        for block in body.blocks() {
            self.blocks.push(ConfigBlock::from_block(block, file, diagnostics));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.blocks.is_empty()
    }
}

impl ConfigBlock {
    fn from_block(block: &Block, file: &Path, diagnostics: &mut Vec<Diagnostic>) -> Self {
        Self {
            block_type: block.identifier.as_str().to_string(),
            labels: block.labels.iter().map(|l| l.as_str().to_string()).collect(),
            body: ConfigTree::from_body(&block.body, file, diagnostics),
        }
    }

    /// Path segment identifying this block: `type` or `type.label1.label2…`
    pub fn path_segment(&self) -> String {
        if self.labels.is_empty() {
            self.block_type.clone()
        } else {
            format!("{}.{}", self.block_type, self.labels.join("."))
        }
    }
}
