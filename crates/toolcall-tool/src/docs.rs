//! Documentation index.
//!
//! This module parses a tool's plain-text documentation source into a
//! queryable index of per-method docstrings and `@param` annotations.
//!
//! Expected format: blocks separated by blank lines. The first line of a
//! block is a qualified title such as `Weather#execute`; subsequent plain
//! lines form the docstring; lines starting with `@` declare tags, e.g.
//! `@param city the city name`. Malformed lines are skipped, never fatal.

use std::collections::HashMap;
use toolcall_core::Tool;
use tracing::warn;

/// A single `@tag name text` annotation attached to a method doc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamTag {
    /// Tag name without the leading `@`, e.g. `param`.
    pub tag: String,
    /// Name the tag refers to, e.g. a parameter name.
    pub name: String,
    /// Free text after the name.
    pub text: String,
}

/// Documentation for one callable method.
#[derive(Debug, Clone)]
pub struct MethodDoc {
    /// Qualified title, e.g. `Weather#execute`.
    pub title: String,
    pub docstring: String,
    pub param_tags: Vec<ParamTag>,
}

/// Queryable index of per-method documentation, keyed by qualified title.
#[derive(Debug, Clone, Default)]
pub struct DocIndex {
    entries: HashMap<String, MethodDoc>,
}

impl DocIndex {
    /// Builds the index for a tool from its documentation source.
    ///
    /// Tools without documentation yield an empty index; every lookup then
    /// misses, which callers treat as a degraded (not fatal) outcome.
    pub fn build_for<T: Tool + ?Sized>(tool: &T) -> Self {
        match tool.docs() {
            Some(source) => Self::parse(source),
            None => Self::default(),
        }
    }

    /// Parses a documentation source. Never fails; malformed blocks and tag
    /// lines are skipped with a warning.
    pub fn parse(source: &str) -> Self {
        let mut entries = HashMap::new();

        for block in split_blocks(source) {
            let title = block[0].trim();
            if !title.contains('#') {
                warn!(title, "Skipping documentation block without a qualified title");
                continue;
            }

            let mut docstring_lines = Vec::new();
            let mut param_tags = Vec::new();
            for line in &block[1..] {
                let line = line.trim();
                if let Some(rest) = line.strip_prefix('@') {
                    match parse_tag(rest) {
                        Some(tag) => param_tags.push(tag),
                        None => warn!(title, line = rest, "Skipping malformed tag line"),
                    }
                } else {
                    docstring_lines.push(line);
                }
            }

            if entries.contains_key(title) {
                warn!(title, "Duplicate documentation title, keeping first entry");
                continue;
            }
            entries.insert(
                title.to_string(),
                MethodDoc {
                    title: title.to_string(),
                    docstring: docstring_lines.join("\n"),
                    param_tags,
                },
            );
        }

        Self { entries }
    }

    /// Looks up the doc whose title equals `"{type_name}#{method}"`.
    pub fn method_doc(&self, type_name: &str, method: &str) -> Option<&MethodDoc> {
        self.entries.get(&format!("{type_name}#{method}"))
    }

    /// Looks up the `@param` tag for a parameter of a method.
    pub fn param_tag(&self, type_name: &str, method: &str, param: &str) -> Option<&ParamTag> {
        self.method_doc(type_name, method)?
            .param_tags
            .iter()
            .find(|t| t.tag == "param" && t.name == param)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Groups non-empty lines into blocks separated by blank lines.
fn split_blocks(source: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in source.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Parses `tag name text...` (the part after `@`). Requires a tag and a name.
fn parse_tag(rest: &str) -> Option<ParamTag> {
    let mut words = rest.split_whitespace();
    let tag = words.next()?;
    let name = words.next()?;
    let text = words.collect::<Vec<_>>().join(" ");
    Some(ParamTag {
        tag: tag.to_string(),
        name: name.to_string(),
        text,
    })
}
