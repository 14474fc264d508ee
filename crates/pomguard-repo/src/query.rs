//! Absolute tag-path queries over a [`ManifestTree`].

use crate::error::QueryExecutionError;
use crate::tree::{ManifestTree, Node};
use pomguard_domain::Section;
use std::fmt;

pub const PROJECT_PREFIX: &str = "/project";
pub const PROFILE_PREFIX: &str = "/profiles/profile";
pub const DEPENDENCY_MANAGEMENT_PREFIX: &str = "/dependencyManagement";
pub const DEPENDENCY_VERSION_LOC: &str = "/dependencies/dependency/version";

/// Build the version query for one manifest section.
pub fn section_query_expr(section: Section) -> String {
    let mut expr = String::from(PROJECT_PREFIX);
    if section.in_profile() {
        expr.push_str(PROFILE_PREFIX);
    }
    if section.is_managed() {
        expr.push_str(DEPENDENCY_MANAGEMENT_PREFIX);
    }
    expr.push_str(DEPENDENCY_VERSION_LOC);
    expr
}

/// A chain of tag names, e.g. `/project/dependencies/dependency/version`.
///
/// No wildcards, predicates, axes, or attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuralQuery {
    expr: String,
    segments: Vec<String>,
}

impl StructuralQuery {
    pub fn parse(expr: &str) -> Result<Self, QueryExecutionError> {
        let Some(rest) = expr.strip_prefix('/') else {
            return Err(QueryExecutionError::NotAbsolute {
                expr: expr.to_string(),
            });
        };

        let mut segments = Vec::new();
        for (position, segment) in rest.split('/').enumerate() {
            if segment.is_empty() {
                return Err(QueryExecutionError::EmptySegment {
                    expr: expr.to_string(),
                    position,
                });
            }
            if !is_tag_name(segment) {
                return Err(QueryExecutionError::UnsupportedSegment {
                    expr: expr.to_string(),
                    segment: segment.to_string(),
                });
            }
            segments.push(segment.to_string());
        }

        Ok(Self {
            expr: expr.to_string(),
            segments,
        })
    }

    pub fn for_section(section: Section) -> Result<Self, QueryExecutionError> {
        Self::parse(&section_query_expr(section))
    }

    pub fn as_str(&self) -> &str {
        &self.expr
    }

    /// Matching elements in document order. No match is an empty vector.
    pub fn select<'a>(&self, tree: &'a ManifestTree) -> Vec<Node<'a>> {
        let root = tree.root();
        let Some((first, rest)) = self.segments.split_first() else {
            return Vec::new();
        };
        if root.tag_name() != Some(first.as_str()) {
            return Vec::new();
        }

        let mut current = vec![root];
        for segment in rest {
            current = current
                .into_iter()
                .flat_map(|node| node.children_named(segment))
                .collect();
            if current.is_empty() {
                break;
            }
        }
        current
    }
}

impl fmt::Display for StructuralQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr)
    }
}

fn is_tag_name(segment: &str) -> bool {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
}
