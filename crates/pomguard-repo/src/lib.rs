//! Manifest adapters: read a `pom.xml`, build the node arena, and run structural queries.
//!
//! This crate is allowed to do filesystem IO (a single read per manifest). Everything after the
//! read is pure and operates on an owned [`ManifestTree`].

#![forbid(unsafe_code)]

mod error;
mod parse;
mod query;
mod tree;

use camino::Utf8Path;
use pomguard_domain::VersionNode;
use pomguard_types::{Coordinate, CoordinateReconstructionError};

pub use error::{ParseError, QueryExecutionError};
pub use parse::parse_manifest;
pub use query::{
    DEPENDENCY_MANAGEMENT_PREFIX, DEPENDENCY_VERSION_LOC, PROFILE_PREFIX, PROJECT_PREFIX,
    StructuralQuery, section_query_expr,
};
pub use tree::{ManifestTree, Node, NodeId};

/// Read and parse a manifest from disk.
///
/// Only UTF-8 input is supported; a leading byte order mark is ignored.
pub fn load_manifest(path: &Utf8Path) -> Result<ManifestTree, ParseError> {
    let bytes = std::fs::read(path).map_err(|source| ParseError::Read {
        path: path.to_owned(),
        source,
    })?;
    let text = std::str::from_utf8(&bytes).map_err(|source| ParseError::Encoding {
        path: path.to_owned(),
        source,
    })?;
    parse_manifest(text.strip_prefix('\u{feff}').unwrap_or(text))
}

impl VersionNode for Node<'_> {
    fn version_text(&self) -> String {
        self.text_content()
    }

    fn coordinate(&self) -> Result<Coordinate, CoordinateReconstructionError> {
        let parent = self
            .parent()
            .ok_or(CoordinateReconstructionError::MissingParent)?;
        let field = |name: &'static str| {
            parent
                .first_child_named(name)
                .map(|n| n.text_content().trim().to_string())
                .filter(|text| !text.is_empty())
                .ok_or_else(|| CoordinateReconstructionError::MissingField {
                    parent: parent.tag_name().unwrap_or_default().to_string(),
                    field: name,
                })
        };

        Ok(Coordinate {
            group_id: field("groupId")?,
            artifact_id: field("artifactId")?,
            version: self.text_content().trim().to_string(),
        })
    }
}
