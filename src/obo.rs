//! Conversion of ontology graphs into namespaces.
//!
//! Reading OBO files is left to an external parser; this module accepts the
//! resulting graph (or its JSON export) and writes it out as a namespace.

use std::collections::BTreeMap;
use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::resource::OBO_ANNOTATION_ENCODING;
use crate::error::{Error, Result};
use crate::writers::{write_namespace, NamespaceOptions};

/// One term of an ontology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OboNode {
    /// CURIE such as `DOID:1234`.
    pub id: String,
    /// Human-readable term name.
    #[serde(default)]
    pub name: Option<String>,
}

/// An ontology graph as produced by an OBO reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OboGraph {
    /// Ontology title.
    pub name: String,
    /// Ontology prefix, e.g. `doid`.
    pub ontology: String,
    /// Release identifier.
    #[serde(rename = "data-version", alias = "data_version")]
    pub data_version: String,
    /// Terms of the ontology.
    #[serde(default)]
    pub nodes: Vec<OboNode>,
}

impl OboGraph {
    /// Read a graph from its JSON export.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::invalid("<obo graph>", e.to_string()))
    }

    fn prefix(&self) -> String {
        format!("{}:", self.ontology.to_uppercase())
    }

    /// Terms whose identifier starts with the upper-cased ontology prefix.
    pub fn own_terms(&self) -> impl Iterator<Item = &OboNode> {
        let prefix = self.prefix();
        self.nodes.iter().filter(move |n| n.id.starts_with(&prefix))
    }

    /// Identifier of a term with the ontology prefix removed.
    pub fn local_id<'n>(&self, node: &'n OboNode) -> &'n str {
        node.id.strip_prefix(&self.prefix()).unwrap_or(&node.id)
    }
}

/// How each term is encoded in the written namespace.
pub enum Encoding<'a> {
    /// Same encoding for every term; empty means the writer's default.
    Fixed(String),
    /// Encoding computed per term.
    PerTerm(Box<dyn Fn(&OboGraph, &OboNode) -> String + 'a>),
}

impl Default for Encoding<'_> {
    fn default() -> Self {
        Self::Fixed(String::new())
    }
}

impl Encoding<'_> {
    fn encode(&self, graph: &OboGraph, node: &OboNode) -> String {
        match self {
            Self::Fixed(encoding) => encoding.clone(),
            Self::PerTerm(f) => f(graph, node),
        }
    }
}

/// How each term is named in the written namespace.
#[derive(Default)]
pub enum TermKey<'a> {
    /// The term identifier as-is.
    #[default]
    Identifier,
    /// The term's name; terms without one are skipped.
    Name,
    /// The identifier passed through a caller transform.
    Transformed(Box<dyn Fn(&str) -> String + 'a>),
}

/// Settings for [`convert_obo_graph_to_belns`].
#[derive(Default)]
pub struct OboNamespaceOptions<'a> {
    /// Value naming.
    pub key: TermKey<'a>,
    /// Value encoding.
    pub encoding: Encoding<'a>,
}

fn namespace_options(graph: &OboGraph) -> NamespaceOptions {
    let mut options = NamespaceOptions::new(graph.name.clone(), graph.ontology.clone());
    options.version = Some(graph.data_version.clone());
    options
}

/// Write an ontology graph as a namespace.
pub fn convert_obo_graph_to_belns<W: Write>(
    out: &mut W,
    graph: &OboGraph,
    options: &OboNamespaceOptions<'_>,
) -> Result<()> {
    let mut values = BTreeMap::new();
    for node in graph.own_terms() {
        let key = match &options.key {
            TermKey::Identifier => node.id.clone(),
            TermKey::Name => {
                let Some(name) = &node.name else {
                    warn!("Skipping {} without a name", node.id);
                    continue;
                };
                name.clone()
            }
            TermKey::Transformed(f) => f(&node.id),
        };
        values.insert(key, options.encoding.encode(graph, node));
    }

    write_namespace(out, &values, &namespace_options(graph))
}

/// Write an ontology graph as an annotation-style namespace: local
/// identifiers (prefix removed) encoded as `P`.
pub fn convert_obo_graph_to_belanno<W: Write>(out: &mut W, graph: &OboGraph) -> Result<()> {
    let values: BTreeMap<String, String> = graph
        .own_terms()
        .map(|n| (graph.local_id(n).to_string(), OBO_ANNOTATION_ENCODING.to_string()))
        .collect();

    write_namespace(out, &values, &namespace_options(graph))
}
