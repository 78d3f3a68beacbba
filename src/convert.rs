//! Conversion between namespace and annotation resources.

use std::collections::BTreeMap;

use crate::constants::resource::ANNOTATION_CONVERSION_ENCODING;
use crate::error::Result;
use crate::resource::parse::BelResource;
use crate::types::NamespaceDomain;
use crate::writers::{AnnotationOptions, NamespaceOptions};

/// Annotation options and values for a parsed namespace.
///
/// Keyword, description, and citation name come from the namespace; every
/// value gets an empty label.
pub fn namespace_to_annotation(
    resource: &BelResource,
) -> Result<(AnnotationOptions, BTreeMap<String, String>)> {
    let mut options = AnnotationOptions::new(
        resource.require("Namespace", "Keyword")?,
        resource.get("Namespace", "DescriptionString").unwrap_or_default(),
    );
    options.citation.name = Some(resource.require("Citation", "NameString")?.to_string());

    let values = resource
        .values
        .keys()
        .map(|k| (k.clone(), String::new()))
        .collect();

    Ok((options, values))
}

/// Namespace options and values for a parsed annotation.
///
/// The namespace keyword defaults to the annotation keyword; the domain is
/// always `Other`. Values without a label are encoded as `O`.
pub fn annotation_to_namespace(
    resource: &BelResource,
    keyword: Option<&str>,
    author: Option<&str>,
) -> Result<(NamespaceOptions, BTreeMap<String, String>)> {
    let annotation_keyword = resource.require("AnnotationDefinition", "Keyword")?;

    let mut options = NamespaceOptions::new(annotation_keyword, keyword.unwrap_or(annotation_keyword));
    options.domain = Some(NamespaceDomain::Other);
    options.description = resource
        .get("AnnotationDefinition", "DescriptionString")
        .map(String::from);
    options.author.name = author.map(String::from);
    options.citation.name = Some(resource.require("Citation", "NameString")?.to_string());

    let values = resource
        .values
        .iter()
        .map(|(k, v)| {
            let encoding = v
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or(ANNOTATION_CONVERSION_ENCODING);
            (k.clone(), encoding.to_string())
        })
        .collect();

    Ok((options, values))
}
