//! Annotation classification and argument parsing.
//!
//! Attributes are turned into typed [`Annotation`] values the moment they are
//! discovered; nothing downstream looks at raw arguments again.

use getters_ir::{AttributeArgument, AttributeNode, Diagnostic, Location};

use crate::codes;
use crate::config::GeneratorConfig;

// ── Marker kinds ────────────────────────────────────────────────────

/// Which recognized marker an attribute is, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Group,
    Override,
    Requirement,
}

/// Classify an attribute name against the configured markers.
///
/// `Ns.RequireComponentAttribute` and `RequireComponent` both match a
/// `RequireComponent` marker.
pub fn marker_kind(attr_name: &str, config: &GeneratorConfig) -> Option<MarkerKind> {
    let simple = marker_simple_name(attr_name);
    if simple == config.group_marker {
        Some(MarkerKind::Group)
    } else if simple == config.override_marker {
        Some(MarkerKind::Override)
    } else if simple == config.requirement_marker {
        Some(MarkerKind::Requirement)
    } else {
        None
    }
}

fn marker_simple_name(attr_name: &str) -> &str {
    let last = attr_name.rsplit('.').next().unwrap_or(attr_name).trim();
    match last.strip_suffix("Attribute") {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => last,
    }
}

// ── Annotations ─────────────────────────────────────────────────────

/// Group marker: generate default accessors for every required type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMarker {
    pub visibility: String,
}

/// Single override: custom accessor name/visibility for one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleOverride {
    pub ty: String,
    pub name: String,
    pub visibility: String,
    /// Where the override was declared.
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    GroupMarker(GroupMarker),
    SingleOverride(SingleOverride),
}

/// Parse an attribute into an [`Annotation`].
///
/// Returns `None` for attributes that are not group or override markers.
/// A malformed override yields every diagnostic it triggers.
pub fn parse_annotation(
    attr: &AttributeNode,
    config: &GeneratorConfig,
) -> Option<Result<Annotation, Vec<Diagnostic>>> {
    match marker_kind(&attr.name, config)? {
        MarkerKind::Group => Some(Ok(Annotation::GroupMarker(parse_group_marker(attr, config)))),
        MarkerKind::Override => Some(parse_override(attr, config).map(Annotation::SingleOverride)),
        MarkerKind::Requirement => None,
    }
}

/// `[Group(visibility = "public")]`
pub fn parse_group_marker(attr: &AttributeNode, config: &GeneratorConfig) -> GroupMarker {
    GroupMarker {
        visibility: visibility_argument(attr, 0, config),
    }
}

/// `[Override(type, name, visibility = "public")]`
pub fn parse_override(
    attr: &AttributeNode,
    config: &GeneratorConfig,
) -> Result<SingleOverride, Vec<Diagnostic>> {
    let mut diagnostics = Vec::new();
    let source = attr_source(attr);

    let ty = argument(attr, "type", 0).and_then(|a| a.expr.as_type());
    if ty.is_none() {
        diagnostics.push(Diagnostic::error(
            codes::MALFORMED_TYPE_ARGUMENT,
            format!("Type argument must be a typeof() expression: {}", source),
            attr.location.clone(),
        ));
    }

    let name = argument(attr, "name", 1).and_then(|a| a.expr.as_str_literal());
    if name.is_none() {
        diagnostics.push(Diagnostic::error(
            codes::MALFORMED_NAME_ARGUMENT,
            format!("Name argument must be a literal string: {}", source),
            attr.location.clone(),
        ));
    }

    match (ty, name) {
        (Some(ty), Some(name)) => Ok(SingleOverride {
            ty: ty.to_string(),
            name: name.to_string(),
            visibility: visibility_argument(attr, 2, config),
            location: attr.location.clone(),
        }),
        _ => Err(diagnostics),
    }
}

/// Types named by a requirement marker. Operands that are not direct type
/// references are skipped.
pub fn requirement_types(attr: &AttributeNode) -> impl Iterator<Item = &str> {
    attr.arguments.iter().filter_map(|a| a.expr.as_type())
}

fn visibility_argument(attr: &AttributeNode, index: usize, config: &GeneratorConfig) -> String {
    argument(attr, "visibility", index)
        .and_then(|a| a.expr.as_str_literal())
        .unwrap_or(&config.default_visibility)
        .to_string()
}

/// Find an argument by parameter name, then by position.
///
/// Positional arguments always precede named ones, so a slot is only filled
/// by an unnamed argument.
fn argument<'a>(attr: &'a AttributeNode, name: &str, index: usize) -> Option<&'a AttributeArgument> {
    attr.arguments
        .iter()
        .find(|a| a.name.as_deref() == Some(name))
        .or_else(|| attr.arguments.get(index).filter(|a| a.name.is_none()))
}

fn attr_source(attr: &AttributeNode) -> &str {
    if attr.text.is_empty() {
        &attr.name
    } else {
        &attr.text
    }
}
