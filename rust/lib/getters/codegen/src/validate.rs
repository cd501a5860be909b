//! Validator — decides, per container, whether generation proceeds.
//!
//! Argument-shape errors are found while parsing annotations. The checks here
//! look at the accessors the container would get and report shapes that
//! would not compile (empty names, clashing members) as warnings. A container
//! with any blocking diagnostic is suppressed as a whole; other containers
//! are unaffected.

use std::collections::HashMap;

use getters_ir::{Diagnostic, Severity};

use crate::codes;
use crate::config::GeneratorConfig;
use crate::container::AnnotatedContainer;
use crate::naming::cache_field_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Generate,
    Suppressed,
}

/// Whether a diagnostic blocks generation under this config.
pub fn is_blocking(diagnostic: &Diagnostic, config: &GeneratorConfig) -> bool {
    match diagnostic.severity {
        Severity::Error => true,
        Severity::Warning => config.warnings_as_errors,
    }
}

pub fn has_blocking(container: &AnnotatedContainer<'_>, config: &GeneratorConfig) -> bool {
    container.diagnostics.iter().any(|d| is_blocking(d, config))
}

/// Validate a finished container. Passing containers get override precedence
/// applied and their accessors checked; suppressed ones are left as they are.
pub fn validate(container: &mut AnnotatedContainer<'_>, config: &GeneratorConfig) -> Verdict {
    if has_blocking(container, config) {
        return Verdict::Suppressed;
    }
    container.apply_override_precedence();

    let findings = check_accessors(container);
    container.diagnostics.extend(findings);
    if has_blocking(container, config) {
        return Verdict::Suppressed;
    }
    Verdict::Generate
}

/// Warnings for accessors that would not compile: an empty override name,
/// or two accessors sharing a property or cache field name.
pub fn check_accessors(container: &AnnotatedContainer<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let accessors = container.accessors();
    // member name → type that claimed it first
    let mut properties: HashMap<&str, &str> = HashMap::new();
    let mut fields: HashMap<String, &str> = HashMap::new();

    for accessor in &accessors {
        if accessor.property.is_empty() {
            diagnostics.push(Diagnostic::warning(
                codes::EMPTY_ACCESSOR_NAME,
                format!("Accessor name for {} must not be empty", accessor.ty),
                accessor.location.clone(),
            ));
            continue;
        }

        let field = cache_field_name(accessor.property);
        if let Some(first) = properties.get(accessor.property) {
            diagnostics.push(Diagnostic::warning(
                codes::DUPLICATE_ACCESSOR,
                format!(
                    "Accessor '{}' for {} duplicates the accessor generated for {}",
                    accessor.property, accessor.ty, first
                ),
                accessor.location.clone(),
            ));
        } else if let Some(first) = fields.get(&field) {
            diagnostics.push(Diagnostic::warning(
                codes::DUPLICATE_ACCESSOR,
                format!(
                    "Cache field '{}' for {} duplicates the field generated for {}",
                    field, accessor.ty, first
                ),
                accessor.location.clone(),
            ));
        }

        properties.entry(accessor.property).or_insert(accessor.ty);
        fields.entry(field).or_insert(accessor.ty);
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{Annotation, GroupMarker, SingleOverride};
    use getters_ir::{ClassDecl, Location, SourceFile};

    fn decl() -> ClassDecl {
        ClassDecl {
            name: "Player".into(),
            attributes: vec![],
            location: Location::new("A.cs", 1, 1),
        }
    }

    fn single(ty: &str, name: &str, line: u32) -> Annotation {
        Annotation::SingleOverride(SingleOverride {
            ty: ty.into(),
            name: name.into(),
            visibility: "public".into(),
            location: Location::new("A.cs", line, 2),
        })
    }

    fn group() -> Annotation {
        Annotation::GroupMarker(GroupMarker {
            visibility: "public".into(),
        })
    }

    #[test]
    fn clean_container_generates_with_precedence() {
        let decl = decl();
        let file = SourceFile::new("A.cs");
        let mut c = AnnotatedContainer::new("", &decl, &file);
        c.require("Animator");
        c.require("Rigidbody");
        c.apply(group());
        c.apply(single("Animator", "MyAnimator", 2));

        assert_eq!(validate(&mut c, &GeneratorConfig::default()), Verdict::Generate);
        assert!(!c.required.contains("Animator"));
        assert!(c.required.contains("Rigidbody"));
        assert!(c.diagnostics.is_empty());
    }

    #[test]
    fn error_suppresses() {
        let decl = decl();
        let file = SourceFile::new("A.cs");
        let mut c = AnnotatedContainer::new("", &decl, &file);
        c.reject(vec![Diagnostic::error(
            codes::MALFORMED_NAME_ARGUMENT,
            "bad name",
            Location::default(),
        )]);

        assert_eq!(validate(&mut c, &GeneratorConfig::default()), Verdict::Suppressed);
    }

    #[test]
    fn empty_name_warns_and_blocks_only_when_configured() {
        let decl = decl();
        let file = SourceFile::new("A.cs");
        let mut lax = AnnotatedContainer::new("", &decl, &file);
        lax.apply(single("Health", "", 4));
        let mut strict = lax.clone();

        assert_eq!(validate(&mut lax, &GeneratorConfig::default()), Verdict::Generate);
        assert_eq!(lax.diagnostics.len(), 1);
        assert_eq!(lax.diagnostics[0].code, codes::EMPTY_ACCESSOR_NAME);
        assert_eq!(lax.diagnostics[0].severity, Severity::Warning);
        assert_eq!(lax.diagnostics[0].location, Location::new("A.cs", 4, 2));

        let config = GeneratorConfig {
            warnings_as_errors: true,
            ..Default::default()
        };
        assert_eq!(validate(&mut strict, &config), Verdict::Suppressed);
    }

    #[test]
    fn same_simple_name_defaults_clash() {
        let decl = decl();
        let file = SourceFile::new("A.cs");
        let mut c = AnnotatedContainer::new("", &decl, &file);
        c.require("A.Widget");
        c.require("B.Widget");
        c.apply(group());

        let diagnostics = check_accessors(&c);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, codes::DUPLICATE_ACCESSOR);
        assert!(diagnostics[0].message.contains("B.Widget"));
        assert!(diagnostics[0].message.contains("A.Widget"));
        assert_eq!(diagnostics[0].location, decl.location);
    }

    #[test]
    fn override_name_clashing_with_default_field() {
        let decl = decl();
        let file = SourceFile::new("A.cs");
        let mut c = AnnotatedContainer::new("", &decl, &file);
        c.require("Widget");
        c.apply(group());
        // `widget` and `Widget` are distinct properties but share `_widget`.
        c.apply(single("Gadget", "widget", 3));

        let diagnostics = check_accessors(&c);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'_widget'"));
        assert_eq!(diagnostics[0].location, Location::new("A.cs", 3, 2));
    }
}
