//! Per-container aggregation state.
//!
//! One [`AnnotatedContainer`] exists per fully-qualified container name for
//! the duration of a single pass. It is created on the first recognized
//! annotation, mutated as more are found, then handed to the validator and
//! emitter once.

use getters_ir::{ClassDecl, Diagnostic, Location, SourceFile};
use indexmap::{IndexMap, IndexSet};

use crate::annotation::{Annotation, GroupMarker, SingleOverride};
use crate::naming::default_property_name;

/// Custom accessor name and visibility for one overridden type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideEntry {
    pub name: String,
    pub visibility: String,
    /// Declaration that produced this entry.
    pub location: Location,
}

/// One accessor the container will get.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor<'a> {
    pub ty: &'a str,
    pub property: &'a str,
    pub visibility: &'a str,
    /// Override declaration, or the container declaration for defaults.
    pub location: &'a Location,
}

/// Present when the container carries a group marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultGenerationConfig {
    pub visibility: String,
}

impl Default for DefaultGenerationConfig {
    fn default() -> Self {
        Self {
            visibility: "public".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnnotatedContainer<'f> {
    /// Dotted namespace path, empty at global scope.
    pub namespace: String,

    /// The declaration that carried the first recognized annotation.
    pub declaration: &'f ClassDecl,

    /// File of `declaration`; its imports are duplicated into the output.
    pub file: &'f SourceFile,

    /// Types declared as required, in first-declaration order.
    pub required: IndexSet<String>,

    pub defaults: Option<DefaultGenerationConfig>,

    /// Type → override. Re-inserting a type replaces its entry in place.
    pub overrides: IndexMap<String, OverrideEntry>,

    pub diagnostics: Vec<Diagnostic>,
}

impl<'f> AnnotatedContainer<'f> {
    pub fn new(namespace: impl Into<String>, declaration: &'f ClassDecl, file: &'f SourceFile) -> Self {
        Self {
            namespace: namespace.into(),
            declaration,
            file,
            required: IndexSet::new(),
            defaults: None,
            overrides: IndexMap::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Simple name of the container.
    pub fn name(&self) -> &str {
        &self.declaration.name
    }

    pub fn full_name(&self) -> String {
        full_name(&self.namespace, self.name())
    }

    pub fn apply(&mut self, annotation: Annotation) {
        match annotation {
            Annotation::GroupMarker(GroupMarker { visibility }) => {
                self.defaults = Some(DefaultGenerationConfig { visibility });
            }
            Annotation::SingleOverride(SingleOverride {
                ty,
                name,
                visibility,
                location,
            }) => {
                self.overrides.insert(
                    ty,
                    OverrideEntry {
                        name,
                        visibility,
                        location,
                    },
                );
            }
        }
    }

    /// Record diagnostics from an annotation that failed to parse.
    pub fn reject(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Add a required type. Repeated declarations collapse.
    pub fn require(&mut self, ty: impl Into<String>) {
        self.required.insert(ty.into());
    }

    /// Drop required types that have an override, so each type gets one accessor.
    pub fn apply_override_precedence(&mut self) {
        let overrides = &self.overrides;
        self.required.retain(|ty| !overrides.contains_key(ty));
    }

    /// Accessors in emission order: defaults first (declaration order), then
    /// overrides (first-insertion order of each type).
    ///
    /// Defaults are only produced when the container carries a group marker.
    pub fn accessors(&self) -> Vec<Accessor<'_>> {
        let mut result = Vec::new();

        if let Some(defaults) = &self.defaults {
            for ty in &self.required {
                result.push(Accessor {
                    ty,
                    property: default_property_name(ty),
                    visibility: &defaults.visibility,
                    location: &self.declaration.location,
                });
            }
        }

        for (ty, entry) in &self.overrides {
            result.push(Accessor {
                ty,
                property: &entry.name,
                visibility: &entry.visibility,
                location: &entry.location,
            });
        }

        result
    }
}

/// `Game.Units` + `Player` → `Game.Units.Player`; global scope → `Player`.
pub fn full_name(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", namespace, name)
    }
}
