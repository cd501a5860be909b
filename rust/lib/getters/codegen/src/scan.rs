//! Scanner — walks the declaration forest once and routes every recognized
//! annotation to the aggregation record of its container.

use getters_ir::{ClassDecl, Forest, Item, SourceFile};
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::annotation::{marker_kind, parse_annotation, requirement_types, MarkerKind};
use crate::config::GeneratorConfig;
use crate::container::{full_name, AnnotatedContainer};

/// Collects containers for one pass. Dropped when the pass ends.
pub struct Scanner<'f, 'c> {
    config: &'c GeneratorConfig,
    containers: IndexMap<String, AnnotatedContainer<'f>>,
    /// Requirement types per full name, from every declaration of that name.
    requirements: IndexMap<String, IndexSet<String>>,
}

impl<'f, 'c> Scanner<'f, 'c> {
    pub fn new(config: &'c GeneratorConfig) -> Self {
        Self {
            config,
            containers: IndexMap::new(),
            requirements: IndexMap::new(),
        }
    }

    pub fn scan_forest(&mut self, forest: &'f Forest) {
        for file in &forest.files {
            self.scan_file(file);
        }
    }

    pub fn scan_file(&mut self, file: &'f SourceFile) {
        let mut namespace = Vec::new();
        self.scan_items(file, &mut namespace, &file.items);
    }

    fn scan_items(&mut self, file: &'f SourceFile, namespace: &mut Vec<&'f str>, items: &'f [Item]) {
        for item in items {
            match item {
                Item::Namespace(ns) => {
                    namespace.push(&ns.name);
                    self.scan_items(file, namespace, &ns.items);
                    namespace.pop();
                }
                Item::Class(class) => self.scan_class(file, &namespace.join("."), class),
            }
        }
    }

    fn scan_class(&mut self, file: &'f SourceFile, namespace: &str, class: &'f ClassDecl) {
        let key = full_name(namespace, &class.name);

        for attr in &class.attributes {
            match marker_kind(&attr.name, self.config) {
                Some(MarkerKind::Requirement) => {
                    self.requirements
                        .entry(key.clone())
                        .or_default()
                        .extend(requirement_types(attr).map(str::to_string));
                }
                Some(MarkerKind::Group | MarkerKind::Override) => {
                    let Some(parsed) = parse_annotation(attr, self.config) else {
                        continue;
                    };
                    let container = self.containers.entry(key.clone()).or_insert_with(|| {
                        debug!(container = %key, file = %file.path, "discovered annotated container");
                        AnnotatedContainer::new(namespace, class, file)
                    });
                    match parsed {
                        Ok(annotation) => container.apply(annotation),
                        Err(diagnostics) => container.reject(diagnostics),
                    }
                }
                None => {}
            }
        }
    }

    /// Attach requirement types and hand over the containers in discovery order.
    pub fn finish(mut self) -> Vec<AnnotatedContainer<'f>> {
        for (key, container) in self.containers.iter_mut() {
            if let Some(types) = self.requirements.swap_remove(key) {
                for ty in types {
                    container.require(ty);
                }
            }
        }
        self.containers.into_values().collect()
    }
}

/// Scan a whole forest into per-container aggregation records.
pub fn scan<'f>(forest: &'f Forest, config: &GeneratorConfig) -> Vec<AnnotatedContainer<'f>> {
    let mut scanner = Scanner::new(config);
    scanner.scan_forest(forest);
    scanner.finish()
}
