//! Emitter — renders the accessor source for one validated container.
//!
//! Output is a pure function of the container and config: same input, same
//! bytes. Layout:
//!
//! ```text
//! // <auto-generated/>
//! <imports of the originating file, in source order>
//!
//! namespace Ns {
//! [RequireComponent(typeof(Overridden))]
//! partial class Name {
//!
//!     private Type _type;
//!     public Type Type => _type ??= GetComponent<Type>();
//! }
//! }
//! ```

use getters_ir::GeneratedSource;

use crate::config::GeneratorConfig;
use crate::container::{Accessor, AnnotatedContainer};
use crate::naming::cache_field_name;

const HEADER: &str = "// <auto-generated/>\n";

/// Render the generated source for a container that passed validation.
pub fn render(container: &AnnotatedContainer<'_>, config: &GeneratorConfig) -> GeneratedSource {
    let mut output = String::from(HEADER);

    for import in container.file.ordered_imports() {
        output.push_str(&import.text);
        output.push('\n');
    }
    output.push('\n');

    let has_namespace = !container.namespace.is_empty();
    if has_namespace {
        output.push_str(&format!("namespace {} {{\n", container.namespace));
    }

    output.push_str(&render_requirements(container, config));
    output.push_str(&format!("partial class {} {{\n", container.name()));
    for accessor in container.accessors() {
        output.push_str(&render_accessor(&accessor, config));
    }
    output.push_str("}\n");

    if has_namespace {
        output.push_str("}\n");
    }

    GeneratedSource {
        name: config.output_name(container.name()),
        text: output,
    }
}

/// One requirement declaration per overridden type.
fn render_requirements(container: &AnnotatedContainer<'_>, config: &GeneratorConfig) -> String {
    let mut output = String::new();
    for ty in container.overrides.keys() {
        output.push_str(&format!("[{}(typeof({}))]\n", config.requirement_marker, ty));
    }
    output
}

/// Cache field plus memoizing property.
fn render_accessor(accessor: &Accessor<'_>, config: &GeneratorConfig) -> String {
    let field = cache_field_name(accessor.property);
    format!(
        "\n    private {ty} {field};\n    {vis} {ty} {prop} => {field} ??= {lookup};\n",
        ty = accessor.ty,
        field = field,
        vis = accessor.visibility,
        prop = accessor.property,
        lookup = config.lookup_for(accessor.ty),
    )
}
