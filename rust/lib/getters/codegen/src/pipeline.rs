//! One generation pass: scan → aggregate → validate → emit.
//!
//! Every piece of state lives on the stack of [`generate`]; nothing survives
//! between calls.

use getters_ir::{Diagnostic, Forest, GeneratedSource};
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::codes;
use crate::config::GeneratorConfig;
use crate::container::AnnotatedContainer;
use crate::emit::render;
use crate::error::Result;
use crate::host::{DiagnosticSink, SourceSink};
use crate::scan::scan;
use crate::validate::{has_blocking, validate, Verdict};

/// Everything one pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOutput {
    /// Sources to register, one per generated container, unique by name.
    pub sources: Vec<GeneratedSource>,

    /// Diagnostics from all containers, generated or not.
    pub diagnostics: Vec<Diagnostic>,

    /// Full names of suppressed containers.
    pub suppressed: Vec<String>,
}

impl GenerationOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn source(&self, name: &str) -> Option<&GeneratedSource> {
        self.sources.iter().find(|s| s.name == name)
    }
}

/// Counts reported by [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub generated: usize,
    pub suppressed: usize,
}

/// Run one pass over a forest snapshot.
pub fn generate(forest: &Forest, config: &GeneratorConfig) -> GenerationOutput {
    let mut containers: Vec<(AnnotatedContainer<'_>, Verdict)> = scan(forest, config)
        .into_iter()
        .map(|mut container| {
            let verdict = validate(&mut container, config);
            (container, verdict)
        })
        .collect();

    // registration name → containers claiming it, in scan order
    let mut claims: IndexMap<String, Vec<usize>> = IndexMap::new();
    for (index, (container, verdict)) in containers.iter().enumerate() {
        if *verdict == Verdict::Generate {
            claims
                .entry(config.output_name(container.name()))
                .or_default()
                .push(index);
        }
    }
    for (name, claimants) in &claims {
        if claimants.len() > 1 {
            report_collision(name, claimants, &mut containers);
        }
    }

    let mut output = GenerationOutput::default();
    for (mut container, verdict) in containers {
        let full_name = container.full_name();
        if verdict == Verdict::Generate && !has_blocking(&container, config) {
            output.sources.push(render(&container, config));
        } else {
            debug!(container = %full_name, "generation suppressed");
            output.suppressed.push(full_name);
        }
        output.diagnostics.append(&mut container.diagnostics);
    }

    output
}

/// The last claimant keeps the registration name; earlier ones are dropped.
/// Every claimant gets an RCG003 warning so strict hosts reject the pass.
fn report_collision(
    name: &str,
    claimants: &[usize],
    containers: &mut [(AnnotatedContainer<'_>, Verdict)],
) {
    let Some((&kept, dropped)) = claimants.split_last() else {
        return;
    };
    let kept_name = containers[kept].0.full_name();
    let dropped_names: Vec<String> = dropped.iter().map(|&i| containers[i].0.full_name()).collect();

    warn!(
        name = %name,
        kept = %kept_name,
        dropped = ?dropped_names,
        "registration name collision; keeping the later container"
    );

    for (&index, dropped_name) in dropped.iter().zip(&dropped_names) {
        let (container, verdict) = &mut containers[index];
        let location = container.declaration.location.clone();
        container.diagnostics.push(Diagnostic::warning(
            codes::REGISTRATION_NAME_COLLISION,
            format!(
                "{} is not generated: registration name '{}' is taken by {}",
                dropped_name, name, kept_name
            ),
            location,
        ));
        *verdict = Verdict::Suppressed;
    }

    let container = &mut containers[kept].0;
    let location = container.declaration.location.clone();
    container.diagnostics.push(Diagnostic::warning(
        codes::REGISTRATION_NAME_COLLISION,
        format!(
            "Registration name '{}' of {} replaces the output of {}",
            name,
            kept_name,
            dropped_names.join(", ")
        ),
        location,
    ));
}

/// Run one pass and forward the results to the host channels.
pub fn run(
    forest: &Forest,
    config: &GeneratorConfig,
    diagnostics: &mut dyn DiagnosticSink,
    sources: &mut dyn SourceSink,
) -> Result<RunSummary> {
    let output = generate(forest, config);

    for diagnostic in output.diagnostics {
        diagnostics.report(diagnostic);
    }
    for source in &output.sources {
        sources.add_source(&source.name, &source.text)?;
    }

    let summary = RunSummary {
        generated: output.sources.len(),
        suppressed: output.suppressed.len(),
    };
    info!(
        generated = summary.generated,
        suppressed = summary.suppressed,
        "generation pass complete"
    );
    Ok(summary)
}
