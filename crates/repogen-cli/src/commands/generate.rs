//! Implementation of the `repogen generate` command.
//!
//! Responsibility: translate CLI arguments into a `GenerationConfig`, call
//! the core generation service, and display the report. No business logic
//! lives here.

use tracing::{debug, info, instrument};

use repogen_adapters::{CSharpTemplates, LocalFilesystem, TracingReporter};
use repogen_core::{
    application::{
        GenerationConfig, GenerationReport, GenerationService, RunOutcome, ports::Reporter,
    },
    domain::ContextName,
};

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, invalid_input},
    output::OutputManager,
};

/// Execute the `repogen generate` command.
///
/// Dispatch sequence:
/// 1. Resolve the fallback context class (flag > config default)
/// 2. Wire the production adapters into the generation service
/// 3. Run generation
/// 4. Render the report (human summary or JSON)
#[instrument(skip_all, fields(path = %args.path.display(), dry_run = args.dry_run))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Fallback context: --context wins over the config file.
    let default_context = match &args.context {
        Some(name) => ContextName::new(name.clone())
            .map_err(|_| invalid_input(format!("'--context {name}' is not a valid class name")))?,
        None => {
            ContextName::new(config.defaults.context_class.clone()).map_err(|_| {
                CliError::ConfigError {
                    message: "defaults.context_class must not be empty".into(),
                    source: None,
                }
            })?
        }
    };

    debug!(
        context = %default_context,
        extension = %config.defaults.source_extension,
        "generation configured"
    );

    // 2. Wire production adapters. Progress events flow back through the
    //    output manager so the engine's messages respect --quiet/--no-color.
    //    In JSON mode stdout must stay clean, so progress goes to the
    //    tracing subscriber (stderr) instead.
    let json = output.format() == OutputFormat::Json;
    let reporter: Box<dyn Reporter> = if json {
        Box::new(TracingReporter::new())
    } else {
        Box::new(output.clone())
    };
    let service = GenerationService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(CSharpTemplates::with_extension(
            config.defaults.source_extension.clone(),
        )),
        reporter,
        GenerationConfig {
            dry_run: args.dry_run,
            default_context,
        },
    );

    // 3. Run.
    if !json {
        if args.dry_run {
            output.header(&format!("Dry run for {}...", args.path.display()))?;
        } else {
            output.header(&format!("Generating into {}...", args.path.display()))?;
        }
    }
    let report = service.generate(&args.path)?;
    info!(
        namespace = %report.namespace,
        written = report.written.len(),
        "generate command finished"
    );

    // 4. Render.
    render_report(&report, &global, &output)?;
    Ok(())
}

// ── Report rendering ──────────────────────────────────────────────────────────

fn render_report(
    report: &GenerationReport,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(report).map_err(|e| CliError::OutputError {
            message: format!("Failed to serialise report: {e}"),
            source: Some(Box::new(e)),
        })?;
        println!("{json}");
        return Ok(());
    }

    match report.outcome {
        RunOutcome::NoEntities => {
            output.warning(&format!(
                "No entities found for namespace '{}'; nothing to do.",
                report.namespace
            ))?;
        }
        RunOutcome::Completed if report.dry_run => {
            output.info(&format!(
                "Would generate {} file(s) for {} entit{}:",
                report.planned.len(),
                report.entities.len(),
                if report.entities.len() == 1 { "y" } else { "ies" },
            ))?;
            for path in &report.planned {
                output.print(&format!("  {}", path.display()))?;
            }
        }
        RunOutcome::Completed => {
            output.success(&format!(
                "Generated {} file(s), skipped {} existing for namespace '{}' (context: {})",
                report.written.len(),
                report.skipped.len(),
                report.namespace,
                report.context,
            ))?;
            if !global.quiet && !report.skipped.is_empty() {
                for path in &report.skipped {
                    output.print(&format!("  unchanged: {}", path.display()))?;
                }
            }
        }
    }

    Ok(())
}
