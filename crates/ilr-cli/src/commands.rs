use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::info_span;

use ilr_reference::{DoctorReport, ReferenceData, reference_root};
use ilr_cli::pipeline::{
    build_rule_context, default_output_dir, list_rules, load_config, load_reference,
    merge_disabled, message_dir, output, read_message, resolve_academic_year,
    resolve_reference_dir, validate,
};
use ilr_cli::types::ValidationRunResult;

use crate::cli::{ReferenceArgs, RulesArgs, ValidateArgs};
use crate::summary::{align_column, apply_table_style, dim_cell, header_cell, severity_cell};

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationRunResult> {
    let message_path = &args.message;
    let _run_guard = info_span!("validate_run", message = %message_path.display()).entered();

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let config = load_config(args.config.as_deref(), message_dir(message_path))?;
    let message = read_message(message_path)?;

    // =========================================================================
    // Stage 2: Reference
    // =========================================================================
    let reference_dir = resolve_reference_dir(args.reference_dir.as_deref(), &config);
    let verify_checksums = config.validation.verify_checksums && !args.no_verify;
    let reference_stage = load_reference(&reference_dir, verify_checksums)?;

    // =========================================================================
    // Stage 3: Context
    // =========================================================================
    let configured_year = config.academic_year().context("config academic_year")?;
    let academic_year = resolve_academic_year(
        args.academic_year.as_deref(),
        configured_year,
        &message.header,
    )?;
    let severity_overrides = config
        .severity_overrides()
        .context("config severity overrides")?;
    let disabled = merge_disabled(&config, &args.disable);
    let checksums_verified = reference_stage.summary.checksums_verified;
    let registry = reference_stage.registry;
    let ctx = build_rule_context(reference_stage.reference, &message.header, academic_year);

    // =========================================================================
    // Stage 4: Validate
    // =========================================================================
    let validated = validate(
        &message.learners,
        &ctx,
        &registry,
        &disabled,
        severity_overrides,
    )?;

    // =========================================================================
    // Stage 5: Output
    // =========================================================================
    let report_path = if args.dry_run {
        None
    } else {
        let output_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(message_path));
        Some(output(&output_dir, message.header.ukprn, &validated.report)?)
    };

    let has_errors = validated.report.has_errors();
    Ok(ValidationRunResult {
        message_path: message_path.clone(),
        ukprn: message.header.ukprn,
        academic_year,
        reference_dir,
        checksums_verified,
        rule_count: validated.rule_count,
        report_path,
        report: validated.report,
        has_errors,
    })
}

pub fn run_rules(args: &RulesArgs) -> Result<()> {
    let config = load_config(args.config.as_deref(), Path::new("."))?;
    let reference_dir = resolve_reference_dir(args.reference_dir.as_deref(), &config);
    let verify_checksums = config.validation.verify_checksums && !args.no_verify;
    let stage = load_reference(&reference_dir, verify_checksums)?;
    let listings = list_rules(&stage.registry, &config)?;

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Severity"),
        header_cell("Category"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for listing in listings {
        let (name, severity) = if listing.enabled {
            (Cell::new(listing.name), severity_cell(listing.severity))
        } else {
            (
                dim_cell(format!("{} (disabled)", listing.name)),
                dim_cell(listing.severity.code()),
            )
        };
        table.add_row(vec![
            name,
            severity,
            Cell::new(listing.category.label()),
            Cell::new(listing.message),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_reference(args: &ReferenceArgs) -> Result<()> {
    let reference_dir = args.reference_dir.clone().unwrap_or_else(reference_root);
    let (reference, summary) = ReferenceData::verify_and_load(&reference_dir)
        .with_context(|| format!("verify reference data in {}", reference_dir.display()))?;

    if args.json {
        let report = DoctorReport::from_verify_summary(&summary, reference.files);
        let json = serde_json::to_string_pretty(&report).context("serialize reference report")?;
        println!("{json}");
        return Ok(());
    }

    print_reference_summary(&reference_dir, &reference);
    println!(
        "Learning aims: {} ({} validities)",
        summary.learning_aim_count, summary.validity_count
    );
    println!("Contract allocations: {}", summary.contract_allocation_count);
    println!("Organisations: {}", summary.organisation_count);
    Ok(())
}

fn print_reference_summary(reference_dir: &Path, reference: &ReferenceData) {
    let pins = &reference.manifest.pins;
    println!("Reference: {}", reference_dir.display());
    println!(
        "Pins: LARS {} | FCS {} | organisations {}",
        pins.lars, pins.fcs, pins.organisations
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Role"),
        header_cell("Kind"),
        header_cell("SHA-256"),
    ]);
    apply_table_style(&mut table);
    for file in &reference.files {
        let digest = file.sha256.get(..12).unwrap_or(&file.sha256);
        table.add_row(vec![
            Cell::new(&file.path),
            Cell::new(&file.role),
            Cell::new(&file.kind),
            dim_cell(format!("{digest}…")),
        ]);
    }
    println!("{table}");
}
