//! # Bolted Joint CLI
//!
//! Terminal front end for the joint calculator: prompts for the bolt,
//! hole fit, and member stack, then prints the joint summary and the
//! drawable list as JSON for downstream plotting.
//!
//! Pass a directory path as the first argument to load the reference
//! tables from JSON files instead of the built-in copies.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use joint_core::data::{FitClass, ReferenceData};
use joint_core::joint::{BoltedJoint, JointInput, MemberInput};
use joint_core::presentation::to_drawables;

fn prompt_string(prompt: &str, default: &str) -> String {
    print!("{} [{}]: ", prompt, default);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_string(prompt, &default.to_string())
        .parse()
        .unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    prompt_string(prompt, &default.to_string())
        .parse()
        .unwrap_or(default)
}

fn main() -> ExitCode {
    println!("Bolted Joint Calculator");
    println!("=======================");
    println!();

    // Reference data: builtin tables, or a data directory from argv.
    let loaded;
    let data: &ReferenceData = match std::env::args().nth(1) {
        Some(dir) => match ReferenceData::load_from_dir(Path::new(&dir)) {
            Ok(d) => {
                println!("Loaded reference data from {}", dir);
                loaded = d;
                &loaded
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => ReferenceData::builtin(),
    };

    println!("Available sizes: {}", data.bolt_sizes.sizes().join(", "));
    println!("Available materials: {}", data.materials.names().join(", "));
    println!();

    let defaults = JointInput::default();
    let bolt_size = prompt_string("Bolt size", &defaults.bolt_size);
    let tpi = prompt_u32("Threads per inch", defaults.tpi);
    let bolt_material = prompt_string("Bolt material", &defaults.bolt_material);
    let bolt_length_in = prompt_f64("Bolt length (in)", defaults.bolt_length_in);
    let fit = FitClass::parse(&prompt_string("Hole fit (close/standard/loose)", "standard"))
        .unwrap_or_default();

    let member_count = prompt_u32("Number of members", 2).max(1);
    let mut members = Vec::new();
    for i in 0..member_count {
        let thickness_in = prompt_f64(&format!("Member {} thickness (in)", i + 1), 0.25);
        let material = prompt_string(&format!("Member {} material", i + 1), "Steel");
        members.push(MemberInput {
            thickness_in,
            material,
        });
    }

    let preload_lb = prompt_f64("Preload (lb)", 0.0);

    let input = JointInput {
        label: "CLI".to_string(),
        bolt_size,
        tpi,
        bolt_material,
        bolt_length_in,
        fit,
        members,
        washers: Vec::new(),
        preload_lb,
    };

    println!();
    match BoltedJoint::from_input(data, &input).and_then(|joint| {
        let summary = joint.summarize()?;
        let drawables = to_drawables(&joint)?;
        Ok((joint, summary, drawables))
    }) {
        Ok((joint, summary, drawables)) => {
            println!("═══════════════════════════════════════");
            println!("  JOINT SUMMARY");
            println!("═══════════════════════════════════════");
            println!();
            println!("Bolt:              {}", summary.bolt);
            println!("Grip length:       {:.4} in", summary.grip_length.0);
            println!("Clearance:         {:.4} in ({} fit)", summary.clearance.0, joint.fit);
            println!("Min engagement:    {:.4} in", summary.min_engagement.0);
            println!("Bolt stiffness:    {:.3e} lb/in", summary.bolt_stiffness.0);
            println!("Member stiffness:  {:.3e} lb/in", summary.member_stiffness.0);
            println!("Joint constant C:  {:.3}", summary.stiffness_constant);
            if joint.preload_lb > 0.0 {
                if let Ok(sep) = joint.separation_load_lb() {
                    println!("Separation load:   {:.0} lb", sep);
                }
            }
            println!();
            println!(
                "RESULT: {}",
                if summary.is_valid { "VALID" } else { "NOT VALID" }
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("Summary JSON:");
            if let Ok(json) = serde_json::to_string_pretty(&summary) {
                println!("{}", json);
            }
            println!();
            println!("Drawables JSON ({} primitives):", drawables.len());
            if let Ok(json) = serde_json::to_string_pretty(&drawables) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            // Recoverable problems still exit nonzero; the host UI treats
            // them inline, the CLI just reports.
            ExitCode::FAILURE
        }
    }
}
