use std::path::PathBuf;
use std::process;

use terrascape_bench::report;
use terrascape_bench::runner::ReportRunner;
use terrascape_bench::scenes::{self, Scene};
use terrascape_world::load_config_from_path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut baseline_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut seed = 42u64;
    let mut size: Option<u32> = None;
    let mut runs = 5u32;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--config" | "--baseline" | "--output" | "--seed" | "--size" | "--runs" => {
                i += 1;
                let value = option_value(&args, i, flag);
                match flag {
                    "--config" => config_path = Some(PathBuf::from(value)),
                    "--baseline" => baseline_path = Some(PathBuf::from(value)),
                    "--output" => output_path = Some(PathBuf::from(value)),
                    "--seed" => seed = value.parse().expect("invalid --seed value"),
                    "--size" => size = Some(value.parse().expect("invalid --size value")),
                    _ => runs = value.parse().expect("invalid --runs value"),
                }
            }
            "--help" | "-h" => {
                eprintln!("Usage: terrain-report [OPTIONS]");
                eprintln!("  --config <path>     Generate a single terrain from a RON config");
                eprintln!("  --seed <n>          Noise seed for the standard scenes (default: 42)");
                eprintln!("  --size <n>          Override the grid size of every scene");
                eprintln!("  --runs <n>          Generations per scene (default: 5)");
                eprintln!("  --output <path>     Save current results as JSON baseline");
                eprintln!("  --baseline <path>   Compare geometry against a JSON baseline");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let mut scene_list = match config_path {
        Some(ref path) => match load_config_from_path(path) {
            Ok(config) => vec![Scene {
                name: path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "config".to_string()),
                config,
            }],
            Err(e) => {
                eprintln!("ERROR: {e}");
                process::exit(1);
            }
        },
        None => scenes::standard_scenes(seed),
    };
    if let Some(size) = size {
        for scene in &mut scene_list {
            scene.config.size_xz = size;
        }
    }

    let runner = ReportRunner::new(runs);
    let mut results = Vec::new();
    for scene in &scene_list {
        match runner.run_scene(scene) {
            Ok(result) => results.push(result),
            Err(e) => {
                eprintln!("ERROR: scene '{}': {e}", scene.name);
                process::exit(1);
            }
        }
    }

    println!("\n## Terrain Report\n");
    println!("{}", report::format_markdown(&results));

    if let Some(ref path) = output_path {
        let baseline = report::Baseline {
            label: format!("seed-{seed}"),
            results: results.clone(),
        };
        if let Err(e) = report::save_baseline(path, &baseline) {
            eprintln!("ERROR: failed to save baseline: {e}");
            process::exit(1);
        }
        log::info!("Saved baseline to {}", path.display());
    }

    if let Some(ref path) = baseline_path {
        if let Some(baseline) = report::load_baseline(path) {
            let changes = report::geometry_changes(&results, &baseline);
            println!("{}", report::format_comparison(&changes));
            if !changes.is_empty() {
                eprintln!("ERROR: {} scenes changed geometry, exiting with code 1", changes.len());
                process::exit(1);
            }
        } else {
            log::warn!("Baseline file not found: {}", path.display());
        }
    }

    log::info!("Report complete.");
}

fn option_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(value) => value,
        None => {
            eprintln!("Missing value for {flag}");
            process::exit(1);
        }
    }
}
