use diamond_square::config::{self, HeightfieldConfig};
use diamond_square::diagnostics::{AccessEvent, AccessRecorder, InterpolationReport};
use diamond_square::raster::io::{format_rows, grid_rows, write_json_file};
use diamond_square::Interpolator;
use serde::Serialize;
use std::env;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args();
    let program = args
        .next()
        .unwrap_or_else(|| "heightfield_demo".to_string());
    let config = config::parse_cli(&program, args)?;

    let mut grid = config.build_grid()?;
    let interpolator = Interpolator::new();

    let (report, trace) = if config.output.include_trace {
        // Trace on a copy; the reported run stays uninstrumented.
        let mut recorder = AccessRecorder::new();
        let mut traced = grid.clone();
        interpolator.interpolate_observed(&mut traced, &mut recorder);
        let report = interpolator.interpolate_with_report(&mut grid);
        debug_assert_eq!(traced, grid);
        (report, Some(recorder.into_events()))
    } else {
        (interpolator.interpolate_with_report(&mut grid), None)
    };

    print_text_summary(&config, &report);
    if config.output.print_grid {
        println!();
        print!("{}", format_rows(&grid));
    }

    if let Some(path) = &config.output.json_out {
        let summary = HeightfieldSummary {
            report: &report,
            grid: grid_rows(&grid),
            trace,
        };
        write_json_file(path, &summary)?;
        println!("\nJSON report written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(config: &HeightfieldConfig, report: &InterpolationReport) {
    let c = &config.corners;
    println!("Interpolation summary");
    println!("  size: {}x{}", report.size, report.size);
    println!("  corners: nw={} ne={} sw={} se={}", c.nw, c.ne, c.sw, c.se);
    println!("  passes: {}", report.passes.len());
    for pass in &report.passes {
        println!(
            "    step={:<5} diamond={:<7} square={:<7} {:.3} ms",
            pass.step, pass.diamond_writes, pass.square_writes, pass.elapsed_ms
        );
    }
    println!("  writes: {}", report.total_writes());
    println!(
        "  range: [{}, {}] mean={:.2}",
        report.stats.min, report.stats.max, report.stats.mean
    );
    println!(
        "  total_ms: {:.3} (passes {:.3})",
        report.timing.total_ms,
        report.timing.stages_ms()
    );
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HeightfieldSummary<'a> {
    report: &'a InterpolationReport,
    grid: Vec<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<Vec<AccessEvent>>,
}
