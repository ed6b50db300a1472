mod args;

use args::Args;
use jump_vision::locate::crop_regions;
use jump_vision::{JumpDetector, LocateResult, LocatorConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(args) = Args::parse() else {
        return ExitCode::SUCCESS;
    };

    let default_filter = if args.debug_mode { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> LocateResult<()> {
    let screenshot = image::open(&args.screen)?.to_rgb8();
    let template = image::open(&args.avatar)?.to_luma8();

    let mut config = LocatorConfig::default();
    if let Some(path) = &args.edges_path {
        config = config.with_debug_edges(path);
    }

    let detector = JumpDetector::new(config, template)?;
    let result = detector.analyze_columns(&screenshot, args.left, args.right)?;

    if let Some(dir) = &args.crop_dir {
        let crops = crop_regions(&screenshot, args.left, args.right)?;
        crops.save(&dir.join("score.png"), &dir.join("platform.png"))?;
    }

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(text) => println!("{text}"),
            Err(e) => log::error!("Failed to serialize result: {e}"),
        }
        return Ok(());
    }

    match &result.avatar {
        Some(avatar) => println!(
            "🧍 Avatar: anchor ({}, {}) box ({}, {})-({}, {})",
            avatar.anchor.row,
            avatar.anchor.col,
            avatar.top_left.0,
            avatar.top_left.1,
            avatar.bottom_right.0,
            avatar.bottom_right.1
        ),
        None => println!("❌ Avatar not found"),
    }
    if result.has_platform() {
        println!(
            "🟫 Platform: anchor ({}, {})",
            result.platform.row, result.platform.col
        );
    } else {
        println!("❌ Platform not found");
    }
    println!("⏱️ {}ms", result.processing_time_ms);

    Ok(())
}
