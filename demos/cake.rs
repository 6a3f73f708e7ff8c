// demos/cake.rs
// Run with:
//   RUST_LOG=debug cargo run --example cake --features serde
//   cargo run --example cake --features serde -- my_config.json --json
//
// The optional JSON file holds any subset of `driver::Config` fields, e.g.
//   { "discount": 0.95, "grid_size": 200 }

use std::time::Instant;

use cake_vfi::driver::{self, Config};
use cake_vfi::mechanics::closed_form;
use cake_vfi::report::format_elapsed;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut cfg_path = None;
    let mut dump_json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => dump_json = true,
            _ => cfg_path = Some(arg),
        }
    }

    let cfg: Config = match cfg_path {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(&path)?)?,
        None => Config::default(),
    };
    cfg.validate()?;
    log::info!("config: {cfg:?}");

    let start = Instant::now();
    let out = driver::solve(&cfg)?;
    let elapsed = start.elapsed().as_secs_f64();

    if dump_json {
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", format_elapsed(elapsed, "VFI"));
    println!(
        "== {:?} after {} sweeps (distance {:.4e}) ==",
        out.status(),
        out.iterations,
        out.final_distance
    );

    let grid = cfg.grid()?;
    let step = (grid.len() / 10).max(1);
    println!("{:>10} {:>14} {:>14} {:>12} {:>12}", "W", "V(W)", "V*(W)", "W'", "βW");
    for (i, &w) in grid.points().iter().enumerate().step_by(step) {
        println!(
            "{:>10.4} {:>14.6} {:>14.6} {:>12.6} {:>12.6}",
            w,
            out.value[i],
            closed_form::value(cfg.discount, w),
            out.policy[i],
            closed_form::policy(cfg.discount, w),
        );
    }
    Ok(())
}
