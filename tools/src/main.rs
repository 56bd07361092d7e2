//! sim-runner: headless scripted runner for the TechFlow simulation.
//!
//! Usage:
//!   sim-runner --seed 12345
//!   sim-runner --seed 12345 --script aggressive --json
//!
//! Plays all 8 quarters with a fixed decision script, then prints the
//! quarterly table, the final score, and the benchmark report.

use anyhow::Result;
use std::env;
use techflow_core::{DecisionInput, MetricField, SimulationController, TOTAL_QUARTERS};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let script = args
        .windows(2)
        .find(|w| w[0] == "--script")
        .map(|w| w[1].as_str())
        .unwrap_or("balanced")
        .to_string();
    let emit_json = args.iter().any(|a| a == "--json");
    let emit_csv = args.iter().any(|a| a == "--csv");

    println!("TechFlow Inc. — sim-runner");
    println!("  seed:   {seed}");
    println!("  script: {script}");
    println!();

    let mut controller = SimulationController::new(seed);
    controller.start()?;

    for quarter in 1..=TOTAL_QUARTERS {
        let decision = scripted_decision(&script, quarter);
        controller.submit_decision(decision)?;
        controller.advance_quarter()?;
    }
    log::info!("run {} complete", controller.run_id());

    print_quarter_table(&controller);
    print_final_report(&controller)?;

    if emit_csv {
        println!("\n── metrics.csv ──");
        print!("{}", controller.export_metrics_csv());
        println!("\n── decisions.csv ──");
        print!("{}", controller.export_decisions_csv());
    }
    if emit_json {
        println!("\n── export.json ──");
        println!("{}", controller.export_json()?);
    }

    Ok(())
}

/// Decision script per quarter. Each named strategy exercises a
/// different corner of the decision envelope.
fn scripted_decision(script: &str, quarter: u32) -> DecisionInput {
    match script {
        // Heavy marketing, discounted pricing.
        "aggressive" => DecisionInput {
            marketing: 85.0,
            quality: 40.0,
            pricing: 90.0,
            efficiency: 50.0,
        },
        // Premium pricing, quality-led.
        "premium" => DecisionInput {
            marketing: 45.0,
            quality: 80.0,
            pricing: 115.0,
            efficiency: 65.0,
        },
        // Ramp efficiency over the run, everything else neutral.
        "efficiency" => DecisionInput {
            efficiency: (30 + quarter * 8).min(100) as f64,
            ..DecisionInput::default()
        },
        _ => DecisionInput::default(),
    }
}

fn print_quarter_table(controller: &SimulationController) {
    println!(
        "{:>3} {:>10} {:>8} {:>9} {:>7} {:>6} {:>8} {:>6}",
        "Q", "Revenue", "Margin", "Profit", "Share", "CSAT", "Cash", "Prod"
    );
    for m in controller.history().iter().skip(1) {
        println!(
            "{:>3} {:>9.1}M {:>7.1}% {:>8.1}M {:>6.1}% {:>6.0} {:>7.1}M {:>6.0}",
            m.quarter,
            m.revenue,
            m.gross_margin,
            m.net_profit,
            m.market_share,
            m.customer_satisfaction,
            m.cash_position,
            m.employee_productivity,
        );
    }
}

fn print_final_report(controller: &SimulationController) -> Result<()> {
    let breakdown = controller.score_breakdown()?;
    let benchmarks = controller.benchmarks()?;
    let strategy = controller.strategy();

    println!();
    println!("Final score: {}/100", breakdown.total);
    println!("  profitability      {:>5.1}  (30%)", breakdown.profitability);
    println!("  growth             {:>5.1}  (20%)", breakdown.growth);
    println!("  market position    {:>5.1}  (20%)", breakdown.market_position);
    println!("  customer loyalty   {:>5.1}  (15%)", breakdown.customer_loyalty);
    println!("  operational health {:>5.1}  (15%)", breakdown.operational_health);

    println!();
    println!(
        "Benchmarks: overall {} (revenue {}, profit {}, share {}, satisfaction {})",
        benchmarks.overall,
        benchmarks.revenue_percent,
        benchmarks.profit_percent,
        benchmarks.market_share_percent,
        benchmarks.satisfaction_percent,
    );
    for s in &benchmarks.strengths {
        println!("  + {}: {}", s.metric, s.message);
    }
    for i in &benchmarks.improvements {
        println!("  - {}: {}", i.metric, i.message);
    }

    println!();
    println!("Per-metric summary:");
    println!(
        "  {:<22} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "metric", "mean", "stddev", "median", "min", "max"
    );
    for field in MetricField::ALL {
        let s = controller.field_stats(field)?;
        println!(
            "  {:<22} {:>8.1} {:>8.1} {:>8.1} {:>8.1} {:>8.1}",
            field.name(),
            s.mean,
            s.std_dev,
            s.median,
            s.min,
            s.max,
        );
    }

    println!();
    println!("Strategy: {} — {}", strategy.strategy_type, strategy.description);

    let analysis = controller.ai_analysis()?;
    println!();
    println!("Analysis:");
    println!("  {}", analysis.learning_curve);
    for shift in &analysis.shifts {
        println!("  Q{}: {}", shift.quarter, shift.description);
    }
    for anomaly in &analysis.anomalies {
        println!("  Q{}: {}", anomaly.quarter, anomaly.reason);
    }
    for rec in &analysis.recommendations {
        println!("  {}: {}", rec.title, rec.message);
    }

    println!();
    println!("Takeaways:");
    for insight in controller.learning_insights()? {
        println!("  • {insight}");
    }

    Ok(())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
