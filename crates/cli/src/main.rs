use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use server::{RandomSource, ServerConfig, StudyEngine, StudyServer};
use std::sync::Arc;
use std::time::{Duration, Instant};
use study_data::{Priority, RecommendationTemplate, ScheduleSlot, UserSignal};
use tokio::sync::Semaphore;
use tracing::info;

/// StudyAI - study recommendation service
#[derive(Parser)]
#[command(name = "studyai")]
#[command(about = "Study recommendations, schedules and analytics", long_about = None)]
struct Cli {
    /// Fixed RNG seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print raw JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Host to bind (overrides STUDYAI_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides STUDYAI_PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Get study recommendations
    Recommend {
        /// Share of planned tasks completed, 0 to 1
        #[arg(long)]
        completion_rate: Option<f64>,

        /// Average session length in minutes
        #[arg(long)]
        average_session_time: Option<f64>,
    },

    /// Analyze study habits
    Analyze {
        /// Student keeps a consistent schedule
        #[arg(long)]
        consistent_schedule: bool,

        /// Student takes regular breaks
        #[arg(long)]
        regular_breaks: bool,
    },

    /// Show an optimized study schedule
    Schedule,

    /// Show break offsets for a session
    Breaks {
        /// Session length in minutes
        #[arg(long, default_value = "90")]
        duration: u32,
    },

    /// Predict study performance
    Predict {
        #[arg(long)]
        completion_rate: Option<f64>,

        #[arg(long)]
        average_session_time: Option<f64>,
    },

    /// Run benchmark to test engine throughput
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let random = RandomSource::from(cli.seed);
    let engine = StudyEngine::default();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Serve { host, port } => handle_serve(host, port, cli.seed).await?,
        Commands::Recommend {
            completion_rate,
            average_session_time,
        } => {
            let signal = build_signal(completion_rate, average_session_time);
            handle_recommend(&engine, random, signal.as_ref(), cli.json)?
        }
        Commands::Analyze {
            consistent_schedule,
            regular_breaks,
        } => {
            let signal = UserSignal::default()
                .with_consistent_schedule(consistent_schedule)
                .with_regular_breaks(regular_breaks);
            handle_analyze(&engine, random, &signal, cli.json)?
        }
        Commands::Schedule => handle_schedule(&engine, random, cli.json)?,
        Commands::Breaks { duration } => handle_breaks(&engine, duration, cli.json)?,
        Commands::Predict {
            completion_rate,
            average_session_time,
        } => {
            let signal = build_signal(completion_rate, average_session_time);
            handle_predict(&engine, random, signal.as_ref(), cli.json)?
        }
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(engine, random, requests, concurrent).await?,
    }

    Ok(())
}

/// A signal only exists if at least one field was given
fn build_signal(completion_rate: Option<f64>, average_session_time: Option<f64>) -> Option<UserSignal> {
    if completion_rate.is_none() && average_session_time.is_none() {
        return None;
    }
    Some(UserSignal {
        completion_rate,
        average_session_time_minutes: average_session_time,
        ..UserSignal::default()
    })
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize output")?
    );
    Ok(())
}

/// Handle the 'serve' command
async fn handle_serve(host: Option<String>, port: Option<u16>, seed: Option<u64>) -> Result<()> {
    let mut config = ServerConfig::from_env();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    let server = StudyServer::new(config)?;
    info!("Starting StudyAI on {}", server.server_url());
    println!("Press Ctrl+C to stop");
    server.start().await
}

/// Handle the 'recommend' command
fn handle_recommend(
    engine: &StudyEngine,
    random: RandomSource,
    signal: Option<&UserSignal>,
    json: bool,
) -> Result<()> {
    let recommendations = engine.generate_recommendations(signal, &mut random.rng()?);
    if json {
        return print_json(&recommendations);
    }
    print_recommendations(&recommendations);
    Ok(())
}

/// Handle the 'analyze' command
fn handle_analyze(
    engine: &StudyEngine,
    random: RandomSource,
    signal: &UserSignal,
    json: bool,
) -> Result<()> {
    let analytics = engine.analyze(signal, &mut random.rng()?);
    if json {
        return print_json(&analytics);
    }

    println!("{}", "Study Analytics:".bold().blue());
    println!("{}Efficiency: {}", "• ".green(), analytics.efficiency);
    println!("{}Focus time: {:.1}h", "• ".green(), analytics.focus_time);
    println!(
        "{}Recommended breaks: {}",
        "• ".green(),
        analytics.recommended_breaks.join(", ")
    );
    println!(
        "{}Weekly improvement: {:.1}%",
        "• ".cyan(),
        analytics.trends.weekly_improvement
    );
    println!(
        "{}Consistency score: {}",
        "• ".cyan(),
        analytics.trends.consistency_score
    );
    println!(
        "{}Peak hours: {}",
        "• ".cyan(),
        analytics.trends.peak_hours.join(", ")
    );
    println!("Insights:");
    for insight in &analytics.insights {
        println!("  - {}", insight);
    }
    Ok(())
}

/// Handle the 'schedule' command
fn handle_schedule(engine: &StudyEngine, random: RandomSource, json: bool) -> Result<()> {
    let mut rng = random.rng()?;
    let schedule = engine
        .predict_optimal_schedule(None, &mut rng)
        .context("Failed to build schedule")?;
    let score = engine.optimization_score(&mut rng);

    if json {
        return print_json(&serde_json::json!({
            "optimized_schedule": schedule,
            "optimization_score": score,
        }));
    }
    print_schedule(&schedule, score);
    Ok(())
}

/// Handle the 'breaks' command
fn handle_breaks(engine: &StudyEngine, duration: u32, json: bool) -> Result<()> {
    let breaks = engine.generate_break_schedule(duration);
    if json {
        return print_json(&breaks);
    }

    if breaks.is_empty() {
        println!("No breaks needed for a {}-minute session", duration);
    } else {
        println!(
            "Breaks for a {}-minute session: {}",
            duration,
            breaks.join(", ").green()
        );
    }
    Ok(())
}

/// Handle the 'predict' command
fn handle_predict(
    engine: &StudyEngine,
    random: RandomSource,
    signal: Option<&UserSignal>,
    json: bool,
) -> Result<()> {
    let prediction = engine.predict_performance(signal, &mut random.rng()?);
    if json {
        return print_json(&prediction);
    }

    println!("{}", "Performance Prediction:".bold().blue());
    println!(
        "Predicted score: {} (confidence {:.0}%)",
        format!("{:.2}", prediction.predicted_score).green(),
        prediction.confidence * 100.0
    );
    println!("Factors:");
    for factor in &prediction.factors {
        println!(
            "  - {:<20} impact {:.2}  current {:.2}",
            factor.name, factor.impact_weight, factor.current_score
        );
    }
    println!();
    print_recommendations(&prediction.recommendations);
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    engine: StudyEngine,
    random: RandomSource,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }

    let engine = Arc::new(engine);
    let permits = Arc::new(Semaphore::new(concurrent.max(1)));
    let signal = UserSignal::default()
        .with_completion_rate(0.5)
        .with_average_session_time(150.0);

    info!(requests, concurrent, "Starting benchmark");

    // Use tokio::spawn to make concurrent requests
    let started = Instant::now();
    let mut handles = Vec::with_capacity(requests);
    for _ in 0..requests {
        let engine = engine.clone();
        let permits = permits.clone();
        let signal = signal.clone();
        let handle = tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let start = Instant::now();
            let mut rng = random.rng()?;
            engine.generate_recommendations(Some(&signal), &mut rng);
            engine.analyze(&signal, &mut rng);
            engine.predict_optimal_schedule(None, &mut rng)?;
            engine.predict_performance(Some(&signal), &mut rng);
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = Vec::with_capacity(requests);
    for handle in handles {
        timings.push(handle.await??);
    }
    let wall_time = started.elapsed();
    let stats = LatencyStats::from_timings(timings)?;
    let throughput = requests as f64 / wall_time.as_secs_f64();

    info!(requests, wall_time_ms = wall_time.as_millis() as u64, "Benchmark finished");

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} concurrent)", requests, concurrent.max(1));
    println!("Wall time: {:?}", wall_time);
    println!("Average latency: {:?}", stats.average);
    println!("P50 latency: {:?}", stats.p50);
    println!("P95 latency: {:?}", stats.p95);
    println!("P99 latency: {:?}", stats.p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Latency summary of a benchmark run
#[derive(Debug, PartialEq)]
struct LatencyStats {
    average: Duration,
    p50: Duration,
    p95: Duration,
    p99: Duration,
}

impl LatencyStats {
    fn from_timings(mut timings: Vec<Duration>) -> Result<Self> {
        if timings.is_empty() {
            bail!("No timings recorded");
        }
        let count = u32::try_from(timings.len()).context("Too many samples to average")?;
        let total: Duration = timings.iter().sum();

        timings.sort();
        let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];

        Ok(Self {
            average: total / count,
            p50: percentile(0.50),
            p95: percentile(0.95),
            p99: percentile(0.99),
        })
    }
}

fn priority_label(priority: Priority) -> colored::ColoredString {
    match priority {
        Priority::High => "High".red().bold(),
        Priority::Medium => "Medium".yellow(),
        Priority::Low => "Low".normal(),
    }
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[RecommendationTemplate]) {
    println!("{}", "Study Recommendations:".bold().blue());
    for (i, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} [{}] ({})",
            (i + 1).to_string().green(),
            rec.title,
            priority_label(rec.priority),
            rec.category
        );
        println!("   {}", rec.description);
    }
}

fn print_schedule(schedule: &[ScheduleSlot], score: f64) {
    println!(
        "{} (optimization score {:.2})",
        "Optimized Schedule:".bold().blue(),
        score
    );
    for (i, slot) in schedule.iter().enumerate() {
        println!(
            "{}. {} - {} min - effectiveness {:.2} - {}",
            (i + 1).to_string().green(),
            slot.time_of_day,
            slot.duration_minutes,
            slot.effectiveness_score,
            slot.subjects.join(", ")
        );
    }
}
