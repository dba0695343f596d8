use clap::Parser;
use serde::Serialize;
use std::{
    hint::black_box,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};
use tqdm::tqdm;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vecmetrics::{
    search::{FlatIndex, Metric},
    statistics::Stats,
};

/// Throughput sweep for the f64 vector metrics
#[derive(Parser, Debug)]
#[command(name = "vecmetrics")]
#[command(about = "Benchmarks squared L2 distance and dot product scans", long_about = None)]
struct Args {
    /// Dimension of every generated vector
    #[arg(short, long, default_value_t = 128)]
    dim: usize,

    /// Number of vectors in the scanned data set
    #[arg(short, long, default_value_t = 10_000)]
    num_vectors: usize,

    /// Number of queries run per job
    #[arg(short = 'q', long, default_value_t = 1_000)]
    num_queries: usize,

    /// Number of threads to use (comma-separated list, e.g., "1,2,4,8")
    #[arg(short, long, value_delimiter = ',', default_value = "1")]
    threads: Vec<usize>,

    /// Metrics to benchmark (comma-separated list of "l2" and "dot")
    #[arg(short, long, value_delimiter = ',', default_values = ["l2", "dot"])]
    metric: Vec<Metric>,

    /// Seed for the generated data and queries
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print the final report as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct JobReport {
    threads: usize,
    metric: &'static str,
    queries: usize,
    elapsed_secs: f64,
    qps: f64,
    checksum: usize,
    stats: Stats,
}

#[derive(Debug, Serialize)]
struct SweepReport {
    dim: usize,
    num_vectors: usize,
    seed: u64,
    jobs: Vec<JobReport>,
}

fn run_scan_job(
    index: Arc<FlatIndex>,
    queries: Arc<FlatIndex>,
    num_threads: usize,
    metric: Metric,
) -> JobReport {
    let num_queries = queries.len();
    info!(threads = num_threads, metric = metric.name(), "starting job");

    let start_time = std::time::Instant::now();

    let batch_size = 64;
    let next_batch = Arc::new(AtomicUsize::new(0));
    let handles: Vec<_> = (0..num_threads)
        .map(|_thread_id| {
            let index = Arc::clone(&index);
            let queries = Arc::clone(&queries);
            let next_batch = Arc::clone(&next_batch);

            thread::spawn(move || {
                let mut local_checksum = 0usize;
                let mut local_stats = Stats::new();

                loop {
                    // Atomically grab the next batch of work
                    let batch_start = next_batch.fetch_add(batch_size, Ordering::Relaxed);

                    if batch_start >= num_queries {
                        break;
                    }

                    let batch_end = std::cmp::min(batch_start + batch_size, num_queries);

                    for query in queries.iter().skip(batch_start).take(batch_end - batch_start) {
                        let best = black_box(index.best_match(query, metric, &mut local_stats));
                        if let Some(best) = best {
                            local_checksum += best.index;
                        }
                    }
                }

                (local_checksum, local_stats)
            })
        })
        .collect();

    let mut checksum = 0usize;
    let mut combined_stats = Stats::new();
    for handle in handles {
        let (local_checksum, local_stats) = handle.join().expect("Thread panicked");
        checksum += local_checksum;
        combined_stats = combined_stats.merge(&local_stats)
    }

    let elapsed = start_time.elapsed().as_secs_f64();
    let qps = if elapsed > 0.0 {
        num_queries as f64 / elapsed
    } else {
        0.0
    };

    info!(
        threads = num_threads,
        metric = metric.name(),
        evaluations = combined_stats.get_total_calls(),
        elements = combined_stats.get_elements_processed(),
        checksum,
        "completed {num_queries} queries in {elapsed:.2}s ({qps:.2} QPS)"
    );

    JobReport {
        threads: num_threads,
        metric: metric.name(),
        queries: num_queries,
        elapsed_secs: elapsed,
        qps,
        checksum,
        stats: combined_stats,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.dim == 0 || args.threads.contains(&0) {
        error!(dim = args.dim, threads = ?args.threads, "dim and thread counts must be positive");
        std::process::exit(2);
    }

    info!(
        dim = args.dim,
        vectors = args.num_vectors,
        queries = args.num_queries,
        seed = args.seed,
        "generating data"
    );
    let index = Arc::new(FlatIndex::random_gaussian(
        args.num_vectors,
        args.dim,
        args.seed,
    ));
    // queries use their own seed, separate from the data
    let queries = Arc::new(FlatIndex::random_gaussian(
        args.num_queries,
        args.dim,
        args.seed.wrapping_add(1),
    ));

    let jobs: Vec<(usize, Metric)> = args
        .threads
        .iter()
        .flat_map(|&t| args.metric.iter().map(move |&m| (t, m)))
        .collect();
    info!(
        threads = ?args.threads,
        metrics = ?args.metric,
        total_jobs = jobs.len(),
        "starting cartesian product sweep"
    );

    let mut reports = Vec::with_capacity(jobs.len());
    for (num_threads, metric) in tqdm(jobs.into_iter()) {
        reports.push(run_scan_job(
            Arc::clone(&index),
            Arc::clone(&queries),
            num_threads,
            metric,
        ));
    }

    info!("all jobs completed");

    if args.json {
        let report = SweepReport {
            dim: args.dim,
            num_vectors: args.num_vectors,
            seed: args.seed,
            jobs: reports,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!(error = %e, "could not serialize report");
                std::process::exit(1);
            }
        }
    }
}
