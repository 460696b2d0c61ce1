//! link_status library: outbound link liveness checking
//!
//! This library probes purchase-link URLs for liveness in paced concurrent
//! batches and classifies every failure into a closed error taxonomy. The
//! core surface is two functions: [`check_link`] probes one URL (HEAD first,
//! GET fallback) and [`check_links_in_batch`] fans the prober out over many
//! targets under a batch-size concurrency cap with inter-batch pacing.
//!
//! # Example
//!
//! ```no_run
//! use link_status::{check_links_in_batch, BatchOptions, CheckTarget};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = link_status::initialization::init_client()?;
//! let targets = vec![
//!     CheckTarget::new("p1", "https://shop.example/desk-mat"),
//!     CheckTarget::new("p2", "https://shop.example/monitor-arm"),
//! ];
//!
//! let results = check_links_in_batch(&client, &targets, &BatchOptions::default()).await;
//! for (id, result) in &results {
//!     println!("{id}: {} ({:?})", result.status, result.http_status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod app;
mod batch;
pub mod config;
mod error_handling;
pub mod initialization;
mod models;
mod probe;

// Re-export public API
pub use batch::{check_links_in_batch, BatchOptions};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{CheckStats, ErrorKind};
pub use models::{BatchResult, CheckTarget, LinkCheckResult, LinkStatus};
pub use probe::{check_link, ProbeOptions};
pub use run::{run_check, CheckReport};

// Internal run module (orchestrates a full checking run for the CLI)
mod run {
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};
    use log::{info, warn};
    use serde::Serialize;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

    use crate::app::{
        log_progress, parse_target_line, print_check_statistics, validate_and_normalize_url,
    };
    use crate::batch::{check_links_in_batch, BatchOptions};
    use crate::config::Config;
    use crate::error_handling::CheckStats;
    use crate::initialization::init_client;
    use crate::models::{BatchResult, CheckTarget, LinkCheckResult};
    use crate::probe::ProbeOptions;

    /// Results of a link checking run.
    ///
    /// Contains summary statistics about the completed run.
    #[derive(Debug, Clone)]
    pub struct CheckReport {
        /// Number of targets actually checked
        pub total_targets: usize,
        /// Number of links classified active
        pub active: usize,
        /// Number of links classified broken
        pub broken: usize,
        /// Input lines skipped (malformed lines, invalid URLs)
        pub skipped: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// One line of the JSONL output file.
    #[derive(Serialize)]
    struct CheckRecord<'a> {
        id: &'a str,
        url: &'a str,
        #[serde(flatten)]
        result: &'a LinkCheckResult,
        checked_at: String,
    }

    /// Runs a link check with the provided configuration.
    ///
    /// This is the orchestration entry point for the CLI. It reads targets
    /// from the input file (or stdin), probes them in paced batches, logs
    /// progress and statistics, and optionally writes one JSON record per
    /// result for downstream persistence.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input file cannot be opened
    /// - The HTTP client cannot be initialized
    /// - The output file cannot be written
    ///
    /// Individual link failures are never errors; they are classified into
    /// the returned results.
    pub async fn run_check(config: Config) -> Result<CheckReport> {
        let (targets, skipped) = read_targets(&config).await?;

        if targets.is_empty() {
            warn!("No valid targets in input");
        }
        info!(
            "Checking {} links (batch size {}, delay {} ms, timeout {} ms)",
            targets.len(),
            config.batch_size,
            config.batch_delay_ms,
            config.timeout_ms
        );

        let client = init_client().context("Failed to initialize HTTP client")?;
        let options = BatchOptions {
            batch_size: config.batch_size,
            delay: Duration::from_millis(config.batch_delay_ms),
            probe: ProbeOptions {
                timeout: Duration::from_millis(config.timeout_ms),
                user_agent: config.user_agent.clone(),
            },
        };

        let start_time = Instant::now();
        let results = check_links_in_batch(&client, &targets, &options).await;

        let stats = CheckStats::new();
        for result in results.values() {
            stats.record(result);
        }

        log_progress(start_time, results.len(), targets.len());
        print_check_statistics(&stats);

        if let Some(path) = &config.output {
            write_jsonl(path, &targets, &results)
                .await
                .with_context(|| format!("Failed to write results to {}", path.display()))?;
            info!("Results written to {}", path.display());
        }

        Ok(CheckReport {
            total_targets: targets.len(),
            active: stats.active_count(),
            broken: stats.broken_count(),
            skipped,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

    /// Reads and validates targets from the configured input. Returns the
    /// target list plus the count of skipped lines.
    async fn read_targets(config: &Config) -> Result<(Vec<CheckTarget>, usize)> {
        let mut targets = Vec::new();
        let mut skipped = 0usize;

        let mut push_line = |line: &str| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return;
            }
            let Some((id, url)) = parse_target_line(trimmed) else {
                skipped += 1;
                return;
            };
            match validate_and_normalize_url(&url) {
                Some(url) => targets.push(CheckTarget::new(id, url)),
                None => skipped += 1,
            }
        };

        if config.file.as_os_str() == "-" {
            info!("Reading targets from stdin");
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
                push_line(&line);
            }
        } else {
            let file = tokio::fs::File::open(&config.file)
                .await
                .with_context(|| format!("Failed to open input file {}", config.file.display()))?;
            let mut lines = BufReader::new(file).lines();
            while let Some(line) = lines.next_line().await.context("Failed to read input file")? {
                push_line(&line);
            }
        }

        Ok((targets, skipped))
    }

    /// Writes one JSON record per target, in input order.
    async fn write_jsonl(
        path: &std::path::Path,
        targets: &[CheckTarget],
        results: &BatchResult,
    ) -> Result<()> {
        let checked_at = chrono::Utc::now().to_rfc3339();
        let mut out = tokio::fs::File::create(path).await?;
        for target in targets {
            let Some(result) = results.get(&target.id) else {
                continue;
            };
            let record = CheckRecord {
                id: &target.id,
                url: &target.url,
                result,
                checked_at: checked_at.clone(),
            };
            let mut line = serde_json::to_string(&record)?;
            line.push('\n');
            out.write_all(line.as_bytes()).await?;
        }
        out.flush().await?;
        Ok(())
    }
}
