use lazy_static::lazy_static;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::Level;
use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_timing::{Builder, Histogram};
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;
use parking_lot::RwLock;
use std::time::{Duration, Instant};
use std::cell::RefCell;

const MAX_RECORDED_NS: u64 = 60_000_000_000;

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum OperationCategory {
    Evaluation,
    Screening,
    FileIO {
        subcategory: FileIOType,
    },
    Other,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum FileIOType {
    ConfigLoad,
    ResultsSave,
    Other,
}

impl OperationCategory {
    pub fn as_str(&self) -> String {
        match self {
            OperationCategory::Evaluation => "Evaluation".to_string(),
            OperationCategory::Screening => "Screening".to_string(),
            OperationCategory::FileIO { subcategory } => {
                format!("File I/O - {}", match subcategory {
                    FileIOType::ConfigLoad => "Config Load",
                    FileIOType::ResultsSave => "Results Save",
                    FileIOType::Other => "Other",
                })
            },
            OperationCategory::Other => "Other Operations".to_string(),
        }
    }
}

thread_local! {
    static TIMING_STACK: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

lazy_static! {
    static ref TIMING_ENABLED: AtomicBool = AtomicBool::new(false);
    static ref FUNCTION_TIMINGS: Arc<RwLock<HashMap<String, Histogram<u64>>>> = Arc::new(RwLock::new(HashMap::new()));
    static ref CATEGORY_TIMINGS: Arc<RwLock<HashMap<OperationCategory, Histogram<u64>>>> = Arc::new(RwLock::new(HashMap::new()));
    static ref HIERARCHICAL_TIMINGS: Arc<RwLock<HashMap<String, (Duration, usize, Vec<String>)>>> = Arc::new(RwLock::new(HashMap::new()));
}

fn new_histogram() -> Histogram<u64> {
    Histogram::<u64>::new_with_bounds(1, MAX_RECORDED_NS, 3).expect("static histogram bounds are valid")
}

pub struct TimingGuard {
    function_name: String,
    category: OperationCategory,
    start: Instant,
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        record_timing_end(&self.function_name, duration, &self.category);
    }
}

pub fn start_timing(function_name: &str, category: OperationCategory) -> TimingGuard {
    if is_timing_enabled() {
        TIMING_STACK.with(|stack| stack.borrow_mut().push(function_name.to_string()));
    }

    TimingGuard {
        function_name: function_name.to_string(),
        category,
        start: Instant::now(),
    }
}

fn record_timing_end(function_name: &str, duration: Duration, category: &OperationCategory) {
    if !is_timing_enabled() {
        return;
    }

    let duration_ns = duration.as_nanos().min(MAX_RECORDED_NS as u128) as u64;

    TIMING_STACK.with(|stack| {
        let mut stack = stack.borrow_mut();
        if stack.pop().is_some() {
            let mut hierarchical = HIERARCHICAL_TIMINGS.write();
            let entry = hierarchical
                .entry(function_name.to_string())
                .or_insert((Duration::from_nanos(0), 0, Vec::new()));

            entry.0 += duration;
            entry.1 += 1;

            if let Some(parent_name) = stack.last() {
                if !entry.2.contains(parent_name) {
                    entry.2.push(parent_name.clone());
                }
            }
        }
    });

    {
        let mut timings = FUNCTION_TIMINGS.write();
        let histogram = timings
            .entry(function_name.to_string())
            .or_insert_with(new_histogram);
        let _ = histogram.record(duration_ns);
    }

    {
        let mut category_timings = CATEGORY_TIMINGS.write();
        let histogram = category_timings
            .entry(category.clone())
            .or_insert_with(new_histogram);
        let _ = histogram.record(duration_ns);
    }
}

pub fn init_logging(enable_timing: bool, debug_logging: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
    TIMING_ENABLED.store(enable_timing, Ordering::SeqCst);

    let crate_level = if debug_logging { "energymix=debug" } else { "energymix=info" };
    let env_filter = EnvFilter::from_default_env()
        .add_directive(Level::INFO.into())
        .add_directive(crate_level.parse()?);

    if enable_timing {
        let timing_layer = Builder::default().layer(new_histogram);

        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .with(timing_layer.boxed());

        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer());

        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}

pub fn is_timing_enabled() -> bool {
    TIMING_ENABLED.load(Ordering::SeqCst)
}

pub fn print_timing_report() {
    if !is_timing_enabled() {
        return;
    }

    println!("\nDetailed Performance Report");
    println!("==========================");

    println!("\nHierarchical Timing Analysis:");
    println!("---------------------------");
    let hierarchical = HIERARCHICAL_TIMINGS.read();
    let mut entries: Vec<_> = hierarchical.iter().collect();
    entries.sort_by(|a, b| b.1.0.cmp(&a.1.0));

    for (function_name, (total_duration, count, parents)) in entries {
        let avg_duration = total_duration.div_f64(*count as f64);
        println!(
            "{}: total={:.3}s, count={}, avg={:.3}ms{}",
            function_name,
            total_duration.as_secs_f64(),
            count,
            avg_duration.as_secs_f64() * 1000.0,
            if !parents.is_empty() {
                format!("\n  Called by: {}", parents.join(", "))
            } else {
                String::new()
            }
        );
    }

    println!("\nPerformance by Category:");
    println!("------------------------");
    let category_timings = CATEGORY_TIMINGS.read();
    let mut category_vec: Vec<_> = category_timings.iter().collect();
    category_vec.sort_by(|a, b| {
        b.1.mean().partial_cmp(&a.1.mean()).unwrap_or(std::cmp::Ordering::Equal)
    });

    for (category, histogram) in category_vec {
        println!(
            "{}: mean={:.3}ms, p95={:.3}ms, count={}",
            category.as_str(),
            histogram.mean() / 1_000_000.0,
            histogram.value_at_quantile(0.95) as f64 / 1_000_000.0,
            histogram.len(),
        );
    }

    println!("==========================\n");
}
