use crate::data_processing::payload_summary::PayloadSummary;
use crate::explorer::reshaping::{reshape_stats_table, StatsPage};
use crate::stat_aggregation::entity_catalog::EntityCatalog;
use crate::stat_aggregation::stat_layout::StatLayout;

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use rayon::ThreadPoolBuilder;
use serde_json::Value;
use std::fs::{read_dir, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Reshapes every saved stats payload of a directory in parallel.
///
/// # Arguments
///
/// * `dir_path` - The directory containing `*.json` payload files.
/// * `num_threads` - The number of threads to use for parallel processing.
/// * `page` - Whether the payloads are reshaped into weapon or map tables.
///
/// # Returns
///
/// One `PayloadSummary` per readable payload, sorted by file name.
pub fn process_payloads_in_parallel(
    dir_path: &Path,
    num_threads: usize,
    page: StatsPage,
) -> Vec<PayloadSummary> {
    let mut summaries = process_directory(dir_path, num_threads, page);
    summaries.sort_by(|s1, s2| s1.file_name.cmp(&s2.file_name));
    summaries
}

/// Processes the payload files of a directory on a dedicated thread pool.
///
/// If the thread pool cannot be created, the error is logged and no summaries are returned.
///
/// # Arguments
///
/// * `dir_path` - The directory containing payload files.
/// * `num_threads` - The number of threads of the pool.
/// * `page` - The table layout to reshape into.
///
/// # Returns
///
/// The summaries of every payload that could be read, in no particular order.
fn process_directory(dir_path: &Path, num_threads: usize, page: StatsPage) -> Vec<PayloadSummary> {
    let thread_pool = match ThreadPoolBuilder::new().num_threads(num_threads).build() {
        Ok(pool) => pool,
        Err(err) => {
            error!("Error creating thread pool: {}", err);
            return Vec::new();
        }
    };

    let (catalog, layout) = match page {
        StatsPage::Weapons => (EntityCatalog::weapons(), StatLayout::weapons()),
        StatsPage::Maps => (EntityCatalog::maps(), StatLayout::maps()),
    };
    let keys = catalog.keys();

    thread_pool.install(|| {
        let paths: Vec<PathBuf> = collect_json_files(dir_path);

        paths
            .par_iter()
            .filter_map(|path| process_file(path, &keys, &layout))
            .collect()
    })
}

/// Collects all JSON files from the specified directory.
///
/// # Arguments
///
/// * `dir_path` - The directory containing payload files.
///
/// # Returns
///
/// The paths of all `*.json` files found, or an empty `Vec` if the directory cannot be read.
fn collect_json_files(dir_path: &Path) -> Vec<PathBuf> {
    match read_dir(dir_path) {
        Ok(dir) => dir
            .flatten()
            .map(|d| d.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect(),
        Err(err) => {
            error!("Error reading directory {}: {}", dir_path.display(), err);
            Vec::new()
        }
    }
}

/// Reads and reshapes a single payload file.
///
/// # Arguments
///
/// * `path` - The path to the payload file.
/// * `keys` - The entity keys of the table.
/// * `layout` - The table layout.
///
/// # Returns
///
/// The file's summary, or `None` if the file cannot be opened, is not JSON, or does not have
/// the stats payload shape.
fn process_file(path: &Path, keys: &[&str], layout: &StatLayout) -> Option<PayloadSummary> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            warn!("Error opening file {}: {}", path.display(), err);
            return None;
        }
    };

    let payload: Value = match serde_json::from_reader(BufReader::new(file)) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("Error parsing file {}: {}", path.display(), err);
            return None;
        }
    };

    match reshape_stats_table(&payload, keys, layout) {
        Ok(table) => {
            debug!("Reshaped {}", path.display());
            Some(PayloadSummary {
                file_name: file_name_of(path),
                table,
            })
        }
        Err(err) => {
            warn!("Skipping {}: {}", path.display(), err);
            None
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
