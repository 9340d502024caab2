//! Fan-out of partitioned enumerations over a rayon thread pool.
//!
//! Every partition is drained by a single worker with its own enumerator
//! state, so the workers share nothing but the callback.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use super::domain::DerivePolicy;
use super::options::ParallelOptions;
use super::sequence::SequenceEnumerator;
use super::Result;

fn build_pool(opts: &ParallelOptions) -> Result<ThreadPool> {
    Ok(ThreadPoolBuilder::new().num_threads(opts.threads).build()?)
}

/// Count the outputs of all partitions.
pub fn count<T, P>(parts: Vec<SequenceEnumerator<T, P>>, opts: &ParallelOptions) -> Result<usize>
where
    T: Clone + Send,
    P: DerivePolicy + Send,
{
    let pool = build_pool(opts)?;
    Ok(pool.install(|| parts.into_par_iter().map(|part| part.count()).sum()))
}

/// Call `f` on every output of every partition. Outputs of one partition
/// arrive in order; across partitions there is no ordering.
pub fn for_each<T, P, F>(
    parts: Vec<SequenceEnumerator<T, P>>,
    opts: &ParallelOptions,
    f: F,
) -> Result<()>
where
    T: Clone + Send,
    P: DerivePolicy + Send,
    F: Fn(Vec<T>) + Send + Sync,
{
    let pool = build_pool(opts)?;
    pool.install(|| parts.into_par_iter().for_each(|part| part.for_each(&f)));
    Ok(())
}

/// Collect the outputs of all partitions, in partition order.
pub fn collect<T, P>(parts: Vec<SequenceEnumerator<T, P>>, opts: &ParallelOptions) -> Result<Vec<Vec<T>>>
where
    T: Clone + Send,
    P: DerivePolicy + Send,
{
    let pool = build_pool(opts)?;
    let per_part: Vec<Vec<Vec<T>>> =
        pool.install(|| parts.into_par_iter().map(|part| part.collect()).collect());
    Ok(per_part.into_iter().flatten().collect())
}
