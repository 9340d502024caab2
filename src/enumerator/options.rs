/// Options for running partitions on a thread pool.
#[derive(Debug, Copy, Clone)]
pub struct ParallelOptions {
    /// How many worker threads to use. The default is the number of CPUs.
    pub threads: usize,
}

impl ParallelOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn threads(&mut self, threads: usize) -> &mut Self {
        self.threads = threads;
        self
    }
}

impl Default for ParallelOptions {
    fn default() -> Self {
        Self {
            threads: num_cpus::get(),
        }
    }
}
