use std::path::PathBuf;

use rayon::prelude::*;

use crate::compose::compose;
use crate::encode::jpeg::write_jpeg;
use crate::foundation::error::{VeloError, VeloResult};
use crate::job::Job;
use crate::text::font::FontBook;

/// Where and how a job list is rendered.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Asset directory; created implicitly, existing files overwritten.
    pub out_dir: PathBuf,
    /// Render independent jobs on a rayon pool instead of sequentially.
    pub parallel: bool,
    /// Worker thread override (parallel mode only).
    pub threads: Option<usize>,
}

impl RunOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            parallel: false,
            threads: None,
        }
    }
}

/// Summary of one [`run_jobs`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub jobs_total: u64,
    pub jobs_written: u64,
}

/// Compose and encode every job in `jobs` into `opts.out_dir`.
///
/// Jobs are independent and write disjoint paths, so parallel mode needs
/// no ordering guarantees; outputs are identical either way.
#[tracing::instrument(skip_all, fields(jobs = jobs.len(), parallel = opts.parallel))]
pub fn run_jobs(jobs: &[Job], fonts: &FontBook, opts: &RunOptions) -> VeloResult<RunStats> {
    std::fs::create_dir_all(&opts.out_dir).map_err(|e| {
        VeloError::encode(format!(
            "cannot create output dir '{}': {e}",
            opts.out_dir.display()
        ))
    })?;

    if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        let results: Vec<VeloResult<()>> = pool.install(|| {
            jobs.par_iter()
                .map(|job| render_one(job, fonts, opts))
                .collect()
        });
        for result in results {
            result?;
        }
    } else {
        for job in jobs {
            render_one(job, fonts, opts)?;
        }
    }

    let total = jobs.len() as u64;
    Ok(RunStats {
        jobs_total: total,
        jobs_written: total,
    })
}

fn render_one(job: &Job, fonts: &FontBook, opts: &RunOptions) -> VeloResult<()> {
    let surface = compose(job, fonts)?;
    let path = opts.out_dir.join(&job.file_name);
    write_jpeg(&surface, &path, job.quality)?;
    tracing::info!(
        file = %job.file_name,
        width = job.width,
        height = job.height,
        "wrote asset"
    );
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> VeloResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(VeloError::validation(
            "run option 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| VeloError::validation(format!("failed to build rayon thread pool: {e}")))
}
