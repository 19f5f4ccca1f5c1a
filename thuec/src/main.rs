//! Completion of word relations and normalisation of words.

use clap::Parser;
use thuec::{Error, Opt, PathRead, Session};

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<(), Error> {
    let opt = Opt::parse();

    opt.logger().init();

    // if a precise number of parallel jobs has been given
    if let Some(Some(jobs)) = opt.jobs {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs);
        if let Err(e) = pool.build_global() {
            log::warn!("Could not set up {} jobs: {}", jobs, e)
        }
    }

    let mut session = Session::new();
    for file in PathRead::from_pathbufs(&opt.files) {
        let file = file?;
        log::info!("Read {}", file.path.display());
        session.read(&file.read)?
    }
    print!("{}", session.finish(&opt)?);
    Ok(())
}
