use iced::executor;
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

/// Spawns the app's futures on a shared tokio runtime; reqwest requires a
/// tokio reactor, which iced's default executor does not provide here.
#[derive(Debug)]
pub struct TokioExecutor {
    runtime: Arc<Runtime>,
}

impl executor::Executor for TokioExecutor {
    fn new() -> Result<Self, std::io::Error> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("xrp-tracker-io")
            .enable_all()
            .build()?;
        Ok(Self {
            runtime: Arc::new(runtime),
        })
    }

    fn spawn(&self, future: impl std::future::Future<Output = ()> + Send + 'static) {
        self.runtime.spawn(future);
    }
}
