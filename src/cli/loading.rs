use crate::display::ProgressSpinner;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;

/// Follows a view-model's published state and spins while it is loading
pub struct LoadingIndicator {
    task: Option<JoinHandle<()>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl LoadingIndicator {
    pub fn spawn<S>(
        mut receiver: watch::Receiver<S>,
        is_loading: fn(&S) -> bool,
        message: &str,
        enabled: bool,
    ) -> Self
    where
        S: Send + Sync + 'static,
    {
        if !enabled {
            return Self {
                task: None,
                shutdown: None,
            };
        }

        let (shutdown, mut shutdown_rx) = oneshot::channel();
        let message = message.to_string();
        let task = tokio::spawn(async move {
            let mut spinner = ProgressSpinner::new(message);
            loop {
                let loading = is_loading(&receiver.borrow_and_update());
                if loading {
                    spinner.start();
                } else {
                    spinner = stop_spinner(spinner).await;
                }

                tokio::select! {
                    changed = receiver.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                    _ = &mut shutdown_rx => break,
                }
            }
            stop_spinner(spinner).await;
        });

        Self {
            task: Some(task),
            shutdown: Some(shutdown),
        }
    }

    /// Stop following and wait until the spinner line is cleared
    pub async fn finish(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for LoadingIndicator {
    fn drop(&mut self) {
        // The task clears the line on its own once signalled
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

/// Joining the spinner thread blocks, so it runs on the blocking pool
async fn stop_spinner(mut spinner: ProgressSpinner) -> ProgressSpinner {
    if !spinner.is_running() {
        return spinner;
    }

    let message = spinner.message().to_string();
    tokio::task::spawn_blocking(move || {
        spinner.stop();
        spinner
    })
    .await
    .unwrap_or_else(|_| ProgressSpinner::new(message))
}
