use super::actions::Action;
use crate::catalog::{PageQuery, PageSource, Prize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs catalog calls in the background and reports their outcome as
/// [`Action`]s on a channel the UI loop drains every frame
pub struct TaskManager {
    source: Arc<dyn PageSource<Prize>>,
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new(source: Arc<dyn PageSource<Prize>>) -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                source,
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn spawn<F>(&mut self, description: String, future: F) -> TaskId
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.cleanup_finished_tasks();

        let task_id = self.next_task_id;
        self.next_task_id += 1;

        log::debug!("Spawning task {}: {}", task_id, description);
        let task = BackgroundTask {
            id: task_id,
            handle: tokio::spawn(future),
            description,
            started_at: std::time::Instant::now(),
        };
        self.tasks.insert(task_id, task);
        task_id
    }

    /// Fetch one page. `request` tags the result so stale pages can be dropped.
    pub fn spawn_fetch(&mut self, request: u64, query: PageQuery) -> TaskId {
        let source = Arc::clone(&self.source);
        let sender = self.action_sender.clone();
        let description = format!("Fetch page {} (request {})", query.page, request);

        self.spawn(description, async move {
            let action = match source.fetch_page(query).await {
                Ok(page) => Action::PageLoaded { request, page },
                Err(e) => Action::PageFailed {
                    request,
                    error: e.to_string(),
                },
            };
            let _ = sender.send(action);
        })
    }

    pub fn spawn_load_categories(&mut self) -> TaskId {
        let source = Arc::clone(&self.source);
        let sender = self.action_sender.clone();

        self.spawn("Load categories".to_string(), async move {
            match source.categories().await {
                Ok(options) => {
                    let _ = sender.send(Action::CategoriesLoaded(options));
                }
                Err(e) => log::warn!("Failed to load categories: {}", e),
            }
        })
    }

    pub fn spawn_bulk_action(&mut self, action_id: String, row_ids: Vec<String>) -> TaskId {
        let source = Arc::clone(&self.source);
        let sender = self.action_sender.clone();
        let description = format!("Bulk '{}' on {} rows", action_id, row_ids.len());

        self.spawn(description, async move {
            let action = match source.bulk_action(&action_id, &row_ids).await {
                Ok(affected) => Action::BulkCompleted { action_id, affected },
                Err(e) => Action::BulkFailed {
                    action_id,
                    error: e.to_string(),
                },
            };
            let _ = sender.send(action);
        })
    }

    pub fn spawn_row_action(&mut self, action_id: String, row_id: String) -> TaskId {
        let source = Arc::clone(&self.source);
        let sender = self.action_sender.clone();
        let description = format!("Row '{}' on {}", action_id, row_id);

        self.spawn(description, async move {
            let action = match source.row_action(&action_id, &row_id).await {
                Ok(()) => Action::RowActionCompleted { action_id, row_id },
                Err(e) => Action::RowActionFailed {
                    action_id,
                    error: e.to_string(),
                },
            };
            let _ = sender.send(action);
        })
    }

    pub fn running_tasks(&self) -> usize {
        self.tasks.values().filter(|task| !task.handle.is_finished()).count()
    }

    /// Forget tasks that already finished
    pub fn cleanup_finished_tasks(&mut self) {
        self.tasks.retain(|_, task| !task.handle.is_finished());
    }

    /// Abort every running task
    pub fn shutdown(&mut self) {
        for (_, task) in self.tasks.drain() {
            log::debug!(
                "Aborting task {} ({}) after {:?}",
                task.id,
                task.description,
                task.started_at.elapsed()
            );
            task.handle.abort();
        }
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.shutdown();
    }
}
