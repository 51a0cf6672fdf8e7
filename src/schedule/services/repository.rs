//! Task repository: validated CRUD over the persisted task list.

use crate::schedule::{
    config::PlannerConfig,
    domain::{ScheduleTime, Task, TaskDetails, TaskId, is_task_list_sorted, sort_tasks_in_place},
    ports::KeyValueStore,
    storage::{PersistentStore, PersistentValue, StorageError},
    validation::{FormValidationError, TaskFormData, TaskFormValidator},
};
use mockable::Clock;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Errors returned by task repository operations.
///
/// Storage failures are deliberately absent: they never undo a mutation
/// and are reported through [`TaskRepository::error`] instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskRepositoryError {
    /// The submitted form failed validation.
    #[error(transparent)]
    Validation(#[from] FormValidationError),

    /// No task has the given identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Owns the sorted task list and keeps it persisted.
///
/// Every mutation validates first, applies to the in-memory list, restores
/// the sort order, and writes the whole list through. The list observed via
/// [`Self::tasks`] is always sorted and free of duplicate identifiers.
#[derive(Debug)]
pub struct TaskRepository<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    tasks: PersistentValue<Vec<Task>, S>,
    clock: Arc<C>,
    validator: TaskFormValidator,
}

impl<S, C> TaskRepository<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Loads the task list from `store` under the default configuration.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_config(store, clock, &PlannerConfig::default())
    }

    /// Loads the task list from `store` under `config`.
    ///
    /// Unreadable or corrupt stored data yields an empty list and a storage
    /// error; see [`Self::error`].
    #[must_use]
    pub fn with_config(store: Arc<S>, clock: Arc<C>, config: &PlannerConfig) -> Self {
        let mut tasks = PersistentValue::load(
            PersistentStore::new(store),
            config.storage_key.clone(),
            Vec::new(),
        );
        restore_invariants(&mut tasks);
        Self {
            tasks,
            clock,
            validator: TaskFormValidator::from_config(config),
        }
    }

    /// Returns the current tasks in schedule order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.tasks.value()
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks().len()
    }

    /// Returns `true` when no tasks are scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks().is_empty()
    }

    /// Returns the latest storage error, cleared by the next successful
    /// storage operation.
    #[must_use]
    pub const fn error(&self) -> Option<&StorageError> {
        self.tasks.error()
    }

    /// Forgets the current storage error, e.g. once the user dismissed it.
    pub fn dismiss_error(&mut self) {
        self.tasks.dismiss_error();
    }

    /// Validates `form` and schedules a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Validation`] listing every invalid
    /// field; nothing is changed in that case.
    pub fn add(&mut self, form: &TaskFormData) -> TaskRepositoryResult<Task> {
        let details = self.validate(form)?;
        let task = Task::new(details, &*self.clock);
        debug!(task_id = %task.id(), time = %task.time(), "adding task");

        let stored = task.clone();
        self.commit(move |tasks| tasks.push(stored));
        Ok(task)
    }

    /// Validates `form` and replaces the time, title, and priority of the
    /// task `id`, keeping its identifier and creation time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Validation`] when the form is invalid
    /// (checked first) or [`TaskRepositoryError::NotFound`] when no task has
    /// `id`. Nothing is changed in either case.
    pub fn update(&mut self, id: &TaskId, form: &TaskFormData) -> TaskRepositoryResult<Task> {
        let details = self.validate(form)?;
        let index = self.position(id)?;
        let revised = self
            .tasks()
            .get(index)
            .map(|current| current.revised(details))
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))?;
        debug!(task_id = %id, time = %revised.time(), "updating task");

        let stored = revised.clone();
        self.commit(move |tasks| {
            if let Some(slot) = tasks.get_mut(index) {
                *slot = stored;
            }
        });
        Ok(revised)
    }

    /// Removes the task `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task has `id`.
    pub fn delete(&mut self, id: &TaskId) -> TaskRepositoryResult<Task> {
        let index = self.position(id)?;
        let removed = self
            .tasks()
            .get(index)
            .cloned()
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))?;
        debug!(task_id = %id, "deleting task");

        self.commit(move |tasks| {
            tasks.remove(index);
        });
        Ok(removed)
    }

    /// Removes every task.
    pub fn clear_all(&mut self) {
        debug!(count = self.len(), "clearing all tasks");
        self.commit(Vec::clear);
    }

    /// Returns the task with identifier `id`, if any.
    #[must_use]
    pub fn get_by_id(&self, id: &TaskId) -> Option<&Task> {
        self.tasks().iter().find(|task| task.id() == id)
    }

    /// Returns every task scheduled at `time`, in schedule order.
    #[must_use]
    pub fn get_by_time(&self, time: ScheduleTime) -> Vec<&Task> {
        self.tasks()
            .iter()
            .filter(|task| task.time() == time)
            .collect()
    }

    /// Returns `true` when a task has identifier `id`.
    #[must_use]
    pub fn exists(&self, id: &TaskId) -> bool {
        self.get_by_id(id).is_some()
    }

    /// Re-reads the stored list, picking up another writer's last write.
    pub fn reload(&mut self) {
        self.tasks.reload(Vec::new());
        restore_invariants(&mut self.tasks);
    }

    fn validate(&self, form: &TaskFormData) -> Result<TaskDetails, FormValidationError> {
        self.validator.validate_and_sanitize(form).into_details()
    }

    fn position(&self, id: &TaskId) -> TaskRepositoryResult<usize> {
        self.tasks()
            .iter()
            .position(|task| task.id() == id)
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))
    }

    /// Applies `mutate`, restores the order, and writes the list through.
    ///
    /// A failed write is kept as the current storage error; the in-memory
    /// change stands.
    fn commit(&mut self, mutate: impl FnOnce(&mut Vec<Task>)) {
        let outcome = self.tasks.update(|tasks| {
            mutate(tasks);
            sort_tasks_in_place(tasks);
        });
        if let Err(err) = outcome {
            debug!(error = %err, "task list change kept in memory only");
        }
    }
}

/// Sorts a freshly loaded list and drops repeated identifiers.
///
/// Persisted data may come from an older build or another writer; only the
/// in-memory view is repaired; nothing is written back until the next
/// mutation.
fn restore_invariants<S: KeyValueStore>(tasks: &mut PersistentValue<Vec<Task>, S>) {
    let loaded = tasks.value();
    let mut seen = HashSet::with_capacity(loaded.len());
    let has_duplicates = !loaded.iter().all(|task| seen.insert(task.id()));
    if !has_duplicates && is_task_list_sorted(loaded) {
        return;
    }

    let mut repaired = Vec::with_capacity(loaded.len());
    let mut kept = HashSet::with_capacity(loaded.len());
    for task in loaded {
        if kept.insert(task.id().clone()) {
            repaired.push(task.clone());
        } else {
            warn!(task_id = %task.id(), "dropping duplicate stored task");
        }
    }
    sort_tasks_in_place(&mut repaired);
    tasks.replace_in_memory(repaired);
}
