//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{CategoryRow, NewCategoryRow, NewTaskRow, TaskRow},
    schema::{categories, tasks},
};
use crate::task::{
    domain::{Category, CategoryId, PersistedTaskData, Task, TaskId},
    ports::{TaskPredicate, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn include_tasks(&self, tasks: &[Task]) -> TaskRepositoryResult<Vec<Task>> {
        if let Some(id) = tasks.iter().find_map(Task::id) {
            return Err(TaskRepositoryError::AlreadyPersisted(id));
        }

        let pending = tasks.to_vec();
        let stored = self
            .run_blocking(move |connection| {
                connection
                    .transaction::<Vec<Task>, TransactionError, _>(|conn| {
                        let mut batch = BatchCategories::new();
                        pending
                            .iter()
                            .map(|task| insert_task(conn, &mut batch, task))
                            .collect()
                    })
                    .map_err(TaskRepositoryError::from)
            })
            .await?;

        tracing::debug!(count = stored.len(), "included tasks in postgres");
        Ok(stored)
    }

    async fn find_tasks(&self, predicate: &TaskPredicate) -> TaskRepositoryResult<Vec<Task>> {
        let rows = self
            .run_blocking(|connection| {
                tasks::table
                    .inner_join(categories::table)
                    .order(tasks::id.asc())
                    .select((TaskRow::as_select(), CategoryRow::as_select()))
                    .load::<(TaskRow, CategoryRow)>(connection)
                    .map_err(TaskRepositoryError::persistence)
            })
            .await?;

        let mut found = Vec::new();
        for (task_row, category_row) in rows {
            let task = row_to_task(task_row, category_row)?;
            if predicate(&task) {
                found.push(task);
            }
        }
        Ok(found)
    }

    async fn category_by_id(&self, id: CategoryId) -> TaskRepositoryResult<Option<Category>> {
        self.run_blocking(move |connection| {
            let row = find_category(connection, id).map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_category).transpose()
        })
        .await
    }
}

/// Failure inside an insert transaction.
#[derive(Debug)]
enum TransactionError {
    Repository(TaskRepositoryError),
    Database(DieselError),
}

impl From<DieselError> for TransactionError {
    fn from(err: DieselError) -> Self {
        Self::Database(err)
    }
}

impl From<TaskRepositoryError> for TransactionError {
    fn from(err: TaskRepositoryError) -> Self {
        Self::Repository(err)
    }
}

impl From<TransactionError> for TaskRepositoryError {
    fn from(err: TransactionError) -> Self {
        match err {
            TransactionError::Repository(inner) => inner,
            TransactionError::Database(inner) => Self::persistence(inner),
        }
    }
}

/// Unsaved categories inserted earlier in the same transaction.
type BatchCategories = Vec<(Category, Category)>;

fn insert_task(
    conn: &mut PgConnection,
    batch: &mut BatchCategories,
    task: &Task,
) -> Result<Task, TransactionError> {
    let (category_id, category) = resolve_category(conn, batch, task.category())?;
    let row = diesel::insert_into(tasks::table)
        .values(&to_new_row(task, category_id))
        .returning(TaskRow::as_returning())
        .get_result::<TaskRow>(conn)?;
    let id = TaskId::new(row.id).map_err(TaskRepositoryError::persistence)?;
    Ok(task.with_id(id, category))
}

/// Returns the stored category, inserting it first when it has no
/// identifier yet and no equal category was inserted earlier in the batch.
fn resolve_category(
    conn: &mut PgConnection,
    batch: &mut BatchCategories,
    category: &Category,
) -> Result<(CategoryId, Category), TransactionError> {
    if let Some(id) = category.id() {
        let row = find_category(conn, id)?.ok_or(TaskRepositoryError::UnknownCategory(id))?;
        return Ok((id, row_to_category(row)?));
    }
    if let Some((_, stored)) = batch.iter().find(|(unsaved, _)| unsaved == category)
        && let Some(id) = stored.id()
    {
        return Ok((id, stored.clone()));
    }

    let row = diesel::insert_into(categories::table)
        .values(&NewCategoryRow {
            name: category.name().to_owned(),
        })
        .returning(CategoryRow::as_returning())
        .get_result::<CategoryRow>(conn)?;
    let id = CategoryId::new(row.id).map_err(TaskRepositoryError::persistence)?;
    let stored = category.persisted_as(id);
    batch.push((category.clone(), stored.clone()));
    Ok((id, stored))
}

fn find_category(
    conn: &mut PgConnection,
    id: CategoryId,
) -> Result<Option<CategoryRow>, DieselError> {
    categories::table
        .find(id.value())
        .select(CategoryRow::as_select())
        .first::<CategoryRow>(conn)
        .optional()
}

fn to_new_row(task: &Task, category_id: CategoryId) -> NewTaskRow {
    NewTaskRow {
        title: task.title().to_owned(),
        category_id: category_id.value(),
        due_date: task.due_date(),
        created_at: task.created_at(),
        completed: task.is_completed(),
    }
}

fn row_to_category(row: CategoryRow) -> TaskRepositoryResult<Category> {
    let id = CategoryId::new(row.id).map_err(TaskRepositoryError::persistence)?;
    Category::with_id(id, row.name).map_err(TaskRepositoryError::persistence)
}

fn row_to_task(task_row: TaskRow, category_row: CategoryRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        category_id,
        due_date,
        created_at,
        completed,
    } = task_row;

    debug_assert_eq!(
        category_id, category_row.id,
        "joined category row must match the task's category"
    );

    let data = PersistedTaskData {
        id: TaskId::new(id).map_err(TaskRepositoryError::persistence)?,
        title,
        category: row_to_category(category_row)?,
        due_date,
        created_at,
        completed,
    };
    Ok(Task::from_persisted(data))
}
