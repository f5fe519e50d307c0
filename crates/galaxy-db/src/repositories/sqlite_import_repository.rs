//! `SQLite` implementation of the `ImportRepository` trait.

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use galaxy_core::{
    CollectionImport, ImportFilter, ImportRepository, ImportScope, ImportSort,
    NewCollectionImport, PageRequest, RepositoryError,
};

use super::row_mappers::{
    IMPORT_SELECT_COLUMNS, format_datetime, insert_error, row_to_import, storage_error,
};

/// Import ownership records in `collection_imports`.
///
/// Ownership is derived through the namespace: a caller scoped to a set of
/// groups sees the imports of every namespace one of those groups owns.
pub struct SqliteImportRepository {
    pool: SqlitePool,
}

impl SqliteImportRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Append the scope restriction. `qb` must already contain a `WHERE` clause.
fn push_scope(qb: &mut QueryBuilder<'_, Sqlite>, scope: &ImportScope) {
    match scope {
        ImportScope::All => {}
        ImportScope::OwnedBy(groups) if groups.is_empty() => {
            qb.push(" AND 0 = 1");
        }
        ImportScope::OwnedBy(groups) => {
            qb.push(
                " AND namespace IN (SELECT n.name FROM namespaces n \
                 JOIN namespace_groups g ON g.namespace_id = n.id WHERE g.group_name IN (",
            );
            let mut binds = qb.separated(", ");
            for group in groups {
                binds.push_bind(group.clone());
            }
            qb.push("))");
        }
    }
}

fn push_filter(qb: &mut QueryBuilder<'_, Sqlite>, filter: &ImportFilter) {
    if let Some(namespace) = &filter.namespace {
        qb.push(" AND namespace = ").push_bind(namespace.clone());
    }
    if let Some(name) = &filter.name {
        qb.push(" AND name = ").push_bind(name.clone());
    }
    if let Some(version) = &filter.version {
        qb.push(" AND version = ").push_bind(version.clone());
    }
    if let Some(day) = filter.created {
        qb.push(" AND substr(created_at, 1, 10) = ")
            .push_bind(day.format("%Y-%m-%d").to_string());
    }
}

const fn order_clause(sort: ImportSort) -> &'static str {
    match sort {
        ImportSort::CreatedAsc => " ORDER BY created_at ASC, id ASC",
        ImportSort::CreatedDesc => " ORDER BY created_at DESC, id DESC",
    }
}

fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl ImportRepository for SqliteImportRepository {
    async fn get(
        &self,
        task_id: &str,
        scope: &ImportScope,
    ) -> Result<CollectionImport, RepositoryError> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {IMPORT_SELECT_COLUMNS} FROM collection_imports WHERE task_id = "
        ));
        qb.push_bind(task_id.to_string());
        push_scope(&mut qb, scope);

        let row = qb
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("import task {task_id}")))?;

        row_to_import(&row)
    }

    async fn list(
        &self,
        filter: &ImportFilter,
        scope: &ImportScope,
        page: PageRequest,
    ) -> Result<(Vec<CollectionImport>, u64), RepositoryError> {
        let mut count_qb: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(*) FROM collection_imports WHERE 1 = 1");
        push_scope(&mut count_qb, scope);
        push_filter(&mut count_qb, filter);

        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {IMPORT_SELECT_COLUMNS} FROM collection_imports WHERE 1 = 1"
        ));
        push_scope(&mut qb, scope);
        push_filter(&mut qb, filter);
        qb.push(order_clause(filter.sort));
        qb.push(" LIMIT ")
            .push_bind(to_sql_int(page.limit))
            .push(" OFFSET ")
            .push_bind(to_sql_int(page.offset));

        let rows = qb.build().fetch_all(&self.pool).await.map_err(storage_error)?;
        let imports = rows
            .iter()
            .map(row_to_import)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((imports, u64::try_from(total).unwrap_or_default()))
    }

    async fn insert(
        &self,
        import: &NewCollectionImport,
    ) -> Result<CollectionImport, RepositoryError> {
        sqlx::query(
            "INSERT INTO collection_imports (task_id, namespace, name, version, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&import.task_id)
        .bind(&import.namespace)
        .bind(&import.name)
        .bind(&import.version)
        .bind(format_datetime(&import.created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| insert_error(e, &format!("import task {}", import.task_id)))?;

        tracing::debug!(task_id = %import.task_id, namespace = %import.namespace, "Recorded import");

        Ok(CollectionImport {
            task_id: import.task_id.clone(),
            namespace: import.namespace.clone(),
            name: import.name.clone(),
            version: import.version.clone(),
            created_at: import.created_at,
        })
    }
}
