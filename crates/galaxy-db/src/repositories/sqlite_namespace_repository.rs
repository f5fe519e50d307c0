//! `SQLite` implementation of the `NamespaceRepository` trait.

use async_trait::async_trait;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use std::collections::HashMap;

use galaxy_core::{Namespace, NamespaceRepository, NewNamespace, RepositoryError};

use super::row_mappers::{NAMESPACE_SELECT_COLUMNS, insert_error, row_to_namespace, storage_error};

/// Namespaces and their owning groups, stored in `namespaces` and
/// `namespace_groups`.
pub struct SqliteNamespaceRepository {
    pool: SqlitePool,
}

impl SqliteNamespaceRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fill in `groups` for each namespace with a single query.
    async fn attach_groups(
        &self,
        mut namespaces: Vec<Namespace>,
    ) -> Result<Vec<Namespace>, RepositoryError> {
        if namespaces.is_empty() {
            return Ok(namespaces);
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT namespace_id, group_name FROM namespace_groups WHERE namespace_id IN (",
        );
        let mut ids = qb.separated(", ");
        for ns in &namespaces {
            ids.push_bind(ns.id);
        }
        qb.push(") ORDER BY group_name");

        let rows = qb.build().fetch_all(&self.pool).await.map_err(storage_error)?;

        let mut by_id: HashMap<i64, Vec<String>> = HashMap::new();
        for row in &rows {
            let id: i64 = row.try_get("namespace_id").map_err(storage_error)?;
            let group: String = row.try_get("group_name").map_err(storage_error)?;
            by_id.entry(id).or_default().push(group);
        }

        for ns in &mut namespaces {
            ns.groups = by_id.remove(&ns.id).unwrap_or_default();
        }
        Ok(namespaces)
    }
}

#[async_trait]
impl NamespaceRepository for SqliteNamespaceRepository {
    async fn get_by_name(&self, name: &str) -> Result<Namespace, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {NAMESPACE_SELECT_COLUMNS} FROM namespaces WHERE name = ?"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?
        .ok_or_else(|| RepositoryError::NotFound(format!("namespace {name}")))?;

        let ns = row_to_namespace(&row)?;
        let mut loaded = self.attach_groups(vec![ns]).await?;
        loaded
            .pop()
            .ok_or_else(|| RepositoryError::NotFound(format!("namespace {name}")))
    }

    async fn get_by_names(&self, names: &[String]) -> Result<Vec<Namespace>, RepositoryError> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {NAMESPACE_SELECT_COLUMNS} FROM namespaces WHERE name IN ("
        ));
        let mut binds = qb.separated(", ");
        for name in names {
            binds.push_bind(name.clone());
        }
        qb.push(") ORDER BY name");

        let rows = qb.build().fetch_all(&self.pool).await.map_err(storage_error)?;
        let namespaces = rows
            .iter()
            .map(row_to_namespace)
            .collect::<Result<Vec<_>, _>>()?;

        self.attach_groups(namespaces).await
    }

    async fn list(&self) -> Result<Vec<Namespace>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {NAMESPACE_SELECT_COLUMNS} FROM namespaces ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        let namespaces = rows
            .iter()
            .map(row_to_namespace)
            .collect::<Result<Vec<_>, _>>()?;

        self.attach_groups(namespaces).await
    }

    async fn insert(&self, namespace: &NewNamespace) -> Result<Namespace, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        let result = sqlx::query(
            "INSERT INTO namespaces (name, company, email, avatar_url, description) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&namespace.name)
        .bind(&namespace.company)
        .bind(&namespace.email)
        .bind(&namespace.avatar_url)
        .bind(&namespace.description)
        .execute(&mut *tx)
        .await
        .map_err(|e| insert_error(e, &format!("namespace {}", namespace.name)))?;

        let id = result.last_insert_rowid();

        let mut groups = namespace.groups.clone();
        groups.sort();
        groups.dedup();

        for group in &groups {
            sqlx::query("INSERT INTO namespace_groups (namespace_id, group_name) VALUES (?, ?)")
                .bind(id)
                .bind(group)
                .execute(&mut *tx)
                .await
                .map_err(storage_error)?;
        }

        tx.commit().await.map_err(storage_error)?;
        tracing::debug!(namespace = %namespace.name, id, "Inserted namespace");

        Ok(Namespace {
            id,
            name: namespace.name.clone(),
            company: namespace.company.clone(),
            email: namespace.email.clone(),
            avatar_url: namespace.avatar_url.clone(),
            description: namespace.description.clone(),
            groups,
        })
    }
}
