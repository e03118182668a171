//! # CLI Generate Command
//!
//! Renders `CREATE TABLE` statements straight from the entity declarations and
//! writes them to `<out>/schema.sql`.
//!
//! Tables are assembled column by column. Relations stay metadata only, so the
//! output carries no `FOREIGN KEY` clauses, matching the migrated schema.

use std::path::{Path, PathBuf};

use error::{Result, ResultExt as _};
use sea_orm::{
    DbBackend,
    EntityTrait,
    Iterable as _,
    PrimaryKeyToColumn as _,
    Schema,
    sea_query::{Index, PostgresQueryBuilder, SqliteQueryBuilder, Table, TableCreateStatement},
};
use tracing::info;

/// One statement per table, in migration order.
pub fn create_statements(backend: DbBackend) -> Vec<TableCreateStatement> {
    let schema = Schema::new(backend);
    vec![
        table(&schema, entity::Registrant),
        table(&schema, entity::Program),
        table(&schema, entity::Location),
        table(&schema, entity::Division),
        table(&schema, entity::Team),
        table(&schema, entity::Enrollee),
        table(&schema, entity::Player),
        table(&schema, entity::Coach),
        table(&schema, entity::Event),
        table(&schema, entity::Game),
    ]
}

/// Columns and primary key of `entity`, without relation constraints.
fn table<E: EntityTrait>(schema: &Schema, entity: E) -> TableCreateStatement {
    let key_name = format!("pk_{}", entity.table_name().to_lowercase());
    let mut stmt = Table::create();
    stmt.table(entity).if_not_exists();

    // Single-column keys are declared on the column itself.
    for column in E::Column::iter() {
        stmt.col(schema.get_column_def::<E>(column));
    }

    if E::PrimaryKey::iter().count() > 1 {
        let mut key = Index::create();
        key.name(key_name).primary();
        for part in E::PrimaryKey::iter() {
            key.col(part.into_column());
        }
        stmt.primary_key(&mut key);
    }

    stmt
}

/// Renders the full schema file for `backend`.
pub fn render_schema(backend: DbBackend) -> String {
    let mut sql = format!("-- League schema ({:?}), generated from entity declarations\n", backend);
    for stmt in create_statements(backend) {
        let rendered = match backend {
            DbBackend::Sqlite => stmt.to_string(SqliteQueryBuilder),
            _ => stmt.to_string(PostgresQueryBuilder),
        };
        sql.push('\n');
        sql.push_str(&rendered);
        sql.push_str(";\n");
    }
    sql
}

/// Writes `schema.sql` into `out`, creating the directory if needed.
///
/// # Returns
///
/// The path of the written file.
pub fn write_schema(out: &Path, backend: DbBackend) -> Result<PathBuf> {
    std::fs::create_dir_all(out).with_context(|| format!("Creating {}", out.display()))?;
    let path = out.join("schema.sql");
    let sql = logging::measure_duration!("generate", "render", { render_schema(backend) });
    std::fs::write(&path, sql).with_context(|| format!("Writing {}", path.display()))?;

    info!(target: "generate", path = %path.display(), backend = ?backend, "Schema written");
    Ok(path)
}
