use modeler::{
    async_trait, CatalogRow, Connection, Error, FieldDescriptor, FieldType, Model,
    ModelDescriptor, Result, Table,
};
use pretty_assertions::assert_eq;

struct Session;

impl Model for Session {
    const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
        name: "sessions",
        fields: &[
            FieldDescriptor {
                name: "UserId",
                ty: FieldType::String,
                directive: "user_id",
            },
            FieldDescriptor {
                name: "Ended",
                ty: FieldType::Bool,
                directive: "ended,null",
            },
            FieldDescriptor {
                name: "Created",
                ty: FieldType::Timestamp,
                directive: "created",
            },
        ],
    };
}

/// Serves canned catalog rows in place of a live metadata catalog.
struct StaticCatalog {
    rows: Vec<CatalogRow>,
    fail_after: Option<usize>,
}

impl StaticCatalog {
    fn new(rows: Vec<CatalogRow>) -> Self {
        Self {
            rows,
            fail_after: None,
        }
    }
}

#[async_trait]
impl Connection for StaticCatalog {
    async fn table_schema(&mut self, _database: &str, table: &str) -> Result<Table> {
        let fail_after = self.fail_after;
        let rows = self
            .rows
            .clone()
            .into_iter()
            .map(Ok)
            .enumerate()
            .map(move |(i, row)| match fail_after {
                Some(n) if i >= n => Err(Error::row_sequence(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "catalog went away",
                ))),
                _ => row,
            });

        Table::from_catalog_rows(table, rows)
    }
}

fn row(name: &str, default: Option<&str>, nullable: &str, data_type: &str) -> CatalogRow {
    CatalogRow {
        column_name: name.to_string(),
        column_default: default.map(str::to_string),
        is_nullable: nullable.to_string(),
        data_type: data_type.to_string(),
    }
}

fn live_rows() -> Vec<CatalogRow> {
    vec![
        row("user_id", None, "NO", "TEXT"),
        row("ended", Some("0"), "YES", "TINYINT"),
        row("created", Some("CURRENT_TIMESTAMP"), "NO", "TIMESTAMP"),
    ]
}

#[tokio::test]
async fn model_matching_the_live_table_is_in_sync() {
    let mut catalog = StaticCatalog::new(live_rows());
    assert!(modeler::in_sync::<Session>(&mut catalog, "app").await.unwrap());
}

#[tokio::test]
async fn column_order_in_the_catalog_does_not_matter() {
    let mut rows = live_rows();
    rows.reverse();
    let mut catalog = StaticCatalog::new(rows);
    assert!(modeler::in_sync::<Session>(&mut catalog, "app").await.unwrap());
}

#[tokio::test]
async fn drifted_live_table_is_out_of_sync() {
    let mut rows = live_rows();
    rows[1].is_nullable = "NO".to_string();
    let mut catalog = StaticCatalog::new(rows);
    assert!(!modeler::in_sync::<Session>(&mut catalog, "app").await.unwrap());
}

#[tokio::test]
async fn missing_live_column_is_out_of_sync() {
    let mut rows = live_rows();
    rows.pop();
    let mut catalog = StaticCatalog::new(rows);
    assert!(!modeler::in_sync::<Session>(&mut catalog, "app").await.unwrap());
}

#[tokio::test]
async fn a_failing_catalog_surfaces_the_row_sequence_error() {
    let mut catalog = StaticCatalog::new(live_rows());
    catalog.fail_after = Some(1);

    let err = modeler::in_sync::<Session>(&mut catalog, "app")
        .await
        .unwrap_err();
    assert!(err.is_row_sequence());
}

#[tokio::test]
async fn reflection_sees_the_declared_columns() {
    let table = Table::from_model::<Session>().unwrap();
    assert_eq!(table.name, "sessions");
    assert_eq!(
        table
            .columns
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>(),
        ["user_id", "ended", "created"]
    );
}
