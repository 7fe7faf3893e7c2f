use super::{CatalogRow, Column, ColumnsDiff};
use crate::{schema::app::Model, Result};

/// Canonical in-memory representation of one table's schema.
///
/// Built by exactly one extractor call (catalog introspection or model
/// reflection) and immutable afterwards. Column order reflects discovery
/// order and matters for display only, never for equivalence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Name of the table; may be empty for an anonymous model.
    pub name: String,

    /// The table's columns
    pub columns: Vec<Column>,
}

impl Table {
    /// Builds a table representation from metadata catalog rows.
    ///
    /// All-or-nothing: the first failed row aborts the extraction and
    /// discards whatever was already built. Row decode failures arrive as
    /// scan errors, row source failures as row sequence errors; both are
    /// produced by the driver layer and propagated here untouched.
    pub fn from_catalog_rows<I>(name: impl Into<String>, rows: I) -> Result<Table>
    where
        I: IntoIterator<Item = Result<CatalogRow>>,
    {
        let mut columns = vec![];

        for row in rows {
            let row = row?;
            columns.push(Column {
                name: row.column_name,
                data_type: row.data_type,
                default: row.column_default,
                nullable: row.is_nullable == "YES",
                // The four-value projection carries no key or extra
                // information, so these stay unset.
                primary_key: false,
                auto_increment: false,
            });
        }

        Ok(Table {
            name: name.into(),
            columns,
        })
    }

    /// Builds the table representation declared by a model type.
    pub fn from_model<M: Model>() -> Result<Table> {
        M::DESCRIPTOR.to_table()
    }

    /// The column-level changes needed to migrate `self` into `other`.
    pub fn diff<'a>(&'a self, other: &'a Table) -> ColumnsDiff<'a> {
        ColumnsDiff::from(&self.columns, &other.columns)
    }

    /// True if the two representations describe the same schema.
    ///
    /// Column order is irrelevant; any column missing, extra, or differing
    /// in type, default, nullability or primary key makes the tables
    /// non-equivalent.
    pub fn equivalent(&self, other: &Table) -> bool {
        self.diff(other).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    fn row(name: &str, default: Option<&str>, nullable: &str, data_type: &str) -> CatalogRow {
        CatalogRow {
            column_name: name.to_string(),
            column_default: default.map(str::to_string),
            is_nullable: nullable.to_string(),
            data_type: data_type.to_string(),
        }
    }

    #[test]
    fn from_catalog_rows_copies_the_row_values() {
        let rows = vec![
            Ok(row("id", Some("0"), "YES", "int")),
            Ok(row("name", None, "NO", "text")),
        ];

        let table = Table::from_catalog_rows("sessions", rows).unwrap();

        assert_eq!(table.name, "sessions");
        assert_eq!(
            table.columns,
            vec![
                Column {
                    name: "id".to_string(),
                    data_type: "int".to_string(),
                    default: Some("0".to_string()),
                    nullable: true,
                    primary_key: false,
                    auto_increment: false,
                },
                Column {
                    name: "name".to_string(),
                    data_type: "text".to_string(),
                    default: None,
                    nullable: false,
                    primary_key: false,
                    auto_increment: false,
                },
            ]
        );
    }

    #[test]
    fn from_catalog_rows_is_idempotent() {
        let rows = || {
            vec![
                Ok(row("id", Some("0"), "NO", "int")),
                Ok(row("created", Some("CURRENT_TIMESTAMP"), "NO", "timestamp")),
            ]
        };

        let first = Table::from_catalog_rows("t", rows()).unwrap();
        let second = Table::from_catalog_rows("t", rows()).unwrap();
        assert!(first.equivalent(&second));
    }

    #[test]
    fn a_failing_row_source_discards_partial_results() {
        let rows = vec![
            Ok(row("id", Some("0"), "YES", "int")),
            Err(Error::row_sequence(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "connection lost",
            ))),
        ];

        let err = Table::from_catalog_rows("sessions", rows).unwrap_err();
        assert!(err.is_row_sequence());
    }

    #[test]
    fn an_undecodable_row_aborts_the_extraction() {
        let rows = vec![
            Err(Error::scan(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "expected four values",
            ))),
            Ok(row("id", Some("0"), "YES", "int")),
        ];

        let err = Table::from_catalog_rows("sessions", rows).unwrap_err();
        assert!(err.is_scan());
    }

    fn table(columns: Vec<Column>) -> Table {
        Table {
            name: "t".to_string(),
            columns,
        }
    }

    fn column(name: &str) -> Column {
        Column {
            name: name.to_string(),
            data_type: "INT".to_string(),
            default: Some("0".to_string()),
            nullable: false,
            primary_key: false,
            auto_increment: false,
        }
    }

    #[test]
    fn column_order_does_not_affect_equivalence() {
        let a = table(vec![column("id"), column("count")]);
        let b = table(vec![column("count"), column("id")]);

        assert!(a.equivalent(&b));
        assert!(b.equivalent(&a));
    }

    #[test]
    fn equivalence_is_symmetric() {
        let a = table(vec![column("id")]);
        let mut b = table(vec![column("id")]);
        b.columns[0].nullable = true;
        let c = table(vec![column("id")]);

        assert_eq!(a.equivalent(&b), b.equivalent(&a));
        assert_eq!(a.equivalent(&c), c.equivalent(&a));
    }

    #[test]
    fn any_single_attribute_change_breaks_equivalence() {
        let base = table(vec![column("id"), column("count")]);

        let mutations: Vec<Box<dyn Fn(&mut Column)>> = vec![
            Box::new(|c| c.data_type = "TEXT".to_string()),
            Box::new(|c| c.default = None),
            Box::new(|c| c.default = Some("1".to_string())),
            Box::new(|c| c.nullable = true),
            Box::new(|c| c.primary_key = true),
        ];

        for (i, mutate) in mutations.iter().enumerate() {
            let mut changed = base.clone();
            mutate(&mut changed.columns[1]);
            assert!(base.equivalent(&base.clone()), "mutation {i}");
            assert!(!base.equivalent(&changed), "mutation {i}");
        }
    }

    #[test]
    fn missing_or_extra_columns_break_equivalence() {
        let a = table(vec![column("id"), column("count")]);
        let b = table(vec![column("id")]);

        assert!(!a.equivalent(&b));
        assert!(!b.equivalent(&a));
    }
}
