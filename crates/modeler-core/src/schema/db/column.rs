use std::collections::HashMap;

/// A single column of a table representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The storage type tag, as the target engine spells it
    /// (`INT`, `TINYINT`, `TEXT`, `TIMESTAMP`, ...).
    pub data_type: String,

    /// The column default: a literal, or a server-evaluated keyword such
    /// as `CURRENT_TIMESTAMP`. `None` when the column carries no default.
    pub default: Option<String>,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,

    /// True if the column is an integer that should be auto-incremented
    /// with each insertion of a new row.
    pub auto_increment: bool,
}

impl Column {
    /// True if the two definitions disagree on any attribute equivalence
    /// is defined over.
    ///
    /// `auto_increment` is deliberately not part of this comparison: the
    /// four-value catalog projection cannot observe it.
    fn has_diff(&self, other: &Column) -> bool {
        self.data_type != other.data_type
            || self.default != other.default
            || self.nullable != other.nullable
            || self.primary_key != other.primary_key
    }
}

/// The column-level changes needed to get from one table representation
/// to another, keyed by column name.
pub struct ColumnsDiff<'a> {
    items: Vec<ColumnsDiffItem<'a>>,
}

impl<'a> ColumnsDiff<'a> {
    pub fn from(from: &'a [Column], to: &'a [Column]) -> Self {
        let mut items = vec![];

        let from_map = HashMap::<&str, &'a Column>::from_iter(
            from.iter().map(|from| (from.name.as_str(), from)),
        );
        let to_map =
            HashMap::<&str, &'a Column>::from_iter(to.iter().map(|to| (to.name.as_str(), to)));

        for from in from {
            match to_map.get(from.name.as_str()) {
                Some(to) => {
                    if from.has_diff(to) {
                        items.push(ColumnsDiffItem::AlterColumn { from, to });
                    }
                }
                None => items.push(ColumnsDiffItem::DropColumn(from)),
            }
        }

        for to in to {
            if !from_map.contains_key(to.name.as_str()) {
                items.push(ColumnsDiffItem::AddColumn(to));
            }
        }

        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ColumnsDiffItem<'a>] {
        &self.items
    }
}

pub enum ColumnsDiffItem<'a> {
    AddColumn(&'a Column),
    DropColumn(&'a Column),
    AlterColumn { from: &'a Column, to: &'a Column },
}
