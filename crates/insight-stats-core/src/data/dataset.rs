//! Column-oriented dataset with named columns
//!
//! Every operation in this crate borrows a `Dataset` and returns new data, so the
//! caller's table is never modified.

use std::collections::BTreeMap;

use crate::errors::{StatsError, StatsResult};
use crate::types::{ColumnKind, Value};

/// A named column of values
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Infer the logical type from the non-missing values
    ///
    /// A column mixing numbers and booleans is numeric; any text makes it
    /// categorical.
    pub fn kind(&self) -> ColumnKind {
        let mut kind = ColumnKind::Empty;
        for value in &self.values {
            kind = match (kind, value) {
                (_, Value::Null) => kind,
                (_, Value::Text(_)) => return ColumnKind::Categorical,
                (ColumnKind::Empty | ColumnKind::Boolean, Value::Bool(_)) => ColumnKind::Boolean,
                _ => ColumnKind::Numeric,
            };
        }
        kind
    }
}

/// Ordered rows of named columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from row-major data
    ///
    /// # Arguments
    /// * `names` - Column names, in order
    /// * `rows` - One vector of values per row, each as long as `names`
    pub fn from_rows<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        rows: Vec<Vec<Value>>,
    ) -> StatsResult<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut columns: Vec<Vec<Value>> = vec![Vec::with_capacity(rows.len()); names.len()];

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != names.len() {
                return Err(StatsError::DimensionMismatchMsg(format!(
                    "row {} has {} values, expected {}",
                    i,
                    row.len(),
                    names.len()
                )));
            }
            for (col, value) in columns.iter_mut().zip(row) {
                col.push(value);
            }
        }

        names
            .into_iter()
            .zip(columns)
            .try_fold(Self::new(), |ds, (name, values)| {
                ds.with_column(name, values)
            })
    }

    /// Append a column, returning the extended dataset
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<Value>) -> StatsResult<Self> {
        let name = name.into();
        if self.columns.iter().any(|c| c.name == name) {
            return Err(StatsError::InvalidInput(format!("duplicate column {name}")));
        }
        if !self.columns.is_empty() && values.len() != self.n_rows {
            return Err(StatsError::DimensionMismatchMsg(format!(
                "column {} has {} values, dataset has {} rows",
                name,
                values.len(),
                self.n_rows
            )));
        }
        self.n_rows = values.len();
        self.columns.push(Column::new(name, values));
        Ok(self)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> StatsResult<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| StatsError::MissingColumn(name.to_owned()))
    }

    /// Fail with [`StatsError::MissingColumn`] on the first absent name
    pub fn require_columns(&self, names: &[&str]) -> StatsResult<()> {
        for name in names {
            self.column(name)?;
        }
        Ok(())
    }

    /// Values of a numeric column as `f64`, with missing values as NaN
    pub fn numeric_values(&self, name: &str) -> StatsResult<Vec<f64>> {
        self.column(name)?
            .values
            .iter()
            .map(|v| match v {
                Value::Null => Ok(f64::NAN),
                Value::Text(_) => Err(StatsError::ColumnType {
                    column: name.to_owned(),
                    expected: "numeric",
                }),
                other => Ok(other.as_f64().unwrap_or(f64::NAN)),
            })
            .collect()
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        (index < self.n_rows).then_some(Row {
            dataset: self,
            index,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        (0..self.n_rows).map(move |index| Row {
            dataset: self,
            index,
        })
    }

    /// New dataset holding the given rows, in the given order
    pub fn select_rows(&self, indices: &[usize]) -> Dataset {
        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                values: indices.iter().map(|&i| c.values[i].clone()).collect(),
            })
            .collect();
        Dataset {
            columns,
            n_rows: indices.len(),
        }
    }

    /// New dataset holding the rows for which `predicate` returns true
    pub fn filter<F>(&self, mut predicate: F) -> Dataset
    where
        F: FnMut(&Row<'_>) -> bool,
    {
        let indices: Vec<usize> = self
            .rows()
            .filter(|row| predicate(row))
            .map(|row| row.index)
            .collect();
        self.select_rows(&indices)
    }

    /// Row indices per distinct value of `name`, keys ascending
    ///
    /// Rows whose key is missing are dropped.
    pub fn group_indices(&self, name: &str) -> StatsResult<BTreeMap<Value, Vec<usize>>> {
        let mut groups: BTreeMap<Value, Vec<usize>> = BTreeMap::new();
        for (i, key) in self.column(name)?.values.iter().enumerate() {
            if !key.is_null() {
                groups.entry(key.clone()).or_default().push(i);
            }
        }
        Ok(groups)
    }
}

/// Borrowed view of one row
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    dataset: &'a Dataset,
    index: usize,
}

impl<'a> Row<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Value in the named column, `None` if the column does not exist
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.dataset
            .columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.values[self.index])
    }
}
