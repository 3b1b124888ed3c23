use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardId(pub String);

impl CardId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Chooses the target column. A column id, when present, wins over the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelector {
    name: String,
    id: Option<String>,
}

impl ColumnSelector {
    /// An empty or blank id counts as absent and falls back to the name lookup.
    pub fn new(name: impl Into<String>, id: Option<String>) -> Self {
        let id = id
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Self {
            name: name.into(),
            id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn select<'a>(&self, columns: &'a [Column]) -> Option<&'a Column> {
        match &self.id {
            Some(id) => columns.iter().find(|column| &column.id == id),
            None => {
                let wanted = self.name.to_lowercase();
                columns
                    .iter()
                    .find(|column| column.name.to_lowercase() == wanted)
            }
        }
    }
}
