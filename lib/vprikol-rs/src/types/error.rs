/// A single request validation failure
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ValidationError {
    /// Where the failure is, like `["query", "server_id"]`
    pub loc: Vec<LocationItem>,

    /// What went wrong
    pub msg: Box<str>,

    /// The failure kind
    #[serde(rename = "type")]
    pub kind: Box<str>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, item) in self.loc.iter().enumerate() {
            if i != 0 {
                f.write_str(".")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, ": {}", self.msg)
    }
}

/// A segment of a validation error location
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum LocationItem {
    /// A field name
    Field(Box<str>),

    /// An array index
    Index(u64),
}

impl std::fmt::Display for LocationItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(field) => f.write_str(field),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}
