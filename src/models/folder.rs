use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

impl Folder {
    /// True for folders that sit directly under the drive root.
    pub fn is_root_level(&self) -> bool {
        self.parent_id.is_none()
    }
}
