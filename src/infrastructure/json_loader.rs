use crate::api::dto::TreeDto;
use crate::domain::ir::IrNode;
use crate::ports::TreeLoader;
use anyhow::{Context, Result};
use std::fs;

/// Loads one IR tree per JSON file, produced by an external front end.
/// Structural invariants are checked during conversion, so a tree that
/// comes back from here is safe for every core algorithm.
pub struct JsonTreeLoader;

impl TreeLoader for JsonTreeLoader {
    fn load(&self, path: &str) -> Result<IrNode> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read tree file: {}", path))?;
        let dto: TreeDto = serde_json::from_str(&content)
            .with_context(|| format!("Invalid tree JSON in {}", path))?;
        let node = IrNode::try_from(dto)
            .with_context(|| format!("Malformed tree in {}", path))?;
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_valid_tree() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tree.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"kind":"sequence","children":[{{"kind":"call","identifier":"put"}}]}}"#
        )
        .unwrap();

        let node = JsonTreeLoader.load(path.to_str().unwrap()).unwrap();
        assert_eq!(node.statement_count(), 1);
    }

    #[test]
    fn test_load_rejects_malformed_tree() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"kind":"try_catch","body":{{"kind":"call","identifier":"open"}},"handlers":[]}}"#
        )
        .unwrap();

        let result = JsonTreeLoader.load(path.to_str().unwrap());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let result = JsonTreeLoader.load("/nonexistent/tree.json");
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("/nonexistent/tree.json"));
    }
}
