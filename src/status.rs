use crate::error::{Result, SprintKitError};
use crate::types::sprint::StatusFile;
use std::path::Path;

pub fn load_status(path: &Path) -> Result<StatusFile> {
    if !path.exists() {
        return Err(SprintKitError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let status: StatusFile =
        serde_yaml::from_str(&content).map_err(|source| SprintKitError::StatusParse {
            path: path.display().to_string(),
            source,
        })?;
    tracing::info!(
        path = %path.display(),
        project = %status.project,
        sprints = status.sprints.len(),
        history = status.velocity_history.len(),
        "sprint status loaded"
    );
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_status_reads_yaml_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("sprint-status.yaml");
        fs::write(
            &path,
            "project: Atlas\ncurrent_sprint: 1\nsprints:\n  - number: 1\n    capacity: 20\n",
        )
        .expect("status should write");

        let status = load_status(&path).expect("status should load");
        assert_eq!(status.project, "Atlas");
        assert_eq!(status.current().and_then(|sprint| sprint.capacity), Some(20.0));
    }

    #[test]
    fn load_status_rejects_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_status(&dir.path().join("missing.yaml")).expect_err("should fail");
        assert!(matches!(err, SprintKitError::PathNotFound(_)));
    }

    #[test]
    fn load_status_reports_malformed_yaml() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("broken.yaml");
        fs::write(&path, "project: [unclosed\n").expect("status should write");

        let err = load_status(&path).expect_err("malformed yaml should fail");
        assert!(matches!(err, SprintKitError::StatusParse { .. }));
        assert!(err.to_string().contains("broken.yaml"));
    }
}
