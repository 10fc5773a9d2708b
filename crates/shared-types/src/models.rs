use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A user referenced by a project, displayed by name only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProjectUser {
    #[serde(default)]
    pub username: String,
}

/// A project record as returned by the Activus API.
///
/// The API is the source of truth; nothing is validated client-side. Missing
/// stakeholder or role data deserializes as absent rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub project_description: String,
    /// ISO-8601 creation timestamp, passed through as a string.
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stakeholder: Option<ProjectUser>,
    /// Role name -> users holding that role on this project.
    #[serde(default)]
    pub role_users: HashMap<String, Vec<ProjectUser>>,
}

impl Project {
    /// Stakeholder username for display, or a placeholder when absent.
    pub fn stakeholder_name(&self) -> &str {
        self.stakeholder
            .as_ref()
            .map(|u| u.username.as_str())
            .unwrap_or("N/A")
    }

    /// One "Role: user1, user2" line per role, in ascending lexicographic
    /// order of role name regardless of map iteration order.
    pub fn role_lines(&self) -> Vec<(String, String)> {
        let mut entries: Vec<_> = self.role_users.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
            .into_iter()
            .map(|(role, users)| {
                let names = users
                    .iter()
                    .map(|u| u.username.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                (role.clone(), names)
            })
            .collect()
    }
}

/// Success envelope for the project list endpoint.
///
/// A response without a `data` array is treated as an empty list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProjectListResponse {
    #[serde(default)]
    pub data: Vec<Project>,
}

/// Body for creating a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub project_name: String,
    pub project_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn project_deserializes_from_api_json() {
        let json = r#"{
            "projectId": "p-1",
            "projectName": "Warehouse Revamp",
            "projectDescription": "Refit the central warehouse",
            "createdAt": "2026-01-20T21:35:00Z",
            "stakeholder": {"username": "priya"},
            "roleUsers": {"Engineer": [{"username": "ana"}, {"username": "bo"}]}
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.project_id, "p-1");
        assert_eq!(project.project_name, "Warehouse Revamp");
        assert_eq!(project.stakeholder_name(), "priya");
        assert_eq!(project.role_users["Engineer"].len(), 2);
    }

    #[test]
    fn project_tolerates_missing_fields() {
        let project: Project = serde_json::from_str(r#"{"projectId": "p-2"}"#).unwrap();

        assert_eq!(project.project_name, "");
        assert_eq!(project.stakeholder, None);
        assert_eq!(project.stakeholder_name(), "N/A");
        assert!(project.role_users.is_empty());
        assert!(project.role_lines().is_empty());
    }

    #[test]
    fn role_lines_sorted_lexicographically() {
        let json = r#"{
            "roleUsers": {
                "Tester": [{"username": "tara"}],
                "Analyst": [{"username": "ivan"}, {"username": "joy"}],
                "Manager": [{"username": "mo"}]
            }
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();

        let lines = project.role_lines();
        assert_eq!(
            lines,
            vec![
                ("Analyst".to_string(), "ivan, joy".to_string()),
                ("Manager".to_string(), "mo".to_string()),
                ("Tester".to_string(), "tara".to_string()),
            ]
        );
    }

    #[test]
    fn role_lines_joins_usernames_in_given_order() {
        let json = r#"{"roleUsers": {"Dev": [{"username": "z"}, {"username": "a"}]}}"#;
        let project: Project = serde_json::from_str(json).unwrap();

        // Users keep API order; only role names are sorted.
        assert_eq!(project.role_lines()[0].1, "z, a");
    }

    #[test]
    fn list_response_defaults_to_empty_data() {
        let resp: ProjectListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.data.is_empty());

        let resp: ProjectListResponse =
            serde_json::from_str(r#"{"data": [{"projectId": "p-1"}]}"#).unwrap();
        assert_eq!(resp.data.len(), 1);
    }

    #[test]
    fn project_serialization_roundtrip() {
        let project = Project {
            project_id: "p-9".into(),
            project_name: "Rollout".into(),
            project_description: "Phase two rollout".into(),
            created_at: "2026-03-01T08:00:00Z".into(),
            stakeholder: Some(ProjectUser { username: "lee".into() }),
            role_users: HashMap::new(),
        };

        let json = serde_json::to_string(&project).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(project, parsed);
    }

    #[test]
    fn create_request_uses_camel_case_wire_names() {
        let req = CreateProjectRequest {
            project_name: "New".into(),
            project_description: "Desc".into(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"projectName\""));
        assert!(json.contains("\"projectDescription\""));
    }
}
