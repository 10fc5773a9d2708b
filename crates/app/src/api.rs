use shared_types::{AppError, CreateProjectRequest, Project, ProjectListResponse};

/// Endpoint returning every project visible to the caller.
pub const PROJECT_LIST_URL: &str = "https://activusserver.onrender.com/api/projects/all";
/// Endpoint accepting new projects.
pub const PROJECT_CREATE_URL: &str = "https://activusserver.onrender.com/api/projects";

/// Fetch the full project list with a bearer token.
///
/// Any non-2xx status, network failure, or unexpected body shape is an
/// error; the caller decides how much of that to surface.
pub async fn fetch_projects(token: &str) -> Result<Vec<Project>, AppError> {
    let response = reqwest::Client::new()
        .get(PROJECT_LIST_URL)
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| AppError::network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::from_status(
            status.as_u16(),
            format!("project list request returned {status}"),
        ));
    }

    let body: ProjectListResponse = response
        .json()
        .await
        .map_err(|e| AppError::bad_response(e.to_string()))?;
    Ok(body.data)
}

/// Create a project with a bearer token.
pub async fn create_project(token: &str, request: &CreateProjectRequest) -> Result<(), AppError> {
    let response = reqwest::Client::new()
        .post(PROJECT_CREATE_URL)
        .bearer_auth(token)
        .json(request)
        .send()
        .await
        .map_err(|e| AppError::network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::from_status(
            status.as_u16(),
            format!("project create request returned {status}"),
        ));
    }
    Ok(())
}
