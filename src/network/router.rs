use serde::Serialize;
use tracing::info;

use super::http::{ApiError, HttpRequest, HttpResponse, Method};
use crate::intake::{self, IntakeForm};
use crate::materials::{self, MaterialTab};
use crate::{dashboard, page};

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

/// Dispatch one request. Never fails; errors become JSON error responses.
pub fn route(request: &HttpRequest) -> HttpResponse {
    if request.method == Method::Options {
        return HttpResponse::no_content();
    }
    match dispatch(request) {
        Ok(response) => response,
        Err(err) => {
            info!("{} {} -> {}: {}", request.method.as_str(), request.path, err.status(), err);
            HttpResponse::error(&err)
        }
    }
}

fn dispatch(request: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let segments = request.segments()?;
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

    match (segments.as_slice(), &request.method) {
        (["health"], Method::Get) => Ok(HttpResponse::ok(&Health { status: "ok" })),
        (["api", "dashboard"], Method::Get) => Ok(HttpResponse::ok(&dashboard::overview())),
        (["api", "materials"], Method::Get) => materials_library(request),
        (["api", "intake"], Method::Get) => Ok(HttpResponse::ok(&intake::catalog())),
        (["api", "projects"], Method::Post) => submit_project(request),
        (["api", "recommendations", project_id], Method::Get) => {
            Ok(recommendations(request, project_id))
        }
        (
            ["health"]
            | ["api", "dashboard"]
            | ["api", "materials"]
            | ["api", "intake"]
            | ["api", "projects"]
            | ["api", "recommendations", _],
            method,
        ) => Err(ApiError::MethodNotAllowed {
            method: method.as_str().to_string(),
            path: request.path.clone(),
        }),
        _ => Err(ApiError::NotFound(request.path.clone())),
    }
}

fn recommendations(request: &HttpRequest, project_id: &str) -> HttpResponse {
    let query = page::PageQuery::from_params(
        request.query_param("type"),
        request.query_param("eco"),
        request.query_param("selected"),
    );
    HttpResponse::ok(&page::build(project_id, &query))
}

fn materials_library(request: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let tab = MaterialTab::parse(request.query_param("category").unwrap_or_default())
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let cards = materials::search(tab, request.query_param("q"));
    Ok(HttpResponse::ok(&cards))
}

fn submit_project(request: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let form: IntakeForm = serde_json::from_slice(&request.body)
        .map_err(|e| ApiError::BadRequest(format!("invalid project form: {}", e)))?;
    let project = intake::submit(&form).map_err(|e| ApiError::Unprocessable(e.to_string()))?;
    info!("Project {} created: {}", project.project_id, project.recommendations_url);
    Ok(HttpResponse::json(201, &project))
}
