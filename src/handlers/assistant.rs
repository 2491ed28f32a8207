use actix_web::{web, HttpResponse};
use log::error;
use serde_json::json;

use crate::db::AssistantStore;
use crate::errors::AppError;
use crate::models::assistant::AssistantFields;

pub async fn create_assistant(
    store: web::Data<dyn AssistantStore>,
    fields: web::Json<AssistantFields>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = store.insert(&fields).await.map_err(|err| {
        error!("failed to insert assistant: {err}");
        AppError::DatabaseError("Error creating assistant".to_string())
    })?;

    Ok(HttpResponse::Created().json(json!({ "id": id })))
}

pub async fn get_assistant(
    store: web::Data<dyn AssistantStore>,
    id: web::Path<i32>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = id.into_inner();

    let assistant = store.fetch(id).await.map_err(|err| {
        error!("failed to fetch assistant {id}: {err}");
        AppError::DatabaseError("Error retrieving assistant details".to_string())
    })?;

    match assistant {
        Some(assistant) => Ok(HttpResponse::Ok().json(assistant)),
        None => Err(AppError::NotFound("Assistant not found".to_string()).into()),
    }
}

pub async fn update_assistant(
    store: web::Data<dyn AssistantStore>,
    id: web::Path<i32>,
    fields: web::Json<AssistantFields>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = id.into_inner();

    let affected = store.update(id, &fields).await.map_err(|err| {
        error!("failed to update assistant {id}: {err}");
        AppError::DatabaseError("Error updating assistant details".to_string())
    })?;

    if affected == 0 {
        return Err(AppError::NotFound("Assistant not found".to_string()).into());
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Assistant details updated successfully" })))
}

pub async fn delete_assistant(
    store: web::Data<dyn AssistantStore>,
    id: web::Path<i32>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = id.into_inner();

    let affected = store.delete(id).await.map_err(|err| {
        error!("failed to delete assistant {id}: {err}");
        AppError::DatabaseError("Error deleting assistant".to_string())
    })?;

    if affected == 0 {
        return Err(AppError::NotFound("Assistant not found".to_string()).into());
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Assistant deleted successfully" })))
}

pub async fn greeting() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<h1>Hello Assistants</h1>")
}
