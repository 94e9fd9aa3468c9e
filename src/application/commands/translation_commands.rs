// src/application/commands/translation_commands.rs

use std::path::PathBuf;

use tauri::State;

use crate::application::dto::{
    AttachDocumentDto, LanguageDto, DomainDto, TranslationOutcomeDto, WorkflowStateDto,
};
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::domain::infer_mime_type;
use crate::services::AttachDocumentRequest;

#[tauri::command]
pub async fn get_workflow_state(state: State<'_, AppState>) -> Result<WorkflowStateDto, String> {
    let service = state.translation_service.clone();

    Ok(WorkflowStateDto::from(service.workflow_state()))
}

#[tauri::command]
pub async fn select_language(
    state: State<'_, AppState>,
    code: String,
) -> Result<LanguageDto, String> {
    let service = state.translation_service.clone();

    service
        .select_language(&code)
        .map(LanguageDto::from)
        .to_error_response()
}

#[tauri::command]
pub async fn select_domain(state: State<'_, AppState>, id: String) -> Result<DomainDto, String> {
    let service = state.translation_service.clone();

    service
        .select_domain(&id)
        .map(DomainDto::from)
        .to_error_response()
}

#[tauri::command]
pub async fn set_text_input(
    state: State<'_, AppState>,
    content: String,
) -> Result<WorkflowStateDto, String> {
    let service = state.translation_service.clone();

    service.set_text_input(content).to_error_response()?;
    Ok(WorkflowStateDto::from(service.workflow_state()))
}

#[tauri::command]
pub async fn attach_document(
    state: State<'_, AppState>,
    document: AttachDocumentDto,
) -> Result<WorkflowStateDto, String> {
    let service = state.translation_service.clone();

    let path = PathBuf::from(&document.path);
    let mime_type = document
        .mime_type
        .filter(|m| !m.is_empty())
        .or_else(|| infer_mime_type(&path).map(|m| m.to_string()))
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let request = AttachDocumentRequest {
        name: document.name,
        size_bytes: document.size_bytes,
        mime_type,
        path,
    };

    service.attach_document(request).to_error_response()?;
    Ok(WorkflowStateDto::from(service.workflow_state()))
}

#[tauri::command]
pub async fn clear_input(state: State<'_, AppState>) -> Result<WorkflowStateDto, String> {
    let service = state.translation_service.clone();

    service.clear_input().to_error_response()?;
    Ok(WorkflowStateDto::from(service.workflow_state()))
}

#[tauri::command]
pub async fn translate(state: State<'_, AppState>) -> Result<TranslationOutcomeDto, String> {
    let service = state.translation_service.clone();

    let outcome = service.translate().await.to_error_response()?;
    Ok(TranslationOutcomeDto::from(outcome))
}
