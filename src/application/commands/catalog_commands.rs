// src/application/commands/catalog_commands.rs

use crate::application::dto::{DomainDto, LanguageDto};
use crate::domain::{domains, languages};

#[tauri::command]
pub async fn list_languages() -> Result<Vec<LanguageDto>, String> {
    Ok(languages().into_iter().map(LanguageDto::from).collect())
}

#[tauri::command]
pub async fn list_domains() -> Result<Vec<DomainDto>, String> {
    Ok(domains().into_iter().map(DomainDto::from).collect())
}
