use super::entity::TranslationWorkflow;
use crate::domain::catalog::{find_domain, find_language};
use crate::domain::{DomainError, DomainResult};

/// Validates all TranslationWorkflow invariants
pub fn validate_workflow(workflow: &TranslationWorkflow) -> DomainResult<()> {
    validate_selections(workflow)?;
    Ok(())
}

/// Selections must be catalog members
fn validate_selections(workflow: &TranslationWorkflow) -> DomainResult<()> {
    if find_language(&workflow.language.code).is_none() {
        return Err(DomainError::InvariantViolation(format!(
            "Selected language '{}' is not in the catalog",
            workflow.language.code
        )));
    }

    if find_domain(&workflow.domain.id).is_none() {
        return Err(DomainError::InvariantViolation(format!(
            "Selected domain '{}' is not in the catalog",
            workflow.domain.id
        )));
    }

    Ok(())
}
