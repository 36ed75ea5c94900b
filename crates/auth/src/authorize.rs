use thiserror::Error;

use crate::{Permission, Principal};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: missing permission '{0}'")]
    Forbidden(Permission),
}

/// Check that `principal` may perform an operation needing `required`.
///
/// - No IO
/// - No panics
/// - Pure policy check against the principal's role
pub fn authorize(principal: &Principal, required: Permission) -> Result<(), AuthzError> {
    if principal.role.grants(required) {
        Ok(())
    } else {
        tracing::debug!(
            principal = principal.display_name(),
            role = %principal.role,
            permission = %required,
            "authorization denied"
        );
        Err(AuthzError::Forbidden(required))
    }
}
