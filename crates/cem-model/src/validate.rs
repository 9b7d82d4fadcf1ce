//! Invariant checks for the Manifest Builder (§4.H / §3 invariants).

use crate::types::{ClassDeclaration, CssCustomProperty, Declaration, Member, Module, Package};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("module path {0:?} is not forward-slash-relative")]
    NonRelativeModulePath(String),
    #[error("attribute name {0:?} in {1:?} is not lowercase")]
    AttributeNameNotLowercase(String, String),
    #[error("css custom property {0:?} in {1:?} does not start with \"--\"")]
    CssPropertyMissingPrefix(String, String),
    #[error("private css custom property {0:?} leaked into the manifest for {1:?}")]
    PrivateCssPropertyLeaked(String, String),
    #[error("members of {0:?} are not in source order")]
    MembersNotInSourceOrder(String),
}

/// Validates every invariant §3 states that the builder is responsible
/// for upholding. Returns every violation found rather than stopping at
/// the first one, consistent with how extraction itself never aborts
/// on a single bad record.
#[must_use]
pub fn validate(package: &Package) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for module in &package.modules {
        if module.path.starts_with('/') || module.path.contains('\\') {
            errors.push(ValidationError::NonRelativeModulePath(module.path.clone()));
        }
        for declaration in &module.declarations {
            validate_declaration(module, declaration, &mut errors);
        }
    }

    errors
}

fn validate_declaration(module: &Module, declaration: &Declaration, errors: &mut Vec<ValidationError>) {
    let Declaration::Class(class) = declaration else {
        return;
    };
    validate_class(module, class, errors);
}

fn validate_class(module: &Module, class: &ClassDeclaration, errors: &mut Vec<ValidationError>) {
    for attribute in &class.attributes {
        if attribute.name != attribute.name.to_lowercase() {
            errors.push(ValidationError::AttributeNameNotLowercase(attribute.name.clone(), class.name.clone()));
        }
    }

    for prop in &class.css_properties {
        validate_css_property(module, class, prop, errors);
    }

    if !is_source_ordered(&class.members) {
        errors.push(ValidationError::MembersNotInSourceOrder(class.name.clone()));
    }
}

fn validate_css_property(_module: &Module, class: &ClassDeclaration, prop: &CssCustomProperty, errors: &mut Vec<ValidationError>) {
    if !prop.name.starts_with("--") {
        errors.push(ValidationError::CssPropertyMissingPrefix(prop.name.clone(), class.name.clone()));
    }
    if prop.name.starts_with("--_") {
        errors.push(ValidationError::PrivateCssPropertyLeaked(prop.name.clone(), class.name.clone()));
    }
}

fn is_source_ordered(members: &[Member]) -> bool {
    members.windows(2).all(|w| w[0].start_byte() <= w[1].start_byte())
}

#[cfg(test)]
#[path = "tests/validate.rs"]
mod tests;
