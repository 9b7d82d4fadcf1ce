use super::*;
use crate::types::{Attribute, ClassDeclaration, CssCustomProperty, Declaration, Field, Member, Module, ModuleKind, Package};

fn module_with(declarations: Vec<Declaration>) -> Module {
    Module {
        path: "src/my-element.ts".to_string(),
        kind: ModuleKind::JavaScriptModule,
        declarations,
        exports: Vec::new(),
    }
}

#[test]
fn clean_package_has_no_errors() {
    let class = ClassDeclaration {
        name: "MyElement".to_string(),
        tag_name: Some("my-element".to_string()),
        attributes: vec![Attribute {
            name: "variant".to_string(),
            ..Attribute::default()
        }],
        ..ClassDeclaration::default()
    };
    let package = Package::new(vec![module_with(vec![Declaration::Class(class)])]);
    assert!(validate(&package).is_empty());
}

#[test]
fn uppercase_attribute_name_is_flagged() {
    let class = ClassDeclaration {
        name: "MyElement".to_string(),
        attributes: vec![Attribute {
            name: "Variant".to_string(),
            ..Attribute::default()
        }],
        ..ClassDeclaration::default()
    };
    let package = Package::new(vec![module_with(vec![Declaration::Class(class)])]);
    let errors = validate(&package);
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ValidationError::AttributeNameNotLowercase(..)));
}

#[test]
fn private_css_property_leak_is_flagged() {
    let class = ClassDeclaration {
        name: "MyElement".to_string(),
        css_properties: vec![CssCustomProperty {
            name: "--_internal".to_string(),
            ..CssCustomProperty::default()
        }],
        ..ClassDeclaration::default()
    };
    let package = Package::new(vec![module_with(vec![Declaration::Class(class)])]);
    let errors = validate(&package);
    assert!(errors.iter().any(|e| matches!(e, ValidationError::PrivateCssPropertyLeaked(..))));
}

#[test]
fn out_of_order_members_are_flagged() {
    let class = ClassDeclaration {
        name: "MyElement".to_string(),
        members: vec![
            Member::Field(Field {
                name: "b".to_string(),
                start_byte: 10,
                ..Field::default()
            }),
            Member::Field(Field {
                name: "a".to_string(),
                start_byte: 5,
                ..Field::default()
            }),
        ],
        ..ClassDeclaration::default()
    };
    let package = Package::new(vec![module_with(vec![Declaration::Class(class)])]);
    let errors = validate(&package);
    assert!(errors.iter().any(|e| matches!(e, ValidationError::MembersNotInSourceOrder(_))));
}

#[test]
fn absolute_module_path_is_flagged() {
    let mut module = module_with(vec![]);
    module.path = "/abs/path.ts".to_string();
    let package = Package::new(vec![module]);
    let errors = validate(&package);
    assert!(errors.iter().any(|e| matches!(e, ValidationError::NonRelativeModulePath(_))));
}
