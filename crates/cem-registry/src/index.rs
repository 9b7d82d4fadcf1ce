//! Turns a loaded [`cem_model::Package`] into [`ElementInfo`] records,
//! one per custom-element class declaration.

use cem_model::{Declaration, Package};

use crate::types::ElementInfo;

#[must_use]
pub fn elements_from_package(package: &Package, package_specifier: Option<&str>) -> Vec<ElementInfo> {
    let mut out = Vec::new();
    for module in &package.modules {
        for declaration in &module.declarations {
            let Declaration::Class(class) = declaration else { continue };
            let Some(tag_name) = &class.tag_name else { continue };
            out.push(ElementInfo {
                name: tag_name.clone(),
                module_path: module.path.clone(),
                package_specifier: package_specifier.map(str::to_string),
                description: class.description.clone(),
                attributes: class.attributes.clone(),
                slots: class.slots.clone(),
                events: class.events.clone(),
                css_properties: class.css_properties.clone(),
                css_parts: class.css_parts.clone(),
                css_states: class.css_states.clone(),
            });
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/index.rs"]
mod tests;
