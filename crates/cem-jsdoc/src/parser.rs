//! Top-level JSDoc parser entry point (§4.B).

use cem_common::Deprecated;

use crate::examples::{join_examples, render_example};
use crate::segment::segment;
use crate::slug::slugify;
use crate::text::{normalize_block_comment, split_name_and_description, split_type_annotation};
use crate::types::{
    AttrTag, CssPartTag, CssPropTag, CssStateTag, DemoTag, EventTag, JsDoc, JsdocError, ParamTag,
    ReturnsTag, SlotTag,
};

/// Parses the raw text of a block comment (including `/** … */`
/// delimiters, if present) into a [`JsDoc`] record. Invalid tag bodies
/// are reported in [`JsDoc::errors`] and otherwise skipped — a single
/// malformed tag never aborts the rest of the comment (§4.B, §7).
#[must_use]
pub fn parse(raw: &str) -> JsDoc {
    let normalized = normalize_block_comment(raw);
    let (description, segments) = segment(&normalized);

    let mut doc = JsDoc {
        description: if description.is_empty() { None } else { Some(description) },
        ..JsDoc::default()
    };
    let mut examples = Vec::new();

    for seg in segments {
        match seg.tag.as_str() {
            "summary" => doc.summary = non_empty(seg.body),
            "deprecated" => {
                doc.deprecated = Some(if seg.body.is_empty() {
                    Deprecated::Bool(true)
                } else {
                    Deprecated::Reason(seg.body)
                });
            }
            "alias" => {
                if seg.body.is_empty() {
                    doc.errors.push(err("alias", "missing alias name"));
                } else {
                    doc.alias = Some(slugify(&seg.body));
                }
            }
            "example" => examples.push(render_example(&seg.body)),
            "attr" => match parse_attr(&seg.body) {
                Ok(attr) => doc.attrs.push(attr),
                Err(e) => doc.errors.push(err("attr", e)),
            },
            "slot" => doc.slots.push(parse_slot(&seg.body)),
            "csspart" => match parse_named(&seg.body) {
                Ok((name, description)) => doc.css_parts.push(CssPartTag { name, description }),
                Err(e) => doc.errors.push(err("csspart", e)),
            },
            "cssprop" => match parse_cssprop(&seg.body) {
                Ok(tag) => doc.css_props.push(tag),
                Err(e) => doc.errors.push(err("cssprop", e)),
            },
            "cssstate" => match parse_named(&seg.body) {
                Ok((name, description)) => doc.css_states.push(CssStateTag { name, description }),
                Err(e) => doc.errors.push(err("cssstate", e)),
            },
            "fires" | "event" => match parse_fires(&seg.body) {
                Ok(tag) => doc.fires.push(tag),
                Err(e) => doc.errors.push(err("fires", e)),
            },
            "param" => doc.params.push(parse_param(&seg.body)),
            "returns" => doc.returns = Some(parse_returns(&seg.body)),
            "type" => {
                let (type_text, _) = split_type_annotation(&seg.body);
                doc.type_text = type_text;
            }
            "demo" => match parse_demo(&seg.body) {
                Ok(tag) => doc.demos.push(tag),
                Err(e) => doc.errors.push(err("demo", e)),
            },
            _ => {} // unrecognized tags are ignored, not an error
        }
    }

    doc.example = join_examples(&examples);
    doc
}

fn err(tag: &str, message: impl Into<String>) -> JsdocError {
    JsdocError {
        tag: tag.to_string(),
        message: message.into(),
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn parse_attr(body: &str) -> Result<AttrTag, String> {
    let (type_text, rest) = split_type_annotation(body);
    if rest.is_empty() {
        return Err("missing attribute name".to_string());
    }
    let (name, description) = split_name_and_description(rest);
    Ok(AttrTag {
        name: name.to_string(),
        type_text,
        description,
    })
}

fn parse_slot(body: &str) -> SlotTag {
    if body.is_empty() {
        return SlotTag {
            name: String::new(),
            description: None,
        };
    }
    let (name, description) = split_name_and_description(body);
    SlotTag {
        name: name.to_string(),
        description,
    }
}

fn parse_named(body: &str) -> Result<(String, Option<String>), String> {
    if body.is_empty() {
        return Err("missing name".to_string());
    }
    let (name, description) = split_name_and_description(body);
    Ok((name.to_string(), description))
}

fn parse_cssprop(body: &str) -> Result<CssPropTag, String> {
    let (syntax, rest) = split_type_annotation(body);
    if rest.is_empty() {
        return Err("missing custom property name".to_string());
    }
    let (name, description) = split_name_and_description(rest);
    Ok(CssPropTag {
        name: name.to_string(),
        syntax,
        description,
    })
}

fn parse_fires(body: &str) -> Result<EventTag, String> {
    let (type_text, rest) = split_type_annotation(body);
    if rest.is_empty() {
        return Err("missing event name".to_string());
    }
    let (name, description) = split_name_and_description(rest);
    Ok(EventTag {
        name: name.to_string(),
        type_text,
        description,
    })
}

fn parse_param(body: &str) -> ParamTag {
    let (type_text, rest) = split_type_annotation(body);
    if rest.is_empty() {
        return ParamTag {
            name: None,
            type_text,
            description: None,
        };
    }
    let (name, description) = split_name_and_description(rest);
    ParamTag {
        name: Some(name.to_string()),
        type_text,
        description,
    }
}

fn parse_returns(body: &str) -> ReturnsTag {
    let (type_text, rest) = split_type_annotation(body);
    let rest = rest.trim_start_matches('-').trim();
    ReturnsTag {
        type_text,
        description: non_empty(rest.to_string()),
    }
}

fn parse_demo(body: &str) -> Result<DemoTag, String> {
    if body.is_empty() {
        return Err("missing demo url".to_string());
    }
    let (url, description) = split_name_and_description(body);
    Ok(DemoTag {
        url: url.to_string(),
        description,
    })
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests;
