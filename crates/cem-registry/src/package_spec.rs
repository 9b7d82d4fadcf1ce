//! Parses the "additional packages" grammar (§6):
//! `npm:<spec>@<ver>` | `jsr:<scope>/<name>` | an http(s) URL.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSpec {
    Npm { name: String, version: Option<String> },
    Jsr { scope: String, name: String },
    Url(String),
}

impl PackageSpec {
    #[must_use]
    pub fn parse(spec: &str) -> Option<PackageSpec> {
        if let Some(rest) = spec.strip_prefix("npm:") {
            return Some(parse_npm(rest));
        }
        if let Some(rest) = spec.strip_prefix("jsr:") {
            return parse_jsr(rest);
        }
        if spec.starts_with("http://") || spec.starts_with("https://") {
            return Some(PackageSpec::Url(spec.to_string()));
        }
        None
    }
}

fn parse_npm(rest: &str) -> PackageSpec {
    // A leading `@scope/name` carries its own `@`; only a *trailing*
    // `@version` (after the name) is the version separator.
    let (name_part, version) = match rest.rfind('@') {
        Some(at) if at > 0 => (&rest[..at], Some(rest[at + 1..].to_string())),
        _ => (rest, None),
    };
    if let Some(ver) = &version {
        if semver::VersionReq::parse(ver).is_err() {
            tracing::warn!(version = %ver, "additional package version is not a valid semver range");
        }
    }
    PackageSpec::Npm { name: name_part.to_string(), version }
}

fn parse_jsr(rest: &str) -> Option<PackageSpec> {
    let (scope, name) = rest.split_once('/')?;
    Some(PackageSpec::Jsr { scope: scope.to_string(), name: name.to_string() })
}

#[cfg(test)]
#[path = "tests/package_spec.rs"]
mod tests;
