use super::*;

#[test]
fn npm_spec_with_version() {
    let spec = PackageSpec::parse("npm:lit@3.1.0").unwrap();
    assert_eq!(spec, PackageSpec::Npm { name: "lit".to_string(), version: Some("3.1.0".to_string()) });
}

#[test]
fn npm_spec_without_version() {
    let spec = PackageSpec::parse("npm:lit").unwrap();
    assert_eq!(spec, PackageSpec::Npm { name: "lit".to_string(), version: None });
}

#[test]
fn npm_scoped_spec_keeps_its_own_at_sign() {
    let spec = PackageSpec::parse("npm:@shoelace/components@2.0.0").unwrap();
    assert_eq!(spec, PackageSpec::Npm { name: "@shoelace/components".to_string(), version: Some("2.0.0".to_string()) });
}

#[test]
fn jsr_spec() {
    let spec = PackageSpec::parse("jsr:@std/html").unwrap();
    assert_eq!(spec, PackageSpec::Jsr { scope: "@std".to_string(), name: "html".to_string() });
}

#[test]
fn url_spec() {
    let spec = PackageSpec::parse("https://example.com/my-package").unwrap();
    assert_eq!(spec, PackageSpec::Url("https://example.com/my-package".to_string()));
}

#[test]
fn unrecognized_spec_is_none() {
    assert!(PackageSpec::parse("my-package").is_none());
}
