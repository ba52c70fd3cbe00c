use ripple_core::dependency::Dependency;
use ripple_core::nuget::RemoteNuget;

#[test]
fn parse_pinned_shorthand() {
    let dep = Dependency::parse("Bottles@1.0.0.0").unwrap();
    assert_eq!(dep.name, "Bottles");
    assert_eq!(dep.version.as_deref(), Some("1.0.0.0"));
    assert!(!dep.is_floating());
}

#[test]
fn parse_bare_name_is_floating() {
    let dep = Dependency::parse("Bottles").unwrap();
    assert_eq!(dep.name, "Bottles");
    assert!(dep.is_floating());
}

#[test]
fn parse_empty_string_returns_none() {
    assert!(Dependency::parse("").is_none());
}

#[test]
fn parse_missing_version_returns_none() {
    assert!(Dependency::parse("Bottles@").is_none());
    assert!(Dependency::parse("@1.0.0.0").is_none());
}

#[test]
fn display_roundtrip() {
    let s = "Bottles@1.0.0.0";
    assert_eq!(Dependency::parse(s).unwrap().to_string(), s);
    assert_eq!(Dependency::floated("Bottles").to_string(), "Bottles");
}

#[test]
fn pinning_a_floating_dependency_stops_it_floating() {
    let mut dep = Dependency::floated("Bottles");
    dep.pin_to("1.0.0.0");
    assert!(!dep.is_floating());
    assert_eq!(dep.constraint(), Some("1.0.0.0"));
}

#[test]
fn descriptor_conversion_matches_parse() {
    let from_descriptor = RemoteNuget::new("Bottles", "1.0.0.0").to_dependency();
    let parsed = Dependency::parse("Bottles@1.0.0.0").unwrap();
    assert_eq!(from_descriptor, parsed);
}

#[test]
fn toml_round_trip_preserves_floating() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Doc {
        dependencies: Vec<Dependency>,
    }

    let doc = Doc {
        dependencies: vec![
            Dependency::pinned("Bottles", "1.0.0.0"),
            Dependency::floated("FubuCore"),
        ],
    };
    let raw = toml::to_string(&doc).unwrap();
    let back: Doc = toml::from_str(&raw).unwrap();
    assert_eq!(back.dependencies, doc.dependencies);
    assert!(back.dependencies[1].is_floating());
}
