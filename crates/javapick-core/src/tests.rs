use std::path::PathBuf;

use super::*;

#[test]
fn leading_major_reads_modern_and_short_versions() {
    assert_eq!(leading_major("21.0.1"), Some(21));
    assert_eq!(leading_major("17"), Some(17));
    assert_eq!(leading_major("8.0"), Some(8));
    assert_eq!(leading_major(" 11.0.2 "), Some(11));
}

#[test]
fn leading_major_keeps_digits_before_suffix() {
    assert_eq!(leading_major("9-ea"), Some(9));
    assert_eq!(leading_major("22+36"), Some(22));
}

#[test]
fn leading_major_rejects_non_numeric_versions() {
    assert_eq!(leading_major("abc"), None);
    assert_eq!(leading_major("bad-version"), None);
    assert_eq!(leading_major(""), None);
    assert_eq!(leading_major(".17"), None);
}

#[test]
fn leading_major_rejects_values_that_overflow() {
    assert_eq!(leading_major("99999999999999999999.0"), None);
}

#[test]
fn installation_major_defaults_to_zero_for_malformed_version() {
    let installation = Installation::new(
        "x",
        "bad-version",
        InstallationKind::RuntimeOnly,
        "PATH",
    );
    assert_eq!(installation.major(), 0);
}

#[test]
fn display_name_handles_legacy_and_modern_versions() {
    assert_eq!(display_name("1.8.0_291"), "Java 8");
    assert_eq!(display_name("21.0.1"), "Java 21");
    assert_eq!(display_name("17"), "Java 17");
    assert_eq!(display_name("abc"), "Java abc");
}

#[test]
fn parse_version_output_reads_quoted_version() {
    let output = "openjdk version \"17.0.2\" 2022-01-18\nOpenJDK Runtime Environment (build 17.0.2+8-86)\n";
    assert_eq!(parse_version_output(output).as_deref(), Some("17.0.2"));

    let legacy = "java version \"1.8.0_291\"\nJava(TM) SE Runtime Environment";
    assert_eq!(parse_version_output(legacy).as_deref(), Some("1.8.0_291"));
}

#[test]
fn parse_version_output_rejects_short_first_line() {
    assert_eq!(parse_version_output("openjdk version"), None);
    assert_eq!(parse_version_output(""), None);
}

#[test]
fn version_from_dir_name_covers_known_layouts() {
    assert_eq!(version_from_dir_name("jdk-21.0.1").as_deref(), Some("21.0.1"));
    assert_eq!(
        version_from_dir_name("jdk-17.0.2-hotspot").as_deref(),
        Some("17.0.2")
    );
    assert_eq!(
        version_from_dir_name("jre1.8.0_291").as_deref(),
        Some("1.8.0.291")
    );
    assert_eq!(version_from_dir_name("jdk"), None);
    assert_eq!(version_from_dir_name("openjdk17"), None);
}

#[test]
fn kind_from_dir_name_uses_prefix() {
    assert_eq!(
        InstallationKind::from_dir_name("jdk-21.0.1"),
        Some(InstallationKind::FullDevelopmentKit)
    );
    assert_eq!(
        InstallationKind::from_dir_name("jre1.8.0_291"),
        Some(InstallationKind::RuntimeOnly)
    );
    assert_eq!(InstallationKind::from_dir_name("zulu-17"), None);
}

#[test]
fn kind_preference_orders_jdk_over_jre_over_system() {
    assert!(
        InstallationKind::FullDevelopmentKit.preference()
            > InstallationKind::RuntimeOnly.preference()
    );
    assert!(
        InstallationKind::RuntimeOnly.preference() > InstallationKind::SystemDefault.preference()
    );
}

#[test]
fn kind_parse_accepts_wire_names() {
    assert_eq!(
        InstallationKind::parse("JDK"),
        Some(InstallationKind::FullDevelopmentKit)
    );
    assert_eq!(
        InstallationKind::parse(" jre "),
        Some(InstallationKind::RuntimeOnly)
    );
    assert_eq!(
        InstallationKind::parse("System"),
        Some(InstallationKind::SystemDefault)
    );
    assert_eq!(InstallationKind::parse("graal"), None);
}

#[test]
fn installation_deserializes_discovery_wire_shape() {
    let raw = r#"{"path":"C:\\Program Files\\Java\\jdk-21.0.1","version":"21.0.1","type":"JDK","source":"Program Files"}"#;
    let parsed: Installation = serde_json::from_str(raw).expect("installation should parse");

    assert_eq!(parsed.kind, InstallationKind::FullDevelopmentKit);
    assert_eq!(parsed.version, "21.0.1");
    assert_eq!(parsed.source, "Program Files");
    assert_eq!(parsed.major(), 21);
}

#[test]
fn installation_source_is_optional_on_the_wire() {
    let raw = r#"{"path":"/usr/lib/jvm/java-17","version":"17.0.2","type":"System"}"#;
    let parsed: Installation = serde_json::from_str(raw).expect("installation should parse");
    assert_eq!(parsed.source, "");
}

#[test]
fn tier_serializes_to_badge_status() {
    let encoded = serde_json::to_string(&CompatibilityTier::MarginallyCompatible)
        .expect("tier should serialize");
    assert_eq!(encoded, "\"marginal\"");
    assert_eq!(CompatibilityTier::Compatible.as_str(), "compatible");
    assert!(!CompatibilityTier::Incompatible.is_usable());
}

#[test]
fn executable_path_points_into_bin() {
    let installation = Installation::new(
        "/usr/lib/jvm/java-21",
        "21.0.1",
        InstallationKind::SystemDefault,
        "PATH",
    );
    let expected_binary = if cfg!(windows) { "java.exe" } else { "java" };
    assert_eq!(
        installation.executable_path(),
        PathBuf::from("/usr/lib/jvm/java-21")
            .join("bin")
            .join(expected_binary)
    );
}
