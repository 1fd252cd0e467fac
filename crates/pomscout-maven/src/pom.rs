//! POM file parsing: module identity, packaging, and dependency declarations.

use quick_xml::events::Event;
use quick_xml::Reader;

use pomscout_util::errors::ScoutError;

/// Packaging Maven assumes when `<packaging>` is absent.
pub const DEFAULT_PACKAGING: &str = "jar";

/// The parts of a POM (Project Object Model) file needed to walk module dependents.
#[derive(Debug, Clone, Default)]
pub struct Pom {
    pub artifact_id: Option<String>,
    pub packaging: Option<String>,
    pub dependencies: Vec<PomDependency>,
}

/// A dependency declared anywhere in a POM file.
#[derive(Debug, Clone, Default)]
pub struct PomDependency {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub scope: Option<String>,
    /// Declared under `<dependencyManagement>` rather than used directly.
    pub managed: bool,
}

impl Pom {
    /// Packaging kind, falling back to Maven's default.
    pub fn effective_packaging(&self) -> &str {
        self.packaging
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PACKAGING)
    }

    /// First dependency declaration whose artifact id equals `artifact_id` exactly.
    pub fn find_dependency(&self, artifact_id: &str) -> Option<&PomDependency> {
        self.dependencies
            .iter()
            .find(|d| d.artifact_id.as_deref() == Some(artifact_id))
    }

    pub fn declares(&self, artifact_id: &str) -> bool {
        self.find_dependency(artifact_id).is_some()
    }
}

/// An open `<dependency>` element and the path depth it was opened at.
struct OpenDependency {
    depth: usize,
    dep: PomDependency,
}

/// Parse a POM XML string into a `Pom` struct.
///
/// Elements are matched by local name, so namespace prefixes are ignored.
/// Every `dependencies/dependency` element counts, whether it sits under the
/// project, `dependencyManagement`, a profile or a plugin.
pub fn parse_pom(xml: &str) -> miette::Result<Pom> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut pom = Pom::default();
    let mut path: Vec<String> = Vec::new();
    let mut text_buf = String::new();
    let mut open_deps: Vec<OpenDependency> = Vec::new();
    let mut saw_project = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let tag = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if path.is_empty() {
                    if tag != "project" {
                        return Err(parse_error(format!(
                            "root element is <{tag}>, expected <project>"
                        )));
                    }
                    saw_project = true;
                }
                let is_dependency = tag == "dependency"
                    && path.last().map(String::as_str) == Some("dependencies");
                path.push(tag);
                text_buf.clear();

                if is_dependency {
                    let managed = path.iter().any(|p| p == "dependencyManagement");
                    open_deps.push(OpenDependency {
                        depth: path.len(),
                        dep: PomDependency {
                            managed,
                            ..PomDependency::default()
                        },
                    });
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().map_err(|err| parse_error(err.to_string()))?;
                text_buf.push_str(&text);
            }
            Ok(Event::CData(ref e)) => {
                text_buf.push_str(String::from_utf8_lossy(e).trim());
            }
            Ok(Event::End(_)) => {
                let depth = path.len();
                let tag = path.last().map(String::as_str).unwrap_or_default();

                // Fields directly under the innermost open <dependency>
                if let Some(open) = open_deps.last_mut() {
                    if depth == open.depth + 1 {
                        match tag {
                            "artifactId" => open.dep.artifact_id = Some(text_buf.clone()),
                            "groupId" => open.dep.group_id = Some(text_buf.clone()),
                            "scope" => open.dep.scope = Some(text_buf.clone()),
                            _ => {}
                        }
                    } else if depth == open.depth {
                        if let Some(open) = open_deps.pop() {
                            pom.dependencies.push(open.dep);
                        }
                    }
                }

                // Top-level project fields
                if depth == 2 {
                    match tag {
                        "artifactId" => pom.artifact_id = Some(text_buf.clone()),
                        "packaging" => pom.packaging = Some(text_buf.clone()),
                        _ => {}
                    }
                }

                path.pop();
                text_buf.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(parse_error(format!(
                    "at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    if !saw_project {
        return Err(parse_error("no <project> element".to_string()));
    }
    if !path.is_empty() {
        return Err(parse_error(format!("unclosed <{}>", path.join(">"))));
    }

    Ok(pom)
}

fn parse_error(message: String) -> miette::Report {
    ScoutError::Generic {
        message: format!("Failed to parse POM XML: {message}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODULE_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <modelVersion>4.0.0</modelVersion>
    <parent>
        <groupId>org.example</groupId>
        <artifactId>platform</artifactId>
        <version>1.0.0</version>
    </parent>
    <artifactId>moduleA</artifactId>
    <packaging>war</packaging>

    <dependencies>
        <dependency>
            <groupId>org.example</groupId>
            <artifactId>subModuleX1</artifactId>
            <version>${project.version}</version>
        </dependency>
        <dependency>
            <groupId>junit</groupId>
            <artifactId>junit</artifactId>
            <version>4.13.2</version>
            <scope>test</scope>
        </dependency>
    </dependencies>
</project>"#;

    #[test]
    fn parse_module_pom() {
        let pom = parse_pom(MODULE_POM).unwrap();
        assert_eq!(pom.artifact_id.as_deref(), Some("moduleA"));
        assert_eq!(pom.packaging.as_deref(), Some("war"));
        assert_eq!(pom.dependencies.len(), 2);
        assert!(pom.declares("subModuleX1"));
        assert!(!pom.declares("platform"));
    }

    #[test]
    fn dependency_fields() {
        let pom = parse_pom(MODULE_POM).unwrap();
        let junit = pom.find_dependency("junit").unwrap();
        assert_eq!(junit.group_id.as_deref(), Some("junit"));
        assert_eq!(junit.scope.as_deref(), Some("test"));
        assert!(!junit.managed);
    }

    #[test]
    fn packaging_defaults_to_jar() {
        let pom = parse_pom("<project><artifactId>lib</artifactId></project>").unwrap();
        assert_eq!(pom.packaging, None);
        assert_eq!(pom.effective_packaging(), "jar");
    }

    #[test]
    fn dependency_artifact_id_does_not_leak_into_project() {
        let xml = r#"<project>
    <dependencies>
        <dependency><artifactId>core</artifactId></dependency>
    </dependencies>
    <artifactId>app</artifactId>
</project>"#;
        let pom = parse_pom(xml).unwrap();
        assert_eq!(pom.artifact_id.as_deref(), Some("app"));
        assert!(pom.declares("core"));
    }

    #[test]
    fn dependencies_at_any_depth() {
        let xml = r#"<project>
    <artifactId>app</artifactId>
    <dependencyManagement>
        <dependencies>
            <dependency><artifactId>managed-lib</artifactId></dependency>
        </dependencies>
    </dependencyManagement>
    <profiles>
        <profile>
            <dependencies>
                <dependency><artifactId>profile-lib</artifactId></dependency>
            </dependencies>
        </profile>
    </profiles>
    <build>
        <plugins>
            <plugin>
                <artifactId>maven-war-plugin</artifactId>
                <dependencies>
                    <dependency><artifactId>plugin-lib</artifactId></dependency>
                </dependencies>
            </plugin>
        </plugins>
    </build>
</project>"#;
        let pom = parse_pom(xml).unwrap();
        assert_eq!(pom.dependencies.len(), 3);
        assert!(pom.find_dependency("managed-lib").unwrap().managed);
        assert!(pom.declares("profile-lib"));
        assert!(pom.declares("plugin-lib"));
        assert!(!pom.declares("maven-war-plugin"));
    }

    #[test]
    fn exclusions_are_not_dependencies() {
        let xml = r#"<project>
    <artifactId>app</artifactId>
    <dependencies>
        <dependency>
            <artifactId>lib</artifactId>
            <exclusions>
                <exclusion>
                    <groupId>commons-logging</groupId>
                    <artifactId>commons-logging</artifactId>
                </exclusion>
            </exclusions>
        </dependency>
    </dependencies>
</project>"#;
        let pom = parse_pom(xml).unwrap();
        assert_eq!(pom.dependencies.len(), 1);
        assert_eq!(pom.dependencies[0].artifact_id.as_deref(), Some("lib"));
        assert!(!pom.declares("commons-logging"));
    }

    #[test]
    fn prefixed_elements_match_by_local_name() {
        let xml = r#"<pom:project xmlns:pom="http://maven.apache.org/POM/4.0.0">
    <pom:artifactId>app</pom:artifactId>
    <pom:dependencies>
        <pom:dependency><pom:artifactId>core</pom:artifactId></pom:dependency>
    </pom:dependencies>
</pom:project>"#;
        let pom = parse_pom(xml).unwrap();
        assert_eq!(pom.artifact_id.as_deref(), Some("app"));
        assert!(pom.declares("core"));
    }

    #[test]
    fn escaped_text_is_unescaped() {
        let xml = "<project><artifactId>a&amp;b</artifactId></project>";
        let pom = parse_pom(xml).unwrap();
        assert_eq!(pom.artifact_id.as_deref(), Some("a&b"));
    }

    #[test]
    fn text_split_by_comment_or_cdata_is_joined() {
        let xml = r#"<!DOCTYPE project>
<project>
    <artifactId>a<!-- renamed -->pp</artifactId>
    <dependencies>
        <dependency><artifactId>co<![CDATA[re]]>-api</artifactId></dependency>
    </dependencies>
</project>"#;
        let pom = parse_pom(xml).unwrap();
        assert_eq!(pom.artifact_id.as_deref(), Some("app"));
        assert!(pom.declares("core-api"));
        assert!(!pom.declares("-api"));
    }

    #[test]
    fn dependency_without_artifact_id_declares_nothing() {
        let xml = r#"<project>
    <artifactId>app</artifactId>
    <dependencies>
        <dependency><groupId>g</groupId></dependency>
    </dependencies>
</project>"#;
        let pom = parse_pom(xml).unwrap();
        assert_eq!(pom.dependencies.len(), 1);
        assert_eq!(pom.dependencies[0].artifact_id, None);
        assert!(!pom.declares(""));
    }

    #[test]
    fn malformed_xml_is_error() {
        assert!(parse_pom("<project><artifactId>x</groupId></project>").is_err());
        assert!(parse_pom("<project><artifactId>x</artifactId>").is_err());
    }

    #[test]
    fn non_project_root_is_error() {
        assert!(parse_pom("<settings><artifactId>x</artifactId></settings>").is_err());
        assert!(parse_pom("").is_err());
        assert!(parse_pom("just some text").is_err());
    }
}
