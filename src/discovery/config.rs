pub const DESCRIPTOR_FILE_NAME: &str = "pom.xml";
pub const DESCRIPTOR_SUFFIX: &str = ".xml";

pub const DEFAULT_SOURCE_DIR: &str = "src/main/java";
pub const DEFAULT_TEST_SOURCE_DIR: &str = "src/test/java";

pub const DEFAULT_PLUGIN_GROUP: &str = "org.apache.maven.plugins";
pub const SUREFIRE_ARTIFACT: &str = "org.apache.maven.plugins:maven-surefire-plugin";

pub const DEFAULT_SUREFIRE_INCLUDES: &[&str] = &[
    "**/Test*.java",
    "**/*Test.java",
    "**/*Tests.java",
    "**/*TestCase.java",
];
