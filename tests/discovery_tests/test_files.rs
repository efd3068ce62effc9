//! Test file discovery inside modules

use crate::fixtures::*;

use super::test_utils::*;
use surefire_scope::discovery::discover_tests;

#[test]
fn test_default_patterns_select_conventional_names() {
    let project = ProjectFixture::new();
    project
        .pom(".", &[], "")
        .touch("src/test/java/a/b/TestFoo.java")
        .touch("src/test/java/a/b/FooTest.java")
        .touch("src/test/java/a/FooTests.java")
        .touch("src/test/java/FooTestCase.java")
        .touch("src/test/java/TestRoot.java")
        .touch("src/test/java/a/b/FooTest.txt")
        .touch("src/test/java/a/Helper.java")
        .touch("src/test/resources/BarTest.java");

    let tree = build(project.root());

    assert_eq!(
        test_names(&tree),
        vec![
            "FooTestCase.java",
            "TestRoot.java",
            "a/FooTests.java",
            "a/b/FooTest.java",
            "a/b/TestFoo.java",
        ]
    );
}

#[test]
fn test_missing_test_directory_is_absent() {
    let project = ProjectFixture::new();
    project.pom(".", &[], "").touch("src/main/java/App.java");

    let tree = build(project.root());

    assert_eq!(tree.test_source_directory(), None);
    assert_eq!(tree.tests().unwrap(), None);
    assert_eq!(discover_tests(&tree).unwrap(), None);
}

#[test]
fn test_existing_directory_without_matches_is_empty() {
    let project = ProjectFixture::new();
    project
        .pom(".", &[], "")
        .touch("src/test/java/Helper.java");

    let tree = build(project.root());

    assert_eq!(tree.tests().unwrap(), Some(&[][..]));
}

#[test]
fn test_custom_test_source_directory_with_basedir() {
    let project = ProjectFixture::new();
    project
        .pom(
            ".",
            &[],
            "<testSourceDirectory>${basedir}/test</testSourceDirectory><sourceDirectory>src</sourceDirectory>",
        )
        .touch("test/FooTest.java")
        .touch("src/test/java/IgnoredTest.java");

    let tree = build(project.root());

    assert_eq!(tree.test_source_directory(), Some(project.path("test").as_path()));
    assert_eq!(tree.source_directory(), Some(project.path("src").as_path()));
    assert_eq!(test_names(&tree), vec!["FooTest.java"]);
}

#[test]
fn test_excludes_remove_included_files() {
    let project = ProjectFixture::new();
    project
        .pom(
            ".",
            &["service"],
            &surefire_plugin(&excludes(&["**/*IntegrationTest.java"])),
        )
        .pom("service", &[], "")
        .touch("service/src/test/java/FooIntegrationTest.java")
        .touch("service/src/test/java/FooTest.java");

    let tree = build(project.root());

    assert_eq!(test_names(module(&tree, "service")), vec!["FooTest.java"]);
}

#[test]
fn test_every_module_reports_its_own_tests() {
    let project = ProjectFixture::new();
    project
        .pom(".", &["core", "api"], "")
        .pom("core", &[], "")
        .pom("api", &[], "")
        .touch("core/src/test/java/CoreTest.java")
        .mkdir("api/src/test/java");

    let tree = build(project.root());

    assert_eq!(tree.tests().unwrap(), None);
    assert_eq!(test_names(module(&tree, "core")), vec!["CoreTest.java"]);
    assert!(test_names(module(&tree, "api")).is_empty());
}
