//! Include/exclude inheritance across descriptors

use crate::fixtures::*;

use super::test_utils::*;
use surefire_scope::discovery::SelectionSource;

#[test]
fn test_defaults_without_any_configuration() {
    let project = ProjectFixture::new();
    project
        .pom(".", &["moduleA", "moduleB/pom.xml"], "")
        .pom("moduleA", &[], "")
        .pom("moduleB", &[], "");

    let tree = build(project.root());

    for module in tree.iter() {
        let selection = module.test_selection();
        assert_eq!(selection.includes, DEFAULT_INCLUDES);
        assert!(selection.excludes.is_empty());
    }
    assert_eq!(
        tree.test_selection().includes_source,
        SelectionSource::Default
    );
    assert_eq!(
        module(&tree, "moduleA").test_selection().includes_source,
        SelectionSource::Inherited
    );
}

#[test]
fn test_root_excludes_are_inherited() {
    let project = ProjectFixture::new();
    project
        .pom(
            ".",
            &["moduleA"],
            &surefire_plugin(&excludes(&["**/IntegrationTest.java"])),
        )
        .pom("moduleA", &[], "")
        .touch("moduleA/src/test/java/com/acme/IntegrationTest.java")
        .touch("moduleA/src/test/java/com/acme/FooTest.java");

    let tree = build(project.root());
    let module_a = module(&tree, "moduleA");

    assert_eq!(
        module_a.test_selection().excludes,
        vec!["**/IntegrationTest.java"]
    );
    assert_eq!(
        module_a.test_selection().excludes_source,
        SelectionSource::Inherited
    );
    assert_eq!(module_a.test_selection().includes, DEFAULT_INCLUDES);
    assert_eq!(test_names(module_a), vec!["com/acme/FooTest.java"]);
}

#[test]
fn test_own_includes_win_at_any_depth() {
    let project = ProjectFixture::new();
    project
        .pom(".", &["a"], &surefire_plugin(&includes(&["**/*Root.java"])))
        .pom("a", &["deep"], &surefire_plugin(&includes(&["**/*Mid.java"])))
        .pom(
            "a/deep",
            &[],
            &surefire_plugin(&includes(&["**/*Leaf.java"])),
        );

    let tree = build(project.root());

    assert_eq!(tree.test_selection().includes, vec!["**/*Root.java"]);
    assert_eq!(module(&tree, "a").test_selection().includes, vec!["**/*Mid.java"]);
    assert_eq!(
        module(&tree, "deep").test_selection().includes,
        vec!["**/*Leaf.java"]
    );
}

#[test]
fn test_includes_inherited_through_unconfigured_modules() {
    let project = ProjectFixture::new();
    project
        .pom(".", &["a"], &surefire_plugin(&includes(&["**/*Spec.java"])))
        .pom("a", &["b"], "")
        .pom("a/b", &[], &surefire_plugin(&excludes(&["**/Slow*.java"])));

    let tree = build(project.root());
    let b = module(&tree, "b");

    assert_eq!(b.test_selection().includes, vec!["**/*Spec.java"]);
    assert_eq!(b.test_selection().excludes, vec!["**/Slow*.java"]);
}

#[test]
fn test_empty_declared_lists_fall_through() {
    let project = ProjectFixture::new();
    project
        .pom(".", &["a"], &surefire_plugin(&includes(&["**/*Spec.java"])))
        .pom("a", &[], &surefire_plugin(&format!("{}{}", includes(&[]), excludes(&[]))));

    let tree = build(project.root());
    let a = module(&tree, "a");

    assert_eq!(a.test_selection().includes, vec!["**/*Spec.java"]);
    assert!(a.test_selection().excludes.is_empty());
}

#[test]
fn test_plugin_management_applies_to_children_only() {
    let project = ProjectFixture::new();
    project
        .pom(
            ".",
            &["a", "b"],
            &managed_surefire_plugin(&includes(&["**/*Spec.java"])),
        )
        .pom("a", &["a1"], "")
        .pom("a/a1", &[], "")
        .pom("b", &[], &surefire_plugin(&excludes(&["**/Skip*.java"])));

    let tree = build(project.root());

    assert_eq!(tree.test_selection().includes, DEFAULT_INCLUDES);

    let a = module(&tree, "a");
    assert_eq!(a.test_selection().includes, vec!["**/*Spec.java"]);
    assert_eq!(a.test_selection().includes_source, SelectionSource::Managed);

    let a1 = module(&tree, "a1");
    assert_eq!(a1.test_selection().includes, vec!["**/*Spec.java"]);
    assert_eq!(a1.test_selection().includes_source, SelectionSource::Inherited);

    // b activates its own configuration, so the managed block is skipped.
    let b = module(&tree, "b");
    assert_eq!(b.test_selection().includes, DEFAULT_INCLUDES);
    assert_eq!(b.test_selection().excludes, vec!["**/Skip*.java"]);
}

#[test]
fn test_parent_activation_shadows_its_plugin_management() {
    let project = ProjectFixture::new();
    let build = format!(
        "{}{}",
        managed_surefire_plugin(&includes(&["**/*Managed.java"])),
        surefire_plugin(&includes(&["**/*Active.java"]))
    );
    project
        .pom(".", &["child"], &build)
        .pom("child", &["grandchild"], "")
        .pom("child/grandchild", &[], "");

    let tree = super::test_utils::build(project.root());

    assert_eq!(tree.test_selection().includes, vec!["**/*Active.java"]);
    for name in ["child", "grandchild"] {
        let selection = module(&tree, name).test_selection();
        assert_eq!(selection.includes, vec!["**/*Active.java"]);
        assert_eq!(selection.includes_source, SelectionSource::Inherited);
    }
}

#[test]
fn test_legacy_test_element_overrides_includes() {
    let project = ProjectFixture::new();
    project
        .pom(
            ".",
            &[],
            &surefire_plugin(&format!(
                "<test>**/OnlyThis*.java</test>{}",
                includes(&["**/*Test.java"])
            )),
        )
        .touch("src/test/java/pkg/OnlyThisOne.java")
        .touch("src/test/java/pkg/FooTest.java");

    let tree = build(project.root());

    assert_eq!(tree.test_selection().includes, vec!["**/OnlyThis*.java"]);
    assert_eq!(test_names(&tree), vec!["pkg/OnlyThisOne.java"]);
}
