//! Change detection against a real project tree.

use blogger::domain::value_objects::IgnorePatterns;
use blogger::ChangeDetector;

use crate::common::{TestBlog, HELLO_POST, INDEX_TEMPLATE};

fn ignoring(blog: &TestBlog, globs: &[&str]) -> IgnorePatterns {
    let globs: Vec<String> = globs.iter().map(|g| g.to_string()).collect();
    IgnorePatterns::from_globs(blog.root(), &blog.root().join("site.yaml"), &globs).unwrap()
}

#[test]
fn edit_is_reported_once_then_quiet() {
    let blog = TestBlog::new()
        .with_file("posts/hello.md", HELLO_POST)
        .with_file("templates/index.html", INDEX_TEMPLATE);
    let mut detector = ChangeDetector::new(blog.root(), IgnorePatterns::empty()).primed();

    assert!(!detector.dirty());
    blog.write("posts/hello.md", "---\ntitle: Hello again\n---\n");
    assert!(detector.dirty());
    assert!(!detector.dirty());
}

#[test]
fn output_directory_and_ignored_files_never_trigger() {
    let blog = TestBlog::new()
        .with_file("posts/hello.md", HELLO_POST)
        .with_file("_out/.keep", "");
    let ignore = ignoring(&blog, &["*.swp"]);
    let mut detector = ChangeDetector::new(blog.root(), ignore)
        .exclude(blog.root().join("_out"))
        .primed();

    blog.write("_out/index.html", "<html/>");
    blog.write("posts/.hello.md.swp", "swap");
    assert!(!detector.dirty());

    blog.write("posts/new.md", "new");
    assert!(detector.dirty());
}

#[test]
fn deleting_a_file_alone_is_not_a_change() {
    let blog = TestBlog::new()
        .with_file("posts/a.md", "a")
        .with_file("posts/b.md", "b");
    let mut detector = ChangeDetector::new(blog.root(), IgnorePatterns::empty()).primed();

    std::fs::remove_file(blog.root().join("posts/b.md")).unwrap();
    assert!(!detector.dirty());
    assert_eq!(detector.tracked(), 1);
}
