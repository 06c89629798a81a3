//! Compiling a small blog end to end.

use std::fs;

use blogger::presentation::factory::create_compile_use_case;
use blogger::CompileOptions;

use crate::common::{TestBlog, HELLO_POST, INDEX_TEMPLATE, SITE_YAML};

fn hello_blog() -> TestBlog {
    TestBlog::new()
        .with_file("site.yaml", SITE_YAML)
        .with_file("posts/hello.md", HELLO_POST)
        .with_file("templates/index.html", INDEX_TEMPLATE)
        .with_file("assets/css/site.css", "body {}")
}

#[test]
fn hello_post_becomes_index_page() {
    let blog = hello_blog();

    let result = create_compile_use_case(blog.layout())
        .unwrap()
        .execute(&CompileOptions::default())
        .unwrap();

    assert_eq!(result.posts, vec!["hello.md"]);
    assert_eq!(
        blog.read_out("index.html"),
        "<a id=\"Hello\"></a><h1>Hi</h1>\n"
    );
    assert_eq!(blog.read_out("assets/css/site.css"), "body {}");
    assert_eq!(result.copied, 1);
}

#[test]
fn second_compile_is_byte_identical() {
    let blog = hello_blog();
    let use_case = create_compile_use_case(blog.layout()).unwrap();

    use_case.execute(&CompileOptions::default()).unwrap();
    let first = fs::read(blog.out_dir().join("index.html")).unwrap();
    use_case.execute(&CompileOptions::default()).unwrap();
    let second = fs::read(blog.out_dir().join("index.html")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn drafts_only_appear_when_asked_for() {
    let blog = hello_blog().with_file("drafts/wip.md", "---\ntitle: Work in progress\n---\nsoon\n");
    let use_case = create_compile_use_case(blog.layout()).unwrap();

    let without = use_case.execute(&CompileOptions::default()).unwrap();
    assert_eq!(without.posts, vec!["hello.md"]);

    let with = use_case
        .execute(&CompileOptions {
            include_drafts: true,
        })
        .unwrap();
    assert_eq!(with.posts, vec!["hello.md", "wip.md"]);
    assert!(blog.read_out("index.html").contains("Work-in-progress"));
}

#[test]
fn enabled_sitemap_extension_writes_sitemap() {
    let blog = hello_blog().with_file("extensions.toml", "enabled = [\"sitemap\"]\n");

    create_compile_use_case(blog.layout())
        .unwrap()
        .execute(&CompileOptions::default())
        .unwrap();

    assert_eq!(blog.read_out("sitemap.txt"), "/index.html\n");
}
