//! A draft's whole life: created, compiled as a draft, then published.

use chrono::NaiveDate;

use blogger::domain::ports::ScriptedPrompter;
use blogger::{CompileOptions, DraftUseCase, PublishUseCase};
use blogger::presentation::factory::create_compile_use_case;

use crate::common::{TestBlog, INDEX_TEMPLATE};

fn may_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

#[test]
fn draft_is_published_under_its_slug() {
    let blog = TestBlog::new().with_file("templates/index.html", INDEX_TEMPLATE);

    let draft = DraftUseCase::new(blog.layout())
        .with_today(may_first())
        .execute(Some("Spring Notes"))
        .unwrap();
    assert_eq!(draft.path, blog.layout().drafts.join("2024-05-01-Spring Notes.md"));

    let with_drafts = create_compile_use_case(blog.layout())
        .unwrap()
        .execute(&CompileOptions {
            include_drafts: true,
        })
        .unwrap();
    assert_eq!(with_drafts.posts, vec!["2024-05-01-Spring Notes.md"]);

    // pick draft 1, keep title, keep date, delete draft
    let prompter = ScriptedPrompter::new(["1", "y", "y", "y"]);
    let published = PublishUseCase::new(blog.layout())
        .with_today(may_first())
        .execute(&prompter)
        .unwrap();

    assert_eq!(
        published.published,
        blog.layout().posts.join("2024-05-01-spring-notes.md")
    );
    assert!(published.draft_deleted);
    assert!(!draft.path.exists());

    let compiled = create_compile_use_case(blog.layout())
        .unwrap()
        .execute(&CompileOptions::default())
        .unwrap();
    assert_eq!(compiled.posts, vec!["2024-05-01-spring-notes.md"]);
    assert!(blog.read_out("index.html").contains("Spring-Notes"));
}

#[test]
fn quitting_leaves_everything_in_place() {
    let blog = TestBlog::new().with_file("drafts/idea.md", "---\ntitle: Idea\n---\n");

    let prompter = ScriptedPrompter::new(["q"]);
    let err = PublishUseCase::new(blog.layout())
        .execute(&prompter)
        .unwrap_err();

    assert!(matches!(err, blogger::BloggerError::Aborted));
    assert!(blog.root().join("drafts/idea.md").exists());
    assert!(!blog.layout().posts.exists());
}
