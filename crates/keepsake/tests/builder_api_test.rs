//! Integration tests for the PageBuilder API

use keepsake::{
    KeepsakeError, PageBuilder,
    config::AppConfig,
    schedule::ScheduleInterval,
};

const GREETING: &str = include_str!("../../../demos/greeting.toml");

#[test]
fn test_builder_api_exists() {
    let _builder = PageBuilder::default();
}

#[test]
fn test_parse_and_render_demo() {
    let builder = PageBuilder::default();
    let page = builder.parse(GREETING).expect("Failed to parse demo");
    let html = builder.render_html(&page).expect("Failed to render demo");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("</html>"));
    assert!(html.contains("<svg"), "Plan section should inline its chart");
    assert!(html.contains("<strong>"), "Emphasis should render as strong");
    for section in page.sections() {
        assert!(
            html.contains(&format!("id=\"{}\"", section.id())),
            "Missing anchor for section {}",
            section.id()
        );
    }
}

#[test]
fn test_authored_markup_is_escaped() {
    let source = r#"
title = "Fish & <Chips>"

[[sections]]
id = "end"
kind = "closing"
heading = "End"
messages = ["<script>alert(1)</script> and **bold** & brave"]
"#;
    let builder = PageBuilder::default();
    let page = builder.parse(source).expect("Failed to parse");
    let html = builder.render_html(&page).expect("Failed to render");

    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(!html.contains("<Chips>"));
    assert!(html.contains("<strong>bold</strong>"));
}

#[test]
fn test_parse_invalid_document_returns_error() {
    let builder = PageBuilder::default();
    let result = builder.parse("this is not toml = = =");

    match result {
        Err(KeepsakeError::Parse { err, src }) => {
            assert!(!err.diagnostics().is_empty());
            assert_eq!(src, "this is not toml = = =");
        }
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_parse_with_warnings_reports_them() {
    let source = r#"
title = "t"
footer = "unclosed ** marker"
"#;
    let parsed = PageBuilder::default()
        .parse_with_warnings(source)
        .expect("warnings do not fail the parse");

    assert_eq!(parsed.warnings().len(), 1);
    assert_eq!(parsed.page().footer(), Some("unclosed ** marker"));
}

#[test]
fn test_interaction_config_sets_initial_state() {
    let config: AppConfig = toml::from_str(
        r#"
[interaction]
timeline = "expanded"
quotes = "back"
playback = "playing"
"#,
    )
    .expect("valid config");
    let builder = PageBuilder::new(config);
    let page = builder.parse(GREETING).expect("Failed to parse demo");
    let html = builder.render_html(&page).expect("Failed to render demo");

    assert!(html.contains("<details open>"));
    assert!(html.contains("class=\"flip\" data-face=\"back\""));
    assert!(html.contains(" autoplay"));

    let closed = PageBuilder::default()
        .render_html(&page)
        .expect("Failed to render demo");
    assert!(!closed.contains("class=\"flip\" data-face=\"back\""));
    assert!(!closed.contains(" autoplay"));
}

#[test]
fn test_render_schedule_svg_overflow_is_unclamped() {
    let builder = PageBuilder::default();
    let svg = builder
        .render_schedule_svg(&[
            ScheduleInterval::new("Paper 2 Draft", 11, 2),
            ScheduleInterval::new("Spill", 12, 3),
        ])
        .expect("Failed to render chart");

    assert!(svg.contains("class=\"bar\""));
    assert!(svg.contains("class=\"bar overflow\""));
}

#[test]
fn test_invalid_layout_is_a_layout_error() {
    let config: AppConfig = toml::from_str("[layout]\nchart_width = 0.0").expect("valid config");
    let result = PageBuilder::new(config).render_schedule_svg(&[]);

    assert!(matches!(result, Err(KeepsakeError::Layout(_))));
}

#[test]
fn test_invalid_color_is_an_export_error() {
    let config: AppConfig =
        toml::from_str("[style]\naccent_color = \"nope\"").expect("valid config");
    let result = PageBuilder::new(config).render_schedule_svg(&[]);

    assert!(matches!(result, Err(KeepsakeError::Export(_))));
}

#[test]
fn test_builder_reusability() {
    let builder = PageBuilder::default();

    let first = builder.parse("title = \"One\"").expect("Failed to parse first");
    let second = builder.parse("title = \"Two\"").expect("Failed to parse second");

    let html1 = builder.render_html(&first).expect("Failed to render first");
    let html2 = builder.render_html(&second).expect("Failed to render second");

    assert!(html1.contains("<title>One</title>"));
    assert!(html2.contains("<title>Two</title>"));
}

#[test]
fn test_plan_is_locked_until_unlocked() {
    let builder = PageBuilder::default();
    let page = builder.parse(GREETING).expect("Failed to parse demo");

    let locked = builder.render_html(&page).expect("Failed to render demo");
    assert!(locked.contains("<details class=\"plan-lock\">"));

    let config: AppConfig =
        toml::from_str("[interaction]\nplan = \"expanded\"").expect("valid config");
    let unlocked = PageBuilder::new(config)
        .render_html(&page)
        .expect("Failed to render demo");
    assert!(unlocked.contains("<details class=\"plan-lock\" open>"));
}

#[test]
fn test_closing_pipeline_and_goal_are_rendered() {
    let builder = PageBuilder::default();
    let page = builder.parse(GREETING).expect("Failed to parse demo");
    let html = builder.render_html(&page).expect("Failed to render demo");

    assert!(html.contains("class=\"pipeline-group\""));
    assert!(html.contains("Revise the second chapter"));
    assert!(html.contains("href=\"drafts/chapter-2.pdf\""));
    assert!(html.contains("<summary>See the outline</summary>"));
    assert!(html.contains("<details class=\"response\">"));

    let config: AppConfig =
        toml::from_str("[interaction]\ngoal = \"expanded\"").expect("valid config");
    let revealed = PageBuilder::new(config)
        .render_html(&page)
        .expect("Failed to render demo");
    assert!(revealed.contains("<details class=\"response\" open>"));
}
