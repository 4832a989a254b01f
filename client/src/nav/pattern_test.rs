use super::*;

#[test]
fn compile_root_has_no_segments() {
    let pattern = RoutePattern::compile("/");
    assert!(pattern.segments.is_empty());
    assert!(!pattern.is_dynamic());
    assert!(pattern.matches("/"));
    assert!(pattern.matches(""));
    assert!(!pattern.matches("/login"));
}

#[test]
fn compile_recognizes_bracket_and_colon_params() {
    assert_eq!(
        RoutePattern::compile("/projects/[id]").segments,
        vec![Segment::Literal("projects"), Segment::Param("id")]
    );
    assert_eq!(
        RoutePattern::compile("/projects/:id").segments,
        vec![Segment::Literal("projects"), Segment::Param("id")]
    );
}

#[test]
fn matches_requires_equal_segment_count() {
    let pattern = RoutePattern::compile("/projects/[id]");
    assert!(pattern.matches("/projects/42"));
    assert!(pattern.matches("/projects/42/"));
    assert!(!pattern.matches("/projects"));
    assert!(!pattern.matches("/projects/42/edit"));
}

#[test]
fn matches_requires_literal_equality() {
    let pattern = RoutePattern::compile("/projects/[id]");
    assert!(!pattern.matches("/contracts/42"));
}

#[test]
fn split_path_skips_empty_pieces() {
    assert_eq!(split_path("//a///b/").collect::<Vec<_>>(), vec!["a", "b"]);
}
