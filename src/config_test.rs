use super::*;

#[test]
fn defaults_have_no_endpoint() {
    let c = WidgetConfig::default();
    assert_eq!(c.endpoint, "");
    assert_eq!(c.container_selector, "#log.sl__chat__layout");
    assert_eq!(c.log_level, log::Level::Info);
}

#[test]
fn worker_param_sets_endpoint() {
    let c = WidgetConfig::from_script_src(Some("https://cdn.example/queue.js?worker=https://store.example/q"));
    assert_eq!(c.endpoint, "https://store.example/q");
}

#[test]
fn worker_param_is_percent_decoded() {
    let c = WidgetConfig::from_script_src(Some(
        "https://cdn.example/queue.js?worker=https%3A%2F%2Fstore.example%2Fq%3Fkey%3Dabc",
    ));
    assert_eq!(c.endpoint, "https://store.example/q?key=abc");
}

#[test]
fn first_worker_param_wins() {
    let c = WidgetConfig::from_script_src(Some("https://cdn.example/q.js?worker=https://a.example&worker=https://b.example"));
    assert_eq!(c.endpoint, "https://a.example");
}

#[test]
fn missing_worker_param_leaves_endpoint_empty() {
    let c = WidgetConfig::from_script_src(Some("https://cdn.example/queue.js?v=3"));
    assert_eq!(c.endpoint, "");
}

#[test]
fn missing_or_invalid_src_yields_defaults() {
    assert_eq!(WidgetConfig::from_script_src(None), WidgetConfig::default());
    assert_eq!(WidgetConfig::from_script_src(Some("")), WidgetConfig::default());
    assert_eq!(WidgetConfig::from_script_src(Some("not a url")), WidgetConfig::default());
}

#[test]
fn container_param_overrides_selector() {
    let c = WidgetConfig::from_script_src(Some("https://cdn.example/q.js?container=%23chat"));
    assert_eq!(c.container_selector, "#chat");
}

#[test]
fn blank_container_param_keeps_default() {
    let c = WidgetConfig::from_script_src(Some("https://cdn.example/q.js?container="));
    assert_eq!(c.container_selector, "#log.sl__chat__layout");
}

#[test]
fn log_param_sets_level_case_insensitively() {
    let c = WidgetConfig::from_script_src(Some("https://cdn.example/q.js?log=DEBUG"));
    assert_eq!(c.log_level, log::Level::Debug);
}

#[test]
fn unknown_log_level_keeps_default() {
    let c = WidgetConfig::from_script_src(Some("https://cdn.example/q.js?log=loud"));
    assert_eq!(c.log_level, log::Level::Info);
}
