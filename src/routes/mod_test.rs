use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn pkg_dir_joins_site_root_and_pkg_dir() {
    assert_eq!(pkg_dir("target/site", "pkg"), PathBuf::from("target/site/pkg"));
}

#[test]
fn route_error_message_names_leptos() {
    let err = RouteError::LeptosConfig("missing output-name".to_owned());
    assert_eq!(err.to_string(), "leptos configuration: missing output-name");
}
