use std::collections::BTreeSet;

use client::routes::AppRoute;

use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn pkg_dir_joins_site_root() {
    assert_eq!(pkg_dir(Path::new("target/site"), "pkg"), PathBuf::from("target/site/pkg"));
}

#[test]
fn base_routes_builds() {
    let _router: Router = base_routes();
}

#[test]
fn mounted_routes_match_route_table() {
    let mounted: BTreeSet<String> =
        generate_route_list(client::app::App).iter().map(|r| r.path().to_owned()).collect();

    for route in AppRoute::ALL {
        assert!(mounted.contains(route.path()), "{} is not mounted", route.path());
    }
    for path in &mounted {
        let known = path.is_empty() || path == "/" || AppRoute::ALL.iter().any(|r| r.path() == path);
        assert!(known, "{path} is mounted but missing from the route table");
    }
}
