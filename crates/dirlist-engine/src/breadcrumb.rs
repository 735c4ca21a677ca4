//! Breadcrumb navigation for a resolved path.

use dirlist_core::{Crumb, WEB_ROOT};

/// Build the breadcrumb trail for a resolved path.
///
/// The first crumb is always `Home` linking to the application URL; each
/// following crumb links to the cumulative path up to its segment via the
/// `?dir=` query marker.
pub fn build_breadcrumbs(resolved: &str, root_url: &str) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb::new("Home", root_url)];

    let segments: Vec<&str> = resolved.split('/').collect();
    for (i, segment) in segments.iter().enumerate() {
        if *segment == WEB_ROOT {
            continue;
        }

        let cumulative = segments[..=i].join("/");
        crumbs.push(Crumb::new(
            *segment,
            format!("{root_url}?dir={cumulative}"),
        ));
    }

    crumbs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_has_only_home() {
        let crumbs = build_breadcrumbs(".", "http://x/");
        assert_eq!(crumbs, vec![Crumb::new("Home", "http://x/")]);
    }

    #[test]
    fn test_nested_path_links_cumulatively() {
        let crumbs = build_breadcrumbs("a/b", "http://x/");
        assert_eq!(
            crumbs,
            vec![
                Crumb::new("Home", "http://x/"),
                Crumb::new("a", "http://x/?dir=a"),
                Crumb::new("b", "http://x/?dir=a/b"),
            ]
        );
    }

    #[test]
    fn test_single_segment() {
        let crumbs = build_breadcrumbs("docs", "http://host/app/");
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[1].label, "docs");
        assert_eq!(crumbs[1].link, "http://host/app/?dir=docs");
    }
}
