//! Breadcrumb derivation from the current path.

#[cfg(test)]
#[path = "breadcrumb_test.rs"]
mod breadcrumb_test;

use super::access::match_route;
use super::pattern::split_path;
use super::table::{self, HOME};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub path: String,
    pub label: String,
}

/// Build the crumb trail for `path`, starting with the home entry.
///
/// Each accumulated prefix is looked up in the route table. Prefixes with no
/// matching row are skipped, except the last one, which falls back to a
/// cleaned rendering of its raw segment.
#[must_use]
pub fn derive(path: &str) -> Vec<Crumb> {
    let home_label = table::find(HOME).map_or("الرئيسية", |r| r.label);
    let mut crumbs = vec![Crumb { path: HOME.to_owned(), label: home_label.to_owned() }];

    let segments: Vec<&str> = split_path(path).collect();
    let mut prefix = String::new();
    for (i, segment) in segments.iter().enumerate() {
        prefix.push('/');
        prefix.push_str(segment);
        let is_last = i + 1 == segments.len();
        match match_route(&prefix) {
            Some(route) => crumbs.push(Crumb { path: prefix.clone(), label: route.label.to_owned() }),
            None if is_last => crumbs.push(Crumb { path: prefix.clone(), label: humanize_segment(segment) }),
            None => {}
        }
    }
    crumbs
}

/// True when the trail carries more than the home entry.
#[must_use]
pub fn should_render(crumbs: &[Crumb]) -> bool {
    crumbs.len() > 1
}

/// `my-raw_segment` -> `My Raw Segment`.
#[must_use]
pub fn humanize_segment(segment: &str) -> String {
    segment
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
