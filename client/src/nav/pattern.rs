//! Compiled path patterns for route lookup.
//!
//! Table paths use `[name]` or `:name` for parameter segments. They are
//! compiled once into tagged segments and matched structurally: equal segment
//! count, literal segments equal, parameter segments match any non-empty value.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

/// One `/`-delimited piece of a route path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    Param(&'static str),
}

/// A route path split into segments. The root path has no segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    #[must_use]
    pub fn compile(path: &'static str) -> Self {
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(compile_segment)
            .collect();
        Self { segments }
    }

    /// True when any segment is a parameter.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Param(_)))
    }

    /// Structural match against a concrete request path.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let mut parts = split_path(path);
        for segment in &self.segments {
            let Some(part) = parts.next() else {
                return false;
            };
            if let Segment::Literal(lit) = segment {
                if *lit != part {
                    return false;
                }
            }
        }
        parts.next().is_none()
    }
}

/// Non-empty `/`-delimited pieces of a request path.
pub fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn compile_segment(raw: &'static str) -> Segment {
    if let Some(name) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        return Segment::Param(name);
    }
    if let Some(name) = raw.strip_prefix(':') {
        return Segment::Param(name);
    }
    Segment::Literal(raw)
}
