//! Path pattern matching for the activation policy.
//!
//! Patterns are slash-separated segment lists. A `*` segment matches exactly
//! one path segment, except in last position where it matches all remaining
//! segments (at least one).

/// Check a path against a set of patterns
pub fn match_path(path: &str, patterns: &[&str]) -> bool {
	let path_segs: Vec<&str> = segments(path);
	patterns.iter().any(|pattern| match_pattern(&path_segs, &segments(pattern)))
}

fn segments(path: &str) -> Vec<&str> {
	path.trim_matches('/').split('/').filter(|s| !s.is_empty()).collect()
}

fn match_pattern(path_segs: &[&str], pattern_segs: &[&str]) -> bool {
	for (i, pattern_seg) in pattern_segs.iter().enumerate() {
		if *pattern_seg == "*" && i == pattern_segs.len() - 1 {
			return path_segs.len() > i;
		}

		match path_segs.get(i) {
			Some(path_seg) if *pattern_seg == "*" || path_seg == pattern_seg => {}
			_ => return false,
		}
	}

	path_segs.len() == pattern_segs.len()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_exact_match() {
		assert!(match_path("admin/structure/views", &["admin/structure/views"]));
		assert!(!match_path("admin/structure", &["admin/structure/views"]));
		assert!(!match_path("admin/structure/views/extra", &["admin/structure/views"]));
	}

	#[test]
	fn test_trailing_wildcard_matches_remaining_segments() {
		let patterns = ["admin/structure/views/*"];
		assert!(match_path("admin/structure/views/view1", &patterns));
		assert!(match_path("admin/structure/views/123/edit", &patterns));
		assert!(!match_path("admin/structure/views", &patterns));
		assert!(!match_path("node/1/edit", &patterns));
	}

	#[test]
	fn test_inner_wildcard_matches_one_segment() {
		let patterns = ["node/*/edit"];
		assert!(match_path("node/1/edit", &patterns));
		assert!(!match_path("node/1/2/edit", &patterns));
		assert!(!match_path("node/1", &patterns));
	}

	#[test]
	fn test_leading_slash_is_ignored() {
		assert!(match_path("/admin/structure/views", &["admin/structure/views"]));
		assert!(match_path("admin/structure/views/1", &["/admin/structure/views/*"]));
	}
}

// vim: ts=4
