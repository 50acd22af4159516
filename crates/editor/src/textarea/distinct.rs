//! Multiset of line contents behind the unique-line count.

use std::collections::HashMap;

use ropey::{Rope, RopeSlice};

use super::wrap::ending_len;

/// Line contents with their multiplicity. Kept in step with every edit so
/// counting distinct lines never rescans the document.
#[derive(Debug, Clone, Default)]
pub(super) struct LineSet {
	counts: HashMap<String, usize>,
}

impl LineSet {
	pub fn from_rope(doc: &Rope) -> Self {
		let mut set = Self::default();
		for line in doc.lines() {
			set.insert(content(line));
		}
		set
	}

	pub fn insert(&mut self, line: String) {
		*self.counts.entry(line).or_default() += 1;
	}

	pub fn remove(&mut self, line: &str) {
		if let Some(n) = self.counts.get_mut(line) {
			*n -= 1;
			if *n == 0 {
				self.counts.remove(line);
			}
		}
	}

	pub fn distinct(&self) -> usize {
		self.counts.len()
	}
}

/// Text of `line` without its line ending.
pub(super) fn content(line: RopeSlice) -> String {
	line.slice(..line.len_chars() - ending_len(line)).to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_follow_rope_lines() {
		assert_eq!(LineSet::from_rope(&Rope::from_str("")).distinct(), 1);
		assert_eq!(LineSet::from_rope(&Rope::from_str("a\nb\na")).distinct(), 2);
		assert_eq!(LineSet::from_rope(&Rope::from_str("a\r\na\n")).distinct(), 2);
		assert_eq!(LineSet::from_rope(&Rope::from_str("a\r")).distinct(), 2);
		assert_eq!(LineSet::from_rope(&Rope::from_str("a\u{2028}a")).distinct(), 1);
	}

	#[test]
	fn remove_drops_only_the_last_copy() {
		let mut set = LineSet::from_rope(&Rope::from_str("x\nx\ny"));
		set.remove("x");
		assert_eq!(set.distinct(), 2);
		set.remove("x");
		assert_eq!(set.distinct(), 1);
		set.remove("missing");
		assert_eq!(set.distinct(), 1);
	}
}
