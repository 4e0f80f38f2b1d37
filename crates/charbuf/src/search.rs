//! Literal substring search over the logical content.
//!
//! Both directions follow the classic `indexOf`/`lastIndexOf` contract: an
//! empty needle matches at the (clamped) starting offset, and the backward
//! search returns the rightmost match *starting* at or below the offset.

/// First index at or after `from` where `needle` occurs in `haystack`.
pub(crate) fn find_forward(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    let from = from.min(haystack.len());
    if needle.is_empty() {
        return Some(from);
    }
    if needle.len() > haystack.len() {
        return None;
    }

    let last = haystack.len() - needle.len();
    if from > last {
        return None;
    }

    (from..=last).find(|&start| haystack[start..start + needle.len()] == *needle)
}

/// Last index at or before `from` where `needle` occurs in `haystack`.
pub(crate) fn find_backward(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return Some(from.min(haystack.len()));
    }
    if needle.len() > haystack.len() {
        return None;
    }

    let mut start = from.min(haystack.len() - needle.len());
    loop {
        if haystack[start..start + needle.len()] == *needle {
            return Some(start);
        }
        if start == 0 {
            return None;
        }
        start -= 1;
    }
}
