//! Listing order: sort method plus folders-first grouping.

use std::cmp::Ordering;

use compact_str::CompactString;
use dirlist_core::{Listing, SortClass, SortOrder};
use rand::seq::SliceRandom;

/// Order a listing by the selected sort method.
///
/// Keys are sorted first, then entries are re-emitted by grouping bucket:
/// with `folders_first` the parent link comes first, then directories, then
/// files; without it the parent link still comes first and everything else
/// interleaves by sort key alone.
pub fn sort_listing(listing: Listing, order: SortOrder, folders_first: bool) -> Listing {
    let mut keys: Vec<CompactString> = listing.keys().cloned().collect();

    match order {
        SortOrder::AlphaAscending | SortOrder::KeyAscending => keys.sort(),
        SortOrder::AlphaDescending | SortOrder::KeyDescending => {
            keys.sort_by(|a, b| b.cmp(a));
        }
        SortOrder::NaturalCaseInsensitive => {
            keys.sort_by(|a, b| natural_cmp(a, b, true));
        }
        SortOrder::NaturalCaseSensitive => {
            keys.sort_by(|a, b| natural_cmp(a, b, false));
        }
        SortOrder::Random => {
            keys.shuffle(&mut rand::thread_rng());
        }
    }

    let mut sorted = Listing::with_capacity(listing.len());

    if folders_first {
        for class in [SortClass::ParentLink, SortClass::Directory, SortClass::File] {
            for key in &keys {
                if listing[key].sort_class() == class {
                    sorted.insert(key.clone(), listing[key].clone());
                }
            }
        }
    } else {
        for key in &keys {
            if listing[key].sort_class() == SortClass::ParentLink {
                sorted.insert(key.clone(), listing[key].clone());
            }
        }
        for key in &keys {
            if listing[key].sort_class() != SortClass::ParentLink {
                sorted.insert(key.clone(), listing[key].clone());
            }
        }
    }

    sorted
}

/// Natural ordering: embedded digit runs compare by numeric value rather
/// than lexicographically, so `file2` sorts before `file10`.
fn natural_cmp(a: &str, b: &str, fold_case: bool) -> Ordering {
    let mut a_rest = a;
    let mut b_rest = b;

    loop {
        match (a_rest.chars().next(), b_rest.chars().next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ac), Some(bc)) => {
                if ac.is_ascii_digit() && bc.is_ascii_digit() {
                    let (a_run, a_tail) = split_digit_run(a_rest);
                    let (b_run, b_tail) = split_digit_run(b_rest);

                    let ord = cmp_digit_runs(a_run, b_run);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    a_rest = a_tail;
                    b_rest = b_tail;
                } else {
                    let (x, y) = if fold_case {
                        (ac.to_ascii_lowercase(), bc.to_ascii_lowercase())
                    } else {
                        (ac, bc)
                    };
                    let ord = x.cmp(&y);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    a_rest = &a_rest[ac.len_utf8()..];
                    b_rest = &b_rest[bc.len_utf8()..];
                }
            }
        }
    }
}

/// Split off the leading ASCII digit run.
fn split_digit_run(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}

/// Compare two digit runs by numeric value without parsing (runs can exceed
/// u64). Equal values with different leading-zero counts compare by run
/// length so the ordering stays total.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a_trim = a.trim_start_matches('0');
    let b_trim = b.trim_start_matches('0');

    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
        .then_with(|| a.len().cmp(&b.len()))
}
