//! Per-project views - read-only projections of a collection onto the
//! active project.
//!
//! Views never mutate their input and keep no state; they are recomputed from
//! the latest collection on every call.

use std::cmp::Ordering;

use crate::record::ProjectScoped;

/// Records belonging to `active`, in collection order.
///
/// Returns an empty vec when no project is active or nothing matches.
pub fn project_view<R: ProjectScoped>(items: &[R], active: Option<&str>) -> Vec<R> {
    let Some(active) = active else {
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| item.project_id() == Some(active))
        .cloned()
        .collect()
}

/// Records belonging to `active`, stably sorted by `compare`.
pub fn project_view_by<R, F>(items: &[R], active: Option<&str>, compare: F) -> Vec<R>
where
    R: ProjectScoped,
    F: FnMut(&R, &R) -> Ordering,
{
    let mut view = project_view(items, active);
    view.sort_by(compare);
    view
}

/// Compare labels with embedded numbers by numeric value, so scene `"2"`
/// sorts before `"10"` and `"10"` before `"10A"`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut left);
                let r_run = take_digits(&mut right);
                let l_trim = l_run.trim_start_matches('0');
                let r_trim = r_run.trim_start_matches('0');
                let ord = l_trim
                    .len()
                    .cmp(&r_trim.len())
                    .then_with(|| l_trim.cmp(r_trim));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(l), Some(r)) => {
                let ord = l
                    .to_ascii_lowercase()
                    .cmp(&r.to_ascii_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}
