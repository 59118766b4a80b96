//! Recognition of discrete lines from their codes, after Troesch,
//! "Droites discrètes et calendriers", Mathématiques et sciences
//! humaines 141 (1998).
//!
//! A sequence is the code of a line when some EAF `f(x) = (a * x + r) / b`
//! has `code[x] = f(x + 1) - f(x)` for every index. The month lengths of
//! the shifted Gregorian year are the classic example:
//!
//! `[31, 30, 31, 30, 31, 31, 30, 31, 30, 31, 31, 30]` is the code of
//! `y = (153 * x + 2) / 5`.

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A line equation `y = (a * x + r) / b` recognized from a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display(fmt = "y = ({} * x + {}) / {}", a, r, b)]
pub struct Line {
    pub a: i32,
    pub b: i32,
    pub r: i32,
}

fn amplitude(code: &[i32]) -> i32 {
    let min = code.iter().min().copied().unwrap_or(0);
    let max = code.iter().max().copied().unwrap_or(0);
    max - min
}

fn has_at_most_two_consecutive(code: &[i32]) -> bool {
    amplitude(code) <= 1
}

fn is_constant(code: &[i32]) -> bool {
    amplitude(code) == 0
}

fn min_element(code: &[i32]) -> i32 {
    code.iter().min().copied().unwrap_or(0)
}

fn subtract_element(p: i32, code: &mut [i32]) {
    for y in code {
        *y -= p;
    }
}

/// True when the code has no two consecutive elements equal to 1.
fn is_one_isolated(code: &[i32]) -> bool {
    code.windows(2).all(|pair| pair[0] != 1 || pair[1] != 1)
}

/// Swaps the roles of 0 and 1. The code must be 0/1-valued.
fn swap_zeros_and_ones(code: &mut [i32]) {
    for y in code {
        *y = 1 - *y;
    }
}

/// Replaces a 0/1-valued code with the lengths of its plateaus, dropping
/// a leading run that carries no information, and returns the phase the
/// back substitution has to account for.
fn replace_with_lengths(code: &mut Vec<i32>) -> i32 {
    let size = code.len() as i32;

    let mut index_previous_one = -1;
    let mut first_length = -1;
    let mut n_plateaus = 0;
    let mut min_length = size; // stands in for +infinity

    for i in 0..size {
        if code[i as usize] == 1 {
            n_plateaus += 1;
            let length = i - index_previous_one;
            index_previous_one = i;
            if n_plateaus == 1 {
                first_length = length;
            } else if length > min_length {
                min_length = length;
            }
        }
    }
    let is_terminal = code.last() == Some(&0);
    n_plateaus += i32::from(is_terminal);
    let last_length = if is_terminal { size - index_previous_one } else { 0 };

    if n_plateaus > 2 {
        let mut lengths = Vec::new();

        let skip_first = first_length <= min_length;
        if !skip_first {
            lengths.push(first_length);
        }

        let mut index_previous_one = first_length - 1;
        for i in first_length..size {
            if code[i as usize] == 1 {
                lengths.push(i - index_previous_one);
                index_previous_one = i;
            }
        }

        if last_length > min_length {
            lengths.push(first_length);
        }

        *code = lengths;
        return if skip_first { first_length } else { 0 };
    }

    if n_plateaus == 1 || first_length >= last_length {
        code.truncate(1);
        code[0] = first_length;
        return 0;
    }

    code.truncate(1);
    code[0] = last_length;
    first_length
}

/// Runs Troesch's algorithm on a given code.
///
/// Repeatedly reduces the code (subtract the minimum, normalize isolated
/// ones, replace plateaus by their lengths) until it is constant, then
/// substitutes back through the recorded reduction steps. Returns `None`
/// for an empty code or one that is not the code of a line.
pub fn recognize_line(code: &[i32]) -> Option<Line> {
    if code.is_empty() {
        return None;
    }

    let mut c = code.to_vec();
    let mut p: Vec<i32> = Vec::new();
    let mut e: Vec<bool> = Vec::new();
    let mut g: Vec<i32> = Vec::new();
    let mut n = 0usize;

    fn grow(p: &mut Vec<i32>, e: &mut Vec<bool>, g: &mut Vec<i32>, n: usize) {
        p.resize(n + 1, 0);
        e.resize(n + 1, false);
        g.resize(n + 1, 0);
    }

    let mut is_line = has_at_most_two_consecutive(&c);
    while is_line && !is_constant(&c) {
        n += 1;
        grow(&mut p, &mut e, &mut g, n);
        p[n] = min_element(&c);
        subtract_element(p[n], &mut c);
        e[n] = !is_one_isolated(&c);
        if e[n] {
            n += 1;
            grow(&mut p, &mut e, &mut g, n);
            swap_zeros_and_ones(&mut c);
        }
        n += 1;
        grow(&mut p, &mut e, &mut g, n);
        g[n] = replace_with_lengths(&mut c);
        is_line = has_at_most_two_consecutive(&c);
    }

    if !is_line {
        return None;
    }

    let mut a = c[0];
    let mut b = 1;
    let mut r = 0;
    // Back substitution. Two corrections relative to the published
    // pseudo-code: the loop runs while n > 0, and the swap flag is read
    // at index n - 1.
    while n > 0 {
        n -= 1;
        std::mem::swap(&mut a, &mut b);
        r = a - 1 - r;
        r = (r - g[n + 1] * a).rem_euclid(b);
        if e[n - 1] {
            n -= 1;
            a = b - a;
            r = b - 1 - r;
        }
        n -= 1;
        a += p[n + 1] * b;
    }

    Some(Line { a, b, r })
}
