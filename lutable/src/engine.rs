//! Sort engine: derives the display order of rows from the sort state.

use std::cmp::Ordering;

use crate::{Record, SortDirection, Value, compare_text};

/// Comparable form of a non-null value, computed once per row.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Int(i64),
    Float(f64),
    Text(String),
}

impl SortKey {
    fn of(value: &Value) -> SortKey {
        match value {
            Value::Int(n) => SortKey::Int(*n),
            Value::Float(n) => SortKey::Float(*n),
            other => SortKey::Text(other.to_string()),
        }
    }

    fn cmp(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => compare_floats(*a, *b),
            (SortKey::Int(a), SortKey::Float(b)) => compare_int_float(*a, *b),
            (SortKey::Float(a), SortKey::Int(b)) => compare_int_float(*b, *a).reverse(),
            (SortKey::Text(a), SortKey::Text(b)) => compare_text(a, b),
            // Mixed columns: numbers before everything else.
            (_, SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), _) => Ordering::Greater,
        }
    }
}

/// `-0.0` equals `0.0`; NaN falls back to the IEEE total order.
fn compare_floats(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Exact comparison of an integer with a float, without rounding the integer.
fn compare_int_float(i: i64, f: f64) -> Ordering {
    // 2^63, the first float above every i64.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return (i as f64).total_cmp(&f);
    }
    if f >= LIMIT {
        return Ordering::Less;
    }
    if f < -LIMIT {
        return Ordering::Greater;
    }

    let whole = f.trunc();
    // Same integer part: the fraction decides.
    i.cmp(&(whole as i64))
        .then_with(|| whole.partial_cmp(&f).unwrap_or(Ordering::Equal))
}

/// Ascending order of two defined values.
///
/// Integers compare exactly, floats and mixed int/float pairs by value
/// (`-0.0` equals `0.0`). Everything else compares by its display string
/// with [`compare_text`]. A number sorts before any non-number.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    SortKey::of(a).cmp(&SortKey::of(b))
}

/// Display order of `rows` as indices into the input slice.
///
/// Returns the identity order when `direction` is [`SortDirection::None`] or
/// there is no `field` to read. The sort is stable, and rows whose field is
/// null or missing always come last, whichever the direction.
pub fn sort_indices<R: Record>(
    rows: &[R],
    field: Option<&str>,
    direction: SortDirection,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();

    let Some(field) = field else { return order };
    let descending = match direction {
        SortDirection::None => return order,
        SortDirection::Ascending => false,
        SortDirection::Descending => true,
    };

    let keys: Vec<Option<SortKey>> = rows
        .iter()
        .map(|row| row.field(field).filter(|v| !v.is_null()).map(|v| SortKey::of(&v)))
        .collect();

    order.sort_by(|&a, &b| match (&keys[a], &keys[b]) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(ka), Some(kb)) => {
            let ord = ka.cmp(kb);
            if descending { ord.reverse() } else { ord }
        }
    });

    log::trace!(
        "[engine] sorted {} rows by {} ({:?})",
        rows.len(),
        field,
        direction
    );
    order
}

/// References to `rows` in display order. The input is left untouched.
pub fn sort_rows<'a, R: Record>(
    rows: &'a [R],
    field: Option<&str>,
    direction: SortDirection,
) -> Vec<&'a R> {
    sort_indices(rows, field, direction)
        .into_iter()
        .map(|i| &rows[i])
        .collect()
}
