//! Shared range-validation helper.

use std::fmt::Display;
use std::ops::RangeInclusive;

/// Record an error unless `value` lies in `range`. NaN is never in range.
pub(crate) fn validate_range<T>(errors: &mut Vec<String>, name: &str, value: T, range: RangeInclusive<T>)
where
    T: PartialOrd + Display,
{
    if !range.contains(&value) {
        errors.push(format!(
            "{name} = {value} is out of range [{}, {}]",
            range.start(),
            range.end()
        ));
    }
}
