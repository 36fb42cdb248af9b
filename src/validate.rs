//! Argument checks run before any request is sent.

use crate::{Error, Result};

/// Rejects blank strings.
pub(crate) fn require(argument: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument {
            argument,
            reason: format!("{} is required", argument),
        });
    }
    Ok(())
}

/// Rejects blank strings and dot segments, for values placed in the URL path.
pub(crate) fn require_segment(argument: &'static str, value: &str) -> Result<()> {
    require(argument, value)?;
    if value == "." || value == ".." {
        return Err(Error::InvalidArgument {
            argument,
            reason: format!("`{}` is not a valid {}", value, argument),
        });
    }
    Ok(())
}

pub(crate) fn require_instance(instance_name: &str) -> Result<()> {
    require_segment("instanceName", instance_name)
}

/// Rejects empty collections.
pub(crate) fn require_items<T>(argument: &'static str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(Error::MissingArgument { argument });
    }
    Ok(())
}
