use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|source| InternalError::ParseStringId { value, source })?;

    Ok(result)
}

/// Parses a Discord snowflake from String, rejecting zero.
///
/// Serenity id types cannot hold zero, so this must be checked before constructing
/// a `GuildId`, `ChannelId` or `RoleId` from untrusted input.
///
/// # Returns
/// - `Ok(u64)` - A non-zero id
/// - `Err(AppError::InternalErr(ParseStringId))` - Not a number
/// - `Err(AppError::InternalErr(ZeroId))` - Parsed as zero
pub fn parse_snowflake(value: String) -> Result<u64, AppError> {
    let id = parse_u64_from_string(value.trim().to_string())?;

    if id == 0 {
        return Err(InternalError::ZeroId(value).into());
    }

    Ok(id)
}

/// Truncates a string to at most `max_chars` characters.
///
/// Counts Unicode scalar values rather than bytes so multi-byte text such as
/// Japanese or emoji is never split in the middle of a code point.
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &value[..byte_index],
        None => value,
    }
}
