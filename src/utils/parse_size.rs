/// Parses a byte size such as `"64"`, `"1k"`, `"4KB"` or `"2m"`.
///
/// Units are binary (`k` = 1024) and case-insensitive; a bare number is bytes.
///
/// # Examples
/// ```
/// use bplus_writer::utils::parse_size;
///
/// assert_eq!(parse_size("64"), Ok(64));
/// assert_eq!(parse_size("1k"), Ok(1024));
/// assert_eq!(parse_size(" 2MB "), Ok(2 * 1024 * 1024));
/// assert!(parse_size("12 parsecs").is_err());
/// ```
pub fn parse_size(size_str: &str) -> Result<u64, String> {
    let size_str = size_str.trim().to_lowercase();

    // Find the position where the numeric part ends
    let num_end = size_str
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(size_str.len());

    let (num_part, unit_part) = size_str.split_at(num_end);

    let multiplier: u64 = match unit_part.trim() {
        "" | "b" => 1,
        "k" | "kb" => 1024,
        "m" | "mb" => 1024 * 1024,
        "g" | "gb" => 1024 * 1024 * 1024,
        _ => return Err(format!("Invalid size unit: {}", unit_part)),
    };

    num_part
        .parse::<u64>()
        .map_err(|_| format!("Failed to parse size: {}", size_str))?
        .checked_mul(multiplier)
        .ok_or_else(|| format!("Size out of range: {}", size_str))
}
