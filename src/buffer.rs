use crate::config::InputFormat;
use crate::system::Result;
use regex::Regex;

/// Turns file contents into packet bytes. Hex dumps are pairs of hex digits;
/// whitespace is ignored and `#` starts a comment running to the end of the line.
pub fn load_packet(contents: Vec<u8>, format: InputFormat) -> Result<Vec<u8>> {
    match format {
        InputFormat::Binary => Ok(contents),
        InputFormat::Hex => parse_hex_dump(&String::from_utf8(contents)?),
    }
}

fn parse_hex_dump(text: &str) -> Result<Vec<u8>> {
    let comment = Regex::new(r"#[^\n]*")?;
    let space = Regex::new(r"\s+")?;
    let digits = space.replace_all(&comment.replace_all(text, ""), "").into_owned();
    let pairs = Regex::new(r"^(?:[0-9a-fA-F]{2})*$")?;
    if !pairs.is_match(&digits) {
        return Err("hex dump must hold an even number of hex digits".into());
    }
    let mut bytes = Vec::with_capacity(digits.len() / 2);
    for i in (0..digits.len()).step_by(2) {
        bytes.push(u8::from_str_radix(&digits[i..i + 2], 16)?);
    }
    Ok(bytes)
}
