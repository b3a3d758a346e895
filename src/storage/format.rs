//! Line-oriented cluster list format.
//!
//! Version 1 looks like this:
//!
//! ```text
//! # clusters v1
//! C00129, C00341, C00353
//! C04146, C04216
//! ```
//!
//! One cluster per line, members separated by commas. Blank lines and `#`
//! comment lines are skipped. The header is optional on input and always
//! written on output.
//!
//! For older result files, a line may instead hold a bracketed list such as
//! `['C00129', 'C00341']` or `[C00129, C00341]`; members may be single- or
//! double-quoted or bare. A legacy line whose only member is empty, such as
//! `['']`, is refused with a parse error like any other empty member.

use crate::cluster::Cluster;
use crate::error::{Error, Result};
use std::iter::Peekable;
use std::str::Chars;

/// Header line identifying the current format version
pub const HEADER: &str = "# clusters v1";

const HEADER_PREFIX: &str = "# clusters";
const RESERVED: &[char] = &[',', '[', ']', '#', '\n', '\r'];

/// Parse every cluster in `text`
pub fn parse_clusters(text: &str) -> Result<Vec<Cluster>> {
    let mut clusters = Vec::new();
    let mut seen_content = false;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('#') {
            if !seen_content && line.starts_with(HEADER_PREFIX) && line != HEADER {
                return Err(Error::parse(
                    line_no,
                    format!("unsupported format header '{line}', expected '{HEADER}'"),
                ));
            }
            seen_content = true;
            continue;
        }
        seen_content = true;

        let members = if line.starts_with('[') {
            parse_bracketed(line, line_no)?
        } else {
            parse_delimited(line, line_no)?
        };
        clusters.push(Cluster::new(members));
    }

    Ok(clusters)
}

/// Parse a single cluster line (either form)
pub fn parse_cluster_line(line: &str) -> Result<Cluster> {
    let line = line.trim();
    let members = if line.starts_with('[') {
        parse_bracketed(line, 1)?
    } else {
        parse_delimited(line, 1)?
    };
    Ok(Cluster::new(members))
}

fn parse_delimited(line: &str, line_no: usize) -> Result<Vec<String>> {
    let mut members = Vec::new();
    for (position, member) in line.split(',').enumerate() {
        let member = member.trim();
        if member.is_empty() {
            return Err(Error::parse(
                line_no,
                format!("empty member at position {}", position + 1),
            ));
        }
        members.push(member.to_string());
    }
    Ok(members)
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

fn parse_quoted(chars: &mut Peekable<Chars<'_>>, quote: char, line_no: usize) -> Result<String> {
    let mut member = String::new();
    loop {
        match chars.next() {
            Some('\\') => match chars.next() {
                Some(escaped) => member.push(escaped),
                None => return Err(Error::parse(line_no, "unterminated quoted member")),
            },
            Some(c) if c == quote => return Ok(member),
            Some(c) => member.push(c),
            None => return Err(Error::parse(line_no, "unterminated quoted member")),
        }
    }
}

fn parse_bare(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut member = String::new();
    while let Some(&c) = chars.peek() {
        if c == ',' || c == ']' {
            break;
        }
        member.push(c);
        chars.next();
    }
    member.trim_end().to_string()
}

fn parse_bracketed(line: &str, line_no: usize) -> Result<Vec<String>> {
    let mut chars = line.chars().peekable();
    chars.next(); // '['

    let mut members = Vec::new();
    loop {
        skip_whitespace(&mut chars);
        let member = match chars.peek().copied() {
            None => return Err(Error::parse(line_no, "missing closing ']'")),
            Some(']') if members.is_empty() => {
                return Err(Error::parse(line_no, "cluster has no members"))
            }
            Some(q @ ('\'' | '"')) => {
                chars.next();
                parse_quoted(&mut chars, q, line_no)?
            }
            Some(_) => parse_bare(&mut chars),
        };
        if member.is_empty() {
            return Err(Error::parse(
                line_no,
                format!("empty member at position {}", members.len() + 1),
            ));
        }
        members.push(member);

        skip_whitespace(&mut chars);
        match chars.next() {
            Some(',') => continue,
            Some(']') => break,
            Some(c) => {
                return Err(Error::parse(
                    line_no,
                    format!("expected ',' or ']' but found '{c}'"),
                ))
            }
            None => return Err(Error::parse(line_no, "missing closing ']'")),
        }
    }

    let rest: String = chars.collect();
    if !rest.trim().is_empty() {
        return Err(Error::parse(
            line_no,
            format!("unexpected characters after ']': '{}'", rest.trim()),
        ));
    }
    Ok(members)
}

/// Parse a labeling: one label per line, line `i` labelling item `i`.
///
/// Surrounding whitespace is trimmed and trailing blank lines are ignored.
/// A blank line before the last label would shift every later item, so it
/// is a parse error.
pub fn parse_labels(text: &str) -> Result<Vec<String>> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let end = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(0, |last| last + 1);

    lines[..end]
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            if line.is_empty() {
                Err(Error::parse(idx + 1, "blank line in labeling"))
            } else {
                Ok(line.to_string())
            }
        })
        .collect()
}

fn check_member(member: &str) -> Result<()> {
    if member.is_empty() || member.trim() != member || member.contains(RESERVED) {
        return Err(Error::InvalidParameter {
            name: "member",
            message: format!("'{member}' cannot be written in the cluster format"),
        });
    }
    Ok(())
}

/// Render clusters in the version 1 format
pub fn format_clusters(clusters: &[Cluster]) -> Result<String> {
    let mut out = String::from(HEADER);
    out.push('\n');
    for cluster in clusters {
        for member in cluster.iter() {
            check_member(member)?;
        }
        out.push_str(&cluster.iter().collect::<Vec<_>>().join(", "));
        out.push('\n');
    }
    Ok(out)
}
