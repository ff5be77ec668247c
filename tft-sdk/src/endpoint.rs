pub const SUMMONER_PREFIX: &str = "/tft/summoner/v1/summoners/";
pub const RANKED_PREFIX: &str = "/tft/league/v1/";
pub const MATCH_PREFIX: &str = "/tft/match/v1/matches/";

/// Joins path segments with `/` and cleans the result.
///
/// Empty and `.` elements are dropped, runs of separators collapse to one,
/// `..` removes the preceding element and a trailing separator is stripped.
/// A result rooted at `/` stays rooted and `..` never climbs above the root.
/// Joining only empty segments yields an empty string.
pub fn join(segments: &[&str]) -> String {
    let rooted = match segments.iter().find(|s| !s.is_empty()) {
        Some(first) => first.starts_with('/'),
        None => return String::new(),
    };

    let mut parts: Vec<&str> = Vec::new();
    for part in segments.iter().flat_map(|s| s.split('/')) {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(".."),
            },
            part => parts.push(part),
        }
    }

    let path = parts.join("/");
    match (rooted, path.is_empty()) {
        (true, _) => format!("/{path}"),
        (false, true) => ".".to_string(),
        (false, false) => path,
    }
}
