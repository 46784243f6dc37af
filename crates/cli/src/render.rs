//! Terminal rendering of candidate tables and status messages.

use candidate_model::{Candidate, CandidateId};
use colored::Colorize;
use std::collections::HashSet;

const MISSING: &str = "-";

/// Print a status message; success messages are green, the rest red.
pub fn print_message(message: &str, success: bool) {
    if success {
        println!("{}", message.green());
    } else {
        println!("{}", message.red());
    }
}

/// Print a candidate table, marking rows whose id is in `saved`.
pub fn print_candidates(
    title: &str,
    candidates: &[Candidate],
    saved: &HashSet<CandidateId>,
    empty_message: &str,
) {
    println!("{}", title.bold().blue());

    if candidates.is_empty() {
        println!("{}", empty_message);
        return;
    }

    println!(
        "{}",
        format!(
            "  {:>10}  {:<20} {:<22} {:<22} {:>6} {:>9}  {}",
            "ID", "Username", "Name", "Location", "Repos", "Followers", "Profile"
        )
        .bold()
    );
    for candidate in candidates {
        println!("{}", format_row(candidate, saved.contains(&candidate.id)));
    }
    println!("{} candidate(s)", candidates.len());
}

fn format_row(candidate: &Candidate, is_saved: bool) -> String {
    let marker = if is_saved { "★".yellow().to_string() } else { " ".to_string() };
    format!(
        "{} {:>10}  {:<20} {:<22} {:<22} {:>6} {:>9}  {}",
        marker,
        candidate.id,
        truncate(&candidate.login, 20),
        truncate(candidate.name.as_deref().unwrap_or(MISSING), 22),
        truncate(candidate.location.as_deref().unwrap_or(MISSING), 22),
        count(candidate.public_repos),
        count(candidate.followers),
        candidate.html_url
    )
}

fn count(value: Option<u64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |n| n.to_string())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("much too long", 5), "much…");
    }

    #[test]
    fn test_row_shows_missing_fields() {
        colored::control::set_override(false);
        let row = format_row(&Candidate::new(1, "octocat"), false);
        assert!(row.contains("octocat"));
        assert!(row.contains("https://github.com/octocat"));
        assert!(row.contains(MISSING));
    }
}
