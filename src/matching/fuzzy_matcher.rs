//! Fuzzy matching implementation for contact search.
//!
//! This module provides contact matching with:
//! - Exact matching on email and phone
//! - Fuzzy name matching against the full, first and last name
//! - Confidence scoring (0-100 scale)

use crate::error::{MatchingError, MatchingResult};
use crate::models::Contact;

/// A match result borrowing the matched contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// The matched contact
    pub contact: &'a Contact,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Exact email match
    ExactEmail,

    /// Exact phone match
    ExactPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Search query parameters for contact matching.
#[derive(Debug, Clone, Default)]
pub struct ContactQuery {
    /// Name to search for
    pub name: Option<String>,

    /// Email to search for
    pub email: Option<String>,

    /// Phone number to search for
    pub phone: Option<String>,
}

impl ContactQuery {
    /// Query by name only.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    fn is_blank(&self) -> bool {
        [&self.name, &self.email, &self.phone]
            .iter()
            .all(|v| v.as_deref().map_or(true, |s| s.trim().is_empty()))
    }
}

/// Contact matcher with fuzzy and exact matching capabilities.
#[derive(Debug, Default)]
pub struct ContactMatcher;

impl ContactMatcher {
    /// Create a new ContactMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find matching contacts from a list based on the search query.
    ///
    /// # Arguments
    /// * `query` - Search parameters (name, email, phone)
    /// * `contacts` - Contacts to search through
    /// * `max_results` - Maximum number of results to return
    /// * `min_confidence` - Minimum confidence threshold for fuzzy matches (0-100)
    ///
    /// # Returns
    /// Matches sorted by confidence (highest first), then by full name.
    ///
    /// # Errors
    /// Returns `MatchingError::InvalidQuery` when every query field is blank.
    pub fn find_matches<'a>(
        &self,
        query: &ContactQuery,
        contacts: &'a [Contact],
        max_results: usize,
        min_confidence: u8,
    ) -> MatchingResult<Vec<MatchResult<'a>>> {
        if query.is_blank() {
            return Err(MatchingError::InvalidQuery(
                "at least one of name, email or phone is required".to_string(),
            ));
        }

        let mut results: Vec<MatchResult<'a>> = Vec::new();

        for contact in contacts {
            if let Some(email) = &query.email {
                if Self::normalize_email(email) == Self::normalize_email(contact.email()) {
                    results.push(MatchResult {
                        contact,
                        confidence: 100,
                        match_type: MatchType::ExactEmail,
                    });
                    continue;
                }
            }

            if let Some(phone) = &query.phone {
                if Self::normalize_phone(phone) == contact.phone() {
                    results.push(MatchResult {
                        contact,
                        confidence: 100,
                        match_type: MatchType::ExactPhone,
                    });
                    continue;
                }
            }

            if let Some(name) = &query.name {
                if let Some(confidence) = Self::fuzzy_match_name(name, contact) {
                    if confidence >= min_confidence {
                        results.push(MatchResult {
                            contact,
                            confidence,
                            match_type: MatchType::FuzzyName,
                        });
                    }
                }
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.contact.full_name().cmp(&b.contact.full_name()))
        });
        results.truncate(max_results);

        Ok(results)
    }

    /// Best fuzzy score of `query` against the full, first and last name.
    fn fuzzy_match_name(query: &str, contact: &Contact) -> Option<u8> {
        let query = Self::normalize_name(query);

        let score = [
            contact.full_name(),
            contact.first_name().to_string(),
            contact.last_name().to_string(),
        ]
        .iter()
        .map(|candidate| Self::calculate_fuzzy_score(&query, &Self::normalize_name(candidate)))
        .max()
        .unwrap_or(0);

        (score > 0).then_some(score)
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for exact matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        if target.contains(query) {
            let ratio = query.len() as f64 / target.len() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }

    /// Normalize an email address for comparison.
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Normalize a phone number for comparison.
    ///
    /// Keeps only digits, then the last 10 (drops a country code).
    pub fn normalize_phone(phone: &str) -> String {
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() > 10 {
            digits[digits.len() - 10..].to_string()
        } else {
            digits
        }
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
