//! Message composer: turns an [`OutreachInput`] into the outreach message.
//!
//! Everything here is a pure function over strings. A field counts as
//! present when it is non-empty; whitespace is not trimmed from single-line
//! fields.

use crate::domain::model::{ComposedMessage, OutreachInput, DEFAULT_SIGNATURE};

const CLOSING: &str =
    "Worth a quick chat to see if a focused reactivation pass fits your calendar?";

pub const HIGHLIGHTS_HINT: &str =
    "Add one or two notable details above to keep the outreach warm and specific.";

/// Splits the observations text into trimmed, non-empty lines, in order.
pub fn normalize_observations(observations_text: &str) -> Vec<String> {
    observations_text
        .split('\n')
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn fragment(prefix: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!(" {} {}", prefix, value)
    }
}

/// First body sentence. Business name wins over niche, niche over the
/// generic fallback.
pub fn build_acknowledgment(
    _owner_name: &str,
    business_name: &str,
    niche: &str,
    city: &str,
) -> String {
    let city_fragment = fragment("in", city);

    if !business_name.is_empty() {
        return format!(
            "I’ve been hearing strong things about the way you run {}{}. It stands out how much care you put into the day-to-day.",
            business_name, city_fragment
        );
    }

    if !niche.is_empty() {
        return format!(
            "I’ve been following how {} teams like yours show up{}—it’s clear the hours you’ve invested.",
            niche.to_lowercase(),
            city_fragment
        );
    }

    format!(
        "I’ve been speaking with owners{} who share the same dedication you do.",
        city_fragment
    )
}

/// References at most the first two observations; the rest are dropped.
pub fn build_observation(observations: &[String]) -> String {
    match observations {
        [] => "While reviewing your online presence, I kept coming back to how much potential there is inside the list of people who already raised their hands.".to_string(),
        [primary] => format!(
            "I noticed {}, which usually means there’s an opportunity to reconnect with people who spoke with you but haven’t converted yet.",
            primary.to_lowercase()
        ),
        [primary, secondary, ..] => format!(
            "I noticed {} and also saw {}. That combination usually signals there’s untapped value sitting in earlier inquiries.",
            primary.to_lowercase(),
            secondary.to_lowercase()
        ),
    }
}

pub fn build_value_proposition(niche: &str, city: &str, observations: &[String]) -> String {
    let vertical = if niche.is_empty() {
        "local teams".to_string()
    } else {
        niche.to_lowercase()
    };
    let city_fragment = fragment("around", city);
    let observation_tail = if observations.is_empty() {
        "without turning to ad spend or heavy discounts"
    } else {
        "without needing to spin up new ads"
    };

    format!(
        "I’m working with {}{} on Reactivation and Client Retention programs that prioritize the people who already reached out but never made it in. \
We map a two-week Optimization sprint that revives dormant conversations {}. \
The response rates this month have been strong, even from folks we last heard from six to nine months ago.",
        vertical, city_fragment, observation_tail
    )
}

fn render(input: &OutreachInput, observations: &[String]) -> String {
    let subject_name = if input.owner_name.is_empty() {
        "there"
    } else {
        input.owner_name.as_str()
    };
    let business_label = fragment("regarding", &input.business_name);
    let signature = if input.signature.is_empty() {
        DEFAULT_SIGNATURE
    } else {
        input.signature.as_str()
    };

    [
        format!("Hi {}, quick question{}.", subject_name, business_label),
        String::new(),
        build_acknowledgment(
            &input.owner_name,
            &input.business_name,
            &input.niche,
            &input.city,
        ),
        build_observation(observations),
        build_value_proposition(&input.niche, &input.city, observations),
        CLOSING.to_string(),
        String::new(),
        format!("Best,\n{}", signature),
    ]
    .join("\n")
}

/// Renders the full outreach message. Never fails; every field has a default.
pub fn generate_message(input: &OutreachInput) -> String {
    let observations = normalize_observations(&input.observations_text);
    render(input, &observations)
}

/// Message plus the normalized observations, computed in one pass.
pub fn compose(input: &OutreachInput) -> ComposedMessage {
    let observations = normalize_observations(&input.observations_text);
    let message = render(input, &observations);
    ComposedMessage {
        message,
        observations,
    }
}

/// Numbered list of every observation, or a hint when there are none.
pub fn render_highlights(observations: &[String]) -> String {
    if observations.is_empty() {
        return HIGHLIGHTS_HINT.to_string();
    }
    observations
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{}. {}", index + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}
