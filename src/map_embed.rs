//! Turns the map links people paste into the form into something that can be
//! used as an `<iframe>` source.
//!
//! Map URLs come in many shapes and the embed format is not documented, so the
//! rewrite is best effort: every input yields some string, and anything we
//! cannot make sense of is passed through untouched.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

const EMBED_MARKER: &str = "/embed";
const EMBED_HOST: &str = "www.google.com/maps/embed";
const SHORT_LINK_MARKER: &str = "goo.gl";
const SHORT_LINK_HOSTS: &[&str] = &["maps.app.goo.gl", "goo.gl/maps"];
const FALLBACK_PB_PREFIX: &str = "?pb=!1m18!1m12!1m3!1d&";

static COORDINATES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(-?[0-9]+\.[0-9]+),(-?[0-9]+\.[0-9]+)").expect("valid coordinate regex"));

/// Rewrites `map_link` into an embeddable URL, falling back to the input.
pub fn embed_url(map_link: &str) -> String {
    if map_link.contains(EMBED_MARKER) {
        return map_link.to_string();
    }

    if Url::parse(map_link).is_err() {
        return map_link.to_string();
    }

    if let Some(caps) = COORDINATES.captures(map_link) {
        return coordinate_embed(&caps[1], &caps[2]);
    }

    if map_link.contains(SHORT_LINK_MARKER) {
        return SHORT_LINK_HOSTS
            .iter()
            .fold(map_link.to_string(), |link, host| {
                link.replacen(host, EMBED_HOST, 1)
            });
    }

    // The resulting URL is not guaranteed to load; it is kept as-is because
    // it is still closer to an embed than the original link.
    map_link
        .replacen("/maps/", "/maps/embed/", 1)
        .replacen('?', "&", 1)
        .replacen('&', FALLBACK_PB_PREFIX, 1)
}

// The place id segment (`1s0x0%3A0x0`) is a placeholder, the map centers on
// the coordinates alone.
fn coordinate_embed(lat: &str, lng: &str) -> String {
    format!(
        "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3024.2219901290355!2d{lng}!3d{lat}\
         !2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zM!5e0!3m2!1sen!2s\
         !4v1234567890123!5m2!1sen!2s"
    )
}
