/// Where the contact form posts. `CONTACT_ENDPOINT` at build time wins over the defaults.
pub fn contact_endpoint() -> &'static str {
    option_env!("CONTACT_ENDPOINT").unwrap_or(default_endpoint())
}

#[cfg(debug_assertions)]
fn default_endpoint() -> &'static str {
    "http://localhost:3001/api/contact"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
fn default_endpoint() -> &'static str {
    "https://your-backend.example.com/api/contact"  // Replace with the real endpoint
}

/// Timing policy for the page. Tests and embedders pass shorter values.
#[derive(Clone, Debug, PartialEq)]
pub struct Timings {
    /// How long the splash overlay stays before content is revealed.
    pub splash_ms: u32,
    /// Minimum intersection ratio for a section to count as visible.
    pub visibility_threshold: f64,
    /// Delay before a success/error notice goes back to idle.
    pub status_reset_ms: u32,
    /// Ratio at which a `reveal` block fades up.
    pub reveal_threshold: f64,
    /// Hero parallax: scroll progress at which the offset maxes out, and that offset in px.
    pub parallax_until: f64,
    pub parallax_offset_px: f64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            splash_ms: 2_400,
            visibility_threshold: 0.35,
            status_reset_ms: 4_000,
            reveal_threshold: 0.4,
            parallax_until: 0.3,
            parallax_offset_px: -60.0,
        }
    }
}

impl Timings {
    /// Hero offset for a scroll progress in `0.0..=1.0`, clamped past `parallax_until`.
    pub fn parallax_at(&self, progress: f64) -> f64 {
        if self.parallax_until <= 0.0 {
            return 0.0;
        }
        let t = (progress / self.parallax_until).clamp(0.0, 1.0);
        t * self.parallax_offset_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_policy() {
        let t = Timings::default();
        assert_eq!(t.splash_ms, 2_400);
        assert_eq!(t.status_reset_ms, 4_000);
        assert!((t.visibility_threshold - 0.35).abs() < f64::EPSILON);
    }

    #[test]
    fn parallax_interpolates_and_clamps() {
        let t = Timings::default();
        assert_eq!(t.parallax_at(0.0), 0.0);
        assert!((t.parallax_at(0.15) + 30.0).abs() < 1e-9);
        assert_eq!(t.parallax_at(0.3), -60.0);
        assert_eq!(t.parallax_at(0.9), -60.0);
        assert_eq!(t.parallax_at(-1.0), 0.0);
    }

    #[test]
    fn endpoint_is_never_empty() {
        assert!(!contact_endpoint().is_empty());
    }
}
