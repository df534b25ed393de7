//! Status vocabulary for terminal output.
//!
//! One canonical set of icons and colors used across all commands, so a
//! passed check, a completed challenge, and a pending one always look the
//! same wherever they appear.

use console::style;

/// Canonical status kinds used across Cairn output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Check passed / challenge completed.
    Pass,
    /// Check failed.
    Fail,
    /// Challenge not attempted or not completed.
    Pending,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pass => "✓",
            Self::Fail => "✗",
            Self::Pending => "◌",
        }
    }

    /// Styled icon string. `console` handles NO_COLOR and non-TTY output.
    pub fn styled(self) -> String {
        let icon = self.icon();
        match self {
            Self::Pass => style(icon).green().to_string(),
            Self::Fail => style(icon).red().to_string(),
            Self::Pending => style(icon).dim().to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn line(self, msg: &str) -> String {
        format!("{} {}", self.styled(), msg)
    }
}

/// Styled completion banner.
pub fn completed_banner() -> String {
    style("COMPLETED!").green().bold().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_are_distinct() {
        assert_ne!(StatusKind::Pass.icon(), StatusKind::Fail.icon());
        assert_ne!(StatusKind::Pass.icon(), StatusKind::Pending.icon());
    }

    #[test]
    fn line_contains_icon_and_message() {
        let line = StatusKind::Pass.line("Email Added");
        assert!(line.contains("✓"));
        assert!(line.contains("Email Added"));
    }

    #[test]
    fn banner_says_completed() {
        assert!(completed_banner().contains("COMPLETED!"));
    }
}
