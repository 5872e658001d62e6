//! Version suggestion from the latest tag

use std::sync::OnceLock;

use regex::Regex;

use crate::error::FlowResult;
use crate::ui::Ui;

use super::core::Workflow;

/// Which version component a new branch bumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bump {
    /// Releases bump the minor version and reset the patch.
    Release,
    /// Hotfixes bump the patch version.
    Hotfix,
}

fn semver_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)\.(\d+)\.(\d+)$").unwrap())
}

/// Derive the next version from the latest tag.
///
/// The configured tag prefix is stripped before matching; anything that is
/// not plain `MAJOR.MINOR.PATCH` after that (or the absence of any tag)
/// yields `0.0.0` so the user always gets an editable suggestion.
pub fn guess_new_version(latest: Option<&str>, tag_prefix: &str, bump: Bump) -> String {
    let Some(latest) = latest else {
        return "0.0.0".to_string();
    };
    let bare = if !tag_prefix.is_empty() {
        latest.replacen(tag_prefix, "", 1)
    } else {
        latest.to_string()
    };

    let Some(caps) = semver_re().captures(&bare) else {
        return "0.0.0".to_string();
    };
    // The regex only admits digit runs, so these parses cannot fail for
    // values within u64 range.
    let major: u64 = caps[1].parse().unwrap_or(0);
    let minor: u64 = caps[2].parse().unwrap_or(0);
    let patch: u64 = caps[3].parse().unwrap_or(0);

    match bump {
        Bump::Release => format!("{major}.{}.0", minor + 1),
        Bump::Hotfix => format!("{major}.{minor}.{}", patch + 1),
    }
}

impl<U: Ui> Workflow<U> {
    /// Suggest a name for a new release/hotfix branch from the latest tag.
    pub fn suggest_version(&self, bump: Bump) -> FlowResult<String> {
        let cfg = self.require_enabled()?;
        let latest = self.git.latest_tag()?;
        Ok(guess_new_version(latest.as_deref(), &cfg.tag_prefix, bump))
    }
}
