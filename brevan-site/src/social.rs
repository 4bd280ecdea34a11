//! Social profile anchors.

use serde::{Deserialize, Serialize};

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/maisonbrevan/";
pub const FACEBOOK_URL: &str =
    "https://www.facebook.com/profile.php?id=61585826054527";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialNetwork {
    Instagram,
    Facebook,
}

impl SocialNetwork {
    /// `aria-label` identifying the icon anchor.
    pub const fn aria_label(self) -> &'static str {
        match self {
            SocialNetwork::Instagram => "Instagram",
            SocialNetwork::Facebook => "Facebook",
        }
    }

    pub fn from_aria_label(label: &str) -> Option<Self> {
        match label {
            "Instagram" => Some(SocialNetwork::Instagram),
            "Facebook" => Some(SocialNetwork::Facebook),
            _ => None,
        }
    }
}

/// Attributes written onto a social icon anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialAnchor {
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialLinks {
    pub instagram: String,
    pub facebook: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            instagram: INSTAGRAM_URL.to_string(),
            facebook: FACEBOOK_URL.to_string(),
        }
    }
}

impl SocialLinks {
    pub fn href(&self, network: SocialNetwork) -> &str {
        match network {
            SocialNetwork::Instagram => &self.instagram,
            SocialNetwork::Facebook => &self.facebook,
        }
    }

    /// Replacement attributes for an anchor with the given `aria-label`;
    /// `None` for anchors that are not social icons.
    pub fn rewrite(&self, aria_label: &str) -> Option<SocialAnchor> {
        let network = SocialNetwork::from_aria_label(aria_label)?;
        Some(SocialAnchor {
            href: self.href(network).to_string(),
            target: "_blank",
            rel: "noopener",
        })
    }
}
