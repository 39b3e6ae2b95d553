//! CLI value enums and their conversions to library types.

use clap::ValueEnum;

use gridnav::EdgePolicy;

/// Edge policy for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolicyArg {
    /// Only feeds leaving an upstream node or the focal node
    FeedPath,
    /// Every feed between two displayed nodes
    Induced,
}

impl From<EdgePolicyArg> for EdgePolicy {
    fn from(arg: EdgePolicyArg) -> Self {
        match arg {
            EdgePolicyArg::FeedPath => Self::FeedPath,
            EdgePolicyArg::Induced => Self::Induced,
        }
    }
}

/// Output format for the layout command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl std::fmt::Display for OutputFormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_policy_arg_maps_to_library_policy() {
        assert_eq!(EdgePolicy::from(EdgePolicyArg::FeedPath), EdgePolicy::FeedPath);
        assert_eq!(EdgePolicy::from(EdgePolicyArg::Induced), EdgePolicy::Induced);
    }

    #[test]
    fn value_names_are_kebab_case() {
        let parsed = EdgePolicyArg::from_str("feed-path", false).unwrap();
        assert_eq!(parsed, EdgePolicyArg::FeedPath);
        assert_eq!(OutputFormatArg::from_str("json", true).unwrap(), OutputFormatArg::Json);
    }
}
