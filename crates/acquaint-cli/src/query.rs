//! Batch query lines.
//!
//! Arguments use the roster separator so names and affiliations may
//! contain spaces:
//!
//! ```text
//! chain sam|aparna
//! cliques penn state
//! connectors
//! ```

use acquaint_graph::SocialGraph;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Chain { from: String, to: String },
    Cliques { affiliation: String },
    Connectors,
}

/// The answer to one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Chain(Option<Vec<String>>),
    Groups(Vec<Vec<String>>),
    Connectors(Vec<String>),
}

impl Query {
    /// Parses one line, `None` if it isn't a query.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map(|(command, rest)| (command, rest.trim()))
            .unwrap_or((line, ""));

        match command {
            "chain" => {
                let (from, to) = rest.split_once('|')?;
                let (from, to) = (from.trim(), to.trim());
                if from.is_empty() || to.is_empty() || to.contains('|') {
                    return None;
                }
                Some(Self::Chain {
                    from: from.to_string(),
                    to: to.to_string(),
                })
            }
            "cliques" if !rest.is_empty() => Some(Self::Cliques {
                affiliation: rest.to_string(),
            }),
            "connectors" if rest.is_empty() => Some(Self::Connectors),
            _ => None,
        }
    }

    pub fn run(&self, graph: &SocialGraph) -> Answer {
        match self {
            Self::Chain { from, to } => Answer::Chain(graph.shortest_chain(from, to)),
            Self::Cliques { affiliation } => Answer::Groups(graph.affiliation_groups(affiliation)),
            Self::Connectors => Answer::Connectors(graph.connectors()),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chain { from, to } => write!(f, "chain {}|{}", from, to),
            Self::Cliques { affiliation } => write!(f, "cliques {}", affiliation),
            Self::Connectors => write!(f, "connectors"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_queries() {
        assert_eq!(
            Query::parse("chain sam|aparna"),
            Some(Query::Chain {
                from: "sam".into(),
                to: "aparna".into()
            })
        );
        assert_eq!(
            Query::parse("  chain  mary jane | bob  "),
            Some(Query::Chain {
                from: "mary jane".into(),
                to: "bob".into()
            })
        );
        assert_eq!(
            Query::parse("cliques penn state"),
            Some(Query::Cliques {
                affiliation: "penn state".into()
            })
        );
        assert_eq!(Query::parse("connectors"), Some(Query::Connectors));
    }

    #[test]
    fn test_reject_malformed() {
        for line in [
            "",
            "chain",
            "chain sam",
            "chain sam|",
            "chain sam aparna",
            "chain a|b|c",
            "cliques",
            "connectors now",
            "friends sam",
        ] {
            assert_eq!(Query::parse(line), None, "{line:?}");
        }
    }

    #[test]
    fn test_display_parses_back() {
        for line in ["chain sam|aparna", "cliques penn state", "connectors"] {
            assert_eq!(Query::parse(line).unwrap().to_string(), line);
        }
    }

    #[test]
    fn test_answer_json_shape() {
        let chain = Answer::Chain(Some(vec!["a".into(), "b".into()]));
        assert_eq!(serde_json::to_value(&chain).unwrap(), serde_json::json!(["a", "b"]));
        assert_eq!(
            serde_json::to_value(Answer::Chain(None)).unwrap(),
            serde_json::Value::Null
        );
    }
}
