// Application layer: the mining run, from raw text to persisted tree.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::api::TreeDocument;
use crate::config::Config;
use crate::domain::matcher::{unique_matches, RawMatcher};
use crate::domain::tokenizer::Tokenizer;
use crate::domain::{split_nested, CallTree, MineError, Result, TokenSequence};
use crate::ports::{TextSource, TreeExporter};

/// Counts observed at each stage of a run, plus the finished document.
#[derive(Debug, Clone)]
pub struct MiningReport {
    pub pattern: String,
    pub total_matches: usize,
    pub unique_matches: usize,
    pub unique_chains: usize,
    pub unique_methods: usize,
    pub output: PathBuf,
    /// Set when the document could not be written. The run still succeeds.
    pub persist_error: Option<String>,
    pub document: TreeDocument,
}

/// The main usecase: read text, mine chains, build the tree and export it.
pub struct MineUsecase<'a> {
    pub source: &'a dyn TextSource,
    pub exporter: &'a dyn TreeExporter,
}

impl<'a> MineUsecase<'a> {
    pub fn run(&self, config: &Config) -> Result<MiningReport> {
        let text = self.source.read_text()?;
        let mut report = mine(&text, config)?;

        if let Err(e) = self.exporter.export(&report.document, &config.output) {
            error!(path = %config.output.display(), error = %e, "failed to write method tree");
            report.persist_error = Some(e.to_string());
        }

        Ok(report)
    }
}

/// Run the pipeline over already-buffered text. Nothing is persisted.
pub fn mine(text: &str, config: &Config) -> Result<MiningReport> {
    let matcher = RawMatcher::new(&config.identifier)?;
    let tokenizer = Tokenizer::new(&config.identifier)?;
    let identifier = tokenizer.identifier().clone();

    let matches = matcher.find_all(text);
    info!(pattern = matcher.pattern(), count = matches.len(), "raw matches");
    if matches.is_empty() {
        return Err(MineError::NoMatches {
            pattern: matcher.pattern().to_string(),
        });
    }

    let unique = unique_matches(&matches);
    info!(count = unique.len(), "unique raw matches");

    let chains = unique_chains(
        unique
            .iter()
            .map(|raw| tokenizer.tokenize(raw))
            .flat_map(|tokens| split_nested(tokens, &identifier)),
    );
    info!(count = chains.len(), "unique chains");

    let tree = CallTree::aggregate(&chains);
    let unique_methods = tree.count_nodes();
    info!(count = unique_methods, "unique methods");

    Ok(MiningReport {
        pattern: matcher.pattern().to_string(),
        total_matches: matches.len(),
        unique_matches: unique.len(),
        unique_chains: chains.len(),
        unique_methods,
        output: config.output.clone(),
        persist_error: None,
        document: TreeDocument::new(identifier, tree),
    })
}

/// Structural dedup of flattened chains, keeping first-seen order.
fn unique_chains<I>(chains: I) -> Vec<TokenSequence>
where
    I: IntoIterator<Item = TokenSequence>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for chain in chains {
        if chain.is_empty() {
            continue;
        }
        if seen.insert(chain.clone()) {
            debug!(chain = %chain, "chain");
            out.push(chain);
        }
    }
    out
}
