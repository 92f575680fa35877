//! WordNet-style noun dictionary over a hypernym graph.
//!
//! Two CSV files describe the dictionary: a synset file with lines
//! `id,noun1 noun2 ...,gloss` and a hypernym file with lines
//! `id,hypernym_id,...`. Synset ids must be the contiguous range `[0, V)` in
//! file order. The hypernym relation must form a rooted DAG; that is checked
//! once at construction, never by the query engine.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use log::info;

use crate::error::{HypernymError, Result};
use crate::graph::digraph::Digraph;
use crate::graph::validate;
use crate::sap::service::Sap;

/// A noun dictionary with semantic-distance queries.
///
/// Words map to the synsets containing them; distances between words are
/// shortest ancestral paths between their synset sets in the hypernym graph.
#[derive(Debug)]
pub struct WordNet {
    /// Noun -> ascending synset ids containing it
    nouns: AHashMap<String, Vec<usize>>,
    /// Synset id -> the synset's noun field
    synsets: Vec<String>,
    /// The single root of the hypernym graph
    root: usize,
    sap: Sap,
}

impl WordNet {
    /// Load a dictionary from synset and hypernym files.
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(synsets: P, hypernyms: Q) -> Result<Self> {
        let synset_file = File::open(synsets.as_ref())?;
        let hypernym_file = File::open(hypernyms.as_ref())?;
        Self::from_readers(BufReader::new(synset_file), BufReader::new(hypernym_file))
    }

    /// Build a dictionary from any pair of buffered readers.
    pub fn from_readers<R: BufRead, S: BufRead>(synsets: R, hypernyms: S) -> Result<Self> {
        let mut nouns: AHashMap<String, Vec<usize>> = AHashMap::new();
        let mut synset_table: Vec<String> = Vec::new();

        for (index, line) in synsets.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.splitn(3, ',');
            let id_field = fields.next().unwrap_or_default();
            let id = id_field.parse::<usize>().map_err(|_| {
                HypernymError::format(format!(
                    "synsets line {}: invalid synset id {:?}",
                    index + 1,
                    id_field
                ))
            })?;
            let words = fields.next().ok_or_else(|| {
                HypernymError::format(format!("synsets line {}: missing noun field", index + 1))
            })?;

            if id != synset_table.len() {
                return Err(HypernymError::format(format!(
                    "synsets line {}: expected id {}, got {}",
                    index + 1,
                    synset_table.len(),
                    id
                )));
            }

            for word in words.split_whitespace() {
                nouns.entry(word.to_string()).or_default().push(id);
            }
            synset_table.push(words.to_string());
        }

        let mut edges: Vec<(usize, usize)> = Vec::new();
        for (index, line) in hypernyms.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split(',');
            let id_field = fields.next().unwrap_or_default();
            let id = id_field.parse::<usize>().map_err(|_| {
                HypernymError::format(format!(
                    "hypernyms line {}: invalid synset id {:?}",
                    index + 1,
                    id_field
                ))
            })?;

            for target_field in fields {
                let target = target_field.parse::<usize>().map_err(|_| {
                    HypernymError::format(format!(
                        "hypernyms line {}: invalid hypernym id {:?}",
                        index + 1,
                        target_field
                    ))
                })?;
                edges.push((id, target));
            }
        }

        let graph = Digraph::from_edges(synset_table.len(), &edges)?;
        let root = validate::ensure_rooted_dag(&graph)?;

        info!(
            "loaded wordnet: {} synsets, {} nouns, {} hypernym edges, root {}",
            synset_table.len(),
            nouns.len(),
            graph.edge_count(),
            root
        );

        Ok(WordNet {
            nouns,
            synsets: synset_table,
            root,
            sap: Sap::new(graph),
        })
    }

    /// All nouns in the dictionary.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.nouns.keys().map(String::as_str)
    }

    /// The number of distinct nouns.
    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }

    /// Whether `word` is a dictionary noun.
    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains_key(word)
    }

    /// The noun field of a synset id.
    pub fn synset(&self, id: usize) -> Option<&str> {
        self.synsets.get(id).map(String::as_str)
    }

    /// The root synset id of the hypernym graph.
    pub fn root(&self) -> usize {
        self.root
    }

    /// The underlying SAP service.
    pub fn sap(&self) -> &Sap {
        &self.sap
    }

    /// Semantic distance between two nouns: the shortest ancestral path
    /// between their synset sets.
    ///
    /// Fails with `InvalidArgument` for an unknown noun.
    pub fn distance(&self, noun_a: &str, noun_b: &str) -> Result<usize> {
        let a = self.synset_ids(noun_a)?;
        let b = self.synset_ids(noun_b)?;

        match self.sap.set_length(a, b)? {
            Some(length) => Ok(length),
            // Unreachable after rooted-DAG validation
            None => Err(HypernymError::graph_shape(format!(
                "no common ancestor for {noun_a:?} and {noun_b:?} in a rooted graph"
            ))),
        }
    }

    /// The synset that is the common ancestor of two nouns on a shortest
    /// ancestral path.
    pub fn common_ancestor(&self, noun_a: &str, noun_b: &str) -> Result<&str> {
        let a = self.synset_ids(noun_a)?;
        let b = self.synset_ids(noun_b)?;

        let ancestor = match self.sap.set_ancestor(a, b)? {
            Some(ancestor) => ancestor,
            None => {
                return Err(HypernymError::graph_shape(format!(
                    "no common ancestor for {noun_a:?} and {noun_b:?} in a rooted graph"
                )));
            }
        };

        Ok(&self.synsets[ancestor])
    }

    fn synset_ids(&self, noun: &str) -> Result<&[usize]> {
        self.nouns
            .get(noun)
            .map(Vec::as_slice)
            .ok_or_else(|| HypernymError::invalid_argument(format!("unknown noun: {noun:?}")))
    }
}
