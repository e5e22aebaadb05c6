//! Argument registry: single source of truth for recognized flags.

use std::collections::HashMap;
use std::fmt;

use crate::args::action::Action;
use crate::args::error::ArgError;

/// A single argument declaration.
pub struct ArgumentSpec {
    /// Primary short form (e.g., "-c").
    pub short: String,
    /// Optional long alias (e.g., "--config-file").
    pub long: Option<String>,
    /// Exact number of value tokens consumed after the flag.
    pub arity: usize,
    /// Human-readable description for help output.
    pub help: String,
    pub(crate) action: Box<dyn Action>,
}

impl ArgumentSpec {
    /// Check if this spec answers to the given token.
    pub fn matches(&self, token: &str) -> bool {
        token == self.short || self.long.as_deref() == Some(token)
    }

    /// Flag column of the help listing, e.g. `-c, --config-file <VALUE>`.
    fn signature(&self) -> String {
        let mut signature = match &self.long {
            Some(long) => format!("{}, {}", self.short, long),
            None => self.short.clone(),
        };
        for _ in 0..self.arity {
            signature.push_str(" <VALUE>");
        }
        signature
    }
}

impl fmt::Debug for ArgumentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentSpec")
            .field("short", &self.short)
            .field("long", &self.long)
            .field("arity", &self.arity)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

/// Specs in registration order, indexed by every name they answer to.
#[derive(Debug, Default)]
pub struct Registry {
    specs: Vec<ArgumentSpec>,
    keys: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a spec under its short name and, if present, its long name.
    ///
    /// Nothing is inserted unless every key is valid and unused.
    pub fn insert(&mut self, spec: ArgumentSpec) -> Result<(), ArgError> {
        if spec.short.is_empty() || spec.long.as_deref() == Some("") {
            return Err(ArgError::InvalidName);
        }
        if let Some(taken) = self.conflicting_key(&spec) {
            return Err(ArgError::Duplicate { name: taken });
        }

        let index = self.specs.len();
        self.keys.insert(spec.short.clone(), index);
        if let Some(long) = &spec.long {
            self.keys.insert(long.clone(), index);
        }
        self.specs.push(spec);
        Ok(())
    }

    fn conflicting_key(&self, spec: &ArgumentSpec) -> Option<String> {
        if self.keys.contains_key(&spec.short) {
            return Some(spec.short.clone());
        }
        match &spec.long {
            Some(long) if long == &spec.short || self.keys.contains_key(long) => {
                Some(long.clone())
            }
            _ => None,
        }
    }

    /// Index of the spec registered under `token`, if any.
    pub fn lookup(&self, token: &str) -> Option<usize> {
        self.keys.get(token).copied()
    }

    pub fn get(&self, index: usize) -> Option<&ArgumentSpec> {
        self.specs.get(index)
    }

    /// Spec at an index previously returned by [`Registry::lookup`].
    pub(crate) fn spec_mut(&mut self, index: usize) -> &mut ArgumentSpec {
        &mut self.specs[index]
    }

    /// Specs in registration order.
    pub fn specs(&self) -> impl Iterator<Item = &ArgumentSpec> {
        self.specs.iter()
    }

    /// Number of distinct specs (aliases count once).
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Render a usage line plus one aligned row per spec.
    pub fn render_help(&self, program: &str) -> String {
        let rows: Vec<(String, &str)> = self
            .specs
            .iter()
            .map(|spec| (spec.signature(), spec.help.as_str()))
            .collect();
        let width = rows.iter().map(|(sig, _)| sig.len()).max().unwrap_or(0);

        let mut out = format!("Usage: {} [OPTIONS]\n\nOptions:\n", program);
        for (signature, help) in rows {
            out.push_str(&format!("  {:<width$}  {}\n", signature, help, width = width));
        }
        out
    }
}
